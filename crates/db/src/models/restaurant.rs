//! Restaurant row model.

use lunchpick_core::error::CoreError;
use lunchpick_core::restaurant::Restaurant;
use lunchpick_core::types::{EntityId, Timestamp};
use sqlx::FromRow;

/// A row from the `restaurants` table.
///
/// `price_level` and `speed` are stored as their wire names and parsed on
/// conversion.
#[derive(Debug, Clone, FromRow)]
pub struct RestaurantRow {
    pub id: EntityId,
    pub name: String,
    pub address: String,
    pub price_level: String,
    pub distance_minutes: i32,
    pub cuisine_type: String,
    pub speed: String,
    pub maps_url: Option<String>,
    pub internal_notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<RestaurantRow> for Restaurant {
    type Error = CoreError;

    fn try_from(row: RestaurantRow) -> Result<Self, Self::Error> {
        Ok(Restaurant {
            id: row.id,
            name: row.name,
            address: row.address,
            price_level: row.price_level.parse()?,
            distance_minutes: row.distance_minutes,
            cuisine_type: row.cuisine_type,
            speed: row.speed.parse()?,
            maps_url: row.maps_url,
            internal_notes: row.internal_notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
