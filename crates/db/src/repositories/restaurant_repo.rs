//! Repository for the `restaurants` table.

use lunchpick_core::restaurant::{NewRestaurant, RestaurantPatch};
use lunchpick_core::types::EntityId;
use sqlx::PgPool;

use crate::models::restaurant::RestaurantRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, address, price_level, distance_minutes, cuisine_type, \
    speed, maps_url, internal_notes, created_at, updated_at";

/// Provides CRUD operations for restaurants.
pub struct RestaurantRepo;

impl RestaurantRepo {
    /// Insert a new restaurant, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewRestaurant) -> Result<RestaurantRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO restaurants
                (name, address, price_level, distance_minutes, cuisine_type, speed,
                 maps_url, internal_notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RestaurantRow>(&query)
            .bind(input.name.trim())
            .bind(input.address.trim())
            .bind(input.price_level.as_str())
            .bind(input.distance_minutes)
            .bind(input.cuisine_type.trim())
            .bind(input.speed.as_str())
            .bind(&input.maps_url)
            .bind(&input.internal_notes)
            .fetch_one(pool)
            .await
    }

    /// Find a restaurant by its ID.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<RestaurantRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM restaurants WHERE id = $1");
        sqlx::query_as::<_, RestaurantRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all restaurants ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<RestaurantRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM restaurants ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, RestaurantRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a restaurant. Only non-`None` fields in `input` are applied.
    /// `maps_url` and `internal_notes` are set whenever present, which may
    /// clear them.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: EntityId,
        input: &RestaurantPatch,
    ) -> Result<Option<RestaurantRow>, sqlx::Error> {
        let maps_url_provided = input.maps_url.is_some();
        let maps_url_value = input.maps_url.as_ref().and_then(|v| v.as_deref());
        let notes_provided = input.internal_notes.is_some();
        let notes_value = input.internal_notes.as_ref().and_then(|v| v.as_deref());

        let query = format!(
            "UPDATE restaurants SET
                name = COALESCE($2, name),
                address = COALESCE($3, address),
                price_level = COALESCE($4, price_level),
                distance_minutes = COALESCE($5, distance_minutes),
                cuisine_type = COALESCE($6, cuisine_type),
                speed = COALESCE($7, speed),
                maps_url = CASE WHEN $8 THEN $9 ELSE maps_url END,
                internal_notes = CASE WHEN $10 THEN $11 ELSE internal_notes END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RestaurantRow>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(input.address.as_deref().map(str::trim))
            .bind(input.price_level.map(|p| p.as_str()))
            .bind(input.distance_minutes)
            .bind(input.cuisine_type.as_deref().map(str::trim))
            .bind(input.speed.map(|s| s.as_str()))
            .bind(maps_url_provided)
            .bind(maps_url_value)
            .bind(notes_provided)
            .bind(notes_value)
            .fetch_optional(pool)
            .await
    }

    /// Delete a restaurant by ID. Votes cascade. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM restaurants WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
