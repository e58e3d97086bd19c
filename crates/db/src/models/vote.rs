//! Vote row model.

use lunchpick_core::types::{EntityId, Timestamp};
use lunchpick_core::vote::Vote;
use sqlx::FromRow;

/// A row from the `votes` table.
#[derive(Debug, Clone, FromRow)]
pub struct VoteRow {
    pub id: EntityId,
    pub restaurant_id: EntityId,
    pub user_name: String,
    pub score_overall: Option<i16>,
    pub score_food: i16,
    pub score_quantity: i16,
    pub score_price: i16,
    pub score_ambience: i16,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

impl From<VoteRow> for Vote {
    fn from(row: VoteRow) -> Self {
        Vote {
            id: row.id,
            restaurant_id: row.restaurant_id,
            user_name: row.user_name,
            score_overall: row.score_overall,
            score_food: row.score_food,
            score_quantity: row.score_quantity,
            score_price: row.score_price,
            score_ambience: row.score_ambience,
            comment: row.comment,
            created_at: row.created_at,
        }
    }
}
