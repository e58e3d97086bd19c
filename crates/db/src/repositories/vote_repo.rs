//! Repository for the `votes` table.

use lunchpick_core::types::{EntityId, Timestamp};
use lunchpick_core::vote::NewVote;
use sqlx::PgPool;

use crate::models::vote::VoteRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, restaurant_id, user_name, score_overall, score_food, \
    score_quantity, score_price, score_ambience, comment, created_at";

/// Provides append and read operations for votes. Votes are never updated.
pub struct VoteRepo;

impl VoteRepo {
    /// Insert a new vote stamped with `created_at`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &NewVote,
        created_at: Timestamp,
    ) -> Result<VoteRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO votes
                (restaurant_id, user_name, score_overall, score_food, score_quantity,
                 score_price, score_ambience, comment, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VoteRow>(&query)
            .bind(input.restaurant_id)
            .bind(&input.user_name)
            .bind(input.score_overall)
            .bind(input.score_food)
            .bind(input.score_quantity)
            .bind(input.score_price)
            .bind(input.score_ambience)
            .bind(&input.comment)
            .bind(created_at)
            .fetch_one(pool)
            .await
    }

    /// List every vote. Used to build the full stats snapshot.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<VoteRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM votes ORDER BY created_at DESC");
        sqlx::query_as::<_, VoteRow>(&query).fetch_all(pool).await
    }

    /// List votes for a restaurant, newest first.
    pub async fn list_for_restaurant(
        pool: &PgPool,
        restaurant_id: EntityId,
    ) -> Result<Vec<VoteRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM votes
             WHERE restaurant_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, VoteRow>(&query)
            .bind(restaurant_id)
            .fetch_all(pool)
            .await
    }

    /// List votes created at or after `since`, newest first.
    pub async fn list_since(pool: &PgPool, since: Timestamp) -> Result<Vec<VoteRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM votes
             WHERE created_at >= $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, VoteRow>(&query)
            .bind(since)
            .fetch_all(pool)
            .await
    }

    /// Insert a vote unless the user already has one for the restaurant at or
    /// after `since`. Returns `None` on a duplicate.
    ///
    /// A transaction-scoped advisory lock keyed on restaurant and user
    /// serializes concurrent attempts, so the existence check and the insert
    /// cannot interleave.
    pub async fn create_unless_voted_since(
        pool: &PgPool,
        input: &NewVote,
        created_at: Timestamp,
        since: Timestamp,
    ) -> Result<Option<VoteRow>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1::text || '/' || $2))")
            .bind(input.restaurant_id)
            .bind(&input.user_name)
            .execute(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO votes
                (restaurant_id, user_name, score_overall, score_food, score_quantity,
                 score_price, score_ambience, comment, created_at)
             SELECT $1, $2, $3, $4, $5, $6, $7, $8, $9
             WHERE NOT EXISTS (
                SELECT 1 FROM votes
                WHERE restaurant_id = $1 AND user_name = $2 AND created_at >= $10
             )
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, VoteRow>(&query)
            .bind(input.restaurant_id)
            .bind(&input.user_name)
            .bind(input.score_overall)
            .bind(input.score_food)
            .bind(input.score_quantity)
            .bind(input.score_price)
            .bind(input.score_ambience)
            .bind(&input.comment)
            .bind(created_at)
            .bind(since)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row)
    }
}
