//! PostgreSQL implementation of the store capability.

use std::collections::HashMap;

use async_trait::async_trait;
use lunchpick_core::error::CoreError;
use lunchpick_core::restaurant::{NewRestaurant, Restaurant, RestaurantPatch};
use lunchpick_core::store::LunchStore;
use lunchpick_core::types::{EntityId, Timestamp};
use lunchpick_core::vote::{NewVote, Vote};

use crate::repositories::{RestaurantRepo, VoteRepo};
use crate::DbPool;

/// [`LunchStore`] backed by the repository layer.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Map a sqlx error into the domain error. Details are logged, not returned.
fn db_error(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Database error");
    CoreError::Internal("Database operation failed".to_string())
}

#[async_trait]
impl LunchStore for PgStore {
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, CoreError> {
        RestaurantRepo::list(&self.pool)
            .await
            .map_err(db_error)?
            .into_iter()
            .map(Restaurant::try_from)
            .collect()
    }

    async fn get_restaurant(&self, id: EntityId) -> Result<Option<Restaurant>, CoreError> {
        RestaurantRepo::find_by_id(&self.pool, id)
            .await
            .map_err(db_error)?
            .map(Restaurant::try_from)
            .transpose()
    }

    async fn create_restaurant(&self, input: &NewRestaurant) -> Result<Restaurant, CoreError> {
        let row = RestaurantRepo::create(&self.pool, input)
            .await
            .map_err(db_error)?;
        Restaurant::try_from(row)
    }

    async fn update_restaurant(
        &self,
        id: EntityId,
        patch: &RestaurantPatch,
    ) -> Result<Option<Restaurant>, CoreError> {
        RestaurantRepo::update(&self.pool, id, patch)
            .await
            .map_err(db_error)?
            .map(Restaurant::try_from)
            .transpose()
    }

    async fn delete_restaurant(&self, id: EntityId) -> Result<bool, CoreError> {
        RestaurantRepo::delete(&self.pool, id)
            .await
            .map_err(db_error)
    }

    async fn fetch_all_restaurants_with_votes(
        &self,
    ) -> Result<Vec<(Restaurant, Vec<Vote>)>, CoreError> {
        let restaurants = self.list_restaurants().await?;
        let rows = VoteRepo::list_all(&self.pool).await.map_err(db_error)?;

        let mut by_restaurant: HashMap<EntityId, Vec<Vote>> = HashMap::new();
        for row in rows {
            by_restaurant
                .entry(row.restaurant_id)
                .or_default()
                .push(Vote::from(row));
        }

        Ok(restaurants
            .into_iter()
            .map(|r| {
                let votes = by_restaurant.remove(&r.id).unwrap_or_default();
                (r, votes)
            })
            .collect())
    }

    async fn fetch_recent_votes(&self, since: Timestamp) -> Result<Vec<Vote>, CoreError> {
        let rows = VoteRepo::list_since(&self.pool, since)
            .await
            .map_err(db_error)?;
        Ok(rows.into_iter().map(Vote::from).collect())
    }

    async fn list_votes_for_restaurant(
        &self,
        restaurant_id: EntityId,
    ) -> Result<Vec<Vote>, CoreError> {
        let rows = VoteRepo::list_for_restaurant(&self.pool, restaurant_id)
            .await
            .map_err(db_error)?;
        Ok(rows.into_iter().map(Vote::from).collect())
    }

    async fn insert_vote(&self, input: &NewVote, created_at: Timestamp) -> Result<Vote, CoreError> {
        let row = VoteRepo::create(&self.pool, input, created_at)
            .await
            .map_err(db_error)?;
        Ok(Vote::from(row))
    }

    async fn insert_vote_once(
        &self,
        input: &NewVote,
        created_at: Timestamp,
        since: Timestamp,
    ) -> Result<Option<Vote>, CoreError> {
        let row = VoteRepo::create_unless_voted_since(&self.pool, input, created_at, since)
            .await
            .map_err(db_error)?;
        Ok(row.map(Vote::from))
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool).await.map_err(db_error)
    }
}
