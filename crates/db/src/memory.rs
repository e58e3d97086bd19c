//! In-process store used when no database is configured, and by tests.

use async_trait::async_trait;
use chrono::Utc;
use lunchpick_core::error::CoreError;
use lunchpick_core::restaurant::{NewRestaurant, Restaurant, RestaurantPatch};
use lunchpick_core::store::LunchStore;
use lunchpick_core::types::{EntityId, Timestamp};
use lunchpick_core::vote::{NewVote, Vote};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    restaurants: Vec<Restaurant>,
    votes: Vec<Vote>,
}

/// [`LunchStore`] holding restaurants and votes in memory.
///
/// Mirrors the PostgreSQL store's ordering and cascade behaviour.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first(mut votes: Vec<Vote>) -> Vec<Vote> {
    votes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    votes
}

/// Append a vote under an already-held write guard.
fn push_vote(tables: &mut Tables, input: &NewVote, created_at: Timestamp) -> Result<Vote, CoreError> {
    if !tables.restaurants.iter().any(|r| r.id == input.restaurant_id) {
        return Err(CoreError::NotFound {
            entity: "Restaurant",
            id: input.restaurant_id,
        });
    }
    let vote = Vote {
        id: Uuid::new_v4(),
        restaurant_id: input.restaurant_id,
        user_name: input.user_name.clone(),
        score_overall: Some(input.score_overall),
        score_food: input.score_food,
        score_quantity: input.score_quantity,
        score_price: input.score_price,
        score_ambience: input.score_ambience,
        comment: input.comment.clone(),
        created_at,
    };
    tables.votes.push(vote.clone());
    Ok(vote)
}

#[async_trait]
impl LunchStore for MemoryStore {
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, CoreError> {
        let tables = self.tables.read().await;
        let mut restaurants = tables.restaurants.clone();
        restaurants.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(restaurants)
    }

    async fn get_restaurant(&self, id: EntityId) -> Result<Option<Restaurant>, CoreError> {
        let tables = self.tables.read().await;
        Ok(tables.restaurants.iter().find(|r| r.id == id).cloned())
    }

    async fn create_restaurant(&self, input: &NewRestaurant) -> Result<Restaurant, CoreError> {
        let now = Utc::now();
        let restaurant = Restaurant {
            id: Uuid::new_v4(),
            name: input.name.trim().to_string(),
            address: input.address.trim().to_string(),
            price_level: input.price_level,
            distance_minutes: input.distance_minutes,
            cuisine_type: input.cuisine_type.trim().to_string(),
            speed: input.speed,
            maps_url: input.maps_url.clone(),
            internal_notes: input.internal_notes.clone(),
            created_at: now,
            updated_at: now,
        };
        self.tables.write().await.restaurants.push(restaurant.clone());
        Ok(restaurant)
    }

    async fn update_restaurant(
        &self,
        id: EntityId,
        patch: &RestaurantPatch,
    ) -> Result<Option<Restaurant>, CoreError> {
        let mut tables = self.tables.write().await;
        let Some(restaurant) = tables.restaurants.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        let trimmed = RestaurantPatch {
            name: patch.name.as_deref().map(|s| s.trim().to_string()),
            address: patch.address.as_deref().map(|s| s.trim().to_string()),
            cuisine_type: patch.cuisine_type.as_deref().map(|s| s.trim().to_string()),
            ..patch.clone()
        };
        trimmed.apply_to(restaurant, Utc::now());
        Ok(Some(restaurant.clone()))
    }

    async fn delete_restaurant(&self, id: EntityId) -> Result<bool, CoreError> {
        let mut tables = self.tables.write().await;
        let before = tables.restaurants.len();
        tables.restaurants.retain(|r| r.id != id);
        let removed = tables.restaurants.len() < before;
        if removed {
            tables.votes.retain(|v| v.restaurant_id != id);
        }
        Ok(removed)
    }

    async fn fetch_all_restaurants_with_votes(
        &self,
    ) -> Result<Vec<(Restaurant, Vec<Vote>)>, CoreError> {
        let restaurants = self.list_restaurants().await?;
        let tables = self.tables.read().await;
        Ok(restaurants
            .into_iter()
            .map(|r| {
                let votes = tables
                    .votes
                    .iter()
                    .filter(|v| v.restaurant_id == r.id)
                    .cloned()
                    .collect();
                (r, newest_first(votes))
            })
            .collect())
    }

    async fn fetch_recent_votes(&self, since: Timestamp) -> Result<Vec<Vote>, CoreError> {
        let tables = self.tables.read().await;
        let votes = tables
            .votes
            .iter()
            .filter(|v| v.created_at >= since)
            .cloned()
            .collect();
        Ok(newest_first(votes))
    }

    async fn list_votes_for_restaurant(
        &self,
        restaurant_id: EntityId,
    ) -> Result<Vec<Vote>, CoreError> {
        let tables = self.tables.read().await;
        let votes = tables
            .votes
            .iter()
            .filter(|v| v.restaurant_id == restaurant_id)
            .cloned()
            .collect();
        Ok(newest_first(votes))
    }

    async fn insert_vote(&self, input: &NewVote, created_at: Timestamp) -> Result<Vote, CoreError> {
        let mut tables = self.tables.write().await;
        push_vote(&mut tables, input, created_at)
    }

    async fn insert_vote_once(
        &self,
        input: &NewVote,
        created_at: Timestamp,
        since: Timestamp,
    ) -> Result<Option<Vote>, CoreError> {
        let mut tables = self.tables.write().await;
        let duplicate = tables.votes.iter().any(|v| {
            v.restaurant_id == input.restaurant_id
                && v.user_name == input.user_name
                && v.created_at >= since
        });
        if duplicate {
            return Ok(None);
        }
        push_vote(&mut tables, input, created_at).map(Some)
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
