//! Storage capability required by the domain.
//!
//! The core never talks to a database directly. Callers hand it an
//! implementation of [`LunchStore`] (PostgreSQL or in-memory, both in the
//! `db` crate) and every computation works on the snapshot it returns.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::restaurant::{NewRestaurant, Restaurant, RestaurantPatch};
use crate::types::{EntityId, Timestamp};
use crate::vote::{NewVote, Vote};

#[async_trait]
pub trait LunchStore: Send + Sync {
    /// All restaurants ordered by name.
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, CoreError>;

    async fn get_restaurant(&self, id: EntityId) -> Result<Option<Restaurant>, CoreError>;

    async fn create_restaurant(&self, input: &NewRestaurant) -> Result<Restaurant, CoreError>;

    /// Returns `None` if no restaurant has the given id.
    async fn update_restaurant(
        &self,
        id: EntityId,
        patch: &RestaurantPatch,
    ) -> Result<Option<Restaurant>, CoreError>;

    /// Removes the restaurant and its votes. Returns `true` if it existed.
    async fn delete_restaurant(&self, id: EntityId) -> Result<bool, CoreError>;

    /// Full snapshot used to build stats: every restaurant with every vote.
    async fn fetch_all_restaurants_with_votes(
        &self,
    ) -> Result<Vec<(Restaurant, Vec<Vote>)>, CoreError>;

    /// Votes created at or after `since`, newest first.
    async fn fetch_recent_votes(&self, since: Timestamp) -> Result<Vec<Vote>, CoreError>;

    /// Votes for one restaurant, newest first.
    async fn list_votes_for_restaurant(
        &self,
        restaurant_id: EntityId,
    ) -> Result<Vec<Vote>, CoreError>;

    /// Persist a vote unconditionally. Used for seeding and imports; request
    /// paths go through [`crate::voting::create_vote`].
    async fn insert_vote(&self, input: &NewVote, created_at: Timestamp) -> Result<Vote, CoreError>;

    /// Persist a vote unless the same user already voted for the restaurant
    /// at or after `since`. Returns `None` on a duplicate.
    ///
    /// The existence check and the insert are one atomic step.
    async fn insert_vote_once(
        &self,
        input: &NewVote,
        created_at: Timestamp,
        since: Timestamp,
    ) -> Result<Option<Vote>, CoreError>;

    /// Cheap connectivity check.
    async fn health_check(&self) -> Result<(), CoreError>;
}
