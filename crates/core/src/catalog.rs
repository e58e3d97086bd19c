//! Fetch-then-compute entry points used by the HTTP layer.
//!
//! Each call takes a fresh snapshot from the store and runs the pure
//! engines over it. Nothing is cached between calls.

use chrono::{DateTime, TimeZone, Utc};

use crate::calendar::days_before;
use crate::error::CoreError;
use crate::ranking::{rank, RankingQuery};
use crate::stats::{aggregate, aggregate_all, RestaurantWithStats};
use crate::store::LunchStore;
use crate::summary::{summarize, Summary, RECENT_WINDOW_DAYS};
use crate::types::EntityId;

/// Every restaurant with freshly aggregated stats, in store order (by name).
pub async fn restaurants_with_stats(
    store: &dyn LunchStore,
) -> Result<Vec<RestaurantWithStats>, CoreError> {
    let snapshot = store.fetch_all_restaurants_with_votes().await?;
    Ok(aggregate_all(snapshot))
}

/// One restaurant with stats, or `NotFound`.
pub async fn restaurant_with_stats(
    store: &dyn LunchStore,
    id: EntityId,
) -> Result<RestaurantWithStats, CoreError> {
    let restaurant = store
        .get_restaurant(id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Restaurant",
            id,
        })?;
    let votes = store.list_votes_for_restaurant(id).await?;
    Ok(aggregate(restaurant, &votes))
}

/// Filtered and ordered listing.
pub async fn ranked_restaurants(
    store: &dyn LunchStore,
    query: &RankingQuery,
) -> Result<Vec<RestaurantWithStats>, CoreError> {
    let restaurants = restaurants_with_stats(store).await?;
    Ok(rank(&restaurants, query))
}

/// Dashboard summary as of `now`.
///
/// Votes are fetched for the last [`RECENT_WINDOW_DAYS`] days and narrowed to
/// the last calendar month by [`summarize`].
pub async fn summary<Tz: TimeZone>(
    store: &dyn LunchStore,
    now: &DateTime<Tz>,
) -> Result<Summary, CoreError> {
    let restaurants = restaurants_with_stats(store).await?;
    let recent_votes = store
        .fetch_recent_votes(days_before(now.with_timezone(&Utc), RECENT_WINDOW_DAYS))
        .await?;
    Ok(summarize(&restaurants, &recent_votes, now))
}
