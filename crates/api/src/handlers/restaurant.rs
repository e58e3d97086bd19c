//! Handlers for the `/restaurants` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lunchpick_core::catalog;
use lunchpick_core::error::CoreError;
use lunchpick_core::restaurant::{
    validate_new_restaurant, validate_restaurant_patch, NewRestaurant, RestaurantPatch,
};
use lunchpick_core::types::EntityId;

use crate::error::{AppError, AppResult};
use crate::query::RankingParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: EntityId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Restaurant",
        id,
    })
}

/// GET /api/v1/restaurants
///
/// Restaurants with stats, filtered and ordered by the query parameters.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RankingParams>,
) -> AppResult<impl IntoResponse> {
    let query = params.into_query()?;
    let restaurants = catalog::ranked_restaurants(state.store.as_ref(), &query).await?;

    tracing::debug!(
        sort = %query.sort,
        mood = ?query.mood,
        filtered = query.filters.is_some(),
        count = restaurants.len(),
        "Listed restaurants"
    );

    Ok(Json(DataResponse { data: restaurants }))
}

/// POST /api/v1/restaurants
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewRestaurant>,
) -> AppResult<impl IntoResponse> {
    validate_new_restaurant(&input)?;
    let restaurant = state.store.create_restaurant(&input).await?;

    tracing::info!(
        restaurant_id = %restaurant.id,
        name = %restaurant.name,
        "Restaurant created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: restaurant })))
}

/// GET /api/v1/restaurants/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let restaurant = catalog::restaurant_with_stats(state.store.as_ref(), id).await?;
    Ok(Json(DataResponse { data: restaurant }))
}

/// PUT /api/v1/restaurants/{id}
///
/// Partial update: absent fields keep their current value.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<RestaurantPatch>,
) -> AppResult<impl IntoResponse> {
    validate_restaurant_patch(&input)?;
    let restaurant = state
        .store
        .update_restaurant(id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(restaurant_id = %id, "Restaurant updated");

    Ok(Json(DataResponse { data: restaurant }))
}

/// DELETE /api/v1/restaurants/{id}
///
/// Removes the restaurant together with its votes.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    if state.store.delete_restaurant(id).await? {
        tracing::info!(restaurant_id = %id, "Restaurant deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
