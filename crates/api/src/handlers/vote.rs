//! Handlers for votes.
//!
//! Votes are append-only. Creation enforces the one-vote-per-day rule
//! against the server's local calendar day.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Local, Utc};
use lunchpick_core::calendar::days_before;
use lunchpick_core::error::CoreError;
use lunchpick_core::types::EntityId;
use lunchpick_core::vote::NewVote;
use lunchpick_core::voting;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::query::RecentVotesParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /restaurants/{id}/votes`. The restaurant comes
/// from the path.
#[derive(Debug, Deserialize)]
pub struct CreateVoteRequest {
    pub user_name: String,
    pub score_overall: i16,
    pub score_food: i16,
    pub score_quantity: i16,
    pub score_price: i16,
    pub score_ambience: i16,
    pub comment: Option<String>,
}

impl CreateVoteRequest {
    fn into_new_vote(self, restaurant_id: EntityId) -> NewVote {
        NewVote {
            restaurant_id,
            user_name: self.user_name,
            score_overall: self.score_overall,
            score_food: self.score_food,
            score_quantity: self.score_quantity,
            score_price: self.score_price,
            score_ambience: self.score_ambience,
            comment: self.comment.filter(|c| !c.trim().is_empty()),
        }
    }
}

/// GET /api/v1/restaurants/{id}/votes
///
/// Votes for one restaurant, newest first.
pub async fn list_for_restaurant(
    State(state): State<AppState>,
    Path(restaurant_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    if state.store.get_restaurant(restaurant_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Restaurant",
            id: restaurant_id,
        }));
    }
    let votes = state.store.list_votes_for_restaurant(restaurant_id).await?;
    Ok(Json(DataResponse { data: votes }))
}

/// POST /api/v1/restaurants/{id}/votes
pub async fn create(
    State(state): State<AppState>,
    Path(restaurant_id): Path<EntityId>,
    Json(input): Json<CreateVoteRequest>,
) -> AppResult<impl IntoResponse> {
    let new_vote = input.into_new_vote(restaurant_id);
    let vote = voting::create_vote(state.store.as_ref(), &new_vote, &Local::now()).await?;

    tracing::info!(
        vote_id = %vote.id,
        restaurant_id = %restaurant_id,
        user_name = %vote.user_name,
        score_overall = ?vote.score_overall,
        "Vote recorded"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: vote })))
}

/// GET /api/v1/votes/recent?days=N
pub async fn recent(
    State(state): State<AppState>,
    Query(params): Query<RecentVotesParams>,
) -> AppResult<impl IntoResponse> {
    let days = params.days()?;
    let votes = state
        .store
        .fetch_recent_votes(days_before(Utc::now(), days))
        .await?;
    Ok(Json(DataResponse { data: votes }))
}
