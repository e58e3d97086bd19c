//! Handler for the team dashboard.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Local;
use lunchpick_core::catalog;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/stats/summary
pub async fn summary(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let summary = catalog::summary(state.store.as_ref(), &Local::now()).await?;
    Ok(Json(DataResponse { data: summary }))
}
