//! Handler for the surprise pick.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Local;
use lunchpick_core::catalog;
use lunchpick_core::surprise::pick_surprise;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/surprise
///
/// A random well-rated restaurant that was not visited yesterday, or
/// `null` when nothing qualifies.
pub async fn pick(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let restaurants = catalog::restaurants_with_stats(state.store.as_ref()).await?;

    let picked = pick_surprise(&restaurants, &Local::now(), &mut rand::rng()).cloned();

    match &picked {
        Some(r) => tracing::info!(
            restaurant_id = %r.restaurant.id,
            name = %r.restaurant.name,
            "Surprise picked"
        ),
        None => tracing::info!("No restaurant eligible for a surprise"),
    }

    Ok(Json(DataResponse { data: picked }))
}
