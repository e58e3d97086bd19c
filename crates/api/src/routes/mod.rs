pub mod health;
pub mod restaurant;
pub mod stats;
pub mod surprise;
pub mod vote;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /restaurants                         list (ranked), create
/// /restaurants/{id}                    get, update, delete
/// /restaurants/{id}/votes              list, create
///
/// /votes/recent                        recent votes (?days=N)
///
/// /surprise                            random pick
///
/// /stats/summary                       dashboard superlatives
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/restaurants", restaurant::router())
        .nest("/votes", vote::router())
        .nest("/surprise", surprise::router())
        .nest("/stats", stats::router())
}
