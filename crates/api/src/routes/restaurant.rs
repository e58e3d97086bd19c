//! Route definitions for the `/restaurants` resource, including the
//! nested votes collection.

use axum::routing::get;
use axum::Router;

use crate::handlers::{restaurant, vote};
use crate::state::AppState;

/// Routes mounted at `/restaurants`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
///
/// GET    /{id}/votes        -> list_for_restaurant
/// POST   /{id}/votes        -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(restaurant::list).post(restaurant::create))
        .route(
            "/{id}",
            get(restaurant::get_by_id)
                .put(restaurant::update)
                .delete(restaurant::delete),
        )
        .route(
            "/{id}/votes",
            get(vote::list_for_restaurant).post(vote::create),
        )
}
