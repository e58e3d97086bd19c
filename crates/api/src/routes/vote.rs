//! Route definitions for the `/votes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::vote;
use crate::state::AppState;

/// Routes mounted at `/votes`.
///
/// ```text
/// GET    /recent            -> recent (?days=N)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/recent", get(vote::recent))
}
