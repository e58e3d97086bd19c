use axum::routing::get;
use axum::Router;

use crate::handlers::surprise;
use crate::state::AppState;

/// Routes mounted at `/surprise`.
///
/// ```text
/// GET    /                  -> pick
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(surprise::pick))
}
