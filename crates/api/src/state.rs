use std::sync::Arc;

use lunchpick_core::store::LunchStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Restaurant and vote storage (PostgreSQL or in-memory).
    pub store: Arc<dyn LunchStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
