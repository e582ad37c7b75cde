use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The pool is created once at startup and injected here; nothing in the
/// service holds a global database handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: heroes_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
