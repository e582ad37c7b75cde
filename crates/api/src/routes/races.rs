//! Route definitions for races.
//!
//! All filter endpoints answer 200 with a possibly-empty array; 404 is
//! reserved for `/{id}` misses.

use axum::routing::get;
use axum::Router;

use crate::handlers::races;
use crate::state::AppState;

/// Routes mounted at `/races`.
///
/// ```text
/// GET    /                            -> get_all
/// GET    /{id}                        -> get_by_id
/// GET    /by-recommended-classes      -> get_by_recommended_classes
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(races::get_all))
        .route(
            "/by-recommended-classes",
            get(races::get_by_recommended_classes),
        )
        .route("/{id}", get(races::get_by_id))
}
