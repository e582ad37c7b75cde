//! Route definitions for skills.

use axum::routing::get;
use axum::Router;

use crate::handlers::skills;
use crate::state::AppState;

/// Routes mounted at `/skills`.
///
/// ```text
/// GET    /                            -> get_all
/// GET    /{id}                        -> get_by_id
/// GET    /by-type/{type}              -> get_by_type
/// GET    /by-source/{source}          -> get_by_source
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(skills::get_all))
        .route("/by-type/{type}", get(skills::get_by_type))
        .route("/by-source/{source}", get(skills::get_by_source))
        .route("/{id}", get(skills::get_by_id))
}
