//! Route definitions for classes.

use axum::routing::get;
use axum::Router;

use crate::handlers::classes;
use crate::state::AppState;

/// Routes mounted at `/classes`.
///
/// ```text
/// GET    /                            -> get_all
/// GET    /{id}                        -> get_by_id
/// GET    /by-role/{role}              -> get_by_role
/// GET    /by-proficiencies            -> get_by_proficiencies
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(classes::get_all))
        .route("/by-role/{role}", get(classes::get_by_role))
        .route("/by-proficiencies", get(classes::get_by_proficiencies))
        .route("/{id}", get(classes::get_by_id))
}
