//! Route modules, one per catalog entity plus health.

pub mod classes;
pub mod health;
pub mod races;
pub mod skills;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree.
///
/// Route hierarchy:
///
/// ```text
/// /races                                  full collection
/// /races/{id}                             single race with associations
/// /races/by-recommended-classes           set-membership filter
///
/// /classes                                full collection
/// /classes/{id}                           single class with associations
/// /classes/by-role/{role}                 attribute filter
/// /classes/by-proficiencies               set-membership filter
///
/// /skills                                 full collection
/// /skills/{id}                            single skill with prerequisites
/// /skills/by-type/{type}                  attribute filter
/// /skills/by-source/{source}              attribute filter
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/races", races::router())
        .nest("/classes", classes::router())
        .nest("/skills", skills::router())
}
