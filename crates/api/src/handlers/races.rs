//! Handlers for race endpoints.

use axum::extract::{Path, State};
use axum::Json;
use axum_extra::extract::Query;
use heroes_core::error::CoreError;
use heroes_db::models::Race;
use heroes_db::repositories::RaceRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::parse_id;
use crate::state::AppState;

/// Query parameters for `GET /races/by-recommended-classes`.
///
/// `classes` is a repeated key (`?classes=a&classes=b`).
#[derive(Debug, Deserialize)]
pub struct RecommendedClassesParams {
    #[serde(default)]
    pub classes: Vec<String>,
}

/// GET /races
pub async fn get_all(State(state): State<AppState>) -> AppResult<Json<Vec<Race>>> {
    let races = RaceRepo::list_all(&state.pool).await?;

    Ok(Json(races))
}

/// GET /races/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Race>> {
    let id = parse_id(&id)?;
    let race = RaceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Race", id }))?;

    Ok(Json(race))
}

/// GET /races/by-recommended-classes?classes=a&classes=b
///
/// Races recommending at least one class in the set, case-insensitively.
/// Without the parameter the join is never executed and the result is an
/// empty array.
pub async fn get_by_recommended_classes(
    State(state): State<AppState>,
    Query(params): Query<RecommendedClassesParams>,
) -> AppResult<Json<Vec<Race>>> {
    if params.classes.is_empty() {
        return Ok(Json(Vec::new()));
    }

    // Lowercase the set so the SQL IN-match is case-insensitive.
    let classes: Vec<String> = params.classes.iter().map(|c| c.to_lowercase()).collect();
    let races = RaceRepo::list_by_recommended_classes(&state.pool, &classes).await?;

    Ok(Json(races))
}
