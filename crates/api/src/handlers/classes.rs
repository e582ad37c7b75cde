//! Handlers for class endpoints.

use axum::extract::{Path, State};
use axum::Json;
use axum_extra::extract::Query;
use heroes_core::enums::Role;
use heroes_core::error::CoreError;
use heroes_db::models::Class;
use heroes_db::repositories::ClassRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::parse_id;
use crate::state::AppState;

/// Query parameters for `GET /classes/by-proficiencies`.
///
/// `proficiencies` is a repeated key (`?proficiencies=a&proficiencies=b`).
#[derive(Debug, Deserialize)]
pub struct ProficienciesParams {
    #[serde(default)]
    pub proficiencies: Vec<String>,
}

/// GET /classes
pub async fn get_all(State(state): State<AppState>) -> AppResult<Json<Vec<Class>>> {
    let classes = ClassRepo::list_all(&state.pool).await?;

    Ok(Json(classes))
}

/// GET /classes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Class>> {
    let id = parse_id(&id)?;
    let class = ClassRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Class",
            id,
        }))?;

    Ok(Json(class))
}

/// GET /classes/by-role/{role}
///
/// The role is lowercased and parsed against the closed set; an unknown
/// role yields an empty array without touching the store.
pub async fn get_by_role(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> AppResult<Json<Vec<Class>>> {
    let Ok(role) = role.to_lowercase().parse::<Role>() else {
        return Ok(Json(Vec::new()));
    };

    let classes = ClassRepo::list_by_role(&state.pool, role).await?;

    Ok(Json(classes))
}

/// GET /classes/by-proficiencies?proficiencies=a&proficiencies=b
///
/// Classes holding at least one proficiency in the set, case-insensitively.
/// Without the parameter the join is never executed and the result is an
/// empty array.
pub async fn get_by_proficiencies(
    State(state): State<AppState>,
    Query(params): Query<ProficienciesParams>,
) -> AppResult<Json<Vec<Class>>> {
    if params.proficiencies.is_empty() {
        return Ok(Json(Vec::new()));
    }

    // Lowercase the set so the SQL IN-match is case-insensitive.
    let proficiencies: Vec<String> = params
        .proficiencies
        .iter()
        .map(|p| p.to_lowercase())
        .collect();
    let classes = ClassRepo::list_by_proficiencies(&state.pool, &proficiencies).await?;

    Ok(Json(classes))
}
