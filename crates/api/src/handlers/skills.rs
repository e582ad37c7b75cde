//! Handlers for skill endpoints.

use axum::extract::{Path, State};
use axum::Json;
use heroes_core::enums::{SkillType, Source};
use heroes_core::error::CoreError;
use heroes_db::models::Skill;
use heroes_db::repositories::SkillRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::parse_id;
use crate::state::AppState;

/// GET /skills
pub async fn get_all(State(state): State<AppState>) -> AppResult<Json<Vec<Skill>>> {
    let skills = SkillRepo::list_all(&state.pool).await?;

    Ok(Json(skills))
}

/// GET /skills/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Skill>> {
    let id = parse_id(&id)?;
    let skill = SkillRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Skill",
            id,
        }))?;

    Ok(Json(skill))
}

/// GET /skills/by-type/{type}
///
/// The type is lowercased and parsed against the closed set; an unknown
/// type yields an empty array without touching the store.
pub async fn get_by_type(
    State(state): State<AppState>,
    Path(skill_type): Path<String>,
) -> AppResult<Json<Vec<Skill>>> {
    let Ok(skill_type) = skill_type.to_lowercase().parse::<SkillType>() else {
        return Ok(Json(Vec::new()));
    };

    let skills = SkillRepo::list_by_type(&state.pool, skill_type).await?;

    Ok(Json(skills))
}

/// GET /skills/by-source/{source}
///
/// Same convention as by-type: unknown sources yield an empty array.
pub async fn get_by_source(
    State(state): State<AppState>,
    Path(source): Path<String>,
) -> AppResult<Json<Vec<Skill>>> {
    let Ok(source) = source.to_lowercase().parse::<Source>() else {
        return Ok(Json(Vec::new()));
    };

    let skills = SkillRepo::list_by_source(&state.pool, source).await?;

    Ok(Json(skills))
}
