//! Repository for the `skills` table.

use heroes_core::enums::{SkillType, Source};
use heroes_core::types::DbId;
use sqlx::PgPool;

use crate::models::skill::{Skill, SkillRow};

/// Column list for `skills` queries.
const SKILL_COLUMNS: &str = "\
    id, name, description, bonus, mana, difficulty_type, difficulty, \
    activation, source, skill_type, level_requirement, observations";

/// Provides read access to skills and their prerequisite links.
pub struct SkillRepo;

impl SkillRepo {
    /// List every skill, without prerequisite lists.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!("SELECT {SKILL_COLUMNS} FROM skills ORDER BY id");
        let rows = sqlx::query_as::<_, SkillRow>(&query).fetch_all(pool).await?;

        Ok(rows.into_iter().map(Skill::from).collect())
    }

    /// Find a skill by primary key, loading its prerequisite skills one
    /// level deep.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {SKILL_COLUMNS} FROM skills WHERE id = $1");
        let row = sqlx::query_as::<_, SkillRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut skill = Skill::from(row);
        skill.skill_requirement = Self::prerequisites(pool, id).await?;
        Ok(Some(skill))
    }

    /// List skills of one category.
    pub async fn list_by_type(
        pool: &PgPool,
        skill_type: SkillType,
    ) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!("SELECT {SKILL_COLUMNS} FROM skills WHERE skill_type = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, SkillRow>(&query)
            .bind(skill_type.as_str())
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(Skill::from).collect())
    }

    /// List skills learnable from one source.
    pub async fn list_by_source(pool: &PgPool, source: Source) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!("SELECT {SKILL_COLUMNS} FROM skills WHERE source = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, SkillRow>(&query)
            .bind(source.as_str())
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(Skill::from).collect())
    }

    /// Prerequisite skills of `id`.
    async fn prerequisites(pool: &PgPool, id: DbId) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!(
            "SELECT {SKILL_COLUMNS} FROM skills \
             WHERE id IN (SELECT required_skill_id FROM skill_prerequisites WHERE skill_id = $1) \
             ORDER BY id"
        );
        let rows = sqlx::query_as::<_, SkillRow>(&query)
            .bind(id)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(Skill::from).collect())
    }

    /// Skills linked to an owner row through a join table.
    ///
    /// `join_table` / `owner_column` are compile-time constants supplied by
    /// the race and class repositories, never user input.
    pub(crate) async fn list_linked(
        pool: &PgPool,
        join_table: &str,
        owner_column: &str,
        owner_id: DbId,
    ) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!(
            "SELECT {SKILL_COLUMNS} FROM skills \
             WHERE id IN (SELECT skill_id FROM {join_table} WHERE {owner_column} = $1) \
             ORDER BY id"
        );
        let rows = sqlx::query_as::<_, SkillRow>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(Skill::from).collect())
    }
}
