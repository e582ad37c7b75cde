//! Repository for the `classes` table and its proficiency links.

use heroes_core::enums::{Proficiency, Role};
use heroes_core::types::DbId;
use sqlx::PgPool;

use crate::models::class::{Class, ClassRow};
use crate::repositories::SkillRepo;

/// Column list for `classes` queries.
const CLASS_COLUMNS: &str =
    "id, name, description, strength, agility, intelligence, willpower, role";

/// Provides read access to classes, their proficiencies and class skills.
pub struct ClassRepo;

impl ClassRepo {
    /// List every class, without associations.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Class>, sqlx::Error> {
        let query = format!("SELECT {CLASS_COLUMNS} FROM classes ORDER BY id");
        let rows = sqlx::query_as::<_, ClassRow>(&query).fetch_all(pool).await?;

        Ok(rows.into_iter().map(Class::from).collect())
    }

    /// Find a class by primary key, loading proficiencies and starting /
    /// available skills one level deep.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Class>, sqlx::Error> {
        let query = format!("SELECT {CLASS_COLUMNS} FROM classes WHERE id = $1");
        let row = sqlx::query_as::<_, ClassRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut class = Class::from(row);
        class.proficiencies = Self::proficiencies(pool, id).await?;
        class.starting_skills =
            SkillRepo::list_linked(pool, "class_starting_skills", "class_id", id).await?;
        class.available_skills =
            SkillRepo::list_linked(pool, "class_available_skills", "class_id", id).await?;
        Ok(Some(class))
    }

    /// List classes with the given role.
    pub async fn list_by_role(pool: &PgPool, role: Role) -> Result<Vec<Class>, sqlx::Error> {
        let query = format!("SELECT {CLASS_COLUMNS} FROM classes WHERE role = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, ClassRow>(&query)
            .bind(role.as_str())
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(Class::from).collect())
    }

    /// List classes holding at least one proficiency whose name is in the
    /// given set (OR semantics). Matching is case-insensitive; callers pass
    /// lowercased names. DISTINCT keeps classes matching several requested
    /// proficiencies from appearing twice.
    pub async fn list_by_proficiencies(
        pool: &PgPool,
        names: &[String],
    ) -> Result<Vec<Class>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ClassRow>(
            "SELECT DISTINCT c.id, c.name, c.description, c.strength, c.agility, \
                    c.intelligence, c.willpower, c.role \
             FROM classes c \
             INNER JOIN class_proficiencies cp ON cp.class_id = c.id \
             INNER JOIN proficiencies p ON p.id = cp.proficiency_id \
             WHERE LOWER(p.name) = ANY($1) \
             ORDER BY c.id",
        )
        .bind(names)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(Class::from).collect())
    }

    /// Classes recommended for a race, without their own associations.
    pub(crate) async fn recommended_for_race(
        pool: &PgPool,
        race_id: DbId,
    ) -> Result<Vec<Class>, sqlx::Error> {
        let query = format!(
            "SELECT {CLASS_COLUMNS} FROM classes \
             WHERE id IN (SELECT class_id FROM race_recommended_classes WHERE race_id = $1) \
             ORDER BY id"
        );
        let rows = sqlx::query_as::<_, ClassRow>(&query)
            .bind(race_id)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(Class::from).collect())
    }

    /// Proficiency names linked to a class, parsed into the closed set.
    ///
    /// The store keeps plain text; a name outside the closed set is a seed
    /// data defect and surfaces as a decode error.
    async fn proficiencies(pool: &PgPool, class_id: DbId) -> Result<Vec<Proficiency>, sqlx::Error> {
        let names: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM proficiencies \
             WHERE id IN (SELECT proficiency_id FROM class_proficiencies WHERE class_id = $1) \
             ORDER BY name",
        )
        .bind(class_id)
        .fetch_all(pool)
        .await?;

        names
            .into_iter()
            .map(|name| {
                name.parse::<Proficiency>()
                    .map_err(|e| sqlx::Error::Decode(Box::new(e)))
            })
            .collect()
    }
}
