//! Repository for the `races` table and its class/skill links.

use heroes_core::types::DbId;
use sqlx::PgPool;

use crate::models::race::{Race, RaceRow};
use crate::repositories::{ClassRepo, SkillRepo};

/// Column list for `races` queries.
const RACE_COLUMNS: &str = "id, name, description, strength, agility, intelligence, willpower";

/// Provides read access to races, their racial skills and recommended
/// classes.
pub struct RaceRepo;

impl RaceRepo {
    /// List every race, without associations.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Race>, sqlx::Error> {
        let query = format!("SELECT {RACE_COLUMNS} FROM races ORDER BY id");
        let rows = sqlx::query_as::<_, RaceRow>(&query).fetch_all(pool).await?;

        Ok(rows.into_iter().map(Race::from).collect())
    }

    /// Find a race by primary key, loading starting / available skills and
    /// recommended classes one level deep.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Race>, sqlx::Error> {
        let query = format!("SELECT {RACE_COLUMNS} FROM races WHERE id = $1");
        let row = sqlx::query_as::<_, RaceRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut race = Race::from(row);
        race.starting_skills =
            SkillRepo::list_linked(pool, "race_starting_skills", "race_id", id).await?;
        race.available_skills =
            SkillRepo::list_linked(pool, "race_available_skills", "race_id", id).await?;
        race.recommended_classes = ClassRepo::recommended_for_race(pool, id).await?;
        Ok(Some(race))
    }

    /// List races recommending at least one class whose name is in the
    /// given set (OR semantics). Matching is case-insensitive; callers pass
    /// lowercased names. DISTINCT keeps races matching several requested
    /// classes from appearing twice.
    pub async fn list_by_recommended_classes(
        pool: &PgPool,
        names: &[String],
    ) -> Result<Vec<Race>, sqlx::Error> {
        let rows = sqlx::query_as::<_, RaceRow>(
            "SELECT DISTINCT r.id, r.name, r.description, r.strength, r.agility, \
                    r.intelligence, r.willpower \
             FROM races r \
             INNER JOIN race_recommended_classes rc ON rc.race_id = r.id \
             INNER JOIN classes c ON c.id = rc.class_id \
             WHERE LOWER(c.name) = ANY($1) \
             ORDER BY r.id",
        )
        .bind(names)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(Race::from).collect())
    }
}
