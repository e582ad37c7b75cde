use heroes_core::enums::{Activation, DifficultyType, LevelRequirement, SkillType, Source};
use heroes_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `skills` table.
#[derive(Debug, Clone, FromRow)]
pub struct SkillRow {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub bonus: String,
    pub mana: String,
    #[sqlx(try_from = "String")]
    pub difficulty_type: DifficultyType,
    pub difficulty: String,
    #[sqlx(try_from = "String")]
    pub activation: Activation,
    #[sqlx(try_from = "String")]
    pub source: Source,
    #[sqlx(try_from = "String")]
    pub skill_type: SkillType,
    #[sqlx(try_from = "String")]
    pub level_requirement: LevelRequirement,
    pub observations: Vec<String>,
}

/// A hero ability: race or class skill, technique or spell, possibly gated
/// by level or by knowing other skills first.
///
/// `skill_requirement` is self-referential (prerequisite skills). The store
/// allows arbitrary prerequisite graphs; nothing enforces acyclicity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub bonus: String,
    pub mana: String,
    pub difficulty_type: DifficultyType,
    pub difficulty: String,
    pub activation: Activation,
    pub source: Source,
    #[serde(rename = "type")]
    pub skill_type: SkillType,
    pub level_requirement: LevelRequirement,
    #[serde(default)]
    pub skill_requirement: Vec<Skill>,
    #[serde(default)]
    pub observations: Vec<String>,
}

impl From<SkillRow> for Skill {
    fn from(row: SkillRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            bonus: row.bonus,
            mana: row.mana,
            difficulty_type: row.difficulty_type,
            difficulty: row.difficulty,
            activation: row.activation,
            source: row.source,
            skill_type: row.skill_type,
            level_requirement: row.level_requirement,
            skill_requirement: Vec::new(),
            observations: row.observations,
        }
    }
}
