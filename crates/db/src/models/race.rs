use heroes_core::attributes::Attribute;
use heroes_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::{Class, Skill};

/// A row from the `races` table. Base attributes are flat columns.
#[derive(Debug, Clone, FromRow)]
pub struct RaceRow {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub strength: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub willpower: i32,
}

/// A playable hero lineage, like Human or Elf: base attributes, racial
/// skills and the classes the lineage is naturally suited for.
///
/// `recommended_classes` references existing `Class` rows with no
/// cardinality limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub base_attributes: Attribute,
    #[serde(default)]
    pub starting_skills: Vec<Skill>,
    #[serde(default)]
    pub available_skills: Vec<Skill>,
    #[serde(default)]
    pub recommended_classes: Vec<Class>,
}

impl From<RaceRow> for Race {
    fn from(row: RaceRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            base_attributes: Attribute {
                strength: row.strength,
                agility: row.agility,
                intelligence: row.intelligence,
                willpower: row.willpower,
            },
            starting_skills: Vec::new(),
            available_skills: Vec::new(),
            recommended_classes: Vec::new(),
        }
    }
}
