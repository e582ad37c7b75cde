use heroes_core::attributes::Attribute;
use heroes_core::enums::{Proficiency, Role};
use heroes_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::Skill;

/// A row from the `classes` table. Bonus attributes are flat columns.
#[derive(Debug, Clone, FromRow)]
pub struct ClassRow {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub strength: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub willpower: i32,
    #[sqlx(try_from = "String")]
    pub role: Role,
}

/// How a hero is specialized, like Warrior or Wizard. Grants bonus
/// attributes, proficiencies, one role and class skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub bonus_attributes: Attribute,
    pub role: Role,
    #[serde(default)]
    pub proficiencies: Vec<Proficiency>,
    #[serde(default)]
    pub starting_skills: Vec<Skill>,
    #[serde(default)]
    pub available_skills: Vec<Skill>,
}

impl From<ClassRow> for Class {
    fn from(row: ClassRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            bonus_attributes: Attribute {
                strength: row.strength,
                agility: row.agility,
                intelligence: row.intelligence,
                willpower: row.willpower,
            },
            role: row.role,
            proficiencies: Vec::new(),
            starting_skills: Vec::new(),
            available_skills: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_nested_attribute_block() {
        let class = Class {
            id: 1,
            name: "Wizard".to_string(),
            description: "A scholar of the arcane.".to_string(),
            bonus_attributes: Attribute {
                strength: 0,
                agility: 0,
                intelligence: 2,
                willpower: 1,
            },
            role: Role::Spellcaster,
            proficiencies: vec![Proficiency::CastMagic, Proficiency::ReadMagic],
            starting_skills: Vec::new(),
            available_skills: Vec::new(),
        };

        let json = serde_json::to_value(&class).unwrap();
        assert_eq!(json["role"], "spellcaster");
        assert_eq!(json["bonus_attributes"]["intelligence"], 2);
        assert_eq!(
            json["proficiencies"],
            serde_json::json!(["cast_magic", "read_magic"])
        );
    }
}
