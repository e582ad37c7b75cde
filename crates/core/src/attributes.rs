//! The hero attribute block.

use serde::{Deserialize, Serialize};

/// A hero's four power measurements: strength (physical power), agility
/// (velocity and dexterity), intelligence (smartness and spellcasting) and
/// overall willpower.
///
/// Embedded value object: races carry a base block, classes a bonus block.
/// Stored as flat integer columns, never as a standalone row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub strength: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub willpower: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_snake_case_fields() {
        let attr = Attribute {
            strength: 3,
            agility: 2,
            intelligence: 1,
            willpower: 0,
        };
        let json = serde_json::to_value(&attr).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "strength": 3,
                "agility": 2,
                "intelligence": 1,
                "willpower": 0,
            })
        );
    }

    #[test]
    fn round_trips_through_json() {
        let attr = Attribute {
            strength: 5,
            agility: 4,
            intelligence: 3,
            willpower: 2,
        };
        let json = serde_json::to_string(&attr).unwrap();
        let back: Attribute = serde_json::from_str(&json).unwrap();
        assert_eq!(attr, back);
    }
}
