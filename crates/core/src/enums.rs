//! Closed string-valued enumerations of the heroes catalog.
//!
//! The wire and store representation is the snake_case variant name
//! (`cast_magic`, `target_plus`, ...). Internal logic works with the tagged
//! enums; boundary input is lowercased by the handlers and parsed here, and
//! anything outside the closed set is rejected with [`UnknownValue`] so
//! filters can treat it as "zero matches" rather than an error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A string that does not belong to the closed set of a catalog enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field} value: {value}")]
pub struct UnknownValue {
    pub field: &'static str,
    pub value: String,
}

macro_rules! catalog_enum {
    (
        $(#[$outer:meta])*
        $name:ident as $field:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $text:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// The snake_case wire/store representation.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err(UnknownValue {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = UnknownValue;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }
    };
}

catalog_enum! {
    /// Natural class abilities, like being able to use complex weapons or
    /// cast magic. Classes come with two; multiclassing may add more.
    Proficiency as "proficiency" {
        /// Small cold weapons: daggers, shortswords, handaxes, bows.
        SimpleWeapons = "simple_weapons",
        /// Bigger cold weapons: longswords, greataxes, lances, warbows.
        ComplexWeapons = "complex_weapons",
        /// Can cast spells.
        CastMagic = "cast_magic",
        /// Can read magically engraved items: spellbooks, runes, enchanted weapons.
        ReadMagic = "read_magic",
        /// Can pick locks, disarm traps and steal from unsuspecting pockets.
        Pickpocket = "pickpocket",
    }
}

catalog_enum! {
    /// A class's strategic archetype. Classes usually have exactly one.
    Role as "role" {
        /// Melee fighting, high endurance and damage output.
        Fighter = "fighter",
        /// Spell access: damage, support or jack-of-all-trades.
        Spellcaster = "spellcaster",
        /// Cunning and deceiving: ranged fighting, treachery, stealth.
        Dexterous = "dexterous",
    }
}

catalog_enum! {
    /// How a skill's difficulty target is determined.
    DifficultyType as "difficulty_type" {
        /// Always active or automatic on activation, no test required.
        Auto = "auto",
        /// Fixed target number.
        Fixed = "fixed",
        /// Depends on the player's roleplaying choice.
        Variable = "variable",
        /// Set from a target value (defense, dodge) plus a modifier.
        TargetPlus = "target_plus",
    }
}

catalog_enum! {
    /// When a skill activates.
    Activation as "activation" {
        /// Performed during your own turn.
        Action = "action",
        /// Triggered by a precondition, like taking damage.
        Reaction = "reaction",
        /// Always active.
        Passive = "passive",
    }
}

catalog_enum! {
    /// Who may learn a skill.
    Source as "source" {
        /// Anyone, provided the skill requirements are met.
        Base = "base",
        /// Members of a determined race only.
        Race = "race",
        /// Members of a determined class only.
        Class = "class",
        /// Learnt from ancestral inheritance.
        Ancestor = "ancestor",
    }
}

catalog_enum! {
    /// Skill category.
    SkillType as "type" {
        Ability = "ability",
        /// Usually passives or racial feats; may change attributes or appearance.
        Characteristic = "characteristic",
        /// Requires proficiency and/or in-game teaching.
        Technique = "technique",
        /// Requires the cast_magic proficiency; can be kept in spellbooks.
        Spell = "spell",
    }
}

catalog_enum! {
    /// Level gate for acquiring a skill.
    LevelRequirement as "level_requirement" {
        /// No gate; learnable whenever points and access allow.
        None = "none",
        /// Level 5 or above.
        Advanced = "advanced",
        /// Level 10 or above; classes rarely have more than two of these.
        Master = "master",
        /// Must be taken at level 1, on hero creation.
        Initial = "initial",
    }
}
