use serde::{Deserialize, Serialize};
use std::fmt;

/// The six core abilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    /// Get all abilities in canonical order
    pub fn all() -> &'static [Ability] {
        &[
            Ability::Strength,
            Ability::Dexterity,
            Ability::Constitution,
            Ability::Intelligence,
            Ability::Wisdom,
            Ability::Charisma,
        ]
    }

    /// Three-letter abbreviation used on character sheets
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Ability::Strength => "STR",
            Ability::Dexterity => "DEX",
            Ability::Constitution => "CON",
            Ability::Intelligence => "INT",
            Ability::Wisdom => "WIS",
            Ability::Charisma => "CHA",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ability::Strength => write!(f, "Strength"),
            Ability::Dexterity => write!(f, "Dexterity"),
            Ability::Constitution => write!(f, "Constitution"),
            Ability::Intelligence => write!(f, "Intelligence"),
            Ability::Wisdom => write!(f, "Wisdom"),
            Ability::Charisma => write!(f, "Charisma"),
        }
    }
}

/// Weight class of body armor, which determines how much of the wearer's
/// Dexterity modifier counts toward armor class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorKind {
    Light,
    Medium,
    Heavy,
}

impl ArmorKind {
    /// Maximum Dexterity bonus the armor admits (None = uncapped)
    pub fn max_dex_bonus(&self) -> Option<i32> {
        match self {
            ArmorKind::Light => None,
            ArmorKind::Medium => Some(2),
            ArmorKind::Heavy => Some(0),
        }
    }
}

/// Caster archetype, which determines the shape of spell-slot progression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CasterArchetype {
    Full,
    Half,
    Pact,
    Third,
    #[default]
    None,
}

impl fmt::Display for CasterArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CasterArchetype::Full => write!(f, "Full"),
            CasterArchetype::Half => write!(f, "Half"),
            CasterArchetype::Pact => write!(f, "Pact"),
            CasterArchetype::Third => write!(f, "Third"),
            CasterArchetype::None => write!(f, "None"),
        }
    }
}

/// Character alignment on the law/chaos and good/evil axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    LawfulGood,
    NeutralGood,
    ChaoticGood,
    LawfulNeutral,
    #[default]
    TrueNeutral,
    ChaoticNeutral,
    LawfulEvil,
    NeutralEvil,
    ChaoticEvil,
}
