//! Class and subclass descriptors

use crate::types::{Ability, CasterArchetype};
use serde::{Deserialize, Serialize};

/// Static description of a character class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub id: String,
    pub name: String,
    /// Size of the class hit die (6, 8, 10, or 12)
    pub hit_die: u8,
    /// Abilities the class is proficient in for saving throws
    #[serde(default)]
    pub save_proficiencies: Vec<Ability>,
    /// Skills the class may choose proficiencies from
    #[serde(default)]
    pub skill_options: Vec<String>,
    /// Suggested ability priority for quick builds
    #[serde(default)]
    pub stat_priority: Vec<Ability>,
    /// Level at which the subclass choice unlocks (0 = no subclasses)
    #[serde(default)]
    pub subclass_level: u8,
    /// Levels that grant an Ability Score Improvement choice
    #[serde(default)]
    pub asi_levels: Vec<u8>,
    /// Level-20 capstone ability bonus, if the class has one
    #[serde(default)]
    pub capstone: Option<Capstone>,
    /// Alternative AC formula active while no body armor is worn
    #[serde(default)]
    pub unarmored_defense: Option<UnarmoredDefense>,
    /// Level at which the class becomes proficient in all saving throws
    #[serde(default)]
    pub all_saves_at: Option<u8>,
    /// Spellcasting progression, if the class casts at all
    #[serde(default)]
    pub spellcasting: Option<SpellcastingConfig>,
    /// Level-indexed feature grants (informational, surfaced on level-up)
    #[serde(default)]
    pub features: Vec<FeatureGrant>,
}

/// Level-20 capstone: a flat bonus to specific abilities that may exceed
/// the normal score cap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capstone {
    pub abilities: Vec<Ability>,
    #[serde(default = "default_capstone_bonus")]
    pub bonus: i32,
    /// Raised score cap the capstone may push up to
    #[serde(default = "default_capstone_cap")]
    pub cap: u8,
}

fn default_capstone_bonus() -> i32 {
    4
}
fn default_capstone_cap() -> u8 {
    25
}

/// AC formula used while no body armor is equipped: `base + sum(modifiers)`
///
/// The contributing abilities are listed explicitly, Dexterity included,
/// so `10 + DEX + CON` and `13 + DEX` are both representable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnarmoredDefense {
    #[serde(default = "default_unarmored_base")]
    pub base: i32,
    pub abilities: Vec<Ability>,
}

fn default_unarmored_base() -> i32 {
    10
}

/// How a class accesses and prepares spells
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellcastingConfig {
    pub archetype: CasterArchetype,
    /// Ability that powers spell attack rolls and save DCs
    pub ability: Ability,
    /// Cantrips known per character level (empty = the class has no cantrips)
    #[serde(default)]
    pub cantrips_known: Vec<u8>,
    /// Spells known per character level, for classes with a fixed known list
    #[serde(default)]
    pub spells_known: Option<Vec<u8>>,
    /// Prepared-spell cap formula, for classes that prepare from a full list
    #[serde(default)]
    pub prepared: Option<PreparedFormula>,
    /// Name of the level-sized resource pool the class carries, if any
    #[serde(default)]
    pub resource_pool: Option<String>,
}

/// Prepared-spell cap: `level / divisor (+ spellcasting modifier), min 1`
///
/// Rounding of the level term varies per class, so it is declared rather
/// than inferred.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreparedFormula {
    #[serde(default = "default_divisor")]
    pub divisor: u8,
    #[serde(default)]
    pub round_up: bool,
}

fn default_divisor() -> u8 {
    1
}

impl PreparedFormula {
    /// Level contribution to the prepared cap
    pub fn level_term(&self, level: u8) -> i32 {
        let level = level as i32;
        let divisor = self.divisor.max(1) as i32;
        if self.round_up {
            (level + divisor - 1) / divisor
        } else {
            level / divisor
        }
    }
}

/// A named feature gained at a specific level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureGrant {
    pub level: u8,
    pub name: String,
}

/// Static description of a subclass
///
/// A subclass may refine its class with its own unarmored-defense formula,
/// a per-level hit-point bonus, or a spellcasting progression of its own
/// (this is how a martial class gains a third-caster subclass).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubclassDescriptor {
    pub id: String,
    pub name: String,
    /// Id of the class this subclass belongs to
    pub class: String,
    #[serde(default)]
    pub unarmored_defense: Option<UnarmoredDefense>,
    /// Flat hit points gained per character level
    #[serde(default)]
    pub hp_bonus_per_level: i32,
    #[serde(default)]
    pub spellcasting: Option<SpellcastingConfig>,
    #[serde(default)]
    pub features: Vec<FeatureGrant>,
}

impl ClassDescriptor {
    /// Whether the given level grants an ASI choice
    pub fn grants_asi_at(&self, level: u8) -> bool {
        self.asi_levels.contains(&level)
    }

    /// Whether the given level unlocks the subclass choice
    pub fn unlocks_subclass_at(&self, level: u8) -> bool {
        self.subclass_level != 0 && self.subclass_level == level
    }

    /// Feature names granted exactly at `level`
    pub fn features_at(&self, level: u8) -> impl Iterator<Item = &str> {
        self.features
            .iter()
            .filter(move |f| f.level == level)
            .map(|f| f.name.as_str())
    }
}

impl SubclassDescriptor {
    /// Feature names granted exactly at `level`
    pub fn features_at(&self, level: u8) -> impl Iterator<Item = &str> {
        self.features
            .iter()
            .filter(move |f| f.level == level)
            .map(|f| f.name.as_str())
    }
}
