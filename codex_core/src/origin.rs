//! Species, background, and feat descriptors

use crate::types::Ability;
use serde::{Deserialize, Serialize};

/// Static description of a species
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesDescriptor {
    pub id: String,
    pub name: String,
    /// Flat hit points gained per character level (hardy lineages)
    #[serde(default)]
    pub hp_bonus_per_level: i32,
    /// Walking speed in feet
    #[serde(default = "default_speed")]
    pub speed: u8,
    /// Named traits, informational for the sheet
    #[serde(default)]
    pub traits: Vec<String>,
}

fn default_speed() -> u8 {
    30
}

/// Static description of a background
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundDescriptor {
    pub id: String,
    pub name: String,
    /// Each listed ability gains +1 during ability finalization
    #[serde(default)]
    pub ability_scores: Vec<Ability>,
    /// Skill proficiencies the background grants at creation
    #[serde(default)]
    pub skill_proficiencies: Vec<String>,
}

/// Static description of a feat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatDescriptor {
    pub id: String,
    pub name: String,
    /// Flat hit points gained per character level
    #[serde(default)]
    pub hp_bonus_per_level: i32,
    /// AC bonus active only while body armor is worn (defensive style)
    #[serde(default)]
    pub armored_ac_bonus: i32,
    /// Narrow spellcasting grant carried by the feat, if any
    #[serde(default)]
    pub spell_grant: Option<SpellGrant>,
}

/// A feat-granted sliver of spellcasting: a couple of cantrips and one
/// leveled spell, powered by a fixed ability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellGrant {
    pub ability: Ability,
    #[serde(default = "default_grant_cantrips")]
    pub cantrips: u8,
    #[serde(default = "default_grant_spells")]
    pub spells: u8,
}

fn default_grant_cantrips() -> u8 {
    2
}
fn default_grant_spells() -> u8 {
    1
}
