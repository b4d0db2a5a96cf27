//! The character build

use crate::abilities::AbilityScores;
use crate::inventory::Inventory;
use codex_core::{Ability, Alignment};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Hit-point record: `0 <= current <= max`, `temp >= 0`
///
/// `max` here is a cached copy of the derived maximum so damage and healing
/// can clamp without a codex in hand; the rules engine recomputes the true
/// maximum from scratch on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitPoints {
    pub current: i32,
    pub max: i32,
    pub temp: i32,
}

impl Default for HitPoints {
    fn default() -> Self {
        HitPoints {
            current: 1,
            max: 1,
            temp: 0,
        }
    }
}

impl HitPoints {
    pub fn full(max: i32) -> Self {
        let max = max.max(1);
        HitPoints {
            current: max,
            max,
            temp: 0,
        }
    }

    /// Update the maximum, clamping current into range
    pub fn set_max(&mut self, max: i32) {
        self.max = max.max(1);
        self.current = self.current.clamp(0, self.max);
    }

    /// Apply damage: temporary hit points absorb first, current floors at 0
    pub fn apply_damage(&mut self, amount: i32) {
        let amount = amount.max(0);
        let absorbed = amount.min(self.temp);
        self.temp -= absorbed;
        self.current = (self.current - (amount - absorbed)).max(0);
    }

    /// Heal up to the maximum
    pub fn heal(&mut self, amount: i32) {
        self.current = (self.current + amount.max(0)).min(self.max);
    }

    /// Grant temporary hit points; they do not stack, the higher value wins
    pub fn grant_temp(&mut self, amount: i32) {
        self.temp = self.temp.max(amount.max(0));
    }

    pub fn is_down(&self) -> bool {
        self.current == 0
    }
}

/// How hit points are accumulated past level 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HpMethod {
    /// Fixed expectation per level: `floor(die / 2) + 1 + CON`
    #[default]
    Average,
    /// Player-rolled dice recorded per level
    Manual,
}

/// An Ability Score Improvement decision, keyed by the level that granted it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AsiChoice {
    /// +1 to each chosen ability; choosing the same ability twice gives +2
    Stats { first: Ability, second: Ability },
    /// Take a feat instead (catalog id)
    Feat { feat: String },
}

/// A class resource pool sized to level (e.g. sorcery points)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourcePool {
    pub current: u32,
    pub max: u32,
}

impl ResourcePool {
    pub fn full(max: u32) -> Self {
        ResourcePool { current: max, max }
    }

    /// Resize the pool (on level change), clamping current into range
    pub fn resize(&mut self, max: u32) {
        self.max = max;
        self.current = self.current.min(max);
    }

    pub fn spend(&mut self, amount: u32) -> bool {
        if amount > self.current {
            return false;
        }
        self.current -= amount;
        true
    }

    pub fn restore(&mut self) {
        self.current = self.max;
    }
}

/// The raw character build, owned by the surrounding application
///
/// Every field is plain state. Derived statistics (finalized abilities,
/// armor class, saving throws, spell slots) are recomputed from this
/// struct by the rules engine on every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    /// Catalog ids into the reference tables
    pub species: String,
    pub class: String,
    #[serde(default)]
    pub subclass: Option<String>,
    pub background: String,
    #[serde(default)]
    pub alignment: Alignment,
    pub level: u8,
    pub abilities: AbilityScores,
    #[serde(default)]
    pub hit_points: HitPoints,
    #[serde(default)]
    pub hp_method: HpMethod,
    /// Manual hit-die rolls for levels 2..=level (empty under Average)
    #[serde(default)]
    pub hit_rolls: Vec<u8>,
    #[serde(default)]
    pub skill_proficiencies: BTreeSet<String>,
    /// Ordered feat list; duplicate-bearing feats may appear more than once
    #[serde(default)]
    pub feats: Vec<String>,
    #[serde(default)]
    pub languages: BTreeSet<String>,
    #[serde(default)]
    pub inventory: Inventory,
    /// Prepared or known spells, by catalog id
    #[serde(default)]
    pub prepared_spells: Vec<String>,
    #[serde(default)]
    pub resource_pool: Option<ResourcePool>,
    /// ASI decisions keyed by the level that granted the choice
    #[serde(default)]
    pub asi_decisions: BTreeMap<u8, AsiChoice>,
}

impl Character {
    /// A fresh level-1 build with default scores
    pub fn new(
        name: impl Into<String>,
        species: impl Into<String>,
        class: impl Into<String>,
        background: impl Into<String>,
    ) -> Self {
        Character {
            name: name.into(),
            species: species.into(),
            class: class.into(),
            subclass: None,
            background: background.into(),
            alignment: Alignment::default(),
            level: 1,
            abilities: AbilityScores::default(),
            hit_points: HitPoints::default(),
            hp_method: HpMethod::default(),
            hit_rolls: Vec::new(),
            skill_proficiencies: BTreeSet::new(),
            feats: Vec::new(),
            languages: BTreeSet::new(),
            inventory: Inventory::new(),
            prepared_spells: Vec::new(),
            resource_pool: None,
            asi_decisions: BTreeMap::new(),
        }
    }

    /// Level-indexed proficiency bonus: `1 + ceil(level / 4)`
    pub fn proficiency_bonus(&self) -> i32 {
        1 + (self.level as i32 + 3) / 4
    }

    /// Whether the feat list contains the given catalog id
    pub fn has_feat(&self, feat: &str) -> bool {
        self.feats.iter().any(|f| f == feat)
    }

    /// Toggle a spell in the prepared list (dedup on add)
    pub fn toggle_prepared(&mut self, spell: &str) {
        if let Some(index) = self.prepared_spells.iter().position(|s| s == spell) {
            self.prepared_spells.remove(index);
        } else {
            self.prepared_spells.push(spell.to_string());
        }
    }

    /// ASI decisions made at or below the current level
    pub fn asi_decisions_in_effect(&self) -> impl Iterator<Item = (&u8, &AsiChoice)> {
        let level = self.level;
        self.asi_decisions.iter().filter(move |(l, _)| **l <= level)
    }
}
