//! Item descriptors - weapons, armor, and wondrous gear

use crate::types::{Ability, ArmorKind};
use serde::{Deserialize, Serialize};

/// Static description of an equippable item
///
/// Unknown catalog lookups resolve to `ItemDescriptor::inert`, which carries
/// no statistics at all, so a missing reference never poisons a derived-stat
/// computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemDescriptor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub kind: ItemKind,
    /// Flat armor class bonus while equipped (rings, cloaks, enchantments);
    /// stacks across items without deduplication
    #[serde(default)]
    pub ac_bonus: i32,
    /// Flat saving-throw bonus while equipped
    #[serde(default)]
    pub save_bonus: i32,
    /// Shield-equivalent AC bonus granted only while no armor and no shield
    /// are worn (bracers-style items); 0 = none
    #[serde(default)]
    pub unarmored_ward: i32,
    /// Additive ability bonuses, each capped at its own declared cap
    #[serde(default)]
    pub ability_bonuses: Vec<AbilityBonus>,
    /// Set-to-at-least ability overrides (`max(current, value)`)
    #[serde(default)]
    pub ability_overrides: Vec<AbilityOverride>,
}

/// What an item is, for equipping purposes
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    /// Body armor; only one piece is worn at a time
    Armor { base_ac: i32, armor: ArmorKind },
    /// Shield; only one is wielded at a time
    Shield { bonus: i32 },
    /// Weapon (damage expression is informational for the sheet)
    Weapon { damage: String },
    /// Anything else - rings, cloaks, adventuring gear
    #[default]
    Gear,
}

/// Additive ability bonus with a per-item cap (commonly 20 or 24)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityBonus {
    pub ability: Ability,
    pub amount: i32,
    #[serde(default = "default_bonus_cap")]
    pub cap: u8,
}

fn default_bonus_cap() -> u8 {
    20
}

/// Ability override: the score becomes at least `value` while equipped
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityOverride {
    pub ability: Ability,
    pub value: u8,
}

impl ItemDescriptor {
    /// Zero-stat placeholder for unknown catalog ids
    pub fn inert(id: impl Into<String>) -> Self {
        let id = id.into();
        ItemDescriptor {
            name: id.clone(),
            id,
            kind: ItemKind::Gear,
            ac_bonus: 0,
            save_bonus: 0,
            unarmored_ward: 0,
            ability_bonuses: Vec::new(),
            ability_overrides: Vec::new(),
        }
    }

    /// Whether this item is body armor
    pub fn is_armor(&self) -> bool {
        matches!(self.kind, ItemKind::Armor { .. })
    }

    /// Whether this item is a shield
    pub fn is_shield(&self) -> bool {
        matches!(self.kind, ItemKind::Shield { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inert_item_has_no_stats() {
        let item = ItemDescriptor::inert("mystery_object");
        assert_eq!(item.ac_bonus, 0);
        assert_eq!(item.save_bonus, 0);
        assert!(item.ability_bonuses.is_empty());
        assert!(item.ability_overrides.is_empty());
        assert!(!item.is_armor());
        assert!(!item.is_shield());
    }

    #[test]
    fn test_armor_parses_from_toml() {
        let toml = r#"
id = "plate_armor"
name = "Plate Armor"
kind = { type = "armor", base_ac = 18, armor = "heavy" }
"#;
        let item: ItemDescriptor = toml::from_str(toml).unwrap();
        match item.kind {
            ItemKind::Armor { base_ac, armor } => {
                assert_eq!(base_ac, 18);
                assert_eq!(armor, ArmorKind::Heavy);
            }
            _ => panic!("Expected armor"),
        }
    }

    #[test]
    fn test_override_item_parses_from_toml() {
        let toml = r#"
id = "gauntlets_of_ogre_power"
name = "Gauntlets of Ogre Power"

[[ability_overrides]]
ability = "strength"
value = 19
"#;
        let item: ItemDescriptor = toml::from_str(toml).unwrap();
        assert_eq!(item.ability_overrides.len(), 1);
        assert_eq!(item.ability_overrides[0].value, 19);
    }
}
