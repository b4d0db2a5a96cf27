//! Spell descriptors

use serde::{Deserialize, Serialize};

/// Static description of a spell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellDescriptor {
    pub id: String,
    pub name: String,
    /// Spell level; 0 = cantrip (consumes no slot)
    pub level: u8,
    pub school: School,
    /// Whether the spell can be cast as a ritual without a slot
    #[serde(default)]
    pub ritual: bool,
}

/// School of magic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum School {
    Abjuration,
    Conjuration,
    Divination,
    Enchantment,
    Evocation,
    Illusion,
    Necromancy,
    Transmutation,
}

impl SpellDescriptor {
    /// Whether this spell is a cantrip
    pub fn is_cantrip(&self) -> bool {
        self.level == 0
    }

    /// Minimum slot level required to cast (0 for cantrips)
    pub fn slot_cost(&self) -> u8 {
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cantrip_costs_no_slot() {
        let spell = SpellDescriptor {
            id: "fire_bolt".to_string(),
            name: "Fire Bolt".to_string(),
            level: 0,
            school: School::Evocation,
            ritual: false,
        };
        assert!(spell.is_cantrip());
        assert_eq!(spell.slot_cost(), 0);
    }
}
