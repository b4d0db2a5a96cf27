//! Base ability scores

use codex_core::Ability;
use serde::{Deserialize, Serialize};

/// Modifier for an ability score: `floor((score - 10) / 2)`
///
/// Euclidean division so scores below 10 round toward negative infinity
/// (score 9 is -1, not 0).
pub fn ability_modifier(score: u8) -> i32 {
    (score as i32 - 10).div_euclid(2)
}

/// The six base ability scores of a build
///
/// These are the raw, player-owned values; backgrounds, ASIs, capstones,
/// and equipment are layered on top by the ability resolver and never
/// written back here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    pub strength: u8,
    pub dexterity: u8,
    pub constitution: u8,
    pub intelligence: u8,
    pub wisdom: u8,
    pub charisma: u8,
}

impl Default for AbilityScores {
    fn default() -> Self {
        AbilityScores::flat(10)
    }
}

impl AbilityScores {
    /// All six scores set to the same value
    pub fn flat(score: u8) -> Self {
        AbilityScores {
            strength: score,
            dexterity: score,
            constitution: score,
            intelligence: score,
            wisdom: score,
            charisma: score,
        }
    }

    /// Scores in canonical order (STR, DEX, CON, INT, WIS, CHA)
    pub fn from_array(scores: [u8; 6]) -> Self {
        AbilityScores {
            strength: scores[0],
            dexterity: scores[1],
            constitution: scores[2],
            intelligence: scores[3],
            wisdom: scores[4],
            charisma: scores[5],
        }
    }

    pub fn get(&self, ability: Ability) -> u8 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    pub fn set(&mut self, ability: Ability, score: u8) {
        match ability {
            Ability::Strength => self.strength = score,
            Ability::Dexterity => self.dexterity = score,
            Ability::Constitution => self.constitution = score,
            Ability::Intelligence => self.intelligence = score,
            Ability::Wisdom => self.wisdom = score,
            Ability::Charisma => self.charisma = score,
        }
    }

    /// Modifier of the given ability
    pub fn modifier(&self, ability: Ability) -> i32 {
        ability_modifier(self.get(ability))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_rounds_down() {
        assert_eq!(ability_modifier(10), 0);
        assert_eq!(ability_modifier(11), 0);
        assert_eq!(ability_modifier(12), 1);
        assert_eq!(ability_modifier(9), -1);
        assert_eq!(ability_modifier(8), -1);
        assert_eq!(ability_modifier(7), -2);
        assert_eq!(ability_modifier(1), -5);
        assert_eq!(ability_modifier(20), 5);
        assert_eq!(ability_modifier(30), 10);
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut scores = AbilityScores::default();
        for ability in Ability::all() {
            scores.set(*ability, 15);
            assert_eq!(scores.get(*ability), 15);
        }
    }
}
