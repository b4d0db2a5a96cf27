//! Saving throws and skill bonuses

use crate::abilities::FinalAbilityScores;
use codex_core::{Ability, Codex};
use serde::Serialize;
use sheet_core::Character;
use std::collections::BTreeMap;

/// The eighteen standard skills and their governing abilities
pub const SKILLS: &[(&str, Ability)] = &[
    ("Acrobatics", Ability::Dexterity),
    ("Animal Handling", Ability::Wisdom),
    ("Arcana", Ability::Intelligence),
    ("Athletics", Ability::Strength),
    ("Deception", Ability::Charisma),
    ("History", Ability::Intelligence),
    ("Insight", Ability::Wisdom),
    ("Intimidation", Ability::Charisma),
    ("Investigation", Ability::Intelligence),
    ("Medicine", Ability::Wisdom),
    ("Nature", Ability::Intelligence),
    ("Perception", Ability::Wisdom),
    ("Performance", Ability::Charisma),
    ("Persuasion", Ability::Charisma),
    ("Religion", Ability::Intelligence),
    ("Sleight of Hand", Ability::Dexterity),
    ("Stealth", Ability::Dexterity),
    ("Survival", Ability::Wisdom),
];

/// Governing ability of a skill name, if it is a standard skill
pub fn skill_ability(skill: &str) -> Option<Ability> {
    SKILLS
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, ability)| *ability)
}

/// Per-ability saving-throw bonuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SavingThrows {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl SavingThrows {
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }
}

/// Whether the build is proficient in a saving throw
///
/// Granted by the class save list, or by a level-gated all-saves feature
/// that the static list cannot express.
fn save_proficient(character: &Character, codex: &Codex, ability: Ability) -> bool {
    let Some(class) = codex.class(&character.class) else {
        return false;
    };
    if class.save_proficiencies.contains(&ability) {
        return true;
    }
    class
        .all_saves_at
        .is_some_and(|threshold| character.level >= threshold)
}

/// Resolve all six saving-throw bonuses
///
/// `bonus = ability modifier + proficiency (if proficient) + flat item
/// bonuses from equipped protective gear`.
pub fn saving_throws(
    character: &Character,
    abilities: &FinalAbilityScores,
    codex: &Codex,
) -> SavingThrows {
    let proficiency = character.proficiency_bonus();
    let flat: i32 = character
        .inventory
        .equipped()
        .map(|instance| codex.item_or_inert(&instance.item).save_bonus)
        .sum();

    let resolve = |ability: Ability| {
        let proficient = save_proficient(character, codex, ability);
        abilities.modifier(ability) + if proficient { proficiency } else { 0 } + flat
    };

    SavingThrows {
        strength: resolve(Ability::Strength),
        dexterity: resolve(Ability::Dexterity),
        constitution: resolve(Ability::Constitution),
        intelligence: resolve(Ability::Intelligence),
        wisdom: resolve(Ability::Wisdom),
        charisma: resolve(Ability::Charisma),
    }
}

/// Bonus for a single skill
///
/// Unknown skill names contribute a zero ability modifier; proficiency
/// still applies if the character is trained in the name.
pub fn skill_bonus(character: &Character, abilities: &FinalAbilityScores, skill: &str) -> i32 {
    let modifier = skill_ability(skill).map_or(0, |ability| abilities.modifier(ability));
    let trained = character.skill_proficiencies.contains(skill);
    modifier + if trained { character.proficiency_bonus() } else { 0 }
}

/// Bonuses for every standard skill
pub fn skill_bonuses(character: &Character, abilities: &FinalAbilityScores) -> BTreeMap<String, i32> {
    SKILLS
        .iter()
        .map(|(name, _)| (name.to_string(), skill_bonus(character, abilities, name)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::finalize_abilities;
    use sheet_core::AbilityScores;

    fn character_with(class: &str, scores: [u8; 6], level: u8) -> Character {
        let mut character = Character::new("Test", "human", class, "hermit");
        character.abilities = AbilityScores::from_array(scores);
        character.level = level;
        character
    }

    #[test]
    fn test_proficient_save_adds_proficiency() {
        let codex = Codex::builtin();
        // Fighter is proficient in STR and CON saves
        let character = character_with("fighter", [16, 14, 12, 10, 10, 10], 5);
        let abilities = finalize_abilities(&character, &codex);
        let saves = saving_throws(&character, &abilities, &codex);
        assert_eq!(saves.strength, 3 + 3);
        assert_eq!(saves.constitution, 1 + 3);
        assert_eq!(saves.dexterity, 2);
    }

    #[test]
    fn test_all_saves_feature_is_level_gated() {
        let codex = Codex::builtin();
        // Monk gains proficiency in all saves at 14
        let before = character_with("monk", [10, 16, 10, 10, 14, 10], 13);
        let abilities = finalize_abilities(&before, &codex);
        assert_eq!(saving_throws(&before, &abilities, &codex).charisma, 0);

        let after = character_with("monk", [10, 16, 10, 10, 14, 10], 14);
        let abilities = finalize_abilities(&after, &codex);
        assert_eq!(saving_throws(&after, &abilities, &codex).charisma, 5);
    }

    #[test]
    fn test_protective_items_add_flat_save_bonus() {
        let codex = Codex::builtin();
        let mut character = character_with("fighter", [10, 10, 10, 10, 10, 10], 1);
        let ring = character.inventory.add("ring_of_protection", 1);
        let cloak = character.inventory.add("cloak_of_protection", 1);
        character.inventory.equip(ring, &codex);
        character.inventory.equip(cloak, &codex);
        let abilities = finalize_abilities(&character, &codex);
        let saves = saving_throws(&character, &abilities, &codex);
        // +2 flat on every save, proficiency on top for STR/CON
        assert_eq!(saves.wisdom, 2);
        assert_eq!(saves.strength, 2 + 2);
    }

    #[test]
    fn test_trained_skill_adds_proficiency() {
        let codex = Codex::builtin();
        let mut character = character_with("rogue", [10, 16, 10, 10, 10, 10], 5);
        character.skill_proficiencies.insert("Stealth".to_string());
        let abilities = finalize_abilities(&character, &codex);
        assert_eq!(skill_bonus(&character, &abilities, "Stealth"), 3 + 3);
        assert_eq!(skill_bonus(&character, &abilities, "Acrobatics"), 3);
    }

    #[test]
    fn test_unknown_skill_degrades_to_zero_modifier() {
        let codex = Codex::builtin();
        let mut character = character_with("rogue", [10, 16, 10, 10, 10, 10], 5);
        character
            .skill_proficiencies
            .insert("Tea Ceremony".to_string());
        let abilities = finalize_abilities(&character, &codex);
        assert_eq!(skill_bonus(&character, &abilities, "Tea Ceremony"), 3);
        assert_eq!(skill_bonus(&character, &abilities, "Basket Weaving"), 0);
    }

    #[test]
    fn test_skill_bonuses_cover_all_standard_skills() {
        let codex = Codex::builtin();
        let character = character_with("fighter", [10, 10, 10, 10, 10, 10], 1);
        let abilities = finalize_abilities(&character, &codex);
        let bonuses = skill_bonuses(&character, &abilities);
        assert_eq!(bonuses.len(), SKILLS.len());
        assert!(bonuses.values().all(|b| *b == 0));
    }
}
