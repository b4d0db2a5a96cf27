//! The derived sheet - every computed statistic in one plain-data snapshot

use crate::abilities::{finalize_abilities, FinalAbilityScores};
use crate::combat::{armor_class, hit_point_record};
use crate::proficiency::{saving_throws, skill_bonuses, SavingThrows};
use crate::spellcasting::{spellcasting, SpellcastingSummary};
use codex_core::Codex;
use serde::Serialize;
use sheet_core::{Character, HitPoints};
use std::collections::BTreeMap;

/// Every derived statistic for a build, computed in one pass
///
/// This is the record the presentation layer renders. It is recomputed
/// from scratch on every call; nothing in it is cached or invalidated.
#[derive(Debug, Clone, Serialize)]
pub struct DerivedSheet {
    pub abilities: FinalAbilityScores,
    pub proficiency_bonus: i32,
    pub armor_class: i32,
    pub hit_points: HitPoints,
    pub saving_throws: SavingThrows,
    pub skills: BTreeMap<String, i32>,
    pub spellcasting: SpellcastingSummary,
}

/// Compute the full derived sheet for a build
pub fn derive_sheet(character: &Character, codex: &Codex) -> DerivedSheet {
    let abilities = finalize_abilities(character, codex);
    DerivedSheet {
        proficiency_bonus: character.proficiency_bonus(),
        armor_class: armor_class(character, &abilities, codex),
        hit_points: hit_point_record(character, &abilities, codex),
        saving_throws: saving_throws(character, &abilities, codex),
        skills: skill_bonuses(character, &abilities),
        spellcasting: spellcasting(character, &abilities, codex),
        abilities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codex_core::Ability;
    use sheet_core::AbilityScores;

    #[test]
    fn test_sheet_is_consistent_with_individual_resolvers() {
        let codex = Codex::builtin();
        let mut character = Character::new("Vara", "hill_dwarf", "sorcerer", "sage");
        character.level = 9;
        character.subclass = Some("draconic_sorcery".to_string());
        character.abilities = AbilityScores::from_array([10, 14, 14, 10, 10, 16]);

        let sheet = derive_sheet(&character, &codex);
        let abilities = finalize_abilities(&character, &codex);

        assert_eq!(sheet.abilities, abilities);
        assert_eq!(sheet.armor_class, armor_class(&character, &abilities, &codex));
        assert_eq!(sheet.proficiency_bonus, 4);
        assert_eq!(
            sheet.spellcasting,
            spellcasting(&character, &abilities, &codex)
        );
        assert_eq!(sheet.skills.len(), crate::proficiency::SKILLS.len());
    }

    #[test]
    fn test_sheet_serializes_for_the_presentation_layer() {
        let codex = Codex::builtin();
        let mut character = Character::new("Vara", "human", "wizard", "sage");
        character.abilities.intelligence = 16;

        let sheet = derive_sheet(&character, &codex);
        let json = serde_json::to_value(&sheet).unwrap();
        assert!(json["armor_class"].is_number());
        assert!(json["spellcasting"]["slots"].is_array());
        assert!(json["saving_throws"]["intelligence"].is_number());
    }

    #[test]
    fn test_unknown_references_degrade_to_a_usable_sheet() {
        let codex = Codex::builtin();
        let mut character = Character::new("Null", "void_species", "void_class", "void_origin");
        let mystery = character.inventory.add("void_item", 1);
        character.inventory.equip(mystery, &codex);

        let sheet = derive_sheet(&character, &codex);
        assert_eq!(sheet.abilities.get(Ability::Strength), 10);
        assert_eq!(sheet.armor_class, 10);
        assert_eq!(sheet.hit_points.max, 1);
        assert!(!sheet.spellcasting.is_spellcaster);
    }
}
