//! Ability score finalization
//!
//! Finalized scores are computed by an ordered pipeline of pure stages.
//! Order matters: the early stages are additive (background, ASI, capstone,
//! equipment bonuses) and the final stage applies set-to-at-least equipment
//! overrides, which are floors rather than deltas and must see the fully
//! accumulated additive result.

use codex_core::{Ability, Codex};
use serde::Serialize;
use sheet_core::{AbilityScores, AsiChoice, Character};

/// Finalized ability scores, after every bonus and override has been layered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinalAbilityScores {
    scores: AbilityScores,
}

impl FinalAbilityScores {
    pub fn get(&self, ability: Ability) -> u8 {
        self.scores.get(ability)
    }

    pub fn modifier(&self, ability: Ability) -> i32 {
        self.scores.modifier(ability)
    }
}

/// One pipeline stage: reads build state, adjusts the working scores
type Stage = fn(&Character, &Codex, &mut AbilityScores);

/// The finalization pipeline, in application order
///
/// The additive stages are order-independent among themselves; the override
/// stage is not and must stay last.
const PIPELINE: &[Stage] = &[
    apply_background,
    apply_asi_choices,
    apply_capstone,
    apply_item_bonuses,
    apply_item_overrides,
];

/// Finalize ability scores for a build
pub fn finalize_abilities(character: &Character, codex: &Codex) -> FinalAbilityScores {
    let mut scores = character.abilities;
    for stage in PIPELINE {
        stage(character, codex, &mut scores);
    }
    FinalAbilityScores { scores }
}

/// Add `amount` to an ability, not exceeding `cap`
///
/// A score already at or above the cap is left alone; the bump never
/// lowers it. Results floor at 1.
fn bump_capped(scores: &mut AbilityScores, ability: Ability, amount: i32, cap: u8) {
    let current = scores.get(ability);
    if current >= cap {
        return;
    }
    let raised = (current as i32 + amount).min(cap as i32).max(1);
    scores.set(ability, raised as u8);
}

/// Stage 2: +1 per ability listed by the background, capped at 20
fn apply_background(character: &Character, codex: &Codex, scores: &mut AbilityScores) {
    let Some(background) = codex.background(&character.background) else {
        return;
    };
    for ability in &background.ability_scores {
        bump_capped(scores, *ability, 1, 20);
    }
}

/// Stage 3: ASI stat decisions at granted levels; the same ability chosen
/// twice yields +2, each application capped at 20 independently
fn apply_asi_choices(character: &Character, _codex: &Codex, scores: &mut AbilityScores) {
    for (_, choice) in character.asi_decisions_in_effect() {
        if let AsiChoice::Stats { first, second } = choice {
            bump_capped(scores, *first, 1, 20);
            bump_capped(scores, *second, 1, 20);
        }
    }
}

/// Stage 4: level-20 class capstone, allowed past the normal cap
fn apply_capstone(character: &Character, codex: &Codex, scores: &mut AbilityScores) {
    if character.level < 20 {
        return;
    }
    let Some(capstone) = codex
        .class(&character.class)
        .and_then(|c| c.capstone.as_ref())
    else {
        return;
    };
    for ability in &capstone.abilities {
        bump_capped(scores, *ability, capstone.bonus, capstone.cap);
    }
}

/// Stage 5: additive bonuses from equipped items, each at its own cap
fn apply_item_bonuses(character: &Character, codex: &Codex, scores: &mut AbilityScores) {
    for instance in character.inventory.equipped() {
        let descriptor = codex.item_or_inert(&instance.item);
        for bonus in &descriptor.ability_bonuses {
            bump_capped(scores, bonus.ability, bonus.amount, bonus.cap);
        }
    }
}

/// Stage 6: set-to-at-least overrides from equipped items
///
/// `max` is commutative and idempotent, so order among overriding items is
/// irrelevant and re-equipping cannot double-apply.
fn apply_item_overrides(character: &Character, codex: &Codex, scores: &mut AbilityScores) {
    for instance in character.inventory.equipped() {
        let descriptor = codex.item_or_inert(&instance.item);
        for over in &descriptor.ability_overrides {
            let current = scores.get(over.ability);
            scores.set(over.ability, current.max(over.value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codex_core::Ability::*;

    fn base_character(class: &str) -> Character {
        let mut character = Character::new("Test", "human", class, "soldier");
        character.abilities = AbilityScores::from_array([15, 14, 13, 12, 10, 8]);
        character
    }

    #[test]
    fn test_background_adds_one_per_listed_ability() {
        let codex = Codex::builtin();
        // soldier lists strength and constitution
        let character = base_character("fighter");
        let finalized = finalize_abilities(&character, &codex);
        assert_eq!(finalized.get(Strength), 16);
        assert_eq!(finalized.get(Constitution), 14);
        assert_eq!(finalized.get(Dexterity), 14);
    }

    #[test]
    fn test_background_bonus_caps_at_twenty() {
        let codex = Codex::builtin();
        let mut character = base_character("fighter");
        character.abilities.strength = 20;
        let finalized = finalize_abilities(&character, &codex);
        assert_eq!(finalized.get(Strength), 20);
    }

    #[test]
    fn test_asi_same_ability_twice_gives_plus_two() {
        let codex = Codex::builtin();
        let mut character = base_character("fighter");
        character.level = 4;
        character.asi_decisions.insert(
            4,
            AsiChoice::Stats {
                first: Dexterity,
                second: Dexterity,
            },
        );
        let finalized = finalize_abilities(&character, &codex);
        assert_eq!(finalized.get(Dexterity), 16);
    }

    #[test]
    fn test_asi_above_current_level_is_inert() {
        let codex = Codex::builtin();
        let mut character = base_character("fighter");
        character.level = 3;
        character.asi_decisions.insert(
            4,
            AsiChoice::Stats {
                first: Dexterity,
                second: Wisdom,
            },
        );
        let finalized = finalize_abilities(&character, &codex);
        assert_eq!(finalized.get(Dexterity), 14);
        assert_eq!(finalized.get(Wisdom), 10);
    }

    #[test]
    fn test_feat_asi_changes_no_scores() {
        let codex = Codex::builtin();
        let mut character = base_character("fighter");
        character.level = 4;
        character.asi_decisions.insert(
            4,
            AsiChoice::Feat {
                feat: "tough".to_string(),
            },
        );
        let finalized = finalize_abilities(&character, &codex);
        assert_eq!(finalized.get(Strength), 16);
        assert_eq!(finalized.get(Dexterity), 14);
    }

    #[test]
    fn test_capstone_pushes_past_twenty() {
        let codex = Codex::builtin();
        let mut character = base_character("barbarian");
        character.level = 20;
        character.abilities.strength = 19;
        // soldier background brings strength to 20, capstone adds 4 up to 25
        let finalized = finalize_abilities(&character, &codex);
        assert_eq!(finalized.get(Strength), 24);
    }

    #[test]
    fn test_capstone_respects_raised_cap() {
        let codex = Codex::builtin();
        let mut character = base_character("barbarian");
        character.level = 20;
        character.abilities.constitution = 22;
        let finalized = finalize_abilities(&character, &codex);
        assert_eq!(finalized.get(Constitution), 25);
    }

    #[test]
    fn test_capstone_inert_below_twenty() {
        let codex = Codex::builtin();
        let mut character = base_character("barbarian");
        character.level = 19;
        let finalized = finalize_abilities(&character, &codex);
        assert_eq!(finalized.get(Strength), 16);
    }

    #[test]
    fn test_item_bonus_caps_at_item_cap() {
        let codex = Codex::builtin();
        let mut character = base_character("fighter");
        character.abilities.constitution = 19;
        let stone = character.inventory.add("ioun_stone_of_fortitude", 1);
        character.inventory.equip(stone, &codex);
        // 19 + background(soldier lists con: 20) already at the stone's cap
        let finalized = finalize_abilities(&character, &codex);
        assert_eq!(finalized.get(Constitution), 20);
    }

    #[test]
    fn test_override_applies_after_additives() {
        let codex = Codex::builtin();
        let mut character = base_character("fighter");
        character.abilities.strength = 8;
        let gauntlets = character.inventory.add("gauntlets_of_ogre_power", 1);
        character.inventory.equip(gauntlets, &codex);
        // 8 + 1 (background) = 9, then floored up to 19 by the override
        let finalized = finalize_abilities(&character, &codex);
        assert_eq!(finalized.get(Strength), 19);
    }

    #[test]
    fn test_override_never_lowers() {
        let codex = Codex::builtin();
        let mut character = base_character("fighter");
        character.abilities.strength = 20;
        let gauntlets = character.inventory.add("gauntlets_of_ogre_power", 1);
        character.inventory.equip(gauntlets, &codex);
        let finalized = finalize_abilities(&character, &codex);
        assert_eq!(finalized.get(Strength), 20);
    }

    #[test]
    fn test_highest_override_wins() {
        let codex = Codex::builtin();
        let mut character = base_character("fighter");
        character.abilities.strength = 10;
        let gauntlets = character.inventory.add("gauntlets_of_ogre_power", 1);
        let belt = character.inventory.add("belt_of_hill_giant_strength", 1);
        character.inventory.equip(gauntlets, &codex);
        character.inventory.equip(belt, &codex);
        let finalized = finalize_abilities(&character, &codex);
        assert_eq!(finalized.get(Strength), 21);
    }

    #[test]
    fn test_unequipped_items_are_inert() {
        let codex = Codex::builtin();
        let mut character = base_character("fighter");
        character.abilities.strength = 10;
        let _ = character.inventory.add("gauntlets_of_ogre_power", 1);
        let finalized = finalize_abilities(&character, &codex);
        assert_eq!(finalized.get(Strength), 11);
    }

    #[test]
    fn test_reequip_does_not_double_apply() {
        let codex = Codex::builtin();
        let mut character = base_character("fighter");
        character.abilities.constitution = 16;
        let stone = character.inventory.add("ioun_stone_of_fortitude", 1);
        character.inventory.equip(stone, &codex);
        let once = finalize_abilities(&character, &codex).get(Constitution);
        character.inventory.unequip(stone);
        character.inventory.equip(stone, &codex);
        let again = finalize_abilities(&character, &codex).get(Constitution);
        assert_eq!(once, again);
    }
}
