//! Armor class resolution
//!
//! AC is state-based rather than a single formula:
//! 1. Base value from worn armor (with a Dexterity cap) or, unarmored, a
//!    class/subclass defense formula falling back to `10 + DEX`
//! 2. Shield bonus, independent of armor state
//! 3. Flat magic bonuses from every equipped item, stacking freely
//! 4. Defensive fighting style, only while body armor is worn
//! 5. Ward items (bracers) standing in for a shield, only while neither
//!    armor nor a shield is worn

use crate::abilities::FinalAbilityScores;
use codex_core::{Ability, Codex, ItemKind, UnarmoredDefense};
use sheet_core::{Character, WornSlot};

/// Resolve armor class from finalized abilities and equipped inventory
pub fn armor_class(
    character: &Character,
    abilities: &FinalAbilityScores,
    codex: &Codex,
) -> i32 {
    let dex = abilities.modifier(Ability::Dexterity);

    let armor = character
        .inventory
        .worn(WornSlot::Armor)
        .map(|instance| codex.item_or_inert(&instance.item));
    let shield = character
        .inventory
        .worn(WornSlot::Shield)
        .map(|instance| codex.item_or_inert(&instance.item));

    // Step 1: base value
    let mut ac = match armor.map(|a| &a.kind) {
        Some(ItemKind::Armor { base_ac, armor }) => {
            let dex_contribution = match armor.max_dex_bonus() {
                Some(cap) => dex.min(cap),
                None => dex,
            };
            base_ac + dex_contribution
        }
        // A non-armor descriptor in the armor slot only happens for a
        // dangling catalog reference; treat it as unarmored
        _ => unarmored_base(character, abilities, codex),
    };

    // Step 2: shield
    if let Some(shield) = shield {
        if let ItemKind::Shield { bonus } = &shield.kind {
            ac += *bonus;
        }
    }

    // Step 3: flat magic bonuses from all equipped items
    for instance in character.inventory.equipped() {
        ac += codex.item_or_inert(&instance.item).ac_bonus;
    }

    // Step 4: defensive fighting style, armored only
    if armor.is_some() {
        for feat in &character.feats {
            if let Some(descriptor) = codex.feat(feat) {
                ac += descriptor.armored_ac_bonus;
            }
        }
    }

    // Step 5: ward items stand in for a shield when neither is worn;
    // multiple wards do not stack, the highest applies
    if armor.is_none() && shield.is_none() {
        let ward = character
            .inventory
            .equipped()
            .map(|instance| codex.item_or_inert(&instance.item).unarmored_ward)
            .max()
            .unwrap_or(0);
        ac += ward.max(0);
    }

    ac
}

/// Unarmored base AC: the class formula takes precedence over a
/// subclass-only formula; with neither, `10 + DEX`
fn unarmored_base(character: &Character, abilities: &FinalAbilityScores, codex: &Codex) -> i32 {
    let class_formula = codex
        .class(&character.class)
        .and_then(|c| c.unarmored_defense.as_ref());
    let subclass_formula = character
        .subclass
        .as_deref()
        .and_then(|id| codex.subclass(id))
        .and_then(|s| s.unarmored_defense.as_ref());

    match class_formula.or(subclass_formula) {
        Some(formula) => evaluate_formula(formula, abilities),
        None => 10 + abilities.modifier(Ability::Dexterity),
    }
}

fn evaluate_formula(formula: &UnarmoredDefense, abilities: &FinalAbilityScores) -> i32 {
    formula.base
        + formula
            .abilities
            .iter()
            .map(|a| abilities.modifier(*a))
            .sum::<i32>()
}
