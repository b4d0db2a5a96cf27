//! Hit point calculation
//!
//! Maximum hit points are recomputed from scratch on every read; nothing is
//! cached, so retroactive sources (a newly chosen subclass with a per-level
//! bonus, a Constitution increase) are always fully paid out.

use crate::abilities::FinalAbilityScores;
use codex_core::{Ability, Codex};
use rand::Rng;
use sheet_core::{Character, HitPoints, HpMethod};

/// Maximum hit points for a build
///
/// Level 1 always grants the full hit die plus the Constitution modifier,
/// regardless of method. Levels 2..=N grant either the fixed average
/// (`floor(die / 2) + 1 + CON`) or the recorded manual rolls plus CON.
/// Flat per-level bonuses from species, subclass, and feats are each
/// multiplied by level and added once. The result never drops below 1.
pub fn max_hit_points(
    character: &Character,
    abilities: &FinalAbilityScores,
    codex: &Codex,
) -> i32 {
    let hit_die = codex
        .class(&character.class)
        .map_or(0, |c| c.hit_die as i32);
    let con = abilities.modifier(Ability::Constitution);
    let level = character.level.clamp(1, 20) as i32;

    // Level 1 is always the full die, never averaged or rolled
    let mut hp = hit_die + con;

    let levels_past_first = level - 1;
    match character.hp_method {
        HpMethod::Average => {
            hp += (average_level_gain(hit_die as u8, con)) * levels_past_first;
        }
        HpMethod::Manual => {
            let rolled: i32 = character
                .hit_rolls
                .iter()
                .take(levels_past_first as usize)
                .map(|r| *r as i32)
                .sum();
            hp += rolled + con * levels_past_first;
        }
    }

    hp += per_level_bonus(character, codex) * level;
    hp.max(1)
}

/// Expected hit-point gain for one level under the average method
pub fn average_level_gain(hit_die: u8, con_modifier: i32) -> i32 {
    hit_die as i32 / 2 + 1 + con_modifier
}

/// Flat hit points gained per character level from species, subclass, and
/// feats, summed across sources
pub(crate) fn per_level_bonus(character: &Character, codex: &Codex) -> i32 {
    let species = codex
        .species(&character.species)
        .map_or(0, |s| s.hp_bonus_per_level);
    let subclass = character
        .subclass
        .as_deref()
        .and_then(|id| codex.subclass(id))
        .map_or(0, |s| s.hp_bonus_per_level);
    let feats: i32 = character
        .feats
        .iter()
        .filter_map(|id| codex.feat(id))
        .map(|f| f.hp_bonus_per_level)
        .sum();
    species + subclass + feats
}

/// Roll one hit die for the manual method
pub fn roll_hit_die(rng: &mut impl Rng, hit_die: u8) -> u8 {
    rng.gen_range(1..=hit_die.max(1))
}

/// The `{current, max, temp}` record with the recomputed maximum
///
/// Current is clamped into the recomputed range; temporary hit points pass
/// through unchanged.
pub fn hit_point_record(
    character: &Character,
    abilities: &FinalAbilityScores,
    codex: &Codex,
) -> HitPoints {
    let max = max_hit_points(character, abilities, codex);
    HitPoints {
        current: character.hit_points.current.clamp(0, max),
        max,
        temp: character.hit_points.temp.max(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::finalize_abilities;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use sheet_core::AbilityScores;

    fn character_with(class: &str, con: u8, level: u8) -> Character {
        let mut character = Character::new("Test", "human", class, "hermit");
        character.abilities = AbilityScores::from_array([10, 10, con, 10, 10, 10]);
        character.level = level;
        character
    }

    fn resolve(character: &Character, codex: &Codex) -> i32 {
        let abilities = finalize_abilities(character, codex);
        max_hit_points(character, &abilities, codex)
    }

    #[test]
    fn test_level_one_wizard_takes_full_die() {
        let codex = Codex::builtin();
        let character = character_with("wizard", 14, 1);
        // 6 + 2, independent of method
        assert_eq!(resolve(&character, &codex), 8);

        let mut manual = character.clone();
        manual.hp_method = HpMethod::Manual;
        assert_eq!(resolve(&manual, &codex), 8);
    }

    #[test]
    fn test_average_accumulation() {
        let codex = Codex::builtin();
        let character = character_with("fighter", 14, 5);
        // 10 + 2 at level 1, then 4 levels of (5 + 1 + 2)
        assert_eq!(resolve(&character, &codex), 12 + 4 * 8);
    }

    #[test]
    fn test_manual_rolls_replace_average() {
        let codex = Codex::builtin();
        let mut character = character_with("fighter", 14, 4);
        character.hp_method = HpMethod::Manual;
        character.hit_rolls = vec![10, 1, 7];
        // 12 at level 1, then rolls 10+1+7 plus CON for three levels
        assert_eq!(resolve(&character, &codex), 12 + 18 + 3 * 2);
    }

    #[test]
    fn test_species_bonus_scales_with_level() {
        let codex = Codex::builtin();
        let mut character = character_with("fighter", 10, 6);
        character.species = "hill_dwarf".to_string();
        let baseline = resolve(&character_with("fighter", 10, 6), &codex);
        assert_eq!(resolve(&character, &codex), baseline + 6);
    }

    #[test]
    fn test_subclass_bonus_scales_with_level() {
        let codex = Codex::builtin();
        let mut character = character_with("sorcerer", 12, 9);
        character.subclass = Some("draconic_sorcery".to_string());
        let mut plain = character.clone();
        plain.subclass = None;
        assert_eq!(resolve(&character, &codex), resolve(&plain, &codex) + 9);
    }

    #[test]
    fn test_tough_feat_adds_two_per_level() {
        let codex = Codex::builtin();
        let mut character = character_with("wizard", 10, 7);
        character.feats.push("tough".to_string());
        let mut plain = character.clone();
        plain.feats.clear();
        assert_eq!(resolve(&character, &codex), resolve(&plain, &codex) + 14);
    }

    #[test]
    fn test_hp_floors_at_one() {
        let codex = Codex::builtin();
        // CON 1 wizard: 6 - 5 = 1 at level 1
        let character = character_with("wizard", 1, 1);
        assert_eq!(resolve(&character, &codex), 1);

        // Unknown class degrades to a zero hit die; still floors at 1
        let unknown = character_with("mystic", 1, 1);
        assert_eq!(resolve(&unknown, &codex), 1);
    }

    #[test]
    fn test_roll_hit_die_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let roll = roll_hit_die(&mut rng, 8);
            assert!((1..=8).contains(&roll));
        }
    }

    #[test]
    fn test_record_clamps_current_to_recomputed_max() {
        let codex = Codex::builtin();
        let mut character = character_with("fighter", 14, 3);
        character.hit_points = HitPoints {
            current: 999,
            max: 999,
            temp: 4,
        };
        let abilities = finalize_abilities(&character, &codex);
        let record = hit_point_record(&character, &abilities, &codex);
        assert_eq!(record.max, resolve(&character, &codex));
        assert_eq!(record.current, record.max);
        assert_eq!(record.temp, 4);
    }
}
