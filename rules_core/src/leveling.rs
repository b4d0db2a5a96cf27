//! Leveling state machine
//!
//! A character at level N (< 20) may transition to N+1. The transition is
//! immutable: validation happens first, and on success a new character
//! value is returned alongside a report - the input is never touched, so a
//! failed validation cannot leave a partial commit behind.

use crate::abilities::finalize_abilities;
use crate::combat::{average_level_gain, max_hit_points, per_level_bonus};
use crate::spellcasting::spellcasting;
use codex_core::{Ability, Codex};
use serde::Serialize;
use sheet_core::{AsiChoice, Character, HpMethod, ResourcePool};
use thiserror::Error;

/// Highest attainable level; leveling past it is rejected
pub const LEVEL_CAP: u8 = 20;

/// A rejected level-up decision
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelUpError {
    #[error("already at the level cap")]
    AtLevelCap,
    #[error("a subclass must be chosen at this level")]
    SubclassRequired,
    #[error("unknown subclass '{0}'")]
    UnknownSubclass(String),
    #[error("subclass '{subclass}' does not belong to class '{class}'")]
    SubclassMismatch { subclass: String, class: String },
    #[error("an ability score improvement decision is required at this level")]
    AsiRequired,
    #[error("a hit-die roll is required under the manual hit-point method")]
    HitRollRequired,
    #[error("hit-die roll {roll} is out of range for a d{die}")]
    InvalidHitRoll { roll: u8, die: u8 },
}

/// Decisions supplied with a level-up request
///
/// Decisions for features the new level does not unlock are ignored; only
/// missing or malformed required decisions block the transition.
#[derive(Debug, Clone, Default)]
pub struct LevelUpDecision {
    /// Subclass catalog id, when the new level unlocks the choice
    pub subclass: Option<String>,
    /// ASI choice, when the new level grants one
    pub asi: Option<AsiChoice>,
    /// Hit-die roll, when the build uses the manual hit-point method
    pub hit_roll: Option<u8>,
}

/// What the next level will ask for, and the recommended hit-point gain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelPlan {
    pub new_level: u8,
    pub requires_subclass: bool,
    pub requires_asi: bool,
    pub requires_hit_roll: bool,
    /// Average-method gain including per-level bonuses already in effect
    pub average_hp_gain: i32,
    /// Features the class grants at the new level
    pub new_features: Vec<String>,
}

/// Outcome of a committed level-up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelUpReport {
    pub new_level: u8,
    pub proficiency_bonus: i32,
    /// Total maximum hit points gained, retroactive bonuses included
    pub hp_gained: i32,
    pub subclass_chosen: Option<String>,
    pub new_features: Vec<String>,
}

/// Plan the next level-up without committing anything
///
/// Returns `None` at the level cap.
pub fn preview_level_up(character: &Character, codex: &Codex) -> Option<LevelPlan> {
    if character.level >= LEVEL_CAP {
        return None;
    }
    let new_level = character.level + 1;
    let class = codex.class(&character.class);

    let abilities = finalize_abilities(character, codex);
    let con = abilities.modifier(Ability::Constitution);
    let hit_die = class.map_or(0, |c| c.hit_die);

    Some(LevelPlan {
        new_level,
        requires_subclass: class
            .is_some_and(|c| c.unlocks_subclass_at(new_level))
            && character.subclass.is_none(),
        requires_asi: class.is_some_and(|c| c.grants_asi_at(new_level)),
        requires_hit_roll: character.hp_method == HpMethod::Manual,
        average_hp_gain: average_level_gain(hit_die, con) + per_level_bonus(character, codex),
        new_features: features_at(character, codex, new_level),
    })
}

/// Advance the character by one level
///
/// Validates every required decision before committing. On success the
/// returned character carries the new level, any subclass assignment, the
/// recorded ASI effect, and recomputed hit points; the report summarizes
/// what changed. Attempting to level past the cap fails with no state
/// change.
pub fn level_up(
    character: &Character,
    decision: &LevelUpDecision,
    codex: &Codex,
) -> Result<(Character, LevelUpReport), LevelUpError> {
    if character.level >= LEVEL_CAP {
        return Err(LevelUpError::AtLevelCap);
    }
    let new_level = character.level + 1;
    let class = codex.class(&character.class);

    // Step 1: validate the subclass choice
    let requires_subclass =
        class.is_some_and(|c| c.unlocks_subclass_at(new_level)) && character.subclass.is_none();
    let chosen_subclass = if requires_subclass {
        let id = decision
            .subclass
            .as_deref()
            .ok_or(LevelUpError::SubclassRequired)?;
        let subclass = codex
            .subclass(id)
            .ok_or_else(|| LevelUpError::UnknownSubclass(id.to_string()))?;
        if subclass.class != character.class {
            return Err(LevelUpError::SubclassMismatch {
                subclass: id.to_string(),
                class: character.class.clone(),
            });
        }
        Some(id.to_string())
    } else {
        None
    };

    // Step 2: validate the ASI choice
    let requires_asi = class.is_some_and(|c| c.grants_asi_at(new_level));
    let asi = if requires_asi {
        Some(decision.asi.clone().ok_or(LevelUpError::AsiRequired)?)
    } else {
        None
    };

    // Step 3: validate the manual hit roll
    let hit_roll = if character.hp_method == HpMethod::Manual {
        let roll = decision.hit_roll.ok_or(LevelUpError::HitRollRequired)?;
        if let Some(die) = class.map(|c| c.hit_die) {
            if !(1..=die).contains(&roll) {
                return Err(LevelUpError::InvalidHitRoll { roll, die });
            }
        }
        Some(roll)
    } else {
        None
    };

    // Step 4: commit onto a copy
    let old_max = max_hit_points(character, &finalize_abilities(character, codex), codex);

    let mut next = character.clone();
    next.level = new_level;
    if let Some(subclass) = chosen_subclass.clone() {
        next.subclass = Some(subclass);
    }
    if let Some(roll) = hit_roll {
        next.hit_rolls.push(roll);
    }
    if let Some(choice) = asi {
        if let AsiChoice::Feat { feat } = &choice {
            next.feats.push(feat.clone());
        }
        next.asi_decisions.insert(new_level, choice);
    }

    // Recompute hit points from scratch; the delta covers the new level's
    // gain plus any retroactive back-pay (a newly chosen subclass bonus, a
    // Constitution increase from the ASI)
    let abilities = finalize_abilities(&next, codex);
    let new_max = max_hit_points(&next, &abilities, codex);
    let gained = new_max - old_max;
    next.hit_points.max = new_max;
    next.hit_points.current = (next.hit_points.current + gained.max(0)).clamp(0, new_max);

    // Resize the class resource pool to the new level
    match spellcasting(&next, &abilities, codex).resource_pool_max {
        Some(max) => match next.resource_pool.as_mut() {
            Some(pool) => pool.resize(max),
            None => next.resource_pool = Some(ResourcePool::full(max)),
        },
        None => {}
    }

    let report = LevelUpReport {
        new_level,
        proficiency_bonus: next.proficiency_bonus(),
        hp_gained: gained,
        subclass_chosen: chosen_subclass,
        new_features: features_at(&next, codex, new_level),
    };
    Ok((next, report))
}

/// Class and subclass feature names granted at a level
fn features_at(character: &Character, codex: &Codex, level: u8) -> Vec<String> {
    let mut features: Vec<String> = codex
        .class(&character.class)
        .map(|c| c.features_at(level).map(str::to_string).collect())
        .unwrap_or_default();
    if let Some(subclass) = character.subclass.as_deref().and_then(|id| codex.subclass(id)) {
        features.extend(subclass.features_at(level).map(str::to_string));
    }
    features
}
