//! Spell progression tables
//!
//! Full, half, and third casters share one slot matrix, indexed by an
//! effective level (character level divided by 1, 2, or 3, rounded up).
//! Pact casters are not a column lookup: they have a single slot level
//! whose count and level both step with character level.

use codex_core::CasterArchetype;

/// Shared slot matrix: `[character level 1..=20][slot level 1..=9]`
pub const SLOT_TABLE: [[u8; 9]; 20] = [
    [2, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 2, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 2, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 1, 0, 0, 0, 0, 0],
    [4, 3, 3, 2, 0, 0, 0, 0, 0],
    [4, 3, 3, 3, 1, 0, 0, 0, 0],
    [4, 3, 3, 3, 2, 0, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 1],
    [4, 3, 3, 3, 3, 1, 1, 1, 1],
    [4, 3, 3, 3, 3, 2, 1, 1, 1],
    [4, 3, 3, 3, 3, 2, 2, 1, 1],
];

/// Pact slot count by character level
pub const PACT_SLOT_COUNT: [u8; 20] = [
    1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4,
];

/// Pact slot level by character level (all pact slots share one level)
pub const PACT_SLOT_LEVEL: [u8; 20] = [
    1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
];

/// Highest spell level a pact caster can access by character level
///
/// Slot level caps at 5; access to levels 6-9 unlocks independently at
/// 11/13/15/17 without changing the slots themselves.
pub const PACT_MAX_SPELL_LEVEL: [u8; 20] = [
    1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 9, 9,
];

fn level_index(level: u8) -> usize {
    (level.clamp(1, 20) - 1) as usize
}

/// Shared-table row for an effective level
fn slot_row(effective_level: u8) -> &'static [u8; 9] {
    &SLOT_TABLE[level_index(effective_level)]
}

/// Effective level for shared-table archetypes (character level divided by
/// the archetype's pace, rounded up)
fn effective_level(archetype: CasterArchetype, level: u8) -> u8 {
    match archetype {
        CasterArchetype::Full => level,
        CasterArchetype::Half => level.div_ceil(2),
        CasterArchetype::Third => level.div_ceil(3),
        CasterArchetype::Pact | CasterArchetype::None => level,
    }
}

/// Highest spell level accessible to an archetype at a character level
///
/// A supplemental feat grant without an archetype is the caller's concern;
/// this is archetype progression only.
pub fn max_spell_level(archetype: CasterArchetype, level: u8) -> u8 {
    let level = level.clamp(1, 20);
    match archetype {
        CasterArchetype::Full => {
            let row = slot_row(level);
            (1..=9u8).rev().find(|sl| row[(sl - 1) as usize] > 0).unwrap_or(0)
        }
        CasterArchetype::Half => level.div_ceil(4),
        CasterArchetype::Pact => PACT_MAX_SPELL_LEVEL[level_index(level)],
        // Stepped breakpoints, reproduced literally from the source tables
        CasterArchetype::Third => match level {
            0..=2 => 0,
            3..=6 => 1,
            7..=12 => 2,
            13..=18 => 3,
            _ => 4,
        },
        CasterArchetype::None => 0,
    }
}

/// Slots available at a spell level for an archetype and character level
///
/// Returns zero for cantrips (they consume no slot) and for any spell
/// level beyond the archetype's reach - never an error.
pub fn slots_at(archetype: CasterArchetype, level: u8, spell_level: u8) -> u8 {
    if spell_level == 0 || spell_level > 9 {
        return 0;
    }
    let level = level.clamp(1, 20);
    let column = (spell_level - 1) as usize;
    match archetype {
        CasterArchetype::Full | CasterArchetype::Half => {
            slot_row(effective_level(archetype, level))[column]
        }
        CasterArchetype::Third => {
            if level < 3 {
                0
            } else {
                slot_row(effective_level(archetype, level))[column]
            }
        }
        CasterArchetype::Pact => {
            if spell_level == PACT_SLOT_LEVEL[level_index(level)] {
                PACT_SLOT_COUNT[level_index(level)]
            } else {
                0
            }
        }
        CasterArchetype::None => 0,
    }
}
