//! Spellcasting progression resolution
//!
//! Resolves the caster archetype (a subclass config overrides its class),
//! folds in any feat-granted supplemental spellcasting, and produces the
//! full spellcasting summary: slots, known/prepared caps, save DC, and
//! attack bonus.

pub mod tables;

use crate::abilities::FinalAbilityScores;
use codex_core::{Ability, CasterArchetype, Codex, SpellGrant, SpellcastingConfig};
use serde::Serialize;
use sheet_core::Character;

pub use tables::{max_spell_level, slots_at};

/// Derived spellcasting statistics for a build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpellcastingSummary {
    pub archetype: CasterArchetype,
    /// Spellcasting ability, from the class config or a feat grant
    pub ability: Option<Ability>,
    /// Whether the build counts as a spellcaster for eligibility purposes
    pub is_spellcaster: bool,
    /// Highest spell level currently accessible
    pub max_spell_level: u8,
    /// Slots per spell level 1..=9
    pub slots: [u8; 9],
    pub cantrips_known: u8,
    /// Cap on known or prepared spells, whichever the class uses
    pub spell_cap: u8,
    /// `8 + proficiency + spellcasting modifier`
    pub save_dc: Option<i32>,
    /// `proficiency + spellcasting modifier`
    pub attack_bonus: Option<i32>,
    /// Maximum of the class resource pool (sized to level), if any
    pub resource_pool_max: Option<u32>,
}

/// Resolve the spellcasting summary for a build
pub fn spellcasting(
    character: &Character,
    abilities: &FinalAbilityScores,
    codex: &Codex,
) -> SpellcastingSummary {
    let level = character.level.clamp(1, 20);
    let config = casting_config(character, codex);
    let grant = supplemental_grant(character, codex);

    let archetype = config.map_or(CasterArchetype::None, |c| c.archetype);

    // A build with no archetype can still be a caster through a feat grant
    // or by having anything prepared at all
    let is_spellcaster = archetype != CasterArchetype::None
        || grant.is_some()
        || !character.prepared_spells.is_empty();

    let max_level = if archetype == CasterArchetype::None {
        // A supplemental grant alone caps at first-level spells
        if grant.is_some() {
            1
        } else {
            0
        }
    } else {
        tables::max_spell_level(archetype, level)
    };

    let mut slots = [0u8; 9];
    for (column, slot) in slots.iter_mut().enumerate() {
        *slot = tables::slots_at(archetype, level, column as u8 + 1);
    }

    let index = (level - 1) as usize;
    let at_level = |table: &[u8]| -> u8 {
        if table.is_empty() {
            0
        } else {
            table[index.min(table.len() - 1)]
        }
    };

    let ability = config.map(|c| c.ability).or(grant.map(|g| g.ability));
    let modifier = ability.map(|a| abilities.modifier(a));

    let mut cantrips_known = config.map_or(0, |c| at_level(&c.cantrips_known));
    let mut spell_cap = config.map_or(0, |c| {
        if let Some(known) = &c.spells_known {
            at_level(known)
        } else if let Some(prepared) = &c.prepared {
            // level term + spellcasting modifier, floored at 1
            (prepared.level_term(level) + modifier.unwrap_or(0)).max(1) as u8
        } else {
            0
        }
    });

    // Feat grants add flat amounts on top of whatever the base computes
    if let Some(grant) = grant {
        cantrips_known += grant.cantrips;
        spell_cap += grant.spells;
    }

    let proficiency = character.proficiency_bonus();
    let save_dc = match (is_spellcaster, modifier) {
        (true, Some(modifier)) => Some(8 + proficiency + modifier),
        _ => None,
    };
    let attack_bonus = match (is_spellcaster, modifier) {
        (true, Some(modifier)) => Some(proficiency + modifier),
        _ => None,
    };

    let resource_pool_max = config
        .and_then(|c| c.resource_pool.as_ref())
        .map(|_| level as u32);

    SpellcastingSummary {
        archetype,
        ability,
        is_spellcaster,
        max_spell_level: max_level,
        slots,
        cantrips_known,
        spell_cap,
        save_dc,
        attack_bonus,
        resource_pool_max,
    }
}

/// Effective casting config: the subclass's, falling back to the class's
pub(crate) fn casting_config<'a>(
    character: &Character,
    codex: &'a Codex,
) -> Option<&'a SpellcastingConfig> {
    let from_subclass = character
        .subclass
        .as_deref()
        .and_then(|id| codex.subclass(id))
        .and_then(|s| s.spellcasting.as_ref());
    from_subclass.or_else(|| {
        codex
            .class(&character.class)
            .and_then(|c| c.spellcasting.as_ref())
    })
}

/// First feat-granted supplemental spellcasting, if any
fn supplemental_grant<'a>(character: &Character, codex: &'a Codex) -> Option<&'a SpellGrant> {
    character
        .feats
        .iter()
        .filter_map(|id| codex.feat(id))
        .find_map(|f| f.spell_grant.as_ref())
}
