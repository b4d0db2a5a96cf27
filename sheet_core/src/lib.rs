//! sheet_core - Mutable character build state
//!
//! A `Character` is the raw build a player owns: identity, base ability
//! scores, hit points, proficiencies, feats, inventory, spell preparation,
//! and the record of level-up decisions. Nothing here is derived; the
//! rules engine recomputes every derived statistic from this state on
//! demand. Mutation happens only through the toggle operations defined
//! here and the leveling transition in the rules crate.

mod abilities;
mod character;
mod inventory;

pub use abilities::{ability_modifier, AbilityScores};
pub use character::{AsiChoice, Character, HitPoints, HpMethod, ResourcePool};
pub use inventory::{Inventory, ItemInstance, WornSlot};

// Re-export the reference-table types the build state refers to
pub use codex_core::{Ability, Alignment, Codex};
