//! Prelude module for convenient imports
//!
//! ```rust
//! use rules_core::prelude::*;
//! ```

// Core resolvers
pub use crate::abilities::{finalize_abilities, FinalAbilityScores};
pub use crate::combat::{armor_class, max_hit_points};
pub use crate::proficiency::{saving_throws, skill_bonuses, SavingThrows};
pub use crate::sheet::{derive_sheet, DerivedSheet};
pub use crate::spellcasting::{spellcasting, SpellcastingSummary};

// Leveling
pub use crate::leveling::{level_up, preview_level_up, LevelUpDecision, LevelUpError};

// Re-exports from the build-state and reference-table crates
pub use codex_core::{Ability, CasterArchetype, Codex};
pub use sheet_core::{AsiChoice, Character, HitPoints, HpMethod};
