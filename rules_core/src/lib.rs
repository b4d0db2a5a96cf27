//! rules_core - Derived-attribute computation engine
//!
//! This library turns a raw character build into every computed statistic
//! on the sheet:
//! - Ability finalization: background, ASI, capstone, and equipment layers
//! - Armor class and hit points
//! - Saving throws and skill bonuses
//! - Spellcasting progression (slots, known/prepared caps, DC)
//! - The leveling state machine
//!
//! Every resolver is a pure function over `(&Character, &Codex)`; nothing
//! here mutates the build or caches a result. The one fallible operation
//! is the level-up transition, which validates its decisions and returns a
//! new character value on success.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rules_core::prelude::*;
//!
//! let codex = Codex::builtin();
//! let mut character = Character::new("Vara", "hill_dwarf", "sorcerer", "sage");
//! character.abilities.charisma = 16;
//!
//! // Read the whole sheet
//! let sheet = derive_sheet(&character, &codex);
//! println!("AC {}, HP {}", sheet.armor_class, sheet.hit_points.max);
//!
//! // Advance a level
//! let plan = preview_level_up(&character, &codex).unwrap();
//! let decision = LevelUpDecision::default();
//! let (character, report) = level_up(&character, &decision, &codex).unwrap();
//! println!("now level {}, +{} hp", report.new_level, report.hp_gained);
//! ```

pub mod abilities;
pub mod combat;
pub mod leveling;
pub mod prelude;
pub mod proficiency;
pub mod sheet;
pub mod spellcasting;

// Core API - what most users need
pub use abilities::{finalize_abilities, FinalAbilityScores};
pub use combat::{armor_class, average_level_gain, hit_point_record, max_hit_points, roll_hit_die};
pub use leveling::{
    level_up, preview_level_up, LevelPlan, LevelUpDecision, LevelUpError, LevelUpReport, LEVEL_CAP,
};
pub use proficiency::{saving_throws, skill_ability, skill_bonus, skill_bonuses, SavingThrows};
pub use sheet::{derive_sheet, DerivedSheet};
pub use spellcasting::{max_spell_level, slots_at, spellcasting, SpellcastingSummary};

// Re-export the build-state and reference-table types at the engine surface
pub use codex_core::{Ability, CasterArchetype, Codex};
pub use sheet_core::{AsiChoice, Character, HitPoints, HpMethod};
