//! codex_core - Static reference tables for the character rules engine
//!
//! A `Codex` holds the immutable descriptors the rules engine looks up by
//! name: species, classes, subclasses, backgrounds, feats, items, and
//! spells. Descriptors are pure data; the only logic here is loading them
//! from TOML files and resolving lookups, with unknown names degrading to
//! inert zero-stat placeholders instead of failing the computation.

mod builtin;
mod class;
mod config;
mod item;
mod origin;
mod registry;
mod spell;
mod types;

pub use class::{
    Capstone, ClassDescriptor, FeatureGrant, PreparedFormula, SpellcastingConfig,
    SubclassDescriptor, UnarmoredDefense,
};
pub use item::{AbilityBonus, AbilityOverride, ItemDescriptor, ItemKind};
pub use origin::{BackgroundDescriptor, FeatDescriptor, SpeciesDescriptor, SpellGrant};
pub use registry::Codex;
pub use spell::{School, SpellDescriptor};
pub use types::{Ability, Alignment, ArmorKind, CasterArchetype};

use std::path::PathBuf;
use thiserror::Error;

/// Error loading reference-table configuration
#[derive(Debug, Error)]
pub enum CodexError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path}': {error}")]
    Parse {
        error: toml::de::Error,
        path: PathBuf,
    },
    #[error("Validation error in '{path}': {message}")]
    Validation { message: String, path: PathBuf },
}
