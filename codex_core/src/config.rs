use crate::class::{ClassDescriptor, SubclassDescriptor};
use crate::item::ItemDescriptor;
use crate::origin::{BackgroundDescriptor, FeatDescriptor, SpeciesDescriptor};
use crate::spell::SpellDescriptor;
use serde::Deserialize;

/// TOML configuration for a reference-table file
///
/// A file may contribute any mix of descriptor arrays; files in a directory
/// are merged into one registry.
#[derive(Debug, Default, Deserialize)]
pub struct CodexFileConfig {
    #[serde(default)]
    pub species: Vec<SpeciesDescriptor>,
    #[serde(default)]
    pub classes: Vec<ClassDescriptor>,
    #[serde(default)]
    pub subclasses: Vec<SubclassDescriptor>,
    #[serde(default)]
    pub backgrounds: Vec<BackgroundDescriptor>,
    #[serde(default)]
    pub feats: Vec<FeatDescriptor>,
    #[serde(default)]
    pub items: Vec<ItemDescriptor>,
    #[serde(default)]
    pub spells: Vec<SpellDescriptor>,
}
