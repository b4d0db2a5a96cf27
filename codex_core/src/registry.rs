use crate::class::{ClassDescriptor, SubclassDescriptor};
use crate::config::CodexFileConfig;
use crate::item::ItemDescriptor;
use crate::origin::{BackgroundDescriptor, FeatDescriptor, SpeciesDescriptor};
use crate::spell::SpellDescriptor;
use crate::CodexError;
use std::collections::HashMap;
use std::path::Path;

/// Registry of all reference tables, loaded from TOML files
///
/// Lookups are by snake_case catalog id. The `*_or_inert` item accessor
/// degrades unknown ids to a zero-stat placeholder so a dangling reference
/// in a character build never fails a derived-stat computation.
#[derive(Debug, Default)]
pub struct Codex {
    species: HashMap<String, SpeciesDescriptor>,
    classes: HashMap<String, ClassDescriptor>,
    subclasses: HashMap<String, SubclassDescriptor>,
    backgrounds: HashMap<String, BackgroundDescriptor>,
    feats: HashMap<String, FeatDescriptor>,
    items: HashMap<String, ItemDescriptor>,
    spells: HashMap<String, SpellDescriptor>,
    inert_item: ItemDescriptor,
}

impl Codex {
    /// Create an empty registry
    pub fn new() -> Self {
        Codex {
            inert_item: ItemDescriptor::inert("unknown"),
            ..Codex::default()
        }
    }

    /// Load all reference tables from a directory (recursively)
    pub fn load(dir: &Path) -> Result<Self, CodexError> {
        let mut codex = Self::new();
        codex.load_dir(dir)?;
        Ok(codex)
    }

    /// Load tables from a directory recursively
    fn load_dir(&mut self, dir: &Path) -> Result<(), CodexError> {
        if !dir.exists() {
            return Ok(());
        }

        let entries = std::fs::read_dir(dir).map_err(|e| CodexError::Io {
            error: e,
            path: Some(dir.to_path_buf()),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| CodexError::Io {
                error: e,
                path: Some(dir.to_path_buf()),
            })?;
            let path = entry.path();

            if path.is_dir() {
                self.load_dir(&path)?;
            } else if path.extension().is_some_and(|ext| ext == "toml") {
                self.load_file(&path)?;
            }
        }

        Ok(())
    }

    /// Load a single reference-table file
    fn load_file(&mut self, path: &Path) -> Result<(), CodexError> {
        let content = std::fs::read_to_string(path).map_err(|e| CodexError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;

        let config: CodexFileConfig = toml::from_str(&content).map_err(|e| CodexError::Parse {
            error: e,
            path: path.to_path_buf(),
        })?;

        self.merge(config)
            .map_err(|message| CodexError::Validation {
                message,
                path: path.to_path_buf(),
            })
    }

    /// Merge a parsed file into the registry, rejecting duplicate ids
    fn merge(&mut self, config: CodexFileConfig) -> Result<(), String> {
        fn insert_all<T>(
            map: &mut HashMap<String, T>,
            entries: Vec<T>,
            kind: &str,
            id_of: impl Fn(&T) -> &str,
        ) -> Result<(), String> {
            for entry in entries {
                let id = id_of(&entry).to_string();
                if map.contains_key(&id) {
                    return Err(format!("duplicate {} id '{}'", kind, id));
                }
                map.insert(id, entry);
            }
            Ok(())
        }

        insert_all(&mut self.species, config.species, "species", |s| &s.id)?;
        insert_all(&mut self.classes, config.classes, "class", |c| &c.id)?;
        insert_all(&mut self.subclasses, config.subclasses, "subclass", |s| {
            &s.id
        })?;
        insert_all(
            &mut self.backgrounds,
            config.backgrounds,
            "background",
            |b| &b.id,
        )?;
        insert_all(&mut self.feats, config.feats, "feat", |f| &f.id)?;
        insert_all(&mut self.items, config.items, "item", |i| &i.id)?;
        insert_all(&mut self.spells, config.spells, "spell", |s| &s.id)?;
        Ok(())
    }

    // === Insertion (builders and tests; overwrites silently) ===

    pub fn insert_species(&mut self, descriptor: SpeciesDescriptor) {
        self.species.insert(descriptor.id.clone(), descriptor);
    }

    pub fn insert_class(&mut self, descriptor: ClassDescriptor) {
        self.classes.insert(descriptor.id.clone(), descriptor);
    }

    pub fn insert_subclass(&mut self, descriptor: SubclassDescriptor) {
        self.subclasses.insert(descriptor.id.clone(), descriptor);
    }

    pub fn insert_background(&mut self, descriptor: BackgroundDescriptor) {
        self.backgrounds.insert(descriptor.id.clone(), descriptor);
    }

    pub fn insert_feat(&mut self, descriptor: FeatDescriptor) {
        self.feats.insert(descriptor.id.clone(), descriptor);
    }

    pub fn insert_item(&mut self, descriptor: ItemDescriptor) {
        self.items.insert(descriptor.id.clone(), descriptor);
    }

    pub fn insert_spell(&mut self, descriptor: SpellDescriptor) {
        self.spells.insert(descriptor.id.clone(), descriptor);
    }

    // === Lookup ===

    pub fn species(&self, id: &str) -> Option<&SpeciesDescriptor> {
        self.species.get(id)
    }

    pub fn class(&self, id: &str) -> Option<&ClassDescriptor> {
        self.classes.get(id)
    }

    pub fn subclass(&self, id: &str) -> Option<&SubclassDescriptor> {
        self.subclasses.get(id)
    }

    pub fn background(&self, id: &str) -> Option<&BackgroundDescriptor> {
        self.backgrounds.get(id)
    }

    pub fn feat(&self, id: &str) -> Option<&FeatDescriptor> {
        self.feats.get(id)
    }

    pub fn item(&self, id: &str) -> Option<&ItemDescriptor> {
        self.items.get(id)
    }

    /// Item lookup that degrades to a zero-stat placeholder
    pub fn item_or_inert(&self, id: &str) -> &ItemDescriptor {
        self.items.get(id).unwrap_or(&self.inert_item)
    }

    pub fn spell(&self, id: &str) -> Option<&SpellDescriptor> {
        self.spells.get(id)
    }

    /// List all item ids
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(|s| s.as_str())
    }

    /// List all class ids
    pub fn class_ids(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(|s| s.as_str())
    }

    /// Subclasses belonging to a class
    pub fn subclasses_of<'a>(
        &'a self,
        class_id: &'a str,
    ) -> impl Iterator<Item = &'a SubclassDescriptor> {
        self.subclasses.values().filter(move |s| s.class == class_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, name: &str, content: &str) {
        let path = dir.join(format!("{}.toml", name));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_load_class_file() {
        let dir = TempDir::new().unwrap();
        create_test_file(
            dir.path(),
            "classes",
            r#"
[[classes]]
id = "fighter"
name = "Fighter"
hit_die = 10
save_proficiencies = ["strength", "constitution"]
asi_levels = [4, 6, 8, 12, 14, 16, 19]
"#,
        );

        let codex = Codex::load(dir.path()).unwrap();
        let fighter = codex.class("fighter").unwrap();
        assert_eq!(fighter.hit_die, 10);
        assert!(fighter.grants_asi_at(6));
    }

    #[test]
    fn test_files_merge_across_directory() {
        let dir = TempDir::new().unwrap();
        create_test_file(
            dir.path(),
            "items",
            r#"
[[items]]
id = "shield"
name = "Shield"
kind = { type = "shield", bonus = 2 }
"#,
        );
        create_test_file(
            dir.path(),
            "spells",
            r#"
[[spells]]
id = "fireball"
name = "Fireball"
level = 3
school = "evocation"
"#,
        );

        let codex = Codex::load(dir.path()).unwrap();
        assert!(codex.item("shield").is_some());
        assert_eq!(codex.spell("fireball").unwrap().level, 3);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let dir = TempDir::new().unwrap();
        create_test_file(
            dir.path(),
            "a",
            r#"
[[spells]]
id = "fire_bolt"
name = "Fire Bolt"
level = 0
school = "evocation"
"#,
        );
        create_test_file(
            dir.path(),
            "b",
            r#"
[[spells]]
id = "fire_bolt"
name = "Fire Bolt"
level = 0
school = "evocation"
"#,
        );

        let result = Codex::load(dir.path());
        assert!(matches!(result, Err(CodexError::Validation { .. })));
    }

    #[test]
    fn test_missing_directory_is_empty_codex() {
        let codex = Codex::load(Path::new("/nonexistent/codex")).unwrap();
        assert!(codex.class("fighter").is_none());
    }

    #[test]
    fn test_unknown_item_degrades_to_inert() {
        let codex = Codex::new();
        let item = codex.item_or_inert("sword_of_nowhere");
        assert_eq!(item.ac_bonus, 0);
        assert!(item.ability_overrides.is_empty());
    }
}
