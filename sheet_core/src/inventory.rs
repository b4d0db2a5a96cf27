//! Inventory and equipment state
//!
//! Armor and shield exclusivity is enforced structurally: the inventory
//! keeps a worn-slot map, and equipping into an occupied slot displaces
//! the previous holder. The derived-stat resolvers read armor and shield
//! through the slot map only, so the "at most one of each" invariant
//! cannot be violated by construction.

use codex_core::Codex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Exclusive equipment slots that participate in armor class
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WornSlot {
    Armor,
    Shield,
}

/// One owned item: a catalog reference plus instance state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemInstance {
    /// Stable instance id within this inventory
    pub id: u32,
    /// Catalog id of the item descriptor (exact snake_case key)
    pub item: String,
    pub equipped: bool,
    pub quantity: u32,
}

/// Ordered collection of owned items plus the worn-slot map
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<ItemInstance>,
    #[serde(default)]
    worn: BTreeMap<WornSlot, u32>,
    #[serde(default)]
    next_id: u32,
}

impl Inventory {
    pub fn new() -> Self {
        Inventory::default()
    }

    /// Add an item by catalog id, returning its instance id
    pub fn add(&mut self, item: impl Into<String>, quantity: u32) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(ItemInstance {
            id,
            item: item.into(),
            equipped: false,
            quantity,
        });
        id
    }

    /// Remove an instance entirely, clearing any worn slot it held
    pub fn remove(&mut self, id: u32) -> Option<ItemInstance> {
        let index = self.items.iter().position(|i| i.id == id)?;
        self.worn.retain(|_, held| *held != id);
        Some(self.items.remove(index))
    }

    pub fn get(&self, id: u32) -> Option<&ItemInstance> {
        self.items.iter().find(|i| i.id == id)
    }

    /// All owned items in acquisition order
    pub fn items(&self) -> &[ItemInstance] {
        &self.items
    }

    /// Equipped items in acquisition order
    pub fn equipped(&self) -> impl Iterator<Item = &ItemInstance> {
        self.items.iter().filter(|i| i.equipped)
    }

    /// The instance worn in an exclusive slot, if any
    pub fn worn(&self, slot: WornSlot) -> Option<&ItemInstance> {
        let id = *self.worn.get(&slot)?;
        self.get(id)
    }

    /// Equip an instance; returns false if the id is unknown
    ///
    /// If the item's descriptor occupies an exclusive slot, the previous
    /// holder of that slot is unequipped first.
    pub fn equip(&mut self, id: u32, codex: &Codex) -> bool {
        let Some(index) = self.items.iter().position(|i| i.id == id) else {
            return false;
        };

        let descriptor = codex.item_or_inert(&self.items[index].item);
        let slot = if descriptor.is_armor() {
            Some(WornSlot::Armor)
        } else if descriptor.is_shield() {
            Some(WornSlot::Shield)
        } else {
            None
        };

        if let Some(slot) = slot {
            if let Some(previous) = self.worn.insert(slot, id) {
                if previous != id {
                    if let Some(old) = self.items.iter_mut().find(|i| i.id == previous) {
                        old.equipped = false;
                    }
                }
            }
        }

        self.items[index].equipped = true;
        true
    }

    /// Unequip an instance; returns false if the id is unknown
    pub fn unequip(&mut self, id: u32) -> bool {
        let Some(instance) = self.items.iter_mut().find(|i| i.id == id) else {
            return false;
        };
        instance.equipped = false;
        self.worn.retain(|_, held| *held != id);
        true
    }

    /// Flip the equipped state of an instance
    pub fn toggle_equipped(&mut self, id: u32, codex: &Codex) -> bool {
        match self.get(id) {
            Some(instance) if instance.equipped => self.unequip(id),
            Some(_) => self.equip(id, codex),
            None => false,
        }
    }
}
