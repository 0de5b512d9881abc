//! Minimal [`game_core::ItemOracle`] backed by an in-memory map.
use game_core::{EquippedItem, ItemId, ItemOracle};
use std::collections::HashMap;

/// ItemOracle implementation with static item definitions
pub struct ItemOracleImpl {
    definitions: HashMap<ItemId, EquippedItem>,
}

impl ItemOracleImpl {
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    /// Build an oracle from a loaded catalog.
    pub fn from_items(items: impl IntoIterator<Item = EquippedItem>) -> Self {
        let mut oracle = Self::new();
        for item in items {
            oracle.add_definition(item);
        }
        oracle
    }

    /// Add an item definition
    pub fn add_definition(&mut self, def: EquippedItem) {
        self.definitions.insert(def.id, def);
    }
}

impl Default for ItemOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemOracle for ItemOracleImpl {
    fn definition(&self, id: ItemId) -> Option<EquippedItem> {
        self.definitions.get(&id).cloned()
    }
}
