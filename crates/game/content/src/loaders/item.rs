//! Item catalog loader.

use std::collections::HashSet;
use std::path::Path;

use game_core::EquippedItem;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<EquippedItem>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing ItemCatalog
    pub fn load(path: &Path) -> LoadResult<Vec<EquippedItem>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an item catalog from RON text, rejecting duplicate ids.
    pub fn parse(content: &str) -> LoadResult<Vec<EquippedItem>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for item in &catalog.items {
            if !seen.insert(item.id) {
                anyhow::bail!("Duplicate item id {} in catalog", item.id);
            }
        }

        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{EquipmentSlot, ItemId};

    #[test]
    fn parses_partial_bonuses() {
        let items = ItemLoader::parse(
            r#"(
                items: [
                    (id: 1, name: "Iron Sword", slot: weapon, bonuses: (damage: 6, critical_hit_chance: 0.05)),
                    (id: 2, name: "Leather Cap", slot: helmet, bonuses: (armor: 2)),
                    (id: 3, name: "Plain Boots", slot: boots),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].slot, EquipmentSlot::Weapon);
        assert_eq!(items[0].bonuses.damage, 6);
        assert_eq!(items[1].bonuses.armor, 2);
        assert_eq!(items[1].bonuses.damage, 0);
        assert_eq!(items[2].id, ItemId(3));
        assert_eq!(items[2].bonuses.armor, 0);
    }

    #[test]
    fn duplicate_ids_fail() {
        let err = ItemLoader::parse(
            r#"(items: [
                (id: 1, name: "a", slot: weapon),
                (id: 1, name: "b", slot: boots),
            ])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate item id"));
    }
}
