//! Content factory for building the runtime's static data from files.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use game_core::{EnemyTemplate, EquippedItem, GameConfig, LevelTable, WorldGraph};

use crate::loaders::{ConfigLoader, EnemyLoader, ItemLoader, LevelLoader, LoadResult, LocationLoader};

/// Every piece of static content, cross-checked against each other.
#[derive(Debug, Clone)]
pub struct ContentBundle {
    pub config: GameConfig,
    pub items: Vec<EquippedItem>,
    pub enemies: Vec<EnemyTemplate>,
    pub world: WorldGraph,
    pub levels: LevelTable,
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── levels.toml
/// ├── items.ron
/// ├── enemies.ron
/// └── locations.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<EquippedItem>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load enemy templates from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<Vec<EnemyTemplate>> {
        EnemyLoader::load(&self.data_dir.join("enemies.ron"))
    }

    /// Load and link the world graph from `locations.ron`.
    pub fn load_world(&self) -> LoadResult<WorldGraph> {
        LocationLoader::load(&self.data_dir.join("locations.ron"))
    }

    /// Load level thresholds from `levels.toml`.
    pub fn load_levels(&self) -> LoadResult<LevelTable> {
        LevelLoader::load(&self.data_dir.join("levels.toml"))
    }

    /// Load everything and verify cross references.
    ///
    /// Fails when a loot entry names an item missing from the catalog, when
    /// the default location is not part of the world, or when the level cap
    /// lies above the highest defined threshold plus one.
    pub fn load_all(&self) -> LoadResult<ContentBundle> {
        let config = self.load_config()?;
        let items = self.load_items()?;
        let enemies = self.load_enemies()?;
        let world = self.load_world()?;
        let levels = self.load_levels()?.with_cap(config.level_cap);

        let known: HashSet<_> = items.iter().map(|item| item.id).collect();
        for enemy in &enemies {
            if let Some(entry) = enemy.loot.entries().iter().find(|e| !known.contains(&e.item)) {
                anyhow::bail!(
                    "Enemy {} ({}) drops unknown item {}",
                    enemy.id,
                    enemy.name,
                    entry.item
                );
            }
        }

        if !world.contains(config.default_location) {
            anyhow::bail!(
                "Default location {} is not defined in locations.ron",
                config.default_location
            );
        }

        let starts_capped = config
            .level_cap
            .is_some_and(|cap| config.starting_level >= cap);
        if !starts_capped && levels.threshold(config.starting_level).is_none() {
            anyhow::bail!(
                "starting_level {} has no experience threshold in levels.toml",
                config.starting_level
            );
        }

        if let Some(cap) = config.level_cap {
            let reachable = levels.highest_defined().map_or(1, |level| level + 1);
            if cap > reachable {
                anyhow::bail!(
                    "level_cap {} exceeds the highest reachable level {}",
                    cap,
                    reachable
                );
            }
        }

        Ok(ContentBundle {
            config,
            items,
            enemies,
            world,
            levels,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
