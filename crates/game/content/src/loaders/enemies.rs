//! Enemy template loader.

use std::collections::HashSet;
use std::path::Path;

use game_core::EnemyTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Enemy roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyRoster {
    pub enemies: Vec<EnemyTemplate>,
}

/// Loader for enemy templates from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<EnemyTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse enemy templates from RON text.
    ///
    /// Rejects duplicate ids, non-positive health and loot rarities outside
    /// `(0, 1]`.
    pub fn parse(content: &str) -> LoadResult<Vec<EnemyTemplate>> {
        let roster: EnemyRoster = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy roster RON: {}", e))?;

        let mut seen = HashSet::new();
        for enemy in &roster.enemies {
            if !seen.insert(enemy.id) {
                anyhow::bail!("Duplicate enemy id {}", enemy.id);
            }
            if enemy.profile.health <= 0 {
                anyhow::bail!("Enemy {} ({}) must have positive health", enemy.id, enemy.name);
            }
            for entry in enemy.loot.entries() {
                if !(entry.rarity > 0.0 && entry.rarity <= 1.0) {
                    anyhow::bail!(
                        "Enemy {} loot entry {} has rarity {} outside (0, 1]",
                        enemy.id,
                        entry.item,
                        entry.rarity
                    );
                }
            }
            if enemy.loot.total_weight() > 1.0 + f64::EPSILON {
                anyhow::bail!("Enemy {} loot rarities sum above 1", enemy.id);
            }
        }

        Ok(roster.enemies)
    }
}
