//! Runtime wrappers around static game content.
//!
//! These implementations expose `game-core` oracle traits and bundle them,
//! together with the world graph and level table, into an [`OracleManager`].
//! The data is immutable at runtime; per-player state lives in repositories.
mod enemies;
mod items;

use std::sync::Arc;

use game_core::{LevelTable, WorldGraph};

pub use enemies::EnemyOracleImpl;
pub use items::ItemOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) items: Arc<ItemOracleImpl>,
    pub(crate) enemies: Arc<EnemyOracleImpl>,
    pub(crate) world: Arc<WorldGraph>,
    pub(crate) levels: Arc<LevelTable>,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(
        items: Arc<ItemOracleImpl>,
        enemies: Arc<EnemyOracleImpl>,
        world: Arc<WorldGraph>,
        levels: Arc<LevelTable>,
    ) -> Self {
        Self {
            items,
            enemies,
            world,
            levels,
        }
    }

    pub fn items(&self) -> &ItemOracleImpl {
        &self.items
    }

    pub fn enemies(&self) -> &EnemyOracleImpl {
        &self.enemies
    }

    pub fn world(&self) -> &WorldGraph {
        &self.world
    }

    pub fn levels(&self) -> &LevelTable {
        &self.levels
    }
}
