//! Helpers for constructing oracle bundles consumed by the runtime.
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use game_content::ContentFactory;
use game_core::{GameConfig, LevelTable, WorldGraph};
use runtime::{EnemyOracleImpl, ItemOracleImpl, OracleManager};

/// Static content ready to hand to the runtime.
#[derive(Clone)]
pub struct OracleBundle {
    pub config: GameConfig,
    pub items: Arc<ItemOracleImpl>,
    pub enemies: Arc<EnemyOracleImpl>,
    pub world: Arc<WorldGraph>,
    pub levels: Arc<LevelTable>,
}

impl OracleBundle {
    pub fn manager(&self) -> OracleManager {
        OracleManager::new(
            Arc::clone(&self.items),
            Arc::clone(&self.enemies),
            Arc::clone(&self.world),
            Arc::clone(&self.levels),
        )
    }
}

pub trait OracleFactory: Send + Sync {
    fn build(&self) -> Result<OracleBundle>;
}

/// Oracle factory that loads game content from data files.
///
/// This factory uses the game-content crate's loaders to read RON/TOML files
/// and construct oracle implementations from real game data.
///
/// # Directory Structure
///
/// The factory expects the following files in the data directory:
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── levels.toml
/// ├── items.ron
/// ├── enemies.ron
/// └── locations.ron
/// ```
#[derive(Clone, Debug)]
pub struct ContentOracleFactory {
    data_dir: PathBuf,
}

impl ContentOracleFactory {
    /// Create a new content oracle factory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Create with default paths.
    ///
    /// This tries to find the data directory in the following order:
    /// 1. CONTENT_DATA_DIR environment variable
    /// 2. Relative to current executable (../../crates/game/content/data)
    /// 3. Relative to current directory (crates/game/content/data)
    pub fn default_paths() -> Self {
        let data_dir = if let Ok(env_dir) = std::env::var("CONTENT_DATA_DIR") {
            PathBuf::from(env_dir)
        } else {
            let from_exe = std::env::current_exe().ok().and_then(|exe| {
                exe.parent()
                    .and_then(|p| p.parent())
                    .and_then(|p| p.parent())
                    .map(|root| root.join("crates/game/content/data"))
            });
            match from_exe {
                Some(dir) if dir.exists() => dir,
                _ => std::env::current_dir()
                    .unwrap_or_else(|_| PathBuf::from("."))
                    .join("crates/game/content/data"),
            }
        };

        Self::new(data_dir)
    }

    pub fn data_dir(&self) -> &std::path::Path {
        &self.data_dir
    }
}

impl OracleFactory for ContentOracleFactory {
    fn build(&self) -> Result<OracleBundle> {
        if !self.data_dir.exists() {
            anyhow::bail!(
                "Content data directory not found: {} (set CONTENT_DATA_DIR to override)",
                self.data_dir.display()
            );
        }

        let bundle = ContentFactory::new(&self.data_dir)
            .load_all()
            .with_context(|| format!("loading content from {}", self.data_dir.display()))?;

        tracing::info!(
            data_dir = %self.data_dir.display(),
            items = bundle.items.len(),
            enemies = bundle.enemies.len(),
            locations = bundle.world.len(),
            levels = bundle.levels.len(),
            "content loaded"
        );

        Ok(OracleBundle {
            config: bundle.config,
            items: Arc::new(ItemOracleImpl::from_items(bundle.items)),
            enemies: Arc::new(EnemyOracleImpl::new(bundle.enemies)),
            world: Arc::new(bundle.world),
            levels: Arc::new(bundle.levels),
        })
    }
}
