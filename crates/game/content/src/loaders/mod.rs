//! Content loaders for reading game data from files.
//!
//! Each loader offers `load(path)` for files and `parse(text)` for in-memory
//! content, and returns game-core types.

pub mod config;
pub mod enemies;
pub mod factory;
pub mod item;
pub mod levels;
pub mod locations;

pub use config::ConfigLoader;
pub use enemies::EnemyLoader;
pub use factory::{ContentBundle, ContentFactory};
pub use item::ItemLoader;
pub use levels::LevelLoader;
pub use locations::LocationLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
