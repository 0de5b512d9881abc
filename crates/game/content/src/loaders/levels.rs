//! Level threshold loader.

use std::collections::HashSet;
use std::path::Path;

use game_core::LevelTable;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One row of the level table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LevelThreshold {
    pub level: u32,
    /// Experience needed to advance past `level`.
    pub experience: u64,
}

/// Level table structure for TOML files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelFile {
    pub levels: Vec<LevelThreshold>,
}

/// Loader for level thresholds from TOML files.
pub struct LevelLoader;

impl LevelLoader {
    pub fn load(path: &Path) -> LoadResult<LevelTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse `[[levels]]` rows. Duplicate levels and zero thresholds are rejected.
    pub fn parse(content: &str) -> LoadResult<LevelTable> {
        let file: LevelFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level TOML: {}", e))?;

        let mut seen = HashSet::new();
        for row in &file.levels {
            if !seen.insert(row.level) {
                anyhow::bail!("Level {} is defined more than once", row.level);
            }
            if row.experience == 0 {
                anyhow::bail!("Level {} must require positive experience", row.level);
            }
        }

        Ok(LevelTable::new(
            file.levels.iter().map(|row| (row.level, row.experience)),
        ))
    }
}
