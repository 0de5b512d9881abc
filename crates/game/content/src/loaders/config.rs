//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing GameConfig
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config from TOML text. Missing keys fall back to defaults.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.seconds_per_hop == 0 {
            anyhow::bail!("seconds_per_hop must be positive");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::LocationId;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("seconds_per_hop = 45\nlevel_cap = 30\n").unwrap();
        assert_eq!(config.seconds_per_hop, 45);
        assert_eq!(config.level_cap, Some(30));
        assert_eq!(config.default_location, LocationId(1));
        assert_eq!(config.starting_gold, 100);
    }

    #[test]
    fn zero_hop_duration_is_rejected() {
        assert!(ConfigLoader::parse("seconds_per_hop = 0").is_err());
    }
}
