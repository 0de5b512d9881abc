//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use game_core::{EnemyId, LocationId};

/// Configuration required to bootstrap a client runtime.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Content directory override; see [`crate::ContentOracleFactory::default_paths`].
    pub data_dir: Option<PathBuf>,
    /// Seed for the runtime's random source. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub demo: DemoConfig,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CONTENT_DATA_DIR` - Content directory (default: bundled data)
    /// - `GAME_SEED` - Random seed for reproducible runs (default: entropy)
    /// - `DEMO_ENEMY` - Enemy id fought by the demo (default: 1)
    /// - `DEMO_DESTINATION` - Location id the demo travels to (default: 4)
    pub fn from_env() -> Self {
        let mut config = Self {
            data_dir: env::var("CONTENT_DATA_DIR").ok().map(PathBuf::from),
            seed: read_env::<u64>("GAME_SEED"),
            ..Self::default()
        };

        if let Some(enemy) = read_env::<u32>("DEMO_ENEMY") {
            config.demo.enemy = EnemyId(enemy);
        }
        if let Some(destination) = read_env::<u32>("DEMO_DESTINATION") {
            config.demo.destination = LocationId(destination);
        }

        config
    }
}

/// Targets used by the scripted demo.
#[derive(Clone, Copy, Debug)]
pub struct DemoConfig {
    pub enemy: EnemyId,
    pub destination: LocationId,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            enemy: EnemyId(1),
            destination: LocationId(4),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
