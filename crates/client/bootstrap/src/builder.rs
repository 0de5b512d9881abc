//! Builds the runtime, oracles, and config bundle used by front-ends.
use std::sync::Arc;

use anyhow::Result;
use runtime::{Clock, Runtime, RuntimeConfig};

use crate::config::ClientConfig;
use crate::oracles::{ContentOracleFactory, OracleBundle, OracleFactory};

/// Builder that assembles runtime state, oracles, and configuration for clients.
pub struct RuntimeBuilder {
    config: ClientConfig,
    oracle_factory: Arc<dyn OracleFactory>,
    clock: Option<Arc<dyn Clock>>,
}

impl RuntimeBuilder {
    pub fn new(config: ClientConfig) -> Self {
        let default_factory = match &config.data_dir {
            Some(dir) => ContentOracleFactory::new(dir.clone()),
            None => ContentOracleFactory::default_paths(),
        };
        Self {
            config,
            oracle_factory: Arc::new(default_factory),
            clock: None,
        }
    }

    /// Provide a custom oracle factory.
    pub fn oracle_factory(mut self, factory: impl OracleFactory + 'static) -> Self {
        self.oracle_factory = Arc::new(factory);
        self
    }

    /// Drive the runtime with a specific clock instead of the system clock.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn build(self) -> Result<RuntimeSetup> {
        let oracles = self.oracle_factory.build()?;

        let mut builder = Runtime::builder()
            .config(RuntimeConfig {
                game_config: oracles.config.clone(),
                seed: self.config.seed,
            })
            .oracles(oracles.manager());
        if let Some(clock) = self.clock {
            builder = builder.clock(clock);
        }

        let runtime = builder.build()?;

        Ok(RuntimeSetup {
            config: self.config,
            oracles,
            runtime,
        })
    }
}

pub struct RuntimeSetup {
    pub config: ClientConfig,
    pub oracles: OracleBundle,
    pub runtime: Runtime,
}
