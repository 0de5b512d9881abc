//! High-level runtime orchestrator.
//!
//! The runtime owns the oracles, the account repository, the clock and the
//! random source, and exposes a builder-based API for clients.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use game_core::{GameConfig, RandomSource};

use crate::api::handle::Shared;
use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::clock::{Clock, SystemClock};
use crate::oracle::OracleManager;
use crate::random::StdRandom;
use crate::repository::{AccountRepository, InMemoryAccountRepo};
use crate::session::SessionTable;

/// Runtime configuration shared across the orchestrator and handles.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Seed for the default random source. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

/// Main runtime that owns shared state.
///
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
    accounts: Option<Arc<dyn AccountRepository>>,
    clock: Option<Arc<dyn Clock>>,
    random: Option<Box<dyn RandomSource>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: None,
            accounts: None,
            clock: None,
            random: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Set the account repository (defaults to [`InMemoryAccountRepo`]).
    pub fn accounts(mut self, accounts: Arc<dyn AccountRepository>) -> Self {
        self.accounts = Some(accounts);
        self
    }

    /// Set the clock (defaults to [`SystemClock`]).
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set the random source (defaults to [`StdRandom`] from the configured seed).
    pub fn random(mut self, random: impl RandomSource + 'static) -> Self {
        self.random = Some(Box::new(random));
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<Runtime> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;
        let accounts: Arc<dyn AccountRepository> = match self.accounts {
            Some(accounts) => accounts,
            None => Arc::new(InMemoryAccountRepo::new()),
        };
        let clock: Arc<dyn Clock> = match self.clock {
            Some(clock) => clock,
            None => Arc::new(SystemClock),
        };
        let random: Box<dyn RandomSource> = match (self.random, self.config.seed) {
            (Some(random), _) => random,
            (None, Some(seed)) => Box::new(StdRandom::seeded(seed)),
            (None, None) => Box::new(StdRandom::from_entropy()),
        };

        info!(
            locations = oracles.world().len(),
            enemies = oracles.enemies().len(),
            seconds_per_hop = self.config.game_config.seconds_per_hop,
            seeded = self.config.seed.is_some(),
            "runtime built"
        );

        let handle = RuntimeHandle::new(Shared {
            config: self.config,
            oracles,
            accounts,
            clock,
            rng: Mutex::new(random),
            sessions: SessionTable::default(),
        });

        Ok(Runtime { handle })
    }
}
