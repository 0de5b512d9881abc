//! Runtime orchestration for the combat and travel engines.
//!
//! This crate wires the pure `game-core` rules to oracles, repositories, a
//! clock and a random source, and serializes every player-scoped operation
//! behind a per-player lock. Consumers build a [`Runtime`] and interact with
//! it through the cloneable [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
//! - [`clock`] and [`random`] adapt wall-clock time and OS randomness
pub mod api;
pub mod clock;
pub mod oracle;
pub mod random;
pub mod repository;
pub mod runtime;

mod session;

pub use api::{AttackOutcome, LocationStatus, Result, Rewards, RuntimeError, RuntimeHandle};
pub use clock::{Clock, ManualClock, SystemClock};
pub use oracle::{EnemyOracleImpl, ItemOracleImpl, OracleManager};
pub use random::StdRandom;
pub use repository::{AccountRepository, InMemoryAccountRepo, RepositoryError};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
