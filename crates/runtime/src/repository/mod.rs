//! Repository layer for dynamic runtime data
//!
//! Repositories handle data that CHANGES during gameplay: the records each
//! player account owns. Static game content (items, enemies, locations) is
//! handled by oracles, not repositories.

mod error;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use memory::InMemoryAccountRepo;
pub use traits::AccountRepository;
