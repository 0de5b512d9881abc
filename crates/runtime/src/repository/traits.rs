//! Repository contracts for saving and loading per-player records.

use game_core::{AccountRecords, UserId};

use super::error::Result;

/// Repository for per-player records.
///
/// This is for DYNAMIC data that changes during gameplay: loadout,
/// inventory, wallet, experience and travel session. Static content is
/// served by oracles.
pub trait AccountRepository: Send + Sync {
    /// Load the records of `user`, if the account exists.
    fn load(&self, user: UserId) -> Result<Option<AccountRecords>>;

    /// Insert or replace the records keyed by `records.user`.
    fn save(&self, records: &AccountRecords) -> Result<()>;

    /// Check if an account exists
    fn exists(&self, user: UserId) -> bool;

    /// List every known user in ascending order.
    fn list_users(&self) -> Result<Vec<UserId>> {
        Ok(vec![])
    }
}
