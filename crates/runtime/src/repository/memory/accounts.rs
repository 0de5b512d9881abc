//! In-memory AccountRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use game_core::{AccountRecords, UserId};

use crate::repository::{AccountRepository, RepositoryError, Result};

/// In-memory implementation of AccountRepository.
pub struct InMemoryAccountRepo {
    accounts: RwLock<HashMap<UserId, AccountRecords>>,
}

impl InMemoryAccountRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryAccountRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountRepository for InMemoryAccountRepo {
    fn load(&self, user: UserId) -> Result<Option<AccountRecords>> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(accounts.get(&user).cloned())
    }

    fn save(&self, records: &AccountRecords) -> Result<()> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        accounts.insert(records.user, records.clone());
        Ok(())
    }

    fn exists(&self, user: UserId) -> bool {
        self.accounts
            .read()
            .map(|accounts| accounts.contains_key(&user))
            .unwrap_or(false)
    }

    fn list_users(&self) -> Result<Vec<UserId>> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut users: Vec<UserId> = accounts.keys().copied().collect();
        users.sort_unstable();
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{GameConfig, Timestamp};

    #[test]
    fn save_then_load_replaces_records() {
        let repo = InMemoryAccountRepo::new();
        let config = GameConfig::default();
        let mut records = AccountRecords::create(UserId(2), Timestamp(0), &config);
        assert!(!repo.exists(UserId(2)));

        repo.save(&records).unwrap();
        records.wallet.gold = 7;
        repo.save(&records).unwrap();

        let loaded = repo.load(UserId(2)).unwrap().unwrap();
        assert_eq!(loaded.wallet.gold, 7);
        assert!(repo.load(UserId(3)).unwrap().is_none());
        assert_eq!(repo.list_users().unwrap(), vec![UserId(2)]);
    }
}
