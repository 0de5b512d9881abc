//! Per-player session locks.
//!
//! Every player-scoped operation holds its player's [`PlayerSession`] lock
//! for its whole duration, so turns and travel requests for one player are
//! strictly serialized while different players proceed in parallel.
use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use game_core::{EnemyTemplate, Fight, UserId};

/// A fight that has not finished yet.
pub(crate) struct ActiveFight {
    pub(crate) enemy: EnemyTemplate,
    pub(crate) fight: Fight,
}

/// Transient per-player state that is never persisted.
#[derive(Default)]
pub(crate) struct PlayerSession {
    pub(crate) fight: Option<ActiveFight>,
}

#[derive(Default)]
pub(crate) struct SessionTable {
    sessions: Mutex<HashMap<UserId, Arc<Mutex<PlayerSession>>>>,
}

impl SessionTable {
    /// Session lock for `user`, created when the account is being created.
    pub(crate) async fn open(&self, user: UserId) -> Arc<Mutex<PlayerSession>> {
        let mut sessions = self.sessions.lock().await;
        sessions.entry(user).or_default().clone()
    }

    /// Session lock for an existing account.
    ///
    /// Nothing is inserted unless `exists` confirms the account, so lookups
    /// for unknown users never grow the table.
    pub(crate) async fn get(
        &self,
        user: UserId,
        exists: impl FnOnce() -> bool,
    ) -> Option<Arc<Mutex<PlayerSession>>> {
        let mut sessions = self.sessions.lock().await;
        if let Some(session) = sessions.get(&user) {
            return Some(session.clone());
        }
        if !exists() {
            return None;
        }
        Some(sessions.entry(user).or_default().clone())
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
