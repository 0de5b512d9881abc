//! Wall-clock adapters.
//!
//! `game-core` never reads time itself; the runtime asks a [`Clock`] for
//! `now` and passes it down.
use std::sync::atomic::{AtomicI64, Ordering};

use game_core::Timestamp;

/// Source of the current time in Unix seconds.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Clock backed by the system's UTC time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_secs(chrono::Utc::now().timestamp())
    }
}

/// Manually driven clock for tests and scripted demos.
#[derive(Debug, Default)]
pub struct ManualClock {
    secs: AtomicI64,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            secs: AtomicI64::new(start.as_secs()),
        }
    }

    pub fn set(&self, now: Timestamp) {
        self.secs.store(now.as_secs(), Ordering::SeqCst);
    }

    /// Move the clock forward by `secs` seconds.
    pub fn advance(&self, secs: u64) {
        let delta = i64::try_from(secs).unwrap_or(i64::MAX);
        let _ = self
            .secs
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                Some(current.saturating_add(delta))
            });
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_secs(self.secs.load(Ordering::SeqCst))
    }
}
