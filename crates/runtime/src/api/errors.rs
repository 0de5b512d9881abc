//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the core engines, repositories and content lookups so
//! clients can bubble them up with consistent context.
use thiserror::Error;

use game_core::{
    EnemyId, ErrorCategory, FightError, GameError, ItemId, ProgressionError, Timestamp,
    TravelError, UserId,
};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("unknown user {user}")]
    UnknownUser { user: UserId },

    #[error("account for {user} already exists")]
    AccountExists { user: UserId },

    #[error("unknown item {item}")]
    UnknownItem { item: ItemId },

    #[error("{user} does not own {item}")]
    ItemNotOwned { user: UserId, item: ItemId },

    #[error("unknown enemy {enemy}")]
    UnknownEnemy { enemy: EnemyId },

    #[error("{user} is in a fight")]
    FightInProgress { user: UserId },

    #[error("{user} has no active fight")]
    NoActiveFight { user: UserId },

    #[error("{user} is traveling until {arrives_at}")]
    InTransit { user: UserId, arrives_at: Timestamp },

    #[error(transparent)]
    Fight(#[from] FightError),

    #[error(transparent)]
    Travel(#[from] TravelError),

    #[error(transparent)]
    Progression(#[from] ProgressionError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("runtime requires oracles to be configured before building")]
    MissingOracles,
}

impl GameError for RuntimeError {
    fn category(&self) -> ErrorCategory {
        match self {
            Self::Fight(err) => err.category(),
            Self::Travel(err) => err.category(),
            Self::Progression(err) => err.category(),
            Self::Repository(_) | Self::MissingOracles => ErrorCategory::DataIntegrity,
            Self::UnknownUser { .. }
            | Self::AccountExists { .. }
            | Self::UnknownItem { .. }
            | Self::ItemNotOwned { .. }
            | Self::UnknownEnemy { .. }
            | Self::FightInProgress { .. }
            | Self::NoActiveFight { .. }
            | Self::InTransit { .. } => ErrorCategory::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownUser { .. } => "RUNTIME_UNKNOWN_USER",
            Self::AccountExists { .. } => "RUNTIME_ACCOUNT_EXISTS",
            Self::UnknownItem { .. } => "RUNTIME_UNKNOWN_ITEM",
            Self::ItemNotOwned { .. } => "RUNTIME_ITEM_NOT_OWNED",
            Self::UnknownEnemy { .. } => "RUNTIME_UNKNOWN_ENEMY",
            Self::FightInProgress { .. } => "RUNTIME_FIGHT_IN_PROGRESS",
            Self::NoActiveFight { .. } => "RUNTIME_NO_ACTIVE_FIGHT",
            Self::InTransit { .. } => "RUNTIME_IN_TRANSIT",
            Self::Fight(err) => err.error_code(),
            Self::Travel(err) => err.error_code(),
            Self::Progression(err) => err.error_code(),
            Self::Repository(_) => "RUNTIME_REPOSITORY",
            Self::MissingOracles => "RUNTIME_MISSING_ORACLES",
        }
    }
}
