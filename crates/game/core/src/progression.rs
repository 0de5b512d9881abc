//! Experience accumulation and level-ups.
//!
//! A [`LevelTable`] maps each level to the experience needed to leave it.
//! Gaining experience may cross several thresholds at once; the remainder
//! after each crossing carries into the next level.

use std::collections::BTreeMap;

use crate::error::{ErrorCategory, GameError};

/// Errors raised while applying experience.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProgressionError {
    #[error("no experience threshold defined for level {level}")]
    MissingLevelDefinition { level: u32 },

    #[error("experience threshold for level {level} must be positive")]
    ZeroThreshold { level: u32 },
}

impl GameError for ProgressionError {
    fn category(&self) -> ErrorCategory {
        ErrorCategory::DataIntegrity
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingLevelDefinition { .. } => "PROGRESSION_MISSING_LEVEL",
            Self::ZeroThreshold { .. } => "PROGRESSION_ZERO_THRESHOLD",
        }
    }
}

/// Experience required to advance from each level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelTable {
    thresholds: BTreeMap<u32, u64>,
    cap: Option<u32>,
}

impl LevelTable {
    pub fn new(thresholds: impl IntoIterator<Item = (u32, u64)>) -> Self {
        Self {
            thresholds: thresholds.into_iter().collect(),
            cap: None,
        }
    }

    /// Stop progression at `cap` (builder pattern).
    #[must_use]
    pub fn with_cap(mut self, cap: Option<u32>) -> Self {
        self.cap = cap;
        self
    }

    pub fn threshold(&self, level: u32) -> Option<u64> {
        self.thresholds.get(&level).copied()
    }

    pub fn cap(&self) -> Option<u32> {
        self.cap
    }

    /// Highest level with a defined threshold.
    pub fn highest_defined(&self) -> Option<u32> {
        self.thresholds.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }
}

/// A character's level and experience toward the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperienceLedger {
    pub level: u32,
    pub experience: u64,
}

impl ExperienceLedger {
    pub const fn new(level: u32, experience: u64) -> Self {
        Self { level, experience }
    }
}

impl Default for ExperienceLedger {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

/// Result of [`add_experience`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUp {
    pub ledger: ExperienceLedger,
    pub levels_gained: u32,
}

/// Add `gained` experience and resolve every level-up it triggers.
///
/// # Algorithm
///
/// ```text
/// total = experience + gained
/// while total ≥ threshold(level):
///     total -= threshold(level)
///     level += 1
/// ```
///
/// A missing threshold for a level the loop needs is a data-integrity error
/// and is never defaulted. With a cap configured the loop stops at the cap
/// and experience is clamped to one below the cap's threshold (or zero when
/// the cap level has none).
pub fn add_experience(
    ledger: &ExperienceLedger,
    gained: u64,
    table: &LevelTable,
) -> Result<LevelUp, ProgressionError> {
    let mut level = ledger.level;
    let mut experience = ledger.experience.saturating_add(gained);

    loop {
        if let Some(cap) = table.cap().filter(|cap| level >= *cap) {
            experience = match table.threshold(cap) {
                Some(threshold) => experience.min(threshold.saturating_sub(1)),
                None => 0,
            };
            break;
        }

        let threshold = table
            .threshold(level)
            .ok_or(ProgressionError::MissingLevelDefinition { level })?;
        if threshold == 0 {
            return Err(ProgressionError::ZeroThreshold { level });
        }
        if experience < threshold {
            break;
        }

        experience -= threshold;
        level += 1;
    }

    Ok(LevelUp {
        ledger: ExperienceLedger::new(level, experience),
        levels_gained: level.saturating_sub(ledger.level),
    })
}
