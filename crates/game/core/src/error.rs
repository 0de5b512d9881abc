//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g. [`crate::TravelError`], [`crate::ProgressionError`])
//! live next to the operations that raise them. This module provides the shared
//! classification every one of them reports through [`GameError`].
//!
//! # Design Principles
//!
//! - **Type Safety**: Each engine has its own error enum with specific variants
//! - **Classification**: Errors are categorized so callers can pick a response
//! - **No internal retries**: Retrying is a caller policy

/// Category of a failure, used to pick the caller's response.
///
/// - **Validation**: bad input id or missing reference, reject the request
/// - **DataIntegrity**: content tables are missing a required entry
/// - **Unreachable**: the request is well formed but no route exists
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCategory {
    /// Invalid input - should not retry without changes.
    ///
    /// Examples: unknown target location, turn on a finished fight
    Validation,

    /// Content data is inconsistent.
    ///
    /// Examples: missing level threshold, duplicate location id
    /// These indicate broken content and should be investigated.
    DataIntegrity,

    /// No path exists between the requested endpoints.
    Unreachable,
}

impl ErrorCategory {
    /// Returns true if this error points at broken content rather than bad input.
    pub const fn is_data_integrity(&self) -> bool {
        matches!(self, Self::DataIntegrity)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify by what the caller should do, not by impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the category of this error.
    fn category(&self) -> ErrorCategory;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, metrics, and testing.
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
