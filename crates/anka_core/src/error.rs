//! Error types for profile construction.

use anka_time::DateError;
use thiserror::Error;

/// Errors from the interactive (single-profile) entry point.
///
/// The batch entry point never returns these; it substitutes the default
/// profile instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ProfileError {
    /// The birth date failed to parse. A user profile must never silently
    /// fall back to a wrong date, so this propagates.
    #[error("invalid birth date: {0}")]
    InvalidDate(#[from] DateError),
}
