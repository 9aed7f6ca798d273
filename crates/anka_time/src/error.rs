//! Error types for date parsing.

use thiserror::Error;

/// Errors from strict date parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DateError {
    /// Input does not match `[-]YYYY-MM-DD` with a four-or-more-digit year.
    #[error("date {0:?} does not match [-]YYYY-MM-DD")]
    Format(String),
    /// Fields parsed but do not form a real calendar date.
    #[error("no such calendar date: year {year}, month {month}, day {day}")]
    Calendar { year: i32, month: u32, day: u32 },
}
