//! Calendar-date decomposition for the identity engine.
//!
//! This crate provides:
//! - `DateParts` extraction from a proleptic Gregorian date
//! - Strict `[-]YYYY-MM-DD` parsing with signed (BC) years
//! - "Today" acquisition for the rolling personal-cycle numbers
//!
//! Years use astronomical numbering: year 0 is 1 BC, year -753 is 754 BC.
//! Catalog "cue" entities (ancient city foundings, historical births) rely
//! on signed years, so parsing demands an explicit sign and a zero-padded
//! year field and never applies a two-digit-year century heuristic.

pub mod date;
pub mod error;

pub use date::{DateParts, date_parts, parse_date, today};
pub use error::DateError;
