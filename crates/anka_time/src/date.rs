//! Strict date parsing and decomposition.

use chrono::{Datelike, NaiveDate, Utc};

use crate::error::DateError;

/// Month/day/year decomposition of a calendar date.
///
/// `year` is signed (astronomical numbering, year 0 = 1 BC); the numerology
/// formulas consume the digits of its absolute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateParts {
    /// Signed proleptic Gregorian year.
    pub year: i32,
    /// Month 1-12.
    pub month: u32,
    /// Day of month 1-31.
    pub day: u32,
}

/// Decompose a `NaiveDate` into year/month/day parts.
pub fn date_parts(date: NaiveDate) -> DateParts {
    DateParts {
        year: date.year(),
        month: date.month(),
        day: date.day(),
    }
}

/// Today's date in UTC, for the rolling personal/universal cycles.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parse a strict `[-]YYYY-MM-DD` date.
///
/// The year field must carry at least four digits (zero-padded below 1000)
/// and an explicit leading `-` for BC years. Two-digit years are rejected
/// outright rather than guessed into a century; a corrupted ancient founding
/// year is worse than a parse error.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    let s = input.trim();
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let mut fields = rest.split('-');
    let (Some(y), Some(m), Some(d), None) = (
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
    ) else {
        return Err(DateError::Format(input.to_string()));
    };

    if y.len() < 4 || m.len() != 2 || d.len() != 2 {
        return Err(DateError::Format(input.to_string()));
    }
    let all_digits = |f: &str| f.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(y) || !all_digits(m) || !all_digits(d) {
        return Err(DateError::Format(input.to_string()));
    }

    let year: i32 = y
        .parse::<i32>()
        .map(|v| if negative { -v } else { v })
        .map_err(|_| DateError::Format(input.to_string()))?;
    let month: u32 = m.parse().map_err(|_| DateError::Format(input.to_string()))?;
    let day: u32 = d.parse().map_err(|_| DateError::Format(input.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(DateError::Calendar { year, month, day })
}
