//! Life path and generation numbers from the birth date.

use anka_math::{digit_sum, reduce, reduce_with_trace};
use anka_time::DateParts;

/// A computed number plus every intermediate sum visited on the way.
///
/// The intermediates are what karmic-debt detection scans; the final value
/// alone cannot reveal that a sum passed through 13, 14, 16, or 19.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberTrace {
    /// Final reduced value.
    pub value: u32,
    /// All pre-reduction sums, in computation order.
    pub intermediates: Vec<u32>,
}

impl NumberTrace {
    /// A trace for a number that never existed (e.g. name numbers of a
    /// letterless name). Value 0 is outside the 1-9/master codomain and
    /// marks the number as undefined.
    pub const fn undefined() -> Self {
        Self { value: 0, intermediates: Vec::new() }
    }
}

/// Digit sum of the year's absolute value; BC years contribute the same
/// digits as their AD mirror.
fn year_digit_sum(year: i32) -> u32 {
    digit_sum(year.unsigned_abs())
}

/// Life path number with its intermediate sums.
///
/// Month, day, and year digit-sum are each reduced with masters preserved,
/// then the three terms are summed and reduced once more, again preserving
/// masters. A birth day of 29 therefore contributes 11, not 2.
pub fn life_path_traced(parts: DateParts) -> NumberTrace {
    let month = reduce_with_trace(parts.month, true);
    let day = reduce_with_trace(parts.day, true);
    let year = reduce_with_trace(year_digit_sum(parts.year), true);
    let total = reduce_with_trace(month.value + day.value + year.value, true);

    let mut intermediates = Vec::new();
    for term in [&month, &day, &year, &total] {
        intermediates.extend_from_slice(&term.steps);
    }
    NumberTrace { value: total.value, intermediates }
}

/// Life path number: `reduce(reduce(month) + reduce(day) +
/// reduce(digit_sum(year)))` with masters preserved throughout.
pub fn life_path(parts: DateParts) -> u32 {
    life_path_traced(parts).value
}

/// Generation (birth-cohort) number: the life-path procedure scoped to the
/// birth year alone.
pub fn generation(parts: DateParts) -> u32 {
    reduce(year_digit_sum(parts.year), true)
}
