//! Rolling personal and universal cycle numbers.
//!
//! Whether the final reduction of these cycle numbers preserves 11/22/33 is
//! disputed across numerology sources, so the choice is an explicit
//! [`MasterPolicy`] rather than a hard-coded interpretation. Life path and
//! the other identity numbers are unaffected; they always preserve masters.

use anka_math::{digit_sum, reduce};
use anka_time::DateParts;

/// Master-number handling at the final reduction of a cycle number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MasterPolicy {
    /// 11/22/33 survive the final reduction.
    #[default]
    Preserve,
    /// Cycle numbers always collapse to a single digit.
    Collapse,
}

impl MasterPolicy {
    const fn preserves(self) -> bool {
        matches!(self, Self::Preserve)
    }
}

/// The three personal cycle numbers for a given calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalCycles {
    pub personal_year: u32,
    pub personal_month: u32,
    pub personal_day: u32,
}

/// Personal year: birth month + birth day + current year, each term reduced,
/// final reduction per `policy`.
pub fn personal_year(birth: DateParts, on: DateParts, policy: MasterPolicy) -> u32 {
    let terms = reduce(birth.month, true)
        + reduce(birth.day, true)
        + reduce(digit_sum(on.year.unsigned_abs()), true);
    reduce(terms, policy.preserves())
}

/// Personal year/month/day for the calendar date `on`.
///
/// Month chains off the year, day off the month, each with one more
/// reduction under the same policy.
pub fn personal_cycles(birth: DateParts, on: DateParts, policy: MasterPolicy) -> PersonalCycles {
    let personal_year = personal_year(birth, on, policy);
    let personal_month = reduce(personal_year + on.month, policy.preserves());
    let personal_day = reduce(personal_month + on.day, policy.preserves());
    PersonalCycles { personal_year, personal_month, personal_day }
}

/// Universal day number of a calendar date: plain digit sums of month, day,
/// and year, masters handled only at the final step.
pub fn universal_day(on: DateParts, policy: MasterPolicy) -> u32 {
    let total = digit_sum(on.month) + digit_sum(on.day) + digit_sum(on.year.unsigned_abs());
    reduce(total, policy.preserves())
}
