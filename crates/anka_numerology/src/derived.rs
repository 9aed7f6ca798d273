//! Attitude, maturity, day-of-birth, and the karmic detectors.

use std::collections::BTreeSet;

use anka_math::reduce;
use anka_time::DateParts;

use crate::date_numbers::NumberTrace;
use crate::name_numbers::letter_values;

/// The karmic debt numbers, flagged from intermediate sums.
pub const KARMIC_DEBTS: [u32; 4] = [13, 14, 16, 19];

/// Day-of-birth number: the reduced day of the month. Masters survive only
/// as days 11 and 22; no month has a 33rd day.
pub fn day_of_birth(parts: DateParts) -> u32 {
    reduce(parts.day, true)
}

/// Attitude number: reduced month + day, no year term.
pub fn attitude(parts: DateParts) -> u32 {
    reduce(reduce(parts.month, true) + reduce(parts.day, true), true)
}

/// Maturity number: reduced life path + expression, masters preserved.
///
/// With an undefined (0) expression the result degenerates to the reduced
/// life path, which callers should treat as undefined too.
pub fn maturity(life_path: u32, expression: u32) -> u32 {
    reduce(life_path + expression, true)
}

/// Collect karmic debts from the traced computations.
///
/// A debt number is any of 13/14/16/19 appearing as a pre-reduction sum in
/// the life path, expression, soul urge, or personality computation. Final
/// values alone cannot show this: a letter sum of 16 reduces to 7 and the
/// 16 is gone.
pub fn karmic_debts(traces: &[&NumberTrace]) -> BTreeSet<u32> {
    traces
        .iter()
        .flat_map(|t| t.intermediates.iter().copied())
        .filter(|n| KARMIC_DEBTS.contains(n))
        .collect()
}

/// Karmic lessons: the digits 1-9 that never occur among the name's letter
/// values. A letterless name is missing all nine.
pub fn karmic_lessons(name: &str) -> BTreeSet<u32> {
    let present: BTreeSet<u32> = letter_values(name).into_iter().collect();
    (1..=9).filter(|d| !present.contains(d)).collect()
}
