//! Digit-sum reduction with master-number preservation.
//!
//! Numerology collapses an integer to a single digit by repeatedly summing
//! its decimal digits, except that the master numbers 11, 22, and 33 are
//! exempt from further reduction. Karmic-debt detection needs the values a
//! sum passes *through* before it settles, so a traced variant records every
//! intermediate.

/// The master numbers, exempt from single-digit reduction.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Whether `n` is one of the master numbers 11, 22, 33.
pub const fn is_master(n: u32) -> bool {
    matches!(n, 11 | 22 | 33)
}

/// Sum of the decimal digits of `n`.
pub const fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce `n` by repeated digit summing.
///
/// With `preserve_masters`, reduction stops as soon as the running value is
/// 11, 22, or 33. Total for all `u32`; loop length is bounded by the digit
/// count of `n`.
pub const fn reduce(mut n: u32, preserve_masters: bool) -> u32 {
    while n > 9 {
        if preserve_masters && is_master(n) {
            return n;
        }
        n = digit_sum(n);
    }
    n
}

/// Outcome of a traced reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// Final reduced value (1-9, or 11/22/33 when preserved; 0 only for n=0).
    pub value: u32,
    /// Every value visited before the final one, starting with `n` itself.
    /// Empty when `n` needed no reduction.
    pub steps: Vec<u32>,
}

impl Reduction {
    /// Whether any intermediate step equals `target`.
    pub fn passed_through(&self, target: u32) -> bool {
        self.steps.contains(&target)
    }
}

/// Reduce `n`, recording each intermediate sum before the final value.
///
/// `reduce_with_trace(79, true)` yields value 7 with steps `[79, 16]`; the
/// karmic-debt scan inspects those steps for 13/14/16/19.
pub fn reduce_with_trace(mut n: u32, preserve_masters: bool) -> Reduction {
    let mut steps = Vec::new();
    while n > 9 {
        if preserve_masters && is_master(n) {
            break;
        }
        steps.push(n);
        n = digit_sum(n);
    }
    Reduction { value: n, steps }
}
