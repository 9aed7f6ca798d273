//! Fixed life-path compatibility classification tables.
//!
//! For each of the 12 life-path keys, every other life path is classed as
//! best, good, or challenging; anything unlisted is neutral. The tables are
//! deliberately allowed to be asymmetric (A naming B "best" does not force
//! the reverse), so the scorer always reads from the first profile's row.

/// How one life path classes another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchBucket {
    Best,
    Good,
    Challenging,
    Neutral,
}

/// One row of the table: the key life path and its three partner lists.
#[derive(Debug, Clone, Copy)]
pub struct MatchRow {
    pub life_path: u32,
    pub best: &'static [u32],
    pub good: &'static [u32],
    pub challenging: &'static [u32],
}

/// Classification rows for 1-9 and the three masters.
///
/// Odd "mental" numbers group with each other, the even "practical" numbers
/// likewise, and the masters favor their root digits and each other.
pub const MATCH_ROWS: [MatchRow; 12] = [
    MatchRow { life_path: 1, best: &[1, 5, 7], good: &[3, 9], challenging: &[4, 6] },
    MatchRow { life_path: 2, best: &[2, 4, 8], good: &[3, 6], challenging: &[5, 7] },
    MatchRow { life_path: 3, best: &[3, 6, 9], good: &[1, 2, 5], challenging: &[4, 7, 8] },
    MatchRow { life_path: 4, best: &[2, 4, 8], good: &[6, 7], challenging: &[3, 5] },
    MatchRow { life_path: 5, best: &[1, 5, 7], good: &[3, 9], challenging: &[2, 4, 6] },
    MatchRow { life_path: 6, best: &[3, 6, 9], good: &[2, 4, 8], challenging: &[1, 5, 7] },
    MatchRow { life_path: 7, best: &[1, 5, 7], good: &[4], challenging: &[2, 3, 8] },
    MatchRow { life_path: 8, best: &[2, 4, 8], good: &[6], challenging: &[1, 3, 7] },
    MatchRow { life_path: 9, best: &[3, 6, 9], good: &[1, 5], challenging: &[2, 4, 8] },
    MatchRow { life_path: 11, best: &[2, 11, 22], good: &[4, 6, 33], challenging: &[5, 7] },
    MatchRow { life_path: 22, best: &[4, 11, 22], good: &[2, 8, 33], challenging: &[3, 5] },
    MatchRow { life_path: 33, best: &[6, 9, 33], good: &[3, 11, 22], challenging: &[1, 8] },
];

/// Row for a life path, if it is one of the 12 table keys.
pub fn match_row(life_path: u32) -> Option<&'static MatchRow> {
    MATCH_ROWS.iter().find(|row| row.life_path == life_path)
}

/// How `a` classes `b`. Unknown keys (the 0 "undefined" marker) and
/// unlisted partners are Neutral.
pub fn bucket_of(a: u32, b: u32) -> MatchBucket {
    let Some(row) = match_row(a) else {
        return MatchBucket::Neutral;
    };
    if row.best.contains(&b) {
        MatchBucket::Best
    } else if row.good.contains(&b) {
        MatchBucket::Good
    } else if row.challenging.contains(&b) {
        MatchBucket::Challenging
    } else {
        MatchBucket::Neutral
    }
}
