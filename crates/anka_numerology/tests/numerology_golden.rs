//! Integration tests for the numerology pipeline.
//!
//! Pure-math tests; fixed dates and names with hand-checked expectations.

use std::collections::BTreeSet;

use anka_numerology::{
    MasterPolicy, attitude, day_of_birth, expression_traced, generation, karmic_debts,
    karmic_lessons, life_path, life_path_traced, maturity, personal_cycles, personality_traced,
    soul_urge_traced, universal_day,
};
use anka_time::DateParts;

fn parts(year: i32, month: u32, day: u32) -> DateParts {
    DateParts { year, month, day }
}

// ---------------------------------------------------------------------------
// Full-profile goldens
// ---------------------------------------------------------------------------

#[test]
fn john_smith_1990_07_05_end_to_end() {
    let birth = parts(1990, 7, 5);
    let name = "John Smith";

    let lp = life_path_traced(birth);
    let expr = expression_traced(name);
    let soul = soul_urge_traced(name);
    let pers = personality_traced(name);

    assert_eq!(lp.value, 4);
    assert_eq!(expr.value, 8);
    assert_eq!(soul.value, 6);
    assert_eq!(pers.value, 11);

    assert_eq!(day_of_birth(birth), 5);
    assert_eq!(attitude(birth), 3); // 7 + 5 = 12 → 3
    assert_eq!(generation(birth), 1); // 19 → 10 → 1
    assert_eq!(maturity(lp.value, expr.value), 3); // 4 + 8 = 12 → 3

    let debts = karmic_debts(&[&lp, &expr, &soul, &pers]);
    assert_eq!(debts, BTreeSet::from([13, 19]));

    // j o h n s m i t h → {1, 6, 8, 5, 4, 9, 2}; missing 3 and 7.
    assert_eq!(karmic_lessons(name), BTreeSet::from([3, 7]));
}

#[test]
fn master_number_birth_dates() {
    // 1910-11-11: 11 + 11 + 11 = 33
    assert_eq!(life_path(parts(1910, 11, 11)), 33);
    // 1985-05-29: day 29 → 11; 5 + 11 + (1+9+8+5=23→5) = 21 → 3
    assert_eq!(life_path(parts(1985, 5, 29)), 3);
}

// ---------------------------------------------------------------------------
// BC dates (catalog cues)
// ---------------------------------------------------------------------------

#[test]
fn bc_dates_compute_like_their_mirror_year() {
    for (y, m, d) in [(-753, 4, 21), (-44, 3, 15), (-3000, 1, 1)] {
        let bc = life_path(parts(y, m, d));
        let ad = life_path(parts(-y, m, d));
        assert_eq!(bc, ad, "year {y}");
        assert!((1..=9).contains(&bc) || matches!(bc, 11 | 22 | 33));
    }
}

// ---------------------------------------------------------------------------
// Cycle numbers under both master policies
// ---------------------------------------------------------------------------

#[test]
fn cycles_respect_master_policy() {
    let birth = parts(1980, 3, 7);
    let on = parts(2017, 6, 14);

    let preserved = personal_cycles(birth, on, MasterPolicy::Preserve);
    let collapsed = personal_cycles(birth, on, MasterPolicy::Collapse);

    // 3 + 7 + 1 = 11
    assert_eq!(preserved.personal_year, 11);
    assert_eq!(collapsed.personal_year, 2);

    // Preserve: 11 + 6 = 17 → 8; 8 + 14 = 22 kept.
    assert_eq!(preserved.personal_month, 8);
    assert_eq!(preserved.personal_day, 22);
    // Collapse: 2 + 6 = 8; 8 + 14 = 22 → 4.
    assert_eq!(collapsed.personal_month, 8);
    assert_eq!(collapsed.personal_day, 4);
}

#[test]
fn universal_day_policy_split() {
    let on = parts(2018, 11, 9);
    assert_eq!(universal_day(on, MasterPolicy::Preserve), 22);
    assert_eq!(universal_day(on, MasterPolicy::Collapse), 4);
}

// ---------------------------------------------------------------------------
// Codomain sweep
// ---------------------------------------------------------------------------

#[test]
fn life_path_codomain_sweep() {
    for year in [-500, 0, 1, 888, 1969, 1990, 2024] {
        for month in 1..=12 {
            for day in 1..=28 {
                let v = life_path(parts(year, month, day));
                assert!(
                    (1..=9).contains(&v) || matches!(v, 11 | 22 | 33),
                    "life path {v} for {year}-{month}-{day}"
                );
            }
        }
    }
}
