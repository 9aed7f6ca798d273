//! Compatibility scoring between two identity profiles.
//!
//! The score starts from the life-path bucket (per the fixed classification
//! tables), adds small bonuses for exact secondary-number matches and for
//! Wu Xing creation-cycle element pairs, subtracts a penalty for
//! control-cycle pairs, and clamps to [0, 100]. Every contribution is
//! recorded in a per-factor breakdown so the narrative layer can explain
//! the number without recomputing it.

pub mod tables;

use serde::{Deserialize, Serialize};

use anka_core::{NumerologyProfile, ZodiacProfile};
use anka_zodiac::ChineseElement;

pub use tables::{MATCH_ROWS, MatchBucket, MatchRow, bucket_of, match_row};

const BASE_BEST: i32 = 94;
const BASE_GOOD: i32 = 80;
const BASE_CHALLENGING: i32 = 55;
const BASE_NEUTRAL: i32 = 70;

const BONUS_SOUL_URGE: i32 = 3;
const BONUS_EXPRESSION: i32 = 3;
const BONUS_CREATION_CYCLE: i32 = 4;
const PENALTY_CONTROL_CYCLE: i32 = 4;

/// Qualitative tier of the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompatibilityLevel {
    Excellent,
    Harmonious,
    Workable,
    Challenging,
    Difficult,
}

impl CompatibilityLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Harmonious => "Harmonious",
            Self::Workable => "Workable",
            Self::Challenging => "Challenging",
            Self::Difficult => "Difficult",
        }
    }

    const fn from_score(score: i32) -> Self {
        match score {
            90.. => Self::Excellent,
            75..=89 => Self::Harmonious,
            60..=74 => Self::Workable,
            40..=59 => Self::Challenging,
            _ => Self::Difficult,
        }
    }
}

/// One recorded contribution to the overall score.
///
/// Serialize-only: `factor` is a static table label, and nothing feeds
/// scoring results back into the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactorScore {
    pub factor: &'static str,
    pub detail: String,
    pub delta: i32,
}

/// Full scoring outcome for a pair of profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityResult {
    /// Clamped to 0-100.
    pub overall_score: u8,
    pub level: CompatibilityLevel,
    /// Partner life paths the first profile's row classes as best.
    pub best_matches: Vec<u32>,
    pub good_matches: Vec<u32>,
    pub challenging_matches: Vec<u32>,
    pub breakdown: Vec<FactorScore>,
}

fn element_adjustment(a: ChineseElement, b: ChineseElement) -> (i32, &'static str) {
    if a.generates() == b || b.generates() == a {
        (BONUS_CREATION_CYCLE, "creation cycle")
    } else if a.controls() == b || b.controls() == a {
        (-PENALTY_CONTROL_CYCLE, "control cycle")
    } else {
        (0, "no cycle relation")
    }
}

/// Score two numerology profiles, optionally refined by their zodiac
/// element relation. Pure; safe for any pair of inputs.
pub fn score(
    a: &NumerologyProfile,
    b: &NumerologyProfile,
    zodiac: Option<(&ZodiacProfile, &ZodiacProfile)>,
) -> CompatibilityResult {
    let mut breakdown = Vec::new();

    let bucket = bucket_of(a.life_path_number, b.life_path_number);
    let base = match bucket {
        MatchBucket::Best => BASE_BEST,
        MatchBucket::Good => BASE_GOOD,
        MatchBucket::Challenging => BASE_CHALLENGING,
        MatchBucket::Neutral => BASE_NEUTRAL,
    };
    breakdown.push(FactorScore {
        factor: "life path bucket",
        detail: format!(
            "{} vs {} → {bucket:?}",
            a.life_path_number, b.life_path_number
        ),
        delta: base,
    });
    let mut total = base;

    // Secondary exact matches. 0 marks an undefined name number and never
    // counts as a match.
    if a.soul_urge_number != 0 && a.soul_urge_number == b.soul_urge_number {
        breakdown.push(FactorScore {
            factor: "soul urge match",
            detail: format!("both {}", a.soul_urge_number),
            delta: BONUS_SOUL_URGE,
        });
        total += BONUS_SOUL_URGE;
    }
    if a.expression_number != 0 && a.expression_number == b.expression_number {
        breakdown.push(FactorScore {
            factor: "expression match",
            detail: format!("both {}", a.expression_number),
            delta: BONUS_EXPRESSION,
        });
        total += BONUS_EXPRESSION;
    }

    if let Some((za, zb)) = zodiac {
        let (delta, relation) = element_adjustment(za.chinese_element, zb.chinese_element);
        if delta != 0 {
            breakdown.push(FactorScore {
                factor: "element cycle",
                detail: format!(
                    "{} / {}: {relation}",
                    za.chinese_element.name(),
                    zb.chinese_element.name()
                ),
                delta,
            });
            total += delta;
        }
    }

    let clamped = total.clamp(0, 100);
    let row = match_row(a.life_path_number);
    CompatibilityResult {
        overall_score: clamped as u8,
        level: CompatibilityLevel::from_score(clamped),
        best_matches: row.map(|r| r.best.to_vec()).unwrap_or_default(),
        good_matches: row.map(|r| r.good.to_vec()).unwrap_or_default(),
        challenging_matches: row.map(|r| r.challenging.to_vec()).unwrap_or_default(),
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn profile(life_path: u32, soul_urge: u32, expression: u32) -> NumerologyProfile {
        NumerologyProfile {
            life_path_number: life_path,
            expression_number: expression,
            soul_urge_number: soul_urge,
            personality_number: 1,
            attitude_number: 1,
            maturity_number: 1,
            generation_number: 1,
            day_of_birth_number: 1,
            karmic_debt_numbers: BTreeSet::new(),
            karmic_lesson_numbers: BTreeSet::new(),
        }
    }

    #[test]
    fn best_bucket_scores_high() {
        let r = score(&profile(1, 2, 3), &profile(5, 4, 6), None);
        assert_eq!(r.overall_score, 94);
        assert_eq!(r.level, CompatibilityLevel::Excellent);
        assert_eq!(r.best_matches, vec![1, 5, 7]);
    }

    #[test]
    fn secondary_matches_add_bonuses() {
        let r = score(&profile(1, 6, 8), &profile(5, 6, 8), None);
        assert_eq!(r.overall_score, 100); // 94 + 3 + 3
        assert_eq!(r.breakdown.len(), 3);
    }

    #[test]
    fn undefined_name_numbers_never_match() {
        let r = score(&profile(1, 0, 0), &profile(5, 0, 0), None);
        assert_eq!(r.overall_score, 94);
        assert_eq!(r.breakdown.len(), 1);
    }

    #[test]
    fn challenging_bucket_scores_low() {
        let r = score(&profile(1, 2, 3), &profile(4, 5, 6), None);
        assert_eq!(r.overall_score, 55);
        assert_eq!(r.level, CompatibilityLevel::Challenging);
    }

    #[test]
    fn neutral_default_for_unclassified() {
        // 1's row lists 2 nowhere: neutral base.
        let r = score(&profile(1, 2, 3), &profile(2, 5, 6), None);
        assert_eq!(r.overall_score, 70);
        assert_eq!(r.level, CompatibilityLevel::Workable);
    }

    #[test]
    fn result_serializes_with_breakdown() {
        let r = score(&profile(1, 6, 8), &profile(5, 6, 8), None);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["overall_score"], 100);
        assert_eq!(json["level"], "Excellent");
        assert_eq!(json["breakdown"][0]["factor"], "life path bucket");
        assert_eq!(json["breakdown"][0]["delta"], 94);
    }

    #[test]
    fn scores_clamp_for_all_life_path_pairs() {
        let keys = [1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33];
        for a in keys {
            for b in keys {
                let r = score(&profile(a, 6, 8), &profile(b, 6, 8), None);
                assert!(r.overall_score <= 100, "({a}, {b}) → {}", r.overall_score);
            }
        }
    }
}
