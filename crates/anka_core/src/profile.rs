//! Profile types and the two construction paths.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use anka_numerology::{
    NumberTrace, attitude, day_of_birth, expression_traced, generation, karmic_debts,
    karmic_lessons, life_path_traced, maturity, personality_traced, soul_urge_traced,
};
use anka_time::{DateParts, date_parts, parse_date};
use anka_zodiac::{
    ChineseAnimal, ChineseElement, WesternElement, WesternSign, YinYang, chinese_zodiac,
    energy_signature, western_sign,
};

use crate::error::ProfileError;

/// Immutable biographical input.
///
/// `birth_time` and `birth_location` are carried for downstream consumers
/// (chart rendering, narrative generation); nothing in this engine reads
/// them yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthFact {
    pub full_name: Option<String>,
    pub birth_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_location: Option<String>,
}

impl BirthFact {
    /// A fact with only the required fields.
    pub fn new(full_name: Option<String>, birth_date: NaiveDate) -> Self {
        Self { full_name, birth_date, birth_time: None, birth_location: None }
    }
}

/// The canonical numerology codes of one person.
///
/// Every populated number lies in {1..9, 11, 22, 33}. The name-derived
/// numbers (expression, soul urge, personality, maturity) are 0 when the
/// fact carries no usable name; 0 means "undefined", never a digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyProfile {
    pub life_path_number: u32,
    pub expression_number: u32,
    pub soul_urge_number: u32,
    pub personality_number: u32,
    pub attitude_number: u32,
    pub maturity_number: u32,
    pub generation_number: u32,
    pub day_of_birth_number: u32,
    pub karmic_debt_numbers: BTreeSet<u32>,
    pub karmic_lesson_numbers: BTreeSet<u32>,
}

/// Symbolic zodiac classification; a pure function of the birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZodiacProfile {
    pub western_sign: WesternSign,
    pub western_element: WesternElement,
    pub chinese_animal: ChineseAnimal,
    pub chinese_element: ChineseElement,
    pub yin_yang: YinYang,
}

/// Everything the engine derives from one `BirthFact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityProfile {
    pub numerology: NumerologyProfile,
    pub zodiac: ZodiacProfile,
    pub energy_signature: String,
}

fn numerology_profile(full_name: Option<&str>, parts: DateParts) -> NumerologyProfile {
    let lp = life_path_traced(parts);

    let (expr, soul, pers, lessons) = match full_name {
        Some(name) => (
            expression_traced(name),
            soul_urge_traced(name),
            personality_traced(name),
            karmic_lessons(name),
        ),
        None => (
            NumberTrace::undefined(),
            NumberTrace::undefined(),
            NumberTrace::undefined(),
            BTreeSet::new(),
        ),
    };

    let debts = karmic_debts(&[&lp, &expr, &soul, &pers]);

    // Maturity needs both halves; without an expression number it is
    // undefined too.
    let maturity_number = if expr.value == 0 { 0 } else { maturity(lp.value, expr.value) };

    NumerologyProfile {
        life_path_number: lp.value,
        expression_number: expr.value,
        soul_urge_number: soul.value,
        personality_number: pers.value,
        attitude_number: attitude(parts),
        maturity_number,
        generation_number: generation(parts),
        day_of_birth_number: day_of_birth(parts),
        karmic_debt_numbers: debts,
        karmic_lesson_numbers: lessons,
    }
}

fn zodiac_profile(parts: DateParts) -> ZodiacProfile {
    let sign = western_sign(parts.month, parts.day);
    let chinese = chinese_zodiac(parts.year);
    ZodiacProfile {
        western_sign: sign,
        western_element: sign.element(),
        chinese_animal: chinese.animal,
        chinese_element: chinese.element,
        yin_yang: chinese.yin_yang,
    }
}

/// Build the full identity profile from an already-validated fact.
/// Infallible: the date is a real calendar date by construction.
pub fn profile_from_fact(fact: &BirthFact) -> IdentityProfile {
    let parts = date_parts(fact.birth_date);
    let numerology = numerology_profile(fact.full_name.as_deref(), parts);
    let zodiac = zodiac_profile(parts);
    let energy_signature = energy_signature(zodiac.chinese_element, numerology.life_path_number);
    IdentityProfile { numerology, zodiac, energy_signature }
}

/// Interactive entry point: parse the date string strictly and build the
/// profile. A bad date propagates; user profiles never default silently.
pub fn profile_from_parts(
    full_name: Option<&str>,
    date_str: &str,
) -> Result<IdentityProfile, ProfileError> {
    let birth_date = parse_date(date_str)?;
    let fact = BirthFact::new(full_name.map(str::to_owned), birth_date);
    Ok(profile_from_fact(&fact))
}

/// Batch (catalog "cue") entry point: never fails.
///
/// An unparseable date is logged and replaced by the documented default
/// profile so a thousands-long ingestion run keeps going. The default is
/// internally consistent: life path 1, Aries, and the Fire Rat year
/// (energy signature "Fire Initiator").
pub fn cue_profile(name: &str, date_str: &str) -> IdentityProfile {
    match profile_from_parts(Some(name), date_str) {
        Ok(profile) => {
            debug!(name, date = date_str, "cue profile computed");
            profile
        }
        Err(err) => {
            warn!(name, date = date_str, %err, "cue date unparseable, using default profile");
            IdentityProfile::degraded_default()
        }
    }
}

impl IdentityProfile {
    /// The documented batch fallback: life path 1, Aries, Fire Rat, Yang,
    /// energy signature "Fire Initiator". Name numbers are undefined (0).
    pub fn degraded_default() -> Self {
        IdentityProfile {
            numerology: NumerologyProfile {
                life_path_number: 1,
                expression_number: 0,
                soul_urge_number: 0,
                personality_number: 0,
                attitude_number: 1,
                maturity_number: 0,
                generation_number: 1,
                day_of_birth_number: 1,
                karmic_debt_numbers: BTreeSet::new(),
                karmic_lesson_numbers: BTreeSet::new(),
            },
            zodiac: ZodiacProfile {
                western_sign: WesternSign::Aries,
                western_element: WesternElement::Fire,
                chinese_animal: ChineseAnimal::Rat,
                chinese_element: ChineseElement::Fire,
                yin_yang: YinYang::Yang,
            },
            energy_signature: energy_signature(ChineseElement::Fire, 1),
        }
    }
}
