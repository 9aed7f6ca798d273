//! Western (tropical) zodiac sign resolution from month and day.
//!
//! The year plays no part; sign boundaries are a fixed ordered table of
//! (start month, start day, end month, end day) ranges. One predicate is
//! used for every range, wrapping or not: a date matches when it falls in
//! the start month at or after the start day, or in the end month at or
//! before the end day. Exactly one range matches any real (month, day).

use serde::{Deserialize, Serialize};

/// The 12 signs in table order, Aries first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WesternSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// The four classical elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WesternElement {
    Fire,
    Earth,
    Air,
    Water,
}

impl WesternElement {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

/// Cardinal/fixed/mutable quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

/// All 12 signs in order, for indexing (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [WesternSign; 12] = [
    WesternSign::Aries,
    WesternSign::Taurus,
    WesternSign::Gemini,
    WesternSign::Cancer,
    WesternSign::Leo,
    WesternSign::Virgo,
    WesternSign::Libra,
    WesternSign::Scorpio,
    WesternSign::Sagittarius,
    WesternSign::Capricorn,
    WesternSign::Aquarius,
    WesternSign::Pisces,
];

/// Date range of one sign: (start month, start day, end month, end day).
/// Capricorn's range wraps the year boundary (Dec 22 - Jan 19).
const SIGN_RANGES: [(u32, u32, u32, u32); 12] = [
    (3, 21, 4, 19),   // Aries
    (4, 20, 5, 20),   // Taurus
    (5, 21, 6, 20),   // Gemini
    (6, 21, 7, 22),   // Cancer
    (7, 23, 8, 22),   // Leo
    (8, 23, 9, 22),   // Virgo
    (9, 23, 10, 22),  // Libra
    (10, 23, 11, 21), // Scorpio
    (11, 22, 12, 21), // Sagittarius
    (12, 22, 1, 19),  // Capricorn
    (1, 20, 2, 18),   // Aquarius
    (2, 19, 3, 20),   // Pisces
];

impl WesternSign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index in table order (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    pub const fn element(self) -> WesternElement {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => WesternElement::Fire,
            Self::Taurus | Self::Virgo | Self::Capricorn => WesternElement::Earth,
            Self::Gemini | Self::Libra | Self::Aquarius => WesternElement::Air,
            Self::Cancer | Self::Scorpio | Self::Pisces => WesternElement::Water,
        }
    }

    pub const fn modality(self) -> Modality {
        match self {
            Self::Aries | Self::Cancer | Self::Libra | Self::Capricorn => Modality::Cardinal,
            Self::Taurus | Self::Leo | Self::Scorpio | Self::Aquarius => Modality::Fixed,
            Self::Gemini | Self::Virgo | Self::Sagittarius | Self::Pisces => Modality::Mutable,
        }
    }

    pub const fn ruling_planet(self) -> &'static str {
        match self {
            Self::Aries => "Mars",
            Self::Taurus => "Venus",
            Self::Gemini => "Mercury",
            Self::Cancer => "Moon",
            Self::Leo => "Sun",
            Self::Virgo => "Mercury",
            Self::Libra => "Venus",
            Self::Scorpio => "Pluto",
            Self::Sagittarius => "Jupiter",
            Self::Capricorn => "Saturn",
            Self::Aquarius => "Uranus",
            Self::Pisces => "Neptune",
        }
    }

    pub const fn traits(self) -> &'static [&'static str] {
        match self {
            Self::Aries => &["bold", "direct", "pioneering"],
            Self::Taurus => &["steadfast", "sensual", "practical"],
            Self::Gemini => &["curious", "adaptable", "expressive"],
            Self::Cancer => &["protective", "intuitive", "nurturing"],
            Self::Leo => &["confident", "generous", "dramatic"],
            Self::Virgo => &["precise", "analytical", "helpful"],
            Self::Libra => &["diplomatic", "fair-minded", "sociable"],
            Self::Scorpio => &["intense", "resourceful", "private"],
            Self::Sagittarius => &["adventurous", "candid", "philosophical"],
            Self::Capricorn => &["disciplined", "ambitious", "patient"],
            Self::Aquarius => &["inventive", "independent", "humanitarian"],
            Self::Pisces => &["empathetic", "imaginative", "gentle"],
        }
    }
}

/// Resolve the sign for a (month, day) pair.
///
/// Total: a (month, day) outside any range (only possible for malformed
/// input such as month 0 or day 40) falls back to the first table entry,
/// Aries. Catalog ingestion depends on this never panicking.
pub fn western_sign(month: u32, day: u32) -> WesternSign {
    for (i, &(sm, sd, em, ed)) in SIGN_RANGES.iter().enumerate() {
        if (month == sm && day >= sd) || (month == em && day <= ed) {
            return ALL_SIGNS[i];
        }
    }
    ALL_SIGNS[0]
}
