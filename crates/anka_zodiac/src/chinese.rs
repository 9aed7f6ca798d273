//! Chinese zodiac resolution from the signed year.
//!
//! Keyed to the sexagenary cycle anchor: astronomical year 4 (and 1984) is
//! the Yang Wood Rat. Catalog cues carry BC years, where a naive `%` gives a
//! negative remainder, so both cycle indices use the double-offset form
//! `((year - 4) mod n + n) mod n`.
//!
//! One canonical element ordering is defined here, the Wu Xing generating
//! sequence Wood→Fire→Earth→Metal→Water, and every caller goes through it.

use serde::{Deserialize, Serialize};

/// The 12 animals in cycle order (Rat = year 4 + 12k).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChineseAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// All 12 animals in cycle order.
pub const ALL_ANIMALS: [ChineseAnimal; 12] = [
    ChineseAnimal::Rat,
    ChineseAnimal::Ox,
    ChineseAnimal::Tiger,
    ChineseAnimal::Rabbit,
    ChineseAnimal::Dragon,
    ChineseAnimal::Snake,
    ChineseAnimal::Horse,
    ChineseAnimal::Goat,
    ChineseAnimal::Monkey,
    ChineseAnimal::Rooster,
    ChineseAnimal::Dog,
    ChineseAnimal::Pig,
];

impl ChineseAnimal {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }
}

/// The five elements in the canonical Wu Xing generating order.
///
/// Two years per element: years 4-5 Wood, 6-7 Fire, 8-9 Earth, 0-1 Metal,
/// 2-3 Water (mod 10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChineseElement {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in generating order.
pub const ALL_ELEMENTS: [ChineseElement; 5] = [
    ChineseElement::Wood,
    ChineseElement::Fire,
    ChineseElement::Earth,
    ChineseElement::Metal,
    ChineseElement::Water,
];

impl ChineseElement {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// The element this one generates in the creation cycle
    /// (Wood→Fire→Earth→Metal→Water→Wood).
    pub const fn generates(self) -> ChineseElement {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element this one controls in the control cycle
    /// (Wood→Earth, Earth→Water, Water→Fire, Fire→Metal, Metal→Wood).
    pub const fn controls(self) -> ChineseElement {
        match self {
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
        }
    }
}

/// Yin/yang polarity of a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YinYang {
    Yang,
    Yin,
}

impl YinYang {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }
}

/// Full Chinese zodiac classification of a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChineseZodiac {
    pub animal: ChineseAnimal,
    pub element: ChineseElement,
    pub yin_yang: YinYang,
}

/// Resolve animal, element, and polarity for a signed year.
///
/// The double-offset `((year - 4) % n + n) % n` keeps both indices in
/// range for BC years, where `%` alone yields a negative remainder.
pub fn chinese_zodiac(year: i32) -> ChineseZodiac {
    let animal_index = (((year - 4) % 12 + 12) % 12) as usize;
    let element_index = ((((year - 4) % 10 + 10) % 10) / 2) as usize;
    let yin_yang = if year % 2 == 0 { YinYang::Yang } else { YinYang::Yin };
    ChineseZodiac {
        animal: ALL_ANIMALS[animal_index],
        element: ALL_ELEMENTS[element_index],
        yin_yang,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_years() {
        // 1984: Yang Wood Rat.
        let z = chinese_zodiac(1984);
        assert_eq!(z.animal, ChineseAnimal::Rat);
        assert_eq!(z.element, ChineseElement::Wood);
        assert_eq!(z.yin_yang, YinYang::Yang);

        // 2000: Yang Metal Dragon.
        let z = chinese_zodiac(2000);
        assert_eq!(z.animal, ChineseAnimal::Dragon);
        assert_eq!(z.element, ChineseElement::Metal);
        assert_eq!(z.yin_yang, YinYang::Yang);

        // 1995: Yin Wood Pig.
        let z = chinese_zodiac(1995);
        assert_eq!(z.animal, ChineseAnimal::Pig);
        assert_eq!(z.element, ChineseElement::Wood);
        assert_eq!(z.yin_yang, YinYang::Yin);
    }

    #[test]
    fn negative_years_stay_in_range() {
        // The founding-of-Rome cue: ((-753 - 4) % 12 + 12) % 12 = 11 → Pig.
        let z = chinese_zodiac(-753);
        assert_eq!(z.animal, ChineseAnimal::Pig);
        assert_eq!(z.yin_yang, YinYang::Yin);

        for year in -3000..0 {
            let z = chinese_zodiac(year);
            // Lookup via the const tables already proves index ∈ range;
            // pin the 12/10-cycle consistency with the mirror formula.
            assert_eq!(z.animal, ALL_ANIMALS[(year - 4).rem_euclid(12) as usize]);
            assert_eq!(
                z.element,
                ALL_ELEMENTS[((year - 4).rem_euclid(10) / 2) as usize]
            );
        }
    }

    #[test]
    fn sixty_year_cycle_repeats() {
        for year in 1900..1960 {
            assert_eq!(chinese_zodiac(year), chinese_zodiac(year + 60));
        }
    }

    #[test]
    fn creation_and_control_cycles_close() {
        let mut e = ChineseElement::Wood;
        for _ in 0..5 {
            e = e.generates();
        }
        assert_eq!(e, ChineseElement::Wood);

        let mut e = ChineseElement::Wood;
        for _ in 0..5 {
            e = e.controls();
        }
        assert_eq!(e, ChineseElement::Wood);
    }
}
