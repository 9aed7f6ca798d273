//! Expression, soul urge, and personality numbers from the birth name.

use anka_math::{is_vowel, letter_value, name_letters, reduce_with_trace};

use crate::date_numbers::NumberTrace;

/// Which letters of the name a number draws on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LetterFilter {
    All,
    Vowels,
    Consonants,
}

impl LetterFilter {
    fn admits(self, c: char) -> bool {
        match self {
            Self::All => true,
            Self::Vowels => is_vowel(c),
            Self::Consonants => !is_vowel(c),
        }
    }
}

/// Cipher values of every letter in the name, in order.
pub fn letter_values(name: &str) -> Vec<u32> {
    name_letters(name)
        .into_iter()
        .filter_map(letter_value)
        .collect()
}

fn name_number(name: &str, filter: LetterFilter) -> NumberTrace {
    let sum: u32 = name_letters(name)
        .into_iter()
        .filter(|&c| filter.admits(c))
        .filter_map(letter_value)
        .sum();
    if sum == 0 {
        // No contributing letters: the number is undefined, not a digit.
        return NumberTrace::undefined();
    }
    let r = reduce_with_trace(sum, true);
    NumberTrace { value: r.value, intermediates: r.steps }
}

/// Expression number: reduced sum over all letters.
pub fn expression_traced(name: &str) -> NumberTrace {
    name_number(name, LetterFilter::All)
}

/// Soul urge number: reduced sum over vowels only.
pub fn soul_urge_traced(name: &str) -> NumberTrace {
    name_number(name, LetterFilter::Vowels)
}

/// Personality number: reduced sum over consonants only (Y counts here).
pub fn personality_traced(name: &str) -> NumberTrace {
    name_number(name, LetterFilter::Consonants)
}
