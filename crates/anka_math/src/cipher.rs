//! Pythagorean letter cipher.
//!
//! Letters map to 1..9 in a repeating sequence:
//! A,J,S=1  B,K,T=2  C,L,U=3  D,M,V=4  E,N,W=5
//! F,O,X=6  G,P,Y=7  H,Q,Z=8  I,R=9
//!
//! Vowels are A, E, I, O, U only; Y always counts as a consonant.

/// Cipher value of an ASCII letter, or `None` for any other character.
///
/// Case-insensitive. The repeating pattern makes the value a pure function
/// of the letter's 0-based alphabet position mod 9.
pub const fn letter_value(c: char) -> Option<u32> {
    if !c.is_ascii_alphabetic() {
        return None;
    }
    let pos = (c.to_ascii_lowercase() as u32) - ('a' as u32);
    Some(pos % 9 + 1)
}

/// Whether a letter is a vowel for soul-urge purposes (A, E, I, O, U).
pub const fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cipher_full_table() {
        let expected = [
            ('a', 1),
            ('b', 2),
            ('c', 3),
            ('d', 4),
            ('e', 5),
            ('f', 6),
            ('g', 7),
            ('h', 8),
            ('i', 9),
            ('j', 1),
            ('k', 2),
            ('l', 3),
            ('m', 4),
            ('n', 5),
            ('o', 6),
            ('p', 7),
            ('q', 8),
            ('r', 9),
            ('s', 1),
            ('t', 2),
            ('u', 3),
            ('v', 4),
            ('w', 5),
            ('x', 6),
            ('y', 7),
            ('z', 8),
        ];
        for (c, v) in expected {
            assert_eq!(letter_value(c), Some(v), "letter {c}");
            assert_eq!(letter_value(c.to_ascii_uppercase()), Some(v));
        }
    }

    #[test]
    fn non_letters_have_no_value() {
        for c in [' ', '-', '\'', '7', 'é', 'ß'] {
            assert_eq!(letter_value(c), None, "char {c:?}");
        }
    }

    #[test]
    fn y_is_a_consonant() {
        assert!(!is_vowel('y'));
        assert!(!is_vowel('Y'));
        for v in ['a', 'e', 'i', 'o', 'u', 'A', 'U'] {
            assert!(is_vowel(v), "vowel {v}");
        }
    }
}
