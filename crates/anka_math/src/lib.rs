//! Pure digit and letter arithmetic underlying the numerology engine.
//!
//! This crate provides:
//! - Digit-sum reduction with master-number (11/22/33) preservation
//! - The Pythagorean letter cipher (A..Z → 1..9) and vowel classification
//! - Name tokenization into cipher-ready letters
//!
//! Everything here is total and allocation-light; downstream crates build
//! every numerology code on these three primitives.

pub mod cipher;
pub mod reduce;
pub mod tokenize;

pub use cipher::{is_vowel, letter_value};
pub use reduce::{Reduction, digit_sum, is_master, reduce, reduce_with_trace};
pub use tokenize::name_letters;
