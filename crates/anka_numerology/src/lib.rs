//! Core numerology computations over dates and names.
//!
//! This crate provides:
//! - Date numbers: life path, generation
//! - Name numbers: expression, soul urge, personality
//! - Derived numbers: attitude, maturity, day-of-birth
//! - Karmic debt (13/14/16/19 intermediates) and karmic lesson detection
//! - Rolling personal/universal cycle numbers with a master-number policy
//!
//! All functions are pure; every computation that feeds karmic-debt
//! detection returns a [`NumberTrace`] carrying the intermediate sums it
//! passed through, since debts are flagged from pre-reduction values that
//! the final numbers no longer show.

pub mod cycles;
pub mod date_numbers;
pub mod derived;
pub mod name_numbers;

pub use cycles::{MasterPolicy, PersonalCycles, personal_cycles, universal_day};
pub use date_numbers::{NumberTrace, generation, life_path, life_path_traced};
pub use derived::{attitude, day_of_birth, karmic_debts, karmic_lessons, maturity};
pub use name_numbers::{
    expression_traced, letter_values, personality_traced, soul_urge_traced,
};
