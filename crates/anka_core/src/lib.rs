//! Identity-profile construction: the engine's public surface.
//!
//! This crate provides:
//! - [`BirthFact`] — the immutable biographical input
//! - [`NumerologyProfile`] / [`ZodiacProfile`] / [`IdentityProfile`]
//! - The interactive entry point, which propagates date errors
//! - The batch (catalog "cue") entry point, which never fails and degrades
//!   to a documented default profile instead
//!
//! Both entry points run the same computation path; the only difference is
//! what happens when the date cannot be parsed. Keeping a single path is
//! what prevents user-facing and catalog-facing numbers from drifting.

pub mod error;
pub mod profile;

pub use anka_numerology::{MasterPolicy, PersonalCycles, personal_cycles, universal_day};
pub use error::ProfileError;
pub use profile::{
    BirthFact, IdentityProfile, NumerologyProfile, ZodiacProfile, cue_profile,
    profile_from_fact, profile_from_parts,
};
