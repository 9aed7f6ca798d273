//! Western and Chinese zodiac resolution plus the energy-signature label.
//!
//! This crate provides:
//! - Western sign lookup from (month, day) via an ordered boundary table
//! - Chinese animal/element/yin-yang from the signed year, BC-safe
//! - The life-path archetype table and energy-signature composition
//!
//! All tables are immutable constants; every function is total. Catalog
//! ingestion feeds this crate arbitrary (possibly degraded) dates, so the
//! resolvers fall back to their first table entry rather than panicking.

pub mod chinese;
pub mod energy;
pub mod western;

pub use chinese::{
    ChineseAnimal, ChineseElement, ChineseZodiac, YinYang, chinese_zodiac,
};
pub use energy::{archetype, energy_signature};
pub use western::{Modality, WesternElement, WesternSign, western_sign};
