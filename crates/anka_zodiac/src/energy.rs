//! Energy signature: Chinese element + life-path archetype label.

use crate::chinese::ChineseElement;

/// Archetype label for a life path number (12-entry table: 1-9 plus the
/// three masters). Values outside the table (notably the 0 "undefined"
/// marker) fall back to the first entry, Initiator, matching the degraded
/// default profile.
pub const fn archetype(life_path: u32) -> &'static str {
    match life_path {
        2 => "Harmonizer",
        3 => "Communicator",
        4 => "Builder",
        5 => "Adventurer",
        6 => "Nurturer",
        7 => "Seeker",
        8 => "Achiever",
        9 => "Humanitarian",
        11 => "Visionary",
        22 => "Master Builder",
        33 => "Love Teacher",
        _ => "Initiator", // 1, and any out-of-domain value
    }
}

/// Compose the energy signature, e.g. `"Fire Initiator"`.
pub fn energy_signature(element: ChineseElement, life_path: u32) -> String {
    format!("{} {}", element.name(), archetype(life_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_element_and_archetype() {
        assert_eq!(energy_signature(ChineseElement::Fire, 1), "Fire Initiator");
        assert_eq!(energy_signature(ChineseElement::Water, 7), "Water Seeker");
        assert_eq!(
            energy_signature(ChineseElement::Metal, 22),
            "Metal Master Builder"
        );
    }

    #[test]
    fn all_twelve_labels_distinct() {
        let labels: Vec<&str> = [1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33]
            .iter()
            .map(|&n| archetype(n))
            .collect();
        let mut unique = labels.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), labels.len());
    }

    #[test]
    fn out_of_domain_falls_back_to_initiator() {
        assert_eq!(archetype(0), "Initiator");
        assert_eq!(archetype(10), "Initiator");
    }
}
