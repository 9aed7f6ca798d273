//! Name normalization for the letter cipher.

/// Extract the cipher-ready letters of a name: ordered, lowercased,
/// ASCII-alphabetic only. Whitespace, punctuation, digits, and non-ASCII
/// characters are dropped (the cipher is defined over A-Z).
pub fn name_letters(name: &str) -> Vec<char> {
    name.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_whitespace_and_punctuation() {
        assert_eq!(
            name_letters("John Smith"),
            vec!['j', 'o', 'h', 'n', 's', 'm', 'i', 't', 'h']
        );
        assert_eq!(name_letters("O'Brien-Lee Jr."), name_letters("obrienleejr"));
    }

    #[test]
    fn empty_and_symbol_only_names_yield_nothing() {
        assert!(name_letters("").is_empty());
        assert!(name_letters("  --- 123 ").is_empty());
    }

    #[test]
    fn order_is_preserved() {
        assert_eq!(name_letters("Ba"), vec!['b', 'a']);
    }
}
