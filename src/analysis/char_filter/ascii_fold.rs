//! ASCII transliteration char filter.
//!
//! Text is first composed with Unicode NFC so decomposed accents attach to
//! their base letter. Letters and digits outside ASCII are transliterated
//! with `deunicode` (`é` to `e`, `Аспирин` to `Aspirin`, `½` to `1/2`).
//! Other non-ASCII characters (punctuation, symbols, exotic spaces) become a
//! space, so they separate tokens instead of gluing neighbours together.
//! Combining marks left over after composition are dropped.

use deunicode::deunicode_char;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::CharFilter;

/// A char filter that reduces text to plain ASCII.
#[derive(Clone, Debug, Default)]
pub struct AsciiFoldingCharFilter;

impl AsciiFoldingCharFilter {
    pub fn new() -> Self {
        AsciiFoldingCharFilter
    }
}

impl CharFilter for AsciiFoldingCharFilter {
    fn filter(&self, input: &str) -> String {
        if input.is_ascii() {
            return input.to_string();
        }

        let mut folded = String::with_capacity(input.len());
        for c in input.nfc() {
            if c.is_ascii() {
                folded.push(c);
            } else if is_combining_mark(c) {
                continue;
            } else if c.is_alphanumeric() {
                if let Some(ascii) = deunicode_char(c) {
                    folded.push_str(ascii);
                }
            } else {
                folded.push(' ');
            }
        }
        folded
    }

    fn name(&self) -> &'static str {
        "ascii_fold"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_diacritics() {
        let filter = AsciiFoldingCharFilter::new();
        assert_eq!(filter.filter("Paracétamol"), "Paracetamol");
        assert_eq!(filter.filter("Ämilie Öl Übel"), "Amilie Ol Ubel");
        // Decomposed input composes first.
        assert_eq!(filter.filter("Parace\u{301}tamol"), "Paracetamol");
    }

    #[test]
    fn test_transliterates_letters() {
        let filter = AsciiFoldingCharFilter::new();
        assert_eq!(filter.filter("Fußsalbe"), "Fusssalbe");
        assert_eq!(filter.filter("Læge"), "Laege");
        assert_eq!(filter.filter("α-Liponsäure"), "a-Liponsaure");
        assert_eq!(filter.filter("ε-aminocaproic acid"), "e-aminocaproic acid");
        assert_eq!(filter.filter("Аспирин"), "Aspirin");
        assert_eq!(filter.filter("\u{ff21}spirin"), "Aspirin");
    }

    #[test]
    fn test_punctuation_becomes_a_separator() {
        let filter = AsciiFoldingCharFilter::new();
        assert_eq!(filter.filter("Vitamin·D"), "Vitamin D");
        assert_eq!(filter.filter("St. John’s Wort"), "St. John s Wort");
        assert_eq!(filter.filter("Aspirin®\u{a0}Plus"), "Aspirin  Plus");
    }

    #[test]
    fn test_vulgar_fractions_keep_their_digits() {
        let folded = AsciiFoldingCharFilter::new().filter("aspirin ½");
        assert!(folded.is_ascii());
        assert!(folded.contains("1/2"), "{folded}");
    }

    #[test]
    fn test_ascii_is_untouched() {
        let filter = AsciiFoldingCharFilter::new();
        assert_eq!(filter.filter("Acetylsalicylic acid"), "Acetylsalicylic acid");
        assert_eq!(filter.filter(""), "");
    }
}
