//! Unit filter implementation.
//!
//! Vocabulary names often carry strengths and dosage units
//! (`ibuprofen-400-mg`) that say nothing about which medicine is meant. This
//! filter drops digit-only tokens, deletes digits from the remaining tokens,
//! and drops tokens that end up empty or are a known unit word.
//!
//! # Examples
//!
//! ```
//! use langmed::analysis::token_filter::Filter;
//! use langmed::analysis::token_filter::unit::UnitFilter;
//! use langmed::analysis::token::Token;
//!
//! let filter = UnitFilter::new();
//! let tokens = vec![
//!     Token::new("ibuprofen", 0),
//!     Token::new("400", 1),
//!     Token::new("mg", 2),
//! ];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "ibuprofen");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;

/// Default unit words, compared case-insensitively.
const DEFAULT_UNIT_WORDS: &[&str] = &["g", "mg", "mcg", "ml", "mikrogramm", "unit"];

static DEFAULT_UNITS: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| {
    Arc::new(
        DEFAULT_UNIT_WORDS
            .iter()
            .map(|word| word.to_string())
            .collect(),
    )
});

/// A filter that removes numbers and unit words from a token stream.
#[derive(Clone, Debug)]
pub struct UnitFilter {
    units: Arc<HashSet<String>>,
}

impl UnitFilter {
    /// Create a unit filter with the default unit words.
    pub fn new() -> Self {
        UnitFilter {
            units: Arc::clone(&DEFAULT_UNITS),
        }
    }

    /// Check whether a word is a unit word.
    pub fn is_unit(&self, word: &str) -> bool {
        self.units.contains(&word.to_lowercase())
    }

    fn clean(&self, token: Token) -> Option<Token> {
        if token.text.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let stripped: String = token.text.chars().filter(|c| !c.is_ascii_digit()).collect();
        if stripped.is_empty() || self.is_unit(&stripped) {
            return None;
        }
        Some(token.with_text(stripped))
    }
}

impl Default for UnitFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for UnitFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let kept: Vec<Token> = tokens
            .filter_map(|token| self.clean(token))
            .enumerate()
            .map(|(position, mut token)| {
                token.position = position;
                token
            })
            .collect();

        Box::new(kept.into_iter())
    }

    fn name(&self) -> &'static str {
        "unit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(filter: &UnitFilter, words: &[&str]) -> Vec<String> {
        let tokens: Vec<Token> = words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, i))
            .collect();
        filter
            .filter(Box::new(tokens.into_iter()))
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_drops_numbers_and_units() {
        let filter = UnitFilter::new();
        assert_eq!(
            run(&filter, &["Aspirin", "500", "mg", "Tabletten"]),
            vec!["Aspirin", "Tabletten"]
        );
        assert_eq!(run(&filter, &["Heparin", "25000", "Unit", "ML"]), vec!["Heparin"]);
    }

    #[test]
    fn test_strips_digits_inside_tokens() {
        let filter = UnitFilter::new();
        // "400mg" loses its digits and is then a unit word.
        assert_eq!(run(&filter, &["Ibuprofen", "400mg"]), vec!["Ibuprofen"]);
        assert_eq!(run(&filter, &["Vitamin", "B12"]), vec!["Vitamin", "B"]);
    }

    #[test]
    fn test_positions_are_renumbered() {
        let filter = UnitFilter::new();
        let tokens = vec![Token::new("10", 0), Token::new("mg", 1), Token::new("Zink", 2)];
        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).collect();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].position, 0);
    }

    #[test]
    fn test_unit_words_ignore_case() {
        let filter = UnitFilter::new();
        assert!(filter.is_unit("MG"));
        assert!(filter.is_unit("Mikrogramm"));
        assert!(!filter.is_unit("IE"));
    }
}
