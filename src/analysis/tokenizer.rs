//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step after char filtering, responsible for
//! splitting a medicine name into tokens.
//!
//! # Available Tokenizers
//!
//! - [`regex::RegexTokenizer`] - Splits on runs of a delimiter pattern
//! - [`slug::SlugTokenizer`] - Splits a slug and drops its trailing id segment
//!
//! # Examples
//!
//! ```
//! use langmed::analysis::tokenizer::Tokenizer;
//! use langmed::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::new(r"[\s,/]+").unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Codeine, Paracetamol").collect();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[1].text, "Paracetamol");
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// Tokenizers are built once and shared by concurrent queries, hence the
/// `Send + Sync` bound. Tokenizing never fails; empty input yields an empty
/// stream.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;
pub mod slug;
