//! Token filter implementations for token transformation.
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`unit::UnitFilter`] - Removes numeric and dosage-unit tokens
//!
//! # Examples
//!
//! ```
//! use langmed::analysis::token_filter::Filter;
//! use langmed::analysis::token_filter::lowercase::LowercaseFilter;
//! use langmed::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod unit;
