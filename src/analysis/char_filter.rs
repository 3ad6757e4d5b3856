//! Char filters that normalize text before tokenization.
//!
//! - [`ascii_fold::AsciiFoldingCharFilter`] - Transliterates text to plain ASCII

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod ascii_fold;
