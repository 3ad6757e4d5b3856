//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{LangmedError, Result};

/// A regex-based tokenizer.
///
/// The pattern describes delimiters; the non-empty text between them becomes
/// the tokens.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// Delimiter pattern
    delimiters: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a tokenizer splitting on matches of `delimiters`.
    pub fn new(delimiters: &str) -> Result<Self> {
        Ok(RegexTokenizer {
            delimiters: Arc::new(compile(delimiters)?),
        })
    }
}

pub(crate) fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| LangmedError::analysis(format!("Invalid regex pattern: {e}")))
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let mut tokens = Vec::new();
        let mut last_end = 0;

        for mat in self.delimiters.find_iter(text) {
            if mat.start() > last_end {
                tokens.push(Token::with_offsets(
                    &text[last_end..mat.start()],
                    tokens.len(),
                    last_end,
                    mat.start(),
                ));
            }
            last_end = mat.end();
        }

        // Add final gap if any
        if last_end < text.len() {
            tokens.push(Token::with_offsets(
                &text[last_end..],
                tokens.len(),
                last_end,
                text.len(),
            ));
        }

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
