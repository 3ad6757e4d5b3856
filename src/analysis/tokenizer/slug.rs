//! Slug tokenizer.
//!
//! Product slugs such as `aspirin-500-mg-tabletten-1234` end in a segment
//! that identifies the product rather than naming it. The tokenizer splits
//! on the delimiter pattern and always discards the final segment, even when
//! that segment is empty.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use super::regex::compile;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer for slugs carrying a trailing identifier segment.
#[derive(Clone, Debug)]
pub struct SlugTokenizer {
    delimiters: Arc<Regex>,
}

impl SlugTokenizer {
    /// Create a slug tokenizer splitting on matches of `pattern`.
    pub fn with_delimiters(pattern: &str) -> Result<Self> {
        Ok(SlugTokenizer {
            delimiters: Arc::new(compile(pattern)?),
        })
    }
}

impl Tokenizer for SlugTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        // Segment spans, empty ones included, so the suffix is always the last.
        let mut segments = Vec::new();
        let mut last_end = 0;
        for mat in self.delimiters.find_iter(text) {
            segments.push((last_end, mat.start()));
            last_end = mat.end();
        }
        segments.push((last_end, text.len()));
        segments.pop();

        let tokens: Vec<Token> = segments
            .into_iter()
            .filter(|(start, end)| end > start)
            .enumerate()
            .map(|(position, (start, end))| {
                Token::with_offsets(&text[start..end], position, start, end)
            })
            .collect();

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "slug"
    }
}
