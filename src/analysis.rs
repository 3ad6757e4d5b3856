//! Text analysis for medicine names.
//!
//! Names flow through a small pipeline: char filters normalize the raw text,
//! a tokenizer splits it, and token filters transform the resulting tokens.
//! Which pipeline applies depends on where the text comes from, see
//! [`analyzer::medicine::AnalysisProfile`].

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
