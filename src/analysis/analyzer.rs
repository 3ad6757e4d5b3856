//! Analyzers combine char filters, a tokenizer and token filters.
//!
//! - [`pipeline::PipelineAnalyzer`] - Configurable analysis pipeline
//! - [`medicine::AnalysisProfile`] - The pipelines used for vocabulary records and queries

use crate::analysis::token::TokenStream;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> TokenStream;

    /// Get the name of this analyzer.
    fn name(&self) -> &str;

    /// Analyze the text and keep only the token texts.
    fn terms(&self, text: &str) -> Vec<String> {
        self.analyze(text).map(|token| token.text).collect()
    }
}

pub mod medicine;
pub mod pipeline;
