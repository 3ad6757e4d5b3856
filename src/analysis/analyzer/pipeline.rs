//! Pipeline analyzer that combines tokenizers and filters.
//!
//! The PipelineAnalyzer applies processing in this order:
//! 1. Char Filters: Normalizes raw text
//! 2. Tokenizer: Splits text into tokens
//! 3. Token Filters: Applied sequentially in the order they were added
//!
//! # Examples
//!
//! ```
//! use langmed::analysis::analyzer::Analyzer;
//! use langmed::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use langmed::analysis::tokenizer::regex::RegexTokenizer;
//! use langmed::analysis::token_filter::lowercase::LowercaseFilter;
//! use std::sync::Arc;
//!
//! let tokenizer = Arc::new(RegexTokenizer::new(r"[\s,]+").unwrap());
//! let analyzer = PipelineAnalyzer::new(tokenizer)
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .with_name("names");
//!
//! assert_eq!(analyzer.terms("Codeine, Paracetamol"), vec!["codeine", "paracetamol"]);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::char_filter::CharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            char_filters: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        let mut tokens = if self.char_filters.is_empty() {
            self.tokenizer.tokenize(text)
        } else {
            let mut filtered_text = text.to_string();
            for char_filter in &self.char_filters {
                filtered_text = char_filter.filter(&filtered_text);
            }
            self.tokenizer.tokenize(&filtered_text)
        };

        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }

        tokens
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "char_filters",
                &self.char_filters.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::char_filter::ascii_fold::AsciiFoldingCharFilter;
    use crate::analysis::token_filter::lowercase::LowercaseFilter;
    use crate::analysis::token_filter::unit::UnitFilter;
    use crate::analysis::tokenizer::regex::RegexTokenizer;

    #[test]
    fn test_pipeline_applies_stages_in_order() {
        let tokenizer = Arc::new(RegexTokenizer::new(r"[\s-]+").unwrap());
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(AsciiFoldingCharFilter::new()))
            .add_filter(Arc::new(UnitFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()));

        assert_eq!(
            analyzer.terms("Ibuprofen-Saft 200 mg Kinder Ämter"),
            vec!["ibuprofen", "saft", "kinder", "amter"]
        );
    }

    #[test]
    fn test_default_name_and_debug() {
        let tokenizer = Arc::new(RegexTokenizer::new(r"\s+").unwrap());
        let analyzer = PipelineAnalyzer::new(tokenizer);
        assert_eq!(analyzer.name(), "pipeline_regex");

        let analyzer = analyzer
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("custom");
        assert_eq!(analyzer.name(), "custom");
        let debug = format!("{analyzer:?}");
        assert!(debug.contains("lowercase"));
    }
}
