//! Analysis profiles for medicine names.
//!
//! Each vocabulary side is split with its own delimiter rules, and queries
//! use a third rule set:
//!
//! | profile        | delimiters                               | notes                       |
//! |----------------|------------------------------------------|-----------------------------|
//! | `Record(Left)` | whitespace `,` `/` `'` `` ` `` `-`       | keeps every token           |
//! | `Record(Right)`| `-` `_`                                  | drops the trailing segment  |
//! | `Query`        | whitespace `,` `/` `-`                   | lowercased                  |
//!
//! All profiles transliterate to ASCII first. Record profiles keep the case of
//! the source text, because their tokens are also used to display matches.

use std::sync::Arc;

use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::ascii_fold::AsciiFoldingCharFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::unit::UnitFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::analysis::tokenizer::slug::SlugTokenizer;
use crate::error::Result;
use crate::side::Side;

/// Delimiters of language-1 canonical names.
pub const LEFT_RECORD_DELIMITERS: &str = r"[\s,/'`-]+";

/// Delimiters of language-2 slugs.
pub const RIGHT_RECORD_DELIMITERS: &str = r"[-_]+";

/// Delimiters of user queries.
pub const QUERY_DELIMITERS: &str = r"[\s,/-]+";

/// Selects one of the medicine analysis pipelines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisProfile {
    /// Vocabulary records loaded for a side.
    Record(Side),
    /// Text typed by a user, searched on either side.
    Query,
}

/// Options shared by all profiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Drop numbers and unit words from record tokens.
    pub strip_units: bool,
}

impl AnalysisProfile {
    /// Build the analyzer for this profile.
    pub fn analyzer(self, options: AnalysisOptions) -> Result<PipelineAnalyzer> {
        let tokenizer: Arc<dyn Tokenizer> = match self {
            AnalysisProfile::Record(Side::Left) => {
                Arc::new(RegexTokenizer::new(LEFT_RECORD_DELIMITERS)?)
            }
            AnalysisProfile::Record(Side::Right) => {
                Arc::new(SlugTokenizer::with_delimiters(RIGHT_RECORD_DELIMITERS)?)
            }
            AnalysisProfile::Query => Arc::new(RegexTokenizer::new(QUERY_DELIMITERS)?),
        };

        let mut analyzer = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(AsciiFoldingCharFilter::new()))
            .with_name(self.name());

        match self {
            AnalysisProfile::Record(_) if options.strip_units => {
                analyzer = analyzer.add_filter(Arc::new(UnitFilter::new()));
            }
            AnalysisProfile::Record(_) => {}
            AnalysisProfile::Query => {
                analyzer = analyzer.add_filter(Arc::new(LowercaseFilter::new()));
            }
        }

        Ok(analyzer)
    }

    pub fn name(self) -> &'static str {
        match self {
            AnalysisProfile::Record(Side::Left) => "record_left",
            AnalysisProfile::Record(Side::Right) => "record_right",
            AnalysisProfile::Query => "query",
        }
    }
}
