//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::Serialize;

use crate::cli::args::{LangmedArgs, OutputFormat};
use crate::engine::{EngineStats, QueryResult};
use crate::error::Result;
use crate::link::LinkTemplates;
use crate::side::Side;

const NO_MATCH_MESSAGE: &str =
    "No matching medicine in our database.\nPlease check the target language or the spelling.\n";

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn render_human(&self) -> String;
}

/// One translated name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationMatch {
    pub name: String,
    pub reference: String,
    pub url: String,
}

/// Result of translating one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub query: String,
    pub target: String,
    pub matches: Vec<TranslationMatch>,
}

impl Translation {
    /// Attach links to a query result; `source` is the side that was searched.
    pub fn new(
        query: &str,
        target_language: &str,
        source: Side,
        result: &QueryResult,
        links: &LinkTemplates,
    ) -> Self {
        Translation {
            query: query.to_string(),
            target: target_language.to_string(),
            matches: result
                .pairs()
                .map(|(name, reference)| TranslationMatch {
                    name: name.to_string(),
                    reference: reference.to_string(),
                    url: links.url_for(source, reference),
                })
                .collect(),
        }
    }
}

impl HumanOutput for Translation {
    fn render_human(&self) -> String {
        if self.matches.is_empty() {
            return NO_MATCH_MESSAGE.to_string();
        }

        let count = self.matches.len();
        let header = format!("{count} {}", if count == 1 { "Result" } else { "Results" });
        let mut out = format!("{header}\n{}\n", "-".repeat(header.len()));
        for (i, m) in self.matches.iter().enumerate() {
            let _ = writeln!(out, "{}. {} <{}>", i + 1, m.name, m.url);
        }
        out
    }
}

/// Results of a batch run, in input order.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub translations: Vec<Translation>,
}

impl HumanOutput for BatchReport {
    fn render_human(&self) -> String {
        let mut out = String::new();
        for translation in &self.translations {
            let _ = writeln!(out, "> {}", translation.query);
            out.push_str(&translation.render_human());
            out.push('\n');
        }
        out
    }
}

/// A candidate's vote count, with its name.
#[derive(Debug, Serialize)]
pub struct VoteLine {
    pub candidate: usize,
    pub name: String,
    pub votes: usize,
}

/// A query token and the source records it matched.
#[derive(Debug, Serialize)]
pub struct TokenLine {
    pub token: String,
    pub records: Vec<usize>,
}

/// Step-by-step account of a translation.
#[derive(Debug, Serialize)]
pub struct ExplanationReport {
    pub source_language: String,
    pub target_language: String,
    pub tokens: Vec<TokenLine>,
    pub found: usize,
    pub lower_bound: Option<usize>,
    pub votes: Vec<VoteLine>,
    pub translation: Translation,
}

impl HumanOutput for ExplanationReport {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Searching {} vocabulary, answering in {}",
            self.source_language, self.target_language
        );
        let _ = writeln!(out, "Tokens:");
        for token in &self.tokens {
            let _ = writeln!(out, "  {:<20} records {:?}", token.token, token.records);
        }
        match self.lower_bound {
            Some(bound) => {
                let _ = writeln!(
                    out,
                    "Known tokens: {} of {} (lower bound {bound})",
                    self.found,
                    self.tokens.len()
                );
            }
            None => {
                let _ = writeln!(out, "Known tokens: {} of {}", self.found, self.tokens.len());
            }
        }
        let _ = writeln!(out, "Votes:");
        for vote in &self.votes {
            let _ = writeln!(out, "  {:>3}  #{} {}", vote.votes, vote.candidate, vote.name);
        }
        out.push('\n');
        out.push_str(&self.translation.render_human());
        out
    }
}

/// Statistics of one side.
#[derive(Debug, Serialize)]
pub struct SideReport {
    pub language: String,
    pub side: Side,
    pub records: usize,
    pub distinct_tokens: usize,
    pub postings: usize,
    pub isolated_records: usize,
}

/// Statistics of a loaded engine.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub sides: Vec<SideReport>,
    pub edges: usize,
}

impl StatsReport {
    pub fn new(stats: &EngineStats, languages: [&str; 2]) -> Self {
        StatsReport {
            sides: stats
                .sides
                .iter()
                .map(|s| SideReport {
                    language: languages[s.side.index()].to_string(),
                    side: s.side,
                    records: s.records,
                    distinct_tokens: s.distinct_tokens,
                    postings: s.postings,
                    isolated_records: s.isolated_records,
                })
                .collect(),
            edges: stats.edges,
        }
    }
}

impl HumanOutput for StatsReport {
    fn render_human(&self) -> String {
        let mut out = String::new();
        for side in &self.sides {
            let _ = writeln!(out, "{} ({}):", side.language, side.side);
            let _ = writeln!(out, "  records:          {}", side.records);
            let _ = writeln!(out, "  distinct tokens:  {}", side.distinct_tokens);
            let _ = writeln!(out, "  postings:         {}", side.postings);
            let _ = writeln!(out, "  without edges:    {}", side.isolated_records);
        }
        let _ = writeln!(out, "alignment edges:    {}", self.edges);
        out
    }
}

/// Outcome of a successful validation.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub records: [usize; 2],
    pub edges: usize,
}

impl HumanOutput for ValidationReport {
    fn render_human(&self) -> String {
        format!(
            "OK: {} left records, {} right records, {} alignment edges\n",
            self.records[0], self.records[1], self.edges
        )
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &LangmedArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", result.render_human());
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
pub fn output_json<T: Serialize>(result: &T, args: &LangmedArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
