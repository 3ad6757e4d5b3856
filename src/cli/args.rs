//! Command line argument parsing for the LangMed CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// LangMed - Interlingual medicine translator
#[derive(Parser, Debug, Clone)]
#[command(name = "langmed")]
#[command(about = "Translate medicine names between two vocabularies")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LangmedArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON); defaults apply when omitted
    #[arg(short, long, env = "LANGMED_CONFIG", value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LangmedArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Translate a medicine name
    Translate(TranslateArgs),

    /// Show how a translation was decided
    Explain(TranslateArgs),

    /// Translate one medicine name per input line
    Batch(BatchArgs),

    /// Show vocabulary and alignment statistics
    Stats,

    /// Load all data files and report problems
    Validate,

    /// Print the effective configuration
    Config,
}

/// Arguments for translating a single name
#[derive(Parser, Debug, Clone)]
pub struct TranslateArgs {
    /// Target language (a configured language tag, or left/right)
    #[arg(short = 't', long = "to", value_name = "LANGUAGE")]
    pub target: String,

    /// Medicine name; several words are joined with spaces
    #[arg(value_name = "NAME", required = true, num_args = 1..)]
    pub text: Vec<String>,
}

impl TranslateArgs {
    /// The query text.
    pub fn query(&self) -> String {
        self.text.join(" ")
    }
}

/// Arguments for batch translation
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// Target language (a configured language tag, or left/right)
    #[arg(short = 't', long = "to", value_name = "LANGUAGE")]
    pub target: String,

    /// Input file with one name per line (default: stdin)
    #[arg(short, long, value_name = "INPUT_FILE")]
    pub input: Option<PathBuf>,

    /// Number of worker threads (default: all cores)
    #[arg(long)]
    pub threads: Option<usize>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
