//! Error types for the LangMed library.
//!
//! All fallible operations return [`Result`], whose error type is
//! [`LangmedError`]. Failures only happen while loading vocabularies and the
//! alignment, or when a caller names an unknown language. A query that finds
//! nothing is not an error; see [`crate::engine::QueryResult::NoMatch`].
//!
//! # Examples
//!
//! ```
//! use langmed::error::{LangmedError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LangmedError::config("missing alignment path"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::fmt::Display;
use std::io;
use std::path::Path;

use thiserror::Error;

/// The main error type for LangMed operations.
#[derive(Error, Debug)]
pub enum LangmedError {
    /// I/O errors (missing or unreadable files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A vocabulary or alignment file could not be loaded
    #[error("Load error: {0}")]
    Load(String),

    /// An alignment edge points outside a vocabulary
    #[error("Dangling reference: {0}")]
    DanglingReference(String),

    /// Analysis errors (invalid tokenizer patterns)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Query errors (unknown language tag)
    #[error("Query error: {0}")]
    Query(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with LangmedError.
pub type Result<T> = std::result::Result<T, LangmedError>;

impl LangmedError {
    /// Create a new load error.
    pub fn load<S: Into<String>>(msg: S) -> Self {
        LangmedError::Load(msg.into())
    }

    /// Create a load error pointing at a line of a file.
    pub fn load_at<P: AsRef<Path>, M: Display>(path: P, line: usize, msg: M) -> Self {
        LangmedError::Load(format!("{}:{}: {}", path.as_ref().display(), line, msg))
    }

    /// Create a dangling reference error pointing at a line of a file.
    pub fn dangling_at<P: AsRef<Path>, M: Display>(path: P, line: usize, msg: M) -> Self {
        LangmedError::DanglingReference(format!("{}:{}: {}", path.as_ref().display(), line, msg))
    }

    /// Create a new dangling reference error.
    pub fn dangling<S: Into<String>>(msg: S) -> Self {
        LangmedError::DanglingReference(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LangmedError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LangmedError::Config(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        LangmedError::Query(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LangmedError::Other(msg.into())
    }

    /// The message of a string-carrying error without its category prefix.
    pub(crate) fn detail(&self) -> String {
        match self {
            LangmedError::Load(msg)
            | LangmedError::DanglingReference(msg)
            | LangmedError::Analysis(msg)
            | LangmedError::Config(msg)
            | LangmedError::Query(msg)
            | LangmedError::Other(msg) => msg.clone(),
            other => other.to_string(),
        }
    }

    /// Whether this error happened while loading data files.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            LangmedError::Io(_)
                | LangmedError::Load(_)
                | LangmedError::DanglingReference(_)
        )
    }
}
