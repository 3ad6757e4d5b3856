//! # LangMed
//!
//! An interlingual medicine translator: resolve a medicine name typed in one
//! language to the best-matching names in another, using two independently
//! sourced vocabularies and a precomputed, imperfect alignment between them.
//!
//! ## Features
//!
//! - Per-language tokenization with ASCII transliteration
//! - Inverted token index per vocabulary
//! - Bipartite correspondence graph loaded from an alignment file
//! - Vote-based disambiguation with deterministic tie order
//! - Immutable engine, safe to query from many threads

pub mod analysis;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod index;
pub mod link;
pub mod side;
pub mod vocabulary;

pub mod prelude {
    pub use crate::config::LangmedConfig;
    pub use crate::engine::{QueryEngine, QueryResult};
    pub use crate::error::{LangmedError, Result};
    pub use crate::side::Side;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
