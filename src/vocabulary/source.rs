//! Sources of raw vocabulary entries.

use std::path::Path;

use crate::error::Result;

/// A name and its raw reference, as extracted from a source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceEntry {
    pub name: String,
    pub reference: String,
}

impl SourceEntry {
    pub fn new<N: Into<String>, R: Into<String>>(name: N, reference: R) -> Self {
        SourceEntry {
            name: name.into(),
            reference: reference.into(),
        }
    }
}

/// A trait for reading vocabulary entries in file order.
///
/// Implementations fail on unreadable files and malformed rows, naming the
/// file and line.
pub trait VocabularySource {
    /// Read every entry of the source, in order.
    fn read_entries(&self) -> Result<Vec<SourceEntry>>;

    /// The path this source reads from.
    fn path(&self) -> &Path;

    /// Human-readable description for logs and diagnostics.
    fn describe(&self) -> String {
        self.path().display().to_string()
    }
}
