//! Vocabulary stores.
//!
//! A [`VocabularyStore`] holds the records of one side in file order. The
//! position of a record in its source file is its index, which is how the
//! alignment file refers to it, so every source row becomes a record even
//! when its name yields no tokens.

use std::slice;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::medicine::{AnalysisOptions, AnalysisProfile};
use crate::error::Result;
use crate::side::Side;

pub mod csv;
pub mod lines;
pub mod source;

pub use source::{SourceEntry, VocabularySource};

/// One vocabulary entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Position in the source file, starting at 0.
    pub index: usize,
    /// Name tokens in original case.
    pub display_tokens: Vec<String>,
    /// Opaque string used by callers to build an external link.
    pub raw_reference: String,
}

impl Record {
    /// The name shown for this record: its tokens joined by single spaces.
    pub fn display_name(&self) -> String {
        self.display_tokens.join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.display_tokens.is_empty()
    }
}

/// The immutable, ordered records of one side.
#[derive(Clone, Debug)]
pub struct VocabularyStore {
    side: Side,
    records: Vec<Record>,
}

impl VocabularyStore {
    /// Load a side from its source, tokenizing with the side's record profile.
    pub fn load(
        side: Side,
        source: &dyn VocabularySource,
        options: AnalysisOptions,
    ) -> Result<Self> {
        let analyzer = AnalysisProfile::Record(side).analyzer(options)?;
        let entries = source.read_entries()?;
        let store = Self::from_entries(side, entries, &analyzer);

        info!(
            "loaded {} {} records from {}",
            store.len(),
            side,
            source.describe()
        );
        Ok(store)
    }

    /// Build a store from already extracted entries.
    pub fn from_entries<I>(side: Side, entries: I, analyzer: &dyn Analyzer) -> Self
    where
        I: IntoIterator<Item = SourceEntry>,
    {
        let records: Vec<Record> = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let display_tokens = analyzer.terms(&entry.name);
                if display_tokens.is_empty() {
                    warn!("{side} record {index} has no tokens: {:?}", entry.name);
                }
                Record {
                    index,
                    display_tokens,
                    raw_reference: entry.reference,
                }
            })
            .collect();

        VocabularyStore { side, records }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get a record by index.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// All records in index order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a VocabularyStore {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
