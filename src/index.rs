//! Inverted token index.
//!
//! Maps the lowercased form of every record token to the indices of the
//! records containing it. Postings are appended while records are visited in
//! index order, so every posting list is ascending. A record naming the same
//! token twice is listed twice.

use ahash::AHashMap;
use log::info;

use crate::vocabulary::VocabularyStore;

/// Token to record-indices map for one side.
#[derive(Clone, Debug, Default)]
pub struct InvertedIndex {
    postings: AHashMap<String, Vec<usize>>,
    total_postings: usize,
}

impl InvertedIndex {
    /// Build the index of a vocabulary store.
    pub fn build(store: &VocabularyStore) -> Self {
        let mut postings: AHashMap<String, Vec<usize>> = AHashMap::new();
        let mut total_postings = 0;

        for record in store {
            for token in &record.display_tokens {
                postings
                    .entry(token.to_lowercase())
                    .or_default()
                    .push(record.index);
                total_postings += 1;
            }
        }

        info!(
            "indexed {} distinct {} tokens ({} postings)",
            postings.len(),
            store.side(),
            total_postings
        );
        InvertedIndex {
            postings,
            total_postings,
        }
    }

    /// Records containing the token, in ascending order; empty if unknown.
    ///
    /// The token is expected in lowercase.
    pub fn lookup(&self, token: &str) -> &[usize] {
        self.postings.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, token: &str) -> bool {
        self.postings.contains_key(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Total number of postings across all tokens.
    pub fn total_postings(&self) -> usize {
        self.total_postings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::medicine::{AnalysisOptions, AnalysisProfile};
    use crate::side::Side;
    use crate::vocabulary::SourceEntry;

    fn index(names: &[&str]) -> InvertedIndex {
        let analyzer = AnalysisProfile::Record(Side::Left)
            .analyzer(AnalysisOptions::default())
            .unwrap();
        let entries = names
            .iter()
            .enumerate()
            .map(|(i, name)| SourceEntry::new(*name, format!("DB{i:05}")));
        InvertedIndex::build(&VocabularyStore::from_entries(Side::Left, entries, &analyzer))
    }

    #[test]
    fn test_postings_are_ascending_and_lowercased() {
        let index = index(&["Insulin Glargine", "Aspirin", "insulin lispro", "INSULIN"]);

        assert_eq!(index.lookup("insulin"), &[0, 2, 3]);
        assert_eq!(index.lookup("glargine"), &[0]);
        assert!(index.lookup("Insulin").is_empty());
        assert!(index.contains("aspirin"));
    }

    #[test]
    fn test_unknown_token_is_empty() {
        let index = index(&["Aspirin"]);
        assert!(index.lookup("ibuprofen").is_empty());
        assert!(!index.contains(""));
    }

    #[test]
    fn test_repeated_token_is_listed_per_occurrence() {
        let index = index(&["Vitamin A, Vitamin D"]);
        assert_eq!(index.lookup("vitamin"), &[0, 0]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.total_postings(), 4);
    }
}
