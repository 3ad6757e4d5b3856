//! The query engine.
//!
//! A query names the language to translate *to*. The engine searches the
//! opposite side's index with the query tokens, follows the correspondence
//! graph from every matching record, and lets the reached target-side records
//! vote. The records with the most votes win, ties included.
//!
//! A single-token query counts every edge it traverses. A multi-token query
//! gives each token at most one vote per candidate and must clear a lower
//! bound: a strict majority of the tokens, and both tokens of a two-token
//! query, have to be known and must agree on the winner.
//!
//! # Examples
//!
//! ```
//! use langmed::analysis::analyzer::medicine::{AnalysisOptions, AnalysisProfile};
//! use langmed::engine::{QueryEngine, QueryResult};
//! use langmed::graph::CorrespondenceGraph;
//! use langmed::side::Side;
//! use langmed::vocabulary::{SourceEntry, VocabularyStore};
//!
//! let left = AnalysisProfile::Record(Side::Left).analyzer(AnalysisOptions::default()).unwrap();
//! let right = AnalysisProfile::Record(Side::Right).analyzer(AnalysisOptions::default()).unwrap();
//! let english = VocabularyStore::from_entries(
//!     Side::Left,
//!     vec![SourceEntry::new("Acetylsalicylic acid", "DB00945")],
//!     &left,
//! );
//! let german = VocabularyStore::from_entries(
//!     Side::Right,
//!     vec![SourceEntry::new("aspirin-500-mg-1", "aspirin-500-mg-1")],
//!     &right,
//! );
//! let graph = CorrespondenceGraph::from_edge_list(1, 1, vec![(0, vec![0])]).unwrap();
//! let engine = QueryEngine::new(english, german, graph).unwrap();
//!
//! let result = engine.query(Side::Left, "Aspirin");
//! assert_eq!(
//!     result,
//!     QueryResult::Matches {
//!         display_names: vec!["Acetylsalicylic acid".to_string()],
//!         raw_references: vec!["DB00945".to_string()],
//!     }
//! );
//! assert_eq!(engine.query(Side::Left, "  "), QueryResult::NoMatch);
//! ```

use ahash::AHashSet;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::medicine::{AnalysisOptions, AnalysisProfile};
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::error::{LangmedError, Result};
use crate::graph::CorrespondenceGraph;
use crate::index::InvertedIndex;
use crate::side::Side;
use crate::vocabulary::VocabularyStore;

pub mod loader;
pub mod tally;

pub use tally::VoteTally;

/// Outcome of a query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryResult {
    /// Nothing on the target side is supported well enough.
    NoMatch,
    /// Best target-side records; both lists are index-aligned.
    Matches {
        display_names: Vec<String>,
        raw_references: Vec<String>,
    },
}

impl QueryResult {
    pub fn is_match(&self) -> bool {
        matches!(self, QueryResult::Matches { .. })
    }

    /// Number of matched records.
    pub fn len(&self) -> usize {
        match self {
            QueryResult::NoMatch => 0,
            QueryResult::Matches { display_names, .. } => display_names.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(display_name, raw_reference)` pairs in result order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        let (names, references): (&[String], &[String]) = match self {
            QueryResult::NoMatch => (&[][..], &[][..]),
            QueryResult::Matches {
                display_names,
                raw_references,
            } => (display_names.as_slice(), raw_references.as_slice()),
        };
        names
            .iter()
            .map(String::as_str)
            .zip(references.iter().map(String::as_str))
    }
}

/// Minimum number of known tokens, and of votes for the winner, a
/// multi-token query needs.
///
/// A strict majority of the tokens; two-token queries need both.
pub fn lower_bound(token_count: usize) -> usize {
    token_count / 2 + usize::from(token_count % 2 == 1 || token_count == 2)
}

/// How a query was resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub target: Side,
    pub source: Side,
    /// Query tokens with the source records containing them.
    pub tokens: Vec<TokenMatch>,
    /// Number of query tokens present in the source index.
    pub found: usize,
    /// Threshold applied to multi-token queries.
    pub lower_bound: Option<usize>,
    /// `(candidate, votes)` in first-vote order.
    pub votes: Vec<(usize, usize)>,
    /// Winning candidates in result order.
    pub selected: Vec<usize>,
    pub result: QueryResult,
}

/// A query token and the source records it matched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TokenMatch {
    pub token: String,
    pub records: Vec<usize>,
}

/// Per-side counters reported by [`QueryEngine::stats`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SideStats {
    pub side: Side,
    pub records: usize,
    pub distinct_tokens: usize,
    pub postings: usize,
    /// Records without any alignment edge.
    pub isolated_records: usize,
}

/// Size summary of a loaded engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EngineStats {
    pub sides: Vec<SideStats>,
    pub edges: usize,
}

/// Intermediate state of one query.
struct Evaluation {
    source: Side,
    found: usize,
    lower_bound: Option<usize>,
    tally: VoteTally,
    selected: Vec<usize>,
}

/// Read-only lookup engine over both vocabularies and their alignment.
///
/// Everything is built once; `query` takes `&self` and the engine is
/// `Send + Sync`, so any number of threads may query it at the same time.
#[derive(Debug)]
pub struct QueryEngine {
    vocabularies: [VocabularyStore; 2],
    indexes: [InvertedIndex; 2],
    graph: CorrespondenceGraph,
    query_analyzer: PipelineAnalyzer,
}

impl QueryEngine {
    /// Index both stores and check that the graph was dimensioned from them.
    pub fn new(
        left: VocabularyStore,
        right: VocabularyStore,
        graph: CorrespondenceGraph,
    ) -> Result<Self> {
        if left.side() != Side::Left || right.side() != Side::Right {
            return Err(LangmedError::config(format!(
                "vocabularies passed as ({}, {}), expected (left, right)",
                left.side(),
                right.side()
            )));
        }
        for store in [&left, &right] {
            let side = store.side();
            if graph.size(side) != store.len() {
                return Err(LangmedError::load(format!(
                    "alignment graph has {} {side} vertices but the {side} vocabulary has {} records",
                    graph.size(side),
                    store.len()
                )));
            }
        }

        let indexes = [InvertedIndex::build(&left), InvertedIndex::build(&right)];
        let query_analyzer = AnalysisProfile::Query.analyzer(AnalysisOptions::default())?;

        Ok(QueryEngine {
            vocabularies: [left, right],
            indexes,
            graph,
            query_analyzer,
        })
    }

    pub fn vocabulary(&self, side: Side) -> &VocabularyStore {
        &self.vocabularies[side.index()]
    }

    pub fn index(&self, side: Side) -> &InvertedIndex {
        &self.indexes[side.index()]
    }

    pub fn graph(&self) -> &CorrespondenceGraph {
        &self.graph
    }

    /// Normalize and split query text.
    pub fn query_tokens(&self, text: &str) -> Vec<String> {
        self.query_analyzer.terms(text)
    }

    /// Translate `text` into the `target` side's vocabulary.
    pub fn query(&self, target: Side, text: &str) -> QueryResult {
        let tokens = self.query_tokens(text);
        let evaluation = self.evaluate(target, &tokens);
        self.resolve(target, &evaluation.selected)
    }

    /// Like [`query`](Self::query), reporting every intermediate step.
    pub fn explain(&self, target: Side, text: &str) -> Explanation {
        let tokens = self.query_tokens(text);
        let evaluation = self.evaluate(target, &tokens);
        let index = self.index(evaluation.source);

        Explanation {
            target,
            source: evaluation.source,
            tokens: tokens
                .iter()
                .map(|token| TokenMatch {
                    token: token.clone(),
                    records: index.lookup(token).to_vec(),
                })
                .collect(),
            found: evaluation.found,
            lower_bound: evaluation.lower_bound,
            votes: evaluation.tally.iter().collect(),
            result: self.resolve(target, &evaluation.selected),
            selected: evaluation.selected,
        }
    }

    fn evaluate(&self, target: Side, tokens: &[String]) -> Evaluation {
        let source = target.opposite();
        let index = self.index(source);
        let mut evaluation = Evaluation {
            source,
            found: 0,
            lower_bound: None,
            tally: VoteTally::new(),
            selected: Vec::new(),
        };

        match tokens {
            [] => {}
            [token] => {
                let records = index.lookup(token);
                if !records.is_empty() {
                    evaluation.found = 1;
                }
                for &record in records {
                    for neighbor in self.graph.neighbors(source, record) {
                        evaluation.tally.vote(neighbor);
                    }
                }
                evaluation.selected = evaluation.tally.leaders();
            }
            _ => {
                let bound = lower_bound(tokens.len());
                evaluation.lower_bound = Some(bound);

                let mut seen = AHashSet::new();
                for token in tokens {
                    let records = index.lookup(token);
                    if records.is_empty() {
                        continue;
                    }
                    evaluation.found += 1;

                    seen.clear();
                    for &record in records {
                        for neighbor in self.graph.neighbors(source, record) {
                            if seen.insert(neighbor) {
                                evaluation.tally.vote(neighbor);
                            }
                        }
                    }
                }

                if evaluation.found >= bound && evaluation.tally.max_votes() >= bound {
                    evaluation.selected = evaluation.tally.leaders();
                }
            }
        }

        debug!(
            "query tokens {:?} on {source}: found {}, {} candidates, {} selected",
            tokens,
            evaluation.found,
            evaluation.tally.len(),
            evaluation.selected.len()
        );
        evaluation
    }

    fn resolve(&self, target: Side, selected: &[usize]) -> QueryResult {
        let store = self.vocabulary(target);
        let records: Vec<_> = selected
            .iter()
            .filter_map(|&index| store.get(index))
            .collect();
        if records.is_empty() {
            return QueryResult::NoMatch;
        }

        QueryResult::Matches {
            display_names: records.iter().map(|r| r.display_name()).collect(),
            raw_references: records.iter().map(|r| r.raw_reference.clone()).collect(),
        }
    }

    /// Record, token and edge counts.
    pub fn stats(&self) -> EngineStats {
        EngineStats {
            sides: Side::BOTH
                .iter()
                .map(|&side| SideStats {
                    side,
                    records: self.vocabulary(side).len(),
                    distinct_tokens: self.index(side).len(),
                    postings: self.index(side).total_postings(),
                    isolated_records: self.graph.isolated(side),
                })
                .collect(),
            edges: self.graph.edge_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::vocabulary::SourceEntry;

    fn store(side: Side, names: &[&str]) -> VocabularyStore {
        let analyzer = AnalysisProfile::Record(side)
            .analyzer(AnalysisOptions::default())
            .unwrap();
        let entries = names.iter().enumerate().map(|(i, name)| match side {
            Side::Left => SourceEntry::new(*name, format!("DB{i:05}")),
            Side::Right => SourceEntry::new(*name, *name),
        });
        VocabularyStore::from_entries(side, entries, &analyzer)
    }

    fn engine(left: &[&str], right: &[&str], edges: Vec<(usize, Vec<usize>)>) -> QueryEngine {
        let graph = CorrespondenceGraph::from_edge_list(left.len(), right.len(), edges).unwrap();
        QueryEngine::new(store(Side::Left, left), store(Side::Right, right), graph).unwrap()
    }

    fn names(result: &QueryResult) -> Vec<String> {
        result.pairs().map(|(name, _)| name.to_string()).collect()
    }

    /// Left: 0 alpha, 1 beta, 2 gamma, 3 delta, 4 epsilon, 5 aspirin complex,
    /// 6 aspirin protect, 7 zeta. Right: slugs r0..r5.
    fn greek() -> QueryEngine {
        engine(
            &[
                "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Aspirin Complex", "Aspirin Protect",
                "Zeta",
            ],
            &["r0-1", "r1-2", "r2-3", "r3-4", "r4-5", "r5-6"],
            vec![
                (0, vec![0]),
                (1, vec![0]),
                (2, vec![0]),
                (3, vec![1]),
                (4, vec![2]),
                (5, vec![3]),
                (6, vec![3, 4]),
            ],
        )
    }

    #[test]
    fn test_lower_bound() {
        assert_eq!(lower_bound(2), 2);
        assert_eq!(lower_bound(3), 2);
        assert_eq!(lower_bound(4), 2);
        assert_eq!(lower_bound(5), 3);
        assert_eq!(lower_bound(6), 3);
        assert_eq!(lower_bound(7), 4);
    }

    #[test]
    fn test_single_token_ties_in_reverse_edge_order() {
        let mut left = vec!["x"; 5];
        left[4] = "aspirin";
        let right = vec!["s-0"; 10];
        let engine = engine(&left, &right, vec![(4, vec![7, 9])]);

        let result = engine.query(Side::Right, "aspirin");
        let explanation = engine.explain(Side::Right, "aspirin");
        assert_eq!(explanation.selected, vec![9, 7]);
        assert_eq!(explanation.votes, vec![(9, 1), (7, 1)]);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_single_token_counts_every_edge() {
        let engine = greek();
        // "aspirin" is in records 5 and 6, which reach r3 twice and r4 once.
        let explanation = engine.explain(Side::Right, "ASPIRIN");
        assert_eq!(explanation.votes, vec![(3, 2), (4, 1)]);
        assert_eq!(names(&explanation.result), vec!["r3"]);
    }

    #[test]
    fn test_single_token_without_edges_is_no_match() {
        let engine = greek();
        let explanation = engine.explain(Side::Right, "zeta");
        assert_eq!(explanation.found, 1);
        assert!(explanation.votes.is_empty());
        assert_eq!(explanation.result, QueryResult::NoMatch);
    }

    #[test]
    fn test_unknown_and_empty_queries() {
        let engine = greek();
        assert_eq!(engine.query(Side::Right, "omega"), QueryResult::NoMatch);
        assert_eq!(engine.query(Side::Right, ""), QueryResult::NoMatch);
        assert_eq!(engine.query(Side::Right, " \t "), QueryResult::NoMatch);
        assert_eq!(engine.query(Side::Right, " , / - "), QueryResult::NoMatch);
    }

    #[test]
    fn test_two_tokens_need_a_shared_neighbor() {
        let engine = greek();
        assert_eq!(engine.query(Side::Right, "alpha delta"), QueryResult::NoMatch);
        assert_eq!(names(&engine.query(Side::Right, "alpha beta")), vec!["r0"]);
        // One known token out of two is below the bound.
        assert_eq!(engine.query(Side::Right, "alpha omega"), QueryResult::NoMatch);
    }

    #[test]
    fn test_five_tokens_with_three_agreeing() {
        let engine = greek();
        let explanation = engine.explain(Side::Right, "alpha beta gamma delta epsilon");
        assert_eq!(explanation.lower_bound, Some(3));
        assert_eq!(explanation.found, 5);
        assert_eq!(explanation.votes, vec![(0, 3), (1, 1), (2, 1)]);
        assert_eq!(names(&explanation.result), vec!["r0"]);

        // Three known tokens but only two agree.
        assert_eq!(
            engine.query(Side::Right, "alpha beta delta omega psi"),
            QueryResult::NoMatch
        );
        // Too few known tokens.
        assert_eq!(
            engine.query(Side::Right, "alpha beta omega psi chi"),
            QueryResult::NoMatch
        );
    }

    #[test]
    fn test_multi_token_votes_once_per_token() {
        let engine = greek();
        // "aspirin" reaches r3 through records 5 and 6 but votes for it once.
        let explanation = engine.explain(Side::Right, "aspirin complex");
        assert_eq!(explanation.votes, vec![(3, 2), (4, 1)]);
        assert_eq!(names(&explanation.result), vec!["r3"]);
        assert_eq!(
            explanation.tokens,
            vec![
                TokenMatch { token: "aspirin".into(), records: vec![5, 6] },
                TokenMatch { token: "complex".into(), records: vec![5] },
            ]
        );
    }

    #[test]
    fn test_reverse_direction_returns_left_records() {
        let engine = greek();
        let result = engine.query(Side::Left, "R3");
        assert_eq!(
            result,
            QueryResult::Matches {
                display_names: vec!["Aspirin Protect".into(), "Aspirin Complex".into()],
                raw_references: vec!["DB00006".into(), "DB00005".into()],
            }
        );
    }

    #[test]
    fn test_single_token_matches_recomputed_argmax() {
        let engine = greek();
        let tokens = ["alpha", "beta", "gamma", "delta", "epsilon", "aspirin", "complex", "protect", "zeta"];
        for token in tokens {
            let mut counts: HashMap<usize, usize> = HashMap::new();
            for &record in engine.index(Side::Left).lookup(token) {
                for neighbor in engine.graph().neighbors(Side::Left, record) {
                    *counts.entry(neighbor).or_default() += 1;
                }
            }
            let max = counts.values().copied().max().unwrap_or(0);
            let mut expected: Vec<usize> = counts
                .iter()
                .filter(|&(_, &c)| c == max)
                .map(|(&v, _)| v)
                .collect();
            expected.sort_unstable();

            let mut selected = engine.explain(Side::Right, token).selected;
            selected.sort_unstable();
            assert_eq!(selected, expected, "token {token}");
        }
    }

    #[test]
    fn test_queries_are_idempotent() {
        let engine = greek();
        let before = engine.stats();
        let first = engine.query(Side::Right, "aspirin protect");
        let second = engine.query(Side::Right, "aspirin protect");
        assert_eq!(first, second);
        assert_eq!(engine.stats(), before);
    }

    #[test]
    fn test_non_latin_queries_are_transliterated() {
        let engine = engine(&["Aspirin"], &["aspirin-100-mg-1"], vec![(0, vec![0])]);

        assert_eq!(names(&engine.query(Side::Right, "Аспирин")), vec!["aspirin 100 mg"]);
        assert_eq!(names(&engine.query(Side::Left, "ASPİRİN")), vec!["Aspirin"]);
    }

    #[test]
    fn test_mismatched_graph_size_is_a_load_error() {
        let graph = CorrespondenceGraph::new(3, 1);
        let error = QueryEngine::new(
            store(Side::Left, &["a", "b"]),
            store(Side::Right, &["c-1"]),
            graph,
        )
        .unwrap_err();
        assert!(matches!(error, LangmedError::Load(_)));
    }

    #[test]
    fn test_swapped_sides_are_rejected() {
        let graph = CorrespondenceGraph::new(1, 1);
        let result = QueryEngine::new(store(Side::Right, &["a-1"]), store(Side::Left, &["b"]), graph);
        assert!(matches!(result, Err(LangmedError::Config(_))));
    }

    #[test]
    fn test_stats() {
        let stats = greek().stats();
        assert_eq!(stats.edges, 8);
        assert_eq!(stats.sides[0].records, 8);
        assert_eq!(stats.sides[0].isolated_records, 1);
        assert_eq!(stats.sides[1].records, 6);
        assert_eq!(stats.sides[1].isolated_records, 1);
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<QueryEngine>();
    }
}
