//! Vote tally with first-vote ordering.

use ahash::AHashMap;

/// Per-query vote counts for opposite-side candidates.
///
/// Candidates are remembered in the order of their first vote, and every
/// listing follows that order. The tally never reorders by index or count.
#[derive(Clone, Debug, Default)]
pub struct VoteTally {
    counts: AHashMap<usize, usize>,
    order: Vec<usize>,
}

impl VoteTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one vote for a candidate.
    pub fn vote(&mut self, candidate: usize) {
        let count = self.counts.entry(candidate).or_insert(0);
        if *count == 0 {
            self.order.push(candidate);
        }
        *count += 1;
    }

    /// Votes received by a candidate.
    pub fn votes(&self, candidate: usize) -> usize {
        self.counts.get(&candidate).copied().unwrap_or(0)
    }

    /// Number of candidates with at least one vote.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(candidate, votes)` pairs in first-vote order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.order
            .iter()
            .map(move |&candidate| (candidate, self.counts[&candidate]))
    }

    /// The highest vote count, 0 for an empty tally.
    pub fn max_votes(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// All candidates holding the highest vote count, in first-vote order.
    pub fn leaders(&self) -> Vec<usize> {
        let max = self.max_votes();
        self.iter()
            .filter(|&(_, votes)| votes == max)
            .map(|(candidate, _)| candidate)
            .collect()
    }
}
