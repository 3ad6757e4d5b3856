//! Bipartite correspondence graph between the two vocabularies.
//!
//! Every edge joins a left record to a right record and is stored in both
//! adjacency views. Neighbors are reported newest first: after adding
//! `(u, v1)` and then `(u, v2)`, `neighbors(Left, u)` yields `v2, v1`. Tie
//! order of query results depends on this. Parallel edges are kept.

use std::iter::{Copied, Rev};
use std::path::Path;
use std::slice;

use log::info;

use crate::error::{LangmedError, Result};
use crate::side::Side;

pub mod alignment;

use alignment::AlignmentReader;

/// Iterator over the neighbors of a vertex, most recently added first.
pub type Neighbors<'a> = Rev<Copied<slice::Iter<'a, usize>>>;

/// Immutable-after-build bipartite adjacency structure.
#[derive(Clone, Debug, Default)]
pub struct CorrespondenceGraph {
    /// Per side, per vertex, opposite-side neighbors in insertion order.
    adjacency: [Vec<Vec<usize>>; 2],
    edge_count: usize,
}

impl CorrespondenceGraph {
    /// Create an edgeless graph over `left_size` and `right_size` vertices.
    pub fn new(left_size: usize, right_size: usize) -> Self {
        CorrespondenceGraph {
            adjacency: [vec![Vec::new(); left_size], vec![Vec::new(); right_size]],
            edge_count: 0,
        }
    }

    /// Build a graph from `(left, [right...])` rows.
    pub fn from_edge_list<I, R>(left_size: usize, right_size: usize, rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, R)>,
        R: IntoIterator<Item = usize>,
    {
        let mut graph = Self::new(left_size, right_size);
        for (left, rights) in rows {
            for right in rights {
                graph.add_edge(left, right)?;
            }
        }
        Ok(graph)
    }

    /// Load the alignment file, checking every index against the side sizes.
    pub fn load<P: AsRef<Path>>(path: P, left_size: usize, right_size: usize) -> Result<Self> {
        let path = path.as_ref();
        let mut graph = Self::new(left_size, right_size);

        for row in AlignmentReader::open(path)? {
            let row = row?;
            for &right in &row.rights {
                graph
                    .add_edge(row.left, right)
                    .map_err(|e| LangmedError::dangling_at(path, row.line, e.detail()))?;
            }
        }

        info!(
            "loaded {} alignment edges from {} ({} left, {} right vertices)",
            graph.edge_count,
            path.display(),
            left_size,
            right_size
        );
        Ok(graph)
    }

    /// Add the edge `left@Left <-> right@Right`.
    pub fn add_edge(&mut self, left: usize, right: usize) -> Result<()> {
        self.check(Side::Left, left)?;
        self.check(Side::Right, right)?;

        self.adjacency[Side::Left.index()][left].push(right);
        self.adjacency[Side::Right.index()][right].push(left);
        self.edge_count += 1;
        Ok(())
    }

    fn check(&self, side: Side, vertex: usize) -> Result<()> {
        let size = self.size(side);
        if vertex >= size {
            return Err(LangmedError::dangling(format!(
                "{side} index {vertex} out of range (vocabulary has {size} records)"
            )));
        }
        Ok(())
    }

    /// Opposite-side neighbors of `vertex`, most recently added first.
    ///
    /// Unknown vertices have no neighbors.
    pub fn neighbors(&self, side: Side, vertex: usize) -> Neighbors<'_> {
        self.adjacency[side.index()]
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .copied()
            .rev()
    }

    /// Number of edges at a vertex, parallel edges included.
    pub fn degree(&self, side: Side, vertex: usize) -> usize {
        self.adjacency[side.index()]
            .get(vertex)
            .map_or(0, Vec::len)
    }

    /// Number of vertices on a side.
    pub fn size(&self, side: Side) -> usize {
        self.adjacency[side.index()].len()
    }

    /// Number of edges, parallel edges included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of vertices on a side without any edge.
    pub fn isolated(&self, side: Side) -> usize {
        self.adjacency[side.index()]
            .iter()
            .filter(|neighbors| neighbors.is_empty())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(graph: &CorrespondenceGraph, side: Side, vertex: usize) -> Vec<usize> {
        graph.neighbors(side, vertex).collect()
    }

    #[test]
    fn test_neighbors_are_reverse_insertion_order() {
        let mut graph = CorrespondenceGraph::new(3, 10);
        graph.add_edge(1, 7).unwrap();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(1, 9).unwrap();

        assert_eq!(collect(&graph, Side::Left, 1), vec![9, 2, 7]);
        assert_eq!(collect(&graph, Side::Right, 7), vec![1]);
        assert!(collect(&graph, Side::Left, 0).is_empty());
    }

    #[test]
    fn test_both_views_share_edges() {
        let graph =
            CorrespondenceGraph::from_edge_list(3, 3, vec![(0, vec![2, 1]), (2, vec![1])]).unwrap();

        assert_eq!(collect(&graph, Side::Left, 0), vec![1, 2]);
        assert_eq!(collect(&graph, Side::Right, 1), vec![2, 0]);
        assert_eq!(collect(&graph, Side::Right, 2), vec![0]);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.isolated(Side::Left), 1);
        assert_eq!(graph.isolated(Side::Right), 1);
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let graph = CorrespondenceGraph::from_edge_list(1, 2, vec![(0, vec![1, 1])]).unwrap();
        assert_eq!(collect(&graph, Side::Left, 0), vec![1, 1]);
        assert_eq!(graph.degree(Side::Right, 1), 2);
    }

    #[test]
    fn test_out_of_range_vertices_are_rejected() {
        let mut graph = CorrespondenceGraph::new(2, 2);
        let error = graph.add_edge(0, 2).unwrap_err();
        assert!(matches!(error, LangmedError::DanglingReference(_)));
        assert!(error.to_string().contains("right index 2"));

        let error = graph.add_edge(5, 0).unwrap_err();
        assert!(error.to_string().contains("left index 5"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_unknown_vertex_has_no_neighbors() {
        let graph = CorrespondenceGraph::new(1, 1);
        assert_eq!(graph.neighbors(Side::Left, 42).count(), 0);
        assert_eq!(graph.degree(Side::Right, 42), 0);
    }
}
