//! Incremental graph builder
//!
//! This module provides a mutable builder that uses FxHashMap for O(1)
//! edge accumulation during construction, then emits an immutable
//! [`CscGraph`] with deterministically ordered columns.

use rustc_hash::FxHashMap;

use crate::errors::Result;
use crate::graph::csc::CscGraph;

/// A mutable graph builder optimized for incremental construction
///
/// Edges are directed and weighted; adding the same `(from, to)` pair twice
/// accumulates the weights. Self-loops are allowed. The node count grows to
/// cover the largest index seen.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Adjacency per source node: target -> accumulated weight
    columns: Vec<FxHashMap<usize, f64>>,
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph builder with pre-allocated node capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            columns: Vec::with_capacity(node_capacity),
        }
    }

    /// Current number of nodes
    pub fn node_count(&self) -> usize {
        self.columns.len()
    }

    /// Grow the graph to contain at least `node + 1` nodes
    pub fn ensure_node(&mut self, node: usize) {
        if node >= self.columns.len() {
            self.columns.resize_with(node + 1, FxHashMap::default);
        }
    }

    /// Append a fresh node with no edges, returning its index
    pub fn add_node(&mut self) -> usize {
        self.columns.push(FxHashMap::default());
        self.columns.len() - 1
    }

    /// Add weight to the directed edge `from -> to`
    ///
    /// Creates the edge (and any missing endpoint nodes) if absent.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: f64) {
        self.ensure_node(from.max(to));
        *self.columns[from].entry(to).or_insert(0.0) += weight;
    }

    /// Add weight in both directions between `a` and `b`
    pub fn add_undirected_edge(&mut self, a: usize, b: usize, weight: f64) {
        self.add_edge(a, b, weight);
        if a != b {
            self.add_edge(b, a, weight);
        }
    }

    /// Emit the immutable CSC graph
    ///
    /// Targets within each column are sorted by index for deterministic
    /// iteration. Fails if any accumulated weight ended up negative or
    /// non-finite.
    pub fn build(&self) -> Result<CscGraph> {
        let n = self.columns.len();
        let mut col_ptr = Vec::with_capacity(n + 1);
        let mut row_idx = Vec::new();
        let mut values = Vec::new();

        col_ptr.push(0);
        for column in &self.columns {
            let mut edges: Vec<_> = column.iter().map(|(&t, &w)| (t, w)).collect();
            edges.sort_by_key(|(t, _)| *t);
            for (target, weight) in edges {
                row_idx.push(target);
                values.push(weight);
            }
            col_ptr.push(row_idx.len());
        }

        CscGraph::from_parts(n, col_ptr, row_idx, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_accumulation() {
        let mut builder = GraphBuilder::new();
        builder.add_edge(0, 1, 1.0);
        builder.add_edge(0, 1, 0.5);

        let g = builder.build().unwrap();
        let edges: Vec<_> = g.neighbors(0).collect();
        assert_eq!(edges, vec![(1, 1.5)]);
    }

    #[test]
    fn test_node_growth_covers_largest_index() {
        let mut builder = GraphBuilder::new();
        builder.add_edge(0, 4, 1.0);

        let g = builder.build().unwrap();
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.out_degree(4), 0);
    }

    #[test]
    fn test_self_loop_allowed() {
        let mut builder = GraphBuilder::new();
        builder.add_edge(2, 2, 3.0);

        let g = builder.build().unwrap();
        let edges: Vec<_> = g.neighbors(2).collect();
        assert_eq!(edges, vec![(2, 3.0)]);
    }

    #[test]
    fn test_undirected_edge() {
        let mut builder = GraphBuilder::new();
        builder.add_undirected_edge(0, 1, 2.0);

        let g = builder.build().unwrap();
        assert_eq!(g.neighbors(0).collect::<Vec<_>>(), vec![(1, 2.0)]);
        assert_eq!(g.neighbors(1).collect::<Vec<_>>(), vec![(0, 2.0)]);
    }

    #[test]
    fn test_columns_sorted_for_determinism() {
        let mut builder = GraphBuilder::new();
        builder.add_edge(0, 3, 1.0);
        builder.add_edge(0, 1, 1.0);
        builder.add_edge(0, 2, 1.0);

        let g = builder.build().unwrap();
        let targets: Vec<_> = g.neighbors(0).map(|(t, _)| t).collect();
        assert_eq!(targets, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_builder() {
        let g = GraphBuilder::new().build().unwrap();
        assert!(g.is_empty());
    }

    #[test]
    fn test_add_node() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_node();
        let b = builder.add_node();
        assert_eq!((a, b), (0, 1));
        assert_eq!(builder.node_count(), 2);
    }
}
