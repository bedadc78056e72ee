//! Compressed Sparse Column (CSC) graph representation
//!
//! CSC stores the out-edges of node `u` contiguously in column `u`, which is
//! exactly the access pattern of the push operator: every push walks one
//! column and touches the targets it lists.

use crate::errors::{ApprError, Result};

/// An immutable weighted graph in Compressed Sparse Column format
///
/// Column `u` holds the out-edges of node `u`: targets are at
/// `row_idx[col_ptr[u]..col_ptr[u + 1]]` with matching `values`. The
/// structure is square (N×N), weights are non-negative and finite, and
/// self-loops and asymmetric weights are preserved exactly. Nothing is
/// mutated after construction, so shared references are safe across
/// concurrent computations.
#[derive(Debug, Clone, PartialEq)]
pub struct CscGraph {
    num_nodes: usize,
    col_ptr: Vec<usize>,
    row_idx: Vec<usize>,
    values: Vec<f64>,
}

impl CscGraph {
    /// Build a graph from raw CSC arrays, validating the structure.
    ///
    /// Requirements:
    /// - `col_ptr` has length `num_nodes + 1`, starts at 0, is monotonically
    ///   non-decreasing, and ends at the edge count;
    /// - `row_idx` and `values` have equal length, every row index is
    ///   `< num_nodes`, and every weight is finite and `>= 0`.
    pub fn from_parts(
        num_nodes: usize,
        col_ptr: Vec<usize>,
        row_idx: Vec<usize>,
        values: Vec<f64>,
    ) -> Result<Self> {
        if col_ptr.len() != num_nodes + 1 {
            return Err(ApprError::MalformedGraph {
                reason: format!(
                    "col_ptr length must be num_nodes + 1 (len={} num_nodes={})",
                    col_ptr.len(),
                    num_nodes
                ),
            });
        }
        if col_ptr[0] != 0 {
            return Err(ApprError::MalformedGraph {
                reason: format!("col_ptr must start at 0, got {}", col_ptr[0]),
            });
        }
        if col_ptr.windows(2).any(|w| w[0] > w[1]) {
            return Err(ApprError::MalformedGraph {
                reason: "col_ptr must be monotonically non-decreasing".to_string(),
            });
        }
        let nnz = *col_ptr.last().unwrap_or(&0);
        if row_idx.len() != nnz || values.len() != nnz {
            return Err(ApprError::MalformedGraph {
                reason: format!(
                    "edge arrays disagree with col_ptr (col_ptr[n]={} row_idx={} values={})",
                    nnz,
                    row_idx.len(),
                    values.len()
                ),
            });
        }
        if let Some(&bad) = row_idx.iter().find(|&&r| r >= num_nodes) {
            return Err(ApprError::MalformedGraph {
                reason: format!("row index {bad} out of range for {num_nodes} nodes"),
            });
        }
        if let Some(&bad) = values.iter().find(|&&w| !w.is_finite() || w < 0.0) {
            return Err(ApprError::MalformedGraph {
                reason: format!("edge weight {bad} is negative or non-finite"),
            });
        }

        Ok(Self {
            num_nodes,
            col_ptr,
            row_idx,
            values,
        })
    }

    /// Number of nodes (the matrix dimension N).
    pub fn node_count(&self) -> usize {
        self.num_nodes
    }

    /// Total number of stored edges.
    pub fn edge_count(&self) -> usize {
        self.row_idx.len()
    }

    /// Out-degree of a node (stored edge count of its column).
    pub fn out_degree(&self, node: usize) -> usize {
        self.col_ptr[node + 1] - self.col_ptr[node]
    }

    /// Iterate over the out-edges of a node as `(target, weight)` pairs.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let start = self.col_ptr[node];
        let end = self.col_ptr[node + 1];
        (start..end).map(move |i| (self.row_idx[i], self.values[i]))
    }

    /// Per-node sums of outgoing edge weights.
    ///
    /// Convenience for callers that want the conventional weighted-degree
    /// normalization; see [`DegreeTable::weighted`](crate::appr::degrees::DegreeTable::weighted).
    pub fn weighted_degrees(&self) -> Vec<f64> {
        (0..self.num_nodes)
            .map(|u| self.neighbors(u).map(|(_, w)| w).sum())
            .collect()
    }

    /// Check if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }
}

impl Default for CscGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            col_ptr: vec![0],
            row_idx: Vec::new(),
            values: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0 -> 1 (2.0), 0 -> 2 (0.5), 2 -> 2 (1.0 self-loop)
    fn sample_graph() -> CscGraph {
        CscGraph::from_parts(3, vec![0, 2, 2, 3], vec![1, 2, 2], vec![2.0, 0.5, 1.0]).unwrap()
    }

    #[test]
    fn test_basic_accessors() {
        let g = sample_graph();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.out_degree(0), 2);
        assert_eq!(g.out_degree(1), 0);
        assert_eq!(g.out_degree(2), 1);
    }

    #[test]
    fn test_neighbor_iteration() {
        let g = sample_graph();
        let n0: Vec<_> = g.neighbors(0).collect();
        assert_eq!(n0, vec![(1, 2.0), (2, 0.5)]);

        // Self-loop preserved exactly
        let n2: Vec<_> = g.neighbors(2).collect();
        assert_eq!(n2, vec![(2, 1.0)]);
    }

    #[test]
    fn test_weighted_degrees() {
        let g = sample_graph();
        let d = g.weighted_degrees();
        assert_eq!(d.len(), 3);
        assert!((d[0] - 2.5).abs() < 1e-12);
        assert_eq!(d[1], 0.0);
        assert!((d[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_graph() {
        let g = CscGraph::default();
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_rejects_short_col_ptr() {
        let err = CscGraph::from_parts(3, vec![0, 1], vec![0], vec![1.0]).unwrap_err();
        assert!(matches!(err, ApprError::MalformedGraph { .. }));
    }

    #[test]
    fn test_rejects_decreasing_col_ptr() {
        let err =
            CscGraph::from_parts(2, vec![0, 2, 1], vec![0, 1], vec![1.0, 1.0]).unwrap_err();
        assert!(matches!(err, ApprError::MalformedGraph { .. }));
    }

    #[test]
    fn test_rejects_out_of_range_row() {
        let err = CscGraph::from_parts(2, vec![0, 1, 1], vec![5], vec![1.0]).unwrap_err();
        assert!(matches!(err, ApprError::MalformedGraph { .. }));
    }

    #[test]
    fn test_rejects_negative_weight() {
        let err = CscGraph::from_parts(2, vec![0, 1, 1], vec![1], vec![-1.0]).unwrap_err();
        assert!(matches!(err, ApprError::MalformedGraph { .. }));
    }

    #[test]
    fn test_rejects_nan_weight() {
        let err = CscGraph::from_parts(2, vec![0, 1, 1], vec![1], vec![f64::NAN]).unwrap_err();
        assert!(matches!(err, ApprError::MalformedGraph { .. }));
    }

    #[test]
    fn test_rejects_edge_array_mismatch() {
        let err = CscGraph::from_parts(2, vec![0, 2, 2], vec![0, 1], vec![1.0]).unwrap_err();
        assert!(matches!(err, ApprError::MalformedGraph { .. }));
    }
}
