//! Per-node normalization weights
//!
//! The push algorithm is degree-model-agnostic: it only needs a strictly
//! positive "degree" per node, used as the denominator of the neighbor
//! deltas and as the scale of the per-node convergence threshold. Callers
//! commonly supply the weighted out-degree, but any positive weighting is
//! accepted.

use crate::errors::{ApprError, Result};
use crate::graph::csc::CscGraph;

/// Immutable table of strictly positive per-node normalization weights
#[derive(Debug, Clone, PartialEq)]
pub struct DegreeTable {
    values: Vec<f64>,
}

impl DegreeTable {
    /// Build a table from caller-supplied values.
    ///
    /// Every entry must be finite and strictly positive.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if let Some((i, &bad)) = values
            .iter()
            .enumerate()
            .find(|(_, &d)| !d.is_finite() || d <= 0.0)
        {
            return Err(ApprError::MalformedInput {
                reason: format!("degree[{i}] = {bad} must be finite and > 0"),
            });
        }
        Ok(Self { values })
    }

    /// Build the conventional table from the graph's weighted out-degrees.
    ///
    /// Fails if any node has zero total outgoing weight; such graphs need a
    /// caller-supplied degree model instead. Note that with this table the
    /// push operator conserves total mass exactly (`Σp + Σr` stays equal to
    /// the seed mass), which is the usual diagnostic regime.
    pub fn weighted(graph: &CscGraph) -> Result<Self> {
        Self::new(graph.weighted_degrees())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Normalization weight of a node
    pub fn get(&self, node: usize) -> f64 {
        self.values[node]
    }

    /// The local convergence threshold `epsilon * d[node]`
    pub fn threshold(&self, node: usize, epsilon: f64) -> f64 {
        epsilon * self.values[node]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;

    #[test]
    fn test_accepts_positive_entries() {
        let d = DegreeTable::new(vec![1.0, 2.5, 0.001]).unwrap();
        assert_eq!(d.len(), 3);
        assert_eq!(d.get(1), 2.5);
    }

    #[test]
    fn test_threshold_scales_by_degree() {
        let d = DegreeTable::new(vec![2.0, 4.0]).unwrap();
        assert!((d.threshold(0, 0.1) - 0.2).abs() < 1e-12);
        assert!((d.threshold(1, 0.1) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_zero_entry() {
        let err = DegreeTable::new(vec![1.0, 0.0]).unwrap_err();
        assert!(matches!(err, ApprError::MalformedInput { .. }));
    }

    #[test]
    fn test_rejects_negative_entry() {
        assert!(DegreeTable::new(vec![-1.0]).is_err());
    }

    #[test]
    fn test_rejects_non_finite_entry() {
        assert!(DegreeTable::new(vec![f64::INFINITY]).is_err());
        assert!(DegreeTable::new(vec![f64::NAN]).is_err());
    }

    #[test]
    fn test_weighted_from_graph() {
        let mut builder = GraphBuilder::new();
        builder.add_undirected_edge(0, 1, 2.0);
        let graph = builder.build().unwrap();

        let d = DegreeTable::weighted(&graph).unwrap();
        assert_eq!(d.get(0), 2.0);
        assert_eq!(d.get(1), 2.0);
    }

    #[test]
    fn test_weighted_rejects_dangling_node() {
        let mut builder = GraphBuilder::new();
        builder.add_edge(0, 1, 1.0); // node 1 has no out-edges
        let graph = builder.build().unwrap();

        assert!(DegreeTable::weighted(&graph).is_err());
    }
}
