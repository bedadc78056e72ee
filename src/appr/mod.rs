//! Approximate personalized PageRank (APPR)
//!
//! This module implements the localized push algorithm of Andersen, Chung,
//! and Lang ("Local Graph Partitioning using PageRank Vectors", FOCS 2006):
//! instead of iterating over the whole graph, residual probability mass is
//! pushed node by node until every residual entry drops below its per-node
//! threshold. Work is proportional to the support of the output, not to the
//! graph size, which is what makes the solver usable as a local clustering
//! subroutine.

pub mod degrees;
pub mod push;
pub mod queue;
pub mod state;

use serde::Serialize;

/// Result of an APPR computation
#[derive(Debug, Clone, Serialize)]
pub struct ApprResult {
    /// Approximate PageRank estimate for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of push operations performed
    pub pushes: usize,
    /// Whether the work queue drained before the push cap was reached
    pub converged: bool,
    /// Final residual vector, present only when requested via
    /// [`Appr::with_residual`](crate::appr::push::Appr::with_residual)
    pub residual: Option<Vec<f64>>,
}

impl ApprResult {
    /// Create a new APPR result
    pub fn new(
        scores: Vec<f64>,
        pushes: usize,
        converged: bool,
        residual: Option<Vec<f64>>,
    ) -> Self {
        Self {
            scores,
            pushes,
            converged,
            residual,
        }
    }

    /// Get top N nodes by score
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        let mut indexed: Vec<_> = self.scores.iter().copied().enumerate().collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1));
        indexed.truncate(n);
        indexed
    }

    /// Get the score for a specific node
    pub fn score(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }

    /// Number of nodes with nonzero estimate
    ///
    /// The push algorithm only ever touches nodes reachable from the seed,
    /// so this is the quantity its work bound is stated in.
    pub fn support_size(&self) -> usize {
        self.scores.iter().filter(|&&s| s > 0.0).count()
    }
}
