//! Push-based APPR solver
//!
//! Implements the localized push iteration: dequeue a node whose residual
//! exceeds its threshold, commit an `alpha` fraction of that residual to the
//! estimate, keep half of the remainder in place, and spread the other half
//! across the out-edges, enqueueing any neighbor whose residual crosses its
//! own threshold as a result. The loop stops when the queue drains or a
//! configurable push cap is reached.

use serde::{Deserialize, Serialize};

use super::degrees::DegreeTable;
use super::queue::WorkQueue;
use super::state::ResidualState;
use super::ApprResult;
use crate::errors::{ApprError, Result};
use crate::graph::csc::CscGraph;

/// Default cap on push operations per run.
pub const DEFAULT_MAX_PUSHES: usize = 1_000_000;

/// APPR solver parameters
///
/// `alpha` is the teleportation parameter: each push irrevocably commits
/// `alpha * r[u]` of node `u`'s residual into the estimate. `epsilon` sets
/// the per-node relative convergence tolerance: a node is resolved once
/// `r[u] <= epsilon * d[u]`. `max_pushes` bounds the total number of push
/// operations so a too-tight tolerance cannot loop forever.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Appr {
    /// Teleportation parameter, in the open interval (0, 1)
    pub alpha: f64,
    /// Per-node relative residual tolerance, > 0
    pub epsilon: f64,
    /// Hard cap on the number of push operations
    pub max_pushes: usize,
    /// Whether the final residual vector is kept on the result
    pub keep_residual: bool,
}

impl Default for Appr {
    fn default() -> Self {
        Self {
            alpha: 0.15,
            epsilon: 1e-4,
            max_pushes: DEFAULT_MAX_PUSHES,
            keep_residual: false,
        }
    }
}

impl Appr {
    /// Create a solver with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the teleportation parameter
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the convergence tolerance
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the push cap
    pub fn with_max_pushes(mut self, max_pushes: usize) -> Self {
        self.max_pushes = max_pushes;
        self
    }

    /// Request (or drop) the final residual vector on the result
    pub fn with_residual(mut self, keep: bool) -> Self {
        self.keep_residual = keep;
        self
    }

    /// Check parameter ranges, before any state is touched
    pub fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(ApprError::InvalidParameter {
                name: "alpha",
                value: self.alpha,
                expected: "finite value in (0, 1)",
            });
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(ApprError::InvalidParameter {
                name: "epsilon",
                value: self.epsilon,
                expected: "finite value > 0",
            });
        }
        Ok(())
    }

    /// Run the push solver for one seed distribution.
    ///
    /// All validation happens up front: parameters, then the
    /// degrees-vs-graph and seed-vs-graph dimensions. After that the loop
    /// runs to queue exhaustion or the push cap; hitting the cap is not an
    /// error and is reported through [`ApprResult::converged`].
    pub fn run(&self, graph: &CscGraph, degrees: &DegreeTable, seed: &[f64]) -> Result<ApprResult> {
        self.validate()?;

        let n = graph.node_count();
        if degrees.len() != n {
            return Err(ApprError::DimensionMismatch {
                what: "degrees",
                expected: n,
                actual: degrees.len(),
            });
        }
        let mut state = ResidualState::from_seed(n, seed)?;

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "appr_push",
            nodes = n,
            alpha = self.alpha,
            epsilon = self.epsilon
        )
        .entered();

        let mut queue = WorkQueue::new();
        for i in 0..n {
            if state.r(i) > degrees.threshold(i, self.epsilon) {
                queue.push(i);
            }
        }

        let mut pushes = 0;
        while !queue.is_empty() && pushes < self.max_pushes {
            self.push_one(graph, degrees, &mut state, &mut queue);
            pushes += 1;
        }
        let converged = queue.is_empty();

        #[cfg(feature = "tracing")]
        tracing::debug!(pushes, converged, "push loop finished");

        let (p, r) = state.into_vectors();
        let residual = self.keep_residual.then_some(r);
        Ok(ApprResult::new(p, pushes, converged, residual))
    }

    /// One push operation: dequeue, live-check, commit, redistribute.
    fn push_one(
        &self,
        graph: &CscGraph,
        degrees: &DegreeTable,
        state: &mut ResidualState,
        queue: &mut WorkQueue,
    ) {
        let Some(node) = queue.pop() else { return };

        // Queue entries are only hints: the residual may have dropped below
        // threshold since this entry was recorded, in which case it is stale
        // and the push is a no-op.
        if state.r(node) <= degrees.threshold(node, self.epsilon) {
            return;
        }

        let r_node = state.r(node);
        state.add_p(node, self.alpha * r_node);
        // Of the uncommitted remainder, half stays at the node and half is
        // distributed over the out-edges.
        state.set_r(node, (1.0 - self.alpha) * r_node / 2.0);
        if state.r(node) > degrees.threshold(node, self.epsilon) {
            queue.push(node);
        }

        let d_node = degrees.get(node);
        for (target, weight) in graph.neighbors(node) {
            let delta = (1.0 - self.alpha) * r_node * weight / (2.0 * d_node);
            state.add_r(target, delta);
            // Edge-triggered enqueue: only the delta that carried the target
            // across its threshold records an entry, so a target already
            // above threshold (and hence already queued) is not re-added.
            let excess = state.r(target) - degrees.threshold(target, self.epsilon);
            if 0.0 < excess && excess <= delta {
                queue.push(target);
            }
        }
    }
}

/// Compute an approximate personalized PageRank vector.
///
/// Convenience entry point over [`Appr`], returning the final residual
/// alongside the estimate. `seed` must have one entry per graph node and
/// `degrees` must agree with the graph dimension.
pub fn compute_appr(
    alpha: f64,
    epsilon: f64,
    seed: &[f64],
    graph: &CscGraph,
    degrees: &DegreeTable,
) -> Result<ApprResult> {
    Appr::new()
        .with_alpha(alpha)
        .with_epsilon(epsilon)
        .with_residual(true)
        .run(graph, degrees, seed)
}
