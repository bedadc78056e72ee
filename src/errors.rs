//! Error taxonomy for graph and solver construction.
//!
//! Every error here is detected eagerly — at construction of a
//! [`CscGraph`](crate::graph::csc::CscGraph) or
//! [`DegreeTable`](crate::appr::degrees::DegreeTable), or during parameter
//! validation before the push loop starts. Nothing is retried internally and
//! no partial results are produced on error. Hitting the push cap without
//! convergence is deliberately *not* represented here: it is an ordinary
//! outcome reported via [`ApprResult::converged`](crate::ApprResult).

use thiserror::Error;

/// Errors produced while validating inputs to an APPR computation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ApprError {
    /// Two inputs that must agree on the node count do not.
    #[error("dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The sparse adjacency arrays are structurally inconsistent.
    #[error("malformed graph: {reason}")]
    MalformedGraph { reason: String },

    /// A dense input vector violates its value constraints.
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    /// A solver parameter is outside its valid range.
    #[error("invalid parameter {name}={value}: expected {expected}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ApprError>;
