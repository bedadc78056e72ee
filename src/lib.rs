//! localrank — approximate personalized PageRank via local push
//!
//! This crate computes a sparse approximation to the personalized PageRank
//! vector anchored at a seed distribution, using the push algorithm of
//! Andersen, Chung, and Lang (FOCS 2006). It is the workhorse subroutine of
//! local graph partitioning: the cost of a run is proportional to the size
//! of the output's support, not to the size of the graph.
//!
//! # Quick start
//!
//! ```
//! use localrank::{Appr, DegreeTable, GraphBuilder};
//!
//! let mut builder = GraphBuilder::new();
//! builder.add_undirected_edge(0, 1, 1.0);
//! builder.add_undirected_edge(1, 2, 1.0);
//! let graph = builder.build()?;
//! let degrees = DegreeTable::weighted(&graph)?;
//!
//! let mut seed = vec![0.0; graph.node_count()];
//! seed[0] = 1.0;
//!
//! let result = Appr::new()
//!     .with_alpha(0.2)
//!     .with_epsilon(1e-4)
//!     .run(&graph, &degrees, &seed)?;
//! assert!(result.converged);
//! # Ok::<(), localrank::ApprError>(())
//! ```
//!
//! # Invariants
//!
//! - **Outputs indexed by node id**: all dense vectors are indexed
//!   `0..n-1`, consistent with the graph's node indices.
//! - **Determinism**: identical inputs produce identical outputs, including
//!   the push count and the final residual.
//! - **Eager validation**: malformed graphs, degree tables, seeds, and
//!   parameters are rejected before any state is mutated; hitting the push
//!   cap is reported as data, never as an error.
//!
//! One computation owns its estimate/residual state exclusively; the graph
//! and degree table are read-only, so independent seed queries may share
//! them across threads by reference.

pub mod appr;
pub mod errors;
pub mod graph;

pub use appr::degrees::DegreeTable;
pub use appr::push::{compute_appr, Appr, DEFAULT_MAX_PUSHES};
pub use appr::ApprResult;
pub use errors::{ApprError, Result};
pub use graph::builder::GraphBuilder;
pub use graph::csc::CscGraph;
