//! Graph construction and representation
//!
//! This module provides efficient graph building and the immutable
//! column-oriented sparse storage the push solver reads.

pub mod builder;
pub mod csc;
