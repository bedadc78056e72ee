//! FIFO work queue of nodes awaiting a push
//!
//! The queue is a scheduling hint, not the source of truth: a node may be
//! enqueued more than once, and an entry may be stale by the time it is
//! popped. The engine re-checks the residual threshold at dequeue time, so
//! a stale entry is a harmless no-op.

use std::collections::VecDeque;

/// FIFO queue of node indices whose residual crossed the threshold
#[derive(Debug, Clone, Default)]
pub struct WorkQueue {
    nodes: VecDeque<usize>,
}

impl WorkQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node
    pub fn push(&mut self, node: usize) {
        self.nodes.push_back(node);
    }

    /// Remove and return the earliest-inserted node, or `None` if empty
    pub fn pop(&mut self) -> Option<usize> {
        self.nodes.pop_front()
    }

    /// Number of queued entries (duplicates counted)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
