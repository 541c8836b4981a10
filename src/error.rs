//! Error type for heap operations
//!
//! None of these are transient: each variant reports a contract breach by the
//! caller, and the owning search loop is expected to halt on any of them.
//! An empty heap is not an error and is reported as `None` by
//! [`DaryHeap::peek_min`](crate::d_ary::DaryHeap::peek_min) and
//! [`DaryHeap::extract_min`](crate::d_ary::DaryHeap::extract_min).

use crate::grid::VertexId;
use thiserror::Error;

/// Error type for heap operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The new priority is greater than the current priority
    #[error("new priority is greater than the current priority")]
    PriorityNotDecreased,

    /// Insert past the capacity the heap was sized for
    #[error("heap capacity of {capacity} vertices exceeded")]
    CapacityExceeded { capacity: usize },

    /// The vertex already sits in a heap
    #[error("vertex {0} is already enqueued")]
    AlreadyEnqueued(VertexId),

    /// The vertex does not sit in this heap
    #[error("vertex {0} is not enqueued")]
    NotEnqueued(VertexId),

    /// The slot index does not name an occupied slot
    #[error("slot {index} is not occupied (heap holds {len} vertices)")]
    InvalidSlot { index: usize, len: usize },

    /// Rectangle is inverted or falls outside the grid
    #[error("rectangle rows {top}..={bottom}, cols {left}..={right} is not inside the grid")]
    InvalidRect {
        top: usize,
        bottom: usize,
        left: usize,
        right: usize,
    },

    /// Configured branching factor is below 2
    #[error("branching factor must be at least 2, got {0}")]
    InvalidBranchingFactor(usize),
}

pub type Result<T> = std::result::Result<T, HeapError>;
