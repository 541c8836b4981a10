//! Indexed d-ary Heap for Incremental Grid Search
//!
//! This crate provides the open-list priority queue for shortest-path search
//! over a rectangular grid: a d-ary min-heap whose elements are grid vertices,
//! each carrying a live back-reference to its own slot so that `decrease_key`
//! on any vertex runs in O(log_d n) without scanning.
//!
//! # Modules
//!
//! - [`d_ary`]: the heap and its operations (insert, decrease-key,
//!   extract-min, peek-min, clear)
//! - [`builder`]: full-grid and restricted-rectangle construction
//! - [`branching`]: choosing `d` from grid size and connectivity
//! - [`grid`]: vertex handles, the bundled row-major [`Grid`](grid::Grid),
//!   and rectangles
//! - [`config`]: construction settings
//!
//! # Example
//!
//! ```rust
//! use dary_grid_heap::config::HeapConfig;
//! use dary_grid_heap::d_ary::DaryHeap;
//! use dary_grid_heap::grid::Grid;
//! use dary_grid_heap::VertexArena;
//!
//! let mut grid: Grid = Grid::new(5, 5);
//! let goal = grid.id_at(2, 2).unwrap();
//!
//! let mut heap = DaryHeap::full_grid(&mut grid, goal, &HeapConfig::default()).unwrap();
//! assert_eq!(heap.len(), 25);
//! assert_eq!(heap.extract_min(), Some(goal));
//! ```

pub mod branching;
pub mod builder;
pub mod config;
pub mod d_ary;
pub mod error;
pub mod grid;
pub mod traits;

// Re-export the main types for convenience
pub use d_ary::DaryHeap;
pub use error::{HeapError, Result};
pub use grid::{Connectivity, Grid, Rect, Vertex, VertexId};
pub use traits::{Key, VertexArena};
