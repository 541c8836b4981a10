//! Heap construction for a search episode
//!
//! Two strategies seed a [`DaryHeap`]:
//!
//! - [`DaryHeap::full_grid`] enqueues every vertex of the grid at the sentinel
//!   key and lowers the search root to zero. Used to start a fresh search from
//!   the goal.
//! - [`DaryHeap::restricted`] enqueues only the passable vertices inside a
//!   rectangle, flags the obstacles it skips as known, and lowers a local
//!   target to zero. Used to re-run a bounded search after new obstacles turn
//!   up, without touching the rest of the grid.
//!
//! Both derive the branching factor from the dimensions of the area they
//! cover unless the [`HeapConfig`] fixes it.
//!
//! # Example
//!
//! ```rust
//! use dary_grid_heap::config::HeapConfig;
//! use dary_grid_heap::d_ary::DaryHeap;
//! use dary_grid_heap::grid::{Grid, Rect};
//! use dary_grid_heap::VertexArena;
//!
//! let mut grid: Grid = Grid::new(5, 5);
//! grid.set_obstacle(2, 3, true);
//! let target = grid.id_at(2, 2).unwrap();
//!
//! let heap = DaryHeap::restricted(&mut grid, target, Rect::new(1, 3, 1, 3), &HeapConfig::default())
//!     .unwrap();
//! assert_eq!(heap.len(), 8);
//! assert_eq!(heap.peek_min(), Some(target));
//! ```

use crate::config::HeapConfig;
use crate::d_ary::DaryHeap;
use crate::error::{HeapError, Result};
use crate::grid::{Rect, VertexId};
use crate::traits::{Key, VertexArena};
use log::debug;

impl<'a, K: Key, A: VertexArena<K>> DaryHeap<'a, K, A> {
    /// Builds a heap over every vertex of the grid, rooted at `root`.
    ///
    /// Vertices are inserted row-major at the sentinel key, then `root` is
    /// decreased to zero. Obstacles are enqueued like any other vertex.
    ///
    /// # Errors
    /// - `HeapError::InvalidBranchingFactor` if the config fixes `d < 2`
    /// - `HeapError::AlreadyEnqueued` if a vertex still carries a heap index
    ///
    /// # Panics
    /// Panics if `root` was not produced by `arena`.
    pub fn full_grid(arena: &'a mut A, root: VertexId, config: &HeapConfig) -> Result<Self> {
        let (width, height) = (arena.width(), arena.height());
        let d = config.resolve_branching_factor(width, height)?;
        let mut heap = DaryHeap::with_capacity(arena, d, width * height)?;

        for (row, col) in Rect::full(width, height).cells() {
            if let Some(id) = heap.arena().id_at(row, col) {
                heap.insert(id, K::UNREACHED)?;
            }
        }
        heap.decrease_key_vertex(root, K::ZERO)?;

        debug!(
            "built full-grid heap: {}x{} grid, d = {}, {} vertices, root {}",
            width,
            height,
            d,
            heap.len(),
            root
        );
        Ok(heap)
    }

    /// Builds a heap over the passable vertices inside `rect`, rooted at
    /// `target`.
    ///
    /// Every obstacle inside the rectangle is left out and gets its
    /// `known_obstacle` flag set. Vertices outside the rectangle are not
    /// touched.
    ///
    /// # Errors
    /// - `HeapError::InvalidRect` if `rect` is inverted or leaves the grid
    /// - `HeapError::InvalidBranchingFactor` if the config fixes `d < 2`
    /// - `HeapError::AlreadyEnqueued` if a vertex still carries a heap index
    /// - `HeapError::NotEnqueued` if `target` is outside `rect` or is an
    ///   obstacle
    pub fn restricted(
        arena: &'a mut A,
        target: VertexId,
        rect: Rect,
        config: &HeapConfig,
    ) -> Result<Self> {
        rect.validate(arena.width(), arena.height())?;
        let d = config.resolve_branching_factor(rect.width(), rect.height())?;
        let mut heap = DaryHeap::with_capacity(arena, d, rect.area())?;

        let mut excluded = 0usize;
        for (row, col) in rect.cells() {
            let id = heap
                .arena()
                .id_at(row, col)
                .ok_or(HeapError::InvalidRect {
                    top: rect.top,
                    bottom: rect.bottom,
                    left: rect.left,
                    right: rect.right,
                })?;
            if heap.arena().vertex(id).obstacle {
                heap.arena_mut().vertex_mut(id).known_obstacle = true;
                excluded += 1;
            } else {
                heap.insert(id, K::UNREACHED)?;
            }
        }
        heap.decrease_key_vertex(target, K::ZERO)?;

        debug!(
            "built restricted heap: rows {}..={}, cols {}..={}, d = {}, {} vertices, {} obstacles excluded, target {}",
            rect.top,
            rect.bottom,
            rect.left,
            rect.right,
            d,
            heap.len(),
            excluded,
            target
        );
        Ok(heap)
    }
}
