//! Common traits for the grid heap
//!
//! This module provides the two seams between the heap and the outside world:
//!
//! - [`Key`]: the priority type, with its "unreached" sentinel
//! - [`VertexArena`]: the externally-owned vertex store the heap indexes into
//!
//! The heap never owns vertices. It stores [`VertexId`] handles and reads or
//! writes the two bookkeeping fields (key and heap index) through the arena.

use crate::grid::{Vertex, VertexId};
use std::fmt::Debug;

/// Trait for types usable as vertex priorities.
///
/// `UNREACHED` must compare greater than or equal to every key a search can
/// produce. For the integer implementations it is the type's maximum.
///
/// # Example
///
/// ```rust
/// use dary_grid_heap::Key;
///
/// assert!(i64::UNREACHED.is_unreached());
/// assert!(i64::ZERO < i64::UNREACHED);
/// ```
pub trait Key: Ord + Copy + Debug {
    /// The priority assigned to a search root
    const ZERO: Self;
    /// The "unreached" sentinel
    const UNREACHED: Self;

    /// Returns true if this key is the sentinel
    fn is_unreached(&self) -> bool {
        *self == Self::UNREACHED
    }
}

macro_rules! impl_key {
    ($($t:ty),*) => {
        $(
            impl Key for $t {
                const ZERO: Self = 0;
                const UNREACHED: Self = <$t>::MAX;
            }
        )*
    };
}

impl_key!(u32, u64, i32, i64, usize);

/// Trait for vertex stores backing a rectangular grid.
///
/// Implementors own every [`Vertex`] and hand out stable [`VertexId`]
/// handles. A heap mutably borrows its arena for the whole episode, so at most
/// one heap can be writing bookkeeping fields at a time.
///
/// Rows run `0..height()` top to bottom, columns `0..width()` left to right.
pub trait VertexArena<K: Key> {
    /// Number of columns
    fn width(&self) -> usize;

    /// Number of rows
    fn height(&self) -> usize;

    /// Total number of vertices
    fn len(&self) -> usize {
        self.width() * self.height()
    }

    /// Returns true if the grid holds no vertices
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the handle of the vertex at `(row, col)`, or `None` if the
    /// coordinate lies outside the grid.
    fn id_at(&self, row: usize, col: usize) -> Option<VertexId>;

    /// Returns the `(row, col)` coordinate of a vertex
    fn coords(&self, id: VertexId) -> (usize, usize);

    /// Shared access to a vertex
    ///
    /// # Panics
    /// May panic if `id` was not produced by this arena.
    fn vertex(&self, id: VertexId) -> &Vertex<K>;

    /// Mutable access to a vertex
    ///
    /// # Panics
    /// May panic if `id` was not produced by this arena.
    fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex<K>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_maximum() {
        assert!(i64::UNREACHED > 1_000_000_000);
        assert!(u32::UNREACHED.is_unreached());
        assert!(!u32::ZERO.is_unreached());
        assert!(usize::ZERO < usize::UNREACHED);
        assert_eq!(i32::UNREACHED, i32::MAX);
    }
}
