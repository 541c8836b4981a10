//! Rectangular grid of vertices
//!
//! The heap treats the grid as an external collaborator reached through the
//! [`VertexArena`] trait. [`Grid`] is the bundled row-major implementation:
//! a flat `Vec<Vertex<K>>` indexed by [`VertexId`], so the heap stores plain
//! integer handles instead of references into shared vertex state.
//!
//! # Example
//!
//! ```rust
//! use dary_grid_heap::grid::{Connectivity, Grid};
//! use dary_grid_heap::VertexArena;
//!
//! let mut grid: Grid = Grid::new(4, 3);
//! grid.set_obstacle(1, 1, true);
//!
//! let centre = grid.id_at(1, 2).unwrap();
//! assert_eq!(grid.coords(centre), (1, 2));
//! assert_eq!(grid.neighbors(centre, Connectivity::Four).len(), 4);
//! assert!(grid.vertex_at(1, 1).unwrap().obstacle);
//! ```

use crate::error::{HeapError, Result};
use crate::traits::{Key, VertexArena};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index-based handle to a vertex in a [`VertexArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl VertexId {
    /// The raw arena index
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A grid cell.
///
/// `key` and `heap_index` are heap bookkeeping: readable by anyone, written
/// only by the heap. `obstacle` belongs to the grid model; `known_obstacle`
/// is set by a restricted rebuild when it skips an obstacle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<K: Key = i64> {
    key: K,
    heap_index: Option<usize>,
    /// The cell is impassable
    pub obstacle: bool,
    /// A restricted rebuild has seen this obstacle
    pub known_obstacle: bool,
}

impl<K: Key> Vertex<K> {
    /// A fresh, unreached, passable vertex
    pub fn new() -> Self {
        Vertex {
            key: K::UNREACHED,
            heap_index: None,
            obstacle: false,
            known_obstacle: false,
        }
    }

    /// Current priority key
    pub fn key(&self) -> K {
        self.key
    }

    /// Slot this vertex occupies, if it is enqueued
    pub fn heap_index(&self) -> Option<usize> {
        self.heap_index
    }

    /// Returns true if the vertex currently sits in a heap
    pub fn is_enqueued(&self) -> bool {
        self.heap_index.is_some()
    }

    pub(crate) fn set_key(&mut self, key: K) {
        self.key = key;
    }

    pub(crate) fn set_heap_index(&mut self, index: Option<usize>) {
        self.heap_index = index;
    }
}

impl<K: Key> Default for Vertex<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Grid adjacency used to estimate the number of edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    /// Up, down, left, right
    #[default]
    Four,
    /// The four orthogonal neighbours plus the four diagonals
    Eight,
}

impl Connectivity {
    /// `(row, col)` offsets of the neighbours under this connectivity
    pub fn offsets(self) -> &'static [(isize, isize)] {
        const FOUR: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        const EIGHT: [(isize, isize); 8] = [
            (-1, 0),
            (1, 0),
            (0, -1),
            (0, 1),
            (-1, -1),
            (-1, 1),
            (1, -1),
            (1, 1),
        ];
        match self {
            Connectivity::Four => &FOUR,
            Connectivity::Eight => &EIGHT,
        }
    }
}

/// Inclusive sub-rectangle of a grid, in `(row, col)` coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl Rect {
    pub fn new(top: usize, bottom: usize, left: usize, right: usize) -> Self {
        Rect {
            top,
            bottom,
            left,
            right,
        }
    }

    /// The rectangle covering a whole `width` x `height` grid
    ///
    /// Both dimensions must be non-zero.
    pub fn full(width: usize, height: usize) -> Self {
        Rect::new(0, height.saturating_sub(1), 0, width.saturating_sub(1))
    }

    /// Number of columns covered
    pub fn width(&self) -> usize {
        self.right - self.left + 1
    }

    /// Number of rows covered
    pub fn height(&self) -> usize {
        self.bottom - self.top + 1
    }

    /// Number of cells covered
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.top..=self.bottom).contains(&row) && (self.left..=self.right).contains(&col)
    }

    /// Checks that the rectangle is not inverted and lies inside a
    /// `width` x `height` grid.
    pub fn validate(&self, width: usize, height: usize) -> Result<()> {
        if self.top > self.bottom
            || self.left > self.right
            || self.bottom >= height
            || self.right >= width
        {
            return Err(HeapError::InvalidRect {
                top: self.top,
                bottom: self.bottom,
                left: self.left,
                right: self.right,
            });
        }
        Ok(())
    }

    /// Row-major iterator over the covered `(row, col)` coordinates
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (left, right) = (self.left, self.right);
        (self.top..=self.bottom).flat_map(move |row| (left..=right).map(move |col| (row, col)))
    }
}

/// Row-major vertex arena
#[derive(Debug, Clone)]
pub struct Grid<K: Key = i64> {
    width: usize,
    height: usize,
    vertices: Vec<Vertex<K>>,
}

impl<K: Key> Grid<K> {
    /// Creates a grid of fresh vertices
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            vertices: (0..width * height).map(|_| Vertex::new()).collect(),
        }
    }

    pub fn vertex_at(&self, row: usize, col: usize) -> Option<&Vertex<K>> {
        self.id_at(row, col).map(|id| &self.vertices[id.0])
    }

    pub fn vertex_at_mut(&mut self, row: usize, col: usize) -> Option<&mut Vertex<K>> {
        self.id_at(row, col).map(move |id| &mut self.vertices[id.0])
    }

    /// Marks or unmarks the cell at `(row, col)` as an obstacle.
    ///
    /// Returns false if the coordinate lies outside the grid.
    pub fn set_obstacle(&mut self, row: usize, col: usize, obstacle: bool) -> bool {
        match self.vertex_at_mut(row, col) {
            Some(vertex) => {
                vertex.obstacle = obstacle;
                true
            }
            None => false,
        }
    }

    /// In-bounds neighbours of `id` under the given connectivity, obstacles
    /// included.
    pub fn neighbors(&self, id: VertexId, connectivity: Connectivity) -> Vec<VertexId> {
        let (row, col) = self.coords(id);
        connectivity
            .offsets()
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                self.id_at(r, c)
            })
            .collect()
    }

    /// Resets every key to the sentinel and forgets known obstacles.
    ///
    /// Heap indices are left alone; they are cleared when a heap is disposed.
    pub fn reset_search_state(&mut self) {
        for vertex in &mut self.vertices {
            vertex.set_key(K::UNREACHED);
            vertex.known_obstacle = false;
        }
    }

    /// Iterator over every vertex handle, row-major
    pub fn ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId)
    }
}

impl<K: Key> VertexArena<K> for Grid<K> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn id_at(&self, row: usize, col: usize) -> Option<VertexId> {
        if row < self.height && col < self.width {
            Some(VertexId(row * self.width + col))
        } else {
            None
        }
    }

    fn coords(&self, id: VertexId) -> (usize, usize) {
        (id.0 / self.width, id.0 % self.width)
    }

    fn vertex(&self, id: VertexId) -> &Vertex<K> {
        &self.vertices[id.0]
    }

    fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex<K> {
        &mut self.vertices[id.0]
    }
}
