//! Indexed d-ary min-heap over grid vertices
//!
//! The heap is a dense array of [`VertexId`] handles. Each enqueued vertex
//! records its own slot in its `heap_index` field, so `decrease_key` on an
//! arbitrary vertex needs no search: it jumps straight to the slot and sifts
//! up.
//!
//! # Ownership
//!
//! A heap mutably borrows its [`VertexArena`] for as long as it lives. Keys
//! and heap indices are stored on the vertices themselves, so a second heap
//! over the same vertices would corrupt both; the borrow makes that a compile
//! error. Dropping the heap clears every back-reference it set.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity        |
//! |----------------|-------------------|
//! | `insert`       | O(log_d n)        |
//! | `decrease_key` | O(log_d n)        |
//! | `extract_min`  | O(d log_d n)      |
//! | `peek_min`     | O(1)              |
//! | `clear`        | O(n)              |
//!
//! # Example
//!
//! ```rust
//! use dary_grid_heap::d_ary::DaryHeap;
//! use dary_grid_heap::grid::Grid;
//! use dary_grid_heap::VertexArena;
//!
//! let mut grid: Grid = Grid::new(3, 1);
//! let ids: Vec<_> = grid.ids().collect();
//!
//! let mut heap = DaryHeap::with_capacity(&mut grid, 2, 3).unwrap();
//! heap.insert(ids[0], 30).unwrap();
//! heap.insert(ids[1], 10).unwrap();
//! heap.insert(ids[2], 20).unwrap();
//!
//! heap.decrease_key_vertex(ids[0], 5).unwrap();
//! assert_eq!(heap.extract_min(), Some(ids[0]));
//! assert_eq!(heap.extract_min(), Some(ids[1]));
//! assert_eq!(heap.extract_min(), Some(ids[2]));
//! assert_eq!(heap.extract_min(), None);
//! ```

use crate::branching::MIN_BRANCHING_FACTOR;
use crate::error::{HeapError, Result};
use crate::grid::VertexId;
use crate::traits::{Key, VertexArena};
use log::trace;
use std::marker::PhantomData;

/// A d-ary min-heap whose elements are vertices of a borrowed arena
pub struct DaryHeap<'a, K: Key, A: VertexArena<K>> {
    arena: &'a mut A,
    /// Occupied slots; `slots.len()` is the element count
    slots: Vec<VertexId>,
    capacity: usize,
    d: usize,
    _key: PhantomData<K>,
}

impl<'a, K: Key, A: VertexArena<K>> DaryHeap<'a, K, A> {
    /// Creates an empty heap with fan-out `d` that holds at most `capacity`
    /// vertices.
    ///
    /// # Errors
    /// Returns `HeapError::InvalidBranchingFactor` if `d < 2`.
    pub fn with_capacity(arena: &'a mut A, d: usize, capacity: usize) -> Result<Self> {
        if d < MIN_BRANCHING_FACTOR {
            return Err(HeapError::InvalidBranchingFactor(d));
        }
        Ok(DaryHeap {
            arena,
            slots: Vec::with_capacity(capacity),
            capacity,
            d,
            _key: PhantomData,
        })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Maximum number of vertices this heap accepts
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Fan-out `d`
    pub fn branching_factor(&self) -> usize {
        self.d
    }

    /// The occupied slots in heap order
    pub fn slots(&self) -> &[VertexId] {
        &self.slots
    }

    /// Read access to the vertex arena for the duration of the episode
    pub fn arena(&self) -> &A {
        &*self.arena
    }

    /// Bookkeeping fields must only be written through the heap itself
    pub(crate) fn arena_mut(&mut self) -> &mut A {
        &mut *self.arena
    }

    /// Current key of a vertex
    pub fn key_of(&self, id: VertexId) -> K {
        self.arena.vertex(id).key()
    }

    /// Returns true if `id` sits in this heap
    pub fn contains(&self, id: VertexId) -> bool {
        self.slot_of(id).is_some()
    }

    fn slot_of(&self, id: VertexId) -> Option<usize> {
        let index = self.arena.vertex(id).heap_index()?;
        (self.slots.get(index) == Some(&id)).then_some(index)
    }

    /// Appends `id` at the next free slot and brings it to `key`.
    ///
    /// The vertex enters at the sentinel key and is moved into place by
    /// [`decrease_key`](Self::decrease_key), so sift-up is the only path that
    /// positions new elements.
    ///
    /// # Errors
    /// - `HeapError::AlreadyEnqueued` if the vertex already sits in a heap
    /// - `HeapError::CapacityExceeded` if the heap is full
    /// - `HeapError::PriorityNotDecreased` if `key` exceeds the sentinel
    pub fn insert(&mut self, id: VertexId, key: K) -> Result<()> {
        if self.arena.vertex(id).is_enqueued() {
            return Err(HeapError::AlreadyEnqueued(id));
        }
        if self.slots.len() >= self.capacity {
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let index = self.slots.len();
        self.slots.push(id);
        let vertex = self.arena.vertex_mut(id);
        vertex.set_heap_index(Some(index));
        vertex.set_key(K::UNREACHED);

        if let Err(err) = self.decrease_key(index, key) {
            // Nothing moved; the vertex is still in the last slot
            self.slots.pop();
            self.arena.vertex_mut(id).set_heap_index(None);
            return Err(err);
        }
        Ok(())
    }

    /// Lowers the key of the vertex in slot `index` and restores heap order.
    ///
    /// An equal key is accepted and leaves the heap unchanged.
    ///
    /// # Errors
    /// - `HeapError::InvalidSlot` if `index` is not occupied
    /// - `HeapError::PriorityNotDecreased` if `key` is greater than the
    ///   current key. This reports a caller bug in relaxation logic and must
    ///   not be retried or ignored.
    pub fn decrease_key(&mut self, index: usize, key: K) -> Result<()> {
        let Some(&id) = self.slots.get(index) else {
            return Err(HeapError::InvalidSlot {
                index,
                len: self.slots.len(),
            });
        };
        let vertex = self.arena.vertex_mut(id);
        if key > vertex.key() {
            return Err(HeapError::PriorityNotDecreased);
        }
        vertex.set_key(key);
        self.sift_up(index);
        Ok(())
    }

    /// Lowers the key of vertex `id`, locating it through its back-reference.
    ///
    /// # Errors
    /// - `HeapError::NotEnqueued` if `id` is not in this heap
    /// - `HeapError::PriorityNotDecreased` as for [`decrease_key`](Self::decrease_key)
    pub fn decrease_key_vertex(&mut self, id: VertexId, key: K) -> Result<()> {
        let index = self.slot_of(id).ok_or(HeapError::NotEnqueued(id))?;
        self.decrease_key(index, key)
    }

    /// Returns the vertex with the smallest key, or `None` if empty
    pub fn peek_min(&self) -> Option<VertexId> {
        self.slots.first().copied()
    }

    /// Removes and returns the vertex with the smallest key, or `None` if
    /// empty.
    ///
    /// The returned vertex keeps its final key and loses its heap index, so
    /// it may be inserted again later.
    pub fn extract_min(&mut self) -> Option<VertexId> {
        if self.slots.is_empty() {
            return None;
        }

        // swap_remove moves the last slot into the root
        let min = self.slots.swap_remove(0);
        self.arena.vertex_mut(min).set_heap_index(None);

        if let Some(&root) = self.slots.first() {
            self.arena.vertex_mut(root).set_heap_index(Some(0));
            self.sift_down(0);
        }

        Some(min)
    }

    /// Empties the heap, clearing the back-reference of every vertex still
    /// enqueued. Keys are left as they are.
    pub fn clear(&mut self) {
        for id in self.slots.drain(..) {
            self.arena.vertex_mut(id).set_heap_index(None);
        }
    }

    /// Ends the episode: clears the heap and releases its storage
    pub fn dispose(self) {
        drop(self);
    }

    /// Verifies heap order, back-references, and the absence of duplicates.
    pub fn is_valid(&self) -> bool {
        self.slots.iter().enumerate().all(|(i, &id)| {
            let vertex = self.arena.vertex(id);
            let in_sync = vertex.heap_index() == Some(i);
            let ordered = i == 0 || vertex.key() >= self.key_at((i - 1) / self.d);
            in_sync && ordered
        }) && self.slots.len() <= self.capacity
    }

    fn key_at(&self, index: usize) -> K {
        self.arena.vertex(self.slots[index]).key()
    }

    /// Moves the element at `index` toward the root while its parent has a
    /// larger key.
    fn sift_up(&mut self, mut index: usize) {
        let id = self.slots[index];
        let key = self.arena.vertex(id).key();

        while index > 0 {
            let parent = (index - 1) / self.d;
            let parent_id = self.slots[parent];
            if self.arena.vertex(parent_id).key() <= key {
                break;
            }
            self.slots[index] = parent_id;
            self.arena.vertex_mut(parent_id).set_heap_index(Some(index));
            index = parent;
        }

        self.slots[index] = id;
        self.arena.vertex_mut(id).set_heap_index(Some(index));
    }

    /// Moves the element at `index` toward the leaves while some child has a
    /// smaller key. Ties go to the first child scanned.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.slots.len();
        let id = self.slots[index];
        let key = self.arena.vertex(id).key();

        loop {
            let first = self.d * index + 1;
            if first >= len {
                break;
            }
            let last = (first + self.d).min(len);

            let mut smallest = first;
            let mut smallest_key = self.key_at(first);
            for child in first + 1..last {
                let child_key = self.key_at(child);
                if child_key < smallest_key {
                    smallest = child;
                    smallest_key = child_key;
                }
            }

            if smallest_key >= key {
                break;
            }
            let child_id = self.slots[smallest];
            self.slots[index] = child_id;
            self.arena.vertex_mut(child_id).set_heap_index(Some(index));
            index = smallest;
        }

        self.slots[index] = id;
        self.arena.vertex_mut(id).set_heap_index(Some(index));
    }
}

impl<K: Key, A: VertexArena<K>> Drop for DaryHeap<'_, K, A> {
    fn drop(&mut self) {
        trace!(
            "disposing d-ary heap (d = {}, {} vertices still enqueued)",
            self.d,
            self.slots.len()
        );
        self.clear();
    }
}

impl<K: Key, A: VertexArena<K>> std::fmt::Debug for DaryHeap<'_, K, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DaryHeap")
            .field("d", &self.d)
            .field("len", &self.slots.len())
            .field("capacity", &self.capacity)
            .field("slots", &self.slots)
            .finish()
    }
}
