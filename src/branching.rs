//! Branching factor selection
//!
//! A d-ary heap trades decrease-key cost (tree height is about `log_d n`)
//! against extract-min cost (`d` comparisons per level). For grid search the
//! sweet spot sits near the graph's average out-degree, so `d` is the rounded
//! ratio of estimated directed edges to vertices.
//!
//! | Connectivity | Estimated edges            |
//! |--------------|----------------------------|
//! | Four         | `4v - 2(w + h)`            |
//! | Eight        | `8v - 6(w + h) + 4`        |
//!
//! The ratio is rounded half-up with integer arithmetic and clamped to at
//! least 2.
//!
//! # Example
//!
//! ```rust
//! use dary_grid_heap::branching::branching_factor;
//! use dary_grid_heap::grid::Connectivity;
//!
//! // 100 vertices, 360 directed edges
//! assert_eq!(branching_factor(10, 10, Connectivity::Four), 4);
//! ```

use crate::grid::{Connectivity, Rect};

/// Smallest branching factor a heap may use
pub const MIN_BRANCHING_FACTOR: usize = 2;

/// Estimated number of directed edges in a `width` x `height` grid
pub fn estimated_edges(width: usize, height: usize, connectivity: Connectivity) -> usize {
    let v = width * height;
    let perimeter = width + height;
    match connectivity {
        Connectivity::Four => (4 * v).saturating_sub(2 * perimeter),
        Connectivity::Eight => (8 * v + 4).saturating_sub(6 * perimeter),
    }
}

/// Computes the heap fan-out for a `width` x `height` grid
pub fn branching_factor(width: usize, height: usize, connectivity: Connectivity) -> usize {
    let v = width * height;
    if v == 0 {
        return MIN_BRANCHING_FACTOR;
    }
    let e = estimated_edges(width, height, connectivity);
    ((e + v / 2) / v).max(MIN_BRANCHING_FACTOR)
}

/// Computes the heap fan-out for the cells covered by `rect`
pub fn branching_factor_for_rect(rect: &Rect, connectivity: Connectivity) -> usize {
    branching_factor(rect.width(), rect.height(), connectivity)
}
