//! Heap construction settings
//!
//! Both builders take a [`HeapConfig`] explicitly. It deserializes with serde
//! so the host application can keep it in whatever config file it already
//! loads.
//!
//! ```rust
//! use dary_grid_heap::config::HeapConfig;
//! use dary_grid_heap::grid::Connectivity;
//!
//! let config = HeapConfig::new()
//!     .with_connectivity(Connectivity::Eight)
//!     .with_branching_factor(3);
//! assert_eq!(config.resolve_branching_factor(10, 10).unwrap(), 3);
//! ```

use crate::branching::{branching_factor, MIN_BRANCHING_FACTOR};
use crate::error::{HeapError, Result};
use crate::grid::Connectivity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeapConfig {
    /// Grid adjacency, used only to estimate the edge count
    pub connectivity: Connectivity,
    /// Fixed fan-out; `None` derives it from the grid dimensions
    pub branching_factor: Option<usize>,
}

impl HeapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    pub fn with_branching_factor(mut self, d: usize) -> Self {
        self.branching_factor = Some(d);
        self
    }

    /// Returns the fan-out for a heap over `width` x `height` cells.
    ///
    /// # Errors
    /// Returns `HeapError::InvalidBranchingFactor` if the configured override
    /// is below 2.
    pub fn resolve_branching_factor(&self, width: usize, height: usize) -> Result<usize> {
        match self.branching_factor {
            Some(d) if d < MIN_BRANCHING_FACTOR => Err(HeapError::InvalidBranchingFactor(d)),
            Some(d) => Ok(d),
            None => Ok(branching_factor(width, height, self.connectivity)),
        }
    }
}
