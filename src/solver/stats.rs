//! Solver statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected during a single solve.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverStats {
    /// Positions entered by the search, including the root.
    pub nodes_visited: u64,

    /// Positions with no legal jump and more than one peg.
    pub dead_ends: u64,

    /// Deepest move depth reached.
    pub max_depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SolverStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate positions visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
