//! Backtracking solver.
//!
//! - `search`: the depth-first apply/recurse/undo search
//! - `solution`: winning move sequences and their text form
//! - `stats`: per-solve diagnostics

pub mod search;
pub mod solution;
pub mod stats;

pub use search::{solve, Solver};
pub use solution::{Solution, SolutionStep, NO_RESULT};
pub use stats::SolverStats;
