//! Board model and move generation.
//!
//! - `grid`: the `Board` itself, cell access, termination queries
//! - `moves`: `Move`, legal-jump generation, apply/undo

pub mod grid;
pub mod moves;

pub use grid::Board;
pub use moves::{Move, MoveList};
