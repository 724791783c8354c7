//! # peg-solitaire
//!
//! Game engine for peg (marble) solitaire: a grid of holes, most holding a
//! numbered peg. A peg jumps over an orthogonal neighbour into the empty hole
//! beyond, and the jumped peg is removed. The goal is to finish with one peg.
//!
//! ## Architecture
//!
//! - **Stable peg identity**: pegs are numbered once at construction and keep
//!   their id when they jump. Every `Move` carries both ids, so undoing a move
//!   needs nothing but the move itself.
//!
//! - **In-place search**: the solver applies a jump, recurses, and undoes the
//!   jump on one shared board. No board copies, no caching.
//!
//! - **Two-phase play**: `Game::play` is a single entry point for "pick a peg"
//!   and "pick a destination". A move is applied fully within one call or not
//!   at all.
//!
//! ## Modules
//!
//! - `core`: cells, peg ids, coordinates, directions, errors
//! - `board`: the grid, move generation, apply/undo
//! - `shapes`: board templates, built-in shapes, shape registry
//! - `game`: configuration, select/confirm protocol, undo history
//! - `solver`: exhaustive depth-first search
//!
//! ## Example
//!
//! ```
//! use peg_solitaire::{BoardShape, Game, Solution};
//!
//! let mut game = Game::from_shape(BoardShape::Test).unwrap();
//! let solution = game.solve();
//!
//! assert_eq!(Solution::describe(solution.as_ref()), "1 => 2\n3 => 4\n3 => 1");
//! ```

pub mod board;
pub mod core;
pub mod game;
pub mod shapes;
pub mod solver;

// Re-export commonly used types
pub use crate::core::{Cell, Coord, Direction, PegId, ShapeError};

pub use crate::board::{Board, Move, MoveList};

pub use crate::shapes::{parse_template, BoardShape, ShapeRegistry, ShapeTemplate};

pub use crate::game::{
    Game, GameConfig, HistoryEntry, MoveHistory, PlayOutcome, Rejection, Selection,
    StartingShape,
};

pub use crate::solver::{solve, Solution, SolutionStep, Solver, SolverStats, NO_RESULT};
