//! Core value types: cells, peg ids, coordinates, directions, errors.
//!
//! These are the leaf types every other module builds on. They carry no game
//! rules of their own.

pub mod cell;
pub mod coord;
pub mod error;

pub use cell::{Cell, PegId};
pub use coord::{Coord, Direction};
pub use error::ShapeError;
