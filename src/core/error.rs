//! Construction-time errors.
//!
//! Playing on a board never fails with an error: rejected clicks are a normal
//! `PlayOutcome` and an unsolvable position is `None`. Errors only arise while
//! building a board from a shape description or from serialized data, where
//! they indicate a programmer or configuration mistake.

use thiserror::Error;

/// Failure to build a board from a shape description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// No shape is registered under this name.
    #[error("unknown board shape: {0:?}")]
    UnknownShape(String),

    /// The template contains no rows.
    #[error("board template is empty")]
    EmptyTemplate,

    /// A row's width differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Stored grid dimensions disagree with the number of cells.
    #[error("grid needs {expected} cells, found {found}")]
    CellCount { expected: usize, found: usize },

    /// Peg id outside `1..=i32::MAX`.
    #[error("peg id {0} is out of range")]
    PegIdOutOfRange(u32),
}
