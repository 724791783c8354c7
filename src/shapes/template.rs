//! Textual board templates.
//!
//! A template is one line per row of whitespace-separated tokens:
//! - `-`: off-board
//! - `x`: empty hole
//! - anything else: a peg
//!
//! Pegs are numbered 1, 2, 3, … in row-major order as they are read, so the
//! token text itself carries no meaning beyond "peg". Blank lines and
//! indentation are ignored.
//!
//! ```
//! use peg_solitaire::shapes::parse_template;
//!
//! let board = parse_template("
//!     - a -
//!     b x c
//!     - d -
//! ").unwrap();
//!
//! assert_eq!(board.to_raw_rows(), vec![
//!     vec![-1, 1, -1],
//!     vec![2, 0, 3],
//!     vec![-1, 4, -1],
//! ]);
//! ```

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Cell, PegId, ShapeError};

/// Token marking an off-board cell.
pub const OFF_BOARD_TOKEN: &str = "-";

/// Token marking an empty hole.
pub const EMPTY_TOKEN: &str = "x";

/// A named board template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeTemplate {
    /// Name the template is registered under.
    pub name: String,

    /// Template text.
    pub text: String,
}

impl ShapeTemplate {
    /// Create a new template.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Build a freshly numbered board from this template.
    pub fn build(&self) -> Result<Board, ShapeError> {
        parse_template(&self.text)
    }
}

/// Parse template text into a board with pegs numbered from 1.
pub fn parse_template(text: &str) -> Result<Board, ShapeError> {
    let mut next_id = PegId::FIRST;

    let rows: Vec<Vec<Cell>> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.split_whitespace()
                .map(|token| match token {
                    OFF_BOARD_TOKEN => Cell::OffBoard,
                    EMPTY_TOKEN => Cell::Empty,
                    _ => {
                        let id = next_id;
                        next_id = id.next();
                        Cell::Peg(id)
                    }
                })
                .collect()
        })
        .collect();

    Board::from_cells(rows)
}
