//! The board grid.
//!
//! A `Board` is a rectangular grid of [`Cell`]s stored row-major. It knows
//! nothing about selection or history; those live in [`crate::game`]. Move
//! generation and apply/undo are in [`super::moves`].
//!
//! ## Example
//!
//! ```
//! use peg_solitaire::board::Board;
//! use peg_solitaire::core::Coord;
//!
//! let board = Board::from_raw_rows(&[[1, 2, 0]]).unwrap();
//!
//! assert_eq!(board.peg_count(), 2);
//! assert!(!board.is_win());
//! assert_eq!(board.available_moves(Coord::new(0, 0)).len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Coord, PegId, ShapeError};

/// Rectangular grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardData")]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

/// Serialized form of a [`Board`], checked before it becomes one.
#[derive(Deserialize)]
struct BoardData {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl TryFrom<BoardData> for Board {
    type Error = ShapeError;

    fn try_from(data: BoardData) -> Result<Self, Self::Error> {
        let BoardData { rows, cols, cells } = data;
        if rows == 0 || cols == 0 {
            return Err(ShapeError::EmptyTemplate);
        }
        let expected = rows.saturating_mul(cols);
        if cells.len() != expected {
            return Err(ShapeError::CellCount {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }
}

impl Board {
    /// Build a board from rows of cells.
    ///
    /// All rows must have the width of the first row, and that width must
    /// not be zero.
    pub fn from_cells(rows: Vec<Vec<Cell>>) -> Result<Self, ShapeError> {
        let expected = rows
            .first()
            .map(Vec::len)
            .filter(|&width| width > 0)
            .ok_or(ShapeError::EmptyTemplate)?;
        let row_count = rows.len();

        let mut cells = Vec::with_capacity(row_count * expected);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != expected {
                return Err(ShapeError::RaggedRow {
                    row,
                    expected,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Self {
            rows: row_count,
            cols: expected,
            cells,
        })
    }

    /// Build a board from raw integer rows (`-1` off-board, `0` empty, `n > 0` peg `n`).
    ///
    /// Ids are taken as given; the caller is responsible for keeping them
    /// unique.
    pub fn from_raw_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, ShapeError> {
        Self::from_cells(
            rows.iter()
                .map(|row| row.as_ref().iter().copied().map(Cell::from_raw).collect())
                .collect(),
        )
    }

    /// Snapshot the grid as raw integer rows.
    #[must_use]
    pub fn to_raw_rows(&self) -> Vec<Vec<i32>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|c| c.raw()).collect())
            .collect()
    }

    // === Dimensions ===

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row extent of the board. Boards are square in practice.
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows
    }

    /// Check if a coordinate lies inside the grid.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Iterate over every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Coord::new(row, col)))
    }

    // === Cells ===

    /// Get the cell at `coord`. Coordinates outside the grid read as off-board.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Cell {
        if self.contains(coord) {
            self.cells[self.index(coord)]
        } else {
            Cell::OffBoard
        }
    }

    /// Overwrite the cell at `coord`.
    ///
    /// Panics if `coord` is outside the grid.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        assert!(self.contains(coord), "{} is outside the {}x{} grid", coord, self.rows, self.cols);
        let idx = self.index(coord);
        self.cells[idx] = cell;
    }

    /// Check that `(row, col)` is inside the grid and part of the board shape.
    ///
    /// Accepts signed input so negative coordinates are rejected rather than wrapped.
    #[must_use]
    pub fn is_valid_space(&self, row: i64, col: i64) -> bool {
        Coord::from_signed(row, col).is_some_and(|c| self.get(c).is_playable())
    }

    /// Coordinate of the cell currently holding peg `id`.
    #[must_use]
    pub fn find_peg(&self, id: PegId) -> Option<Coord> {
        self.cells
            .iter()
            .position(|&c| c == Cell::Peg(id))
            .map(|idx| Coord::new(idx / self.cols, idx % self.cols))
    }

    // === Termination ===

    /// Number of cells holding a peg.
    #[must_use]
    pub fn peg_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_peg()).count()
    }

    /// True when at most one peg remains.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.peg_count() <= 1
    }

    /// True when the game is won or no legal jump exists anywhere.
    ///
    /// Scans the whole board on every call.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.is_win() || self.legal_move_count() == 0
    }

    #[inline]
    fn index(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }
}

/// Renders the board in template notation: `-` off-board, `x` empty, `o` peg.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line: Vec<&str> = row
                .iter()
                .map(|c| match c {
                    Cell::OffBoard => "-",
                    Cell::Empty => "x",
                    Cell::Peg(_) => "o",
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
