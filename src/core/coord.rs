//! Board coordinates and jump directions.

use serde::{Deserialize, Serialize};

/// A `(row, col)` position on a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Convert signed input (e.g. from a click handler) into a coordinate.
    ///
    /// Returns `None` for negative components.
    #[must_use]
    pub fn from_signed(row: i64, col: i64) -> Option<Self> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        Some(Self { row, col })
    }

    /// Step `distance` cells in `direction`.
    ///
    /// Returns `None` if the step would leave the non-negative quadrant.
    /// The upper bounds are the board's concern.
    #[must_use]
    pub fn step(self, direction: Direction, distance: usize) -> Option<Self> {
        let (dr, dc) = direction.offset();
        let row = offset_by(self.row, dr, distance)?;
        let col = offset_by(self.col, dc, distance)?;
        Some(Self { row, col })
    }

    /// The cell exactly halfway between `self` and `other`.
    #[must_use]
    pub const fn midpoint(self, other: Coord) -> Coord {
        Coord {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

fn offset_by(value: usize, delta: isize, distance: usize) -> Option<usize> {
    match delta {
        0 => Some(value),
        d if d < 0 => value.checked_sub(distance),
        _ => value.checked_add(distance),
    }
}

/// One of the four axis directions a peg can jump in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions in move generation order.
    ///
    /// The order is part of the engine's contract: solver output and
    /// `available_moves` results depend on it.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit `(row, col)` offset of this direction.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }
}
