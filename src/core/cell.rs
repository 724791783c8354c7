//! Cell values and peg identity.
//!
//! Every cell of a board is in exactly one of three states:
//! - `OffBoard`: not part of the board shape
//! - `Empty`: a playable hole
//! - `Peg(PegId)`: an occupied hole
//!
//! ## Raw Encoding
//!
//! At the edges of the engine (fixtures, snapshots for presentation) cells are
//! exchanged as plain integers:
//! - negative: off-board (`-1` canonically)
//! - `0`: empty
//! - positive: the peg's id
//!
//! ```
//! use peg_solitaire::core::{Cell, PegId};
//!
//! assert_eq!(Cell::from_raw(-1), Cell::OffBoard);
//! assert_eq!(Cell::from_raw(0), Cell::Empty);
//! assert_eq!(Cell::from_raw(7), Cell::Peg(PegId::new(7)));
//! assert_eq!(Cell::Peg(PegId::new(7)).raw(), 7);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ShapeError;

/// Unique identifier of a peg.
///
/// Ids are assigned once at board construction, in row-major order starting
/// at 1, and a peg keeps its id when it jumps. Ids lie in `1..=i32::MAX` so
/// every peg has a positive raw cell value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32")]
pub struct PegId(u32);

impl PegId {
    /// The first id handed out when numbering a board.
    pub const FIRST: PegId = PegId(1);

    /// The largest id a raw cell value can carry.
    pub const MAX: PegId = PegId(i32::MAX as u32);

    /// Create a new peg ID.
    ///
    /// Panics if `id` is 0 or above [`PegId::MAX`].
    #[must_use]
    pub const fn new(id: u32) -> Self {
        assert!(id >= 1 && id <= Self::MAX.0, "peg id out of range");
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id following this one in numbering order.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::new(self.0 + 1)
    }
}

impl TryFrom<u32> for PegId {
    type Error = ShapeError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        if id >= 1 && id <= Self::MAX.0 {
            Ok(Self(id))
        } else {
            Err(ShapeError::PegIdOutOfRange(id))
        }
    }
}

impl std::fmt::Display for PegId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Not part of the board shape. Never playable.
    #[default]
    OffBoard,
    /// A hole without a peg.
    Empty,
    /// A hole holding the given peg.
    Peg(PegId),
}

impl Cell {
    /// Raw value used for off-board cells.
    pub const RAW_OFF_BOARD: i32 = -1;

    /// Raw value used for empty cells.
    pub const RAW_EMPTY: i32 = 0;

    /// Decode a raw integer cell value.
    ///
    /// Any negative value is treated as off-board.
    #[must_use]
    pub const fn from_raw(value: i32) -> Self {
        if value < 0 {
            Cell::OffBoard
        } else if value == 0 {
            Cell::Empty
        } else {
            Cell::Peg(PegId(value as u32))
        }
    }

    /// Encode as a raw integer cell value.
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Cell::OffBoard => Self::RAW_OFF_BOARD,
            Cell::Empty => Self::RAW_EMPTY,
            // Ids never exceed `PegId::MAX`, so the cast is lossless.
            Cell::Peg(id) => id.0 as i32,
        }
    }

    /// The peg in this cell, if any.
    #[must_use]
    pub const fn peg(self) -> Option<PegId> {
        match self {
            Cell::Peg(id) => Some(id),
            _ => None,
        }
    }

    /// Check if this cell holds a peg.
    #[must_use]
    pub const fn is_peg(self) -> bool {
        matches!(self, Cell::Peg(_))
    }

    /// Check if this cell is an empty hole.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Check if this cell is part of the board (empty or occupied).
    #[must_use]
    pub const fn is_playable(self) -> bool {
        !matches!(self, Cell::OffBoard)
    }
}

impl From<PegId> for Cell {
    fn from(id: PegId) -> Self {
        Cell::Peg(id)
    }
}
