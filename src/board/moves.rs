//! Jump moves: generation, application and exact reversal.
//!
//! A jump takes a peg at `from` over an adjacent peg at `over` into the empty
//! cell `to` two steps away on the same axis. The jumped peg is removed.
//!
//! ## Generation Order
//!
//! For a single cell, moves are emitted left, right, up, down. Across the
//! board, cells are visited row-major. The solver depends on this order to
//! produce deterministic output.
//!
//! ## Reversibility
//!
//! Each [`Move`] carries both peg ids, so [`Board::undo`] is a pure function of
//! the move value: `undo(m)` after `apply(m)` restores the grid bit for bit.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::grid::Board;
use crate::core::{Cell, Coord, Direction, PegId};

/// Moves available from a single cell. At most one per direction.
pub type MoveList = SmallVec<[Move; 4]>;

/// A single jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Cell of the jumping peg.
    pub from: Coord,
    /// Cell of the jumped peg. Always the midpoint of `from` and `to`.
    pub over: Coord,
    /// Destination cell. Empty before the move.
    pub to: Coord,
    /// Id of the jumping peg.
    pub from_id: PegId,
    /// Id of the removed peg.
    pub over_id: PegId,
}

impl Move {
    /// Direction of travel.
    #[must_use]
    pub fn direction(&self) -> Direction {
        if self.to.row == self.from.row {
            if self.to.col < self.from.col {
                Direction::Left
            } else {
                Direction::Right
            }
        } else if self.to.row < self.from.row {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} -> {} over {} {}",
            self.from_id, self.from, self.to, self.over_id, self.over
        )
    }
}

impl Board {
    /// Legal jumps for the peg at `coord`, in left, right, up, down order.
    ///
    /// Empty if the cell holds no peg.
    #[must_use]
    pub fn available_moves(&self, coord: Coord) -> MoveList {
        let mut moves = MoveList::new();

        let Some(from_id) = self.get(coord).peg() else {
            return moves;
        };

        for direction in Direction::ALL {
            if let Some(mv) = self.jump(coord, from_id, direction) {
                moves.push(mv);
            }
        }

        moves
    }

    /// All legal jumps on the board, cells row-major, then per-cell order.
    #[must_use]
    pub fn all_moves(&self) -> Vec<Move> {
        self.coords().flat_map(|c| self.available_moves(c)).collect()
    }

    /// Total number of legal jumps on the board.
    #[must_use]
    pub fn legal_move_count(&self) -> usize {
        self.coords().map(|c| self.available_moves(c).len()).sum()
    }

    /// The legal jump of peg `from_id` over peg `over_id`, if there is one.
    #[must_use]
    pub fn move_for_ids(&self, from_id: PegId, over_id: PegId) -> Option<Move> {
        let from = self.find_peg(from_id)?;
        self.available_moves(from)
            .into_iter()
            .find(|mv| mv.over_id == over_id)
    }

    /// Apply a jump: `from` and `over` become empty, `to` receives the jumping peg.
    ///
    /// `mv` must have been generated against the current position.
    pub fn apply(&mut self, mv: &Move) {
        debug_assert_eq!(self.get(mv.from), Cell::Peg(mv.from_id));
        debug_assert_eq!(self.get(mv.over), Cell::Peg(mv.over_id));
        debug_assert!(self.get(mv.to).is_empty());

        self.set(mv.from, Cell::Empty);
        self.set(mv.over, Cell::Empty);
        self.set(mv.to, Cell::Peg(mv.from_id));
    }

    /// Exact inverse of [`Board::apply`] for the same move.
    pub fn undo(&mut self, mv: &Move) {
        debug_assert_eq!(self.get(mv.to), Cell::Peg(mv.from_id));

        self.set(mv.from, Cell::Peg(mv.from_id));
        self.set(mv.over, Cell::Peg(mv.over_id));
        self.set(mv.to, Cell::Empty);
    }

    fn jump(&self, from: Coord, from_id: PegId, direction: Direction) -> Option<Move> {
        let over = from.step(direction, 1)?;
        let to = from.step(direction, 2)?;

        let over_id = self.get(over).peg()?;
        if !self.get(to).is_empty() {
            return None;
        }

        Some(Move {
            from,
            over,
            to,
            from_id,
            over_id,
        })
    }
}
