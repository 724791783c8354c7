//! A game in progress: the two-phase select/confirm protocol.
//!
//! The caller names cells with [`Game::play`]. The first click selects a peg
//! that has at least one legal jump; the second click either confirms one of
//! its destinations, deselects it (same cell again), or is rejected and the
//! selection stays. A move is applied in full during a single `play` call or
//! not at all.
//!
//! ```
//! use peg_solitaire::board::Board;
//! use peg_solitaire::game::{Game, PlayOutcome};
//!
//! let mut game = Game::new(Board::from_raw_rows(&[[1, 2, 0]]).unwrap());
//!
//! assert!(game.play(0, 0).is_success()); // select peg 1
//! assert!(matches!(game.play(0, 2), PlayOutcome::Moved(_)));
//! assert_eq!(game.move_count(), 1);
//! assert!(game.is_win());
//! ```

use tracing::{debug, instrument};

use super::config::GameConfig;
use super::history::MoveHistory;
use crate::board::{Board, Move, MoveList};
use crate::core::{Coord, ShapeError};
use crate::shapes::{BoardShape, ShapeRegistry};
use crate::solver::{Solution, Solver};

/// Selection state of the interaction protocol.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// No peg selected.
    #[default]
    Idle,
    /// A peg is selected and its legal moves are pending.
    ///
    /// `pending` is never empty: pegs without moves cannot be selected.
    Selected { at: Coord, pending: MoveList },
}

/// Why a `play` call changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The game is already over.
    GameOver,
    /// Out of range or off-board.
    InvalidSpace,
    /// Nothing selected and the cell holds no peg that can move.
    NoMovablePeg,
    /// A peg is selected and the cell is neither it nor one of its destinations.
    NotADestination,
}

/// Result of a single `play` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// A peg was selected.
    Selected(Coord),
    /// The selected peg was clicked again and released.
    Deselected,
    /// A pending move was confirmed and applied.
    Moved(Move),
    /// Nothing changed.
    Rejected(Rejection),
}

impl PlayOutcome {
    /// True for every outcome except `Rejected`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        !matches!(self, PlayOutcome::Rejected(_))
    }
}

/// A live game: board, selection, move count and undo history.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    initial: Board,
    selection: Selection,
    move_count: usize,
    history: MoveHistory,
}

impl Game {
    /// Start a game on `board`. Reset returns to this position.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            initial: board.clone(),
            board,
            selection: Selection::Idle,
            move_count: 0,
            history: MoveHistory::new(),
        }
    }

    /// Start a game on a built-in shape.
    pub fn from_shape(shape: BoardShape) -> Result<Self, ShapeError> {
        Ok(Self::new(shape.build()?))
    }

    /// Start a game from a configuration, resolving named shapes against `registry`.
    pub fn from_config(config: &GameConfig, registry: &ShapeRegistry) -> Result<Self, ShapeError> {
        Ok(Self::new(config.build_board(registry)?))
    }

    // === Queries ===

    /// The live board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current selection state.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Coordinate of the selected peg, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Coord> {
        match &self.selection {
            Selection::Idle => None,
            Selection::Selected { at, .. } => Some(*at),
        }
    }

    /// Moves pending for the selected peg. Empty when idle.
    #[must_use]
    pub fn pending_moves(&self) -> &[Move] {
        match &self.selection {
            Selection::Idle => &[],
            Selection::Selected { pending, .. } => pending,
        }
    }

    /// Number of confirmed moves not since undone.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Confirmed moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// See [`Board::is_win`].
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.board.is_win()
    }

    /// See [`Board::is_game_over`].
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Check if there is a confirmed move to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.move_count > 0
    }

    /// Check if any move has been confirmed since the start.
    #[must_use]
    pub fn can_reset(&self) -> bool {
        self.move_count > 0
    }

    // === Play ===

    /// Name a cell. Selects, deselects, confirms a move, or is rejected.
    ///
    /// Rejected calls leave the game untouched.
    #[instrument(skip(self), fields(move_count = self.move_count))]
    pub fn play(&mut self, row: i64, col: i64) -> PlayOutcome {
        if self.board.is_game_over() {
            return PlayOutcome::Rejected(Rejection::GameOver);
        }
        let Some(coord) = Coord::from_signed(row, col).filter(|_| self.board.is_valid_space(row, col))
        else {
            return PlayOutcome::Rejected(Rejection::InvalidSpace);
        };

        let outcome = match &self.selection {
            Selection::Idle => self.select(coord),
            Selection::Selected { at, .. } if *at == coord => {
                self.selection = Selection::Idle;
                PlayOutcome::Deselected
            }
            Selection::Selected { pending, .. } => {
                let target = pending.iter().find(|mv| mv.to == coord).copied();
                match target {
                    Some(mv) => self.confirm(mv),
                    None => PlayOutcome::Rejected(Rejection::NotADestination),
                }
            }
        };

        debug!(?outcome, "play");
        outcome
    }

    fn select(&mut self, coord: Coord) -> PlayOutcome {
        let pending = self.board.available_moves(coord);
        if pending.is_empty() {
            return PlayOutcome::Rejected(Rejection::NoMovablePeg);
        }
        self.selection = Selection::Selected { at: coord, pending };
        PlayOutcome::Selected(coord)
    }

    fn confirm(&mut self, mv: Move) -> PlayOutcome {
        let pending = match std::mem::take(&mut self.selection) {
            Selection::Selected { pending, .. } => pending,
            Selection::Idle => MoveList::new(),
        };

        self.board.apply(&mv);
        self.history.push(mv, pending);
        self.move_count += 1;

        PlayOutcome::Moved(mv)
    }

    // === Undo / Reset ===

    /// Take back the last confirmed move.
    ///
    /// The peg that made the move is selected again with the destinations it
    /// had before. Any selection in progress is discarded. Returns `None` when
    /// there is nothing to undo.
    #[instrument(skip(self), fields(move_count = self.move_count))]
    pub fn undo(&mut self) -> Option<Move> {
        let entry = self.history.pop()?;

        self.board.undo(&entry.mv);
        self.move_count -= 1;
        self.selection = Selection::Selected {
            at: entry.mv.from,
            pending: entry.pending,
        };

        debug!(mv = %entry.mv, "undo");
        Some(entry.mv)
    }

    /// Throw the current board away and start over from the starting board.
    #[instrument(skip(self), fields(move_count = self.move_count))]
    pub fn reset(&mut self) {
        self.board = self.initial.clone();
        self.selection = Selection::Idle;
        self.move_count = 0;
        self.history.clear();
        debug!("reset");
    }

    // === Solve ===

    /// Search for a winning continuation from the current position.
    ///
    /// The board is explored in place and is identical on return; the
    /// selection is left as it was.
    pub fn solve(&mut self) -> Option<Solution> {
        Solver::new().solve(&mut self.board)
    }
}
