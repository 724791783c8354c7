//! Confirmed-move history for user-facing undo.
//!
//! Each entry records the move and the pending-move list that was on offer
//! when it was confirmed, so undo can put the player back exactly where they
//! were: same peg selected, same destinations highlighted.

use serde::{Deserialize, Serialize};

use crate::board::{Move, MoveList};

/// A confirmed move and the selection it was made from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The applied move. `mv.from` was the selected peg.
    pub mv: Move,

    /// Moves pending for the selected peg right before confirmation.
    pub pending: MoveList,
}

/// Stack of confirmed moves, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    entries: Vec<HistoryEntry>,
}

impl MoveHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a confirmed move.
    pub fn push(&mut self, mv: Move, pending: MoveList) {
        self.entries.push(HistoryEntry { mv, pending });
    }

    /// Remove and return the most recent entry.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    /// Number of recorded moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no moves are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every recorded move.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
