//! Winning move sequences.
//!
//! A [`Solution`] is an ordered list of `(from_id, over_id)` steps in play
//! order. Peg ids survive jumps, so a solution stays meaningful however the
//! board is later rendered.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Move};
use crate::core::PegId;

/// Text shown when a position has no solution.
pub const NO_RESULT: &str = "No result";

/// One step of a solution: peg `from_id` jumps over peg `over_id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SolutionStep {
    pub from_id: PegId,
    pub over_id: PegId,
}

impl SolutionStep {
    /// Create a new step.
    #[must_use]
    pub const fn new(from_id: PegId, over_id: PegId) -> Self {
        Self { from_id, over_id }
    }
}

impl From<&Move> for SolutionStep {
    fn from(mv: &Move) -> Self {
        Self::new(mv.from_id, mv.over_id)
    }
}

impl std::fmt::Display for SolutionStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} => {}", self.from_id, self.over_id)
    }
}

/// Ordered sequence of steps that reduces a board to one peg.
///
/// Empty when the position was already won.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    steps: Vec<SolutionStep>,
}

impl Solution {
    /// Wrap a list of steps.
    #[must_use]
    pub fn new(steps: Vec<SolutionStep>) -> Self {
        Self { steps }
    }

    /// Steps in play order.
    #[must_use]
    pub fn steps(&self) -> &[SolutionStep] {
        &self.steps
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the position needed no moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps as raw `(from_id, over_id)` pairs.
    #[must_use]
    pub fn pairs(&self) -> Vec<(u32, u32)> {
        self.steps
            .iter()
            .map(|s| (s.from_id.raw(), s.over_id.raw()))
            .collect()
    }

    /// Play the steps on a copy of `board`.
    ///
    /// Returns the final position, or `None` if some step is not a legal jump
    /// at the point it is played.
    #[must_use]
    pub fn replay(&self, board: &Board) -> Option<Board> {
        let mut board = board.clone();
        for step in &self.steps {
            let mv = board.move_for_ids(step.from_id, step.over_id)?;
            board.apply(&mv);
        }
        Some(board)
    }

    /// Render a solve result: the steps one per line, or [`NO_RESULT`].
    #[must_use]
    pub fn describe(outcome: Option<&Solution>) -> String {
        match outcome {
            Some(solution) => solution.to_string(),
            None => NO_RESULT.to_string(),
        }
    }
}

/// One `from => over` line per step.
impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}

impl IntoIterator for Solution {
    type Item = SolutionStep;
    type IntoIter = std::vec::IntoIter<SolutionStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}
