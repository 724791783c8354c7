//! Exhaustive depth-first search for a one-peg finish.
//!
//! The search mutates a single board in place: for every candidate jump it
//! applies the jump, recurses, then undoes the jump whether or not the
//! recursion succeeded. No board is ever copied and no position is cached, so
//! positions reachable by different move orders are searched again.
//!
//! Candidates are tried in generation order (cells row-major, then left,
//! right, up, down) and the first winning line found is returned. It is not
//! necessarily the shortest.

use std::time::Instant;

use tracing::{debug, instrument, trace};

use crate::board::Board;

use super::solution::{Solution, SolutionStep};
use super::stats::SolverStats;

/// Backtracking solver.
///
/// Holds only statistics; the board being searched is borrowed mutably for
/// the duration of [`Solver::solve`], so nothing else can touch it between an
/// apply and its undo.
#[derive(Clone, Debug, Default)]
pub struct Solver {
    stats: SolverStats,
}

impl Solver {
    /// Create a new solver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics from the most recent solve.
    #[must_use]
    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    /// Search for a sequence of jumps that leaves at most one peg.
    ///
    /// Returns an empty solution if `board` is already won and `None` if no
    /// sequence works. `board` is identical to its input state on return.
    #[instrument(skip_all, fields(pegs = board.peg_count()))]
    pub fn solve(&mut self, board: &mut Board) -> Option<Solution> {
        let start = Instant::now();
        self.stats.reset();

        let mut path = Vec::with_capacity(board.peg_count());
        let found = self.search(board, &mut path, 0);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            found,
            nodes = self.stats.nodes_visited,
            dead_ends = self.stats.dead_ends,
            max_depth = self.stats.max_depth,
            time_us = self.stats.time_us,
            nodes_per_sec = self.stats.nodes_per_second(),
            "solve finished"
        );

        found.then(|| Solution::new(path))
    }

    /// Returns true if a win is reachable; `path` then holds the winning steps.
    fn search(&mut self, board: &mut Board, path: &mut Vec<SolutionStep>, depth: u32) -> bool {
        self.stats.nodes_visited += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if board.is_win() {
            trace!(depth, "win");
            return true;
        }

        let moves = board.all_moves();
        if moves.is_empty() {
            self.stats.dead_ends += 1;
            return false;
        }

        for mv in &moves {
            board.apply(mv);
            path.push(SolutionStep::from(mv));

            let solved = self.search(board, path, depth + 1);
            board.undo(mv);

            if solved {
                return true;
            }
            path.pop();
        }

        false
    }
}

/// Solve `board` with a fresh [`Solver`].
pub fn solve(board: &mut Board) -> Option<Solution> {
    Solver::new().solve(board)
}
