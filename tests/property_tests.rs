//! Property tests over randomly generated boards.
//!
//! Boards are small rectangles of off-board holes, empty holes and pegs, with
//! pegs numbered row-major from 1 the same way templates number them.

use std::collections::HashSet;

use peg_solitaire::{solve, Board, Game, PlayOutcome, Selection};
use proptest::prelude::*;

/// Random raw rows up to `max_rows` x `max_cols`, biased towards pegs.
fn raw_board(max_rows: usize, max_cols: usize) -> impl Strategy<Value = Vec<Vec<i32>>> {
    (1..=max_rows, 1..=max_cols)
        .prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec(0u8..4, cols), rows)
        })
        .prop_map(|codes: Vec<Vec<u8>>| -> Vec<Vec<i32>> {
            let mut next_id = 0;
            codes
                .into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|code| match code {
                            0 => -1,
                            1 => 0,
                            _ => {
                                next_id += 1;
                                next_id
                            }
                        })
                        .collect()
                })
                .collect()
        })
}

fn mirror(rows: &[Vec<i32>]) -> Vec<Vec<i32>> {
    rows.iter()
        .map(|row| row.iter().rev().copied().collect())
        .collect()
}

fn transpose(rows: &[Vec<i32>]) -> Vec<Vec<i32>> {
    (0..rows[0].len())
        .map(|col| rows.iter().map(|row| row[col]).collect())
        .collect()
}

/// Memoised reachability check, independent of the solver's search.
fn can_win(board: &Board, seen: &mut HashSet<Board>) -> bool {
    if board.is_win() {
        return true;
    }
    if !seen.insert(board.clone()) {
        return false;
    }
    board.all_moves().iter().any(|mv| {
        let mut next = board.clone();
        next.apply(mv);
        can_win(&next, seen)
    })
}

proptest! {
    #[test]
    fn apply_then_undo_restores_board(raw in raw_board(5, 5)) {
        let original = Board::from_raw_rows(&raw).unwrap();

        for mv in original.all_moves() {
            let mut board = original.clone();
            board.apply(&mv);

            prop_assert_eq!(board.peg_count(), original.peg_count() - 1);
            prop_assert!(board.get(mv.from).is_empty());
            prop_assert!(board.get(mv.over).is_empty());
            prop_assert_eq!(board.get(mv.to).peg(), Some(mv.from_id));

            board.undo(&mv);
            prop_assert_eq!(&board, &original);
        }
    }

    #[test]
    fn generated_moves_are_legal(raw in raw_board(5, 5)) {
        let board = Board::from_raw_rows(&raw).unwrap();

        for mv in board.all_moves() {
            prop_assert_eq!(board.get(mv.from).peg(), Some(mv.from_id));
            prop_assert_eq!(board.get(mv.over).peg(), Some(mv.over_id));
            prop_assert!(board.get(mv.to).is_empty());
            prop_assert_eq!(mv.from.midpoint(mv.to), mv.over);
            prop_assert!(board.available_moves(mv.from).contains(&mv));
        }
        prop_assert_eq!(board.is_game_over(), board.is_win() || board.legal_move_count() == 0);
    }

    #[test]
    fn move_count_is_symmetric(raw in raw_board(5, 5)) {
        let board = Board::from_raw_rows(&raw).unwrap();
        let mirrored = Board::from_raw_rows(&mirror(&raw)).unwrap();
        let transposed = Board::from_raw_rows(&transpose(&raw)).unwrap();

        prop_assert_eq!(board.legal_move_count(), mirrored.legal_move_count());
        prop_assert_eq!(board.legal_move_count(), transposed.legal_move_count());
    }

    #[test]
    fn solver_agrees_with_reachability(raw in raw_board(3, 3)) {
        let mut board = Board::from_raw_rows(&raw).unwrap();
        let original = board.clone();

        let solution = solve(&mut board);
        prop_assert_eq!(&board, &original);
        prop_assert_eq!(solution.is_some(), can_win(&original, &mut HashSet::new()));

        if let Some(solution) = solution {
            let end = solution.replay(&original);
            prop_assert!(end.is_some());
            prop_assert!(end.unwrap().is_win());
        }
    }

    #[test]
    fn random_clicks_keep_game_consistent(
        raw in raw_board(4, 4),
        clicks in prop::collection::vec((-1i64..5, -1i64..5), 0..40),
    ) {
        let mut game = Game::new(Board::from_raw_rows(&raw).unwrap());
        let initial_pegs = game.board().peg_count();

        for (row, col) in clicks {
            let board_before = game.board().clone();
            let selection_before = game.selection().clone();

            let outcome = game.play(row, col);
            if let PlayOutcome::Rejected(_) = outcome {
                prop_assert_eq!(game.board(), &board_before);
                prop_assert_eq!(game.selection(), &selection_before);
            }

            prop_assert_eq!(game.move_count(), game.history().len());
            prop_assert_eq!(game.board().peg_count() + game.move_count(), initial_pegs);
            if let Selection::Selected { at, pending } = game.selection() {
                prop_assert!(!pending.is_empty());
                prop_assert!(pending.iter().all(|mv| mv.from == *at));
            }
        }

        while game.undo().is_some() {}
        prop_assert_eq!(game.board(), &Board::from_raw_rows(&raw).unwrap());
    }
}
