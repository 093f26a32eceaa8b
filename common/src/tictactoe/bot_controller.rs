use std::time::Instant;

use crate::debug_log;
use super::board::{Board, NO_ONE_WON};
use super::types::{Mark, Outcome, Position};

/// Recursion cutoff. Unresolved positions below it score as a draw.
pub const MAX_SEARCH_DEPTH: usize = 50;

const SCORE_BOUND: i32 = 999_999;

/// A candidate board after the computer's move, with its minimax score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub board: Board,
    pub position: Position,
    pub score: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Minimax with alpha-beta pruning. X maximizes, O minimizes.
///
/// Full-depth search is exponential in the number of empty cells, so it is
/// only practical on small boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEngine {
    max_depth: usize,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::with_max_depth(MAX_SEARCH_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Scores `board` with `to_move` about to play. The board is handed back
    /// unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `to_move` is `Mark::Empty`.
    pub fn evaluate(&self, board: &mut Board, to_move: Mark, depth: usize, alpha: i32, beta: i32) -> i32 {
        let Some(opponent) = to_move.opponent() else {
            panic!("evaluate requires X or O to move, got {:?}", to_move);
        };
        let mut stats = SearchStats::default();
        self.search(board, to_move, opponent, depth, alpha, beta, &mut stats)
    }

    /// Picks the computer's move: the first candidate in row-major order with
    /// the lowest score for O or the highest score for X.
    ///
    /// # Panics
    ///
    /// Panics if the game is already decided or `computer` is `Mark::Empty`.
    /// The turn loop must check the outcome before asking for a move.
    pub fn choose_move(&self, board: &Board, computer: Mark) -> SearchResult {
        self.choose_move_with_stats(board, computer).0
    }

    pub fn choose_move_with_stats(&self, board: &Board, computer: Mark) -> (SearchResult, SearchStats) {
        let Some(opponent) = computer.opponent() else {
            panic!("computer must play X or O, got {:?}", computer);
        };
        let outcome = board.outcome();
        assert_eq!(
            outcome,
            Outcome::InProgress,
            "choose_move called on a finished game"
        );

        let started = Instant::now();
        let mut stats = SearchStats::default();
        let mut best: Option<SearchResult> = None;

        for position in positions(board) {
            if !board.is_valid_move(position.row, position.column) {
                continue;
            }

            let mut candidate = board.with_move(position, computer);
            let score = self.search(
                &mut candidate,
                opponent,
                computer,
                1,
                -SCORE_BOUND,
                SCORE_BOUND,
                &mut stats,
            );
            debug_log!("{} at {} scores {}", computer, position, score);

            let improves = match &best {
                None => true,
                Some(current) if computer == Mark::O => score < current.score,
                Some(current) => score > current.score,
            };
            if improves {
                best = Some(SearchResult {
                    board: candidate,
                    position,
                    score,
                });
            }
        }

        let result = best.expect("an unfinished board has at least one empty cell");
        debug_log!(
            "{} plays {} (score {}) after {} nodes, {} cutoffs, {} ms",
            computer,
            result.position,
            result.score,
            stats.nodes,
            stats.cutoffs,
            started.elapsed().as_millis()
        );

        (result, stats)
    }

    fn search(
        &self,
        board: &mut Board,
        to_move: Mark,
        opponent: Mark,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        stats: &mut SearchStats,
    ) -> i32 {
        stats.nodes += 1;

        let winner = board.evaluate_winner();
        if winner != NO_ONE_WON {
            return winner;
        }
        if board.is_full() {
            return 0;
        }
        if depth > self.max_depth {
            return 0;
        }

        let maximizing = to_move == Mark::X;
        let mut best = if maximizing { -SCORE_BOUND } else { SCORE_BOUND };

        for position in positions(board) {
            if !board.is_valid_move(position.row, position.column) {
                continue;
            }

            let score = {
                let mut child = board.place_scoped(position, to_move);
                self.search(&mut child, opponent, to_move, depth + 1, alpha, beta, stats)
            };

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

/// All coordinates in row-major order, detached from the board's borrow.
fn positions(board: &Board) -> impl Iterator<Item = Position> + use<> {
    let (rows, columns) = (board.rows(), board.columns());
    (0..rows).flat_map(move |row| (0..columns).map(move |column| Position::new(row, column)))
}
