use rand::Rng;

use crate::debug_log;
use super::board::Board;
use super::bot_controller::{SearchEngine, SearchResult};
use super::error::{BoardError, MoveError};
use super::settings::TicTacToeSettings;
use super::types::{Mark, Outcome, Position};

/// One human-versus-computer game. X always moves first.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    human_mark: Mark,
    computer_mark: Mark,
    current_mark: Mark,
    move_count: usize,
}

impl TicTacToeGameState {
    pub fn new<R: Rng>(settings: &TicTacToeSettings, rng: &mut R) -> Result<Self, BoardError> {
        let board = settings.create_board()?;
        let human_mark = settings.first_player.resolve_human_mark(rng);
        Ok(Self::with_board(board, human_mark))
    }

    /// Resumes from an existing position. The side to move is inferred from
    /// the mark counts.
    ///
    /// # Panics
    ///
    /// Panics if `human_mark` is `Mark::Empty`.
    pub fn with_board(board: Board, human_mark: Mark) -> Self {
        let Some(computer_mark) = human_mark.opponent() else {
            panic!("human must play X or O");
        };
        let current_mark = if board.mark_count(Mark::X) > board.mark_count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        };
        let move_count = board.mark_count(Mark::X) + board.mark_count(Mark::O);

        Self {
            board,
            human_mark,
            computer_mark,
            current_mark,
            move_count,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn computer_mark(&self) -> Mark {
        self.computer_mark
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_over()
    }

    pub fn is_human_turn(&self) -> bool {
        self.current_mark == self.human_mark
    }

    pub fn place_human_mark(&mut self, row: usize, column: usize) -> Result<Position, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.is_human_turn() {
            return Err(MoveError::NotYourTurn);
        }

        self.board.apply_move(row, column, self.human_mark)?;
        let position = Position::new(row, column);
        debug_log!("Human placed {} at {}", self.human_mark, position);
        self.switch_turn();
        Ok(position)
    }

    /// Asks `engine` for a move and commits it. Refuses once the game is over,
    /// so the engine is never searched on a finished board.
    pub fn play_computer_move(&mut self, engine: &SearchEngine) -> Result<SearchResult, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.is_human_turn() {
            return Err(MoveError::NotYourTurn);
        }

        let result = engine.choose_move(&self.board, self.computer_mark);
        self.board = result.board.clone();
        self.switch_turn();
        Ok(result)
    }

    fn switch_turn(&mut self) {
        self.move_count += 1;
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }
}
