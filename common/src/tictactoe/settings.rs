use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::board::Board;
use super::bot_controller::{MAX_SEARCH_DEPTH, SearchEngine};
use super::error::BoardError;
use super::types::FirstPlayerMode;

pub const MAX_DIMENSION: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeSettings {
    pub rows: usize,
    pub columns: usize,
    pub win_length: usize,
    pub first_player: FirstPlayerMode,
    pub max_search_depth: usize,
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            rows: 3,
            columns: 3,
            win_length: 3,
            first_player: FirstPlayerMode::Human,
            max_search_depth: MAX_SEARCH_DEPTH,
        }
    }
}

impl TicTacToeSettings {
    pub fn create_board(&self) -> Result<Board, BoardError> {
        Board::new(self.rows, self.columns, self.win_length)
    }

    pub fn create_engine(&self) -> SearchEngine {
        SearchEngine::with_max_depth(self.max_search_depth)
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }
}

impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.rows == 0 || self.rows > MAX_DIMENSION {
            return Err(format!("Rows must be between 1 and {}", MAX_DIMENSION));
        }
        if self.columns == 0 || self.columns > MAX_DIMENSION {
            return Err(format!("Columns must be between 1 and {}", MAX_DIMENSION));
        }
        // Longer than both dimensions is allowed: every game ends in a draw.
        if self.win_length == 0 {
            return Err("Win length must be at least 1".to_string());
        }
        if self.max_search_depth == 0 {
            return Err("Max search depth must be at least 1".to_string());
        }
        Ok(())
    }
}
