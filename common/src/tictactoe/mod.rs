mod board;
mod bot_controller;
mod error;
mod game_state;
mod render;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, NO_ONE_WON, PLAYER_O_WON, PLAYER_X_WON};
pub use bot_controller::{MAX_SEARCH_DEPTH, SearchEngine, SearchResult, SearchStats};
pub use error::{BoardError, MoveError};
pub use game_state::TicTacToeGameState;
pub use settings::{MAX_DIMENSION, TicTacToeSettings};
pub use types::{FirstPlayerMode, Mark, Outcome, Position, WinningLine};
pub use win_detector::{check_win, check_win_with_line};
