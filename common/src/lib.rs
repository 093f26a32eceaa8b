//! Generalized tic-tac-toe: boards of any size, any run length to win, and
//! a minimax opponent with alpha-beta pruning.

pub mod config;
pub mod logger;
pub mod tictactoe;
