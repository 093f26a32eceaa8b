use std::io::{self, BufRead, Write};

use common::log;
use common::tictactoe::{Outcome, SearchEngine, TicTacToeGameState};

use crate::input::{read_command, Command};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Finished(Outcome),
    Quit,
}

/// Alternates human and computer moves until the game is decided or the
/// human quits. The board is printed after every move.
pub fn run_game<R: BufRead, W: Write>(
    state: &mut TicTacToeGameState,
    engine: &SearchEngine,
    input: &mut R,
    output: &mut W,
) -> io::Result<GameEnd> {
    writeln!(
        output,
        "You play {}. {} in a row wins.",
        state.human_mark(),
        state.board().win_length()
    )?;
    writeln!(output, "{}", state.board())?;

    while !state.is_over() {
        if state.is_human_turn() {
            writeln!(output, "Player {}:", state.human_mark())?;
            let (row, column) = match read_command(input, output, state.board())? {
                Command::Move { row, column } => (row, column),
                Command::Quit => return Ok(GameEnd::Quit),
            };
            if let Err(err) = state.place_human_mark(row, column) {
                writeln!(output, "{}", err)?;
                continue;
            }
        } else {
            writeln!(output, "Player {} plays", state.computer_mark())?;
            let result = state.play_computer_move(engine).map_err(io::Error::other)?;
            log!(
                "Computer placed {} at {} (score {})",
                state.computer_mark(),
                result.position,
                result.score
            );
        }

        writeln!(output, "{}", state.board())?;
    }

    if let Some(line) = state.board().winning_line() {
        writeln!(output, "Winning line: {}", line)?;
    }
    let outcome = state.outcome();
    writeln!(output, "{}", outcome)?;
    Ok(GameEnd::Finished(outcome))
}
