use std::io::{self, BufRead, Write};

use common::tictactoe::Board;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based coordinates, not yet checked against the board.
    Move { row: usize, column: usize },
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("enter a row and a column, e.g. `2 3`")]
    Empty,

    #[error("expected two numbers, got {0}")]
    WrongCount(usize),

    #[error("`{0}` is not a number")]
    NotANumber(String),

    #[error("coordinates start at 1")]
    ZeroCoordinate,
}

/// Parses `row column` (1-based, separated by whitespace or a comma) or `q`.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }

    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [] => Err(InputError::Empty),
        [row, column] => Ok(Command::Move {
            row: parse_coordinate(row)?,
            column: parse_coordinate(column)?,
        }),
        other => Err(InputError::WrongCount(other.len())),
    }
}

fn parse_coordinate(text: &str) -> Result<usize, InputError> {
    let value: usize = text
        .parse()
        .map_err(|_| InputError::NotANumber(text.to_string()))?;
    value.checked_sub(1).ok_or(InputError::ZeroCoordinate)
}

/// Prompts until a line parses. End of input counts as quitting.
pub fn read_command<R: BufRead, W: Write>(input: &mut R, output: &mut W, board: &Board) -> io::Result<Command> {
    loop {
        write!(
            output,
            "Enter row (1 to {}) and column (1 to {}), or q to quit: ",
            board.rows(),
            board.columns()
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(Command::Quit);
        }

        match parse_command(&line) {
            Ok(command) => return Ok(command),
            Err(err) => writeln!(output, "{}", err)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_space_separated() {
        assert_eq!(parse_command("2 3\n"), Ok(Command::Move { row: 1, column: 2 }));
    }

    #[test]
    fn test_parse_comma_separated() {
        assert_eq!(parse_command(" 1,1 "), Ok(Command::Move { row: 0, column: 0 }));
        assert_eq!(parse_command("3, 2"), Ok(Command::Move { row: 2, column: 1 }));
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("QUIT\n"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_command("   "), Err(InputError::Empty));
        assert_eq!(parse_command("1"), Err(InputError::WrongCount(1)));
        assert_eq!(parse_command("1 2 3"), Err(InputError::WrongCount(3)));
        assert_eq!(parse_command("a 2"), Err(InputError::NotANumber("a".to_string())));
        assert_eq!(parse_command("0 2"), Err(InputError::ZeroCoordinate));
        assert_eq!(parse_command("-1 2"), Err(InputError::NotANumber("-1".to_string())));
    }

    #[test]
    fn test_large_coordinates_are_left_to_the_board() {
        assert_eq!(parse_command("9 9"), Ok(Command::Move { row: 8, column: 8 }));
    }

    #[test]
    fn test_read_command_reprompts_on_bad_input() {
        let board = Board::new(3, 3, 3).unwrap();
        let mut input = Cursor::new("hello\n2 2\n");
        let mut output = Vec::new();

        let command = read_command(&mut input, &mut output, &board).unwrap();
        assert_eq!(command, Command::Move { row: 1, column: 1 });

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Enter row (1 to 3) and column (1 to 3)").count(), 2);
        assert!(text.contains("expected two numbers, got 1"));
    }

    #[test]
    fn test_read_command_eof_quits() {
        let board = Board::new(3, 3, 3).unwrap();
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert_eq!(read_command(&mut input, &mut output, &board).unwrap(), Command::Quit);
    }
}
