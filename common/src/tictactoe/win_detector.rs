use super::board::Board;
use super::types::{Mark, Position, WinningLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    const SCAN_ORDER: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    fn deltas(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }

    /// Caller guarantees the resulting cell lies on the board.
    fn offset(self, pos: Position, steps: isize) -> Position {
        let (d_row, d_column) = self.deltas();
        Position::new(
            (pos.row as isize + d_row * steps) as usize,
            (pos.column as isize + d_column * steps) as usize,
        )
    }

    /// First cell of every line running in this direction.
    ///
    /// Diagonals start on the top row and on the left (down-right) or right
    /// (down-left) column, so together they cover every diagonal of the grid.
    fn line_starts(self, rows: usize, columns: usize) -> impl Iterator<Item = Position> {
        let (top_columns, side_column, side_rows) = match self {
            Direction::Horizontal => (0..0, 0, 0..rows),
            Direction::Vertical => (0..columns, 0, 0..0),
            Direction::DiagonalDownRight => (0..columns, 0, 1..rows),
            Direction::DiagonalDownLeft => (0..columns, columns - 1, 1..rows),
        };
        top_columns
            .map(|column| Position::new(0, column))
            .chain(side_rows.map(move |row| Position::new(row, side_column)))
    }

    fn line_length(self, rows: usize, columns: usize, start: Position) -> usize {
        match self {
            Direction::Horizontal => columns - start.column,
            Direction::Vertical => rows - start.row,
            Direction::DiagonalDownRight => (rows - start.row).min(columns - start.column),
            Direction::DiagonalDownLeft => (rows - start.row).min(start.column + 1),
        }
    }
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// Finds the first run of `win_length` identical marks, scanning rows, then
/// columns, then both diagonal families.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let (rows, columns) = (board.rows(), board.columns());
    let win_length = board.win_length();

    for direction in Direction::SCAN_ORDER {
        for start in direction.line_starts(rows, columns) {
            let length = direction.line_length(rows, columns, start);
            if length < win_length {
                continue;
            }
            if let Some(line) = scan_line(board, direction, start, length) {
                return Some(line);
            }
        }
    }

    None
}

fn scan_line(
    board: &Board,
    direction: Direction,
    start: Position,
    length: usize,
) -> Option<WinningLine> {
    let win_length = board.win_length();
    let mut x_run = 0;
    let mut o_run = 0;

    for step in 0..length {
        let pos = direction.offset(start, step as isize);
        match board.mark_at(pos) {
            Mark::X => {
                x_run += 1;
                o_run = 0;
            }
            Mark::O => {
                o_run += 1;
                x_run = 0;
            }
            Mark::Empty => {
                x_run = 0;
                o_run = 0;
            }
        }

        let winner = if x_run == win_length {
            Mark::X
        } else if o_run == win_length {
            Mark::O
        } else {
            continue;
        };
        let run_start = direction.offset(pos, 1 - win_length as isize);
        return Some(WinningLine::new(winner, run_start, pos));
    }

    None
}
