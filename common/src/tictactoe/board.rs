use std::ops::{Deref, DerefMut};

use super::error::{BoardError, MoveError};
use super::types::{Mark, Outcome, Position, WinningLine};
use super::win_detector::{check_win, check_win_with_line};

pub const PLAYER_X_WON: i32 = 100;
pub const PLAYER_O_WON: i32 = -100;
pub const NO_ONE_WON: i32 = 0;

/// Grid of marks stored row-major. Cells only ever go from `Empty` to a
/// player's mark through the public API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    win_length: usize,
    cells: Vec<Mark>,
}

impl Board {
    pub fn new(rows: usize, columns: usize, win_length: usize) -> Result<Self, BoardError> {
        if rows == 0 || columns == 0 {
            return Err(BoardError::EmptyDimensions { rows, columns });
        }
        if win_length == 0 {
            return Err(BoardError::ZeroWinLength);
        }
        let cell_count = rows
            .checked_mul(columns)
            .filter(|&count| count <= isize::MAX as usize)
            .ok_or(BoardError::TooLarge { rows, columns })?;

        Ok(Self {
            rows,
            columns,
            win_length,
            cells: vec![Mark::Empty; cell_count],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn get(&self, row: usize, column: usize) -> Option<Mark> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(self.cells[self.index(row, column)])
    }

    pub(crate) fn mark_at(&self, pos: Position) -> Mark {
        self.cells[self.index(pos.row, pos.column)]
    }

    /// Read-only views of the rows, top to bottom.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Mark]> + '_ {
        self.cells.chunks(self.columns)
    }

    pub fn is_valid_move(&self, row: usize, column: usize) -> bool {
        self.get(row, column) == Some(Mark::Empty)
    }

    pub fn apply_move(&mut self, row: usize, column: usize, mark: Mark) -> Result<(), MoveError> {
        if mark == Mark::Empty {
            return Err(MoveError::EmptyMark);
        }
        if row >= self.rows || column >= self.columns {
            return Err(MoveError::OutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }

        let index = self.index(row, column);
        if self.cells[index] != Mark::Empty {
            return Err(MoveError::CellOccupied { row, column });
        }

        self.cells[index] = mark;
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    /// `PLAYER_X_WON` if X has a winning run, `PLAYER_O_WON` if O has one,
    /// `NO_ONE_WON` otherwise.
    pub fn evaluate_winner(&self) -> i32 {
        match check_win(self) {
            Some(Mark::X) => PLAYER_X_WON,
            Some(Mark::O) => PLAYER_O_WON,
            Some(Mark::Empty) | None => NO_ONE_WON,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(self)
    }

    pub fn outcome(&self) -> Outcome {
        match self.evaluate_winner() {
            score if score > 0 => Outcome::XWins,
            score if score < 0 => Outcome::OWins,
            _ if self.is_full() => Outcome::Draw,
            _ => Outcome::InProgress,
        }
    }

    /// Every cell in row-major order. Each call starts a fresh traversal.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Mark)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, &mark)| (index / self.columns, index % self.columns, mark))
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells()
            .filter(|&(_, _, mark)| mark == Mark::Empty)
            .map(|(row, column, _)| Position::new(row, column))
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Mark::Empty).count()
    }

    pub fn mark_count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// Copy of this board with `mark` placed on the empty cell at `pos`.
    pub(crate) fn with_move(&self, pos: Position, mark: Mark) -> Board {
        let mut next = self.clone();
        let index = next.index(pos.row, pos.column);
        debug_assert_eq!(next.cells[index], Mark::Empty);
        next.cells[index] = mark;
        next
    }

    /// Places `mark` on an empty cell for the lifetime of the returned guard.
    /// The cell is cleared again when the guard drops.
    pub(crate) fn place_scoped(&mut self, pos: Position, mark: Mark) -> ScopedMove<'_> {
        let index = self.index(pos.row, pos.column);
        debug_assert_eq!(self.cells[index], Mark::Empty);
        self.cells[index] = mark;
        ScopedMove { board: self, index }
    }

    fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }
}

/// A hypothetical move applied to a borrowed board.
pub(crate) struct ScopedMove<'a> {
    board: &'a mut Board,
    index: usize,
}

impl Deref for ScopedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        self.board.cells[self.index] = Mark::Empty;
    }
}
