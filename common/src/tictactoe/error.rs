/// Errors that can occur when constructing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions must be positive, got {rows}x{columns}")]
    EmptyDimensions { rows: usize, columns: usize },

    #[error("win length must be positive")]
    ZeroWinLength,

    #[error("a {rows}x{columns} board does not fit in memory")]
    TooLarge { rows: usize, columns: usize },
}

/// Rejected moves. The board is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("position ({row}, {column}) is outside the {rows}x{columns} board")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    #[error("cell ({row}, {column}) is already marked")]
    CellOccupied { row: usize, column: usize },

    #[error("cannot place an empty mark")]
    EmptyMark,

    #[error("game is already over")]
    GameOver,

    #[error("not your turn")]
    NotYourTurn,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::OutOfBounds {
            row: 3,
            column: 0,
            rows: 3,
            columns: 3,
        };
        assert_eq!(err.to_string(), "position (3, 0) is outside the 3x3 board");

        let err = MoveError::CellOccupied { row: 1, column: 2 };
        assert_eq!(err.to_string(), "cell (1, 2) is already marked");
    }

    #[test]
    fn test_board_error_display() {
        let err = BoardError::EmptyDimensions { rows: 0, columns: 3 };
        assert_eq!(err.to_string(), "board dimensions must be positive, got 0x3");

        let err = BoardError::TooLarge { rows: 7, columns: 9 };
        assert_eq!(err.to_string(), "a 7x9 board does not fit in memory");
    }
}
