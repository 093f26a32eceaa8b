use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => ' ',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Zero-based cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    XWins,
    OWins,
    Draw,
    InProgress,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::XWins => Some(Mark::X),
            Outcome::OWins => Some(Mark::O),
            Outcome::Draw | Outcome::InProgress => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::XWins => "X wins",
            Outcome::OWins => "O wins",
            Outcome::Draw => "No one wins",
            Outcome::InProgress => "Game in progress",
        };
        f.write_str(text)
    }
}

/// Who gets X. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    #[default]
    Human,
    Computer,
    Random,
}

impl FirstPlayerMode {
    pub fn resolve_human_mark<R: Rng>(self, rng: &mut R) -> Mark {
        match self {
            FirstPlayerMode::Human => Mark::X,
            FirstPlayerMode::Computer => Mark::O,
            FirstPlayerMode::Random => {
                if rng.random_bool(0.5) {
                    Mark::X
                } else {
                    Mark::O
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Position, end: Position) -> Self {
        Self { mark, start, end }
    }
}

impl fmt::Display for WinningLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {} to {}", self.mark, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_opponent_swaps_players() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::XWins.winner(), Some(Mark::X));
        assert_eq!(Outcome::OWins.winner(), Some(Mark::O));
        assert_eq!(Outcome::Draw.winner(), None);
        assert!(Outcome::Draw.is_over());
        assert!(!Outcome::InProgress.is_over());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::XWins.to_string(), "X wins");
        assert_eq!(Outcome::Draw.to_string(), "No one wins");
    }

    #[test]
    fn test_winning_line_display() {
        let line = WinningLine::new(Mark::O, Position::new(0, 2), Position::new(2, 0));
        assert_eq!(line.to_string(), "O from (0, 2) to (2, 0)");
    }

    #[test]
    fn test_first_player_mode_fixed_sides() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(FirstPlayerMode::Human.resolve_human_mark(&mut rng), Mark::X);
        assert_eq!(FirstPlayerMode::Computer.resolve_human_mark(&mut rng), Mark::O);
    }

    #[test]
    fn test_first_player_mode_random_picks_both_sides() {
        let mut rng = StdRng::seed_from_u64(42);
        let marks: Vec<Mark> = (0..64)
            .map(|_| FirstPlayerMode::Random.resolve_human_mark(&mut rng))
            .collect();
        assert!(marks.contains(&Mark::X));
        assert!(marks.contains(&Mark::O));
        assert!(!marks.contains(&Mark::Empty));
    }
}
