use std::fmt;

use super::board::Board;

/// Frames the grid between a line of underscores and a line of macrons:
///
/// ```text
/// _______
/// |X| |O|
/// | |X| |
/// |O| |X|
/// ¯¯¯¯¯¯¯
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = 2 * self.columns() + 1;
        writeln!(f, "{}", "_".repeat(width))?;
        for row in self.row_slices() {
            f.write_str("|")?;
            for mark in row {
                write!(f, "{}|", mark)?;
            }
            writeln!(f)?;
        }
        write!(f, "{}", "\u{00AF}".repeat(width))
    }
}
