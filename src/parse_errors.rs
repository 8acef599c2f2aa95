//! Errors of [`Sudoku::from_str_line`](crate::Sudoku::from_str_line)

/// A character that is neither a digit nor an empty cell marker.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidEntry {
    /// Cell of the character, 0..=80 from left to right, top to bottom
    pub cell: u8,
    /// The offending character
    pub ch: char,
}

impl InvalidEntry {
    /// Row of the cell, 0..=8 from the top
    #[inline]
    pub fn row(self) -> u8 {
        self.cell / 9
    }

    /// Column of the cell, 0..=8 from the left
    #[inline]
    pub fn col(self) -> u8 {
        self.cell % 9
    }
}

/// Why a line could not be read as a sudoku
#[derive(Clone, Debug, Eq, Hash, PartialEq, thiserror::Error)]
pub enum LineParseError {
    /// Cells must be 1-9 or one of '0', '.' and '_' when empty
    #[error("invalid character '{}' in row {}, column {}", .0.ch, .0.row(), .0.col())]
    InvalidEntry(InvalidEntry),
    /// The line ended after this many cells
    #[error("line has {0} cells instead of 81")]
    NotEnoughCells(u8),
    /// A cell follows the 81st one
    #[error("line has more than 81 cells")]
    TooManyCells,
    /// Anything after the 81st cell must start with a space or tab
    #[error("comment after the 81st cell must be separated by a space or tab")]
    MissingCommentDelimiter,
}
