//! Addressing cells across the two boards.

/// Identifies one cell on one of the two boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub row: usize,
    pub column: usize,
    pub board: usize,
}

impl Location {
    pub const fn new(board: usize, row: usize, column: usize) -> Self {
        Self { row, column, board }
    }
}

impl core::fmt::Display for Location {
    /// Formats as the user-facing coordinate, e.g. `board 1 B3`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let column = u8::try_from(self.column).ok().filter(|&c| c < 26);
        match (self.board.checked_add(1), self.row.checked_add(1), column) {
            (Some(board), Some(row), Some(c)) => {
                write!(f, "board {} {}{}", board, (b'A' + c) as char, row)
            }
            // zero-based when it cannot be shown as a coordinate
            _ => write!(
                f,
                "board #{} ({}, {})",
                self.board, self.row, self.column
            ),
        }
    }
}

/// Inbound event raised when the user selects a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CellSelected {
    pub location: Location,
}

impl From<Location> for CellSelected {
    fn from(location: Location) -> Self {
        Self { location }
    }
}
