//! Common types: fire outcomes and game errors.

use crate::core::location::Location;

/// Result of firing at a cell that had not been fired at before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum FireOutcome {
    /// The cell held a ship segment.
    Hit,
    /// The cell was empty water.
    Miss,
}

/// Errors returned by board and game operations.
///
/// Firing at a cell twice is not an error; it yields no outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameError {
    /// Location names a row, column or board that does not exist.
    OutOfBounds(Location),
    /// Boards must have at least one row and column.
    InvalidSize(usize),
    /// Occupancy probability must lie in `[0, 1]`.
    InvalidProbability(f64),
    /// Both boards of a game must share one size.
    BoardSizeMismatch { first: usize, second: usize },
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::OutOfBounds(loc) => write!(
                f,
                "Location out of bounds: board={}, row={}, column={}",
                loc.board, loc.row, loc.column
            ),
            GameError::InvalidSize(size) => write!(f, "Invalid board size: {}", size),
            GameError::InvalidProbability(p) => {
                write!(f, "Ship probability {} is outside [0, 1]", p)
            }
            GameError::BoardSizeMismatch { first, second } => write!(
                f,
                "Boards differ in size: {}x{} vs {}x{}",
                first, first, second, second
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
