//! State of a single grid position.

use super::common::FireOutcome;

/// Observable state of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Unfired,
    Fired(FireOutcome),
}

/// One grid position: whether a ship occupies it and whether it was fired at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    occupied: bool,
    fired: bool,
}

impl Cell {
    /// Create an unfired cell. Occupancy cannot change afterwards.
    pub const fn new(occupied: bool) -> Self {
        Self {
            occupied,
            fired: false,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    pub fn is_fired(&self) -> bool {
        self.fired
    }

    /// Fire at this cell.
    ///
    /// The first call marks the cell fired and reports `Hit` or `Miss`.
    /// Every later call returns `None` and changes nothing.
    pub fn fire(&mut self) -> Option<FireOutcome> {
        if self.fired {
            return None;
        }
        self.fired = true;
        Some(self.outcome())
    }

    pub fn state(&self) -> CellState {
        if self.fired {
            CellState::Fired(self.outcome())
        } else {
            CellState::Unfired
        }
    }

    fn outcome(&self) -> FireOutcome {
        if self.occupied {
            FireOutcome::Hit
        } else {
            FireOutcome::Miss
        }
    }
}
