//! One player's grid of cells.

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;

use super::cell::{Cell, CellState};
use super::common::{FireOutcome, GameError};
use super::location::Location;

/// Fixed-size square grid of [`Cell`]s, stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Build a board whose cells are each occupied independently with
    /// `probability`. Cells are drawn row by row, so a seeded `rng`
    /// reproduces the same board.
    pub fn random<R: Rng + ?Sized>(
        size: usize,
        probability: f64,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GameError::InvalidProbability(probability));
        }
        Self::from_fn(size, |_, _| rng.random_bool(probability))
    }

    /// Build a board with occupancy decided by `occupied(row, column)`.
    pub fn from_fn<F>(size: usize, mut occupied: F) -> Result<Self, GameError>
    where
        F: FnMut(usize, usize) -> bool,
    {
        let cell_count = match size.checked_mul(size) {
            Some(n) if n > 0 => n,
            _ => return Err(GameError::InvalidSize(size)),
        };
        let mut cells = Vec::with_capacity(cell_count);
        for row in 0..size {
            for column in 0..size {
                cells.push(Cell::new(occupied(row, column)));
            }
        }
        Ok(Self { size, cells })
    }

    /// Board without any ships.
    pub fn empty(size: usize) -> Result<Self, GameError> {
        Self::from_fn(size, |_, _| false)
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at (row, column), if in range.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.index(row, column).map(|idx| &self.cells[idx])
    }

    /// Iterator over `((row, column), cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| ((idx / size, idx % size), cell))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    pub fn fired_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_fired()).count()
    }

    /// Fire at the addressed cell and pass its result through unchanged.
    ///
    /// Only `row` and `column` are used for lookup; `board` is carried into the
    /// error. Returns `Ok(None)` if the cell was already fired.
    pub fn fire_at(&mut self, location: Location) -> Result<Option<FireOutcome>, GameError> {
        let idx = self
            .index(location.row, location.column)
            .ok_or(GameError::OutOfBounds(location))?;
        Ok(self.cells[idx].fire())
    }

    fn index(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.size && column < self.size {
            Some(row * self.size + column)
        } else {
            None
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board<{}>:", self.size)?;
        for row in 0..self.size {
            for column in 0..self.size {
                let cell = &self.cells[row * self.size + column];
                let ch = match (cell.is_occupied(), cell.is_fired()) {
                    (true, true) => 'X',
                    (false, true) => 'o',
                    (true, false) => '■',
                    (false, false) => '□',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Shows only what a shooter knows: hits, misses and unknown cells.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for column in 0..self.size {
                let ch = match self.cells[row * self.size + column].state() {
                    CellState::Fired(FireOutcome::Hit) => 'X',
                    CellState::Fired(FireOutcome::Miss) => 'o',
                    CellState::Unfired => '.',
                };
                write!(f, "{} ", ch)?;
            }
            if row + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
