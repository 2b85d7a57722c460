use alloc::vec;
use alloc::vec::Vec;

use crate::core::{FireOutcome, GameError, Location, NUM_BOARDS};

/// What a player sees in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellView {
    #[default]
    Unknown,
    Hit,
    Miss,
}

impl CellView {
    /// Short label used by text front ends.
    pub fn label(self) -> &'static str {
        match self {
            CellView::Unknown => "unknown",
            CellView::Hit => "hit",
            CellView::Miss => "miss",
        }
    }
}

impl From<FireOutcome> for CellView {
    fn from(outcome: FireOutcome) -> Self {
        match outcome {
            FireOutcome::Hit => CellView::Hit,
            FireOutcome::Miss => CellView::Miss,
        }
    }
}

/// Surface that draws individual cells.
pub trait Renderer {
    /// Draw the cell at `location` in `state`.
    fn render_cell_state(&mut self, location: Location, state: CellView);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render_cell_state(&mut self, location: Location, state: CellView) {
        (**self).render_cell_state(location, state)
    }
}

/// Visual state of both boards, drawn through a [`Renderer`].
#[derive(Debug)]
pub struct GameView<R> {
    size: usize,
    cells: [Vec<CellView>; NUM_BOARDS],
    renderer: R,
}

impl<R: Renderer> GameView<R> {
    /// Create a view with every cell `Unknown` and paint it once.
    pub fn new(size: usize, mut renderer: R) -> Self {
        for board in 0..NUM_BOARDS {
            for row in 0..size {
                for column in 0..size {
                    renderer.render_cell_state(Location::new(board, row, column), CellView::Unknown);
                }
            }
        }
        Self {
            size,
            cells: core::array::from_fn(|_| vec![CellView::Unknown; size * size]),
            renderer,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Visual state of the cell at `location`.
    pub fn cell_state(&self, location: Location) -> Result<CellView, GameError> {
        let idx = self.index(location)?;
        Ok(self.cells[location.board][idx])
    }

    /// Reflect a fire outcome in the cell at `location`.
    ///
    /// `None` leaves the cell as it is and draws nothing.
    pub fn set_cell_state(
        &mut self,
        location: Location,
        outcome: Option<FireOutcome>,
    ) -> Result<(), GameError> {
        let idx = self.index(location)?;
        if let Some(outcome) = outcome {
            let state = CellView::from(outcome);
            self.cells[location.board][idx] = state;
            self.renderer.render_cell_state(location, state);
        }
        Ok(())
    }

    /// Row of visual states for `board`.
    pub fn row(&self, board: usize, row: usize) -> Option<&[CellView]> {
        if row >= self.size {
            return None;
        }
        let start = row * self.size;
        self.cells
            .get(board)
            .map(|cells| &cells[start..start + self.size])
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn index(&self, location: Location) -> Result<usize, GameError> {
        if location.board >= NUM_BOARDS || location.row >= self.size || location.column >= self.size
        {
            return Err(GameError::OutOfBounds(location));
        }
        Ok(location.row * self.size + location.column)
    }
}
