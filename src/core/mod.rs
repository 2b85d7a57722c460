//! Core game model (no_std compatible)
//!
//! Cells, boards and the two-board game with its observer registry. Needs
//! only `alloc`, `rand` and the `log` facade, so it runs headless and without
//! a rendering surface.

pub mod board;
pub mod cell;
pub mod common;
pub mod config;
pub mod events;
pub mod game;
pub mod location;

// Re-export commonly used types
pub use board::Board;
pub use cell::{Cell, CellState};
pub use common::{FireOutcome, GameError};
pub use config::*;
pub use events::{EventKind, FiredAt, GameEvent, Observer, Observers};
pub use game::{Game, Turn};
pub use location::{CellSelected, Location};
