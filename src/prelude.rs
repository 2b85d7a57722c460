//! Commonly used types for ease of import.

pub use crate::{App, CellView, EventKind, FireOutcome, Game, GameConfig, GameError, GameEvent, Location, Renderer};

#[cfg(feature = "std")]
pub use crate::cli::{print_view, TerminalRenderer};
