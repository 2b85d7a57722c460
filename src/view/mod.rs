//! View and controller around the core model.
//!
//! - `Renderer`: the drawing surface a front end provides
//! - `GameView`: per-cell visual state for both boards
//! - `GameController`: forwards cell selections to the game
//! - `App`: wires the three together once at start-up

mod app;
mod controller;
mod game_view;

pub use app::App;
pub use controller::GameController;
pub use game_view::{CellView, GameView, Renderer};
