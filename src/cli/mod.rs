//! Terminal front end
//!
//! This module provides:
//! - Command parsing for cell coordinates (`2 B3`, `fire 1 A1`)
//! - A `Renderer` that reports cell changes on stdout
//! - Board printing and a JSON-lines event observer

#![cfg(feature = "std")]

pub mod command;
pub mod render;

pub use command::{parse_command, parse_coord, parse_size, Command, MAX_TERMINAL_SIZE};
pub use render::{format_view, json_observer, print_view, TerminalRenderer};
