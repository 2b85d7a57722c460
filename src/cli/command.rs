use std::string::{String, ToString};

use crate::core::{Location, NUM_BOARDS};

/// A line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fire(Location),
    Show,
    Help,
    Quit,
}

/// Largest board the terminal can address with one column letter.
pub const MAX_TERMINAL_SIZE: usize = 26;

/// Parse a `--size` argument, limited to boards with columns A-Z.
pub fn parse_size(input: &str) -> Result<usize, String> {
    let size: usize = input
        .trim()
        .parse()
        .map_err(|_| format!("Invalid size '{}' - must be a number", input))?;
    if size == 0 || size > MAX_TERMINAL_SIZE {
        return Err(format!(
            "Size {} out of range - must be 1-{}",
            size, MAX_TERMINAL_SIZE
        ));
    }
    Ok(size)
}

/// Parse `B3` style coordinates into zero-based (row, column) on a `size` board.
pub fn parse_coord(input: &str, size: usize) -> Result<(usize, usize), String> {
    let last_col = (b'A' + (size.clamp(1, MAX_TERMINAL_SIZE) as u8) - 1) as char;
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return Err(format!("Invalid column '{}' - must be a letter A-{}", col_ch, last_col));
    }
    let column = (col_ch as u8 - b'A') as usize;
    if column >= size {
        return Err(format!("Column '{}' out of bounds - must be A-{}", col_ch, last_col));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, size))?;
    if row == 0 || row > size {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, size));
    }
    Ok((row - 1, column))
}

fn parse_board(input: &str) -> Result<usize, String> {
    let board: usize = input
        .parse()
        .map_err(|_| format!("Invalid board '{}' - must be 1 or {}", input, NUM_BOARDS))?;
    if board == 0 || board > NUM_BOARDS {
        return Err(format!("Board {} does not exist - must be 1 or {}", board, NUM_BOARDS));
    }
    Ok(board - 1)
}

/// Parse one input line for a game with `size`×`size` boards.
///
/// Boards are numbered from 1 for the user and from 0 in the returned location.
pub fn parse_command(line: &str, size: usize) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let first = parts.next().ok_or("Empty input")?;
    let (board, coord) = match first.to_ascii_lowercase().as_str() {
        "show" => return Ok(Command::Show),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        "fire" => (
            parts.next().ok_or("Missing board number")?,
            parts.next().ok_or("Missing coordinate")?,
        ),
        _ => (first, parts.next().ok_or("Missing coordinate")?),
    };
    if let Some(extra) = parts.next() {
        return Err(format!("Unexpected '{}'", extra));
    }
    let board = parse_board(board)?;
    let (row, column) = parse_coord(coord, size)?;
    Ok(Command::Fire(Location::new(board, row, column)))
}
