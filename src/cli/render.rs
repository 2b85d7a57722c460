use std::io::Write;
use std::string::String;
use std::fmt::Write as _;

use crate::core::{GameEvent, Location, NUM_BOARDS};
use crate::view::{CellView, GameView, Renderer};

/// Renderer that reports every changed cell as a line on stdout.
///
/// The initial all-`Unknown` paint is not printed.
#[derive(Debug, Default)]
pub struct TerminalRenderer {
    updates: usize,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cell changes reported so far.
    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl Renderer for TerminalRenderer {
    fn render_cell_state(&mut self, location: Location, state: CellView) {
        if state == CellView::Unknown {
            return;
        }
        self.updates += 1;
        std::println!("  {} -> {}", location, state.label().to_uppercase());
    }
}

fn cell_char(state: CellView) -> char {
    match state {
        CellView::Unknown => '.',
        CellView::Hit => 'X',
        CellView::Miss => 'o',
    }
}

/// Both boards side by side, with column letters and 1-based row numbers.
pub fn format_view<R: Renderer>(view: &GameView<R>) -> String {
    let size = view.size();
    let width = 3 + 2 * size;
    let mut out = String::new();
    for board in 0..NUM_BOARDS {
        let title = std::format!("Board {}", board + 1);
        let _ = write!(out, "{:<width$}   ", title, width = width);
    }
    out.push('\n');
    for _ in 0..NUM_BOARDS {
        out.push_str("   ");
        for c in 0..size {
            let _ = write!(out, " {}", (b'A' + (c % 26) as u8) as char);
        }
        out.push_str("   ");
    }
    out.push('\n');
    for r in 0..size {
        for board in 0..NUM_BOARDS {
            let _ = write!(out, "{:2} ", r + 1);
            if let Some(row) = view.row(board, r) {
                for &state in row {
                    let _ = write!(out, " {}", cell_char(state));
                }
            }
            out.push_str("   ");
        }
        out.push('\n');
    }
    out.push_str("Legend: X=Hit  o=Miss  .=Unknown");
    out
}

/// Print both boards to stdout.
pub fn print_view<R: Renderer>(view: &GameView<R>) {
    std::println!("{}", format_view(view));
}

/// Observer writing each event to `writer` as one JSON line.
pub fn json_observer<W: Write + 'static>(mut writer: W) -> impl FnMut(&GameEvent) + 'static {
    move |event| match serde_json::to_string(event) {
        Ok(line) => {
            if let Err(e) = writeln!(writer, "{}", line) {
                log::warn!("failed to write event: {}", e);
            }
        }
        Err(e) => log::warn!("failed to encode event: {}", e),
    }
}
