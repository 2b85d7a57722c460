use super::common::GameError;

/// Rows and columns on each board unless configured otherwise.
pub const DEFAULT_BOARD_SIZE: usize = 8;
/// Chance that any single cell holds a ship segment.
pub const SHIP_PROBABILITY: f64 = 0.2;
/// A game always has exactly two boards.
pub const NUM_BOARDS: usize = 2;

/// Parameters fixed when a game is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub size: usize,
    pub probability: f64,
}

impl GameConfig {
    /// Check that the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.size == 0 || self.size.checked_mul(self.size).is_none() {
            return Err(GameError::InvalidSize(self.size));
        }
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(GameError::InvalidProbability(self.probability));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            probability: SHIP_PROBABILITY,
        }
    }
}
