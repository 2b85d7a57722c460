use crate::core::{CellSelected, FireOutcome, Game, GameError};

/// Relays cell selections from the front end to the game.
#[derive(Debug)]
pub struct GameController {
    game: Game,
}

impl GameController {
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    /// Forward the selected location to [`Game::fire_at`] unchanged.
    pub fn handle_cell_click(
        &mut self,
        CellSelected { location }: CellSelected,
    ) -> Result<Option<FireOutcome>, GameError> {
        self.game.fire_at(location)
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }
}
