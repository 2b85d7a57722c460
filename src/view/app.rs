use alloc::rc::Rc;
use core::cell::{Ref, RefCell};

use rand::Rng;

use super::{GameController, GameView, Renderer};
use crate::core::{
    CellSelected, EventKind, FireOutcome, Game, GameConfig, GameError, GameEvent, Location,
};

/// Application context: the single game, its view and its controller.
///
/// The view is registered as a `FiredAt` observer, so every
/// outcome-producing fire is drawn before [`App::click`] returns.
pub struct App<R> {
    controller: GameController,
    view: Rc<RefCell<GameView<R>>>,
}

impl<R: Renderer + 'static> App<R> {
    /// Build a random game from `config` and wire it to `renderer`.
    pub fn new<G: Rng + ?Sized>(
        config: GameConfig,
        rng: &mut G,
        renderer: R,
    ) -> Result<Self, GameError> {
        Ok(Self::with_game(Game::new(config, rng)?, renderer))
    }

    /// Wire an existing game to `renderer`.
    ///
    /// Observers already registered on `game` keep their place and run
    /// before the view.
    pub fn with_game(mut game: Game, renderer: R) -> Self {
        let view = Rc::new(RefCell::new(GameView::new(game.size(), renderer)));
        let observer_view = Rc::clone(&view);
        game.add_observer(EventKind::FiredAt, move |event| match event {
            GameEvent::FiredAt(fired) => {
                if let Err(e) = observer_view
                    .borrow_mut()
                    .set_cell_state(fired.location, Some(fired.result))
                {
                    log::warn!("view rejected update: {}", e);
                }
            }
        });
        Self {
            controller: GameController::new(game),
            view,
        }
    }

    /// Handle a user selecting the cell at `location`.
    pub fn click(&mut self, location: Location) -> Result<Option<FireOutcome>, GameError> {
        self.controller.handle_cell_click(CellSelected::from(location))
    }

    /// Register an additional observer, called after the view.
    pub fn add_observer<F>(&mut self, kind: EventKind, observer: F)
    where
        F: FnMut(&GameEvent) + 'static,
    {
        self.controller.game_mut().add_observer(kind, observer);
    }

    pub fn game(&self) -> &Game {
        self.controller.game()
    }

    pub fn view(&self) -> Ref<'_, GameView<R>> {
        self.view.borrow()
    }
}
