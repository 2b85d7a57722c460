use rand::Rng;

use super::{
    board::Board,
    common::{FireOutcome, GameError},
    config::{GameConfig, NUM_BOARDS},
    events::{EventKind, FiredAt, GameEvent, Observers},
    location::Location,
};

/// Index of the player whose turn it is.
///
/// Player 0 fires at board 1 and player 1 at board 0. The indicator is
/// recorded but neither checked nor advanced by [`Game::fire_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn(pub usize);

impl Turn {
    /// Board this player's shots are aimed at.
    pub fn target_board(self) -> usize {
        (self.0 + 1) % NUM_BOARDS
    }
}

/// Two boards, the turn indicator and the observer registry.
#[derive(Debug)]
pub struct Game {
    boards: [Board; NUM_BOARDS],
    turn: Turn,
    observers: Observers,
}

impl Game {
    /// Create a game with two randomly occupied boards.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, GameError> {
        config.validate()?;
        let first = Board::random(config.size, config.probability, rng)?;
        let second = Board::random(config.size, config.probability, rng)?;
        Self::from_boards([first, second])
    }

    /// Create a game from two prebuilt boards of equal size.
    pub fn from_boards(boards: [Board; NUM_BOARDS]) -> Result<Self, GameError> {
        let (first, second) = (boards[0].size(), boards[1].size());
        if first != second {
            return Err(GameError::BoardSizeMismatch { first, second });
        }
        log::debug!(
            "new {}x{} game, ships on boards: {} / {}",
            first,
            first,
            boards[0].occupied_count(),
            boards[1].occupied_count()
        );
        Ok(Self {
            boards,
            turn: Turn(0),
            observers: Observers::new(),
        })
    }

    /// Size shared by both boards.
    pub fn size(&self) -> usize {
        self.boards[0].size()
    }

    pub fn board(&self, board: usize) -> Option<&Board> {
        self.boards.get(board)
    }

    pub fn boards(&self) -> &[Board; NUM_BOARDS] {
        &self.boards
    }

    /// Current turn indicator. Always the starting player.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Register `observer` for events of `kind`.
    pub fn add_observer<F>(&mut self, kind: EventKind, observer: F)
    where
        F: FnMut(&GameEvent) + 'static,
    {
        self.observers.add(kind, observer);
    }

    /// Number of observers registered for `kind`.
    pub fn observer_count(&self, kind: EventKind) -> usize {
        self.observers.len(kind)
    }

    /// Fire at `location` on the board it names.
    ///
    /// A hit or miss is published as [`GameEvent::FiredAt`] to every
    /// `FiredAt` observer before this returns. Firing at a cell that was
    /// already fired returns `Ok(None)` and publishes nothing.
    // TODO: reject fires from the player whose turn it is not, once the
    // rule for which board each player may target is settled.
    pub fn fire_at(&mut self, location: Location) -> Result<Option<FireOutcome>, GameError> {
        let board = self
            .boards
            .get_mut(location.board)
            .ok_or(GameError::OutOfBounds(location))?;
        let result = board.fire_at(location)?;
        match result {
            Some(result) => {
                log::debug!("fired at {}: {:?}", location, result);
                self.observers
                    .notify(&GameEvent::FiredAt(FiredAt { location, result }));
            }
            None => log::trace!("{} already fired, ignoring", location),
        }
        Ok(result)
    }
}
