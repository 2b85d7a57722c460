//! Typed publish/subscribe for game events.
//!
//! Observers register under an [`EventKind`] and are called synchronously,
//! in registration order, whenever an event of that kind is published.

use alloc::boxed::Box;
use alloc::vec::Vec;

use super::common::FireOutcome;
use super::location::Location;

/// Closed set of event kinds a game publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    FiredAt,
}

impl EventKind {
    /// Number of event kinds.
    pub const COUNT: usize = 1;
    pub const ALL: [EventKind; Self::COUNT] = [EventKind::FiredAt];

    fn slot(self) -> usize {
        match self {
            EventKind::FiredAt => 0,
        }
    }
}

/// Payload of a fire that produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FiredAt {
    pub location: Location,
    pub result: FireOutcome,
}

/// Events published by [`Game`](super::game::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    FiredAt(FiredAt),
}

impl GameEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::FiredAt(_) => EventKind::FiredAt,
        }
    }
}

/// Boxed observer callback.
pub type Observer = Box<dyn FnMut(&GameEvent)>;

/// Ordered observer lists, one per [`EventKind`].
#[derive(Default)]
pub struct Observers {
    lists: [Vec<Observer>; EventKind::COUNT],
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `observer` to the list for `kind`. There is no removal.
    pub fn add<F>(&mut self, kind: EventKind, observer: F)
    where
        F: FnMut(&GameEvent) + 'static,
    {
        self.lists[kind.slot()].push(Box::new(observer));
    }

    /// Number of observers registered for `kind`.
    pub fn len(&self, kind: EventKind) -> usize {
        self.lists[kind.slot()].len()
    }

    /// Call every observer registered for the event's kind, in order.
    pub fn notify(&mut self, event: &GameEvent) {
        let list = &mut self.lists[event.kind().slot()];
        log::trace!("notifying {} observer(s) of {:?}", list.len(), event.kind());
        for observer in list.iter_mut() {
            observer(event);
        }
    }
}

impl core::fmt::Debug for Observers {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for kind in EventKind::ALL {
            map.entry(&kind, &self.len(kind));
        }
        map.finish()
    }
}
