//! Game events and the sinks that receive them.
//!
//! The game reports every round start, draw, bust, stop and round end to an
//! [`EventSink`]. Sinks are write-only: the game never reads anything back, so
//! swapping [`NoopSink`] for a real logger cannot change how a game plays out.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use serde::Serialize;

use crate::card::Card;
use crate::hand::Hand;
use crate::player::PlayerId;
use crate::result::PlayerRoundResult;
use crate::sync::Mutex;

/// Identity of a seated player, as listed in a round start event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatedPlayer {
    /// The player ID.
    pub id: PlayerId,
    /// The player's display name.
    pub name: String,
}

/// A structured record of something that happened at the table.
///
/// Serializes as a flat object tagged by `"type"`, with camelCase fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum GameEvent {
    /// A new round has been dealt a fresh pile.
    RoundStart {
        /// Round number.
        round: u32,
        /// Every player, in seating order.
        players: Vec<SeatedPlayer>,
    },
    /// A card was drawn and resolved.
    Draw {
        /// Round number.
        round: u32,
        /// The drawing player.
        player_id: PlayerId,
        /// The drawing player's name.
        player_name: String,
        /// The card drawn.
        card_drawn: Card,
        /// The hand after the draw.
        hand: Hand,
        /// Round score after the draw.
        round_points: u32,
        /// Whether the draw busted the player.
        busted: bool,
        /// Whether a CHANCE card absorbed a bust.
        saved_by_chance: bool,
    },
    /// A player busted.
    Bust {
        /// Round number.
        round: u32,
        /// The busted player.
        player_id: PlayerId,
        /// The busted player's name.
        player_name: String,
    },
    /// A player chose to stop.
    Stop {
        /// Round number.
        round: u32,
        /// The stopping player.
        player_id: PlayerId,
        /// The stopping player's name.
        player_name: String,
        /// The hand being banked.
        hand: Hand,
        /// The round score being banked.
        round_points: u32,
    },
    /// Scores were applied at the end of a round.
    RoundEnd {
        /// Round number.
        round: u32,
        /// Per-player results, in seating order.
        results: Vec<PlayerRoundResult>,
    },
}

impl GameEvent {
    /// Returns the round the event belongs to.
    #[must_use]
    pub const fn round(&self) -> u32 {
        match self {
            Self::RoundStart { round, .. }
            | Self::Draw { round, .. }
            | Self::Bust { round, .. }
            | Self::Stop { round, .. }
            | Self::RoundEnd { round, .. } => *round,
        }
    }

    /// Returns the event tag as written to logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::RoundStart { .. } => "round_start",
            Self::Draw { .. } => "draw",
            Self::Bust { .. } => "bust",
            Self::Stop { .. } => "stop",
            Self::RoundEnd { .. } => "round_end",
        }
    }
}

/// Receives game events.
///
/// Recording is fire-and-forget; implementations deal with their own failures.
///
/// Events carry no timestamp. A sink that needs one stamps the event when it
/// records it, as `JsonLinesLogger` does with its `"t"` field.
pub trait EventSink {
    /// Records a single event.
    fn record(&self, event: &GameEvent);
}

/// A sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn record(&self, _event: &GameEvent) {}
}

/// A sink that keeps every event in memory.
///
/// Share it with the game through an [`Arc`] to inspect events afterwards.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<GameEvent>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Returns a copy of every event recorded so far.
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.lock().clone()
    }

    /// Removes and returns every event recorded so far.
    pub fn take(&self) -> Vec<GameEvent> {
        core::mem::take(&mut *self.events.lock())
    }

    /// Returns the number of events recorded.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Returns whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventSink for MemorySink {
    fn record(&self, event: &GameEvent) {
        self.events.lock().push(event.clone());
    }
}

impl<S: EventSink + ?Sized> EventSink for Arc<S> {
    fn record(&self, event: &GameEvent) {
        (**self).record(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn record(&self, event: &GameEvent) {
        (**self).record(event);
    }
}
