//! Per-player state.

use alloc::string::String;

use serde::Serialize;

use crate::hand::Hand;

/// Stable player identifier, assigned in seating order from 0.
pub type PlayerId = u8;

/// A seated player and their state for the current round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub(crate) id: PlayerId,
    pub(crate) name: String,
    pub(crate) hand: Hand,
    pub(crate) round_score: u32,
    pub(crate) stopped: bool,
    pub(crate) busted: bool,
    pub(crate) total_score: u32,
    pub(crate) has_chance: bool,
    pub(crate) chance_used: bool,
}

impl Player {
    /// Creates a player with an empty hand and no points.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Hand::new(),
            round_score: 0,
            stopped: false,
            busted: false,
            total_score: 0,
            has_chance: false,
            chance_used: false,
        }
    }

    /// Sets the cumulative score, e.g. when seating a player mid-match.
    #[must_use]
    pub const fn with_total_score(mut self, total_score: u32) -> Self {
        self.total_score = total_score;
        self
    }

    /// Returns the player ID.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards drawn this round.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the points banked so far this round (0 once busted).
    #[must_use]
    pub const fn round_score(&self) -> u32 {
        self.round_score
    }

    /// Returns the cumulative score across finished rounds.
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Returns whether the player has stopped taking cards this round.
    ///
    /// Busted players always read as stopped.
    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Returns whether the player busted this round.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.busted
    }

    /// Returns whether the player still takes turns this round.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.stopped && !self.busted
    }

    /// Returns whether the player drew a CHANCE card this round.
    #[must_use]
    pub const fn has_chance(&self) -> bool {
        self.has_chance
    }

    /// Returns whether the CHANCE card has already saved the player.
    #[must_use]
    pub const fn chance_used(&self) -> bool {
        self.chance_used
    }

    /// Returns whether a CHANCE card is held and still unused.
    #[must_use]
    pub const fn has_unused_chance(&self) -> bool {
        self.has_chance && !self.chance_used
    }

    /// Marks the player as stopped for the rest of the round.
    pub const fn stop(&mut self) {
        self.stopped = true;
    }

    /// Clears the hand, round score and every per-round flag.
    ///
    /// The total score is kept.
    pub fn reset_for_new_round(&mut self) {
        self.hand.clear();
        self.round_score = 0;
        self.stopped = false;
        self.busted = false;
        self.has_chance = false;
        self.chance_used = false;
    }

    /// Adds the round score to the total unless the player busted.
    ///
    /// Returns the points gained.
    pub(crate) const fn bank_round(&mut self) -> u32 {
        let gained = if self.busted { 0 } else { self.round_score };
        self.total_score = self.total_score.saturating_add(gained);
        gained
    }
}
