//! Draw, turn and round result types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use serde::Serialize;

use crate::card::{Card, SpecialKind};
use crate::player::PlayerId;

/// What happened when a single card was resolved for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// The card that was drawn.
    pub card: Card,
    /// The player's round score after resolution.
    pub round_score: u32,
    /// Whether the player busted on this card.
    pub busted: bool,
    /// Whether a CHANCE card absorbed a bust on this card.
    pub saved_by_chance: bool,
}

impl Resolution {
    /// Returns the special effect the caller must apply, if any.
    #[must_use]
    pub const fn special(&self) -> Option<SpecialKind> {
        self.card.special()
    }
}

/// Outcome of one attempt to draw from the pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A card was drawn and resolved.
    Drawn(Resolution),
    /// The pile was empty; the player has been stopped.
    DeckEmpty,
}

impl DrawOutcome {
    /// Returns the resolution if a card was drawn.
    #[must_use]
    pub const fn resolution(&self) -> Option<&Resolution> {
        match self {
            Self::Drawn(resolution) => Some(resolution),
            Self::DeckEmpty => None,
        }
    }

    /// Returns whether the pile was exhausted.
    #[must_use]
    pub const fn is_deck_empty(&self) -> bool {
        matches!(self, Self::DeckEmpty)
    }
}

/// Result of a full turn taken through [`crate::Game::take_turn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player drew; chained draws follow the first outcome.
    Drew(Vec<DrawOutcome>),
    /// The player stopped voluntarily.
    Stopped,
}

/// Score change for a single player at the end of a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRoundResult {
    /// The player ID.
    pub id: PlayerId,
    /// The player's display name.
    pub name: String,
    /// Points added to the total this round.
    pub gained: u32,
    /// Total score after this round.
    pub total: u32,
    /// Whether the player busted this round.
    pub busted: bool,
}

/// Result of the entire round after scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The round that just ended.
    pub round: u32,
    /// Results for each player, in seating order.
    pub players: Vec<PlayerRoundResult>,
}
