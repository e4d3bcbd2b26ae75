//! Round state and turn choice types.

use alloc::vec::Vec;
use core::str::FromStr;

use serde::Serialize;

use crate::error::ParseChoiceError;
use crate::player::{Player, PlayerId};

/// Lifecycle of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundState {
    /// No round has been started yet.
    #[default]
    NotStarted,
    /// Players are taking turns.
    InProgress,
    /// Scores for the last round have been applied.
    RoundOver,
}

/// The two choices a player has on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnChoice {
    /// Draw a card.
    Draw,
    /// Stop and bank the round score.
    Stop,
}

impl FromStr for TurnChoice {
    type Err = ParseChoiceError;

    /// Accepts `1`, `d` or `draw` and `2`, `s` or `stop`, ignoring case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "1" || s.eq_ignore_ascii_case("d") || s.eq_ignore_ascii_case("draw") {
            Ok(Self::Draw)
        } else if s == "2" || s.eq_ignore_ascii_case("s") || s.eq_ignore_ascii_case("stop") {
            Ok(Self::Stop)
        } else {
            Err(ParseChoiceError)
        }
    }
}

/// Read-only copy of the table handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    /// Current round number.
    pub round: u32,
    /// Current round state.
    pub state: RoundState,
    /// The player whose turn it is, once a round has started.
    pub current_player: Option<PlayerId>,
    /// Every player, in seating order.
    pub players: Vec<Player>,
    /// Cards left in the pile.
    pub cards_remaining: usize,
}
