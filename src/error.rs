//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when seating a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// The player list is fixed once the first round has started.
    #[error("the game has already started")]
    GameStarted,
    /// No player IDs are left.
    #[error("the table is full")]
    TableFull,
}

/// Errors that can occur when starting or ending a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid round state for this operation.
    #[error("invalid round state for this operation")]
    InvalidState,
    /// Fewer than two players are seated.
    #[error("at least two players are required")]
    NotEnoughPlayers,
    /// Some player has neither stopped nor busted.
    #[error("the round is not finished")]
    RoundNotFinished,
}

/// Errors that can occur during a player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No round is in progress.
    #[error("no round is in progress")]
    InvalidState,
    /// The current player has already stopped or busted.
    #[error("the current player has already stopped or busted")]
    PlayerInactive,
}

/// Error returned when a turn choice cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unrecognized turn choice (expected draw or stop)")]
pub struct ParseChoiceError;
