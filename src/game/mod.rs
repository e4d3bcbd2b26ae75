//! Game engine and round lifecycle.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card;
use crate::error::{JoinError, RoundError};
use crate::event::{EventSink, GameEvent, NoopSink, SeatedPlayer};
use crate::options::GameOptions;
use crate::pile::DrawPile;
use crate::player::{Player, PlayerId};
use crate::rules;

mod actions;
mod scoring;
pub mod state;

pub use state::{GameSnapshot, RoundState, TurnChoice};

/// Minimum number of players needed to start a round.
pub const MIN_PLAYERS: usize = 2;

/// A Flip 7 game engine that manages players, the draw pile and round flow.
///
/// The game owns every [`Player`] and lends one out to [`rules::apply_draw`]
/// per draw. A round runs `start_new_round`, then draw/stop turns advanced
/// with `next_player` until [`Game::is_round_over`], then
/// `end_round_and_apply_scores`.
///
/// # Example
///
/// ```
/// use flip7::{Game, GameOptions, TurnChoice};
///
/// let mut game = Game::new(GameOptions::default(), 42);
/// game.join("Ada").unwrap();
/// game.join("Brian").unwrap();
///
/// game.start_new_round().unwrap();
/// while !game.is_round_over() {
///     game.take_turn(TurnChoice::Stop).unwrap();
/// }
/// let result = game.end_round_and_apply_scores().unwrap();
/// assert_eq!(result.players.len(), 2);
/// ```
pub struct Game {
    /// Cards left to draw this round.
    pub pile: DrawPile,
    /// Game options.
    pub options: GameOptions,
    /// Current round state.
    state: RoundState,
    /// Round number, starting at 1.
    round: u32,
    /// Players in seating order.
    players: Vec<Player>,
    /// Index of the player whose turn it is.
    current: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
    /// Receiver for game events.
    sink: Box<dyn EventSink>,
}

impl Game {
    /// Creates a new game with the given seed.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new game that shuffles with `rng`.
    #[must_use]
    pub fn with_rng(options: GameOptions, rng: ChaCha8Rng) -> Self {
        Self {
            pile: DrawPile::default(),
            options,
            state: RoundState::NotStarted,
            round: 1,
            players: Vec::new(),
            current: 0,
            rng,
            sink: Box::new(NoopSink),
        }
    }

    /// Sends game events to `sink` instead of discarding them.
    #[must_use]
    pub fn with_sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Seats a new player and returns their ID.
    ///
    /// # Errors
    ///
    /// Returns an error if a round has already been started or every ID is
    /// taken.
    pub fn join(&mut self, name: impl Into<String>) -> Result<PlayerId, JoinError> {
        if self.state != RoundState::NotStarted {
            return Err(JoinError::GameStarted);
        }
        let id = PlayerId::try_from(self.players.len()).map_err(|_| JoinError::TableFull)?;
        self.players.push(Player::new(id, name));
        Ok(id)
    }

    /// Returns every player in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player with the given ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id as usize)
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the current round number.
    ///
    /// This is the round being played, or the next one once scores for the
    /// previous round have been applied.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the number of cards left in the pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.pile.len()
    }

    /// Starts a new round.
    ///
    /// Every player's hand and round flags are cleared, the turn goes back to
    /// the first seat, and a freshly shuffled pile replaces the old one.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress or fewer than
    /// [`MIN_PLAYERS`] are seated.
    pub fn start_new_round(&mut self) -> Result<(), RoundError> {
        if self.state == RoundState::InProgress {
            return Err(RoundError::InvalidState);
        }
        if self.players.len() < MIN_PLAYERS {
            return Err(RoundError::NotEnoughPlayers);
        }

        for player in &mut self.players {
            player.reset_for_new_round();
        }
        self.current = 0;
        self.pile = DrawPile::new(card::catalog(&self.options), &mut self.rng);
        self.state = RoundState::InProgress;

        tracing::info!(
            round = self.round,
            players = self.players.len(),
            cards = self.pile.len(),
            "Round started"
        );
        self.emit(&GameEvent::RoundStart {
            round: self.round,
            players: self
                .players
                .iter()
                .map(|p| SeatedPlayer {
                    id: p.id,
                    name: p.name.clone(),
                })
                .collect(),
        });

        Ok(())
    }

    /// Returns the player whose turn it is.
    ///
    /// # Panics
    ///
    /// Panics if no round has been started yet.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        assert!(
            self.state != RoundState::NotStarted,
            "current_player called before the first round was started"
        );
        &self.players[self.current]
    }

    /// Moves the turn to the next player who has neither stopped nor busted.
    ///
    /// If nobody is eligible the turn stays put and the current player is
    /// returned unchanged. That does not mean the round goes on; check
    /// [`Game::is_round_over`] after every turn.
    ///
    /// # Panics
    ///
    /// Panics if no round has been started yet.
    pub fn next_player(&mut self) -> &Player {
        let count = self.players.len();
        for _ in 0..count {
            self.current = (self.current + 1) % count;
            if self.players[self.current].is_active() {
                break;
            }
        }
        self.current_player()
    }

    /// Returns whether every player has stopped or busted.
    #[must_use]
    pub fn is_round_over(&self) -> bool {
        rules::is_round_over(&self.players)
    }

    /// Returns a read-only copy of the table for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let current_player = match self.state {
            RoundState::NotStarted => None,
            RoundState::InProgress | RoundState::RoundOver => Some(self.players[self.current].id),
        };

        GameSnapshot {
            round: self.round,
            state: self.state,
            current_player,
            players: self.players.clone(),
            cards_remaining: self.pile.len(),
        }
    }

    fn emit(&self, event: &GameEvent) {
        self.sink.record(event);
    }
}
