use alloc::vec::Vec;

use crate::error::RoundError;
use crate::event::GameEvent;
use crate::player::Player;
use crate::result::{PlayerRoundResult, RoundResult};
use crate::rules;

use super::{Game, RoundState};

impl Game {
    /// Applies round scores to every player's total and closes the round.
    ///
    /// Busted players gain nothing. The round counter advances afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress or some player has
    /// neither stopped nor busted.
    pub fn end_round_and_apply_scores(&mut self) -> Result<RoundResult, RoundError> {
        if self.state != RoundState::InProgress {
            return Err(RoundError::InvalidState);
        }
        if !self.is_round_over() {
            return Err(RoundError::RoundNotFinished);
        }

        let players: Vec<PlayerRoundResult> = self
            .players
            .iter_mut()
            .map(|player| {
                let gained = player.bank_round();
                PlayerRoundResult {
                    id: player.id,
                    name: player.name.clone(),
                    gained,
                    total: player.total_score,
                    busted: player.busted,
                }
            })
            .collect();

        let result = RoundResult {
            round: self.round,
            players,
        };

        tracing::info!(round = self.round, "Round ended");
        self.emit(&GameEvent::RoundEnd {
            round: self.round,
            results: result.players.clone(),
        });

        self.round += 1;
        self.state = RoundState::RoundOver;

        if let Some(winner) = self.winner() {
            tracing::info!(
                player = winner.id,
                total = winner.total_score,
                "Target score reached"
            );
        }

        Ok(result)
    }

    /// Returns the first player in seating order with at least
    /// `target_score` points.
    #[must_use]
    pub fn get_winner(&self, target_score: u32) -> Option<&Player> {
        rules::find_winner(&self.players, target_score)
    }

    /// Returns the winner under the configured target score.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.get_winner(self.options.target_score)
    }
}
