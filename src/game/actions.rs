use alloc::vec::Vec;

use crate::card::SpecialKind;
use crate::error::ActionError;
use crate::event::GameEvent;
use crate::result::{DrawOutcome, TurnOutcome};
use crate::rules;

use super::{Game, RoundState, TurnChoice};

impl Game {
    fn ensure_current_active(&self) -> Result<(), ActionError> {
        if self.state != RoundState::InProgress {
            return Err(ActionError::InvalidState);
        }

        if !self.players[self.current].is_active() {
            return Err(ActionError::PlayerInactive);
        }

        Ok(())
    }

    /// Player action: draw a card for the current player.
    ///
    /// The first outcome is the requested draw. A `THREE_DRAW` card queues
    /// [`GameOptions::three_draw_chain`](crate::GameOptions) more draws for the same
    /// player, which follow in the returned list; a chain stops early once the
    /// player busts or is frozen. A FREEZE card stops the player. When the
    /// pile is empty the player is stopped and [`DrawOutcome::DeckEmpty`] is
    /// the last outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress or the current player has
    /// already stopped or busted.
    pub fn draw_for_current_player(&mut self) -> Result<Vec<DrawOutcome>, ActionError> {
        self.ensure_current_active()?;

        let index = self.current;
        let mut outcomes = Vec::new();
        let mut pending: u32 = 1;

        while pending > 0 && self.players[index].is_active() {
            pending -= 1;

            let Some(card) = self.pile.draw() else {
                self.players[index].stop();
                tracing::debug!(
                    round = self.round,
                    player = self.players[index].id,
                    "Draw pile exhausted, player stopped"
                );
                outcomes.push(DrawOutcome::DeckEmpty);
                break;
            };

            let resolution = rules::apply_draw(&mut self.players[index], card);
            let player = &self.players[index];

            tracing::debug!(
                round = self.round,
                player = player.id,
                card = %card,
                round_score = resolution.round_score,
                busted = resolution.busted,
                saved_by_chance = resolution.saved_by_chance,
                "Card drawn"
            );
            self.emit(&GameEvent::Draw {
                round: self.round,
                player_id: player.id,
                player_name: player.name.clone(),
                card_drawn: card,
                hand: player.hand.clone(),
                round_points: player.round_score,
                busted: player.busted,
                saved_by_chance: resolution.saved_by_chance,
            });
            if resolution.busted {
                self.emit(&GameEvent::Bust {
                    round: self.round,
                    player_id: player.id,
                    player_name: player.name.clone(),
                });
            }

            match resolution.special() {
                Some(SpecialKind::Freeze) => self.players[index].stop(),
                Some(SpecialKind::ThreeDraw) => {
                    pending = pending.saturating_add(self.options.three_draw_chain);
                }
                Some(SpecialKind::Chance) | None => {}
            }

            outcomes.push(DrawOutcome::Drawn(resolution));
        }

        Ok(outcomes)
    }

    /// Player action: stop and bank the current round score.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress or the current player has
    /// already stopped or busted.
    pub fn stop_current_player(&mut self) -> Result<(), ActionError> {
        self.ensure_current_active()?;

        let player = &mut self.players[self.current];
        player.stop();

        let player = &self.players[self.current];
        self.emit(&GameEvent::Stop {
            round: self.round,
            player_id: player.id,
            player_name: player.name.clone(),
            hand: player.hand.clone(),
            round_points: player.round_score,
        });

        Ok(())
    }

    /// Plays one turn for the current player, then passes the turn on.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress or the current player has
    /// already stopped or busted.
    pub fn take_turn(&mut self, choice: TurnChoice) -> Result<TurnOutcome, ActionError> {
        let outcome = match choice {
            TurnChoice::Draw => TurnOutcome::Drew(self.draw_for_current_player()?),
            TurnChoice::Stop => {
                self.stop_current_player()?;
                TurnOutcome::Stopped
            }
        };

        self.next_player();
        Ok(outcome)
    }
}
