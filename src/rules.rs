//! Card resolution and round predicates.
//!
//! These functions only touch the player passed in. Side effects that involve
//! turn order (the FREEZE stop, the `THREE_DRAW` chain) are applied by
//! [`crate::Game`], which reads them from [`Resolution::special`].

use crate::card::{Card, SpecialKind};
use crate::player::Player;
use crate::result::Resolution;

/// Resolves a freshly drawn card against `player`.
///
/// The card always lands in the hand. Special cards end resolution right
/// away; a CHANCE card arms the player's one-shot bust immunity. For numeric
/// cards the round score is recomputed from the whole hand, then a bust is
/// triggered if any numeric value appears twice or more. An unused CHANCE
/// absorbs the bust and the score stands; otherwise the player is busted,
/// stopped and their round score drops to 0.
///
/// A saved pair stays in the hand, so once the CHANCE is spent the next
/// numeric draw busts.
///
/// # Example
///
/// ```
/// use flip7::{Card, Player, rules};
///
/// let mut player = Player::new(0, "Ada");
/// rules::apply_draw(&mut player, Card::number(3));
/// rules::apply_draw(&mut player, Card::number(5));
/// let resolution = rules::apply_draw(&mut player, Card::number(3));
///
/// assert!(resolution.busted);
/// assert_eq!(player.round_score(), 0);
/// ```
pub fn apply_draw(player: &mut Player, card: Card) -> Resolution {
    player.hand.add_card(card);

    match card {
        Card::Special(SpecialKind::Chance) => {
            player.has_chance = true;
            return resolution(player, card, false);
        }
        Card::Special(SpecialKind::Freeze | SpecialKind::ThreeDraw) => {
            return resolution(player, card, false);
        }
        Card::Number(_) => {}
    }

    player.round_score = player.hand.score();

    if player.hand.has_duplicate() {
        if player.has_unused_chance() {
            player.chance_used = true;
            return resolution(player, card, true);
        }

        player.busted = true;
        player.stopped = true;
        player.round_score = 0;
    }

    resolution(player, card, false)
}

const fn resolution(player: &Player, card: Card, saved_by_chance: bool) -> Resolution {
    Resolution {
        card,
        round_score: player.round_score,
        busted: player.busted,
        saved_by_chance,
    }
}

/// Returns whether every player has stopped or busted.
#[must_use]
pub fn is_round_over(players: &[Player]) -> bool {
    players.iter().all(|p| p.stopped || p.busted)
}

/// Returns the first player in seating order whose total reaches `target_score`.
///
/// Seat order breaks ties, not the size of the total.
#[must_use]
pub fn find_winner(players: &[Player], target_score: u32) -> Option<&Player> {
    players.iter().find(|p| p.total_score >= target_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw_all(player: &mut Player, cards: &[Card]) -> Resolution {
        let mut last = None;
        for &card in cards {
            last = Some(apply_draw(player, card));
        }
        last.expect("at least one card")
    }

    #[test]
    fn numeric_draw_recomputes_score() {
        let mut player = Player::new(0, "p");
        let res = draw_all(&mut player, &[Card::number(2), Card::number(6), Card::number(1)]);
        assert_eq!(res.round_score, 9);
        assert!(!res.busted);
        assert!(!player.is_stopped());
    }

    #[test]
    fn freeze_and_three_draw_leave_status_alone() {
        let mut player = Player::new(0, "p");
        apply_draw(&mut player, Card::number(4));

        let freeze = apply_draw(&mut player, Card::Special(SpecialKind::Freeze));
        assert_eq!(freeze.special(), Some(SpecialKind::Freeze));
        assert_eq!(freeze.round_score, 4);
        assert!(!player.is_stopped());

        let chain = apply_draw(&mut player, Card::Special(SpecialKind::ThreeDraw));
        assert_eq!(chain.special(), Some(SpecialKind::ThreeDraw));
        assert!(player.is_active());
        assert_eq!(player.hand().len(), 3);
    }

    #[test]
    fn saved_pair_busts_on_next_numeric_draw() {
        let mut player = Player::new(0, "p");
        draw_all(
            &mut player,
            &[
                Card::Special(SpecialKind::Chance),
                Card::number(4),
                Card::number(4),
            ],
        );
        assert!(player.chance_used());

        let res = apply_draw(&mut player, Card::number(7));
        assert!(res.busted);
        assert_eq!(res.round_score, 0);
        assert!(player.is_stopped());
    }

    #[test]
    fn special_draw_after_save_does_not_bust() {
        let mut player = Player::new(0, "p");
        draw_all(
            &mut player,
            &[
                Card::Special(SpecialKind::Chance),
                Card::number(4),
                Card::number(4),
            ],
        );

        let res = apply_draw(&mut player, Card::Special(SpecialKind::ThreeDraw));
        assert!(!res.busted);
        assert_eq!(res.round_score, 8);
    }

    #[test]
    fn round_over_requires_everyone_finished() {
        let mut a = Player::new(0, "a");
        let mut b = Player::new(1, "b");
        assert!(!is_round_over(&[a.clone(), b.clone()]));

        a.stop();
        assert!(!is_round_over(&[a.clone(), b.clone()]));

        draw_all(&mut b, &[Card::number(9), Card::number(9)]);
        assert!(is_round_over(&[a, b]));
    }
}
