//! Resolution engine tests.

use flip7::{Card, Player, SpecialKind, rules};

const CHANCE: Card = Card::Special(SpecialKind::Chance);

fn draw_all(player: &mut Player, cards: &[Card]) {
    for &card in cards {
        rules::apply_draw(player, card);
    }
}

#[test]
fn duplicate_value_busts_and_forfeits_round_points() {
    let mut player = Player::new(0, "Ada");
    draw_all(&mut player, &[Card::number(3), Card::number(5)]);
    assert_eq!(player.round_score(), 8);

    let resolution = rules::apply_draw(&mut player, Card::number(3));

    assert!(resolution.busted);
    assert!(!resolution.saved_by_chance);
    assert_eq!(resolution.round_score, 0);
    assert!(player.is_busted());
    assert!(player.is_stopped());
    assert_eq!(player.round_score(), 0);
    assert_eq!(player.hand().len(), 3);
}

#[test]
fn chance_absorbs_first_duplicate_only() {
    let mut player = Player::new(0, "Ada");
    let armed = rules::apply_draw(&mut player, CHANCE);
    assert_eq!(armed.special(), Some(SpecialKind::Chance));
    assert!(player.has_unused_chance());

    rules::apply_draw(&mut player, Card::number(4));
    let saved = rules::apply_draw(&mut player, Card::number(4));

    assert!(saved.saved_by_chance);
    assert!(!saved.busted);
    assert_eq!(saved.round_score, 8);
    assert!(player.chance_used());
    assert!(player.is_active());

    // The saved pair is still in the hand, so any further numeric draw busts.
    let bust = rules::apply_draw(&mut player, Card::number(6));
    assert!(bust.busted);
    assert!(!bust.saved_by_chance);
    assert_eq!(bust.round_score, 0);
    assert_eq!(player.round_score(), 0);
    assert!(player.is_stopped());
}

#[test]
fn saved_value_drawn_again_busts() {
    let mut player = Player::new(0, "Ada");
    draw_all(&mut player, &[CHANCE, Card::number(4), Card::number(4)]);

    let bust = rules::apply_draw(&mut player, Card::number(4));
    assert!(bust.busted);
}

#[test]
fn second_chance_card_does_not_rearm() {
    let mut player = Player::new(0, "Ada");
    draw_all(&mut player, &[CHANCE, Card::number(2), Card::number(2), CHANCE]);
    assert!(player.chance_used());
    assert!(!player.has_unused_chance());

    let bust = rules::apply_draw(&mut player, Card::number(9));
    assert!(bust.busted);
    assert!(!bust.saved_by_chance);
}

#[test]
fn score_is_recomputed_from_hand() {
    let mut player = Player::new(0, "Ada");
    draw_all(&mut player, &[Card::number(2), Card::number(6), Card::number(1)]);
    assert_eq!(player.round_score(), 9);

    let resolution = rules::apply_draw(&mut player, CHANCE);
    assert_eq!(resolution.round_score, 9);
    assert_eq!(player.round_score(), 9);
    assert_eq!(player.hand().cards().last(), Some(&CHANCE));
}

#[test]
fn zero_cards_score_nothing_but_still_bust() {
    let mut player = Player::new(0, "Ada");
    draw_all(&mut player, &[Card::number(0), Card::number(12)]);
    assert_eq!(player.round_score(), 12);

    let bust = rules::apply_draw(&mut player, Card::number(0));
    assert!(bust.busted);
}

#[test]
fn round_is_over_only_when_everyone_finished() {
    let mut a = Player::new(0, "a");
    let mut b = Player::new(1, "b");
    let c = Player::new(2, "c");

    assert!(!rules::is_round_over(&[a.clone(), b.clone(), c.clone()]));

    a.stop();
    draw_all(&mut b, &[Card::number(7), Card::number(7)]);
    assert!(!rules::is_round_over(&[a.clone(), b.clone(), c.clone()]));

    let mut c = c;
    c.stop();
    assert!(rules::is_round_over(&[a, b, c]));
}

#[test]
fn winner_is_first_in_seat_order() {
    let players = [
        Player::new(0, "A").with_total_score(205),
        Player::new(1, "B").with_total_score(210),
    ];

    let winner = rules::find_winner(&players, 200).expect("winner");
    assert_eq!(winner.name(), "A");
    assert!(rules::find_winner(&players, 211).is_none());
}

#[test]
fn reset_keeps_total_score() {
    let mut player = Player::new(0, "Ada").with_total_score(40);
    draw_all(&mut player, &[CHANCE, Card::number(5), Card::number(5)]);
    player.stop();

    player.reset_for_new_round();

    assert!(player.hand().is_empty());
    assert_eq!(player.round_score(), 0);
    assert!(player.is_active());
    assert!(!player.has_chance());
    assert!(!player.chance_used());
    assert_eq!(player.total_score(), 40);
}
