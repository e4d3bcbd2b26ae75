//! A player's cards for the current round.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use serde::Serialize;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Card;

fn score_cards(cards: &[Card]) -> u32 {
    cards.iter().map(|card| card.points()).sum()
}

fn count_values(cards: &[Card]) -> HashMap<u8, usize> {
    let mut counts = HashMap::new();
    for value in cards.iter().filter_map(|card| card.value()) {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// The ordered cards a player has drawn this round.
///
/// Special cards stay in the hand for history but contribute nothing to the
/// score or the duplicate check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Sum of all numeric cards in the hand.
    #[must_use]
    pub fn score(&self) -> u32 {
        score_cards(&self.cards)
    }

    /// Returns whether any numeric value appears more than once.
    #[must_use]
    pub fn has_duplicate(&self) -> bool {
        count_values(&self.cards).values().any(|&count| count >= 2)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
