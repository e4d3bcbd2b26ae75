//! The shuffled draw pile.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;

/// Cards remaining to be drawn this round.
///
/// Cards are drawn from the end of the sequence, so after a shuffle the draw
/// order is whatever permutation the shuffle produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawPile {
    cards: Vec<Card>,
}

impl DrawPile {
    /// Creates a pile from `cards` and shuffles it once.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(cards: Vec<Card>, rng: &mut R) -> Self {
        let mut pile = Self { cards };
        pile.shuffle(rng);
        pile
    }

    /// Creates an unshuffled pile that yields `draws` in the given order.
    ///
    /// ```
    /// use flip7::{Card, DrawPile};
    ///
    /// let mut pile = DrawPile::stacked([Card::number(3), Card::number(7)]);
    /// assert_eq!(pile.draw(), Some(Card::number(3)));
    /// assert_eq!(pile.draw(), Some(Card::number(7)));
    /// assert_eq!(pile.draw(), None);
    /// ```
    #[must_use]
    pub fn stacked<I: IntoIterator<Item = Card>>(draws: I) -> Self {
        let mut cards: Vec<Card> = draws.into_iter().collect();
        cards.reverse();
        Self { cards }
    }

    /// Re-randomizes the order of the remaining cards (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the next card, or `None` once the pile is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the remaining cards; the last one is drawn next.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
