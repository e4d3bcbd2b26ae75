//! Card types and the card catalog.

use alloc::vec::Vec;
use core::fmt;

use serde::Serialize;

use crate::options::GameOptions;

/// Kind of a special action card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpecialKind {
    /// Grants one-time immunity to the next bust.
    Chance,
    /// Forces the drawing player to stop immediately.
    Freeze,
    /// Grants the drawing player a fixed number of extra draws.
    ThreeDraw,
}

impl SpecialKind {
    /// Every special kind, in catalog order.
    pub const ALL: [Self; 3] = [Self::Chance, Self::Freeze, Self::ThreeDraw];

    /// Returns the upper-case label used in logs and on screen.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Chance => "CHANCE",
            Self::Freeze => "FREEZE",
            Self::ThreeDraw => "THREE_DRAW",
        }
    }
}

/// A Flip 7 card.
///
/// Numeric cards serialize as a bare number, special cards as their label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Card {
    /// A numeric card worth its face value.
    Number(u8),
    /// A special action card worth nothing.
    Special(SpecialKind),
}

impl Card {
    /// Creates a numeric card.
    ///
    /// Note: This function does not validate the value. Values above
    /// [`MAX_NUMBER`] are accepted and score at face value.
    #[must_use]
    pub const fn number(value: u8) -> Self {
        Self::Number(value)
    }

    /// Returns the face value of a numeric card.
    #[must_use]
    pub const fn value(self) -> Option<u8> {
        match self {
            Self::Number(value) => Some(value),
            Self::Special(_) => None,
        }
    }

    /// Returns the kind of a special card.
    #[must_use]
    pub const fn special(self) -> Option<SpecialKind> {
        match self {
            Self::Number(_) => None,
            Self::Special(kind) => Some(kind),
        }
    }

    /// Returns whether this is a special card.
    #[must_use]
    pub const fn is_special(self) -> bool {
        matches!(self, Self::Special(_))
    }

    /// Points this card contributes to a round score.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Number(value) => value as u32,
            Self::Special(_) => 0,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Special(kind) => f.write_str(kind.label()),
        }
    }
}

/// Highest numeric card value.
pub const MAX_NUMBER: u8 = 12;

/// Number of numeric cards in a full catalog.
///
/// Value `n` appears `n` times, plus a single 0.
pub const NUMBER_CARD_COUNT: usize = 79;

/// Builds the full card population for one round, unshuffled.
///
/// The numeric cards come first in ascending order, followed by the special
/// cards in [`SpecialKind::ALL`] order with the counts from `options`.
#[must_use]
pub fn catalog(options: &GameOptions) -> Vec<Card> {
    let specials = options.chance_cards as usize
        + options.freeze_cards as usize
        + options.three_draw_cards as usize;
    let mut cards = Vec::with_capacity(NUMBER_CARD_COUNT + specials);

    for value in 0..=MAX_NUMBER {
        for _ in 0..value {
            cards.push(Card::Number(value));
        }
    }
    cards.push(Card::Number(0));

    for kind in SpecialKind::ALL {
        let count = match kind {
            SpecialKind::Chance => options.chance_cards,
            SpecialKind::Freeze => options.freeze_cards,
            SpecialKind::ThreeDraw => options.three_draw_cards,
        };
        for _ in 0..count {
            cards.push(Card::Special(kind));
        }
    }

    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_population_matches_face_values() {
        let options = GameOptions::default().with_special_cards(0, 0, 0);
        let cards = catalog(&options);
        assert_eq!(cards.len(), NUMBER_CARD_COUNT);

        for value in 1..=MAX_NUMBER {
            let copies = cards.iter().filter(|c| **c == Card::Number(value)).count();
            assert_eq!(copies, value as usize);
        }
        let zeros = cards.iter().filter(|c| **c == Card::Number(0)).count();
        assert_eq!(zeros, 1);
    }

    #[test]
    fn special_cards_follow_options() {
        let options = GameOptions::default().with_special_cards(1, 2, 4);
        let cards = catalog(&options);
        assert_eq!(cards.len(), NUMBER_CARD_COUNT + 7);

        let count = |kind| cards.iter().filter(|c| c.special() == Some(kind)).count();
        assert_eq!(count(SpecialKind::Chance), 1);
        assert_eq!(count(SpecialKind::Freeze), 2);
        assert_eq!(count(SpecialKind::ThreeDraw), 4);
    }

    #[test]
    fn special_cards_score_nothing() {
        assert_eq!(Card::Special(SpecialKind::Chance).points(), 0);
        assert_eq!(Card::number(9).points(), 9);
        assert_eq!(Card::Special(SpecialKind::ThreeDraw).to_string(), "THREE_DRAW");
    }
}
