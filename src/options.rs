//! Game configuration options.

/// Configuration options for a Flip 7 game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use flip7::GameOptions;
///
/// let options = GameOptions::default()
///     .with_target_score(150)
///     .with_special_cards(2, 3, 3)
///     .with_three_draw_chain(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Total score at which a player wins the game.
    pub target_score: u32,
    /// Number of CHANCE cards in the catalog.
    pub chance_cards: u8,
    /// Number of FREEZE cards in the catalog.
    pub freeze_cards: u8,
    /// Number of `THREE_DRAW` cards in the catalog.
    pub three_draw_cards: u8,
    /// Extra draws granted by a `THREE_DRAW` card.
    pub three_draw_chain: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            target_score: 200,
            chance_cards: 3,
            freeze_cards: 3,
            three_draw_cards: 3,
            three_draw_chain: 3,
        }
    }
}

impl GameOptions {
    /// Sets the winning target score.
    ///
    /// # Example
    ///
    /// ```
    /// use flip7::GameOptions;
    ///
    /// let options = GameOptions::default().with_target_score(100);
    /// assert_eq!(options.target_score, 100);
    /// ```
    #[must_use]
    pub const fn with_target_score(mut self, target_score: u32) -> Self {
        self.target_score = target_score;
        self
    }

    /// Sets how many CHANCE, FREEZE and `THREE_DRAW` cards are seeded.
    ///
    /// Passing zeros yields the numeric-only deck.
    ///
    /// # Example
    ///
    /// ```
    /// use flip7::GameOptions;
    ///
    /// let options = GameOptions::default().with_special_cards(1, 0, 2);
    /// assert_eq!(options.chance_cards, 1);
    /// assert_eq!(options.freeze_cards, 0);
    /// assert_eq!(options.three_draw_cards, 2);
    /// ```
    #[must_use]
    pub const fn with_special_cards(mut self, chance: u8, freeze: u8, three_draw: u8) -> Self {
        self.chance_cards = chance;
        self.freeze_cards = freeze;
        self.three_draw_cards = three_draw;
        self
    }

    /// Sets the number of extra draws a `THREE_DRAW` card grants.
    ///
    /// # Example
    ///
    /// ```
    /// use flip7::GameOptions;
    ///
    /// let options = GameOptions::default().with_three_draw_chain(2);
    /// assert_eq!(options.three_draw_chain, 2);
    /// ```
    #[must_use]
    pub const fn with_three_draw_chain(mut self, draws: u32) -> Self {
        self.three_draw_chain = draws;
        self
    }
}
