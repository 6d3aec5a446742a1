//! Game configuration options.

use crate::round::DEALER_FLOOR;

/// Configuration options for a session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use itemjack::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_health(5)
///     .with_max_items(2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Health at the start of a session and after a reset.
    pub starting_health: i32,
    /// Score that wins the session.
    pub victory_score: u32,
    /// Maximum number of items held at once.
    pub max_items: usize,
    /// Round wins needed to take a match. Values below 1 are treated as 1.
    pub rounds_to_win: u8,
    /// An item is granted every this many settled rounds. 0 disables grants.
    pub item_grant_interval: u32,
    /// Value the dealer draws up to once it has caught up with the player.
    pub dealer_floor: i32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_health: 10,
            victory_score: 10,
            max_items: 4,
            rounds_to_win: 3,
            item_grant_interval: 3,
            dealer_floor: DEALER_FLOOR,
        }
    }
}

impl GameOptions {
    /// Sets the starting health.
    ///
    /// # Example
    ///
    /// ```
    /// use itemjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_health(3);
    /// assert_eq!(options.starting_health, 3);
    /// ```
    #[must_use]
    pub const fn with_starting_health(mut self, health: i32) -> Self {
        self.starting_health = health;
        self
    }

    /// Sets the score that wins the session.
    ///
    /// # Example
    ///
    /// ```
    /// use itemjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_victory_score(5);
    /// assert_eq!(options.victory_score, 5);
    /// ```
    #[must_use]
    pub const fn with_victory_score(mut self, score: u32) -> Self {
        self.victory_score = score;
        self
    }

    /// Sets the inventory cap.
    ///
    /// # Example
    ///
    /// ```
    /// use itemjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_items(6);
    /// assert_eq!(options.max_items, 6);
    /// ```
    #[must_use]
    pub const fn with_max_items(mut self, max: usize) -> Self {
        self.max_items = max;
        self
    }

    /// Sets the round wins needed to take a match, at least 1.
    ///
    /// # Example
    ///
    /// ```
    /// use itemjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_rounds_to_win(2);
    /// assert_eq!(options.rounds_to_win, 2);
    /// assert_eq!(GameOptions::default().with_rounds_to_win(0).rounds_to_win, 1);
    /// ```
    #[must_use]
    pub const fn with_rounds_to_win(mut self, rounds: u8) -> Self {
        self.rounds_to_win = if rounds == 0 { 1 } else { rounds };
        self
    }

    /// Sets how many settled rounds pass between item grants.
    ///
    /// # Example
    ///
    /// ```
    /// use itemjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_item_grant_interval(0);
    /// assert_eq!(options.item_grant_interval, 0);
    /// ```
    #[must_use]
    pub const fn with_item_grant_interval(mut self, rounds: u32) -> Self {
        self.item_grant_interval = rounds;
        self
    }

    /// Sets the dealer floor.
    ///
    /// # Example
    ///
    /// ```
    /// use itemjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_floor(18);
    /// assert_eq!(options.dealer_floor, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_floor(mut self, floor: i32) -> Self {
        self.dealer_floor = floor;
        self
    }
}
