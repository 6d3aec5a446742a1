//! Card types.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in catalog generation order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Spades => "♠",
            Self::Hearts => "♥",
            Self::Diamonds => "♦",
            Self::Clubs => "♣",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A playing card.
///
/// The scoring contribution of a card is its `weight`, which depends on the
/// deck variant it was built from and may be negative. Items can change the
/// weight of a card in a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank label, e.g. `"A"`, `"10"` or `"-K"`.
    pub value: &'static str,
    /// The suit of the card.
    pub suit: Suit,
    /// Points the card adds to a hand.
    pub weight: i32,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: the label and weight are not cross-checked. Only the label `"A"`
    /// is treated as an ace when evaluating a hand.
    #[must_use]
    pub const fn new(value: &'static str, suit: Suit, weight: i32) -> Self {
        Self {
            value,
            suit,
            weight,
        }
    }

    /// Returns whether this card is an ace.
    #[must_use]
    pub fn is_ace(&self) -> bool {
        self.value == "A"
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}
