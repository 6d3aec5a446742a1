//! Consumable items that alter a round outside normal draws.

use core::fmt;

/// A single-use item held in the player's inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Item {
    /// Discard one of the player's cards.
    RemoveOwnCard,
    /// Take one of the dealer's cards; the dealer draws a replacement.
    StealDealerCard,
    /// Add 1 to the weight of one of the player's cards.
    IncrementOwnCard,
    /// Subtract 1 from the weight of one of the player's cards.
    DecrementOwnCard,
}

impl Item {
    /// Every item kind, in grant-table order.
    pub const ALL: [Self; 4] = [
        Self::RemoveOwnCard,
        Self::StealDealerCard,
        Self::IncrementOwnCard,
        Self::DecrementOwnCard,
    ];

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RemoveOwnCard => "Remove your card",
            Self::StealDealerCard => "Steal a dealer card",
            Self::IncrementOwnCard => "+1 to your card",
            Self::DecrementOwnCard => "-1 from your card",
        }
    }

    /// Returns whether the item picks a card from the dealer's hand.
    #[must_use]
    pub const fn targets_dealer(self) -> bool {
        matches!(self, Self::StealDealerCard)
    }

    /// Question asked when choosing the card to apply the item to.
    #[must_use]
    pub const fn card_prompt(self) -> &'static str {
        match self {
            Self::RemoveOwnCard => "Which card do you remove?",
            Self::StealDealerCard => "Which dealer card do you steal?",
            Self::IncrementOwnCard => "Which card gets +1?",
            Self::DecrementOwnCard => "Which card gets -1?",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
