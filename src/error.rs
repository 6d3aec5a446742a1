//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when using an item.
///
/// None of these leave partial changes behind: a rejected item stays in the
/// inventory and both hands are untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ItemError {
    /// The current round has already been settled.
    #[error("the round is already over")]
    RoundOver,
    /// The inventory is empty.
    #[error("no items to use")]
    NoItems,
    /// No item in the given inventory slot.
    #[error("no item in slot {slot} (inventory holds {available})")]
    InvalidSlot {
        /// Requested slot (0-based).
        slot: usize,
        /// Number of items held.
        available: usize,
    },
    /// No card at the given position of the target hand.
    #[error("no card at position {index} (hand holds {len})")]
    CardOutOfRange {
        /// Requested card position (0-based).
        index: usize,
        /// Number of cards in the target hand.
        len: usize,
    },
    /// The target hand has no cards to pick from.
    #[error("the target hand has no cards")]
    NoTargetCard,
    /// The input collaborator cancelled the selection.
    #[error("item use cancelled")]
    Cancelled,
}

/// Errors that can occur when building a deck catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog has no entries.
    #[error("deck catalog has no entries")]
    Empty,
    /// An entry has no cards.
    #[error("deck `{name}` has no cards")]
    EmptyDeck {
        /// Name of the offending entry.
        name: &'static str,
    },
    /// An entry's cards add up to zero or less with aces counted as 1.
    #[error("deck `{name}` cannot raise a hand's value")]
    NonPositiveDeck {
        /// Name of the offending entry.
        name: &'static str,
    },
}
