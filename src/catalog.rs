//! Deck variants a match can be played with.

use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::error::CatalogError;

const STANDARD_52: [(&str, i32); 13] = [
    ("A", 11),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
    ("10", 10),
    ("J", 10),
    ("Q", 10),
    ("K", 10),
];

const SHORT_DECK_36: [(&str, i32); 9] = [
    ("A", 11),
    ("K", 10),
    ("Q", 10),
    ("J", 10),
    ("5", 5),
    ("4", 4),
    ("3", 3),
    ("2", 2),
    ("1", 1),
];

const FACE_AND_ACE: [(&str, i32); 13] = [
    ("A", 11),
    ("A", 11),
    ("A", 11),
    ("A", 11),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
    ("10", 10),
];

const RANDOM_NEGATIVE: [(&str, i32); 13] = [
    ("A", 11),
    ("-2", -2),
    ("-3", -3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("-7", -7),
    ("8", 8),
    ("9", 9),
    ("10", 10),
    ("J", 10),
    ("Q", 10),
    ("-K", -10),
];

/// Sum of the template with every ace counted at its demoted value.
///
/// A hand drawn from the template can only grow without bound when this is
/// positive.
fn lowest_total(cards: &[Card]) -> i64 {
    cards
        .iter()
        .map(|card| {
            let weight = i64::from(card.weight);
            if card.is_ace() {
                weight - 10
            } else {
                weight
            }
        })
        .sum()
}

/// Builds one card per suit for every rank, rank by rank.
fn generate(ranks: &[(&'static str, i32)]) -> Vec<Card> {
    let mut cards = Vec::with_capacity(ranks.len() * Suit::ALL.len());
    for &(value, weight) in ranks {
        for suit in Suit::ALL {
            cards.push(Card::new(value, suit, weight));
        }
    }
    cards
}

/// A named card set used as the template for fresh decks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckTemplate {
    /// Display name of the variant.
    pub name: &'static str,
    /// Cards of the variant, in template order.
    pub cards: Vec<Card>,
}

impl DeckTemplate {
    /// Creates a template from a name and its cards.
    #[must_use]
    pub const fn new(name: &'static str, cards: Vec<Card>) -> Self {
        Self { name, cards }
    }

    /// The plain 52-card deck.
    #[must_use]
    pub fn standard_52() -> Self {
        Self::new("Standard 52", generate(&STANDARD_52))
    }

    /// A 36-card deck without 6 through 10, with a 1-point card.
    #[must_use]
    pub fn short_deck_36() -> Self {
        Self::new("Short Deck 36", generate(&SHORT_DECK_36))
    }

    /// A 52-card deck without face cards and with sixteen aces.
    #[must_use]
    pub fn face_and_ace() -> Self {
        Self::new("Face & Ace Deck", generate(&FACE_AND_ACE))
    }

    /// A 52-card deck where some ranks subtract from the hand.
    #[must_use]
    pub fn random_negative() -> Self {
        Self::new("Random Negative Deck", generate(&RANDOM_NEGATIVE))
    }

    /// Returns the number of cards in the template.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the template has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The ordered set of deck variants a game rotates through.
///
/// Every entry contains at least one card and its cards add up to a positive
/// total with aces counted low, so the dealer always reaches its target
/// drawing from any entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckCatalog {
    entries: Vec<DeckTemplate>,
}

impl DeckCatalog {
    /// Creates a catalog from custom entries.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no entries, an entry has no cards, or
    /// an entry's cards cannot raise a hand's value.
    pub fn new(entries: Vec<DeckTemplate>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        for entry in &entries {
            if entry.is_empty() {
                return Err(CatalogError::EmptyDeck { name: entry.name });
            }
            if lowest_total(&entry.cards) <= 0 {
                return Err(CatalogError::NonPositiveDeck { name: entry.name });
            }
        }
        Ok(Self { entries })
    }

    /// Returns the template at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DeckTemplate> {
        self.entries.get(index)
    }

    /// Returns all templates.
    #[must_use]
    pub fn entries(&self) -> &[DeckTemplate] {
        &self.entries
    }

    /// Returns the number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; a catalog is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DeckCatalog {
    /// The four built-in variants.
    fn default() -> Self {
        Self {
            entries: alloc::vec![
                DeckTemplate::standard_52(),
                DeckTemplate::short_deck_36(),
                DeckTemplate::face_and_ace(),
                DeckTemplate::random_negative(),
            ],
        }
    }
}
