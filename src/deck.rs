//! Shuffled decks and the self-refilling shoe a match draws from.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::catalog::DeckTemplate;

/// Returns a uniformly random integer in `[0, max)`.
///
/// `max` must be non-zero.
pub fn random_index<R: Rng + ?Sized>(rng: &mut R, max: usize) -> usize {
    rng.random_range(0..max)
}

/// Shuffles `cards` in place with the Fisher-Yates algorithm.
pub fn shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    for i in (1..cards.len()).rev() {
        let j = random_index(rng, i + 1);
        cards.swap(i, j);
    }
}

/// A stack of cards. The top of the deck is the end of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a shuffled copy of `cards`.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Self {
        let mut cards = cards.to_vec();
        shuffle(&mut cards, rng);
        Self { cards }
    }

    /// Creates an unshuffled deck that yields `draws` in the given order.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the top card, or `None` once the deck is spent.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is spent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The deck a match draws from, together with the template it refills from.
///
/// Drawing never fails: when the deck runs out, a freshly shuffled deck of
/// the same variant takes its place.
#[derive(Debug, Clone)]
pub struct Shoe {
    template: DeckTemplate,
    deck: Deck,
}

impl Shoe {
    /// Creates a shoe with a freshly shuffled deck of `template`.
    ///
    /// `template` must contain at least one card; catalog entries always do.
    #[must_use]
    pub(crate) fn new<R: Rng + ?Sized>(template: DeckTemplate, rng: &mut R) -> Self {
        log::debug!("using deck: {}", template.name);
        let deck = Deck::new(&template.cards, rng);
        Self { template, deck }
    }

    /// Draws the top card, replacing a spent deck first.
    pub fn pop<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Card {
        loop {
            if let Some(card) = self.deck.draw() {
                return card;
            }
            log::debug!("deck spent, refilling from {}", self.template.name);
            self.deck = Deck::new(&self.template.cards, rng);
        }
    }

    /// Returns the template this shoe refills from.
    #[must_use]
    pub const fn template(&self) -> &DeckTemplate {
        &self.template
    }

    /// Returns the current deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Swaps in a different deck, keeping the refill template.
    pub fn replace_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }
}
