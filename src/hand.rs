//! Player and dealer hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest value a hand can have without busting.
pub const BLACKJACK: i32 = 21;

/// Evaluates a list of cards.
///
/// Card weights are summed; then, while the total exceeds 21 and there is an
/// ace not yet demoted, 10 is subtracted for that ace.
#[must_use]
pub fn hand_value(cards: &[Card]) -> i32 {
    let mut value: i32 = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.weight);
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    value
}

/// A hand of cards in a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards`.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Returns the first card dealt.
    #[must_use]
    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Removes and returns the card at `index`, shifting later cards down.
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Adds `delta` to the weight of the card at `index`.
    ///
    /// Returns the new weight, or `None` if there is no such card.
    pub fn adjust_weight(&mut self, index: usize, delta: i32) -> Option<i32> {
        let card = self.cards.get_mut(index)?;
        card.weight += delta;
        Some(card.weight)
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> i32 {
        hand_value(&self.cards)
    }

    /// Sum of weights without ace demotion.
    #[must_use]
    pub fn raw_total(&self) -> i32 {
        self.cards.iter().map(|card| card.weight).sum()
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
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
}
