//! A match: rounds played on one deck variant until a side wins enough.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::catalog::DeckCatalog;
use crate::deck::{Shoe, random_index};
use crate::error::ItemError;
use crate::item::Item;
use crate::options::GameOptions;
use crate::result::RoundSettlement;
use crate::round::Round;

use super::MatchOutcome;

/// A sequence of rounds sharing one deck variant.
#[derive(Debug, Clone)]
pub struct Match {
    shoe: Shoe,
    deck_index: usize,
    round: Round,
    rounds_played_in_match: u32,
    rounds_played_in_game: u32,
    player_rounds_won: u8,
    dealer_rounds_won: u8,
    is_over: bool,
    history: Vec<bool>,
    rounds_to_win: u8,
    item_grant_interval: u32,
    dealer_floor: i32,
}

/// Picks a catalog index other than `previous`, unless there is only one.
fn pick_deck_index<R: Rng + ?Sized>(catalog: &DeckCatalog, previous: usize, rng: &mut R) -> usize {
    if catalog.len() < 2 {
        return 0;
    }
    let mut index = previous;
    while index == previous {
        index = random_index(rng, catalog.len());
    }
    index
}

impl Match {
    /// Starts a match on a deck variant different from `previous_index` and
    /// deals its first round.
    ///
    /// The first match of a session passes 0, so it never uses the first
    /// catalog entry.
    pub fn new<R: Rng + ?Sized>(
        catalog: &DeckCatalog,
        previous_index: usize,
        options: &GameOptions,
        rng: &mut R,
    ) -> Self {
        let deck_index = pick_deck_index(catalog, previous_index, rng);
        let template = catalog.entries()[deck_index].clone();
        let mut shoe = Shoe::new(template, rng);
        let round = Round::deal(&mut shoe, rng);

        Self {
            shoe,
            deck_index,
            round,
            rounds_played_in_match: 0,
            rounds_played_in_game: 0,
            player_rounds_won: 0,
            dealer_rounds_won: 0,
            is_over: false,
            history: Vec::new(),
            rounds_to_win: options.rounds_to_win.max(1),
            item_grant_interval: options.item_grant_interval,
            dealer_floor: options.dealer_floor,
        }
    }

    /// Draws a card, refilling the deck from the same variant when spent.
    pub fn pop_deck<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Card {
        self.shoe.pop(rng)
    }

    /// Replaces the current round with a freshly dealt one.
    ///
    /// Does nothing once the match is over.
    pub fn start_round<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.is_over {
            return;
        }
        self.round = Round::deal(&mut self.shoe, rng);
    }

    /// Player action: hit in the current round.
    pub fn player_hit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Card> {
        self.round.player_hit(&mut self.shoe, rng)
    }

    /// Player action: stand in the current round. Returns the dealer's draws.
    pub fn player_stand<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Card> {
        self.round
            .player_stand_with_floor(&mut self.shoe, rng, self.dealer_floor)
    }

    /// Applies `item` to the card at `index` of its target hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the target hand has no card at `index`.
    pub fn apply_item<R: Rng + ?Sized>(
        &mut self,
        item: Item,
        index: usize,
        rng: &mut R,
    ) -> Result<(), ItemError> {
        match item {
            Item::RemoveOwnCard => self.round.remove_player_card(index).map(|_| ()),
            Item::StealDealerCard => self
                .round
                .steal_dealer_card(index, &mut self.shoe, rng)
                .map(|_| ()),
            Item::IncrementOwnCard => self.round.adjust_player_card(index, 1).map(|_| ()),
            Item::DecrementOwnCard => self.round.adjust_player_card(index, -1).map(|_| ()),
        }
    }

    /// Settles the current round if it has been decided.
    ///
    /// Returns `None` while the round continues, and for a round that was
    /// already settled. Otherwise the round is closed, the dealer revealed,
    /// the counters and tallies updated, and the settlement returned.
    ///
    /// A tie closes the round without changing either tally.
    pub fn check_match(&mut self) -> Option<RoundSettlement> {
        if self.round.is_over() {
            return None;
        }
        let status = self.round.check_round()?;

        self.round.finish();
        self.rounds_played_in_match += 1;
        self.rounds_played_in_game += 1;
        let grants_item = self.item_grant_interval != 0
            && self.rounds_played_in_game % self.item_grant_interval == 0;

        let outcome = match status.player_won() {
            Some(true) => {
                self.player_rounds_won = self.player_rounds_won.saturating_add(1);
                self.history.push(true);
                (self.player_rounds_won >= self.rounds_to_win)
                    .then_some(MatchOutcome::PlayerWonMatch)
            }
            Some(false) => {
                self.dealer_rounds_won = self.dealer_rounds_won.saturating_add(1);
                self.history.push(false);
                (self.dealer_rounds_won >= self.rounds_to_win)
                    .then_some(MatchOutcome::DealerWonMatch)
            }
            None => None,
        };
        log::debug!(
            "round settled: {status:?} ({}-{})",
            self.player_rounds_won,
            self.dealer_rounds_won
        );
        if let Some(outcome) = outcome {
            log::info!("match over: {outcome:?}");
            self.is_over = true;
            self.rounds_played_in_game = 0;
        }

        Some(RoundSettlement {
            status,
            grants_item,
            outcome,
        })
    }

    /// Returns the current round.
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the shoe the match draws from.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the shoe mutably, e.g. to stack the next draws.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }

    /// Returns the catalog index of the deck variant in use.
    #[must_use]
    pub const fn deck_index(&self) -> usize {
        self.deck_index
    }

    /// Returns the name of the deck variant in use.
    #[must_use]
    pub fn deck_name(&self) -> &'static str {
        self.shoe.template().name
    }

    /// Returns the number of rounds settled in this match.
    #[must_use]
    pub const fn rounds_played_in_match(&self) -> u32 {
        self.rounds_played_in_match
    }

    /// Returns the item-grant round counter. Reset when a match ends.
    #[must_use]
    pub const fn rounds_played_in_game(&self) -> u32 {
        self.rounds_played_in_game
    }

    /// Returns the rounds won by the player.
    #[must_use]
    pub const fn player_rounds_won(&self) -> u8 {
        self.player_rounds_won
    }

    /// Returns the rounds won by the dealer.
    #[must_use]
    pub const fn dealer_rounds_won(&self) -> u8 {
        self.dealer_rounds_won
    }

    /// Returns whether a side has won the match.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.is_over
    }

    /// Returns the decided rounds in order, `true` for a player win.
    #[must_use]
    pub fn history(&self) -> &[bool] {
        &self.history
    }
}
