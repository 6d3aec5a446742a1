//! Session state: health, score, inventory and the current match.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::catalog::DeckCatalog;
use crate::deck::random_index;
use crate::item::Item;
use crate::options::GameOptions;
use crate::result::TurnReport;
use crate::view::TableView;

mod actions;
pub mod matchup;
pub mod state;

pub use matchup::Match;
pub use state::{MatchOutcome, SessionEnd};

/// A play session that spans many matches.
///
/// The session owns the deck catalog, the random number generator and the
/// current [`Match`]. Every action returns a [`TurnReport`] describing what
/// it caused; rendering is left to the caller, who reads [`Game::view`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    catalog: DeckCatalog,
    health: i32,
    score: u32,
    items: Vec<Item>,
    current: Match,
    status: Option<MatchOutcome>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new session with the built-in deck variants.
    ///
    /// # Example
    ///
    /// ```
    /// use itemjack::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.health(), 10);
    /// assert_eq!(game.current_match().round().player().len(), 2);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_catalog(options, DeckCatalog::default(), seed)
    }

    /// Creates a new session that rotates through `catalog`.
    #[must_use]
    pub fn with_catalog(options: GameOptions, catalog: DeckCatalog, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let current = Match::new(&catalog, 0, &options, &mut rng);

        Self {
            health: options.starting_health,
            score: 0,
            items: Vec::new(),
            options,
            catalog,
            current,
            status: None,
            rng,
        }
    }

    /// Returns the player's health.
    #[must_use]
    pub const fn health(&self) -> i32 {
        self.health
    }

    /// Returns the player's score (matches won this session).
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns the inventory in acquisition order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the deck catalog.
    #[must_use]
    pub const fn catalog(&self) -> &DeckCatalog {
        &self.catalog
    }

    /// Returns the current match.
    #[must_use]
    pub const fn current_match(&self) -> &Match {
        &self.current
    }

    /// Returns the current match mutably.
    pub const fn current_match_mut(&mut self) -> &mut Match {
        &mut self.current
    }

    /// Returns how the most recent match ended, cleared when the next match
    /// begins.
    #[must_use]
    pub const fn match_status(&self) -> Option<MatchOutcome> {
        self.status
    }

    /// Adds a random item to the inventory unless it is full.
    ///
    /// Returns the item added.
    pub fn add_item(&mut self) -> Option<Item> {
        if self.items.len() >= self.options.max_items {
            return None;
        }
        let item = Item::ALL[random_index(&mut self.rng, Item::ALL.len())];
        log::debug!("item granted: {item:?}");
        self.items.push(item);
        Some(item)
    }

    /// Adds `item` to the inventory unless it is full.
    ///
    /// Returns whether the item was added.
    pub fn give_item(&mut self, item: Item) -> bool {
        if self.items.len() >= self.options.max_items {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Settles the current round if it has been decided and applies the
    /// consequences to the session.
    ///
    /// A match win raises the score, a match loss costs one health. When
    /// health runs out or the score reaches the victory score, the session
    /// is reset and the reason reported in [`TurnReport::session_end`]. A new
    /// match is not started here; see [`Game::next_round`].
    pub fn check_game(&mut self) -> TurnReport {
        let Some(settled) = self.current.check_match() else {
            return TurnReport::default();
        };

        let mut report = TurnReport {
            round: Some(settled.status),
            ..TurnReport::default()
        };
        if settled.grants_item {
            report.item_granted = self.add_item();
        }

        if let Some(outcome) = settled.outcome {
            match outcome {
                MatchOutcome::PlayerWonMatch => self.score += 1,
                MatchOutcome::DealerWonMatch => self.health -= 1,
            }
            self.status = Some(outcome);
            report.match_outcome = Some(outcome);
            report.session_end = self.check_session_end();
        }

        report
    }

    fn check_session_end(&mut self) -> Option<SessionEnd> {
        let end = if self.health <= 0 {
            SessionEnd::GameOver
        } else if self.score >= self.options.victory_score {
            SessionEnd::Victory
        } else {
            return None;
        };

        log::info!("session over: {end:?}, resetting");
        self.reset_session();
        Some(end)
    }

    fn reset_session(&mut self) {
        self.score = 0;
        self.items.clear();
        self.health = self.options.starting_health;
    }

    /// Moves play on after a round.
    ///
    /// If the match is over, a new match starts on a different deck variant.
    /// Otherwise the current round is discarded and a new one dealt from the
    /// same shoe. Returns `true` if a new match started.
    pub fn next_round(&mut self) -> bool {
        if self.current.is_over() {
            let previous = self.current.deck_index();
            self.current = Match::new(&self.catalog, previous, &self.options, &mut self.rng);
            self.status = None;
            true
        } else {
            self.current.start_round(&mut self.rng);
            false
        }
    }

    /// Returns a snapshot of everything a table display shows.
    #[must_use]
    pub fn view(&self) -> TableView {
        TableView::new(self)
    }
}
