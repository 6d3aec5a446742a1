//! A blackjack variant engine with a meta-game layer and optional `no_std`
//! support.
//!
//! Rounds are plain blackjack without splits, doubles or insurance. Around
//! them sits a session: a [`Game`] tracks health, score and a small inventory
//! of [`Item`]s that bend the rules of a round, and plays best-of-five
//! [`Match`]es, each on a different deck variant from the [`DeckCatalog`].
//!
//! The engine does no rendering and reads no input. Actions return a
//! [`TurnReport`], [`Game::view`] gives a snapshot for display, and item
//! choices are requested through an [`InputSource`].
//!
//! # Example
//!
//! ```
//! use itemjack::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let report = game.player_stand();
//! assert!(report.is_settled());
//! game.next_round();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod catalog;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod input;
pub mod item;
pub mod options;
pub mod result;
pub mod round;
pub mod view;

// Re-export main types
pub use card::{Card, Suit};
pub use catalog::{DeckCatalog, DeckTemplate};
pub use deck::{Deck, Shoe};
pub use error::{CatalogError, ItemError};
pub use game::{Game, Match, MatchOutcome, SessionEnd};
pub use hand::{BLACKJACK, Hand, hand_value};
pub use input::{InputRequest, InputSource, prompt_for_number};
pub use item::Item;
pub use options::GameOptions;
pub use result::{RoundSettlement, TurnReport};
pub use round::{DEALER_FLOOR, Round, RoundStatus};
pub use view::TableView;
