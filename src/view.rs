//! Read-only snapshot of the table for display.

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::Game;
use crate::item::Item;

/// Everything a table display shows after an action.
///
/// While the dealer's hand is face down only its first card is included and
/// its value is withheld.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Player health.
    pub health: i32,
    /// Player score.
    pub score: u32,
    /// Inventory in acquisition order.
    pub items: Vec<Item>,
    /// Name of the deck variant in play.
    pub deck_name: &'static str,
    /// Rounds settled in the current match.
    pub rounds_played: u32,
    /// The player's cards.
    pub player_cards: Vec<Card>,
    /// The player's hand value.
    pub player_value: i32,
    /// The dealer's visible cards.
    pub dealer_cards: Vec<Card>,
    /// Whether the dealer's hand is face down.
    pub dealer_hidden: bool,
    /// The dealer's hand value, once revealed.
    pub dealer_value: Option<i32>,
    /// Rounds won by the player in this match.
    pub player_rounds_won: u8,
    /// Rounds won by the dealer in this match.
    pub dealer_rounds_won: u8,
    /// Decided rounds of this match, `true` for a player win.
    pub history: Vec<bool>,
    /// Whether the current round has been settled.
    pub round_over: bool,
    /// Whether the current match has been decided.
    pub match_over: bool,
}

impl TableView {
    pub(crate) fn new(game: &Game) -> Self {
        let current = game.current_match();
        let round = current.round();
        let dealer_hidden = round.is_dealer_hidden();

        let dealer_cards = if dealer_hidden {
            round.dealer().first().copied().into_iter().collect()
        } else {
            round.dealer().cards().to_vec()
        };

        Self {
            health: game.health(),
            score: game.score(),
            items: game.items().to_vec(),
            deck_name: current.deck_name(),
            rounds_played: current.rounds_played_in_match(),
            player_cards: round.player().cards().to_vec(),
            player_value: round.player().value(),
            dealer_cards,
            dealer_hidden,
            dealer_value: (!dealer_hidden).then(|| round.dealer().value()),
            player_rounds_won: current.player_rounds_won(),
            dealer_rounds_won: current.dealer_rounds_won(),
            history: current.history().to_vec(),
            round_over: round.is_over(),
            match_over: current.is_over(),
        }
    }
}
