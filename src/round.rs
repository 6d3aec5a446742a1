//! A single hand of play between the player and the dealer.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::deck::Shoe;
use crate::error::ItemError;
use crate::hand::{BLACKJACK, Hand};

/// Default value the dealer draws up to after catching up with the player.
pub const DEALER_FLOOR: i32 = 17;

/// How a round was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    /// The player went over 21.
    PlayerBust,
    /// The dealer went over 21.
    DealerBust,
    /// The player stood with the higher value.
    PlayerWin,
    /// The player stood with the lower value.
    DealerWin,
    /// The player stood and both values are equal.
    Tie,
}

impl RoundStatus {
    /// Returns which side takes the round, `None` for a tie.
    #[must_use]
    pub const fn player_won(self) -> Option<bool> {
        match self {
            Self::PlayerWin | Self::DealerBust => Some(true),
            Self::DealerWin | Self::PlayerBust => Some(false),
            Self::Tie => None,
        }
    }

    /// Returns the message shown for the result.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBust => "Player busts! Dealer wins.",
            Self::DealerBust => "Dealer busts! Player wins.",
            Self::PlayerWin => "Player wins!",
            Self::DealerWin => "Dealer wins!",
            Self::Tie => "It's a tie!",
        }
    }
}

/// One hand of play.
///
/// Actions only mutate the hands; deciding the round is left to
/// [`Round::check_round`], which the owning match calls after every action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    player: Hand,
    dealer: Hand,
    is_over: bool,
    dealer_hidden: bool,
    player_stood: bool,
}

impl Round {
    /// Deals a new round: two cards to the player, then two to the dealer.
    pub fn deal<R: Rng + ?Sized>(shoe: &mut Shoe, rng: &mut R) -> Self {
        let mut player = Hand::new();
        let mut dealer = Hand::new();
        player.add_card(shoe.pop(rng));
        player.add_card(shoe.pop(rng));
        dealer.add_card(shoe.pop(rng));
        dealer.add_card(shoe.pop(rng));
        Self::from_hands(player, dealer)
    }

    /// Creates an in-progress round from existing hands.
    #[must_use]
    pub const fn from_hands(player: Hand, dealer: Hand) -> Self {
        Self {
            player,
            dealer,
            is_over: false,
            dealer_hidden: true,
            player_stood: false,
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns whether the round has been settled.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.is_over
    }

    /// Returns whether the dealer's hand is still face down.
    #[must_use]
    pub const fn is_dealer_hidden(&self) -> bool {
        self.dealer_hidden
    }

    /// Returns whether the player has stood.
    #[must_use]
    pub const fn has_player_stood(&self) -> bool {
        self.player_stood
    }

    /// Marks the round settled and turns the dealer's hand face up.
    pub(crate) const fn finish(&mut self) {
        self.is_over = true;
        self.dealer_hidden = false;
    }

    /// Player action: draw one card.
    ///
    /// Returns the card drawn, or `None` if the round is over. Busting is
    /// detected by [`Round::check_round`].
    pub fn player_hit<R: Rng + ?Sized>(&mut self, shoe: &mut Shoe, rng: &mut R) -> Option<Card> {
        if self.is_over {
            return None;
        }
        let card = shoe.pop(rng);
        self.player.add_card(card);
        Some(card)
    }

    /// Player action: stand, using the default dealer floor.
    ///
    /// See [`Round::player_stand_with_floor`].
    pub fn player_stand<R: Rng + ?Sized>(&mut self, shoe: &mut Shoe, rng: &mut R) -> Vec<Card> {
        self.player_stand_with_floor(shoe, rng, DEALER_FLOOR)
    }

    /// Player action: stand.
    ///
    /// If the player is not bust, the dealer first draws until matching the
    /// player's value, then keeps drawing until reaching `floor`. Returns the
    /// cards the dealer drew; nothing happens if the round is over.
    pub fn player_stand_with_floor<R: Rng + ?Sized>(
        &mut self,
        shoe: &mut Shoe,
        rng: &mut R,
        floor: i32,
    ) -> Vec<Card> {
        let mut drawn = Vec::new();
        if self.is_over {
            return drawn;
        }

        let player_value = self.player.value();
        if player_value <= BLACKJACK {
            while self.dealer.value() < player_value {
                let card = shoe.pop(rng);
                self.dealer.add_card(card);
                drawn.push(card);
            }
            while self.dealer.value() < floor {
                let card = shoe.pop(rng);
                self.dealer.add_card(card);
                drawn.push(card);
            }
        }

        self.player_stood = true;
        drawn
    }

    /// Removes the player's card at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no card at `index`.
    pub fn remove_player_card(&mut self, index: usize) -> Result<Card, ItemError> {
        let len = self.player.len();
        self.player
            .remove(index)
            .ok_or(ItemError::CardOutOfRange { index, len })
    }

    /// Moves the dealer's card at `index` to the end of the player's hand,
    /// then deals the dealer a replacement.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no dealer card at `index`.
    pub fn steal_dealer_card<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        shoe: &mut Shoe,
        rng: &mut R,
    ) -> Result<Card, ItemError> {
        let len = self.dealer.len();
        let card = self
            .dealer
            .remove(index)
            .ok_or(ItemError::CardOutOfRange { index, len })?;
        self.player.add_card(card);
        self.dealer.add_card(shoe.pop(rng));
        Ok(card)
    }

    /// Adds `delta` to the weight of the player's card at `index`.
    ///
    /// Returns the new weight.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no card at `index`.
    pub fn adjust_player_card(&mut self, index: usize, delta: i32) -> Result<i32, ItemError> {
        let len = self.player.len();
        self.player
            .adjust_weight(index, delta)
            .ok_or(ItemError::CardOutOfRange { index, len })
    }

    /// Reports how the round stands without changing it.
    ///
    /// Busts are checked first, so a bust player loses even without standing.
    /// Otherwise the round continues (`None`) until the player stands.
    #[must_use]
    pub fn check_round(&self) -> Option<RoundStatus> {
        let player = self.player.value();
        let dealer = self.dealer.value();

        if player > BLACKJACK {
            return Some(RoundStatus::PlayerBust);
        }
        if dealer > BLACKJACK {
            return Some(RoundStatus::DealerBust);
        }
        if !self.player_stood {
            return None;
        }

        Some(match player.cmp(&dealer) {
            core::cmp::Ordering::Greater => RoundStatus::PlayerWin,
            core::cmp::Ordering::Less => RoundStatus::DealerWin,
            core::cmp::Ordering::Equal => RoundStatus::Tie,
        })
    }
}
