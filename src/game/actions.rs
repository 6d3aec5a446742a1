use crate::error::ItemError;
use crate::input::{InputRequest, InputSource, prompt_for_number};
use crate::item::Item;
use crate::result::TurnReport;

use super::Game;

impl Game {
    fn ensure_item_usable(&self) -> Result<(), ItemError> {
        if self.current.round().is_over() {
            return Err(ItemError::RoundOver);
        }
        if self.items.is_empty() {
            return Err(ItemError::NoItems);
        }
        Ok(())
    }

    fn target_len(&self, item: Item) -> usize {
        let round = self.current.round();
        if item.targets_dealer() {
            round.dealer().len()
        } else {
            round.player().len()
        }
    }

    /// Player action: Hit (draw a card), then settle.
    ///
    /// Does nothing if the round is over.
    pub fn player_hit(&mut self) -> TurnReport {
        self.current.player_hit(&mut self.rng);
        self.check_game()
    }

    /// Player action: Stand (let the dealer draw), then settle.
    ///
    /// Does nothing if the round is over.
    pub fn player_stand(&mut self) -> TurnReport {
        self.current.player_stand(&mut self.rng);
        self.check_game()
    }

    /// Uses the item in inventory `slot` on card `card` of its target hand,
    /// then settles. Both positions are 0-based.
    ///
    /// The item is consumed only if it was applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is over, the inventory is empty, or
    /// either position is out of range.
    pub fn use_item(&mut self, slot: usize, card: usize) -> Result<TurnReport, ItemError> {
        self.ensure_item_usable()?;

        let item = *self.items.get(slot).ok_or(ItemError::InvalidSlot {
            slot,
            available: self.items.len(),
        })?;
        let len = self.target_len(item);
        if card >= len {
            return Err(ItemError::CardOutOfRange { index: card, len });
        }

        self.current.apply_item(item, card, &mut self.rng)?;
        self.items.remove(slot);
        log::debug!("used {item:?} on card {card}");

        Ok(self.check_game())
    }

    /// Uses an item, asking `input` which item and which card.
    ///
    /// Both questions are answered with 1-based numbers; invalid replies are
    /// asked again. Nothing changes if the input is cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is over, the inventory is empty, the
    /// target hand has no cards, or the input was cancelled.
    pub fn use_item_with<I: InputSource + ?Sized>(
        &mut self,
        input: &mut I,
    ) -> Result<TurnReport, ItemError> {
        self.ensure_item_usable()?;

        let slot = prompt_for_number(&mut *input, &InputRequest::choose_item(&self.items))
            .ok_or(ItemError::Cancelled)?
            - 1;
        let item = *self.items.get(slot).ok_or(ItemError::InvalidSlot {
            slot,
            available: self.items.len(),
        })?;

        let len = self.target_len(item);
        if len == 0 {
            return Err(ItemError::NoTargetCard);
        }
        let card = prompt_for_number(&mut *input, &InputRequest::choose_card(item, len))
            .ok_or(ItemError::Cancelled)?
            - 1;

        self.use_item(slot, card)
    }
}
