//! Reports returned by game actions.

use crate::game::{MatchOutcome, SessionEnd};
use crate::item::Item;
use crate::round::RoundStatus;

/// Result of settling a round inside a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSettlement {
    /// How the round was decided.
    pub status: RoundStatus,
    /// Whether this round earns the player an item.
    pub grants_item: bool,
    /// Set when this round decided the match.
    pub outcome: Option<MatchOutcome>,
}

/// Everything that happened as a consequence of one player action.
///
/// All fields are `None` while the round is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnReport {
    /// How the round was decided, if it was.
    pub round: Option<RoundStatus>,
    /// The item added to the inventory by this settlement.
    pub item_granted: Option<Item>,
    /// Set when the match ended.
    pub match_outcome: Option<MatchOutcome>,
    /// Set when the session ended and was reset.
    pub session_end: Option<SessionEnd>,
}

impl TurnReport {
    /// Returns whether the action settled the round.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        self.round.is_some()
    }
}
