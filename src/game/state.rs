//! Match and session outcome types.

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchOutcome {
    /// The player reached the required round wins first.
    PlayerWonMatch,
    /// The dealer reached the required round wins first.
    DealerWonMatch,
}

impl MatchOutcome {
    /// Returns the message shown when the match ends.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerWonMatch => "Get your point, loser",
            Self::DealerWonMatch => "Better luck next time",
        }
    }
}

/// A session-ending event. The session has already been reset when one is
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionEnd {
    /// Health ran out.
    GameOver,
    /// The victory score was reached.
    Victory,
}

impl SessionEnd {
    /// Returns the terminal message for the session.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::GameOver => "Game Over! You have no health left.",
            Self::Victory => "Congratulations! You reached the target score and won the game!",
        }
    }
}
