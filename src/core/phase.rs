//! Game lifecycle phase.

use serde::{Deserialize, Serialize};

/// Coarse game lifecycle stage.
///
/// Transitions are one-way (`Waiting -> Playing -> Ended`) and happen
/// only inside the engine's operations; a finished game never restarts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// Players may still join; no cards dealt.
    #[default]
    Waiting,
    /// Deck dealt, turns in progress.
    Playing,
    /// Deck exhausted, winner decided.
    Ended,
}

impl GamePhase {
    /// Check if the game is still accepting players.
    #[must_use]
    pub const fn is_waiting(self) -> bool {
        matches!(self, GamePhase::Waiting)
    }

    /// Check if turns are in progress.
    #[must_use]
    pub const fn is_playing(self) -> bool {
        matches!(self, GamePhase::Playing)
    }

    /// Check if the game is over.
    #[must_use]
    pub const fn is_ended(self) -> bool {
        matches!(self, GamePhase::Ended)
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::Waiting => "waiting",
            GamePhase::Playing => "playing",
            GamePhase::Ended => "ended",
        };
        write!(f, "{}", name)
    }
}
