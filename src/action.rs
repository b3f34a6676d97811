//! Player actions as data.
//!
//! The engine's operations can also be driven through a single tagged
//! action value, which is the shape a store or transport layer hands
//! actions around in. `GameEngine::apply` dispatches these to the
//! corresponding operation.

use serde::{Deserialize, Serialize};

/// One player action, self-describing on the wire.
///
/// Serializes with a `type` tag (`"JOIN_GAME"`, `"START_GAME"`,
/// `"TAKE_CARD"`, `"PLACE_TOKEN"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameAction {
    /// Seat a new player.
    JoinGame {
        /// Caller-assigned player id.
        player_id: String,
        /// Display name.
        player_name: String,
    },
    /// Deal the deck and begin play.
    StartGame,
    /// Claim the face-up card and its tokens.
    TakeCard {
        /// Acting player id.
        player_id: String,
    },
    /// Pay one token to pass the card along.
    PlaceToken {
        /// Acting player id.
        player_id: String,
    },
}

impl GameAction {
    /// The acting player's id, for actions that have one.
    #[must_use]
    pub fn player_id(&self) -> Option<&str> {
        match self {
            GameAction::JoinGame { player_id, .. }
            | GameAction::TakeCard { player_id }
            | GameAction::PlaceToken { player_id } => Some(player_id),
            GameAction::StartGame => None,
        }
    }
}
