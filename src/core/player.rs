//! Player data.
//!
//! Player identifiers are opaque strings assigned by the caller (the
//! room store in the reference deployment); the engine never mints them.
//! Turn order is the order players joined in.

use im::Vector;
use serde::{Deserialize, Serialize};

/// Token count every player starts with.
pub const INITIAL_TOKENS: u32 = 11;

/// One seated player.
///
/// `cards` keeps insertion order; use [`Player::sorted_cards`] for the
/// ascending view that scoring and display work from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Caller-assigned unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Tokens in hand. Spent to pass, gained by taking a loaded card.
    pub tokens: u32,

    /// Cards claimed so far.
    pub cards: Vector<u8>,

    /// True iff it is this player's turn.
    pub is_active: bool,
}

impl Player {
    /// Create a player with the starting token count and no cards.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tokens: INITIAL_TOKENS,
            cards: Vector::new(),
            is_active: false,
        }
    }

    /// The player's cards sorted ascending.
    #[must_use]
    pub fn sorted_cards(&self) -> Vec<u8> {
        let mut cards: Vec<u8> = self.cards.iter().copied().collect();
        cards.sort_unstable();
        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new("p1", "Ada");

        assert_eq!(player.id, "p1");
        assert_eq!(player.name, "Ada");
        assert_eq!(player.tokens, INITIAL_TOKENS);
        assert!(player.cards.is_empty());
        assert!(!player.is_active);
    }

    #[test]
    fn test_sorted_cards() {
        let mut player = Player::new("p1", "Ada");
        player.cards.push_back(20);
        player.cards.push_back(3);
        player.cards.push_back(11);

        assert_eq!(player.sorted_cards(), vec![3, 11, 20]);
        // Insertion order is preserved in the state itself
        assert_eq!(player.cards.iter().copied().collect::<Vec<_>>(), vec![20, 3, 11]);
    }

    #[test]
    fn test_serialization() {
        let mut player = Player::new("p1", "Ada");
        player.cards.push_back(7);

        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
