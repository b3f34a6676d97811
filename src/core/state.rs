//! Authoritative game state.
//!
//! `GameState` is a plain value: cloning it yields a structurally
//! independent snapshot, which is what `GameEngine::get_state` hands
//! out. The `im` collections make those clones cheap.
//!
//! All card values live in 3..=35 and are pairwise distinct across
//! `deck`, `removed_cards`, `current_card`, and every player's hand.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::phase::GamePhase;
use super::player::Player;

/// Complete state of one game.
///
/// Mutated only through the engine's operations; callers observe it via
/// defensive copies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Seated players, in turn order (join order, fixed at start).
    pub players: Vector<Player>,

    /// Index into `players` of the active player while playing.
    pub current_player_index: usize,

    /// Face-down draw pile; cards come off the end.
    pub deck: Vector<u8>,

    /// The face-up card in play. `None` before start and after end.
    pub current_card: Option<u8>,

    /// Tokens accumulated on `current_card` by passing players.
    pub tokens_on_card: u32,

    /// The nine cards withheld from play at deal time.
    pub removed_cards: Vector<u8>,

    /// Lifecycle phase.
    pub phase: GamePhase,

    /// Winning player id, set once the phase is `Ended`.
    pub winner: Option<String>,
}

impl GameState {
    /// Create an empty pre-game state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            players: Vector::new(),
            current_player_index: 0,
            deck: Vector::new(),
            current_card: None,
            tokens_on_card: 0,
            removed_cards: Vector::new(),
            phase: GamePhase::Waiting,
            winner: None,
        }
    }

    /// The player whose turn it is, if any are seated.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    /// Mutable access to the player whose turn it is.
    pub fn current_player_mut(&mut self) -> Option<&mut Player> {
        self.players.get_mut(self.current_player_index)
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Check whether a player with this id is seated.
    #[must_use]
    pub fn has_player(&self, id: &str) -> bool {
        self.players.iter().any(|p| p.id == id)
    }

    /// Pass the turn to the next player in order.
    ///
    /// Deactivates the current player and activates the next, wrapping
    /// around the table.
    pub fn advance_turn(&mut self) {
        if self.players.is_empty() {
            return;
        }
        if let Some(current) = self.current_player_mut() {
            current.is_active = false;
        }
        self.current_player_index = (self.current_player_index + 1) % self.players.len();
        if let Some(next) = self.current_player_mut() {
            next.is_active = true;
        }
    }

    /// Count every card value the state tracks: deck, removed, the
    /// face-up card, and all claimed cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.removed_cards.len()
            + usize::from(self.current_card.is_some())
            + self.players.iter().map(|p| p.cards.len()).sum::<usize>()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = GameState::new();

        assert!(state.players.is_empty());
        assert_eq!(state.current_player_index, 0);
        assert!(state.deck.is_empty());
        assert_eq!(state.current_card, None);
        assert_eq!(state.tokens_on_card, 0);
        assert!(state.removed_cards.is_empty());
        assert_eq!(state.phase, GamePhase::Waiting);
        assert_eq!(state.winner, None);
    }

    #[test]
    fn test_player_lookup() {
        let mut state = GameState::new();
        state.players.push_back(Player::new("p1", "Ada"));
        state.players.push_back(Player::new("p2", "Brin"));

        assert!(state.has_player("p1"));
        assert!(!state.has_player("p9"));
        assert_eq!(state.player("p2").map(|p| p.name.as_str()), Some("Brin"));
    }

    #[test]
    fn test_advance_turn_wraps() {
        let mut state = GameState::new();
        for id in ["p1", "p2", "p3"] {
            state.players.push_back(Player::new(id, id));
        }
        state.players.get_mut(0).unwrap().is_active = true;

        state.advance_turn();
        assert_eq!(state.current_player_index, 1);
        assert!(!state.players.get(0).unwrap().is_active);
        assert!(state.players.get(1).unwrap().is_active);

        state.advance_turn();
        state.advance_turn();
        assert_eq!(state.current_player_index, 0);
        assert!(state.players.get(0).unwrap().is_active);
    }

    #[test]
    fn test_advance_turn_empty_table() {
        let mut state = GameState::new();
        state.advance_turn();
        assert_eq!(state.current_player_index, 0);
    }

    #[test]
    fn test_card_count() {
        let mut state = GameState::new();
        state.deck.push_back(10);
        state.deck.push_back(11);
        state.removed_cards.push_back(12);
        state.current_card = Some(13);

        let mut player = Player::new("p1", "Ada");
        player.cards.push_back(14);
        state.players.push_back(player);

        assert_eq!(state.card_count(), 5);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = GameState::new();
        state.players.push_back(Player::new("p1", "Ada"));

        let mut snapshot = state.clone();
        snapshot.players.get_mut(0).unwrap().tokens = 0;
        snapshot.tokens_on_card = 99;

        assert_eq!(state.players.get(0).unwrap().tokens, crate::core::INITIAL_TOKENS);
        assert_eq!(state.tokens_on_card, 0);
    }

    #[test]
    fn test_serialization() {
        let mut state = GameState::new();
        state.players.push_back(Player::new("p1", "Ada"));
        state.current_card = Some(22);
        state.phase = GamePhase::Playing;

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
