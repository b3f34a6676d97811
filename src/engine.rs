//! The game engine: a synchronous state machine over one `GameState`.
//!
//! ## Operations
//!
//! - `join_game`: seat a player while waiting
//! - `start_game`: deal the deck and begin play
//! - `take_card`: claim the face-up card and its tokens
//! - `place_token`: pay one token and pass the turn
//! - `get_state`: defensive snapshot of the current state
//!
//! Every mutator returns `bool`: `false` means the action was illegal
//! and the state is untouched. There is no finer-grained error
//! taxonomy; callers re-inspect the state to see why an action failed.
//!
//! The engine performs no I/O and holds no locks. Callers that expose
//! it over a network must serialize access per game themselves (a
//! transaction, an actor, a single-writer queue).

use serde::{Deserialize, Serialize};

use crate::action::GameAction;
use crate::core::{GamePhase, GameRng, GameRngState, GameState, Player};
use crate::deck;
use crate::scoring;

/// Minimum players required to start.
pub const MIN_PLAYERS: usize = 3;
/// Maximum players that can join.
pub const MAX_PLAYERS: usize = 7;

/// Rules engine for one game of No Thanks!.
///
/// Owns the authoritative `GameState` and the RNG that deals it.
///
/// ```
/// use no_thanks::GameEngine;
///
/// let mut game = GameEngine::with_seed(42);
/// assert!(game.join_game("p1", "Ada"));
/// assert!(game.join_game("p2", "Brin"));
/// assert!(game.join_game("p3", "Cleo"));
/// assert!(game.start_game());
///
/// let state = game.get_state();
/// assert_eq!(state.deck.len(), 23);
/// assert!(game.take_card("p1"));
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    state: GameState,
    rng: GameRng,
}

/// Serializable engine checkpoint: state plus RNG position.
#[derive(Serialize, Deserialize)]
struct EngineSnapshot {
    state: GameState,
    rng: GameRngState,
}

impl GameEngine {
    /// Create an engine with an entropy-seeded deal.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(GameRng::from_entropy())
    }

    /// Create an engine whose deal is fixed by `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    fn from_rng(rng: GameRng) -> Self {
        Self {
            state: GameState::new(),
            rng,
        }
    }

    /// Seat a new player.
    ///
    /// Fails if the game has started, the table is full, or the id is
    /// already taken. Turn order is join order.
    pub fn join_game(&mut self, player_id: &str, player_name: &str) -> bool {
        if !self.state.phase.is_waiting()
            || self.state.players.len() >= MAX_PLAYERS
            || self.state.has_player(player_id)
        {
            return false;
        }

        self.state.players.push_back(Player::new(player_id, player_name));
        true
    }

    /// Deal the deck and begin play, activating the first joiner.
    ///
    /// Fails with fewer than [`MIN_PLAYERS`] players or outside the
    /// waiting phase.
    pub fn start_game(&mut self) -> bool {
        if self.state.players.len() < MIN_PLAYERS || !self.state.phase.is_waiting() {
            return false;
        }

        let deal = deck::build_deck(&mut self.rng);
        self.state.deck = deal.deck;
        self.state.current_card = deal.current_card;
        self.state.removed_cards = deal.removed_cards;
        self.state.tokens_on_card = 0;
        self.state.phase = GamePhase::Playing;
        self.state.current_player_index = 0;
        if let Some(first) = self.state.players.get_mut(0) {
            first.is_active = true;
        }

        true
    }

    /// Claim the face-up card along with any tokens piled on it.
    ///
    /// Only legal for the active player while a card is in play. The
    /// acting player keeps the turn; their next decision is on the
    /// freshly drawn card. Drawing from an empty deck ends the game.
    pub fn take_card(&mut self, player_id: &str) -> bool {
        if !self.can_act(player_id) {
            return false;
        }
        let Some(card) = self.state.current_card else {
            return false;
        };

        let tokens = self.state.tokens_on_card;
        let Some(player) = self.state.current_player_mut() else {
            return false;
        };
        player.cards.push_back(card);
        player.tokens += tokens;

        self.state.tokens_on_card = 0;
        self.state.current_card = self.state.deck.pop_back();
        if self.state.current_card.is_none() {
            self.end_game();
        }

        true
    }

    /// Pay one token onto the face-up card and pass the turn.
    ///
    /// Only legal for the active player while a card is in play, and
    /// only with a token to spend - a broke player must take the card.
    pub fn place_token(&mut self, player_id: &str) -> bool {
        if !self.can_act(player_id) {
            return false;
        }
        let Some(player) = self.state.current_player_mut() else {
            return false;
        };
        if player.tokens == 0 {
            return false;
        }

        player.tokens -= 1;
        self.state.tokens_on_card += 1;
        self.state.advance_turn();

        true
    }

    /// A structurally independent snapshot of the current state.
    ///
    /// Mutating the returned value cannot affect the engine.
    #[must_use]
    pub fn get_state(&self) -> GameState {
        self.state.clone()
    }

    /// Dispatch a [`GameAction`] to the corresponding operation.
    pub fn apply(&mut self, action: &GameAction) -> bool {
        match action {
            GameAction::JoinGame {
                player_id,
                player_name,
            } => self.join_game(player_id, player_name),
            GameAction::StartGame => self.start_game(),
            GameAction::TakeCard { player_id } => self.take_card(player_id),
            GameAction::PlaceToken { player_id } => self.place_token(player_id),
        }
    }

    /// Serialize the engine (state and RNG position) for persistence.
    pub fn snapshot(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(&EngineSnapshot {
            state: self.state.clone(),
            rng: self.rng.state(),
        })
    }

    /// Rebuild an engine from a [`GameEngine::snapshot`] payload.
    pub fn restore(bytes: &[u8]) -> bincode::Result<Self> {
        let snapshot: EngineSnapshot = bincode::deserialize(bytes)?;
        Ok(Self {
            state: snapshot.state,
            rng: GameRng::from_state(&snapshot.rng),
        })
    }

    /// Turn-action legality shared by `take_card` and `place_token`.
    fn can_act(&self, player_id: &str) -> bool {
        self.state.phase.is_playing()
            && self.state.current_card.is_some()
            && self
                .state
                .current_player()
                .map_or(false, |p| p.id == player_id && p.is_active)
    }

    fn end_game(&mut self) {
        self.state.phase = GamePhase::Ended;
        for player in self.state.players.iter_mut() {
            player.is_active = false;
        }
        self.state.winner = scoring::winner(&self.state.players);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
