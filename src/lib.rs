//! # no-thanks
//!
//! Rules engine for the card game "No Thanks!": players take turns
//! either claiming the face-up card (with any tokens piled on it) or
//! paying one token to pass it along. When the deck runs out, the
//! lowest score wins.
//!
//! ## Design
//!
//! - **Pure state machine**: every operation is `(state, action) ->
//!   (state, success)`. No I/O, no locks, no async. Persistence, rooms,
//!   and transport are the caller's collaborators.
//! - **Uniform failure**: illegal actions return `false` and leave the
//!   state untouched.
//! - **Deterministic deals**: seed the engine for reproducible games.
//!
//! ## Modules
//!
//! - `core`: phase, player, state, RNG
//! - `deck`: deck constants and construction
//! - `scoring`: run-collapsing scores, winner selection, standings
//! - `action`: the tagged action type
//! - `engine`: the `GameEngine` operations
//!
//! ## Example
//!
//! ```
//! use no_thanks::{GameEngine, GamePhase};
//!
//! let mut game = GameEngine::with_seed(7);
//! game.join_game("p1", "Ada");
//! game.join_game("p2", "Brin");
//! game.join_game("p3", "Cleo");
//! game.start_game();
//!
//! // p1 takes every card until the deck runs dry.
//! while game.get_state().current_card.is_some() {
//!     game.take_card("p1");
//! }
//!
//! let state = game.get_state();
//! assert_eq!(state.phase, GamePhase::Ended);
//! assert!(state.winner.is_some());
//! ```

pub mod action;
pub mod core;
pub mod deck;
pub mod engine;
pub mod scoring;

pub use crate::action::GameAction;
pub use crate::core::{GamePhase, GameRng, GameRngState, GameState, Player, INITIAL_TOKENS};
pub use crate::deck::{Deal, CARDS_IN_PLAY, CARD_MAX, CARD_MIN, REMOVED_CARDS, TOTAL_CARDS};
pub use crate::engine::{GameEngine, MAX_PLAYERS, MIN_PLAYERS};
pub use crate::scoring::{PlayerScore, Run, ScoreBreakdown};
