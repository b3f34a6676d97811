//! Core engine types: phase, players, state, RNG.
//!
//! These are the building blocks the engine operates on. They carry no
//! rules themselves - turn legality and transitions live in `engine`.

pub mod phase;
pub mod player;
pub mod rng;
pub mod state;

pub use phase::GamePhase;
pub use player::{Player, INITIAL_TOKENS};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;
