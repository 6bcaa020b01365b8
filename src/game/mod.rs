//! Game controller: session state, turn flow, and action processing.
//!
//! - `GameState`: owns the map, the effect stack, the cards, and the players
//! - `GamePhase`: setup, play, and end
//!
//! Action handling lives in `actions` as a second `impl GameState` block.

mod actions;
mod state;

pub use state::{GamePhase, GameState};
