//! Core engine types: players, actions, RNG, configuration.
//!
//! These are the building blocks every other module leans on. Nothing here
//! knows about the map or the effect engine.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;

pub use action::{ActionKind, GameAction};
pub use config::GameConfig;
pub use player::{Player, PlayerId, Team};
pub use rng::GameRng;
