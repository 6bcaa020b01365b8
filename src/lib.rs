//! # hex-legends
//!
//! A turn-based, two-team card battle engine played on a 5x7 hex grid.
//!
//! Each player fields a Legend on their spawn cell and plays Units and
//! Spells from a shuffled deck. Units carry effects that wait on a
//! trigger-indexed stack and fire as the game moves. A player is out the
//! moment their Legend falls.
//!
//! ## Design Principles
//!
//! 1. **Perspective-relative directions**: player 1 sees the board upside
//!    down, so every direction it names is mirrored before lookup.
//!
//! 2. **Check, then apply**: each effect first decides whether it is still
//!    valid, and only then mutates the board. An effect whose check fails
//!    leaves the stack.
//!
//! 3. **Data-driven cards**: decks come from JSON documents. Keywords are
//!    dispatched to typed constructors once, at load time.
//!
//! ## Modules
//!
//! - `core`: players, teams, actions, RNG, configuration
//! - `map`: coordinates, directions, and the hex grid
//! - `cards`: card model and registry
//! - `effects`: effect variants and targeting
//! - `stack`: trigger kinds and the effect stack
//! - `dispatch`: keyword parsing and the effect factory
//! - `loader`: JSON deck documents
//! - `game`: session state and action processing
//! - `error`: action and load errors

pub mod cards;
pub mod core;
pub mod dispatch;
pub mod effects;
pub mod error;
pub mod game;
pub mod loader;
pub mod map;
pub mod stack;

// Re-export commonly used types
pub use crate::core::{ActionKind, GameAction, GameConfig, GameRng, Player, PlayerId, Team};

pub use crate::map::{Coord, Direction, FloorType, HexMap, MapCell};

pub use crate::cards::{Card, CardId, CardKind, CardRegistry, UnitState, UnitStats};

pub use crate::effects::{Effect, EffectContext, EffectKind, SelectionMode, TargetMode};

pub use crate::stack::{EffectHandle, EffectStack, ProcessSummary, TriggerKind};

pub use crate::dispatch::{create_effect, EffectType};

pub use crate::loader::{CardLoader, DeckConfig};

pub use crate::game::{GamePhase, GameState};

pub use crate::error::{ActionError, LoadError};
