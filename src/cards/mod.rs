//! Card instances and the registry that owns them.
//!
//! - `Card`: a Unit, Spell, or Legend with its attached effects
//! - `CardRegistry`: arena of cards addressed by `CardId`

pub mod card;
pub mod registry;

pub use card::{Card, CardEffect, CardId, CardKind, UnitState, UnitStats};
pub use registry::CardRegistry;
