//! Serde model of the deck document.
//!
//! ```json
//! {
//!   "decks": [
//!     {
//!       "name": "Vanguard",
//!       "cards": [
//!         { "id": 1, "name": "Warden", "description": "", "cost": 0,
//!           "type": "legend", "attack": 2, "health": 10 },
//!         { "id": 2, "name": "Spark", "description": "", "cost": 1,
//!           "type": "spell",
//!           "effects": [ { "type": "damage", "target": "specific_position",
//!                          "value": 2, "position": { "x": 2, "y": 6 } } ] }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! The top level may also be a bare array of decks.

use serde::{Deserialize, Serialize};

use crate::map::Coord;

/// Either `{"decks": [...]}` or `[...]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeckDocument {
    Wrapped { decks: Vec<DeckConfig> },
    Bare(Vec<DeckConfig>),
}

impl DeckDocument {
    #[must_use]
    pub fn into_decks(self) -> Vec<DeckConfig> {
        match self {
            DeckDocument::Wrapped { decks } | DeckDocument::Bare(decks) => decks,
        }
    }
}

/// A named deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    pub name: String,
    #[serde(default)]
    pub cards: Vec<CardConfig>,
}

/// One card definition.
///
/// `card_type` stays a string so unknown types can be skipped with a
/// warning instead of failing the whole document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cost: u8,
    #[serde(rename = "type")]
    pub card_type: String,
    #[serde(default)]
    pub attack: Option<u8>,
    #[serde(default)]
    pub health: Option<u8>,
    #[serde(default = "one")]
    pub speed: u8,
    #[serde(default = "one")]
    pub range: u8,
    #[serde(default)]
    pub effects: Vec<EffectConfig>,
}

/// One effect entry on a card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectConfig {
    #[serde(rename = "type")]
    pub effect_type: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub value: i32,
    #[serde(default)]
    pub trigger: Option<String>,
    #[serde(default)]
    pub direction: String,
    #[serde(default)]
    pub position: Option<Position>,
}

impl EffectConfig {
    /// Shorthand for tests and hand-built decks.
    pub fn new(effect_type: impl Into<String>, target: impl Into<String>, value: i32) -> Self {
        Self {
            effect_type: effect_type.into(),
            target: target.into(),
            value,
            ..Self::default()
        }
    }

    /// Set the direction keyword (builder pattern).
    #[must_use]
    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = direction.into();
        self
    }

    /// Set the target position (builder pattern).
    #[must_use]
    pub fn with_position(mut self, x: u8, y: u8) -> Self {
        self.position = Some(Position { x, y });
        self
    }

    /// Set the trigger keyword (builder pattern).
    #[must_use]
    pub fn with_trigger(mut self, trigger: impl Into<String>) -> Self {
        self.trigger = Some(trigger.into());
        self
    }
}

/// A cell in the deck document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl From<Position> for Coord {
    fn from(position: Position) -> Self {
        Coord::new(position.x, position.y)
    }
}

fn one() -> u8 {
    1
}
