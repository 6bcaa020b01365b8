//! Session configuration.
//!
//! `GameConfig` carries the tunable numbers of a match. Every field has a
//! default, so a partial JSON/serde document is enough:
//!
//! ```
//! use hex_legends::core::GameConfig;
//!
//! let config: GameConfig = serde_json::from_str(r#"{"max_actions_per_turn": 2}"#).unwrap();
//! assert_eq!(config.max_actions_per_turn, 2);
//! assert_eq!(config.starting_hand_size, 5);
//! ```

use serde::{Deserialize, Serialize};

/// Tunable parameters for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cards drawn by each player when the game starts.
    pub starting_hand_size: usize,
    /// Cards drawn by the incoming player at each turn change.
    pub cards_per_turn: usize,
    /// Action points granted at the start of each turn.
    pub max_actions_per_turn: u8,
    /// Starting player health.
    pub starting_health: u8,
    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_hand_size: 5,
            cards_per_turn: 1,
            max_actions_per_turn: 3,
            starting_health: 20,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed (builder pattern).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the opening hand size (builder pattern).
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Set the per-turn draw count (builder pattern).
    #[must_use]
    pub fn with_cards_per_turn(mut self, count: usize) -> Self {
        self.cards_per_turn = count;
        self
    }

    /// Set the per-turn action budget (builder pattern).
    #[must_use]
    pub fn with_max_actions_per_turn(mut self, max: u8) -> Self {
        self.max_actions_per_turn = max;
        self
    }

    /// Set starting player health (builder pattern).
    #[must_use]
    pub fn with_starting_health(mut self, health: u8) -> Self {
        self.starting_health = health;
        self
    }
}
