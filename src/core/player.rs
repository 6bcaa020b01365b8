//! Player identification, teams, and per-player game data.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Player 0 spawns on the top edge of the map,
//! player 1 on the bottom edge and sees every direction inverted.
//!
//! ## Player
//!
//! Owns the card collections (deck, hand, discard) as `CardId` references
//! into the session's `CardRegistry`, plus the action budget and the Legend
//! whose survival keeps the player in the game.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardRegistry};

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this player sees the board with inverted directions.
    #[must_use]
    pub const fn is_inverted(self) -> bool {
        self.0 == 1
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use hex_legends::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(2).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// The side a player fights for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Team {
    #[default]
    None,
    TeamA,
    TeamB,
}

impl Team {
    /// Alternate seating: even seats play for team A, odd seats for team B.
    #[must_use]
    pub const fn for_seat(seat: usize) -> Self {
        if seat % 2 == 0 {
            Team::TeamA
        } else {
            Team::TeamB
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::None => write!(f, "No team"),
            Team::TeamA => write!(f, "Team A"),
            Team::TeamB => write!(f, "Team B"),
        }
    }
}

/// A seated player and everything they own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub team: Team,
    pub name: String,
    pub health: u8,
    actions_remaining: u8,
    max_actions_per_turn: u8,
    /// Draw pile. The top of the deck is the end of the vector.
    pub deck: Vec<CardId>,
    pub hand: Vec<CardId>,
    pub discard: Vec<CardId>,
    /// The Legend on the board, `None` once it has been destroyed.
    pub legend: Option<CardId>,
}

impl Player {
    /// Create a player with an empty deck and a full action budget.
    pub fn new(id: PlayerId, team: Team, name: impl Into<String>, health: u8, max_actions: u8) -> Self {
        Self {
            id,
            team,
            name: name.into(),
            health,
            actions_remaining: max_actions,
            max_actions_per_turn: max_actions,
            deck: Vec::new(),
            hand: Vec::new(),
            discard: Vec::new(),
            legend: None,
        }
    }

    #[must_use]
    pub fn actions_remaining(&self) -> u8 {
        self.actions_remaining
    }

    #[must_use]
    pub fn max_actions_per_turn(&self) -> u8 {
        self.max_actions_per_turn
    }

    #[must_use]
    pub fn has_actions(&self) -> bool {
        self.actions_remaining > 0
    }

    /// Spend one action. Returns `false` if the budget was already empty.
    pub fn consume_action(&mut self) -> bool {
        if self.actions_remaining == 0 {
            return false;
        }
        self.actions_remaining -= 1;
        true
    }

    /// Refill the budget to the per-turn maximum.
    pub fn reset_actions(&mut self) {
        self.actions_remaining = self.max_actions_per_turn;
    }

    /// Change the per-turn maximum. The current budget is capped to it.
    pub fn set_max_actions_per_turn(&mut self, max: u8) {
        self.max_actions_per_turn = max;
        self.actions_remaining = self.actions_remaining.min(max);
    }

    /// Reduce player health, saturating at zero.
    pub fn take_damage(&mut self, amount: u8) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Position of a card in hand.
    #[must_use]
    pub fn hand_index(&self, card: CardId) -> Option<usize> {
        self.hand.iter().position(|&c| c == card)
    }

    /// A player is alive while their Legend exists and has health left.
    #[must_use]
    pub fn is_alive(&self, cards: &CardRegistry) -> bool {
        self.legend
            .and_then(|legend| cards.get(legend))
            .is_some_and(|legend| legend.is_alive())
    }
}
