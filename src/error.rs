//! Error types.
//!
//! Gameplay rejections are `ActionError`s: normal, recoverable outcomes that
//! `GameState::process_action` reports as `false`. Deck document problems
//! that stop parsing altogether are `LoadError`s; individual bad entries are
//! logged and skipped instead.

use thiserror::Error;

use crate::cards::CardId;
use crate::core::PlayerId;
use crate::map::Coord;

/// Why an action was rejected. State is unchanged whenever one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("it is not {player}'s turn (current: {current})")]
    NotYourTurn { player: PlayerId, current: PlayerId },

    #[error("{0} has no actions remaining")]
    NoActionsRemaining(PlayerId),

    #[error("the game is not in progress")]
    GameNotInProgress,

    #[error("action requires a card")]
    MissingCard,

    #[error("{card} is not in {player}'s hand")]
    NotInHand { card: CardId, player: PlayerId },

    #[error("unknown card {0}")]
    UnknownCard(CardId),

    #[error("cell {0} is out of bounds")]
    OutOfBounds(Coord),

    #[error("cell {0} is occupied")]
    CellOccupied(Coord),

    #[error("cell {0} is empty")]
    CellEmpty(Coord),

    #[error("{0} is not on the map")]
    NotOnMap(CardId),

    #[error("{0} is not a unit")]
    NotAUnit(CardId),

    #[error("{card} is not owned by {player}")]
    NotOwner { card: CardId, player: PlayerId },

    #[error("{player} cannot attack their own card at {cell}")]
    FriendlyTarget { player: PlayerId, cell: Coord },

    #[error("attack requires a target cell")]
    MissingTarget,
}

/// Failure to read or parse a deck document.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Deck document error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for deck loading.
pub type LoadResult<T> = std::result::Result<T, LoadError>;
