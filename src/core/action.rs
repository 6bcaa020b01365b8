//! Player action requests.
//!
//! A `GameAction` is the whole surface an external controller uses to drive
//! a match: who acts, with which card, where, and how.
//!
//! ```
//! use hex_legends::cards::CardId;
//! use hex_legends::core::{ActionKind, GameAction, PlayerId};
//!
//! let play = GameAction::play(PlayerId::new(0), CardId::new(4), 2, 3);
//! assert_eq!(play.kind, ActionKind::Play);
//!
//! let pass = GameAction::end_turn(PlayerId::new(0));
//! assert!(pass.card.is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::map::Coord;

use super::player::PlayerId;

/// What the player wants to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Play,
    Move,
    Attack,
    EndTurn,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActionKind::Play => "play",
            ActionKind::Move => "move",
            ActionKind::Attack => "attack",
            ActionKind::EndTurn => "end turn",
        };
        f.write_str(name)
    }
}

/// A structured action request.
///
/// `x`/`y` is the destination cell for play and move. Attacks carry the
/// attacked cell in `target`; spells may carry the cell a selection effect
/// should resolve against.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameAction {
    pub player: PlayerId,
    pub card: Option<CardId>,
    pub x: u8,
    pub y: u8,
    pub kind: ActionKind,
    pub target: Option<Coord>,
}

impl GameAction {
    /// Play `card` from hand at (x, y).
    #[must_use]
    pub fn play(player: PlayerId, card: CardId, x: u8, y: u8) -> Self {
        Self {
            player,
            card: Some(card),
            x,
            y,
            kind: ActionKind::Play,
            target: None,
        }
    }

    /// Move `card` on the map to (x, y).
    #[must_use]
    pub fn move_to(player: PlayerId, card: CardId, x: u8, y: u8) -> Self {
        Self {
            kind: ActionKind::Move,
            ..Self::play(player, card, x, y)
        }
    }

    /// Attack the unit at (target_x, target_y) with `card`.
    #[must_use]
    pub fn attack(player: PlayerId, card: CardId, target_x: u8, target_y: u8) -> Self {
        Self {
            player,
            card: Some(card),
            x: 0,
            y: 0,
            kind: ActionKind::Attack,
            target: Some(Coord::new(target_x, target_y)),
        }
    }

    /// End the current turn.
    #[must_use]
    pub fn end_turn(player: PlayerId) -> Self {
        Self {
            player,
            card: None,
            x: 0,
            y: 0,
            kind: ActionKind::EndTurn,
            target: None,
        }
    }

    /// Attach a target cell (builder pattern).
    #[must_use]
    pub fn with_target(mut self, x: u8, y: u8) -> Self {
        self.target = Some(Coord::new(x, y));
        self
    }

    /// The (x, y) destination as a coordinate.
    #[must_use]
    pub fn position(&self) -> Coord {
        Coord::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let p = PlayerId::new(1);
        let card = CardId::new(3);

        let play = GameAction::play(p, card, 1, 2);
        assert_eq!(play.kind, ActionKind::Play);
        assert_eq!(play.position(), Coord::new(1, 2));
        assert_eq!(play.target, None);

        let mv = GameAction::move_to(p, card, 4, 5);
        assert_eq!(mv.kind, ActionKind::Move);
        assert_eq!(mv.card, Some(card));

        let attack = GameAction::attack(p, card, 2, 6);
        assert_eq!(attack.kind, ActionKind::Attack);
        assert_eq!(attack.target, Some(Coord::new(2, 6)));

        let end = GameAction::end_turn(p);
        assert_eq!(end.kind, ActionKind::EndTurn);
        assert_eq!(end.card, None);
    }

    #[test]
    fn test_with_target() {
        let action = GameAction::play(PlayerId::new(0), CardId::new(1), 0, 0).with_target(3, 4);
        assert_eq!(action.target, Some(Coord::new(3, 4)));
    }
}
