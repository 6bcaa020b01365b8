//! Action processing.
//!
//! Every player request goes through [`GameState::process_action`]. An
//! accepted action spends exactly one action point (ending the turn spends
//! none); a rejected one leaves the state untouched.
//!
//! ## Trigger order
//!
//! | Action   | Triggers fired                                          |
//! |----------|---------------------------------------------------------|
//! | play     | unit: `OnPlay`; spell: `Cast` then `OnPlay`             |
//! | move     | `OnMove` at the destination                             |
//! | attack   | `OnAttack` at the target, then `OnCombat` at the attacker |
//! | end turn | `OnEndOfTurn`, draw (`OnDraw` per card), `OnStartOfTurn` |

use crate::cards::CardId;
use crate::core::{ActionKind, GameAction, PlayerId};
use crate::error::ActionError;
use crate::map::Coord;
use crate::stack::TriggerKind;

use super::state::{GamePhase, GameState};

impl GameState {
    /// Process a player action. Returns `true` if it was accepted.
    ///
    /// Rejections are logged at `warn` level.
    pub fn process_action(&mut self, action: &GameAction) -> bool {
        match self.try_process_action(action) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Rejected {} from {}: {err}", action.kind, action.player);
                false
            }
        }
    }

    /// Process a player action, reporting why it was rejected.
    pub fn try_process_action(&mut self, action: &GameAction) -> Result<(), ActionError> {
        if self.phase != GamePhase::Play {
            return Err(ActionError::GameNotInProgress);
        }
        let current = self.current_player();
        if action.player != current {
            return Err(ActionError::NotYourTurn {
                player: action.player,
                current,
            });
        }
        if action.kind == ActionKind::EndTurn {
            return self.end_turn(action.player);
        }
        if !self.player(action.player).has_actions() {
            return Err(ActionError::NoActionsRemaining(action.player));
        }
        let card = action.card.ok_or(ActionError::MissingCard)?;
        let cell = action.position();

        match action.kind {
            ActionKind::Play => self.play_card(action.player, card, cell, action.target)?,
            ActionKind::Move => self.move_card(action.player, card, cell)?,
            ActionKind::Attack => {
                let target = action.target.ok_or(ActionError::MissingTarget)?;
                self.attack_with_card(action.player, card, target)?;
            }
            ActionKind::EndTurn => unreachable!("end turn handled above"),
        }

        let seat = self.seat(action.player);
        self.players[seat].consume_action();
        log::debug!(
            "{} {} {card}; {} actions left",
            action.player,
            action.kind,
            self.players[seat].actions_remaining()
        );
        self.check_legend_status();
        Ok(())
    }

    fn play_card(
        &mut self,
        player: PlayerId,
        card: CardId,
        cell: Coord,
        target: Option<Coord>,
    ) -> Result<(), ActionError> {
        let seat = self.seat(player);
        let index = self.players[seat]
            .hand_index(card)
            .ok_or(ActionError::NotInHand { card, player })?;
        let is_spell = self.cards.get(card).ok_or(ActionError::UnknownCard(card))?.is_spell();

        if is_spell {
            if !self.is_valid_position(cell) {
                return Err(ActionError::OutOfBounds(cell));
            }
            self.players[seat].hand.remove(index);
            self.activate_effects(card, target, Some(cell));
            log::info!("{player} casts {card} at {cell}");
            self.process_trigger(TriggerKind::Cast, Some(cell));
            self.process_trigger(TriggerKind::OnPlay, Some(cell));
            self.return_to_deck(seat, card);
            return Ok(());
        }

        self.players[seat].hand.remove(index);
        if let Err(err) = self.place_unit(card, cell) {
            self.players[seat].hand.insert(index, card);
            return Err(err);
        }
        if let Some(instance) = self.cards.get_mut(card) {
            instance.owner = player;
        }
        log::info!("{player} plays {card} at {cell}");
        self.process_trigger(TriggerKind::OnPlay, Some(cell));
        Ok(())
    }

    /// Whether `player` may move `card` to `to`.
    #[must_use]
    pub fn can_move_card(&self, player: PlayerId, card: CardId, to: Coord) -> bool {
        self.validate_move(player, card, to).is_ok()
    }

    fn validate_move(&self, player: PlayerId, card: CardId, to: Coord) -> Result<Coord, ActionError> {
        let from = self.map.find(card).ok_or(ActionError::NotOnMap(card))?;
        let owner = self.cards.get(card).ok_or(ActionError::UnknownCard(card))?.owner;
        if owner != player {
            return Err(ActionError::NotOwner { card, player });
        }
        if !self.is_valid_position(to) {
            return Err(ActionError::OutOfBounds(to));
        }
        if !self.map.is_empty(to) {
            return Err(ActionError::CellOccupied(to));
        }
        Ok(from)
    }

    fn move_card(&mut self, player: PlayerId, card: CardId, to: Coord) -> Result<(), ActionError> {
        let from = self.validate_move(player, card, to)?;
        self.map.take(from);
        self.map.place(to, card);
        if let Some(unit) = self.cards.get_mut(card).and_then(|c| c.unit_mut()) {
            unit.position = Some(to);
        }
        log::info!("{player} moves {card} from {from} to {to}");
        self.process_trigger(TriggerKind::OnMove, Some(to));
        Ok(())
    }

    /// Whether `player` may attack `target` with `card`.
    #[must_use]
    pub fn can_attack(&self, player: PlayerId, card: CardId, target: Coord) -> bool {
        self.validate_attack(player, card, target).is_ok()
    }

    fn validate_attack(&self, player: PlayerId, card: CardId, target: Coord) -> Result<CardId, ActionError> {
        let owner = self.cards.get(card).ok_or(ActionError::UnknownCard(card))?.owner;
        if owner != player {
            return Err(ActionError::NotOwner { card, player });
        }
        if self.map.find(card).is_none() {
            return Err(ActionError::NotOnMap(card));
        }
        if !self.is_valid_position(target) {
            return Err(ActionError::OutOfBounds(target));
        }
        let defender = self.map.occupant(target).ok_or(ActionError::CellEmpty(target))?;
        if self.cards.get(defender).is_some_and(|d| d.owner == player) {
            return Err(ActionError::FriendlyTarget { player, cell: target });
        }
        Ok(defender)
    }

    fn attack_with_card(&mut self, player: PlayerId, card: CardId, target: Coord) -> Result<(), ActionError> {
        let defender = self.validate_attack(player, card, target)?;
        log::info!("{player} attacks {target} with {card}");

        self.process_trigger(TriggerKind::OnAttack, Some(target));
        if self.map.occupant(target) == Some(defender) {
            self.destroy_card(defender);
        }
        let attacker_cell = self.map.find(card);
        self.process_trigger(TriggerKind::OnCombat, attacker_cell);
        Ok(())
    }

    /// Hand the turn to the next player.
    ///
    /// Only the current player may end the turn. The turn counter advances
    /// each time play wraps back to the first seat.
    pub fn end_turn(&mut self, player: PlayerId) -> Result<(), ActionError> {
        if self.phase != GamePhase::Play {
            return Err(ActionError::GameNotInProgress);
        }
        let current = self.current_player();
        if player != current {
            return Err(ActionError::NotYourTurn { player, current });
        }
        let seat = self.seat(player);
        self.players[seat].reset_actions();

        self.current = (self.current + 1) % self.players.len();
        if self.current == 0 {
            self.turn += 1;
        }
        log::info!("{player} ends turn; {} to act (turn {})", self.current_player(), self.turn);

        self.process_end_of_turn();
        if self.phase != GamePhase::Play {
            return Ok(());
        }
        let next = self.current;
        let count = self.config.cards_per_turn;
        self.draw_for_seat(next, count);
        self.players[next].reset_actions();
        self.process_start_of_turn();
        Ok(())
    }
}
