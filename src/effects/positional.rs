//! Effects that watch a single neighbor cell of their source.
//!
//! The watched cell is derived from the source unit's own position and a
//! fixed direction, re-mapped for player 1 by the map's inversion rule.
//! All three act only on enemy units.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::map::Direction;

use super::effect::{EffectBehavior, EffectKind};
use super::targeting::{EffectContext, EffectSource};

/// Lowers the attack of the enemy standing in the watched cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionalDebuff {
    pub direction: Direction,
    pub reduction: u8,
}

impl EffectBehavior for PositionalDebuff {
    fn apply(&mut self, source: EffectSource, ctx: &mut EffectContext<'_>) {
        let Some(cell) = ctx.watched_cell(source, self.direction) else {
            return;
        };
        if let Some(enemy) = ctx.enemy_unit_at(cell, source.owner) {
            if let Some(unit) = ctx.unit_mut(enemy) {
                unit.adjust_attack(-i32::from(self.reduction));
            }
        }
    }
}

/// Fires a nested effect when an enemy is on the trigger cell and that cell
/// is the watched neighbor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionalTrigger {
    pub direction: Direction,
    pub triggered: Box<EffectKind>,
}

impl EffectBehavior for PositionalTrigger {
    fn apply(&mut self, source: EffectSource, ctx: &mut EffectContext<'_>) {
        let (Some(trigger), Some(cell)) = (ctx.trigger_cell, ctx.watched_cell(source, self.direction)) else {
            return;
        };
        if trigger == cell && ctx.enemy_unit_at(cell, source.owner).is_some() {
            self.triggered.apply(source, ctx);
        }
    }
}

/// Locks onto an enemy that enters the watched cell and damages it on every
/// pass until it dies or leaves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnPositionEnter {
    pub direction: Direction,
    pub damage: u8,
    target: Option<CardId>,
}

impl OnPositionEnter {
    #[must_use]
    pub fn new(direction: Direction, damage: u8) -> Self {
        Self {
            direction,
            damage,
            target: None,
        }
    }

    /// The enemy currently locked on, if any.
    #[must_use]
    pub fn target(&self) -> Option<CardId> {
        self.target
    }

    #[must_use]
    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }
}

impl EffectBehavior for OnPositionEnter {
    fn check_effect(&mut self, source: EffectSource, ctx: &EffectContext<'_>) -> bool {
        let Some(cell) = ctx.watched_cell(source, self.direction) else {
            self.target = None;
            return true;
        };
        let occupant = ctx.enemy_unit_at(cell, source.owner);
        if occupant.is_none() || occupant != self.target {
            self.target = None;
        }
        if ctx.trigger_cell == Some(cell) && occupant.is_some() {
            self.target = occupant;
        }
        true
    }

    fn apply(&mut self, _source: EffectSource, ctx: &mut EffectContext<'_>) {
        let Some(target) = self.target else {
            return;
        };
        let Some(unit) = ctx.unit_mut(target) else {
            self.target = None;
            return;
        };
        unit.take_damage(self.damage);
        if !unit.is_alive() {
            self.target = None;
        }
    }
}
