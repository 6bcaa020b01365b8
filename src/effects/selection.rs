//! Single-target selection effects: heal, damage, buff, debuff.
//!
//! The target cell is bound after construction with `set_target`. Both
//! `check_effect` and `apply` re-read the cell and test its occupant against
//! the `SelectionMode`, so the effect never resolves against a unit that
//! walked in after the target was chosen and does not qualify.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::map::Coord;

use super::effect::EffectBehavior;
use super::targeting::{EffectContext, EffectSource, SelectionMode};

/// What happens to the selected unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionAction {
    Heal(u8),
    Damage(u8),
    /// Attack change (floored at 0); positive health raises max health and heals.
    Buff { attack: i32, health: i32 },
    /// Attack change (floored at 0) and speed change (floored at 1).
    Debuff { attack: i32, speed: i32 },
}

impl SelectionAction {
    /// The allow-list this action uses unless told otherwise.
    #[must_use]
    pub fn default_mode(self) -> SelectionMode {
        match self {
            SelectionAction::Heal(_) | SelectionAction::Buff { .. } => SelectionMode::Ally,
            SelectionAction::Damage(_) | SelectionAction::Debuff { .. } => SelectionMode::EnemyNotLegend,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEffect {
    pub mode: SelectionMode,
    pub action: SelectionAction,
    target: Option<Coord>,
}

impl SelectionEffect {
    #[must_use]
    pub fn new(action: SelectionAction) -> Self {
        Self {
            mode: action.default_mode(),
            action,
            target: None,
        }
    }

    /// Override the selection mode (builder pattern).
    #[must_use]
    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn set_target(&mut self, cell: Coord) {
        self.target = Some(cell);
    }

    #[must_use]
    pub fn target(&self) -> Option<Coord> {
        self.target
    }

    fn selected(&self, source: EffectSource, ctx: &EffectContext<'_>) -> Option<CardId> {
        let card = ctx.unit_at(self.target?)?;
        self.mode.allows(card, source.owner).then_some(card.id)
    }
}

impl EffectBehavior for SelectionEffect {
    fn check_effect(&mut self, source: EffectSource, ctx: &EffectContext<'_>) -> bool {
        let valid = self.selected(source, ctx).is_some();
        if !valid {
            log::trace!("selection effect has no valid target at {:?}", self.target);
        }
        valid
    }

    fn apply(&mut self, source: EffectSource, ctx: &mut EffectContext<'_>) {
        let Some(id) = self.selected(source, ctx) else {
            return;
        };
        let Some(unit) = ctx.unit_mut(id) else {
            return;
        };
        match self.action {
            SelectionAction::Heal(amount) => unit.heal(amount),
            SelectionAction::Damage(amount) => unit.take_damage(amount),
            SelectionAction::Buff { attack, health } => {
                unit.adjust_attack(attack);
                if health > 0 {
                    let bonus = health.min(i32::from(u8::MAX)) as u8;
                    unit.raise_max_health(bonus);
                    unit.heal(bonus);
                }
            }
            SelectionAction::Debuff { attack, speed } => {
                unit.adjust_attack(attack);
                unit.adjust_speed(speed);
            }
        }
    }
}
