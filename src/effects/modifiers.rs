//! Stat modifiers: attack, health, and range changes over a `TargetMode`.
//!
//! Modifiers never expire on their own. Every pass of their trigger applies
//! the change again.

use serde::{Deserialize, Serialize};

use super::effect::EffectBehavior;
use super::targeting::{EffectContext, EffectSource, TargetMode};

/// Which stat a modifier changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Attack,
    Health,
    Range,
}

/// A signed change to one stat of every unit selected by `target`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatModifier {
    pub stat: Stat,
    pub amount: i32,
    pub target: TargetMode,
}

impl StatModifier {
    #[must_use]
    pub fn new(stat: Stat, amount: i32, target: TargetMode) -> Self {
        Self { stat, amount, target }
    }
}

impl EffectBehavior for StatModifier {
    fn apply(&mut self, source: EffectSource, ctx: &mut EffectContext<'_>) {
        for id in self.target.resolve(source, self.amount, ctx) {
            let Some(unit) = ctx.unit_mut(id) else {
                continue;
            };
            match self.stat {
                Stat::Attack => unit.adjust_attack(self.amount),
                Stat::Health => unit.adjust_health(self.amount),
                Stat::Range => unit.adjust_range(self.amount),
            }
        }
    }
}
