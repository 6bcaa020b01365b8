//! Spell damage bound to a fixed cell.

use serde::{Deserialize, Serialize};

use crate::map::Coord;

use super::effect::EffectBehavior;
use super::targeting::{EffectContext, EffectSource};

/// Damages whatever unit occupies `target` on each pass.
///
/// An instant spell resolves once: after its first `apply` it reports
/// itself spent and the stack drops it in the same pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetedSpell {
    pub target: Coord,
    pub damage: u8,
    pub instant: bool,
    fired: bool,
}

impl TargetedSpell {
    #[must_use]
    pub fn new(target: Coord, damage: u8, instant: bool) -> Self {
        Self {
            target,
            damage,
            instant,
            fired: false,
        }
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

impl EffectBehavior for TargetedSpell {
    fn check_effect(&mut self, _source: EffectSource, _ctx: &EffectContext<'_>) -> bool {
        !self.is_spent()
    }

    fn apply(&mut self, _source: EffectSource, ctx: &mut EffectContext<'_>) {
        self.fired = true;
        let Some(victim) = ctx.unit_at(self.target).map(|card| card.id) else {
            return;
        };
        if let Some(unit) = ctx.unit_mut(victim) {
            unit.take_damage(self.damage);
        }
    }

    fn is_spent(&self) -> bool {
        self.instant && self.fired
    }
}
