//! Area effects centred on the source unit.
//!
//! Both scans are bounded by the source's own coordinates: six neighbors for
//! `AdjacentBuff`, a `(2r+1)^2` box for `RangeEffect`. Neither walks the
//! whole map.

use serde::{Deserialize, Serialize};

use crate::map::Coord;

use super::effect::EffectBehavior;
use super::targeting::{EffectContext, EffectSource};

/// Raises attack and max health (healing by the same amount) of every
/// friendly neighbor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacentBuff {
    pub attack_bonus: u8,
    pub health_bonus: u8,
}

impl EffectBehavior for AdjacentBuff {
    fn apply(&mut self, source: EffectSource, ctx: &mut EffectContext<'_>) {
        let Some(position) = ctx.source_position(source) else {
            return;
        };
        for cell in ctx.map.neighbors(position, source.owner) {
            let Some(friend) = ctx.friendly_unit_at(cell, source.owner) else {
                continue;
            };
            if let Some(unit) = ctx.unit_mut(friend) {
                unit.adjust_attack(i32::from(self.attack_bonus));
                unit.raise_max_health(self.health_bonus);
                unit.heal(self.health_bonus);
            }
        }
    }
}

/// Changes the attack of every enemy within `range` hex steps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeEffect {
    pub range: u8,
    pub attack_modifier: i32,
}

impl RangeEffect {
    /// Cells within range, scanning only the bounding box around `center`.
    fn cells_in_range(&self, center: Coord, width: u8, height: u8) -> Vec<Coord> {
        let r = self.range;
        let xs = center.x.saturating_sub(r)..=center.x.saturating_add(r).min(width - 1);
        let ys = center.y.saturating_sub(r)..=center.y.saturating_add(r).min(height - 1);
        ys.flat_map(|y| xs.clone().map(move |x| Coord::new(x, y)))
            .filter(|&cell| cell != center && center.distance(cell) <= r)
            .collect()
    }
}

impl EffectBehavior for RangeEffect {
    fn apply(&mut self, source: EffectSource, ctx: &mut EffectContext<'_>) {
        let Some(center) = ctx.source_position(source) else {
            return;
        };
        for cell in self.cells_in_range(center, ctx.map.width(), ctx.map.height()) {
            let Some(enemy) = ctx.enemy_unit_at(cell, source.owner) else {
                continue;
            };
            if let Some(unit) = ctx.unit_mut(enemy) {
                unit.adjust_attack(self.attack_modifier);
            }
        }
    }
}
