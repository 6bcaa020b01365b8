//! Effect definitions.
//!
//! An `Effect` is an instance living on the effect stack: who owns it, which
//! card it came from, and an `EffectKind` with the variant's parameters and
//! any per-instance state (sticky targets, fired flags).
//!
//! ## Check / apply protocol
//!
//! Every processing pass calls [`Effect::check`] first. It fails when the
//! source card no longer exists or is a dead unit, and otherwise asks the
//! variant. `false` means "remove me from the stack"; `true` is followed by
//! [`Effect::apply`], which performs the mutation. An effect that reports
//! [`Effect::is_spent`] after applying leaves the stack in the same pass.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::PlayerId;
use crate::map::{Coord, Direction};

use super::area::{AdjacentBuff, RangeEffect};
use super::modifiers::{Stat, StatModifier};
use super::positional::{OnPositionEnter, PositionalDebuff, PositionalTrigger};
use super::selection::{SelectionAction, SelectionEffect};
use super::spell::TargetedSpell;
use super::targeting::{EffectContext, EffectSource, TargetMode};

/// The `{check, apply}` capability shared by every effect variant.
pub trait EffectBehavior {
    /// Decide whether the effect stays on the stack.
    ///
    /// Only called after the source card has been validated. Variants that
    /// never expire keep the default.
    fn check_effect(&mut self, _source: EffectSource, _ctx: &EffectContext<'_>) -> bool {
        true
    }

    /// Perform the effect's mutation.
    fn apply(&mut self, source: EffectSource, ctx: &mut EffectContext<'_>);

    /// Whether the effect has nothing left to do after its last `apply`.
    fn is_spent(&self) -> bool {
        false
    }
}

/// The concrete behavior of an effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    Modifier(StatModifier),
    PositionalDebuff(PositionalDebuff),
    PositionalTrigger(PositionalTrigger),
    OnPositionEnter(OnPositionEnter),
    AdjacentBuff(AdjacentBuff),
    Range(RangeEffect),
    TargetedSpell(TargetedSpell),
    Selection(SelectionEffect),
}

impl EffectBehavior for EffectKind {
    fn check_effect(&mut self, source: EffectSource, ctx: &EffectContext<'_>) -> bool {
        match self {
            EffectKind::Modifier(e) => e.check_effect(source, ctx),
            EffectKind::PositionalDebuff(e) => e.check_effect(source, ctx),
            EffectKind::PositionalTrigger(e) => e.check_effect(source, ctx),
            EffectKind::OnPositionEnter(e) => e.check_effect(source, ctx),
            EffectKind::AdjacentBuff(e) => e.check_effect(source, ctx),
            EffectKind::Range(e) => e.check_effect(source, ctx),
            EffectKind::TargetedSpell(e) => e.check_effect(source, ctx),
            EffectKind::Selection(e) => e.check_effect(source, ctx),
        }
    }

    fn apply(&mut self, source: EffectSource, ctx: &mut EffectContext<'_>) {
        match self {
            EffectKind::Modifier(e) => e.apply(source, ctx),
            EffectKind::PositionalDebuff(e) => e.apply(source, ctx),
            EffectKind::PositionalTrigger(e) => e.apply(source, ctx),
            EffectKind::OnPositionEnter(e) => e.apply(source, ctx),
            EffectKind::AdjacentBuff(e) => e.apply(source, ctx),
            EffectKind::Range(e) => e.apply(source, ctx),
            EffectKind::TargetedSpell(e) => e.apply(source, ctx),
            EffectKind::Selection(e) => e.apply(source, ctx),
        }
    }

    fn is_spent(&self) -> bool {
        match self {
            EffectKind::TargetedSpell(e) => e.is_spent(),
            _ => false,
        }
    }
}

/// An effect instance.
///
/// ## Example
///
/// ```
/// use hex_legends::cards::CardId;
/// use hex_legends::core::PlayerId;
/// use hex_legends::effects::{Effect, TargetMode};
///
/// let buff = Effect::attack_modifier(CardId::new(3), PlayerId::new(0), 2, TargetMode::Adjacent);
/// assert_eq!(buff.name, "Attack Buff");
///
/// let mut heal = Effect::targeted_heal(CardId::new(3), PlayerId::new(0), 4);
/// assert!(heal.needs_target());
/// assert!(heal.set_target(hex_legends::map::Coord::new(1, 4)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    pub name: String,
    pub owner: PlayerId,
    /// Card the effect came from. Re-resolved through the registry on
    /// every check.
    pub source: CardId,
    pub kind: EffectKind,
}

impl Effect {
    pub fn new(name: impl Into<String>, source: CardId, owner: PlayerId, kind: EffectKind) -> Self {
        Self {
            name: name.into(),
            owner,
            source,
            kind,
        }
    }

    /// Rename the effect (builder pattern).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    fn source_ref(&self) -> EffectSource {
        EffectSource {
            card: self.source,
            owner: self.owner,
        }
    }

    /// Validate the source card, then ask the variant whether to stay.
    pub fn check(&mut self, ctx: &EffectContext<'_>) -> bool {
        let source = self.source_ref();
        match ctx.cards.get(source.card) {
            None => false,
            Some(card) if !card.is_alive() => false,
            Some(_) => self.kind.check_effect(source, ctx),
        }
    }

    /// Perform the mutation. Only meaningful after a passing `check`.
    pub fn apply(&mut self, ctx: &mut EffectContext<'_>) {
        let source = self.source_ref();
        self.kind.apply(source, ctx);
    }

    /// Whether the effect is done and should leave the stack now.
    #[must_use]
    pub fn is_spent(&self) -> bool {
        self.kind.is_spent()
    }

    /// Whether this effect resolves against a late-bound target cell.
    #[must_use]
    pub fn needs_target(&self) -> bool {
        matches!(self.kind, EffectKind::Selection(_))
    }

    /// The bound target cell of a selection effect.
    #[must_use]
    pub fn target(&self) -> Option<Coord> {
        match &self.kind {
            EffectKind::Selection(selection) => selection.target(),
            _ => None,
        }
    }

    /// Bind the target cell of a selection effect. Returns `false` for
    /// effects that take no target.
    pub fn set_target(&mut self, cell: Coord) -> bool {
        match &mut self.kind {
            EffectKind::Selection(selection) => {
                selection.set_target(cell);
                true
            }
            _ => false,
        }
    }

    // === Stat modifiers ===

    pub fn attack_modifier(source: CardId, owner: PlayerId, amount: i32, target: TargetMode) -> Self {
        let name = if amount >= 0 { "Attack Buff" } else { "Attack Debuff" };
        Self::modifier(name, source, owner, Stat::Attack, amount, target)
    }

    pub fn health_modifier(source: CardId, owner: PlayerId, amount: i32, target: TargetMode) -> Self {
        let name = if amount >= 0 { "Health Buff" } else { "Health Debuff" };
        Self::modifier(name, source, owner, Stat::Health, amount, target)
    }

    pub fn range_modifier(source: CardId, owner: PlayerId, amount: i32, target: TargetMode) -> Self {
        let name = if amount >= 0 { "Range Buff" } else { "Range Debuff" };
        Self::modifier(name, source, owner, Stat::Range, amount, target)
    }

    fn modifier(name: &str, source: CardId, owner: PlayerId, stat: Stat, amount: i32, target: TargetMode) -> Self {
        Self::new(name, source, owner, EffectKind::Modifier(StatModifier::new(stat, amount, target)))
    }

    // === Positional ===

    pub fn positional_debuff(source: CardId, owner: PlayerId, direction: Direction, reduction: u8) -> Self {
        let kind = EffectKind::PositionalDebuff(PositionalDebuff { direction, reduction });
        Self::new("Positional Debuff", source, owner, kind)
    }

    pub fn positional_trigger(source: CardId, owner: PlayerId, direction: Direction, triggered: EffectKind) -> Self {
        let kind = EffectKind::PositionalTrigger(PositionalTrigger {
            direction,
            triggered: Box::new(triggered),
        });
        Self::new("Positional Trigger", source, owner, kind)
    }

    pub fn on_position_enter(source: CardId, owner: PlayerId, direction: Direction, damage: u8) -> Self {
        let kind = EffectKind::OnPositionEnter(OnPositionEnter::new(direction, damage));
        Self::new("Position Enter", source, owner, kind)
    }

    // === Area ===

    pub fn adjacent_buff(source: CardId, owner: PlayerId, attack_bonus: u8, health_bonus: u8) -> Self {
        let kind = EffectKind::AdjacentBuff(AdjacentBuff {
            attack_bonus,
            health_bonus,
        });
        Self::new("Adjacent Buff", source, owner, kind)
    }

    pub fn range_effect(source: CardId, owner: PlayerId, range: u8, attack_modifier: i32) -> Self {
        let kind = EffectKind::Range(RangeEffect { range, attack_modifier });
        Self::new("Range Effect", source, owner, kind)
    }

    // === Spells ===

    pub fn targeted_spell(source: CardId, owner: PlayerId, target: Coord, damage: u8, instant: bool) -> Self {
        let kind = EffectKind::TargetedSpell(TargetedSpell::new(target, damage, instant));
        Self::new("Damage Spell", source, owner, kind)
    }

    // === Selection ===

    pub fn selection(name: impl Into<String>, source: CardId, owner: PlayerId, action: SelectionAction) -> Self {
        Self::new(name, source, owner, EffectKind::Selection(SelectionEffect::new(action)))
    }

    pub fn targeted_heal(source: CardId, owner: PlayerId, amount: u8) -> Self {
        Self::selection("Targeted Heal", source, owner, SelectionAction::Heal(amount))
    }

    pub fn targeted_damage(source: CardId, owner: PlayerId, damage: u8) -> Self {
        Self::selection("Targeted Damage", source, owner, SelectionAction::Damage(damage))
    }

    pub fn targeted_buff(source: CardId, owner: PlayerId, attack: i32, health: i32) -> Self {
        Self::selection("Targeted Buff", source, owner, SelectionAction::Buff { attack, health })
    }

    pub fn targeted_debuff(source: CardId, owner: PlayerId, attack: i32, speed: i32) -> Self {
        Self::selection("Targeted Debuff", source, owner, SelectionAction::Debuff { attack, speed })
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} via {})", self.name, self.owner, self.source)
    }
}
