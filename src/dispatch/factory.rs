//! Effect constructors keyed by `EffectType`.
//!
//! Each recognised keyword maps to one constructor that reads the entry's
//! `value`, `target`, `direction`, and `position` and builds an `Effect`
//! bound to the given source card and owner.

use crate::cards::CardId;
use crate::core::PlayerId;
use crate::effects::{Effect, EffectKind, Stat, StatModifier, TargetMode};
use crate::loader::EffectConfig;
use crate::map::Coord;

use super::lexer::{parse_direction, parse_effect_type, parse_target, EffectType};

/// Builds an effect from a config entry. `None` when the entry lacks what
/// the effect needs.
pub type EffectCreator = fn(&EffectConfig, CardId, PlayerId) -> Option<Effect>;

/// The constructor for an effect type; `None` for `Unknown`.
#[must_use]
pub fn creator(effect_type: EffectType) -> Option<EffectCreator> {
    let create: EffectCreator = match effect_type {
        EffectType::Unknown => return None,
        EffectType::AttackBuff => |c, src, owner| Some(Effect::attack_modifier(src, owner, c.value, target(c))),
        EffectType::AttackDebuff => |c, src, owner| Some(Effect::attack_modifier(src, owner, -c.value, target(c))),
        EffectType::HealthBuff | EffectType::Heal => {
            |c, src, owner| Some(Effect::health_modifier(src, owner, c.value, target(c)))
        }
        EffectType::HealthDebuff => |c, src, owner| Some(Effect::health_modifier(src, owner, -c.value, target(c))),
        EffectType::RangeBuff => |c, src, owner| Some(Effect::range_modifier(src, owner, c.value, target(c))),
        EffectType::RangeDebuff => |c, src, owner| Some(Effect::range_modifier(src, owner, -c.value, target(c))),
        EffectType::Damage => damage_spell,
        EffectType::PositionalDebuff => |c, src, owner| {
            Some(Effect::positional_debuff(src, owner, parse_direction(&c.direction), amount(c.value)))
        },
        EffectType::PositionalTrigger => |c, src, owner| {
            let reward = EffectKind::Modifier(StatModifier::new(Stat::Attack, 1, TargetMode::SelfCard));
            Some(Effect::positional_trigger(src, owner, parse_direction(&c.direction), reward))
        },
        EffectType::PositionEnterEffect => |c, src, owner| {
            let damage = if c.value > 0 { amount(c.value) } else { 1 };
            Some(Effect::on_position_enter(src, owner, parse_direction(&c.direction), damage))
        },
        EffectType::AdjacencyBuff => |c, src, owner| {
            let half = c.value / 2;
            Some(Effect::adjacent_buff(src, owner, amount(half), amount(c.value - half)))
        },
        EffectType::RangeEffect => |c, src, owner| Some(Effect::range_effect(src, owner, 2, c.value)),
        EffectType::TargetedHeal => |c, src, owner| Some(bind(c, Effect::targeted_heal(src, owner, amount(c.value)))),
        EffectType::TargetedDamage => {
            |c, src, owner| Some(bind(c, Effect::targeted_damage(src, owner, amount(c.value))))
        }
        EffectType::TargetedBuff => |c, src, owner| Some(bind(c, Effect::targeted_buff(src, owner, c.value, 1))),
        EffectType::TargetedDebuff => {
            |c, src, owner| Some(bind(c, Effect::targeted_debuff(src, owner, -c.value, -1)))
        }
    };
    Some(create)
}

/// Constructor for an effect keyword; `None` if the keyword is unknown.
#[must_use]
pub fn lookup(keyword: &str) -> Option<EffectCreator> {
    creator(parse_effect_type(keyword))
}

/// Build the effect described by `config`, logging and returning `None`
/// for unknown keywords or incomplete entries.
#[must_use]
pub fn create_effect(config: &EffectConfig, source: CardId, owner: PlayerId) -> Option<Effect> {
    let Some(create) = lookup(&config.effect_type) else {
        log::warn!("Unknown effect type: {:?}", config.effect_type);
        return None;
    };
    let effect = create(config, source, owner);
    if effect.is_none() {
        log::warn!(
            "Effect {:?} skipped: target {:?} with position {:?} is not supported",
            config.effect_type,
            config.target,
            config.position
        );
    }
    effect
}

fn target(config: &EffectConfig) -> TargetMode {
    parse_target(&config.target)
}

fn amount(value: i32) -> u8 {
    value.clamp(0, i32::from(u8::MAX)) as u8
}

fn bind(config: &EffectConfig, mut effect: Effect) -> Effect {
    if let Some(position) = config.position {
        effect.set_target(position.into());
    }
    effect
}

fn damage_spell(config: &EffectConfig, source: CardId, owner: PlayerId) -> Option<Effect> {
    if target(config) != TargetMode::SpecificPosition {
        return None;
    }
    let cell: Coord = config.position?.into();
    Some(Effect::targeted_spell(source, owner, cell, amount(config.value), true))
}
