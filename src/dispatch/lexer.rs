//! Keyword lookup for effect, target, direction, and trigger names.
//!
//! Matching is exact and case-sensitive. Each lookup has a fixed fallback:
//! `EffectType::Unknown`, `TargetMode::SelfCard`, `Direction::Up`, and
//! `TriggerKind::OnPlay`.

use serde::{Deserialize, Serialize};

use crate::effects::TargetMode;
use crate::map::Direction;
use crate::stack::TriggerKind;

/// Dispatch key of an effect entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectType {
    Unknown,
    AttackBuff,
    AttackDebuff,
    HealthBuff,
    HealthDebuff,
    Heal,
    RangeBuff,
    RangeDebuff,
    Damage,
    PositionalDebuff,
    PositionalTrigger,
    PositionEnterEffect,
    AdjacencyBuff,
    RangeEffect,
    TargetedHeal,
    TargetedDamage,
    TargetedBuff,
    TargetedDebuff,
}

impl EffectType {
    /// Number of variants, including `Unknown`.
    pub const COUNT: usize = 18;

    /// Dense index for constructor tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The keyword for this type, `None` for `Unknown`.
    #[must_use]
    pub const fn keyword(self) -> Option<&'static str> {
        Some(match self {
            EffectType::Unknown => return None,
            EffectType::AttackBuff => "attack_buff",
            EffectType::AttackDebuff => "attack_debuff",
            EffectType::HealthBuff => "health_buff",
            EffectType::HealthDebuff => "health_debuff",
            EffectType::Heal => "heal",
            EffectType::RangeBuff => "range_buff",
            EffectType::RangeDebuff => "range_debuff",
            EffectType::Damage => "damage",
            EffectType::PositionalDebuff => "positional_debuff",
            EffectType::PositionalTrigger => "positional_trigger",
            EffectType::PositionEnterEffect => "position_enter_effect",
            EffectType::AdjacencyBuff => "adjacency_buff",
            EffectType::RangeEffect => "range_effect",
            EffectType::TargetedHeal => "targeted_heal",
            EffectType::TargetedDamage => "targeted_damage",
            EffectType::TargetedBuff => "targeted_buff",
            EffectType::TargetedDebuff => "targeted_debuff",
        })
    }
}

/// Look up an effect keyword.
#[must_use]
pub fn parse_effect_type(keyword: &str) -> EffectType {
    match keyword {
        "attack_buff" => EffectType::AttackBuff,
        "attack_debuff" => EffectType::AttackDebuff,
        "health_buff" => EffectType::HealthBuff,
        "health_debuff" => EffectType::HealthDebuff,
        "heal" => EffectType::Heal,
        "range_buff" => EffectType::RangeBuff,
        "range_debuff" => EffectType::RangeDebuff,
        "damage" => EffectType::Damage,
        "positional_debuff" => EffectType::PositionalDebuff,
        "positional_trigger" => EffectType::PositionalTrigger,
        "position_enter_effect" => EffectType::PositionEnterEffect,
        "adjacency_buff" => EffectType::AdjacencyBuff,
        "range_effect" => EffectType::RangeEffect,
        "targeted_heal" => EffectType::TargetedHeal,
        "targeted_damage" => EffectType::TargetedDamage,
        "targeted_buff" => EffectType::TargetedBuff,
        "targeted_debuff" => EffectType::TargetedDebuff,
        _ => EffectType::Unknown,
    }
}

/// Look up a target keyword.
#[must_use]
pub fn parse_target(keyword: &str) -> TargetMode {
    match keyword {
        "adjacent" => TargetMode::Adjacent,
        "all_friendly" => TargetMode::AllFriendly,
        "all_enemy" => TargetMode::AllEnemy,
        "specific_position" => TargetMode::SpecificPosition,
        _ => TargetMode::SelfCard,
    }
}

/// Look up a direction keyword. Both `up_left` and `top_left` spellings
/// are accepted for the diagonals.
#[must_use]
pub fn parse_direction(keyword: &str) -> Direction {
    match keyword {
        "down" => Direction::Down,
        "up_left" | "top_left" => Direction::TopLeft,
        "up_right" | "top_right" => Direction::TopRight,
        "down_left" | "bottom_left" => Direction::BottomLeft,
        "down_right" | "bottom_right" => Direction::BottomRight,
        _ => Direction::Up,
    }
}

/// Look up a trigger keyword.
#[must_use]
pub fn parse_trigger(keyword: &str) -> TriggerKind {
    match keyword {
        "on_move" => TriggerKind::OnMove,
        "on_attack" => TriggerKind::OnAttack,
        "on_combat" => TriggerKind::OnCombat,
        "on_draw" => TriggerKind::OnDraw,
        "on_end_of_turn" | "end_of_turn" | "on_end_turn" => TriggerKind::OnEndOfTurn,
        "on_start_of_turn" | "start_of_turn" | "on_start_turn" => TriggerKind::OnStartOfTurn,
        "cast" | "on_cast" => TriggerKind::Cast,
        _ => TriggerKind::OnPlay,
    }
}
