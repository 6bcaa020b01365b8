//! Card model.
//!
//! A card is one of three kinds: a Unit, a Spell, or a Legend (a Unit whose
//! death eliminates its owner). Units and Legends carry a `UnitState` with
//! live stats, their printed stats, and their map position.
//!
//! ## Stat clamping
//!
//! - Health stays within `[0, max_health]`.
//! - Attack never drops below 0.
//! - Range and speed never drop below 1.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::effects::Effect;
use crate::map::Coord;
use crate::stack::TriggerKind;

/// Identifier of a card instance in the `CardRegistry`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Discriminant of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Unit,
    Spell,
    Legend,
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardKind::Unit => "unit",
            CardKind::Spell => "spell",
            CardKind::Legend => "legend",
        };
        f.write_str(name)
    }
}

/// Printed or live combat stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitStats {
    pub attack: u8,
    pub health: u8,
    pub max_health: u8,
    pub speed: u8,
    pub range: u8,
}

impl UnitStats {
    /// Stats with full health and speed/range of 1.
    #[must_use]
    pub const fn new(attack: u8, health: u8) -> Self {
        Self {
            attack,
            health,
            max_health: health,
            speed: 1,
            range: 1,
        }
    }

    #[must_use]
    pub const fn with_speed(mut self, speed: u8) -> Self {
        self.speed = speed;
        self
    }

    #[must_use]
    pub const fn with_range(mut self, range: u8) -> Self {
        self.range = range;
        self
    }
}

fn shift(value: u8, delta: i32, floor: u8) -> u8 {
    (i32::from(value) + delta).clamp(i32::from(floor), i32::from(u8::MAX)) as u8
}

/// Live state of a Unit or Legend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitState {
    stats: UnitStats,
    printed: UnitStats,
    /// Cell the unit stands on; `None` while off the map.
    pub position: Option<Coord>,
}

impl UnitState {
    #[must_use]
    pub fn new(stats: UnitStats) -> Self {
        Self {
            stats,
            printed: stats,
            position: None,
        }
    }

    #[must_use]
    pub fn stats(&self) -> UnitStats {
        self.stats
    }

    #[must_use]
    pub fn attack(&self) -> u8 {
        self.stats.attack
    }

    #[must_use]
    pub fn health(&self) -> u8 {
        self.stats.health
    }

    #[must_use]
    pub fn max_health(&self) -> u8 {
        self.stats.max_health
    }

    #[must_use]
    pub fn speed(&self) -> u8 {
        self.stats.speed
    }

    #[must_use]
    pub fn range(&self) -> u8 {
        self.stats.range
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.stats.health > 0
    }

    pub fn take_damage(&mut self, amount: u8) {
        self.stats.health = self.stats.health.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u8) {
        self.stats.health = self.stats.health.saturating_add(amount).min(self.stats.max_health);
    }

    /// Signed health change: positive heals, negative damages.
    pub fn adjust_health(&mut self, delta: i32) {
        let amount = delta.unsigned_abs().min(u32::from(u8::MAX)) as u8;
        if delta >= 0 {
            self.heal(amount);
        } else {
            self.take_damage(amount);
        }
    }

    pub fn adjust_attack(&mut self, delta: i32) {
        self.stats.attack = shift(self.stats.attack, delta, 0);
    }

    pub fn adjust_range(&mut self, delta: i32) {
        self.stats.range = shift(self.stats.range, delta, 1);
    }

    pub fn adjust_speed(&mut self, delta: i32) {
        self.stats.speed = shift(self.stats.speed, delta, 1);
    }

    pub fn raise_max_health(&mut self, amount: u8) {
        self.stats.max_health = self.stats.max_health.saturating_add(amount);
    }

    /// Restore printed stats and take the unit off the map.
    pub fn reset(&mut self) {
        self.stats = self.printed;
        self.position = None;
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
enum CardBody {
    Unit(UnitState),
    Spell,
    Legend(UnitState),
}

/// An effect attached to a card together with the trigger it listens on.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardEffect {
    pub trigger: TriggerKind,
    pub effect: Effect,
}

/// A card instance.
///
/// ## Example
///
/// ```
/// use hex_legends::cards::{Card, CardKind, UnitStats};
/// use hex_legends::core::PlayerId;
///
/// let mut knight = Card::new_unit(7, "Knight", UnitStats::new(2, 4))
///     .with_cost(3)
///     .with_owner(PlayerId::new(0));
///
/// assert_eq!(knight.kind(), CardKind::Unit);
/// knight.unit_mut().unwrap().take_damage(10);
/// assert!(!knight.is_alive());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    /// Instance id, assigned by the registry.
    pub id: CardId,
    /// Id from the deck definition.
    pub def_id: u32,
    pub name: String,
    pub description: String,
    pub cost: u8,
    pub owner: PlayerId,
    body: CardBody,
    effects: Vec<CardEffect>,
}

impl Card {
    fn with_body(def_id: u32, name: impl Into<String>, body: CardBody) -> Self {
        Self {
            id: CardId::new(0),
            def_id,
            name: name.into(),
            description: String::new(),
            cost: 0,
            owner: PlayerId::new(0),
            body,
            effects: Vec::new(),
        }
    }

    /// Create a Unit card.
    pub fn new_unit(def_id: u32, name: impl Into<String>, stats: UnitStats) -> Self {
        Self::with_body(def_id, name, CardBody::Unit(UnitState::new(stats)))
    }

    /// Create a Legend card.
    pub fn new_legend(def_id: u32, name: impl Into<String>, stats: UnitStats) -> Self {
        Self::with_body(def_id, name, CardBody::Legend(UnitState::new(stats)))
    }

    /// Create a Spell card.
    pub fn new_spell(def_id: u32, name: impl Into<String>) -> Self {
        Self::with_body(def_id, name, CardBody::Spell)
    }

    /// Set the cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: u8) -> Self {
        self.cost = cost;
        self
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the owner (builder pattern).
    #[must_use]
    pub fn with_owner(mut self, owner: PlayerId) -> Self {
        self.owner = owner;
        self
    }

    #[must_use]
    pub fn kind(&self) -> CardKind {
        match self.body {
            CardBody::Unit(_) => CardKind::Unit,
            CardBody::Spell => CardKind::Spell,
            CardBody::Legend(_) => CardKind::Legend,
        }
    }

    /// Units and Legends.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.unit().is_some()
    }

    #[must_use]
    pub fn is_legend(&self) -> bool {
        matches!(self.body, CardBody::Legend(_))
    }

    #[must_use]
    pub fn is_spell(&self) -> bool {
        matches!(self.body, CardBody::Spell)
    }

    #[must_use]
    pub fn unit(&self) -> Option<&UnitState> {
        match &self.body {
            CardBody::Unit(state) | CardBody::Legend(state) => Some(state),
            CardBody::Spell => None,
        }
    }

    pub fn unit_mut(&mut self) -> Option<&mut UnitState> {
        match &mut self.body {
            CardBody::Unit(state) | CardBody::Legend(state) => Some(state),
            CardBody::Spell => None,
        }
    }

    /// Spells are always alive; units while their health is above 0.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.unit().map_or(true, UnitState::is_alive)
    }

    /// Map position of a unit on the board.
    #[must_use]
    pub fn position(&self) -> Option<Coord> {
        self.unit().and_then(|u| u.position)
    }

    /// Attach an effect listening on `trigger`.
    pub fn add_effect(&mut self, trigger: TriggerKind, effect: Effect) {
        self.effects.push(CardEffect { trigger, effect });
    }

    #[must_use]
    pub fn effects(&self) -> &[CardEffect] {
        &self.effects
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}, cost {}]", self.name, self.kind(), self.cost)?;
        if let Some(unit) = self.unit() {
            write!(f, " {}/{}", unit.attack(), unit.health())?;
        }
        Ok(())
    }
}
