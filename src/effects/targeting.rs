//! Effect targeting.
//!
//! Defines how effects find the units they touch:
//! - `EffectContext`: the map, the card registry, and the trigger cell of
//!   the current processing pass
//! - `TargetMode`: the five area modes used by stat modifiers
//! - `SelectionMode`: the allow-list checked by single-target selection effects

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardId, CardRegistry, UnitState};
use crate::core::PlayerId;
use crate::map::{Coord, Direction, HexMap};

/// Card and player an effect acts on behalf of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectSource {
    pub card: CardId,
    pub owner: PlayerId,
}

/// Everything an effect may read or mutate during one processing pass.
///
/// The map is read-only: effects change unit stats, never positions.
pub struct EffectContext<'a> {
    pub map: &'a HexMap,
    pub cards: &'a mut CardRegistry,
    /// Cell that caused this pass (placed, moved-to, attacked), if any.
    pub trigger_cell: Option<Coord>,
    /// Extra cells the caller considers affected.
    pub affected: &'a [Coord],
}

impl<'a> EffectContext<'a> {
    pub fn new(map: &'a HexMap, cards: &'a mut CardRegistry) -> Self {
        Self {
            map,
            cards,
            trigger_cell: None,
            affected: &[],
        }
    }

    #[must_use]
    pub fn with_trigger_cell(mut self, cell: Option<Coord>) -> Self {
        self.trigger_cell = cell;
        self
    }

    #[must_use]
    pub fn with_affected(mut self, affected: &'a [Coord]) -> Self {
        self.affected = affected;
        self
    }

    /// Live position of the source unit, read from the card itself.
    #[must_use]
    pub fn source_position(&self, source: EffectSource) -> Option<Coord> {
        self.cards.get(source.card).and_then(Card::position)
    }

    /// The neighbor of the source unit in `direction`, from its owner's view.
    #[must_use]
    pub fn watched_cell(&self, source: EffectSource, direction: Direction) -> Option<Coord> {
        let position = self.source_position(source)?;
        self.map.neighbor(direction, position, source.owner)
    }

    /// The unit card standing on `cell`.
    #[must_use]
    pub fn unit_at(&self, cell: Coord) -> Option<&Card> {
        let id = self.map.occupant(cell)?;
        self.cards.get(id).filter(|card| card.is_unit())
    }

    /// The unit on `cell` if it belongs to someone other than `owner`.
    #[must_use]
    pub fn enemy_unit_at(&self, cell: Coord, owner: PlayerId) -> Option<CardId> {
        self.unit_at(cell).filter(|card| card.owner != owner).map(|card| card.id)
    }

    /// The unit on `cell` if it belongs to `owner`.
    #[must_use]
    pub fn friendly_unit_at(&self, cell: Coord, owner: PlayerId) -> Option<CardId> {
        self.unit_at(cell).filter(|card| card.owner == owner).map(|card| card.id)
    }

    pub fn unit_mut(&mut self, id: CardId) -> Option<&mut UnitState> {
        self.cards.get_mut(id).and_then(Card::unit_mut)
    }

    /// Units on every map cell matching `keep`.
    fn units_where(&self, keep: impl Fn(&Card) -> bool) -> SmallVec<[CardId; 8]> {
        self.map
            .occupied()
            .filter_map(|(_, id)| self.cards.get(id))
            .filter(|card| card.is_unit() && keep(card))
            .map(|card| card.id)
            .collect()
    }
}

/// Area selection used by stat modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TargetMode {
    /// The source unit itself.
    #[default]
    SelfCard,
    /// The six neighbors of the source. Positive changes reach friends only,
    /// negative changes reach enemies only.
    Adjacent,
    AllFriendly,
    AllEnemy,
    /// Whatever unit stands on the trigger cell.
    SpecificPosition,
}

impl TargetMode {
    /// Resolve the units affected by a change of `amount`.
    #[must_use]
    pub fn resolve(self, source: EffectSource, amount: i32, ctx: &EffectContext<'_>) -> SmallVec<[CardId; 8]> {
        match self {
            TargetMode::SelfCard => ctx
                .cards
                .get(source.card)
                .filter(|card| card.is_unit())
                .map(|card| card.id)
                .into_iter()
                .collect(),
            TargetMode::Adjacent => {
                let Some(position) = ctx.source_position(source) else {
                    return SmallVec::new();
                };
                ctx.map
                    .neighbors(position, source.owner)
                    .into_iter()
                    .filter_map(|cell| match amount {
                        a if a > 0 => ctx.friendly_unit_at(cell, source.owner),
                        a if a < 0 => ctx.enemy_unit_at(cell, source.owner),
                        _ => None,
                    })
                    .collect()
            }
            TargetMode::AllFriendly => ctx.units_where(|card| card.owner == source.owner),
            TargetMode::AllEnemy => ctx.units_where(|card| card.owner != source.owner),
            TargetMode::SpecificPosition => ctx
                .trigger_cell
                .and_then(|cell| ctx.unit_at(cell))
                .map(|card| card.id)
                .into_iter()
                .collect(),
        }
    }
}

/// Allow-list for single-target selection effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Units owned by the effect's owner.
    Ally,
    /// Enemy units other than Legends.
    EnemyNotLegend,
    Any,
}

impl SelectionMode {
    /// Whether `card` may be selected by an effect owned by `owner`.
    #[must_use]
    pub fn allows(self, card: &Card, owner: PlayerId) -> bool {
        match self {
            SelectionMode::Ally => card.owner == owner,
            SelectionMode::EnemyNotLegend => card.owner != owner && !card.is_legend(),
            SelectionMode::Any => true,
        }
    }
}
