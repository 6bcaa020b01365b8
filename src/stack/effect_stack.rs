//! The trigger-indexed effect stack.
//!
//! Effects are stored in one ordered bucket per `TriggerKind`. A handle
//! table maps each live handle to its bucket, so removal only searches the
//! one bucket that holds the effect.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardRegistry;
use crate::effects::{Effect, EffectContext};
use crate::map::{Coord, HexMap};

use super::trigger::TriggerKind;

/// Opaque identifier returned by [`EffectStack::add_effect`].
///
/// Handles start at 1 and are never reused within a stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EffectHandle(pub u32);

impl EffectHandle {
    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EffectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Effect#{}", self.0)
    }
}

#[derive(Clone, Debug)]
struct StackEntry {
    handle: EffectHandle,
    effect: Effect,
}

/// Outcome of one `process_trigger` pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Effects that passed their check and were applied.
    pub applied: usize,
    /// Effects removed from the stack: failed checks and spent effects.
    pub expired: usize,
}

/// Trigger-indexed registry of active effects.
///
/// ## Example
///
/// ```
/// use hex_legends::cards::{Card, CardRegistry, UnitStats};
/// use hex_legends::core::PlayerId;
/// use hex_legends::effects::{Effect, TargetMode};
/// use hex_legends::map::HexMap;
/// use hex_legends::stack::{EffectStack, TriggerKind};
///
/// let map = HexMap::new();
/// let mut cards = CardRegistry::new();
/// let knight = cards.insert(Card::new_unit(1, "Knight", UnitStats::new(2, 4)));
///
/// let mut stack = EffectStack::new();
/// stack.add_effect(
///     Effect::attack_modifier(knight, PlayerId::new(0), 1, TargetMode::SelfCard),
///     TriggerKind::OnEndOfTurn,
/// );
///
/// stack.process_end_of_turn(&map, &mut cards);
/// assert_eq!(cards.get(knight).unwrap().unit().unwrap().attack(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct EffectStack {
    buckets: [Vec<StackEntry>; TriggerKind::COUNT],
    locations: FxHashMap<EffectHandle, TriggerKind>,
    next_handle: u32,
}

impl Default for EffectStack {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buckets: Default::default(),
            locations: FxHashMap::default(),
            next_handle: 1,
        }
    }

    /// Append an effect to the bucket for `trigger`.
    pub fn add_effect(&mut self, effect: Effect, trigger: TriggerKind) -> EffectHandle {
        let handle = EffectHandle(self.next_handle);
        self.next_handle += 1;

        log::trace!("{handle} added on {trigger}: {effect}");
        self.buckets[trigger.index()].push(StackEntry { handle, effect });
        self.locations.insert(handle, trigger);
        handle
    }

    /// Append an effect under the default trigger (on play).
    pub fn push(&mut self, effect: Effect) -> EffectHandle {
        self.add_effect(effect, TriggerKind::default())
    }

    /// Remove one effect by handle.
    ///
    /// Unknown or already removed handles are a no-op returning `None`.
    pub fn remove_effect(&mut self, handle: EffectHandle) -> Option<Effect> {
        let trigger = self.locations.remove(&handle)?;
        let bucket = &mut self.buckets[trigger.index()];
        let index = bucket.iter().position(|entry| entry.handle == handle)?;
        Some(bucket.remove(index).effect)
    }

    #[must_use]
    pub fn contains(&self, handle: EffectHandle) -> bool {
        self.locations.contains_key(&handle)
    }

    /// Trigger kind a live handle is stored under.
    #[must_use]
    pub fn trigger_of(&self, handle: EffectHandle) -> Option<TriggerKind> {
        self.locations.get(&handle).copied()
    }

    #[must_use]
    pub fn get(&self, handle: EffectHandle) -> Option<&Effect> {
        let trigger = self.trigger_of(handle)?;
        self.buckets[trigger.index()]
            .iter()
            .find(|entry| entry.handle == handle)
            .map(|entry| &entry.effect)
    }

    pub fn get_mut(&mut self, handle: EffectHandle) -> Option<&mut Effect> {
        let trigger = self.trigger_of(handle)?;
        self.buckets[trigger.index()]
            .iter_mut()
            .find(|entry| entry.handle == handle)
            .map(|entry| &mut entry.effect)
    }

    /// Effects listening on `trigger`, in insertion order.
    pub fn effects(&self, trigger: TriggerKind) -> impl Iterator<Item = &Effect> {
        self.buckets[trigger.index()].iter().map(|entry| &entry.effect)
    }

    /// Handles listening on `trigger`, in insertion order.
    pub fn handles(&self, trigger: TriggerKind) -> impl Iterator<Item = EffectHandle> + '_ {
        self.buckets[trigger.index()].iter().map(|entry| entry.handle)
    }

    /// Number of effects listening on `trigger`.
    #[must_use]
    pub fn len_for(&self, trigger: TriggerKind) -> usize {
        self.buckets[trigger.index()].len()
    }

    /// Total number of effects on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Drop every effect. Handles keep counting up.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.locations.clear();
    }

    /// Run every effect listening on `trigger`.
    ///
    /// Each effect is checked; a failing check removes it (and its handle)
    /// and processing continues with the next one. A passing check is
    /// followed immediately by `apply`, and an effect that is spent after
    /// applying is removed as well.
    pub fn process_trigger(
        &mut self,
        trigger: TriggerKind,
        map: &HexMap,
        cards: &mut CardRegistry,
        trigger_cell: Option<Coord>,
        affected: &[Coord],
    ) -> ProcessSummary {
        let mut ctx = EffectContext::new(map, cards)
            .with_trigger_cell(trigger_cell)
            .with_affected(affected);
        let bucket = &mut self.buckets[trigger.index()];
        let mut summary = ProcessSummary::default();

        let mut i = 0;
        while i < bucket.len() {
            let entry = &mut bucket[i];
            if entry.effect.check(&ctx) {
                entry.effect.apply(&mut ctx);
                summary.applied += 1;
                if entry.effect.is_spent() {
                    let spent = bucket.remove(i);
                    self.locations.remove(&spent.handle);
                    log::trace!("{} spent on {trigger}: {}", spent.handle, spent.effect);
                    summary.expired += 1;
                } else {
                    i += 1;
                }
            } else {
                let expired = bucket.remove(i);
                self.locations.remove(&expired.handle);
                log::debug!("{} expired on {trigger}: {}", expired.handle, expired.effect);
                summary.expired += 1;
            }
        }

        summary
    }

    /// Process end-of-turn effects with no trigger cell.
    pub fn process_end_of_turn(&mut self, map: &HexMap, cards: &mut CardRegistry) -> ProcessSummary {
        self.process_trigger(TriggerKind::OnEndOfTurn, map, cards, None, &[])
    }

    /// Process start-of-turn effects with no trigger cell.
    pub fn process_start_of_turn(&mut self, map: &HexMap, cards: &mut CardRegistry) -> ProcessSummary {
        self.process_trigger(TriggerKind::OnStartOfTurn, map, cards, None, &[])
    }
}
