//! Effect stack integration tests.
//!
//! These tests verify handle bookkeeping, per-trigger isolation, and expiry
//! of effects whose checks fail.

use proptest::prelude::*;

use hex_legends::cards::{Card, CardId, CardRegistry, UnitStats};
use hex_legends::core::PlayerId;
use hex_legends::effects::{Effect, TargetMode};
use hex_legends::map::{Coord, HexMap};
use hex_legends::stack::{EffectHandle, EffectStack, TriggerKind};

fn knight(cards: &mut CardRegistry) -> CardId {
    cards.insert(Card::new_unit(1, "Knight", UnitStats::new(2, 4)))
}

fn buff(source: CardId) -> Effect {
    Effect::attack_modifier(source, PlayerId::new(0), 1, TargetMode::SelfCard)
}

fn snapshot(stack: &EffectStack) -> Vec<Vec<EffectHandle>> {
    TriggerKind::ALL
        .iter()
        .map(|&t| stack.handles(t).collect())
        .collect()
}

// =============================================================================
// Removal Tests
// =============================================================================

/// Test that removing a handle twice only removes one effect.
#[test]
fn test_double_remove_is_noop() {
    let mut stack = EffectStack::new();
    let a = stack.add_effect(buff(CardId::new(0)), TriggerKind::OnMove);
    let b = stack.add_effect(buff(CardId::new(0)), TriggerKind::OnMove);

    assert!(stack.remove_effect(a).is_some());
    let before = snapshot(&stack);
    assert!(stack.remove_effect(a).is_none());
    assert_eq!(snapshot(&stack), before);
    assert_eq!(stack.handles(TriggerKind::OnMove).collect::<Vec<_>>(), vec![b]);
}

/// Test that removing an unknown handle changes nothing.
#[test]
fn test_unknown_handle_is_noop() {
    let mut stack = EffectStack::new();
    stack.add_effect(buff(CardId::new(0)), TriggerKind::OnDraw);
    let before = snapshot(&stack);

    assert!(stack.remove_effect(EffectHandle(999)).is_none());
    assert!(stack.remove_effect(EffectHandle(0)).is_none());
    assert_eq!(snapshot(&stack), before);
}

/// Test that identical effects are separate entries.
#[test]
fn test_identical_effects_removed_one_at_a_time() {
    let mut stack = EffectStack::new();
    let a = stack.add_effect(buff(CardId::new(0)), TriggerKind::OnEndOfTurn);
    let b = stack.add_effect(buff(CardId::new(0)), TriggerKind::OnEndOfTurn);

    stack.remove_effect(b);
    assert_eq!(stack.len_for(TriggerKind::OnEndOfTurn), 1);
    assert!(stack.contains(a));
    assert!(!stack.contains(b));
}

proptest! {
    /// Test that any sequence of removals leaves exactly the unremoved
    /// handles, in insertion order.
    #[test]
    fn prop_removal_keeps_the_rest(
        triggers in prop::collection::vec(0usize..TriggerKind::COUNT, 1..24),
        removals in prop::collection::vec(0u32..32, 0..32),
    ) {
        let mut stack = EffectStack::new();
        let mut live: Vec<(EffectHandle, TriggerKind)> = triggers
            .iter()
            .map(|&t| {
                let trigger = TriggerKind::ALL[t];
                (stack.add_effect(buff(CardId::new(0)), trigger), trigger)
            })
            .collect();

        for raw in removals {
            let handle = EffectHandle(raw);
            let removed = stack.remove_effect(handle).is_some();
            let was_live = live.iter().any(|&(h, _)| h == handle);
            prop_assert_eq!(removed, was_live);
            live.retain(|&(h, _)| h != handle);
        }

        prop_assert_eq!(stack.len(), live.len());
        for trigger in TriggerKind::ALL {
            let expected: Vec<_> = live.iter().filter(|&&(_, t)| t == trigger).map(|&(h, _)| h).collect();
            prop_assert_eq!(stack.handles(trigger).collect::<Vec<_>>(), expected);
        }
    }
}

// =============================================================================
// Processing Tests
// =============================================================================

/// Test that only the fired trigger's bucket runs.
#[test]
fn test_triggers_are_isolated() {
    let map = HexMap::new();
    let mut cards = CardRegistry::new();
    let id = knight(&mut cards);

    let mut stack = EffectStack::new();
    stack.add_effect(buff(id), TriggerKind::OnMove);
    stack.add_effect(buff(id), TriggerKind::OnAttack);

    let summary = stack.process_trigger(TriggerKind::OnMove, &map, &mut cards, None, &[]);
    assert_eq!(summary.applied, 1);
    assert_eq!(cards.get(id).unwrap().unit().unwrap().attack(), 3);

    let summary = stack.process_trigger(TriggerKind::OnCombat, &map, &mut cards, None, &[]);
    assert_eq!(summary.applied, 0);
    assert_eq!(cards.get(id).unwrap().unit().unwrap().attack(), 3);
}

/// Test that an effect whose source died is dropped on the next pass and
/// the rest of the bucket still runs.
#[test]
fn test_dead_source_expires() {
    let map = HexMap::new();
    let mut cards = CardRegistry::new();
    let doomed = knight(&mut cards);
    let survivor = knight(&mut cards);

    let mut stack = EffectStack::new();
    let gone = stack.add_effect(buff(doomed), TriggerKind::OnEndOfTurn);
    stack.add_effect(buff(survivor), TriggerKind::OnEndOfTurn);

    cards.get_mut(doomed).unwrap().unit_mut().unwrap().take_damage(4);
    let summary = stack.process_end_of_turn(&map, &mut cards);

    assert_eq!(summary.expired, 1);
    assert_eq!(summary.applied, 1);
    assert!(!stack.contains(gone));
    assert_eq!(cards.get(survivor).unwrap().unit().unwrap().attack(), 3);
}

/// Test that an instant spell applies once and leaves the stack in the same
/// pass.
#[test]
fn test_instant_spell_lifecycle() {
    let mut map = HexMap::new();
    let mut cards = CardRegistry::new();
    let spell = cards.insert(Card::new_spell(9, "Bolt"));
    let victim = cards.insert(Card::new_unit(1, "Target", UnitStats::new(1, 5)).with_owner(PlayerId::new(1)));
    let cell = Coord::new(2, 4);
    map.place(cell, victim);

    let mut stack = EffectStack::new();
    let handle = stack.add_effect(
        Effect::targeted_spell(spell, PlayerId::new(0), cell, 2, true),
        TriggerKind::Cast,
    );
    let lasting = stack.add_effect(buff(victim), TriggerKind::Cast);

    let first = stack.process_trigger(TriggerKind::Cast, &map, &mut cards, Some(cell), &[]);
    assert_eq!(first.applied, 2);
    assert_eq!(first.expired, 1);
    assert_eq!(cards.get(victim).unwrap().unit().unwrap().health(), 3);
    assert!(!stack.contains(handle));
    assert_eq!(stack.handles(TriggerKind::Cast).collect::<Vec<_>>(), vec![lasting]);

    let second = stack.process_trigger(TriggerKind::Cast, &map, &mut cards, Some(cell), &[]);
    assert_eq!(second.applied, 1);
    assert_eq!(second.expired, 0);
    assert_eq!(cards.get(victim).unwrap().unit().unwrap().health(), 3);
}

/// Test that a lasting spell keeps hitting its cell.
#[test]
fn test_lasting_spell_repeats() {
    let mut map = HexMap::new();
    let mut cards = CardRegistry::new();
    let spell = cards.insert(Card::new_spell(9, "Storm"));
    let victim = cards.insert(Card::new_unit(1, "Target", UnitStats::new(1, 5)));
    let cell = Coord::new(1, 3);
    map.place(cell, victim);

    let mut stack = EffectStack::new();
    stack.add_effect(
        Effect::targeted_spell(spell, PlayerId::new(0), cell, 1, false),
        TriggerKind::OnStartOfTurn,
    );
    for _ in 0..3 {
        stack.process_start_of_turn(&map, &mut cards);
    }
    assert_eq!(cards.get(victim).unwrap().unit().unwrap().health(), 2);
    assert_eq!(stack.len(), 1);
}

/// Test that clearing keeps handles unique.
#[test]
fn test_clear_does_not_reuse_handles() {
    let mut stack = EffectStack::new();
    let a = stack.push(buff(CardId::new(0)));
    stack.clear();
    assert!(stack.is_empty());
    let b = stack.push(buff(CardId::new(0)));
    assert!(b.raw() > a.raw());
}
