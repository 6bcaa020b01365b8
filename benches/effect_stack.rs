//! Benchmarks for effect processing and turn flow.
//!
//! Trigger processing runs on every action, so it is the hot path.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use hex_legends::cards::{Card, CardRegistry, UnitStats};
use hex_legends::core::{GameAction, GameConfig, PlayerId};
use hex_legends::effects::{Effect, TargetMode};
use hex_legends::game::GameState;
use hex_legends::map::{Coord, HexMap};
use hex_legends::stack::{EffectStack, TriggerKind};

/// A board with one unit per walkable row cell and an effect mix per unit.
fn crowded_board() -> (HexMap, CardRegistry, EffectStack) {
    let mut map = HexMap::new();
    let mut cards = CardRegistry::new();
    let mut stack = EffectStack::new();

    for (i, cell) in map.coords().filter(|c| c.y >= 1 && c.y <= 5).collect::<Vec<_>>().into_iter().enumerate() {
        let owner = PlayerId::new((i % 2) as u8);
        let id = cards.insert(Card::new_unit(1, "Unit", UnitStats::new(2, 200)).with_owner(owner));
        map.place(cell, id);
        if let Some(unit) = cards.get_mut(id).and_then(|c| c.unit_mut()) {
            unit.position = Some(cell);
        }
        stack.add_effect(Effect::adjacent_buff(id, owner, 0, 0), TriggerKind::OnEndOfTurn);
        stack.add_effect(Effect::range_effect(id, owner, 2, 0), TriggerKind::OnEndOfTurn);
        stack.add_effect(Effect::attack_modifier(id, owner, 0, TargetMode::AllEnemy), TriggerKind::OnEndOfTurn);
    }
    (map, cards, stack)
}

fn bench_process_trigger(c: &mut Criterion) {
    let (map, mut cards, mut stack) = crowded_board();

    c.bench_function("process_end_of_turn_crowded", |b| {
        b.iter(|| {
            let summary = stack.process_end_of_turn(black_box(&map), &mut cards);
            black_box(summary)
        });
    });
}

fn bench_add_remove(c: &mut Criterion) {
    c.bench_function("add_remove_1000", |b| {
        b.iter(|| {
            let mut stack = EffectStack::new();
            let handles: Vec<_> = (0..1000u32)
                .map(|i| {
                    let trigger = TriggerKind::ALL[i as usize % TriggerKind::COUNT];
                    let effect = Effect::attack_modifier(
                        hex_legends::cards::CardId::new(i),
                        PlayerId::new(0),
                        1,
                        TargetMode::SelfCard,
                    );
                    stack.add_effect(effect, trigger)
                })
                .collect();
            for handle in handles.into_iter().rev() {
                black_box(stack.remove_effect(handle));
            }
        });
    });
}

fn bench_turn_cycle(c: &mut Criterion) {
    let mut game = GameState::new(GameConfig::new().with_seed(42));
    for name in ["Alice", "Bob"] {
        let player = game.add_player(name);
        let mut deck = vec![game
            .cards_mut()
            .insert(Card::new_legend(1, "Legend", UnitStats::new(2, 10)).with_owner(player))];
        for _ in 0..20 {
            deck.push(game.cards_mut().insert(Card::new_unit(2, "Pawn", UnitStats::new(1, 2)).with_owner(player)));
        }
        game.set_player_deck(player, deck);
    }
    game.start_game();

    c.bench_function("turn_cycle_play_then_pass", |b| {
        b.iter_batched(
            || game.clone(),
            |mut game| {
                for _ in 0..4 {
                    let player = game.current_player();
                    if let Some(&card) = game.player(player).hand.first() {
                        let cell = Coord::new(1, 3 + player.0);
                        black_box(game.process_action(&GameAction::play(player, card, cell.x, cell.y)));
                    }
                    black_box(game.process_action(&GameAction::end_turn(player)));
                }
                game
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_process_trigger, bench_add_remove, bench_turn_cycle);
criterion_main!(benches);
