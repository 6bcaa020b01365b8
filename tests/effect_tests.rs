//! Effect variant integration tests.
//!
//! Each test lays out a small board, pushes one effect onto an
//! `EffectStack`, and fires its trigger.

use hex_legends::cards::{Card, CardId, CardRegistry, UnitStats};
use hex_legends::core::PlayerId;
use hex_legends::effects::{Effect, EffectKind, SelectionAction, SelectionMode, TargetMode};
use hex_legends::map::{Coord, Direction, HexMap};
use hex_legends::stack::{EffectHandle, EffectStack, TriggerKind};

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

/// A board with its cards and an empty stack.
struct Board {
    map: HexMap,
    cards: CardRegistry,
    stack: EffectStack,
}

impl Board {
    fn new() -> Self {
        Self {
            map: HexMap::new(),
            cards: CardRegistry::new(),
            stack: EffectStack::new(),
        }
    }

    fn unit(&mut self, owner: PlayerId, x: u8, y: u8, stats: UnitStats) -> CardId {
        self.place(Card::new_unit(1, "Unit", stats).with_owner(owner), x, y)
    }

    fn legend(&mut self, owner: PlayerId, x: u8, y: u8) -> CardId {
        self.place(Card::new_legend(2, "Legend", UnitStats::new(2, 10)).with_owner(owner), x, y)
    }

    fn place(&mut self, card: Card, x: u8, y: u8) -> CardId {
        let cell = Coord::new(x, y);
        let id = self.cards.insert(card);
        assert!(self.map.place(cell, id));
        self.cards.get_mut(id).unwrap().unit_mut().unwrap().position = Some(cell);
        id
    }

    fn relocate(&mut self, id: CardId, x: u8, y: u8) {
        let from = self.map.find(id).unwrap();
        self.map.take(from);
        let to = Coord::new(x, y);
        assert!(self.map.place(to, id));
        self.cards.get_mut(id).unwrap().unit_mut().unwrap().position = Some(to);
    }

    fn fire(&mut self, trigger: TriggerKind, cell: Option<Coord>) {
        self.stack.process_trigger(trigger, &self.map, &mut self.cards, cell, &[]);
    }

    fn attack(&self, id: CardId) -> u8 {
        self.cards.get(id).unwrap().unit().unwrap().attack()
    }

    fn health(&self, id: CardId) -> u8 {
        self.cards.get(id).unwrap().unit().unwrap().health()
    }
}

// =============================================================================
// Stat Modifier Tests
// =============================================================================

/// Test that modifiers apply again on every pass.
#[test]
fn test_modifier_stacks_per_pass() {
    let mut board = Board::new();
    let me = board.unit(P0, 2, 3, UnitStats::new(1, 3));
    board.stack.add_effect(
        Effect::attack_modifier(me, P0, 2, TargetMode::SelfCard),
        TriggerKind::OnEndOfTurn,
    );

    board.fire(TriggerKind::OnEndOfTurn, None);
    board.fire(TriggerKind::OnEndOfTurn, None);
    assert_eq!(board.attack(me), 5);
}

/// Test that an all-enemy health debuff reaches every enemy and no friend.
#[test]
fn test_all_enemy_health_debuff() {
    let mut board = Board::new();
    let me = board.unit(P0, 2, 3, UnitStats::new(1, 3));
    let friend = board.unit(P0, 0, 0, UnitStats::new(1, 3));
    let foe_a = board.unit(P1, 4, 6, UnitStats::new(1, 3));
    let foe_b = board.legend(P1, 2, 6);
    board.stack.add_effect(
        Effect::health_modifier(me, P0, -2, TargetMode::AllEnemy),
        TriggerKind::OnPlay,
    );

    board.fire(TriggerKind::OnPlay, None);
    assert_eq!(board.health(me), 3);
    assert_eq!(board.health(friend), 3);
    assert_eq!(board.health(foe_a), 1);
    assert_eq!(board.health(foe_b), 8);
}

/// Test that a specific-position modifier hits only the trigger cell.
#[test]
fn test_specific_position_modifier() {
    let mut board = Board::new();
    let me = board.unit(P0, 2, 3, UnitStats::new(1, 3));
    let there = board.unit(P1, 1, 5, UnitStats::new(2, 3));
    board.stack.add_effect(
        Effect::range_modifier(me, P0, 1, TargetMode::SpecificPosition),
        TriggerKind::OnMove,
    );

    board.fire(TriggerKind::OnMove, None);
    assert_eq!(board.cards.get(there).unwrap().unit().unwrap().range(), 1);
    board.fire(TriggerKind::OnMove, Some(Coord::new(1, 5)));
    assert_eq!(board.cards.get(there).unwrap().unit().unwrap().range(), 2);
}

// =============================================================================
// Positional Tests
// =============================================================================

/// Test that a positional debuff watches the cell in front of its owner.
#[test]
fn test_positional_debuff_per_player() {
    let mut board = Board::new();
    let p0_unit = board.unit(P0, 1, 3, UnitStats::new(1, 3));
    let p1_unit = board.unit(P1, 3, 3, UnitStats::new(1, 3));
    let below_p0 = board.unit(P1, 1, 4, UnitStats::new(3, 3));
    let above_p1 = board.unit(P0, 3, 2, UnitStats::new(3, 3));

    board.stack.add_effect(
        Effect::positional_debuff(p0_unit, P0, Direction::Down, 1),
        TriggerKind::OnEndOfTurn,
    );
    board.stack.add_effect(
        Effect::positional_debuff(p1_unit, P1, Direction::Down, 2),
        TriggerKind::OnEndOfTurn,
    );

    board.fire(TriggerKind::OnEndOfTurn, None);
    assert_eq!(board.attack(below_p0), 2);
    // Player 1's "down" is the map's up.
    assert_eq!(board.attack(above_p1), 1);
}

/// Test that a positional debuff ignores friendly units.
#[test]
fn test_positional_debuff_spares_friends() {
    let mut board = Board::new();
    let me = board.unit(P0, 2, 3, UnitStats::new(1, 3));
    let friend = board.unit(P0, 2, 2, UnitStats::new(3, 3));
    board.stack.add_effect(
        Effect::positional_debuff(me, P0, Direction::Up, 1),
        TriggerKind::OnEndOfTurn,
    );

    board.fire(TriggerKind::OnEndOfTurn, None);
    assert_eq!(board.attack(friend), 3);
}

/// Test that a positional trigger fires its nested effect only when the
/// trigger cell is the watched neighbor and holds an enemy.
#[test]
fn test_positional_trigger() {
    let mut board = Board::new();
    let me = board.unit(P0, 2, 3, UnitStats::new(1, 3));
    board.unit(P1, 2, 4, UnitStats::new(1, 3));
    board.unit(P1, 1, 3, UnitStats::new(1, 3));
    let reward = Effect::attack_modifier(me, P0, 1, TargetMode::SelfCard).kind;
    board.stack.add_effect(
        Effect::positional_trigger(me, P0, Direction::Down, reward),
        TriggerKind::OnMove,
    );

    board.fire(TriggerKind::OnMove, Some(Coord::new(1, 3)));
    assert_eq!(board.attack(me), 1);
    board.fire(TriggerKind::OnMove, None);
    assert_eq!(board.attack(me), 1);
    board.fire(TriggerKind::OnMove, Some(Coord::new(2, 4)));
    assert_eq!(board.attack(me), 2);
}

fn locked_target(stack: &EffectStack, handle: EffectHandle) -> Option<CardId> {
    match &stack.get(handle).unwrap().kind {
        EffectKind::OnPositionEnter(e) => e.target(),
        other => panic!("unexpected {other:?}"),
    }
}

/// Test that an on-enter effect locks on, keeps hitting, and lets go when
/// the enemy leaves.
#[test]
fn test_on_position_enter_sticky_target() {
    let mut board = Board::new();
    let me = board.unit(P0, 2, 3, UnitStats::new(1, 3));
    let intruder = board.unit(P1, 2, 5, UnitStats::new(1, 9));
    let handle = board.stack.add_effect(
        Effect::on_position_enter(me, P0, Direction::Down, 2),
        TriggerKind::OnMove,
    );

    // Not yet adjacent.
    board.fire(TriggerKind::OnMove, Some(Coord::new(2, 5)));
    assert_eq!(locked_target(&board.stack, handle), None);
    assert_eq!(board.health(intruder), 9);

    board.relocate(intruder, 2, 4);
    board.fire(TriggerKind::OnMove, Some(Coord::new(2, 4)));
    assert_eq!(locked_target(&board.stack, handle), Some(intruder));
    assert_eq!(board.health(intruder), 7);

    // Some other move elsewhere; the lock holds.
    board.fire(TriggerKind::OnMove, Some(Coord::new(0, 0)));
    assert_eq!(board.health(intruder), 5);

    board.relocate(intruder, 3, 5);
    board.fire(TriggerKind::OnMove, Some(Coord::new(3, 5)));
    assert_eq!(locked_target(&board.stack, handle), None);
    assert_eq!(board.health(intruder), 5);
}

/// Test that an on-enter effect releases a target it killed.
#[test]
fn test_on_position_enter_releases_dead_target() {
    let mut board = Board::new();
    let me = board.unit(P0, 2, 3, UnitStats::new(1, 3));
    let victim = board.unit(P1, 2, 4, UnitStats::new(1, 2));
    let handle = board.stack.add_effect(
        Effect::on_position_enter(me, P0, Direction::Down, 3),
        TriggerKind::OnMove,
    );

    board.fire(TriggerKind::OnMove, Some(Coord::new(2, 4)));
    assert_eq!(board.health(victim), 0);
    assert_eq!(locked_target(&board.stack, handle), None);
}

// =============================================================================
// Area Tests
// =============================================================================

/// Test that an adjacent buff raises attack and max health of friends only.
#[test]
fn test_adjacent_buff() {
    let mut board = Board::new();
    let me = board.unit(P0, 2, 3, UnitStats::new(1, 3));
    let friend = board.unit(P0, 2, 2, UnitStats::new(1, 3));
    let foe = board.unit(P1, 2, 4, UnitStats::new(1, 3));
    let far_friend = board.unit(P0, 0, 6, UnitStats::new(1, 3));
    board.stack.add_effect(Effect::adjacent_buff(me, P0, 1, 2), TriggerKind::OnPlay);

    board.fire(TriggerKind::OnPlay, None);
    let buffed = board.cards.get(friend).unwrap().unit().unwrap().stats();
    assert_eq!(buffed.attack, 2);
    assert_eq!(buffed.max_health, 5);
    assert_eq!(buffed.health, 5);
    assert_eq!(board.attack(foe), 1);
    assert_eq!(board.attack(far_friend), 1);
    assert_eq!(board.attack(me), 1);
}

/// Test that a range effect reaches enemies within its hex radius.
#[test]
fn test_range_effect_radius() {
    let mut board = Board::new();
    let me = board.unit(P0, 2, 3, UnitStats::new(1, 3));
    let near = board.unit(P1, 2, 5, UnitStats::new(3, 3));
    let far = board.unit(P1, 2, 6, UnitStats::new(3, 3));
    let friend = board.unit(P0, 3, 3, UnitStats::new(3, 3));
    board.stack.add_effect(Effect::range_effect(me, P0, 2, -1), TriggerKind::OnEndOfTurn);

    board.fire(TriggerKind::OnEndOfTurn, None);
    assert_eq!(board.attack(near), 2);
    assert_eq!(board.attack(far), 3);
    assert_eq!(board.attack(friend), 3);
}

/// Test that area effects do nothing while their source is off the map.
#[test]
fn test_area_effects_need_a_position() {
    let mut board = Board::new();
    let benched = board.cards.insert(Card::new_unit(1, "Bench", UnitStats::new(1, 3)).with_owner(P0));
    let foe = board.unit(P1, 2, 3, UnitStats::new(3, 3));
    board.stack.add_effect(Effect::range_effect(benched, P0, 3, -1), TriggerKind::OnEndOfTurn);

    board.fire(TriggerKind::OnEndOfTurn, None);
    assert_eq!(board.attack(foe), 3);
}

// =============================================================================
// Selection Tests
// =============================================================================

/// Test that a targeted heal restores an ally and stays while valid.
#[test]
fn test_targeted_heal_ally() {
    let mut board = Board::new();
    let spell = board.cards.insert(Card::new_spell(5, "Mend"));
    let ally = board.unit(P0, 1, 4, UnitStats::new(1, 6));
    board.cards.get_mut(ally).unwrap().unit_mut().unwrap().take_damage(4);

    let mut heal = Effect::targeted_heal(spell, P0, 3);
    heal.set_target(Coord::new(1, 4));
    let handle = board.stack.add_effect(heal, TriggerKind::Cast);

    board.fire(TriggerKind::Cast, None);
    assert_eq!(board.health(ally), 5);
    board.fire(TriggerKind::Cast, None);
    assert_eq!(board.health(ally), 6);
    assert!(board.stack.contains(handle));
}

/// Test that a targeted heal aimed at an enemy expires without applying.
#[test]
fn test_targeted_heal_rejects_enemy() {
    let mut board = Board::new();
    let spell = board.cards.insert(Card::new_spell(5, "Mend"));
    let foe = board.unit(P1, 1, 4, UnitStats::new(1, 6));
    board.cards.get_mut(foe).unwrap().unit_mut().unwrap().take_damage(4);

    let mut heal = Effect::targeted_heal(spell, P0, 3);
    heal.set_target(Coord::new(1, 4));
    let handle = board.stack.add_effect(heal, TriggerKind::Cast);

    board.fire(TriggerKind::Cast, None);
    assert_eq!(board.health(foe), 2);
    assert!(!board.stack.contains(handle));
}

/// Test that targeted damage cannot hit a Legend by default.
#[test]
fn test_targeted_damage_spares_legends() {
    let mut board = Board::new();
    let spell = board.cards.insert(Card::new_spell(5, "Jab"));
    let legend = board.legend(P1, 2, 6);
    let grunt = board.unit(P1, 1, 5, UnitStats::new(1, 4));

    let mut at_legend = Effect::targeted_damage(spell, P0, 3);
    at_legend.set_target(Coord::new(2, 6));
    let mut at_grunt = Effect::targeted_damage(spell, P0, 3);
    at_grunt.set_target(Coord::new(1, 5));
    board.stack.add_effect(at_legend, TriggerKind::Cast);
    board.stack.add_effect(at_grunt, TriggerKind::Cast);

    board.fire(TriggerKind::Cast, None);
    assert_eq!(board.health(legend), 10);
    assert_eq!(board.health(grunt), 1);
    assert_eq!(board.stack.len(), 1);
}

/// Test that an unbound selection effect expires.
#[test]
fn test_unbound_selection_expires() {
    let mut board = Board::new();
    let spell = board.cards.insert(Card::new_spell(5, "Lost"));
    board.stack.add_effect(Effect::targeted_buff(spell, P0, 1, 1), TriggerKind::Cast);

    board.fire(TriggerKind::Cast, None);
    assert!(board.stack.is_empty());
}

/// Test buff and debuff stat changes, including floors.
#[test]
fn test_buff_and_debuff() {
    let mut board = Board::new();
    let spell = board.cards.insert(Card::new_spell(5, "Mix"));
    let ally = board.unit(P0, 1, 4, UnitStats::new(1, 2));
    let foe = board.unit(P1, 3, 4, UnitStats::new(1, 2).with_speed(2));

    let mut buff = Effect::targeted_buff(spell, P0, 2, 3);
    buff.set_target(Coord::new(1, 4));
    let mut debuff = Effect::targeted_debuff(spell, P0, -3, -5);
    debuff.set_target(Coord::new(3, 4));
    board.stack.add_effect(buff, TriggerKind::Cast);
    board.stack.add_effect(debuff, TriggerKind::Cast);

    board.fire(TriggerKind::Cast, None);
    let ally_stats = board.cards.get(ally).unwrap().unit().unwrap().stats();
    assert_eq!((ally_stats.attack, ally_stats.health, ally_stats.max_health), (3, 5, 5));
    let foe_stats = board.cards.get(foe).unwrap().unit().unwrap().stats();
    assert_eq!((foe_stats.attack, foe_stats.speed), (0, 1));
}

/// Test that the selection mode can be widened.
#[test]
fn test_selection_mode_override() {
    let mut board = Board::new();
    let spell = board.cards.insert(Card::new_spell(5, "Smite"));
    let legend = board.legend(P1, 2, 6);

    let mut smite = Effect::targeted_damage(spell, P0, 4);
    if let EffectKind::Selection(selection) = &mut smite.kind {
        selection.mode = SelectionMode::Any;
        assert_eq!(selection.action, SelectionAction::Damage(4));
    }
    smite.set_target(Coord::new(2, 6));
    board.stack.add_effect(smite, TriggerKind::Cast);

    board.fire(TriggerKind::Cast, None);
    assert_eq!(board.health(legend), 6);
}
