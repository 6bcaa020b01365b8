//! Game session state.
//!
//! `GameState` owns the map, the effect stack, the card registry, the seated
//! players, and the session RNG. It sequences setup and turn changes, routes
//! destroyed cards, and decides when the game is over.
//!
//! ## Phases
//!
//! `Setup` → `Play` → `End`. `Deploy` is reserved and never entered.
//!
//! ## Card routing
//!
//! - Destroyed units go back to their owner's deck (reshuffled) with their
//!   printed stats restored.
//! - A destroyed Legend goes to its owner's discard pile for good and the
//!   owner is eliminated.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardId, CardRegistry};
use crate::core::{GameConfig, GameRng, Player, PlayerId, Team};
use crate::effects::Effect;
use crate::error::ActionError;
use crate::loader::{CardLoader, DeckConfig};
use crate::map::{Coord, HexMap};
use crate::stack::{EffectHandle, EffectStack, ProcessSummary, TriggerKind};

/// Coarse game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Setup,
    Deploy,
    Play,
    End,
}

/// A complete game session.
///
/// ## Example
///
/// ```
/// use hex_legends::cards::{Card, UnitStats};
/// use hex_legends::core::GameConfig;
/// use hex_legends::game::{GamePhase, GameState};
///
/// let mut game = GameState::new(GameConfig::new().with_seed(7));
/// let alice = game.add_player("Alice");
/// let bob = game.add_player("Bob");
///
/// for player in [alice, bob] {
///     let legend = game.cards_mut().insert(Card::new_legend(1, "Warden", UnitStats::new(2, 10)).with_owner(player));
///     game.set_player_deck(player, vec![legend]);
/// }
///
/// game.start_game();
/// assert_eq!(game.phase(), GamePhase::Play);
/// assert!(!game.is_game_over());
/// ```
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) map: HexMap,
    pub(crate) stack: EffectStack,
    pub(crate) cards: CardRegistry,
    pub(crate) players: Vec<Player>,
    pub(crate) current: usize,
    pub(crate) turn: u32,
    pub(crate) phase: GamePhase,
    pub(crate) rng: GameRng,
    /// Stack handles pushed on behalf of each card.
    active_effects: FxHashMap<CardId, SmallVec<[EffectHandle; 4]>>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameState {
    /// Create an empty session in the setup phase.
    pub fn new(config: GameConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            config,
            map: HexMap::new(),
            stack: EffectStack::new(),
            cards: CardRegistry::new(),
            players: Vec::new(),
            current: 0,
            turn: 0,
            phase: GamePhase::Setup,
            rng,
            active_effects: FxHashMap::default(),
        }
    }

    // === Setup ===

    /// Seat a player on the next team in rotation (A, B, A, ...).
    pub fn add_player(&mut self, name: impl Into<String>) -> PlayerId {
        let team = Team::for_seat(self.players.len());
        self.add_player_with_team(name, team)
    }

    /// Seat a player on an explicit team.
    pub fn add_player_with_team(&mut self, name: impl Into<String>, team: Team) -> PlayerId {
        let id = PlayerId::new(self.players.len() as u8);
        self.players.push(Player::new(
            id,
            team,
            name,
            self.config.starting_health,
            self.config.max_actions_per_turn,
        ));
        id
    }

    /// Install a shuffled deck for `player`.
    pub fn set_player_deck(&mut self, player: PlayerId, deck: Vec<CardId>) {
        let seat = self.seat(player);
        let player = &mut self.players[seat];
        player.deck = deck;
        self.rng.shuffle(&mut player.deck);
    }

    /// Instantiate a deck document entry for `player` and install it.
    pub fn load_deck(&mut self, player: PlayerId, deck: &DeckConfig) -> Vec<CardId> {
        self.seat(player);
        let ids = CardLoader::instantiate(deck, player, &mut self.cards);
        self.set_player_deck(player, ids.clone());
        ids
    }

    /// Place legends, deal opening hands, and enter the play phase.
    pub fn start_game(&mut self) {
        self.place_legends();
        let hand_size = self.config.starting_hand_size;
        for seat in 0..self.players.len() {
            self.draw_for_seat(seat, hand_size);
            self.players[seat].reset_actions();
        }
        self.current = 0;
        self.phase = GamePhase::Play;
        log::info!("Game started with {} players", self.players.len());
    }

    fn place_legends(&mut self) {
        for seat in 0..self.players.len() {
            let id = self.players[seat].id;
            let Some(spawn) = self.map.spawn_position(id) else {
                log::warn!("{id} has no spawn cell");
                continue;
            };
            let cards = &self.cards;
            let Some(index) = self.players[seat]
                .deck
                .iter()
                .position(|&card| cards.get(card).is_some_and(Card::is_legend))
            else {
                log::warn!("{id} has no legend in their deck");
                continue;
            };

            let legend = self.players[seat].deck.remove(index);
            if let Err(err) = self.place_unit(legend, spawn) {
                log::warn!("Could not place legend for {id}: {err}");
                self.players[seat].deck.push(legend);
                continue;
            }
            self.players[seat].legend = Some(legend);
            log::info!("{id} legend placed at {spawn}");
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn map(&self) -> &HexMap {
        &self.map
    }

    #[must_use]
    pub fn stack(&self) -> &EffectStack {
        &self.stack
    }

    #[must_use]
    pub fn cards(&self) -> &CardRegistry {
        &self.cards
    }

    /// Mutable registry access for building cards before the game starts.
    pub fn cards_mut(&mut self) -> &mut CardRegistry {
        &mut self.cards
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId::new(self.current as u8)
    }

    #[must_use]
    pub fn find_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Look up a seated player.
    ///
    /// # Panics
    ///
    /// Panics if no player with `id` is seated.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[self.seat(id)]
    }

    pub(crate) fn seat(&self, id: PlayerId) -> usize {
        match self.players.iter().position(|p| p.id == id) {
            Some(seat) => seat,
            None => panic!("Player not found: {id}"),
        }
    }

    #[must_use]
    pub fn actions_remaining(&self, player: PlayerId) -> u8 {
        self.player(player).actions_remaining()
    }

    pub fn set_max_actions_per_turn(&mut self, player: PlayerId, max: u8) {
        let seat = self.seat(player);
        self.players[seat].set_max_actions_per_turn(max);
    }

    /// Reduce a player's health.
    pub fn deal_damage(&mut self, player: PlayerId, amount: u8) {
        let seat = self.seat(player);
        self.players[seat].take_damage(amount);
    }

    #[must_use]
    pub fn is_valid_position(&self, cell: Coord) -> bool {
        self.map.cell(cell).is_some()
    }

    #[must_use]
    pub fn is_position_empty(&self, cell: Coord) -> bool {
        self.map.is_empty(cell)
    }

    #[must_use]
    pub fn is_player_alive(&self, player: PlayerId) -> bool {
        self.player(player).is_alive(&self.cards)
    }

    /// The game is over as soon as any seated player has lost their Legend.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.players.iter().any(|p| !p.is_alive(&self.cards))
    }

    /// Team of the first surviving player, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Team> {
        if !self.is_game_over() {
            return None;
        }
        self.players
            .iter()
            .find(|p| p.is_alive(&self.cards))
            .map(|p| p.team)
    }

    /// Move to the end phase if a Legend has fallen. Returns whether the
    /// game has ended.
    pub fn check_legend_status(&mut self) -> bool {
        if self.phase == GamePhase::Play && self.is_game_over() {
            self.phase = GamePhase::End;
            match self.winner() {
                Some(team) => log::info!("Game over on turn {}: {team} wins", self.turn),
                None => log::info!("Game over on turn {}: no legend survived", self.turn),
            }
        }
        self.phase == GamePhase::End
    }

    // === Cards and effects ===

    /// Put a unit from off-map onto an empty cell and activate its effects.
    pub fn place_unit(&mut self, card: CardId, cell: Coord) -> Result<(), ActionError> {
        if !self.is_valid_position(cell) {
            return Err(ActionError::OutOfBounds(cell));
        }
        if !self.map.is_empty(cell) {
            return Err(ActionError::CellOccupied(cell));
        }
        let unit = self
            .cards
            .get_mut(card)
            .ok_or(ActionError::UnknownCard(card))?
            .unit_mut()
            .ok_or(ActionError::NotAUnit(card))?;
        unit.position = Some(cell);
        self.map.place(cell, card);
        self.activate_effects(card, None, None);
        Ok(())
    }

    /// Push a card's effects onto the stack under their triggers.
    ///
    /// Selection effects are bound to `explicit` when given, otherwise to
    /// `fallback` if they have no target yet.
    pub(crate) fn activate_effects(&mut self, card: CardId, explicit: Option<Coord>, fallback: Option<Coord>) {
        let Some(source) = self.cards.get(card) else {
            return;
        };
        for entry in source.effects().to_vec() {
            let mut effect = entry.effect;
            if effect.needs_target() {
                if let Some(cell) = explicit.or(effect.target()).or(fallback) {
                    effect.set_target(cell);
                }
            }
            let handle = self.stack.add_effect(effect, entry.trigger);
            self.active_effects.entry(card).or_default().push(handle);
        }
    }

    fn deactivate_effects(&mut self, card: CardId) {
        for handle in self.active_effects.remove(&card).unwrap_or_default() {
            self.stack.remove_effect(handle);
        }
    }

    /// Stack handles currently active on behalf of `card`.
    #[must_use]
    pub fn active_effects(&self, card: CardId) -> &[EffectHandle] {
        self.active_effects
            .get(&card)
            .map(|handles| handles.as_slice())
            .unwrap_or(&[])
    }

    /// Push a free-standing effect onto the stack.
    pub fn add_effect(&mut self, effect: Effect, trigger: TriggerKind) -> EffectHandle {
        self.stack.add_effect(effect, trigger)
    }

    pub fn remove_effect(&mut self, handle: EffectHandle) -> Option<Effect> {
        let removed = self.stack.remove_effect(handle);
        if removed.is_some() {
            self.prune_active_effects();
        }
        removed
    }

    /// Drop tracked handles the stack no longer holds.
    fn prune_active_effects(&mut self) {
        let stack = &self.stack;
        self.active_effects.retain(|_, handles| {
            handles.retain(|handle| stack.contains(*handle));
            !handles.is_empty()
        });
    }

    /// Run one trigger through the stack, then clear dead units off the map
    /// and re-check legends.
    pub fn process_trigger(&mut self, trigger: TriggerKind, cell: Option<Coord>) -> ProcessSummary {
        let summary = self.stack.process_trigger(trigger, &self.map, &mut self.cards, cell, &[]);
        log::debug!(
            "{trigger} processed: {} applied, {} expired",
            summary.applied,
            summary.expired
        );
        if summary.expired > 0 {
            self.prune_active_effects();
        }
        self.sweep_dead_units();
        self.check_legend_status();
        summary
    }

    pub fn process_end_of_turn(&mut self) -> ProcessSummary {
        self.process_trigger(TriggerKind::OnEndOfTurn, None)
    }

    pub fn process_start_of_turn(&mut self) -> ProcessSummary {
        self.process_trigger(TriggerKind::OnStartOfTurn, None)
    }

    fn sweep_dead_units(&mut self) {
        let cards = &self.cards;
        let dead: Vec<CardId> = self
            .map
            .occupied()
            .filter(|&(_, id)| cards.get(id).is_some_and(|card| !card.is_alive()))
            .map(|(_, id)| id)
            .collect();
        for id in dead {
            self.destroy_card(id);
        }
    }

    /// Remove a card from the map and route it to its owner.
    ///
    /// Returns `false` if the card was not on the map.
    pub fn destroy_card(&mut self, card: CardId) -> bool {
        let Some(cell) = self.map.find(card) else {
            return false;
        };
        self.map.take(cell);
        self.deactivate_effects(card);

        let Some(instance) = self.cards.get_mut(card) else {
            return true;
        };
        let owner = instance.owner;
        let seat = self.players.iter().position(|p| p.id == owner);
        let tracked_legend = seat.is_some_and(|seat| self.players[seat].legend == Some(card));
        if let Some(unit) = instance.unit_mut() {
            if tracked_legend {
                unit.position = None;
            } else {
                unit.reset();
            }
        }

        let Some(seat) = seat else {
            log::warn!("{card} destroyed at {cell} has no seated owner");
            return true;
        };
        if tracked_legend {
            let player = &mut self.players[seat];
            player.legend = None;
            player.discard.push(card);
            log::info!("{owner} lost their legend at {cell}");
        } else {
            self.return_to_deck(seat, card);
        }

        self.check_legend_status();
        true
    }

    /// Return a card to its owner's deck and reshuffle.
    pub(crate) fn return_to_deck(&mut self, seat: usize, card: CardId) {
        let player = &mut self.players[seat];
        player.deck.push(card);
        self.rng.shuffle(&mut player.deck);
        log::trace!("{card} returned to {}'s deck", player.id);
    }

    /// Draw `count` cards for `player`.
    pub fn draw_cards(&mut self, player: PlayerId, count: usize) {
        let seat = self.seat(player);
        self.draw_for_seat(seat, count);
    }

    pub(crate) fn draw_for_seat(&mut self, seat: usize, count: usize) {
        for _ in 0..count {
            if self.players[seat].deck.is_empty() {
                self.recycle_discard(seat);
            }
            let Some(card) = self.players[seat].deck.pop() else {
                log::trace!("{} has nothing left to draw", self.players[seat].id);
                break;
            };
            log::trace!("{} draws {card}", self.players[seat].id);
            self.players[seat].hand.push(card);
            if self.phase == GamePhase::Play {
                self.process_trigger(TriggerKind::OnDraw, None);
            }
        }
    }

    /// Shuffle the discard pile back into an empty deck. Fallen legends stay
    /// in the discard pile.
    fn recycle_discard(&mut self, seat: usize) {
        let cards = &self.cards;
        let player = &mut self.players[seat];
        let (legends, reusable): (Vec<CardId>, Vec<CardId>) = player
            .discard
            .drain(..)
            .partition(|&card| cards.get(card).is_some_and(Card::is_legend));
        player.discard = legends;
        if reusable.is_empty() {
            return;
        }
        log::trace!("{} reshuffles {} cards from discard", player.id, reusable.len());
        player.deck.extend(reusable);
        self.rng.shuffle(&mut player.deck);
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Turn {} | {:?} | current: {}",
            self.turn,
            self.phase,
            self.current_player()
        )?;
        for player in &self.players {
            writeln!(
                f,
                "{} ({}, {}): hp {}, actions {}/{}, deck {}, hand {}, discard {}, legend {}",
                player.name,
                player.id,
                player.team,
                player.health,
                player.actions_remaining(),
                player.max_actions_per_turn(),
                player.deck.len(),
                player.hand.len(),
                player.discard.len(),
                if player.is_alive(&self.cards) { "alive" } else { "down" },
            )?;
        }
        write!(f, "{}", self.map)
    }
}
