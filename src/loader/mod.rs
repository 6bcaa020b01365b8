//! Deck document loading.
//!
//! `CardLoader` parses JSON deck documents and instantiates their cards
//! into a `CardRegistry`, attaching effects built by the dispatch layer.
//! Bad entries are skipped with a warning; only unreadable or malformed
//! documents fail.

mod config;

pub use config::{CardConfig, DeckConfig, DeckDocument, EffectConfig, Position};

use std::fs;
use std::path::Path;

use crate::cards::{Card, CardId, CardRegistry, UnitStats};
use crate::core::PlayerId;
use crate::dispatch::{create_effect, parse_trigger};
use crate::error::LoadResult;

/// Loader for JSON deck documents.
pub struct CardLoader;

impl CardLoader {
    /// Load all decks from a file.
    pub fn load_from_file(path: impl AsRef<Path>) -> LoadResult<Vec<DeckConfig>> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse all decks from document text.
    pub fn parse(content: &str) -> LoadResult<Vec<DeckConfig>> {
        let document: DeckDocument = serde_json::from_str(content)?;
        Ok(document.into_decks())
    }

    /// Build the cards of `deck` into `registry`, owned by `owner`.
    ///
    /// Returns the new card ids in deck order.
    pub fn instantiate(deck: &DeckConfig, owner: PlayerId, registry: &mut CardRegistry) -> Vec<CardId> {
        let ids: Vec<CardId> = deck
            .cards
            .iter()
            .filter_map(|config| Self::instantiate_card(config, owner, registry))
            .collect();

        if !ids.iter().any(|&id| registry.get(id).is_some_and(Card::is_legend)) {
            log::warn!("Deck {:?} has no legend", deck.name);
        }
        ids
    }

    /// Build one card and its effects. `None` if the entry is skipped.
    pub fn instantiate_card(config: &CardConfig, owner: PlayerId, registry: &mut CardRegistry) -> Option<CardId> {
        let card = match config.card_type.as_str() {
            "unit" | "legend" => {
                let (Some(attack), Some(health)) = (config.attack, config.health) else {
                    log::warn!("Card {} ({}) skipped: missing attack or health", config.id, config.name);
                    return None;
                };
                let stats = UnitStats::new(attack, health)
                    .with_speed(config.speed)
                    .with_range(config.range);
                if config.card_type == "legend" {
                    Card::new_legend(config.id, &config.name, stats)
                } else {
                    Card::new_unit(config.id, &config.name, stats)
                }
            }
            "spell" => Card::new_spell(config.id, &config.name),
            other => {
                log::warn!("Unknown card type {other:?} for card {} ({})", config.id, config.name);
                return None;
            }
        };

        let id = registry.insert(
            card.with_cost(config.cost)
                .with_description(&config.description)
                .with_owner(owner),
        );

        for effect_config in &config.effects {
            let Some(effect) = create_effect(effect_config, id, owner) else {
                continue;
            };
            let trigger = parse_trigger(effect_config.trigger.as_deref().unwrap_or_default());
            if let Some(card) = registry.get_mut(id) {
                card.add_effect(trigger, effect);
            }
        }
        Some(id)
    }
}
