//! Keyword dispatch: text identifiers to typed enums and effect constructors.
//!
//! Consumed by the deck loader. Gameplay never parses strings.
//!
//! ```
//! use hex_legends::cards::CardId;
//! use hex_legends::core::PlayerId;
//! use hex_legends::dispatch::{create_effect, parse_effect_type, EffectType};
//! use hex_legends::loader::EffectConfig;
//!
//! assert_eq!(parse_effect_type("attack_buff"), EffectType::AttackBuff);
//!
//! let config = EffectConfig::new("attack_buff", "adjacent", 1);
//! let effect = create_effect(&config, CardId::new(0), PlayerId::new(0)).unwrap();
//! assert_eq!(effect.name, "Attack Buff");
//! ```

mod factory;
mod lexer;

pub use factory::{create_effect, creator, lookup, EffectCreator};
pub use lexer::{parse_direction, parse_effect_type, parse_target, parse_trigger, EffectType};
