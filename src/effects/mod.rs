//! Effect engine: polymorphic effect variants with a `{check, apply}` contract.
//!
//! - `Effect`: an instance on the stack (owner, source card, variant)
//! - `EffectKind`: the closed set of variants
//! - `EffectContext`: map + card registry view handed to each variant
//! - `TargetMode` / `SelectionMode`: how variants pick the units they touch
//!
//! ## Variants
//!
//! | Variant | Expires | Reach |
//! |---------|---------|-------|
//! | Attack/Health/Range modifier | never | self, adjacent, all friendly, all enemy, trigger cell |
//! | Positional debuff / trigger | never | one neighbor cell |
//! | On-position-enter | never | one neighbor cell, sticky target |
//! | Adjacent buff | never | six neighbors |
//! | Range effect | never | hex radius |
//! | Targeted spell | after one pass if instant | fixed cell |
//! | Targeted heal/damage/buff/debuff | when the target is invalid | late-bound cell |

mod area;
mod effect;
mod modifiers;
mod positional;
mod selection;
mod spell;
mod targeting;

pub use area::{AdjacentBuff, RangeEffect};
pub use effect::{Effect, EffectBehavior, EffectKind};
pub use modifiers::{Stat, StatModifier};
pub use positional::{OnPositionEnter, PositionalDebuff, PositionalTrigger};
pub use selection::{SelectionAction, SelectionEffect};
pub use spell::TargetedSpell;
pub use targeting::{EffectContext, EffectSource, SelectionMode, TargetMode};
