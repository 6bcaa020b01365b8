//! Effect stack.
//!
//! Active effects wait here, indexed by the `TriggerKind` they listen on.
//! The game controller fires a trigger by calling
//! [`EffectStack::process_trigger`], which checks and applies every effect
//! in that bucket and drops the ones that expire.
//!
//! ## Lifecycle of an effect
//!
//! 1. A card is played and its effects are added under their triggers.
//! 2. Each pass of the trigger calls `check`, then `apply` if the check passed.
//! 3. A failed check removes the effect; callers can also remove it early
//!    through the `EffectHandle` returned on insertion.

mod effect_stack;
mod trigger;

pub use effect_stack::{EffectHandle, EffectStack, ProcessSummary};
pub use trigger::TriggerKind;
