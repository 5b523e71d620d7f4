// src/combat/src/lib.rs
//! Combatant model, progression curve, item effects and enemy behaviour.
//!
//! Nothing in this crate reads ambient randomness: every probabilistic
//! decision takes a [`RandomSource`] argument.

pub mod combatant;
pub mod effect;
pub mod enemy;
pub mod progression;
pub mod rng;
pub mod rules;

pub use crate::combatant::{Combatant, Stats};
pub use crate::effect::{EffectError, EffectOutcome, use_on};
pub use crate::enemy::{Bestiary, Enemy, EnemyAction, EnemyTemplate};
pub use crate::progression::{LevelUp, exp_to_next_level, gain_exp, level_up};
pub use crate::rng::{GameRng, RandomSource, ScriptedRng};
pub use crate::rules::CombatRules;

#[cfg(test)]
mod tests;
