// src/combat/src/effect.rs

use items::{EffectKind, Item};
use thiserror::Error;
use tracing::debug;

use crate::combatant::Stats;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EffectError {
    #[error("{0} needs a target")]
    TargetRequired(String),
}

/// What an item use actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectOutcome {
    /// hp restored (after capping at max_hp)
    Healed(u32),
    /// mp restored (after capping at max_mp)
    ManaRestored(u32),
    /// damage the target actually took after defense
    Damaged(u32),
    NoEffect,
}

/// Apply an item's use effect.
///
/// Does not touch any inventory; removing the spent unit is the caller's job.
pub fn use_on(item: &Item, user: &mut Stats, target: Option<&mut Stats>) -> Result<EffectOutcome, EffectError> {
    let outcome = match item.effect {
        EffectKind::HealHp => {
            let before = user.hp;
            user.heal(item.power);
            EffectOutcome::Healed(user.hp - before)
        }
        EffectKind::HealMp => {
            let before = user.mp;
            user.restore_mp(item.power);
            EffectOutcome::ManaRestored(user.mp - before)
        }
        EffectKind::Damage => {
            let target = target.ok_or_else(|| EffectError::TargetRequired(item.name.clone()))?;
            EffectOutcome::Damaged(target.take_damage(item.power))
        }
        EffectKind::None => EffectOutcome::NoEffect,
    };
    debug!(item = %item.name, user = %user.name, ?outcome, "item used");
    Ok(outcome)
}
