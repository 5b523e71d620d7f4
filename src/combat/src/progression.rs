// src/combat/src/progression.rs
//! Experience curve and level-up rewards.

use tracing::info;

use crate::combatant::Stats;

/// Base experience needed at level 0 of the curve.
const BASE_THRESHOLD: u32 = 50;
/// Additional experience needed per level.
const THRESHOLD_PER_LEVEL: u32 = 20;

const HP_PER_LEVEL: u32 = 10;
const MP_PER_LEVEL: u32 = 5;
const ATTACK_PER_LEVEL: u32 = 3;
const DEFENSE_PER_LEVEL: u32 = 2;

/// Snapshot of the stats right after a level-up, for messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub level: u32,
    pub max_hp: u32,
    pub max_mp: u32,
    pub attack: u32,
    pub defense: u32,
}

/// Experience required to advance from `level` to `level + 1`.
pub fn exp_to_next_level(level: u32) -> u32 {
    BASE_THRESHOLD.saturating_add(level.saturating_mul(THRESHOLD_PER_LEVEL))
}

/// Add experience and resolve every level-up it pays for, one at a time.
pub fn gain_exp(stats: &mut Stats, amount: u32) -> Vec<LevelUp> {
    stats.exp = stats.exp.saturating_add(amount);

    let mut gained = Vec::new();
    while stats.exp >= exp_to_next_level(stats.level) {
        stats.exp -= exp_to_next_level(stats.level);
        gained.push(level_up(stats));
    }
    gained
}

/// Raise the level by one. hp and mp are refilled as part of the reward.
pub fn level_up(stats: &mut Stats) -> LevelUp {
    stats.level = stats.level.saturating_add(1);
    stats.max_hp = stats.max_hp.saturating_add(HP_PER_LEVEL);
    stats.hp = stats.max_hp;
    stats.max_mp = stats.max_mp.saturating_add(MP_PER_LEVEL);
    stats.mp = stats.max_mp;
    stats.attack = stats.attack.saturating_add(ATTACK_PER_LEVEL);
    stats.defense = stats.defense.saturating_add(DEFENSE_PER_LEVEL);

    info!(
        name = %stats.name,
        level = stats.level,
        max_hp = stats.max_hp,
        max_mp = stats.max_mp,
        attack = stats.attack,
        defense = stats.defense,
        "level up"
    );

    LevelUp {
        level: stats.level,
        max_hp: stats.max_hp,
        max_mp: stats.max_mp,
        attack: stats.attack,
        defense: stats.defense,
    }
}
