// src/combat/src/combatant.rs

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Stat record shared by the player and every enemy.
///
/// hp and mp stay within `0..=max`; a combatant is dead exactly when hp is 0.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct Stats {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
    pub attack: u32,
    pub defense: u32,
    pub level: u32,
    pub exp: u32,
}

impl Stats {
    /// Fresh stats at full hp/mp.
    pub fn new(name: impl Into<String>, max_hp: u32, max_mp: u32, attack: u32, defense: u32) -> Self {
        Self {
            name: name.into(),
            hp: max_hp,
            max_hp,
            mp: max_mp,
            max_mp,
            attack,
            defense,
            level: 1,
            exp: 0,
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level.max(1);
        self
    }

    /// Apply an incoming hit. Defense is subtracted first; returns the damage
    /// actually taken.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let mitigated = amount.saturating_sub(self.defense);
        self.hp = self.hp.saturating_sub(mitigated);
        mitigated
    }

    pub fn heal(&mut self, amount: u32) {
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
    }

    /// Spend mana if enough is available. Leaves mp untouched otherwise.
    pub fn use_mp(&mut self, amount: u32) -> bool {
        if self.mp >= amount {
            self.mp -= amount;
            true
        } else {
            false
        }
    }

    pub fn restore_mp(&mut self, amount: u32) {
        self.mp = self.mp.saturating_add(amount).min(self.max_mp);
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

/// Anything that fights: the hero and enemies.
///
/// Implementors only expose their [`Stats`]; all behaviour is provided here
/// so the two variants cannot drift apart.
pub trait Combatant {
    fn stats(&self) -> &Stats;

    fn stats_mut(&mut self) -> &mut Stats;

    fn name(&self) -> &str {
        &self.stats().name
    }

    fn is_alive(&self) -> bool {
        self.stats().is_alive()
    }

    fn take_damage(&mut self, amount: u32) -> u32 {
        self.stats_mut().take_damage(amount)
    }

    fn heal(&mut self, amount: u32) {
        self.stats_mut().heal(amount)
    }

    fn use_mp(&mut self, amount: u32) -> bool {
        self.stats_mut().use_mp(amount)
    }

    fn restore_mp(&mut self, amount: u32) {
        self.stats_mut().restore_mp(amount)
    }
}

impl Combatant for Stats {
    fn stats(&self) -> &Stats {
        self
    }

    fn stats_mut(&mut self) -> &mut Stats {
        self
    }
}
