// src/combat/src/enemy.rs

use std::collections::HashMap;

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use tracing::debug;

use crate::combatant::{Combatant, Stats};
use crate::rng::RandomSource;
use crate::rules::CombatRules;

/// Blueprint an [`Enemy`] is spawned from at the start of each encounter.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct EnemyTemplate {
    pub name: String,
    pub max_hp: u32,
    pub max_mp: u32,
    pub attack: u32,
    pub defense: u32,
    pub level: u32,
    pub exp_reward: u32,
    pub gold_reward: u32,
}

impl EnemyTemplate {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        max_hp: u32,
        max_mp: u32,
        attack: u32,
        defense: u32,
        level: u32,
        exp_reward: u32,
        gold_reward: u32,
    ) -> Self {
        Self {
            name: name.to_string(),
            max_hp,
            max_mp,
            attack,
            defense,
            level,
            exp_reward,
            gold_reward,
        }
    }

    /// A fresh enemy at full hp and mp.
    pub fn spawn(&self) -> Enemy {
        Enemy {
            stats: Stats::new(self.name.clone(), self.max_hp, self.max_mp, self.attack, self.defense)
                .with_level(self.level),
            exp_reward: self.exp_reward,
            gold_reward: self.gold_reward,
        }
    }
}

/// What an enemy does on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum EnemyAction {
    Attack,
    Skill,
}

/// Result of an enemy turn against the hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnemyStrike {
    /// The action that actually resolved (a skill without mana degrades to
    /// an attack)
    pub action: EnemyAction,
    pub damage: u32,
}

/// An enemy alive for the duration of one encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub stats: Stats,
    pub exp_reward: u32,
    pub gold_reward: u32,
}

impl Enemy {
    /// Pick this turn's action. Stateless: only current mana and one draw
    /// matter, and the draw is skipped entirely when mana is short.
    pub fn choose_action<R: RandomSource + ?Sized>(&self, rules: &CombatRules, rng: &mut R) -> EnemyAction {
        if self.stats.mp >= rules.enemy_skill_cost && rng.chance(rules.enemy_skill_chance) {
            EnemyAction::Skill
        } else {
            EnemyAction::Attack
        }
    }

    /// Resolve `action` against `target`.
    pub fn strike(&mut self, action: EnemyAction, target: &mut Stats, rules: &CombatRules) -> EnemyStrike {
        let (action, raw) = match action {
            EnemyAction::Skill if self.stats.use_mp(rules.enemy_skill_cost) => (
                EnemyAction::Skill,
                self.stats.attack.saturating_add(rules.enemy_skill_bonus),
            ),
            _ => (EnemyAction::Attack, self.stats.attack),
        };
        let damage = target.take_damage(raw);
        debug!(enemy = %self.stats.name, %action, raw, damage, "enemy strikes");
        EnemyStrike { action, damage }
    }
}

impl Combatant for Enemy {
    fn stats(&self) -> &Stats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }
}

/// Every enemy the world knows how to spawn, keyed by name.
#[derive(Clone, Debug, Default)]
pub struct Bestiary {
    templates: HashMap<String, EnemyTemplate>,
}

impl Bestiary {
    pub fn new(templates: impl IntoIterator<Item = EnemyTemplate>) -> Self {
        Self {
            templates: templates.into_iter().map(|t| (t.name.clone(), t)).collect(),
        }
    }

    /// Stock monsters, including the Rat used wherever nothing else lives.
    pub fn standard() -> Self {
        Self::new([
            EnemyTemplate::new("Slime", 30, 10, 5, 2, 1, 15, 10),
            EnemyTemplate::new("Goblin", 50, 20, 10, 5, 3, 30, 20),
            EnemyTemplate::new("Orc", 80, 10, 15, 8, 5, 50, 40),
            EnemyTemplate::new("Dragon", 200, 50, 25, 15, 10, 150, 200),
            EnemyTemplate::new("Dark Elf", 70, 30, 18, 7, 6, 60, 50),
            EnemyTemplate::new("Troll", 120, 10, 20, 10, 7, 80, 70),
            EnemyTemplate::new("Wraith", 60, 50, 22, 6, 6, 90, 60),
            EnemyTemplate::new("Fire Elemental", 90, 40, 25, 8, 8, 100, 85),
            EnemyTemplate::new("Ice Golem", 130, 15, 20, 12, 9, 110, 90),
            EnemyTemplate::new("Necromancer", 80, 70, 30, 5, 10, 120, 100),
            EnemyTemplate::new("Ghost Knight", 95, 20, 18, 15, 9, 100, 95),
            EnemyTemplate::new("Bandit Leader", 110, 25, 22, 12, 8, 95, 80),
            EnemyTemplate::new("Vampire", 100, 60, 26, 10, 10, 130, 120),
            EnemyTemplate::new("Cursed Dragon", 250, 80, 35, 20, 15, 200, 250),
            EnemyTemplate::new("Rat", 20, 5, 3, 1, 1, 5, 3),
        ])
    }

    pub fn get(&self, name: &str) -> Option<&EnemyTemplate> {
        self.templates.get(name)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
