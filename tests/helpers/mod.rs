//! Shared builders for integration tests.
#![allow(dead_code)]

use terminal_rpg::combat::{CombatRules, EnemyTemplate, ScriptedRng};
use terminal_rpg::hero::Hero;
use terminal_rpg::input::{PlayerAction, ScriptedActions};

/// Fresh level-1 hero with the given items already in the bag.
pub fn hero_with(items: &[(&str, u32)]) -> Hero {
    let mut hero = Hero::new("Tester");
    for (name, qty) in items {
        hero.bag.inventory.add(name, *qty);
    }
    hero
}

/// An enemy without mana, so it never rolls for its skill.
pub fn plain_enemy(name: &str, hp: u32, attack: u32, defense: u32) -> EnemyTemplate {
    EnemyTemplate::new(name, hp, 0, attack, defense, 1, 25, 12)
}

pub fn script(actions: impl IntoIterator<Item = PlayerAction>) -> ScriptedActions {
    ScriptedActions::new(actions)
}

/// Always draws high: no enemy skills, no encounters, flee succeeds.
pub fn high_rng() -> ScriptedRng {
    ScriptedRng::constant(0.99)
}

/// Always draws 0: enemy skills and encounters whenever possible, flee fails.
pub fn low_rng() -> ScriptedRng {
    ScriptedRng::constant(0.0)
}

pub fn rules() -> CombatRules {
    CombatRules::default()
}

/// For calls that must not reach combat.
pub fn no_input() -> ScriptedActions {
    ScriptedActions::default()
}
