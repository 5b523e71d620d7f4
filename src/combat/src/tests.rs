// src/combat/src/tests.rs
// Property checks for the stat model and the experience curve.

use proptest::prelude::*;

use crate::combatant::Stats;
use crate::enemy::{Bestiary, EnemyAction};
use crate::progression::{exp_to_next_level, gain_exp};
use crate::rng::ScriptedRng;
use crate::rules::CombatRules;

fn stats_with(hp: u32, defense: u32) -> Stats {
    let mut s = Stats::new("Subject", hp.max(1), 10, 10, defense);
    s.hp = hp;
    s
}

proptest! {
    #[test]
    fn take_damage_matches_formula(hp in 0u32..10_000, defense in 0u32..500, amount in 0u32..10_000) {
        let mut s = stats_with(hp, defense);
        let dealt = s.take_damage(amount);

        prop_assert_eq!(dealt, amount.saturating_sub(defense));
        prop_assert_eq!(s.hp, hp.saturating_sub(dealt));
        prop_assert!(s.hp <= s.max_hp);
    }

    #[test]
    fn heal_never_exceeds_max(max_hp in 1u32..10_000, hp_frac in 0u32..=100, amount in 0u32..20_000) {
        let mut s = Stats::new("Subject", max_hp, 0, 0, 0);
        s.hp = max_hp * hp_frac / 100;
        s.heal(amount);
        prop_assert!(s.hp <= s.max_hp);
    }

    #[test]
    fn threshold_formula(level in 1u32..10_000) {
        prop_assert_eq!(exp_to_next_level(level), 50 + level * 20);
    }

    #[test]
    fn split_exp_gains_equal_one_gain(parts in proptest::collection::vec(0u32..400, 1..12)) {
        let mut split = Stats::new("Split", 100, 30, 10, 5);
        for &p in &parts {
            gain_exp(&mut split, p);
        }

        let mut whole = Stats::new("Whole", 100, 30, 10, 5);
        gain_exp(&mut whole, parts.iter().sum());

        prop_assert_eq!(split.level, whole.level);
        prop_assert_eq!(split.exp, whole.exp);
        prop_assert_eq!(split.max_hp, whole.max_hp);
        prop_assert_eq!(split.attack, whole.attack);
        prop_assert_eq!(split.defense, whole.defense);
    }

    #[test]
    fn exp_stays_below_threshold_after_gain(amount in 0u32..100_000) {
        let mut s = Stats::new("Subject", 100, 30, 10, 5);
        gain_exp(&mut s, amount);
        prop_assert!(s.exp < exp_to_next_level(s.level));
    }

    #[test]
    fn manaless_enemy_always_attacks(draw in 0.0f64..1.0) {
        let rules = CombatRules::default();
        let mut enemy = Bestiary::standard().get("Wraith").expect("wraith").spawn();
        enemy.stats.mp = 0;
        let mut rng = ScriptedRng::constant(draw);
        prop_assert_eq!(enemy.choose_action(&rules, &mut rng), EnemyAction::Attack);
    }
}
