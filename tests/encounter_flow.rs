//! End-to-end encounters through `start_encounter`.

mod helpers;

use helpers::*;
use pretty_assertions::assert_eq;
use terminal_rpg::combat::{Bestiary, Combatant, ScriptedRng};
use terminal_rpg::input::{ItemChoice, PlayerAction};
use terminal_rpg::items::ItemCatalog;
use terminal_rpg::turn_system::{
    Encounter, EncounterError, EncounterOutcome, Rewards, TurnState, start_encounter,
};

#[test]
fn attack_ten_against_defense_five_deals_five() {
    let catalog = ItemCatalog::standard();
    let rules = rules();
    let mut hero = hero_with(&[]);
    let mut encounter = Encounter::begin(&plain_enemy("Post", 40, 0, 5), &rules);

    encounter
        .submit(&mut hero, PlayerAction::Attack, &catalog, &mut high_rng())
        .unwrap();

    assert_eq!(encounter.enemy().stats.hp, 35);
}

#[test]
fn successful_flee_gives_nothing_and_leaves_enemy_untouched() {
    let catalog = ItemCatalog::standard();
    let rules = rules();
    let mut hero = hero_with(&[]);
    let mut rng = ScriptedRng::new([0.5]);

    let result = start_encounter(
        &mut hero,
        &plain_enemy("Bandit", 60, 4, 0),
        &catalog,
        &rules,
        &mut rng,
        &mut script([PlayerAction::Flee]),
    )
    .unwrap();

    assert_eq!(result.outcome, EncounterOutcome::Fled);
    assert_eq!(result.rewards, Rewards::default());
    assert_eq!(result.enemy.stats.hp, 60);
    assert_eq!(hero.gold, 100);
    assert_eq!(hero.stats.exp, 0);
    assert_eq!(result.turns, 1);
}

#[test]
fn failed_flee_lets_enemy_act() {
    let catalog = ItemCatalog::standard();
    let rules = rules();
    let mut hero = hero_with(&[]);
    let mut rng = ScriptedRng::new([0.49, 0.5]);

    let result = start_encounter(
        &mut hero,
        &plain_enemy("Bandit", 60, 9, 0),
        &catalog,
        &rules,
        &mut rng,
        &mut script([PlayerAction::Flee, PlayerAction::Flee]),
    )
    .unwrap();

    assert_eq!(result.outcome, EncounterOutcome::Fled);
    assert_eq!(result.turns, 2);
    assert_eq!(hero.stats.hp, 96);
    assert!(result.logs.iter().any(|l| l == "Failed to flee!"));
}

#[test]
fn victory_grants_experience_and_gold() {
    let catalog = ItemCatalog::standard();
    let rules = rules();
    let mut hero = hero_with(&[]);
    let template = terminal_rpg::combat::EnemyTemplate::new("Brute", 20, 0, 0, 0, 3, 75, 40);

    let result = start_encounter(
        &mut hero,
        &template,
        &catalog,
        &rules,
        &mut high_rng(),
        &mut script(vec![PlayerAction::Attack; 2]),
    )
    .unwrap();

    assert_eq!(result.outcome, EncounterOutcome::Victory);
    assert_eq!(result.rewards.exp, 75);
    assert_eq!(result.rewards.gold, 40);
    assert_eq!(result.rewards.level_ups.len(), 1);
    assert_eq!(hero.level(), 2);
    assert_eq!(hero.stats.exp, 5);
    assert_eq!(hero.stats.max_hp, 110);
    assert_eq!(hero.stats.hp, 110);
    assert_eq!(hero.gold, 140);
}

#[test]
fn defeat_grants_nothing() {
    let catalog = ItemCatalog::standard();
    let rules = rules();
    let bestiary = Bestiary::standard();
    let mut hero = hero_with(&[]);

    let result = start_encounter(
        &mut hero,
        bestiary.get("Cursed Dragon").unwrap(),
        &catalog,
        &rules,
        &mut low_rng(),
        &mut script(vec![PlayerAction::Attack; 20]),
    )
    .unwrap();

    assert_eq!(result.outcome, EncounterOutcome::Defeat);
    assert_eq!(result.rewards, Rewards::default());
    assert!(!hero.is_alive());
    assert_eq!(hero.gold, 100);
}

#[test]
fn enemy_skill_hits_harder_and_spends_mana() {
    let catalog = ItemCatalog::standard();
    let rules = rules();
    let bestiary = Bestiary::standard();
    let mut hero = hero_with(&[]);
    // Goblin: attack 10, 20 mp. Skill = 10 + 10 - 5 defense.
    let mut encounter = Encounter::begin(bestiary.get("Goblin").unwrap(), &rules);

    encounter
        .submit(&mut hero, PlayerAction::Unknown("?".into()), &catalog, &mut low_rng())
        .unwrap();

    assert_eq!(hero.stats.hp, 85);
    assert_eq!(encounter.enemy().stats.mp, 15);
}

#[test]
fn fire_scroll_in_battle_consumes_one() {
    let catalog = ItemCatalog::standard();
    let rules = rules();
    let mut hero = hero_with(&[("Fire Scroll", 2)]);
    let mut encounter = Encounter::begin(&plain_enemy("Target", 100, 0, 10), &rules);

    encounter
        .submit(
            &mut hero,
            PlayerAction::UseItem(ItemChoice::Slot(1)),
            &catalog,
            &mut high_rng(),
        )
        .unwrap();

    assert_eq!(encounter.enemy().stats.hp, 70);
    assert_eq!(hero.bag.inventory.count("Fire Scroll"), 1);
}

#[test]
fn running_out_of_input_aborts() {
    let catalog = ItemCatalog::standard();
    let rules = rules();
    let mut hero = hero_with(&[]);

    let err = start_encounter(
        &mut hero,
        &plain_enemy("Wall", 1000, 0, 0),
        &catalog,
        &rules,
        &mut high_rng(),
        &mut script([PlayerAction::Attack]),
    )
    .unwrap_err();

    assert!(matches!(err, EncounterError::Input(_)));
}

#[test]
fn state_returns_to_player_after_a_round() {
    let catalog = ItemCatalog::standard();
    let rules = rules();
    let mut hero = hero_with(&[]);
    let mut encounter = Encounter::begin(&plain_enemy("Wall", 1000, 1, 0), &rules);
    assert_eq!(encounter.state(), TurnState::AwaitingPlayerAction);

    for _ in 0..3 {
        let state = encounter
            .submit(&mut hero, PlayerAction::Attack, &catalog, &mut high_rng())
            .unwrap();
        assert_eq!(state, TurnState::AwaitingPlayerAction);
    }
    assert_eq!(encounter.turns(), 3);
}
