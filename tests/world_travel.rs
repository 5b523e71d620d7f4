//! Travelling the world graph through a session.

mod helpers;

use helpers::*;
use pretty_assertions::assert_eq;
use terminal_rpg::combat::{CombatRules, GameRng};
use terminal_rpg::hero::Hero;
use terminal_rpg::input::PlayerAction;
use terminal_rpg::session::{GameData, Session, SessionError};
use terminal_rpg::turn_system::EncounterOutcome;
use terminal_rpg::world::TravelError;

fn never_fight() -> CombatRules {
    CombatRules {
        encounter_chance: 0.0,
        ..CombatRules::default()
    }
}

#[test]
fn walking_a_loop_of_edges() {
    let rules = never_fight();
    let data = GameData::standard(&rules);
    let mut session = Session::new(Hero::new("Walker"), &data, rules, GameRng::new(1)).unwrap();
    let mut input = no_input();

    for stop in ["Forest", "Mountain", "Dungeon Entrance", "Town"] {
        assert!(session.travel(stop, &mut input).unwrap().is_none());
        assert_eq!(session.location(), stop);
    }
}

#[test]
fn one_way_edges_are_not_reversed() {
    let rules = never_fight();
    let data = GameData::standard(&rules);
    let hero = Hero::new("Walker").with_location("Wizards Tower");
    let mut session = Session::new(hero, &data, rules, GameRng::new(1)).unwrap();
    let mut input = no_input();

    session.travel("Town", &mut input).unwrap();

    assert!(matches!(
        session.travel("Wizards Tower", &mut input),
        Err(SessionError::Travel(TravelError::NotAdjacent { .. }))
    ));
}

#[test]
fn dangling_edge_is_unknown_location() {
    let rules = never_fight();
    let data = GameData::standard(&rules);
    let hero = Hero::new("Walker").with_location("Ancient Ruins");
    let mut session = Session::new(hero, &data, rules, GameRng::new(1)).unwrap();

    let err = session.travel("Cave", &mut no_input()).unwrap_err();

    assert!(matches!(err, SessionError::Travel(TravelError::UnknownLocation(ref name)) if name == "Cave"));
    assert_eq!(session.location(), "Ancient Ruins");
}

#[test]
fn returning_to_town_never_rolls() {
    let rules = CombatRules {
        encounter_chance: 1.0,
        ..CombatRules::default()
    };
    let data = GameData::standard(&rules);
    let hero = Hero::new("Walker").with_location("Forest");
    let mut session = Session::new(hero, &data, rules, GameRng::new(1)).unwrap();

    assert!(session.travel("Town", &mut no_input()).unwrap().is_none());
}

#[test]
fn forest_spawns_goblins() {
    let rules = CombatRules {
        encounter_chance: 1.0,
        ..CombatRules::default()
    };
    let data = GameData::standard(&rules);
    let mut session = Session::new(Hero::new("Walker"), &data, rules, GameRng::new(4)).unwrap();
    let mut input = script(vec![PlayerAction::Attack; 30]);

    let result = session.travel("Forest", &mut input).unwrap().expect("certain encounter");

    assert_eq!(result.enemy.stats.name, "Goblin");
    assert_eq!(result.outcome, EncounterOutcome::Victory);
    assert_eq!(session.hero().stats.exp, 30);
    assert_eq!(session.hero().gold, 120);
}
