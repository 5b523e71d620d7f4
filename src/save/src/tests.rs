// src/save/src/tests.rs

use super::*;
use hero::Hero;
use items::{EquipSlot, ItemCatalog};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn seasoned_hero(catalog: &ItemCatalog) -> Hero {
    let mut hero = Hero::new("Archivist").with_location("Forest");
    hero.gain_exp(80);
    hero.gold = 345;
    hero.stats.hp = 42;
    hero.bag.inventory.add("Health Potion", 3);
    hero.bag.inventory.add("Iron Sword", 1);
    hero.bag.inventory.add("Fire Scroll", 1);
    hero.bag.inventory.add("Steel Armor", 1);
    hero.equip("Iron Sword", catalog).unwrap();
    hero.equip("Steel Armor", catalog).unwrap();
    hero
}

#[test]
fn json_save_and_load_reproduces_hero() {
    let catalog = ItemCatalog::standard();
    let dir = tempdir().unwrap();
    let saves = SaveSystem::new(dir.path(), 3).unwrap();
    let hero = seasoned_hero(&catalog);

    saves
        .save_game(1, &SaveData::new(PlayerRecord::from_hero(&hero)))
        .unwrap();
    let loaded = saves.load_game(1).unwrap().unwrap();
    let restored = loaded.player.into_hero(&catalog).unwrap();

    assert_eq!(restored, hero);
    assert_eq!(loaded.version, SAVE_VERSION);
    assert!(saves.has_save(1));
    assert!(!saves.has_save(0));
}

#[test]
fn binary_save_and_load_reproduces_hero() {
    let catalog = ItemCatalog::standard();
    let dir = tempdir().unwrap();
    let saves = SaveSystem::new(dir.path(), 2)
        .unwrap()
        .with_format(SaveFormat::Binary);
    let hero = seasoned_hero(&catalog);
    let data = SaveData::new(PlayerRecord::from_hero(&hero));

    saves.save_game(0, &data).unwrap();

    assert_eq!(saves.save_path(0).unwrap().extension().unwrap(), "sav");
    assert_eq!(saves.load_game(0).unwrap(), Some(data));
}

#[test]
fn json_layout_is_flat() {
    let catalog = ItemCatalog::standard();
    let hero = seasoned_hero(&catalog);
    let data = SaveData::new(PlayerRecord::from_hero(&hero));

    let value: serde_json::Value = serde_json::to_value(&data).unwrap();

    assert_eq!(value["name"], "Archivist");
    assert_eq!(value["location"], "Forest");
    assert_eq!(value["equipment"]["weapon"], "Iron Sword");
    assert_eq!(value["inventory"][0][0], "Health Potion");
    assert_eq!(value["inventory"][0][1], 3);
    assert_eq!(value["version"], SAVE_VERSION);
}

#[test]
fn missing_slot_loads_as_none() {
    let dir = tempdir().unwrap();
    let saves = SaveSystem::new(dir.path().join("nested"), 3).unwrap();

    assert!(saves.save_dir().exists());
    assert!(saves.load_game(2).unwrap().is_none());
}

#[test]
fn out_of_range_slot_is_rejected() {
    let dir = tempdir().unwrap();
    let saves = SaveSystem::new(dir.path(), 3).unwrap();
    let data = SaveData::new(PlayerRecord::from_hero(&Hero::new("X")));

    assert!(matches!(
        saves.save_game(3, &data),
        Err(GameError::InvalidSlot { slot: 3, max: 3 })
    ));
    assert!(matches!(saves.load_game(7), Err(GameError::InvalidSlot { .. })));
    assert!(saves.save_path(3).is_none());
    assert!(!saves.has_save(3));
}

#[test]
fn delete_clears_slot() {
    let dir = tempdir().unwrap();
    let saves = SaveSystem::new(dir.path(), 3).unwrap();
    let data = SaveData::new(PlayerRecord::from_hero(&Hero::new("X")));
    saves.save_game(0, &data).unwrap();

    saves.delete_save(0).unwrap();
    saves.delete_save(0).unwrap();

    assert!(!saves.has_save(0));
}

#[test]
fn truncated_file_is_corrupted() {
    let dir = tempdir().unwrap();
    let saves = SaveSystem::new(dir.path(), 1).unwrap();
    fs::write(saves.save_path(0).unwrap(), br#"{"name": "Half"#).unwrap();

    assert!(matches!(saves.load_game(0), Err(GameError::CorruptedSave)));
}

#[test]
fn hand_written_legacy_save_loads() {
    let catalog = ItemCatalog::standard();
    let dir = tempdir().unwrap();
    let saves = SaveSystem::new(dir.path(), 1).unwrap();
    let json = r#"{
        "name": "Old", "max_hp": 110, "hp": 150, "max_mp": 35, "mp": 35,
        "attack": 18, "defense": 7, "level": 2, "exp": 10, "gold": 55,
        "location": "Mountain",
        "inventory": [["Mana Potion", 2], ["Health Potion", 0], ["Fire Scroll", -1]],
        "equipment": {"weapon": "Excalibur", "armor": null}
    }"#;
    fs::write(saves.save_path(0).unwrap(), json).unwrap();

    let data = saves.load_game(0).unwrap().unwrap();
    assert_eq!(data.version, SAVE_VERSION);
    assert_eq!(data.saved_at, 0);

    let hero = data.player.into_hero(&catalog).unwrap();
    assert_eq!(hero.stats.hp, 110);
    assert_eq!(hero.stats.attack, 18);
    assert_eq!(hero.bag.inventory.to_pairs(), vec![("Mana Potion".to_string(), 2)]);
    assert!(hero.bag.equipment.get(EquipSlot::Weapon).is_none());
}

#[test]
fn impossible_hero_is_rejected() {
    let catalog = ItemCatalog::standard();
    let mut record = PlayerRecord::from_hero(&Hero::new("Ghost"));
    record.max_hp = 0;

    assert!(matches!(
        record.into_hero(&catalog),
        Err(GameError::InvalidHeroData(_))
    ));
}

#[test]
fn oversized_loaded_hero_can_still_level_up() {
    let catalog = ItemCatalog::standard();
    let mut record = PlayerRecord::from_hero(&Hero::new("Titan"));
    record.max_hp = u32::MAX - 5;
    record.hp = u32::MAX - 5;

    let mut hero = record.into_hero(&catalog).unwrap();
    let ups = hero.gain_exp(70);

    assert_eq!(ups.len(), 1);
    assert_eq!(hero.level(), 2);
    assert_eq!(hero.stats.max_hp, u32::MAX);
    assert_eq!(hero.stats.hp, u32::MAX);
}

#[test]
fn list_saves_skips_garbage_and_sorts_newest_first() {
    let dir = tempdir().unwrap();
    let saves = SaveSystem::new(dir.path(), 3).unwrap();
    let mut older = SaveData::new(PlayerRecord::from_hero(&Hero::new("Older")));
    older.saved_at = 100;
    let mut newer = SaveData::new(PlayerRecord::from_hero(&Hero::new("Newer")));
    newer.saved_at = 200;
    saves.save_game(0, &older).unwrap();
    saves.save_game(2, &newer).unwrap();
    fs::write(saves.save_path(1).unwrap(), b"not json").unwrap();

    let listed = saves.list_saves().unwrap();

    let names: Vec<_> = listed.iter().map(|s| (s.slot, s.name.as_str())).collect();
    assert_eq!(names, vec![(2, "Newer"), (0, "Older")]);
    assert_eq!(listed[0].location, "Town");
}
