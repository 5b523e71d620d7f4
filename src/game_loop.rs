//! Text menu loop driving a [`Session`] from a line-based console.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use combat::EffectOutcome;
use ::error::handle_error;
use items::EquipSlot;
use save::SaveSystem;
use tracing::{debug, error};

use crate::input::{ConsoleActions, ItemChoice};
use crate::session::{Session, SessionError};
use crate::turn_system::{EncounterOutcome, EncounterResult};

pub struct GameLoop<'d, R, W> {
    session: Session<'d>,
    console: ConsoleActions<R, W>,
    saves: SaveSystem,
    slot: usize,
    running: bool,
}

impl<'d, R: BufRead, W: Write> GameLoop<'d, R, W> {
    pub fn new(session: Session<'d>, console: ConsoleActions<R, W>, saves: SaveSystem, slot: usize) -> Self {
        Self {
            session,
            console,
            saves,
            slot,
            running: true,
        }
    }

    pub fn session(&self) -> &Session<'d> {
        &self.session
    }

    fn say(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.console.writer(), "{}", text.as_ref()).context("Failed to write to console")
    }

    /// Run until the player quits, dies, or input ends.
    pub fn run(&mut self) -> Result<()> {
        while self.running && !self.session.is_game_over() {
            self.show_status()?;
            let choice = match self.console.ask("> ") {
                Ok(choice) => choice,
                Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(e).context("Failed to read menu choice"),
            };
            match choice.as_str() {
                "1" => self.explore()?,
                "2" => self.inventory_menu()?,
                "3" => self.equipment_menu()?,
                "4" => self.shop()?,
                "5" => self.save()?,
                "6" => {
                    self.say("Thanks for playing!")?;
                    self.running = false;
                }
                other => {
                    debug!(choice = other, "invalid main menu choice");
                    self.say("Invalid choice.")?;
                }
            }
        }
        Ok(())
    }

    fn show_status(&mut self) -> Result<()> {
        let hero = self.session.hero();
        let description = self
            .session
            .data()
            .world
            .get(&hero.location)
            .map(|l| l.description.clone())
            .unwrap_or_default();
        let status = format!(
            "\nLocation: {}\n{}\nHP: {}/{} MP: {}/{} Gold: {}\n\nWhat would you like to do?\n\
             1. Explore\n2. View Inventory\n3. View Equipment\n4. Visit Shop\n5. Save Game\n6. Quit",
            hero.location,
            description,
            hero.stats.hp,
            hero.stats.max_hp,
            hero.stats.mp,
            hero.stats.max_mp,
            hero.gold
        );
        self.say(status)
    }

    /// List `options` and read a 1-based choice.
    fn select(&mut self, prompt: &str, options: &[String], cancel: &str) -> Result<Selection> {
        for (i, option) in options.iter().enumerate() {
            self.say(format!("{}. {option}", i + 1))?;
        }
        self.say(format!("0. {cancel}"))?;
        let answer = self.console.ask(prompt)?;
        match ItemChoice::parse(&answer) {
            ItemChoice::Slot(n) if n <= options.len() => Ok(Selection::Chosen(n - 1)),
            ItemChoice::Slot(_) => {
                self.say("Invalid choice.")?;
                Ok(Selection::Invalid)
            }
            ItemChoice::Cancel => Ok(Selection::Back),
            ItemChoice::Malformed(_) => {
                self.say("Invalid input.")?;
                Ok(Selection::Invalid)
            }
        }
    }

    /// Like [`select`](Self::select), folding bad input into a cancel.
    fn pick(&mut self, prompt: &str, options: &[String], cancel: &str) -> Result<Option<usize>> {
        Ok(match self.select(prompt, options, cancel)? {
            Selection::Chosen(i) => Some(i),
            Selection::Back | Selection::Invalid => None,
        })
    }

    fn explore(&mut self) -> Result<()> {
        let destinations = self.session.destinations().to_vec();
        self.say("\nWhere do you want to travel?")?;
        let Some(i) = self.pick("> ", &destinations, "Stay here")? else {
            return Ok(());
        };
        let destination = &destinations[i];
        self.say(format!("Traveling to {destination}..."))?;

        match self.session.travel(destination, &mut self.console) {
            Ok(Some(result)) => self.report(&result),
            Ok(None) if self.session.is_at_hub() => self.say("It's peaceful here. No enemies around."),
            Ok(None) => self.say("No enemies found. You explore peacefully."),
            Err(SessionError::Encounter(e)) => Err(e).context("Encounter aborted"),
            Err(e) => self.say(e.to_string()),
        }
    }

    fn report(&mut self, result: &EncounterResult) -> Result<()> {
        match result.outcome {
            EncounterOutcome::Defeat => {
                error!(name = %self.session.hero().stats.name, turns = result.turns, "game over");
                Ok(())
            }
            EncounterOutcome::Fled => Ok(()),
            EncounterOutcome::Victory => {
                let hero = &self.session.hero().stats;
                let line = format!("Level {} ({} EXP)", hero.level, hero.exp);
                self.say(line)
            }
        }
    }

    fn inventory_menu(&mut self) -> Result<()> {
        let entries: Vec<String> = self
            .session
            .hero()
            .bag
            .inventory
            .iter()
            .map(|slot| format!("{} x{}", slot.name, slot.count))
            .collect();
        if entries.is_empty() {
            return self.say("Inventory empty.");
        }
        self.say("Choose item to use:")?;
        let Some(i) = self.pick("> ", &entries, "Cancel")? else {
            return Ok(());
        };
        let Some(name) = self
            .session
            .hero()
            .bag
            .inventory
            .get_by_position(i + 1)
            .map(|slot| slot.name.clone())
        else {
            return Ok(());
        };
        match self.session.use_consumable(&name) {
            Ok(EffectOutcome::Healed(n)) => self.say(format!("You used {name} and restored {n} HP.")),
            Ok(EffectOutcome::ManaRestored(n)) => self.say(format!("You used {name} and restored {n} MP.")),
            Ok(_) => self.say(format!("You used {name}.")),
            Err(e) => self.say(e.to_string()),
        }
    }

    fn equipment_menu(&mut self) -> Result<()> {
        let (weapon, armor) = {
            let equipment = &self.session.hero().bag.equipment;
            (equipment.weapon().map(str::to_string), equipment.armor().map(str::to_string))
        };
        self.say(format!("Weapon: {}", weapon.as_deref().unwrap_or("None")))?;
        self.say(format!("Armor: {}", armor.as_deref().unwrap_or("None")))?;

        let catalog = &self.session.data().catalog;
        let equippable: Vec<String> = self
            .session
            .hero()
            .bag
            .inventory
            .iter()
            .filter(|slot| catalog.find(&slot.name).is_some_and(|item| item.is_equippable()))
            .map(|slot| slot.name.clone())
            .collect();

        let mut options: Vec<String> = equippable.iter().map(|n| format!("Equip {n}")).collect();
        let worn: Vec<(EquipSlot, String)> = [(EquipSlot::Weapon, weapon), (EquipSlot::Armor, armor)]
            .into_iter()
            .filter_map(|(slot, name)| name.map(|n| (slot, n)))
            .collect();
        options.extend(worn.iter().map(|(slot, n)| format!("Unequip {n} ({slot})")));
        if options.is_empty() {
            return self.say("Nothing to equip.");
        }

        let Some(i) = self.pick("> ", &options, "Back")? else {
            return Ok(());
        };
        let message = if let Some(name) = equippable.get(i) {
            match self.session.equip(name) {
                Ok(Some(old)) => format!("You equipped {name}, replacing {old}."),
                Ok(None) => format!("You equipped {name}."),
                Err(e) => e.to_string(),
            }
        } else {
            let (_, name) = &worn[i - equippable.len()];
            match self.session.unequip(name) {
                Ok(name) => format!("You unequipped {name}."),
                Err(e) => e.to_string(),
            }
        };
        self.say(message)
    }

    fn shop(&mut self) -> Result<()> {
        if !self.session.is_at_hub() {
            let hub = self.session.data().world.safe_hub().to_string();
            return self.say(format!("The shop is in {hub}."));
        }
        self.say("\nWelcome to the Shop!")?;
        loop {
            let stock: Vec<(String, u32)> = self
                .session
                .data()
                .catalog
                .iter()
                .map(|item| (item.name.clone(), item.price))
                .collect();
            let gold = self.session.hero().gold;
            self.say(format!("You have {gold} gold.\nItems available:"))?;
            let labels: Vec<String> = stock.iter().map(|(n, p)| format!("{n} - {p} gold")).collect();
            // Only an explicit 0 leaves; bad input asks again.
            let i = match self.select("Choose item number to buy: ", &labels, "Exit Shop")? {
                Selection::Chosen(i) => i,
                Selection::Back => return Ok(()),
                Selection::Invalid => continue,
            };
            let name = &stock[i].0;
            match self.session.buy(name) {
                Ok(()) => self.say(format!("You bought {name}!"))?,
                Err(e) => self.say(e.to_string())?,
            }
        }
    }

    fn save(&mut self) -> Result<()> {
        match self.saves.save_game(self.slot, &self.session.snapshot()) {
            Ok(()) => self.say("Game saved."),
            Err(e) => {
                error!(slot = self.slot, error = %e, "save failed");
                self.say(format!("Could not save: {}", handle_error(&e)))
            }
        }
    }
}

enum Selection {
    Chosen(usize),
    Back,
    Invalid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::GameData;
    use combat::{CombatRules, GameRng};
    use hero::Hero;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn play<'d>(
        data: &'d GameData,
        hero: Hero,
        rules: CombatRules,
        script: &str,
        saves: SaveSystem,
        slot: usize,
    ) -> (GameLoop<'d, Cursor<Vec<u8>>, Vec<u8>>, String) {
        let session = Session::new(hero, data, rules, GameRng::new(1)).unwrap();
        let console = ConsoleActions::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let mut game = GameLoop::new(session, console, saves, slot);
        game.run().unwrap();
        let shown = String::from_utf8(game.console.writer().clone()).unwrap();
        (game, shown)
    }

    #[test]
    fn shop_asks_again_after_bad_input() {
        let data = GameData::standard(&CombatRules::default());
        let dir = tempfile::tempdir().unwrap();
        let saves = SaveSystem::new(dir.path(), 3).unwrap();

        let (game, shown) = play(&data, Hero::new("Tester"), CombatRules::default(), "4\n9\nabc\n1\n0\n6\n", saves, 0);

        let hero = game.session().hero();
        assert_eq!(hero.bag.inventory.count("Health Potion"), 1);
        assert_eq!(hero.gold, 75);
        assert!(shown.contains("Invalid choice."));
        assert!(shown.contains("Invalid input."));
        assert!(shown.contains("You bought Health Potion!"));
    }

    #[test]
    fn failed_save_is_reported_and_play_continues() {
        let data = GameData::standard(&CombatRules::default());
        let dir = tempfile::tempdir().unwrap();
        let saves = SaveSystem::new(dir.path(), 3).unwrap();

        let (_, shown) = play(&data, Hero::new("Tester"), CombatRules::default(), "5\n6\n", saves, 7);

        assert!(shown.contains("Could not save: There is no save slot 7"));
        assert!(shown.contains("Thanks for playing!"));
    }

    #[test]
    fn defeat_is_announced_once_and_ends_the_loop() {
        let rules = CombatRules {
            encounter_chance: 1.0,
            ..CombatRules::default()
        };
        let data = GameData::standard(&rules);
        let dir = tempfile::tempdir().unwrap();
        let saves = SaveSystem::new(dir.path(), 3).unwrap();
        let mut hero = Hero::new("Tester");
        hero.stats.hp = 1;
        hero.stats.defense = 0;

        // Travel to Forest, then attack until the goblin wins.
        let (game, shown) = play(&data, hero, rules, "1\n1\n1\n1\n", saves, 0);

        assert!(game.session().is_game_over());
        assert_eq!(shown.matches("Game Over.").count(), 1);
        assert!(!shown.contains("Thanks for playing!"));
    }
}
