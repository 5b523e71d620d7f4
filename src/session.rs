//! One running game: the hero plus everything needed to move them around
//! the world and through fights.

use combat::{Bestiary, CombatRules, EffectOutcome, GameRng, LevelUp};
use error::GameError;
use hero::{EquipError, Hero, ItemUseError, PurchaseError};
use items::ItemCatalog;
use save::{PlayerRecord, SaveData};
use thiserror::Error;
use tracing::{info, warn};
use world::{EncounterGenerator, EncounterTable, TravelError, WorldError, WorldGraph};

use crate::input::ActionSource;
use crate::turn_system::{self, EncounterError, EncounterOutcome, EncounterResult};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("the game is over")]
    GameOver,
    #[error("the shop is only open in {hub}")]
    NotAtHub { hub: String },
    #[error("no enemy called `{0}`")]
    UnknownEnemy(String),
    #[error(transparent)]
    Travel(#[from] TravelError),
    #[error(transparent)]
    Equip(#[from] EquipError),
    #[error(transparent)]
    ItemUse(#[from] ItemUseError),
    #[error(transparent)]
    Purchase(#[from] PurchaseError),
    #[error(transparent)]
    Encounter(#[from] EncounterError),
    #[error(transparent)]
    World(#[from] WorldError),
    #[error(transparent)]
    Save(#[from] GameError),
}

/// Static reference data, built once and shared by every session.
#[derive(Debug, Clone)]
pub struct GameData {
    pub catalog: ItemCatalog,
    pub world: WorldGraph,
    pub encounters: EncounterTable,
    pub bestiary: Bestiary,
}

impl GameData {
    pub fn standard(rules: &CombatRules) -> Self {
        Self {
            catalog: ItemCatalog::standard(),
            world: WorldGraph::with_hub(&rules.safe_hub),
            encounters: EncounterTable::standard(),
            bestiary: Bestiary::standard(),
        }
    }
}

pub struct Session<'d> {
    hero: Hero,
    rng: GameRng,
    rules: CombatRules,
    data: &'d GameData,
    generator: EncounterGenerator<'d>,
    game_over: bool,
}

impl<'d> Session<'d> {
    pub fn new(hero: Hero, data: &'d GameData, rules: CombatRules, rng: GameRng) -> Result<Self, SessionError> {
        let generator = EncounterGenerator::new(&data.world, &data.encounters, &data.bestiary)?;
        let mut session = Self {
            hero,
            rng,
            rules,
            data,
            generator,
            game_over: false,
        };
        if !data.world.contains(&session.hero.location) {
            let hub = data.world.safe_hub().to_string();
            warn!(location = %session.hero.location, %hub, "hero is somewhere unknown, moving to hub");
            session.hero.location = hub;
        }
        session.game_over = !session.hero.stats.is_alive();
        Ok(session)
    }

    /// Start from a saved game.
    pub fn from_save(save: SaveData, data: &'d GameData, rules: CombatRules, rng: GameRng) -> Result<Self, SessionError> {
        let hero = save.player.into_hero(&data.catalog)?;
        info!(name = %hero.stats.name, level = hero.level(), location = %hero.location, "session restored");
        Self::new(hero, data, rules, rng)
    }

    /// Persisted form of the current hero.
    pub fn snapshot(&self) -> SaveData {
        SaveData::new(PlayerRecord::from_hero(&self.hero))
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn data(&self) -> &GameData {
        self.data
    }

    pub fn rules(&self) -> &CombatRules {
        &self.rules
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn location(&self) -> &str {
        &self.hero.location
    }

    pub fn is_at_hub(&self) -> bool {
        self.data.world.is_safe(&self.hero.location)
    }

    /// Where the hero can go from here.
    pub fn destinations(&self) -> &[String] {
        self.data.world.neighbors(&self.hero.location)
    }

    fn ensure_alive(&self) -> Result<(), SessionError> {
        if self.game_over {
            return Err(SessionError::GameOver);
        }
        Ok(())
    }

    /// Move along one edge and roll for a fight on arrival.
    pub fn travel<A: ActionSource + ?Sized>(
        &mut self,
        destination: &str,
        input: &mut A,
    ) -> Result<Option<EncounterResult>, SessionError> {
        self.ensure_alive()?;
        let target = self.data.world.route(&self.hero.location, destination)?;
        info!(from = %self.hero.location, to = %target.name, "travel");
        self.hero.location = target.name.clone();

        let Some(template) = self
            .generator
            .roll(&self.hero.location, self.rules.encounter_chance, &mut self.rng)
        else {
            return Ok(None);
        };
        self.run_encounter(template, input).map(Some)
    }

    /// Fight a named enemy right here.
    pub fn start_encounter<A: ActionSource + ?Sized>(
        &mut self,
        enemy: &str,
        input: &mut A,
    ) -> Result<EncounterResult, SessionError> {
        self.ensure_alive()?;
        let template = self
            .data
            .bestiary
            .get(enemy)
            .ok_or_else(|| SessionError::UnknownEnemy(enemy.to_string()))?;
        self.run_encounter(template, input)
    }

    fn run_encounter<A: ActionSource + ?Sized>(
        &mut self,
        template: &combat::EnemyTemplate,
        input: &mut A,
    ) -> Result<EncounterResult, SessionError> {
        let result = turn_system::start_encounter(
            &mut self.hero,
            template,
            &self.data.catalog,
            &self.rules,
            &mut self.rng,
            input,
        )?;
        if result.outcome == EncounterOutcome::Defeat {
            warn!(name = %self.hero.stats.name, "hero defeated, game over");
            self.game_over = true;
        }
        Ok(result)
    }

    pub fn equip(&mut self, item: &str) -> Result<Option<String>, SessionError> {
        self.ensure_alive()?;
        Ok(self.hero.equip(item, &self.data.catalog)?)
    }

    pub fn unequip(&mut self, item: &str) -> Result<String, SessionError> {
        self.ensure_alive()?;
        Ok(self.hero.unequip_item(item)?)
    }

    /// Use a consumable outside combat. Items that need a target fail.
    pub fn use_consumable(&mut self, item: &str) -> Result<EffectOutcome, SessionError> {
        self.ensure_alive()?;
        Ok(self.hero.use_consumable(item, &self.data.catalog, None)?)
    }

    pub fn gain_exp(&mut self, amount: u32) -> Result<Vec<LevelUp>, SessionError> {
        self.ensure_alive()?;
        Ok(self.hero.gain_exp(amount))
    }

    /// Buy one item. Only possible at the safe hub.
    pub fn buy(&mut self, item: &str) -> Result<(), SessionError> {
        self.ensure_alive()?;
        if !self.is_at_hub() {
            return Err(SessionError::NotAtHub {
                hub: self.data.world.safe_hub().to_string(),
            });
        }
        Ok(self.hero.buy(item, &self.data.catalog)?)
    }
}
