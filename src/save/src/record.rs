// src/save/src/record.rs

use bincode::{Decode, Encode};
use combat::Stats;
use error::GameError;
use hero::{Bag, Hero, Inventory};
use items::ItemCatalog;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Names of the worn items. Bonuses are not stored: they are already part of
/// the saved attack and defense.
#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub weapon: Option<String>,
    pub armor: Option<String>,
}

/// Persisted player state.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub max_hp: u32,
    pub hp: u32,
    pub max_mp: u32,
    pub mp: u32,
    pub attack: u32,
    pub defense: u32,
    pub level: u32,
    pub exp: u32,
    pub gold: u32,
    pub location: String,
    /// `(item, count)` in ledger order. Signed so that hand-edited files with
    /// a zero or negative count still parse; such entries are dropped.
    #[serde(default)]
    pub inventory: Vec<(String, i64)>,
    #[serde(default)]
    pub equipment: EquipmentRecord,
}

impl PlayerRecord {
    pub fn from_hero(hero: &Hero) -> Self {
        let stats = &hero.stats;
        Self {
            name: stats.name.clone(),
            max_hp: stats.max_hp,
            hp: stats.hp,
            max_mp: stats.max_mp,
            mp: stats.mp,
            attack: stats.attack,
            defense: stats.defense,
            level: stats.level,
            exp: stats.exp,
            gold: hero.gold,
            location: hero.location.clone(),
            inventory: hero
                .bag
                .inventory
                .to_pairs()
                .into_iter()
                .map(|(name, count)| (name, i64::from(count)))
                .collect(),
            equipment: EquipmentRecord {
                weapon: hero.bag.equipment.weapon().map(str::to_string),
                armor: hero.bag.equipment.armor().map(str::to_string),
            },
        }
    }

    /// Rebuild a hero, resolving equipment through `catalog`.
    ///
    /// Unknown equipment leaves the slot empty. Current hp/mp above their
    /// maximum are clamped.
    pub fn into_hero(self, catalog: &ItemCatalog) -> Result<Hero, GameError> {
        if self.name.trim().is_empty() {
            return Err(GameError::InvalidHeroData("empty name".into()));
        }
        if self.max_hp == 0 {
            return Err(GameError::InvalidHeroData("max_hp is 0".into()));
        }
        if self.level == 0 {
            return Err(GameError::InvalidHeroData("level is 0".into()));
        }
        if self.hp > self.max_hp || self.mp > self.max_mp {
            warn!(name = %self.name, hp = self.hp, mp = self.mp, "saved hp/mp above maximum, clamping");
        }

        let mut stats = Stats::new(self.name, self.max_hp, self.max_mp, self.attack, self.defense)
            .with_level(self.level);
        stats.hp = self.hp.min(self.max_hp);
        stats.mp = self.mp.min(self.max_mp);
        stats.exp = self.exp;

        let mut hero = Hero {
            stats,
            gold: self.gold,
            location: self.location,
            bag: Bag {
                inventory: Inventory::from_pairs(self.inventory),
                ..Bag::default()
            },
        };
        hero.restore_equipment(
            self.equipment.weapon.as_deref(),
            self.equipment.armor.as_deref(),
            catalog,
        );
        Ok(hero)
    }
}
