// src/hero/src/core.rs

use bincode::{Decode, Encode};
use combat::{Combatant, EffectOutcome, LevelUp, Stats};
use items::{EquipSlot, ItemCatalog};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::bag::equipment::Equipped;
use crate::bag::{Bag, EquipError, ItemUseError, PurchaseError};

/// Starting values for a brand new character.
pub mod defaults {
    pub const MAX_HP: u32 = 100;
    pub const MAX_MP: u32 = 30;
    pub const ATTACK: u32 = 10;
    pub const DEFENSE: u32 = 5;
    pub const GOLD: u32 = 100;
    pub const LOCATION: &str = "Town";
}

/// The player character.
///
/// `stats.attack` and `stats.defense` are derived values: they already
/// include the bonus of whatever is equipped.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct Hero {
    pub stats: Stats,
    pub gold: u32,
    pub location: String,
    pub bag: Bag,
}

impl Hero {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            stats: Stats::new(
                name,
                defaults::MAX_HP,
                defaults::MAX_MP,
                defaults::ATTACK,
                defaults::DEFENSE,
            ),
            gold: defaults::GOLD,
            location: defaults::LOCATION.to_string(),
            bag: Bag::new(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn level(&self) -> u32 {
        self.stats.level
    }

    /// Add experience, applying any level-ups it pays for.
    pub fn gain_exp(&mut self, amount: u32) -> Vec<LevelUp> {
        combat::gain_exp(&mut self.stats, amount)
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /* ================== equipment ================== */

    /// Equip `name` from the inventory.
    ///
    /// An occupied slot is emptied first (its bonus reverted and the item
    /// returned to the inventory). Returns the name of the swapped-out item.
    pub fn equip(&mut self, name: &str, catalog: &ItemCatalog) -> Result<Option<String>, EquipError> {
        let item = catalog
            .find(name)
            .ok_or_else(|| EquipError::UnknownItem(name.to_string()))?;
        let slot = item
            .slot()
            .ok_or_else(|| EquipError::NotEquippable(name.to_string()))?;
        if !self.bag.inventory.has(name, 1) {
            return Err(EquipError::NotInInventory(name.to_string()));
        }

        let swapped = self.unequip(slot);

        let base = self.slot_stat(slot);
        let boosted = base.saturating_add(item.power);
        *self.slot_stat_mut(slot) = boosted;
        // Record what was actually added so unequip reverts exactly that.
        self.bag.equipment.set(
            slot,
            Equipped {
                name: item.name.clone(),
                bonus: boosted - base,
            },
        );
        self.bag.inventory.remove(name, 1);

        info!(hero = %self.stats.name, item = %item.name, %slot, "equipped");
        Ok(swapped)
    }

    /// Empty `slot`, reverting its bonus and returning the item to the
    /// inventory. An empty slot is a no-op and yields `None`.
    pub fn unequip(&mut self, slot: EquipSlot) -> Option<String> {
        let Some(equipped) = self.bag.equipment.take(slot) else {
            debug!(hero = %self.stats.name, %slot, "nothing to unequip");
            return None;
        };
        *self.slot_stat_mut(slot) = self.slot_stat(slot).saturating_sub(equipped.bonus);
        self.bag.inventory.add(&equipped.name, 1);
        info!(hero = %self.stats.name, item = %equipped.name, %slot, "unequipped");
        Some(equipped.name)
    }

    /// Unequip whichever slot currently holds `name`.
    pub fn unequip_item(&mut self, name: &str) -> Result<String, EquipError> {
        let slot = [EquipSlot::Weapon, EquipSlot::Armor]
            .into_iter()
            .find(|&slot| self.bag.equipment.get(slot).is_some_and(|e| e.name == name))
            .ok_or_else(|| EquipError::NotEquipped(name.to_string()))?;
        self.unequip(slot)
            .ok_or_else(|| EquipError::NotEquipped(name.to_string()))
    }

    /// Re-attach saved equipment without touching stats (saved attack and
    /// defense already contain the bonuses). Names the catalog does not know
    /// leave the slot empty and are returned.
    pub fn restore_equipment(
        &mut self,
        weapon: Option<&str>,
        armor: Option<&str>,
        catalog: &ItemCatalog,
    ) -> Vec<String> {
        let mut dropped = Vec::new();
        for (slot, name) in [(EquipSlot::Weapon, weapon), (EquipSlot::Armor, armor)] {
            self.bag.equipment.take(slot);
            let Some(name) = name else { continue };
            match catalog.find(name).filter(|item| item.slot() == Some(slot)) {
                Some(item) => {
                    self.bag.equipment.set(
                        slot,
                        Equipped {
                            name: item.name.clone(),
                            bonus: item.power,
                        },
                    );
                }
                None => {
                    warn!(item = name, %slot, "saved equipment not in catalog, slot left empty");
                    dropped.push(name.to_string());
                }
            }
        }
        dropped
    }

    fn slot_stat(&self, slot: EquipSlot) -> u32 {
        match slot {
            EquipSlot::Weapon => self.stats.attack,
            EquipSlot::Armor => self.stats.defense,
        }
    }

    fn slot_stat_mut(&mut self, slot: EquipSlot) -> &mut u32 {
        match slot {
            EquipSlot::Weapon => &mut self.stats.attack,
            EquipSlot::Armor => &mut self.stats.defense,
        }
    }

    /* ================== items ================== */

    /// Use one consumable from the inventory. Nothing is spent if the use
    /// fails.
    pub fn use_consumable(
        &mut self,
        name: &str,
        catalog: &ItemCatalog,
        target: Option<&mut Stats>,
    ) -> Result<EffectOutcome, ItemUseError> {
        let item = catalog
            .find(name)
            .ok_or_else(|| ItemUseError::UnknownItem(name.to_string()))?;
        if !self.bag.inventory.has(name, 1) {
            return Err(ItemUseError::NotInInventory(name.to_string()));
        }
        if !item.is_consumable() {
            return Err(ItemUseError::NotConsumable(name.to_string()));
        }

        let outcome = combat::use_on(item, &mut self.stats, target)?;
        self.bag.inventory.remove(name, 1);
        Ok(outcome)
    }

    /// Buy one unit of `name` for its catalog price.
    pub fn buy(&mut self, name: &str, catalog: &ItemCatalog) -> Result<(), PurchaseError> {
        let item = catalog
            .find(name)
            .ok_or_else(|| PurchaseError::UnknownItem(name.to_string()))?;
        if self.gold < item.price {
            return Err(PurchaseError::NotEnoughGold {
                price: item.price,
                gold: self.gold,
            });
        }
        self.gold -= item.price;
        self.bag.inventory.add(&item.name, 1);
        info!(hero = %self.stats.name, item = %item.name, price = item.price, gold = self.gold, "bought");
        Ok(())
    }
}

impl Combatant for Hero {
    fn stats(&self) -> &Stats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }
}
