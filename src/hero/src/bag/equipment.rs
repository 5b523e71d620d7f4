// src/hero/src/bag/equipment.rs

use bincode::{Decode, Encode};
use items::EquipSlot;
use serde::{Deserialize, Serialize};

/// An occupied slot: which catalog item, and the bonus it applied when it
/// was put on. Unequipping reverts exactly `bonus`.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct Equipped {
    pub name: String,
    pub bonus: u32,
}

/// Weapon and armor slots.
///
/// Slot contents are only names plus the applied bonus; the item definition
/// itself stays in the catalog. Stat bookkeeping happens in
/// [`Hero::equip`](crate::Hero::equip) / [`Hero::unequip`](crate::Hero::unequip).
#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct Equipment {
    weapon: Option<Equipped>,
    armor: Option<Equipped>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipSlot) -> Option<&Equipped> {
        match slot {
            EquipSlot::Weapon => self.weapon.as_ref(),
            EquipSlot::Armor => self.armor.as_ref(),
        }
    }

    /// Put `equipped` in `slot`, handing back whatever was there.
    pub fn set(&mut self, slot: EquipSlot, equipped: Equipped) -> Option<Equipped> {
        self.slot_mut(slot).replace(equipped)
    }

    pub fn take(&mut self, slot: EquipSlot) -> Option<Equipped> {
        self.slot_mut(slot).take()
    }

    pub fn weapon(&self) -> Option<&str> {
        self.weapon.as_ref().map(|e| e.name.as_str())
    }

    pub fn armor(&self) -> Option<&str> {
        self.armor.as_ref().map(|e| e.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.weapon.is_none() && self.armor.is_none()
    }

    fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<Equipped> {
        match slot {
            EquipSlot::Weapon => &mut self.weapon,
            EquipSlot::Armor => &mut self.armor,
        }
    }
}
