//src/items/src/lib.rs
//! Item definitions and the process-wide item catalog.
//!
//! Items are plain reference data: once an [`Item`] is registered in an
//! [`ItemCatalog`] it never changes. Everything else in the game refers to
//! items by name and resolves them through the catalog.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

pub mod catalog;

pub use crate::catalog::{CatalogError, ItemCatalog};

/// What happens when a consumable is used.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, Serialize, Deserialize, Display, EnumIter,
)]
pub enum EffectKind {
    /// Restores `power` hit points to the user
    HealHp,
    /// Restores `power` mana points to the user
    HealMp,
    /// Deals `power` raw damage to the target
    Damage,
    /// Equipment and other items without a use effect
    None,
}

/// How an item participates in play.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, Serialize, Deserialize, Display, EnumIter,
)]
pub enum ItemType {
    Consumable,
    Weapon,
    Armor,
}

/// Equipment attachment points.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Encode,
    Decode,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EquipSlot {
    Weapon,
    Armor,
}

impl ItemType {
    /// The slot an item of this type occupies, if it can be equipped.
    pub fn slot(self) -> Option<EquipSlot> {
        match self {
            ItemType::Weapon => Some(EquipSlot::Weapon),
            ItemType::Armor => Some(EquipSlot::Armor),
            ItemType::Consumable => None,
        }
    }
}

/// An immutable item definition.
///
/// `power` is the magnitude of the use effect for consumables and the
/// additive stat bonus for weapons (attack) and armor (defense).
#[derive(PartialEq, Eq, Debug, Clone, Encode, Decode, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub price: u32,
    pub effect: EffectKind,
    pub item_type: ItemType,
    pub power: u32,
}

impl Item {
    /// A consumable with a use effect.
    pub fn consumable(name: &str, description: &str, price: u32, effect: EffectKind, power: u32) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            price,
            effect,
            item_type: ItemType::Consumable,
            power,
        }
    }

    /// A weapon adding `power` to attack while equipped.
    pub fn weapon(name: &str, description: &str, price: u32, power: u32) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            price,
            effect: EffectKind::None,
            item_type: ItemType::Weapon,
            power,
        }
    }

    /// Armor adding `power` to defense while equipped.
    pub fn armor(name: &str, description: &str, price: u32, power: u32) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            price,
            effect: EffectKind::None,
            item_type: ItemType::Armor,
            power,
        }
    }

    pub fn is_consumable(&self) -> bool {
        self.item_type == ItemType::Consumable
    }

    pub fn is_equippable(&self) -> bool {
        self.slot().is_some()
    }

    pub fn slot(&self) -> Option<EquipSlot> {
        self.item_type.slot()
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} ({} gold)", self.name, self.description, self.price)
    }
}
