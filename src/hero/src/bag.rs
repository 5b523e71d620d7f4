// src/hero/src/bag.rs

use bincode::{Decode, Encode};
use combat::EffectError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod equipment;
pub mod inventory;

use equipment::Equipment;
use inventory::Inventory;

/// Everything the hero carries: the item ledger and the worn equipment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct Bag {
    pub inventory: Inventory,
    pub equipment: Equipment,
}

impl Bag {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EquipError {
    #[error("unknown item `{0}`")]
    UnknownItem(String),
    #[error("`{0}` is not in the inventory")]
    NotInInventory(String),
    #[error("`{0}` cannot be equipped")]
    NotEquippable(String),
    #[error("`{0}` is not equipped")]
    NotEquipped(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemUseError {
    #[error("unknown item `{0}`")]
    UnknownItem(String),
    #[error("`{0}` is not in the inventory")]
    NotInInventory(String),
    #[error("`{0}` cannot be used, try equipping it")]
    NotConsumable(String),
    #[error(transparent)]
    Effect(#[from] EffectError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("unknown item `{0}`")]
    UnknownItem(String),
    #[error("not enough gold: {price} needed, {gold} held")]
    NotEnoughGold { price: u32, gold: u32 },
}
