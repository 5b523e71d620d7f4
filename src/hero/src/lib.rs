// src/hero/src/lib.rs
//! The player character: stats, gold, location, inventory ledger and
//! equipment slots.

pub mod bag;
mod core;

pub use self::{
    bag::{
        Bag, EquipError, ItemUseError, PurchaseError,
        equipment::{Equipment, Equipped},
        inventory::{Inventory, InventorySlot},
    },
    core::{Hero, defaults},
};
