// src/items/src/catalog.rs

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::{EffectKind, Item, ItemType};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("item `{0}` is registered twice")]
    Duplicate(String),
    #[error("item name must not be empty")]
    EmptyName,
}

/// Read-only registry of item definitions keyed by name.
///
/// Built once at startup and shared by reference; there is no way to add or
/// change an item after construction. Iteration follows registration order,
/// which is also the order the shop lists its stock in.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: Vec<Item>,
    index: HashMap<String, usize>,
}

impl ItemCatalog {
    /// Build a catalog, rejecting duplicate or empty names.
    pub fn new(items: impl IntoIterator<Item = Item>) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for item in items {
            if item.name.trim().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if catalog.index.contains_key(&item.name) {
                return Err(CatalogError::Duplicate(item.name));
            }
            catalog.index.insert(item.name.clone(), catalog.items.len());
            catalog.items.push(item);
        }
        debug!(items = catalog.items.len(), "item catalog built");
        Ok(catalog)
    }

    /// The stock item set sold in town.
    pub fn standard() -> Self {
        let items = vec![
            Item::consumable("Health Potion", "Restores 50 HP", 25, EffectKind::HealHp, 50),
            Item::consumable("Mana Potion", "Restores 30 MP", 30, EffectKind::HealMp, 30),
            Item::weapon("Iron Sword", "Basic weapon +5 attack", 100, 5),
            Item::armor("Steel Armor", "Basic armor +5 defense", 120, 5),
            Item::consumable("Fire Scroll", "Deals 40 damage to enemy", 80, EffectKind::Damage, 40),
        ];
        let mut catalog = Self::default();
        for item in items {
            catalog.index.insert(item.name.clone(), catalog.items.len());
            catalog.items.push(item);
        }
        catalog
    }

    pub fn find(&self, name: &str) -> Option<&Item> {
        self.index.get(name).map(|&i| &self.items[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Items of one type, in registration order.
    pub fn of_type(&self, item_type: ItemType) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |item| item.item_type == item_type)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
