// src/hero/src/bag/inventory.rs

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// One ledger line: an item name and how many are held (always > 0).
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct InventorySlot {
    pub name: String,
    pub count: u32,
}

/// Quantity-counted inventory keyed by item name.
///
/// Lines keep the order items were first added in, which is the order menus
/// number them. A line whose count reaches zero is removed immediately.
#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct Inventory {
    slots: Vec<InventorySlot>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from `(name, count)` pairs. Later duplicates overwrite earlier
    /// ones; non-positive counts are dropped.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let mut inventory = Self::new();
        for (name, count) in pairs {
            let name = name.into();
            let count = u32::try_from(count.max(0)).unwrap_or(u32::MAX);
            match inventory.position(&name) {
                Some(i) if count == 0 => {
                    inventory.slots.remove(i);
                }
                Some(i) => inventory.slots[i].count = count,
                None if count == 0 => {}
                None => inventory.slots.push(InventorySlot { name, count }),
            }
        }
        inventory
    }

    /// Ordered `(name, count)` pairs for persistence.
    pub fn to_pairs(&self) -> Vec<(String, u32)> {
        self.slots.iter().map(|s| (s.name.clone(), s.count)).collect()
    }

    pub fn add(&mut self, name: &str, qty: u32) {
        if qty == 0 {
            return;
        }
        match self.position(name) {
            Some(i) => self.slots[i].count = self.slots[i].count.saturating_add(qty),
            None => self.slots.push(InventorySlot {
                name: name.to_string(),
                count: qty,
            }),
        }
    }

    /// Take up to `qty` away. Removing more than is held deletes the line.
    pub fn remove(&mut self, name: &str, qty: u32) {
        if let Some(i) = self.position(name) {
            if self.slots[i].count <= qty {
                self.slots.remove(i);
            } else {
                self.slots[i].count -= qty;
            }
        }
    }

    pub fn has(&self, name: &str, qty: u32) -> bool {
        self.count(name) >= qty
    }

    pub fn count(&self, name: &str) -> u32 {
        self.position(name).map_or(0, |i| self.slots[i].count)
    }

    /// Line at a 1-based menu position.
    pub fn get_by_position(&self, position: usize) -> Option<&InventorySlot> {
        position.checked_sub(1).and_then(|i| self.slots.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventorySlot> {
        self.slots.iter()
    }

    /// Number of distinct item names held
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.name == name)
    }
}
