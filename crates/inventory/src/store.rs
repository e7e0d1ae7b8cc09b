use serde::{Deserialize, Serialize};
use tracing::debug;

use storefront_core::{StoreError, StoreResult};

use crate::item::{Item, seed_inventory};

/// Default display name for a seeded store.
pub const DEFAULT_STORE_NAME: &str = "This Object Store";

/// The store: one display name and one ordered, exclusively-owned inventory.
///
/// Every operation is a single synchronous pass over the sequence. The
/// inventory is never exposed mutably; [`InventoryStore::items`] hands out a
/// read-only view and all mutation goes through the named operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStore {
    name: String,
    inventory: Vec<Item>,
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore {
    /// Create a store seeded with the standard 12-row inventory.
    pub fn new() -> Self {
        Self::with_name(DEFAULT_STORE_NAME)
    }

    /// Create a seeded store with a custom display name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self::with_inventory(name, seed_inventory())
    }

    /// Create a store over an explicit inventory. Insertion order of `items`
    /// is preserved and becomes the query order.
    pub fn with_inventory(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            inventory: items,
        }
    }

    /// The store's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only view of the live inventory, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.inventory
    }

    /// Items priced at or above `max_price`, insertion order preserved.
    ///
    /// The bound is inclusive: an item priced exactly at `max_price` is
    /// returned.
    pub fn expensive_items(&self, max_price: i64) -> Vec<Item> {
        self.inventory
            .iter()
            .filter(|item| item.price >= max_price)
            .cloned()
            .collect()
    }

    /// Names of every item, in inventory order.
    pub fn item_names(&self) -> Vec<String> {
        self.inventory.iter().map(|item| item.name.clone()).collect()
    }

    /// Whether any record's name matches exactly (case-sensitive).
    pub fn contains_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|item| item.name == name)
    }

    /// Price of the first record matching `name`.
    pub fn item_price(&self, name: &str) -> Option<i64> {
        self.find(name).map(|item| item.price)
    }

    /// Quantity of the first record matching `name`.
    pub fn item_quantity(&self, name: &str) -> Option<i64> {
        self.find(name).map(|item| item.quantity)
    }

    /// Add `quantity` units of `name` to the store.
    ///
    /// If a record with that name exists its quantity is incremented and the
    /// `price` argument is ignored; otherwise a new record
    /// `{name, price, quantity}` is appended. Returns the resulting quantity
    /// held under `name`.
    pub fn add_item_quantity(&mut self, name: &str, price: i64, quantity: i64) -> i64 {
        let new_quantity = match self.find_mut(name) {
            Some(item) => {
                item.quantity += quantity;
                item.quantity
            }
            None => {
                self.inventory.push(Item::new(name, price, quantity));
                quantity
            }
        };
        debug!(item = name, delta = quantity, quantity = new_quantity, "item quantity added");
        new_quantity
    }

    /// Remove `quantity` units of `name` from the store.
    ///
    /// Fails with [`StoreError::NotFound`] if no record matches, and with
    /// [`StoreError::InsufficientQuantity`] if the decrement would take the
    /// record below zero; in both cases the inventory is left untouched.
    /// On success returns the record's new quantity. Records are never
    /// deleted, even at quantity zero.
    pub fn remove_item_quantity(&mut self, name: &str, quantity: i64) -> StoreResult<i64> {
        let item = self.find_mut(name).ok_or_else(StoreError::not_found)?;
        if quantity > item.quantity {
            return Err(StoreError::insufficient_quantity(item.quantity, quantity));
        }
        item.quantity -= quantity;
        let new_quantity = item.quantity;
        debug!(item = name, delta = quantity, quantity = new_quantity, "item quantity removed");
        Ok(new_quantity)
    }

    /// Total value of the inventory: the fold of `price * quantity` over all
    /// records, starting at 0.
    pub fn total_value(&self) -> i64 {
        self.inventory.iter().fold(0, |total, item| total + item.value())
    }

    fn find(&self, name: &str) -> Option<&Item> {
        self.inventory.iter().find(|item| item.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Item> {
        self.inventory.iter_mut().find(|item| item.name == name)
    }
}
