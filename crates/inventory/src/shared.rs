//! Thread-safe wrapper for concurrent hosts.
//!
//! [`InventoryStore`] itself has no concurrency control; in a multi-threaded
//! host the inventory is a shared mutable resource, so all access is
//! serialized through a single lock. Clones of a [`SharedInventoryStore`]
//! refer to the same underlying store.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use storefront_core::StoreResult;

use crate::item::Item;
use crate::store::InventoryStore;

/// A cloneable handle to one lock-guarded [`InventoryStore`].
///
/// Queries take the read lock, mutations the write lock. Operation semantics
/// are exactly those of the wrapped store.
#[derive(Debug, Clone, Default)]
pub struct SharedInventoryStore {
    inner: Arc<RwLock<InventoryStore>>,
}

impl SharedInventoryStore {
    /// Wrap a store, seeded or otherwise.
    pub fn new(store: InventoryStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Wrap the standard seeded store.
    pub fn seeded() -> Self {
        Self::new(InventoryStore::new())
    }

    pub fn name(&self) -> String {
        self.read().name().to_string()
    }

    /// Owned snapshot of the current inventory, in insertion order.
    pub fn items(&self) -> Vec<Item> {
        self.read().items().to_vec()
    }

    pub fn expensive_items(&self, max_price: i64) -> Vec<Item> {
        self.read().expensive_items(max_price)
    }

    pub fn item_names(&self) -> Vec<String> {
        self.read().item_names()
    }

    pub fn contains_item(&self, name: &str) -> bool {
        self.read().contains_item(name)
    }

    pub fn item_price(&self, name: &str) -> Option<i64> {
        self.read().item_price(name)
    }

    pub fn item_quantity(&self, name: &str) -> Option<i64> {
        self.read().item_quantity(name)
    }

    pub fn add_item_quantity(&self, name: &str, price: i64, quantity: i64) -> i64 {
        self.write().add_item_quantity(name, price, quantity)
    }

    pub fn remove_item_quantity(&self, name: &str, quantity: i64) -> StoreResult<i64> {
        self.write().remove_item_quantity(name, quantity)
    }

    pub fn total_value(&self) -> i64 {
        self.read().total_value()
    }

    /// Owned copy of the whole store state.
    pub fn snapshot(&self) -> InventoryStore {
        self.read().clone()
    }

    // Store operations leave the inventory consistent even when a holder
    // panics, so a poisoned lock can be recovered rather than propagated.
    fn read(&self) -> RwLockReadGuard<'_, InventoryStore> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, InventoryStore> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
