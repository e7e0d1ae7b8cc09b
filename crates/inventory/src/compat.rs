//! Sentinel-compatible facade over [`InventoryStore`].
//!
//! The original store signaled absence and over-removal with a `-1` return
//! instead of a distinct error channel. [`CompatStore`] reproduces that
//! contract call-for-call for hosts that still check the sentinel, while the
//! underlying store keeps the `Option`/`Result` surface.
//!
//! Two deliberate divergences from the original, both return-compatible:
//! `get_inventory` hands out a read-only view rather than the live mutable
//! sequence, and a rejected over-removal leaves the record unchanged rather
//! than mutating it negative before returning `-1`.

use crate::item::Item;
use crate::store::InventoryStore;

/// Reserved return signaling absence or a rejected removal.
pub const NOT_FOUND: i64 = -1;

/// Legacy store surface. Wraps an [`InventoryStore`] by value; `into_inner`
/// recovers it.
#[derive(Debug, Clone, Default)]
pub struct CompatStore {
    inner: InventoryStore,
}

impl CompatStore {
    /// Wrap a store, seeded or otherwise.
    pub fn new(inner: InventoryStore) -> Self {
        Self { inner }
    }

    /// Unwrap back into the idiomatic store.
    pub fn into_inner(self) -> InventoryStore {
        self.inner
    }

    pub fn get_name(&self) -> &str {
        self.inner.name()
    }

    pub fn get_inventory(&self) -> &[Item] {
        self.inner.items()
    }

    pub fn get_expensive_items(&self, max_price: i64) -> Vec<Item> {
        self.inner.expensive_items(max_price)
    }

    pub fn get_store_items(&self) -> Vec<String> {
        self.inner.item_names()
    }

    pub fn is_item_in_store(&self, item_name: &str) -> bool {
        self.inner.contains_item(item_name)
    }

    /// Price of the item, or [`NOT_FOUND`] if it is not in the store.
    pub fn get_item_price(&self, item_name: &str) -> i64 {
        if self.is_item_in_store(item_name) {
            self.inner.item_price(item_name).unwrap_or(NOT_FOUND)
        } else {
            NOT_FOUND
        }
    }

    /// Quantity of the item, or [`NOT_FOUND`] if it is not in the store.
    pub fn get_item_quantity(&self, item_name: &str) -> i64 {
        if self.is_item_in_store(item_name) {
            self.inner.item_quantity(item_name).unwrap_or(NOT_FOUND)
        } else {
            NOT_FOUND
        }
    }

    /// Add units of an item, appending a new record if the name is absent.
    /// Returns the resulting quantity held under that name.
    pub fn add_item_quantity(&mut self, item_name: &str, price: i64, quantity: i64) -> i64 {
        self.inner.add_item_quantity(item_name, price, quantity)
    }

    /// Remove units of an item. Returns the new quantity, or [`NOT_FOUND`]
    /// if the item is absent or holds fewer units than requested.
    pub fn remove_item_quantity(&mut self, item_name: &str, quantity: i64) -> i64 {
        self.inner
            .remove_item_quantity(item_name, quantity)
            .unwrap_or(NOT_FOUND)
    }

    pub fn get_total_value(&self) -> i64 {
        self.inner.total_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> CompatStore {
        CompatStore::default()
    }

    #[test]
    fn get_name_returns_the_fixed_store_name() {
        assert_eq!(seeded().get_name(), "This Object Store");
    }

    #[test]
    fn get_store_items_matches_the_seed_order_exactly() {
        assert_eq!(
            seeded().get_store_items(),
            vec![
                "Bike", "TV", "Album", "Book", "Phone", "Computer", "Keyboard", "Mouse",
                "Speaker", "Monitor", "Printer", "Scanner",
            ]
        );
    }

    #[test]
    fn get_expensive_items_at_150_returns_the_four_seed_matches() {
        let store = seeded();
        let expensive = store.get_expensive_items(150);
        let names: Vec<&str> = expensive.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["TV", "Computer", "Monitor", "Printer"]);
    }

    #[test]
    fn lookups_on_absent_names_return_the_sentinel() {
        let store = seeded();
        assert_eq!(store.get_item_price("Drone"), NOT_FOUND);
        assert_eq!(store.get_item_quantity("Drone"), NOT_FOUND);
    }

    #[test]
    fn new_items_report_their_price_and_quantity() {
        let mut store = seeded();
        assert_eq!(store.add_item_quantity("Drone", 450, 3), 3);
        assert!(store.is_item_in_store("Drone"));
        assert_eq!(store.get_item_price("Drone"), 450);
        assert_eq!(store.get_item_quantity("Drone"), 3);
    }

    #[test]
    fn existing_items_accumulate_quantity_and_keep_their_price() {
        let mut store = seeded();
        assert_eq!(store.add_item_quantity("Album", 9999, 50), 200);
        assert_eq!(store.get_item_price("Album"), 10);
    }

    #[test]
    fn remove_item_quantity_returns_the_sentinel_for_absent_names() {
        let mut store = seeded();
        assert_eq!(store.remove_item_quantity("Drone", 1), NOT_FOUND);
    }

    #[test]
    fn remove_item_quantity_returns_the_sentinel_for_over_removal() {
        let mut store = seeded();
        assert_eq!(store.remove_item_quantity("Bike", 6), NOT_FOUND);
        // Divergence from the original: the record is not left negative.
        assert_eq!(store.get_item_quantity("Bike"), 5);
    }

    #[test]
    fn remove_item_quantity_returns_the_new_quantity_on_success() {
        let mut store = seeded();
        assert_eq!(store.remove_item_quantity("Bike", 3), 2);
        assert_eq!(store.get_item_quantity("Bike"), 2);
    }

    #[test]
    fn get_total_value_on_the_seed_inventory_is_31373() {
        assert_eq!(seeded().get_total_value(), 31373);
    }

    #[test]
    fn into_inner_recovers_the_wrapped_store() {
        let mut store = seeded();
        store.add_item_quantity("Drone", 450, 3);
        let inner = store.into_inner();
        assert_eq!(inner.item_quantity("Drone"), Some(3));
    }
}
