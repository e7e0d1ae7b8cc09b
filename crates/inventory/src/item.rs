use serde::{Deserialize, Serialize};

/// A single inventory record.
///
/// The `name` acts as the lookup key within the store. Uniqueness is a
/// convention, not a hard constraint; every store operation keys on the
/// first match in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: i64,
    pub quantity: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, price: i64, quantity: i64) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Value held in this record (`price * quantity`).
    pub fn value(&self) -> i64 {
        self.price * self.quantity
    }
}

/// The 12 seed rows every store starts with. Order is significant: queries
/// preserve insertion order and tests assert against it.
pub fn seed_inventory() -> Vec<Item> {
    vec![
        Item::new("Bike", 100, 5),
        Item::new("TV", 200, 8),
        Item::new("Album", 10, 150),
        Item::new("Book", 5, 72),
        Item::new("Phone", 105, 58),
        Item::new("Computer", 1000, 12),
        Item::new("Keyboard", 25, 67),
        Item::new("Mouse", 35, 93),
        Item::new("Speaker", 145, 8),
        Item::new("Monitor", 175, 13),
        Item::new("Printer", 165, 4),
        Item::new("Scanner", 149, 2),
    ]
}
