//! Inventory domain module.
//!
//! This crate contains the business rules for the store inventory, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).
//!
//! The primary surface is [`InventoryStore`], which owns the ordered item
//! sequence and answers every query/mutation with `Option`/`Result`. Callers
//! that need the legacy sentinel contract (`-1` for absence/over-removal) use
//! [`CompatStore`]. Multi-threaded hosts wrap the store in
//! [`SharedInventoryStore`], which serializes all access through one lock.

pub mod compat;
pub mod item;
pub mod shared;
pub mod store;

pub use compat::CompatStore;
pub use item::{Item, seed_inventory};
pub use shared::SharedInventoryStore;
pub use store::InventoryStore;
