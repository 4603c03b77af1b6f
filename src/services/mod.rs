//! Service layer for Stockroom
//!
//! The service layer provides the inventory operations on top of the storage
//! layer, handling validation, persistence and auditing.

pub mod inventory;

pub use inventory::{InventoryService, RestockOutcome};
