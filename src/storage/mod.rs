//! Storage layer for Stockroom
//!
//! Provides the in-memory inventory store, the flat-file format it reads and
//! writes, and the backends it persists through.

pub mod backend;
pub mod file_io;
pub mod inventory;

pub use backend::{FileBackend, InventoryBackend, MemoryBackend};
pub use file_io::{read_text, write_text_atomic};
pub use inventory::{
    parse_inventory, serialize_inventory, InventoryStore, LoadStatus, Valuation, ValuationLine,
};
