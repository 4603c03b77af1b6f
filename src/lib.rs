//! Stockroom - Terminal-based inventory manager
//!
//! This library provides the core functionality for the Stockroom inventory
//! manager: a catalog of stock-keeping records kept in a flat comma-delimited
//! text file and operated through an interactive menu or one-shot commands.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The inventory record and its fields
//! - `display`: Aligned text tables and inventory listings
//! - `storage`: The in-memory inventory store and its persistence backends
//! - `services`: Search, restock, valuation and extremal queries
//! - `audit`: Audit logging of inventory changes
//! - `cli`: Command-line subcommands
//! - `menu`: The interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use stockroom::storage::{FileBackend, InventoryStore};
//!
//! let mut store = InventoryStore::new(FileBackend::new("inventory.txt"));
//! store.load()?;
//! let lowest = store.min_by_quantity()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod menu;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{StockError, StockResult};
