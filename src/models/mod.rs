//! Core data models for Stockroom
//!
//! This module contains the inventory record and the field vocabulary shared
//! by the file format and the table listings.

pub mod field;
pub mod record;

pub use field::{Field, FieldValue};
pub use record::{Record, RecordValidationError, DEFAULT_SKU_PREFIX};
