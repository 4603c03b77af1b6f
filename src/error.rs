//! Custom error types for Stockroom
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Field;

/// The main error type for Stockroom operations
#[derive(Error, Debug)]
pub enum StockError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Delimited text parsing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// A cost or quantity value that is not an integer
    #[error("{field} must be an integer, got '{value}'")]
    Conversion { field: Field, value: String },

    /// A row that does not supply one of the canonical fields
    #[error("Missing field: {0}")]
    MissingField(Field),

    /// Validation errors for records and user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Extremal query or restock against a store with no records
    #[error("The inventory is empty")]
    EmptyInventory,

    /// Inventory source could not be read
    #[error("Load error: {0}")]
    Load(String),

    /// Inventory source is not valid UTF-8 text
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Inventory could not be written
    #[error("Save error: {0}")]
    Save(String),
}

impl StockError {
    /// Create a "not found" error for records looked up by code
    pub fn record_not_found(code: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Record",
            identifier: code.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for StockError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StockError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for StockError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for Stockroom operations
pub type StockResult<T> = Result<T, StockError>;
