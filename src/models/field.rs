//! Record fields and their canonical order
//!
//! Every persisted file and every rendered listing uses the same column order,
//! regardless of the order in which a source file names its columns.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One named column of an inventory record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Country,
    Code,
    Product,
    Cost,
    Quantity,
}

impl Field {
    /// All fields in canonical order
    pub const ALL: [Field; 5] = [
        Field::Country,
        Field::Code,
        Field::Product,
        Field::Cost,
        Field::Quantity,
    ];

    /// Header label as written to the inventory file
    pub fn label(&self) -> &'static str {
        match self {
            Self::Country => "Country",
            Self::Code => "Code",
            Self::Product => "Product",
            Self::Cost => "Cost",
            Self::Quantity => "Quantity",
        }
    }

    /// Parse a header label (exact, case-sensitive)
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.label() == label)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A field value as supplied to or produced by a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
}

impl FieldValue {
    /// Interpret the value as an integer for the given field
    pub(crate) fn to_integer(&self, field: Field) -> Result<i64, crate::error::StockError> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Text(text) => {
                text.trim()
                    .parse::<i64>()
                    .map_err(|_| crate::error::StockError::Conversion {
                        field,
                        value: text.clone(),
                    })
            }
        }
    }

    /// Interpret the value as text
    pub(crate) fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Integer(n) => n.to_string(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::Integer(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}
