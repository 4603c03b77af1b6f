//! Inventory record model
//!
//! One stock-keeping item: where it comes from, its SKU code, its name,
//! its unit cost and how many are in stock.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::field::{Field, FieldValue};
use crate::error::{StockError, StockResult};

/// Default prefix every product code is expected to carry
pub const DEFAULT_SKU_PREFIX: &str = "SKU";

/// A single inventory item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Country of origin
    pub country: String,

    /// Product code (by convention starts with `SKU`)
    pub code: String,

    /// Product display name
    pub product: String,

    /// Unit cost
    pub cost: i64,

    /// Units in stock (signed)
    pub quantity: i64,
}

impl Record {
    /// Create a record from already-typed values
    pub fn new(
        country: impl Into<String>,
        code: impl Into<String>,
        product: impl Into<String>,
        cost: i64,
        quantity: i64,
    ) -> Self {
        Self {
            country: country.into(),
            code: code.into(),
            product: product.into(),
            cost,
            quantity,
        }
    }

    /// Build a record from a field mapping
    ///
    /// `Cost` and `Quantity` are converted to integers; text that does not
    /// parse as an integer yields [`StockError::Conversion`]. No other checks
    /// are made here, see [`Record::validate`].
    pub fn from_fields(fields: &HashMap<Field, FieldValue>) -> StockResult<Self> {
        let take = |field: Field| fields.get(&field).ok_or(StockError::MissingField(field));

        Ok(Self {
            country: take(Field::Country)?.clone().into_text(),
            code: take(Field::Code)?.clone().into_text(),
            product: take(Field::Product)?.clone().into_text(),
            cost: take(Field::Cost)?.to_integer(Field::Cost)?,
            quantity: take(Field::Quantity)?.to_integer(Field::Quantity)?,
        })
    }

    /// Unit cost
    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Units in stock
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Stock value (`cost * quantity`)
    pub fn value(&self) -> StockResult<i64> {
        self.cost.checked_mul(self.quantity).ok_or_else(|| {
            StockError::Validation(format!("Stock value of {} overflows", self.code))
        })
    }

    /// Add to the stock level without clamping the result
    pub fn add_quantity(&mut self, delta: i64) -> StockResult<i64> {
        self.quantity = self.quantity.checked_add(delta).ok_or_else(|| {
            StockError::Validation(format!("Quantity of {} overflows", self.code))
        })?;
        Ok(self.quantity)
    }

    /// Field values in canonical order
    pub fn ordered_fields(&self) -> [(Field, FieldValue); 5] {
        [
            (Field::Country, FieldValue::Text(self.country.clone())),
            (Field::Code, FieldValue::Text(self.code.clone())),
            (Field::Product, FieldValue::Text(self.product.clone())),
            (Field::Cost, FieldValue::Integer(self.cost)),
            (Field::Quantity, FieldValue::Integer(self.quantity)),
        ]
    }

    /// Validate user-entered values
    ///
    /// Applied when records are captured interactively or from the command
    /// line; records read from the inventory file are taken as they are.
    pub fn validate(&self, sku_prefix: &str) -> Result<(), RecordValidationError> {
        if self.country.trim().is_empty() {
            return Err(RecordValidationError::EmptyCountry);
        }

        if self.code.trim().is_empty() {
            return Err(RecordValidationError::EmptyCode);
        }

        if !self.code.starts_with(sku_prefix) {
            return Err(RecordValidationError::MissingPrefix(sku_prefix.to_string()));
        }

        if self.product.trim().is_empty() {
            return Err(RecordValidationError::EmptyProduct);
        }

        if self.cost == 0 {
            return Err(RecordValidationError::ZeroCost);
        }

        for (field, value) in [
            (Field::Country, &self.country),
            (Field::Code, &self.code),
            (Field::Product, &self.product),
        ] {
            if value.contains(',') {
                return Err(RecordValidationError::EmbeddedComma(field));
            }
            if value.contains(['\n', '\r']) {
                return Err(RecordValidationError::EmbeddedLineBreak(field));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .ordered_fields()
            .iter()
            .map(|(field, value)| format!("{}: {}", field.label(), value))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

/// Validation errors for records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    EmptyCountry,
    EmptyCode,
    MissingPrefix(String),
    EmptyProduct,
    ZeroCost,
    EmbeddedComma(Field),
    EmbeddedLineBreak(Field),
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCountry => write!(f, "Country cannot be empty"),
            Self::EmptyCode => write!(f, "SKU cannot be empty"),
            Self::MissingPrefix(prefix) => write!(f, "SKU must start with '{}'", prefix),
            Self::EmptyProduct => write!(f, "Product name cannot be empty"),
            Self::ZeroCost => write!(f, "Product cost cannot be nil"),
            Self::EmbeddedComma(field) => write!(f, "{} cannot contain a comma", field),
            Self::EmbeddedLineBreak(field) => write!(f, "{} cannot contain a line break", field),
        }
    }
}

impl std::error::Error for RecordValidationError {}
