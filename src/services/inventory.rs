//! Inventory service
//!
//! Provides the operations the menu and command line invoke: adding records,
//! listing, search by code, extremal stock queries, restocking and valuation.
//! Every mutation is persisted immediately and, when a logger is attached,
//! audited.

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{StockError, StockResult};
use crate::models::{Record, DEFAULT_SKU_PREFIX};
use crate::storage::{InventoryStore, Valuation};

/// Service for inventory operations
pub struct InventoryService<'a> {
    store: &'a mut InventoryStore,
    audit: Option<&'a AuditLogger>,
    sku_prefix: String,
}

/// Result of restocking the lowest-stock record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestockOutcome {
    /// The record after restocking
    pub record: Record,
    /// Quantity before restocking
    pub previous_quantity: i64,
}

impl<'a> InventoryService<'a> {
    /// Create a new inventory service
    pub fn new(store: &'a mut InventoryStore) -> Self {
        Self {
            store,
            audit: None,
            sku_prefix: DEFAULT_SKU_PREFIX.to_string(),
        }
    }

    /// Record additions and restocks in the given audit log
    pub fn with_audit(mut self, logger: &'a AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Require product codes to start with `prefix`, compared in uppercase
    pub fn with_sku_prefix(mut self, prefix: impl AsRef<str>) -> Self {
        self.sku_prefix = prefix.as_ref().trim().to_uppercase();
        self
    }

    /// Read-only access to the underlying store
    pub fn store(&self) -> &InventoryStore {
        &*self.store
    }

    /// Validate, append and persist a batch of new records
    ///
    /// Nothing is appended if any record is invalid. The inventory is saved
    /// once, after the whole batch.
    pub fn add_records(&mut self, records: Vec<Record>) -> StockResult<usize> {
        for record in &records {
            record
                .validate(&self.sku_prefix)
                .map_err(|e| StockError::Validation(e.to_string()))?;
        }

        let entries: Vec<AuditEntry> = records.iter().map(AuditEntry::create).collect();
        let count = records.len();

        for record in records {
            self.store.append(record);
        }
        self.store.save()?;

        if let Some(logger) = self.audit {
            logger.record(&entries)?;
        }

        Ok(count)
    }

    /// Sort by product name and return every record
    pub fn list_sorted(&mut self) -> &[Record] {
        self.store.sort_by_product();
        self.store.records()
    }

    /// First record with exactly this code
    pub fn find_by_code(&self, code: &str) -> Option<&Record> {
        self.store.find_first_by_code(code)
    }

    /// First record with exactly this code, or a not-found error
    pub fn get_by_code(&self, code: &str) -> StockResult<&Record> {
        self.find_by_code(code)
            .ok_or_else(|| StockError::record_not_found(code))
    }

    /// The record most in need of restocking
    pub fn lowest_stock(&self) -> StockResult<&Record> {
        self.store.min_by_quantity()
    }

    /// The record with the most stock, a candidate for a sale
    pub fn highest_stock(&self) -> StockResult<&Record> {
        self.store.max_by_quantity()
    }

    /// Add stock to the lowest-stock record and persist
    pub fn restock_lowest(&mut self, amount: i64) -> StockResult<RestockOutcome> {
        if amount < 0 {
            return Err(StockError::Validation(
                "Quantity must be a positive number".into(),
            ));
        }

        let index = self.store.min_quantity_index()?;
        let before = self.store.records()[index].clone();
        let after = self.store.add_quantity(index, amount)?.clone();

        self.store.save()?;

        if let Some(logger) = self.audit {
            logger.record(&[AuditEntry::update(&before, &after)])?;
        }

        Ok(RestockOutcome {
            record: after,
            previous_quantity: before.quantity,
        })
    }

    /// Stock value per record and in total
    pub fn valuation(&self) -> StockResult<Valuation> {
        self.store.total_value()
    }
}
