//! The in-memory inventory store
//!
//! Holds the ordered list of records for the lifetime of the process. The
//! list is read once from its backend and rewritten in full on every save.
//!
//! File format: a header line naming the columns (in any order) followed by
//! one comma-separated line per record. Values are never quoted, so text
//! fields cannot contain commas. The writer always uses the canonical column
//! order `Country,Code,Product,Cost,Quantity`.

use std::collections::HashMap;

use csv::{ReaderBuilder, StringRecord, Trim};

use super::backend::InventoryBackend;
use crate::error::{StockError, StockResult};
use crate::models::{Field, FieldValue, Record};

/// Outcome of loading the inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Records were read
    Loaded(usize),
    /// The source exists but has no data lines
    Empty,
    /// There is no source yet
    SourceMissing,
    /// The source could not be read; the store starts empty
    Unreadable(String),
}

impl LoadStatus {
    /// Message for the user when the store starts out empty
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::Loaded(_) => None,
            Self::Empty => Some("No records found in inventory file.".to_string()),
            Self::SourceMissing => Some("Inventory file not found.".to_string()),
            Self::Unreadable(reason) => Some(format!("Inventory file could not be read: {}", reason)),
        }
    }
}

/// One line of a stock valuation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuationLine {
    pub record: Record,
    /// `cost * quantity`
    pub value: i64,
}

/// Stock value per record, highest first, plus the grand total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Valuation {
    pub lines: Vec<ValuationLine>,
    pub grand_total: i64,
}

/// Ordered, mutable collection of records with its persistence backend
pub struct InventoryStore {
    backend: Box<dyn InventoryBackend>,
    records: Vec<Record>,
    loaded: bool,
    /// Set when the last load could not read an existing source
    source_unread: bool,
}

impl InventoryStore {
    /// Create an empty, not yet loaded store
    pub fn new(backend: impl InventoryBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            records: Vec::new(),
            loaded: false,
            source_unread: false,
        }
    }

    /// Create a store already holding records
    pub fn with_records(backend: impl InventoryBackend + 'static, records: Vec<Record>) -> Self {
        Self {
            backend: Box::new(backend),
            records,
            loaded: true,
            source_unread: false,
        }
    }

    /// Load records from the backend, replacing anything held in memory
    ///
    /// A missing or unreadable source leaves the store empty and is reported
    /// through the returned status; an unreadable source is then never
    /// overwritten by [`InventoryStore::save`]. A source that is present but
    /// malformed or not UTF-8 is an error, and the store is left untouched.
    pub fn load(&mut self) -> StockResult<LoadStatus> {
        let status = match self.backend.read() {
            Err(e @ StockError::Encoding(_)) => return Err(e),
            Ok(Some(text)) => {
                self.records = parse_inventory(&text)?;
                if self.records.is_empty() {
                    LoadStatus::Empty
                } else {
                    LoadStatus::Loaded(self.records.len())
                }
            }
            Ok(None) => {
                self.records.clear();
                LoadStatus::SourceMissing
            }
            Err(e) => {
                self.records.clear();
                LoadStatus::Unreadable(e.to_string())
            }
        };

        self.source_unread = matches!(status, LoadStatus::Unreadable(_));
        self.loaded = true;
        Ok(status)
    }

    /// Rewrite the whole inventory to the backend
    ///
    /// Refused when the store was never loaded, or when the last load could
    /// not read an existing source.
    pub fn save(&self) -> StockResult<()> {
        if !self.loaded {
            return Err(StockError::Save(format!(
                "{} was not loaded, refusing to overwrite it",
                self.backend.describe()
            )));
        }
        if self.source_unread {
            return Err(StockError::Save(format!(
                "{} could not be read, refusing to overwrite it",
                self.backend.describe()
            )));
        }

        self.backend
            .write(&serialize_inventory(&self.records))
            .map_err(|e| match e {
                StockError::Save(_) => e,
                other => StockError::Save(other.to_string()),
            })
    }

    /// Whether [`InventoryStore::load`] has run
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The persistence backend
    pub fn backend(&self) -> &dyn InventoryBackend {
        self.backend.as_ref()
    }

    /// All records in current order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add a record to the end; does not persist
    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Stable sort by product name
    pub fn sort_by_product(&mut self) {
        self.records.sort_by(|a, b| a.product.cmp(&b.product));
    }

    /// First record whose code matches exactly
    pub fn find_first_by_code(&self, code: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.code == code)
    }

    /// Position of the earliest record with the lowest quantity
    pub fn min_quantity_index(&self) -> StockResult<usize> {
        self.extremal_index(|candidate, best| candidate < best)
    }

    /// Position of the earliest record with the highest quantity
    pub fn max_quantity_index(&self) -> StockResult<usize> {
        self.extremal_index(|candidate, best| candidate > best)
    }

    /// Record with the lowest quantity
    pub fn min_by_quantity(&self) -> StockResult<&Record> {
        let index = self.min_quantity_index()?;
        Ok(&self.records[index])
    }

    /// Record with the highest quantity
    pub fn max_by_quantity(&self) -> StockResult<&Record> {
        let index = self.max_quantity_index()?;
        Ok(&self.records[index])
    }

    /// Add to the quantity of the record at `index`; does not persist
    pub fn add_quantity(&mut self, index: usize, delta: i64) -> StockResult<&Record> {
        let record = self
            .records
            .get_mut(index)
            .ok_or_else(|| StockError::Validation(format!("No record at position {}", index)))?;
        record.add_quantity(delta)?;
        Ok(record)
    }

    /// Stock value of every record, highest first, and their sum
    ///
    /// Records with equal value keep their current relative order.
    pub fn total_value(&self) -> StockResult<Valuation> {
        let mut lines = Vec::with_capacity(self.records.len());
        let mut grand_total: i64 = 0;

        for record in &self.records {
            let value = record.value()?;
            grand_total = grand_total
                .checked_add(value)
                .ok_or_else(|| StockError::Validation("Total stock value overflows".into()))?;
            lines.push(ValuationLine {
                record: record.clone(),
                value,
            });
        }

        lines.sort_by(|a, b| b.value.cmp(&a.value));

        Ok(Valuation { lines, grand_total })
    }

    fn extremal_index(&self, prefer: fn(i64, i64) -> bool) -> StockResult<usize> {
        let mut best: Option<usize> = None;

        for (index, record) in self.records.iter().enumerate() {
            match best {
                Some(current) if !prefer(record.quantity, self.records[current].quantity) => {}
                _ => best = Some(index),
            }
        }

        best.ok_or(StockError::EmptyInventory)
    }
}

/// Column positions of the canonical fields in a source file
#[derive(Debug, Clone, Default)]
struct HeaderMap {
    positions: HashMap<Field, usize>,
}

impl HeaderMap {
    /// Unknown column names are ignored; a repeated name keeps its last position
    fn from_headers(headers: &StringRecord) -> Self {
        let positions = headers
            .iter()
            .enumerate()
            .filter_map(|(index, name)| Field::parse(name).map(|field| (field, index)))
            .collect();
        Self { positions }
    }

    fn project(&self, row: &StringRecord) -> StockResult<Record> {
        let fields: HashMap<Field, FieldValue> = Field::ALL
            .iter()
            .filter_map(|field| {
                let value = row.get(*self.positions.get(field)?)?;
                Some((*field, FieldValue::from(value)))
            })
            .collect();

        Record::from_fields(&fields)
    }
}

/// Parse inventory text into records
pub fn parse_inventory(text: &str) -> StockResult<Vec<Record>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .quoting(false)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(text.as_bytes());

    let columns = HeaderMap::from_headers(reader.headers()?);

    let mut records = Vec::new();
    for row in reader.records() {
        records.push(columns.project(&row?)?);
    }

    Ok(records)
}

/// Serialize records in canonical column order, without a trailing newline
pub fn serialize_inventory(records: &[Record]) -> String {
    let header = Field::ALL.map(|field| field.label()).join(",");

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(header);

    for record in records {
        let values: Vec<String> = record
            .ordered_fields()
            .iter()
            .map(|(_, value)| value.to_string())
            .collect();
        lines.push(values.join(","));
    }

    lines.join("\n")
}
