//! Persistence backends for the inventory store
//!
//! The store only ever reads the whole inventory text once and rewrites it in
//! full, so a backend is just a place to get and put one string.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use super::file_io::{read_text, write_text_atomic};
use crate::error::StockResult;

/// Where the inventory text lives
pub trait InventoryBackend {
    /// Read the full inventory text, or `None` when there is no source yet
    fn read(&self) -> StockResult<Option<String>>;

    /// Replace the full inventory text
    fn write(&self, contents: &str) -> StockResult<()>;

    /// Human-readable location, for messages
    fn describe(&self) -> String;
}

/// Inventory kept in a text file on disk
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InventoryBackend for FileBackend {
    fn read(&self) -> StockResult<Option<String>> {
        read_text(&self.path)
    }

    fn write(&self, contents: &str) -> StockResult<()> {
        write_text_atomic(&self.path, contents)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Inventory kept in process memory
#[derive(Debug, Default)]
pub struct MemoryBackend {
    contents: RefCell<Option<String>>,
}

impl MemoryBackend {
    /// A backend with no source, as if the file did not exist
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend pre-filled with inventory text
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: RefCell::new(Some(contents.into())),
        }
    }
}

impl InventoryBackend for MemoryBackend {
    fn read(&self) -> StockResult<Option<String>> {
        Ok(self.contents.borrow().clone())
    }

    fn write(&self, contents: &str) -> StockResult<()> {
        *self.contents.borrow_mut() = Some(contents.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory inventory".to_string()
    }
}
