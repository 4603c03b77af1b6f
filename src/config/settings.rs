//! User settings for Stockroom
//!
//! Manages user preferences: where the inventory lives, the product code
//! prefix, table layouts and whether changes are audited.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::paths::StockPaths;
use crate::display::table::TableOptions;
use crate::error::StockError;
use crate::models::DEFAULT_SKU_PREFIX;

/// Spacing and padding for one kind of table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStyle {
    /// Spaces after each column
    pub column_spacing: usize,
    /// Spaces on both sides of each cell
    pub padding: usize,
    /// Draw `|` column separators
    #[serde(default)]
    pub vertical_lines: bool,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            column_spacing: 5,
            padding: 0,
            vertical_lines: false,
        }
    }
}

impl TableStyle {
    /// Table options with rules above, below and under the header
    pub fn ruled(&self) -> TableOptions {
        let options = TableOptions::new()
            .with_spacing(self.column_spacing)
            .with_padding(self.padding)
            .with_horizontal_lines()
            .with_header_separator();

        if self.vertical_lines {
            options.with_vertical_lines()
        } else {
            options
        }
    }
}

/// User settings for Stockroom
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Inventory file location (defaults to `inventory.txt` in the base directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_file: Option<PathBuf>,

    /// Prefix every product code must start with
    #[serde(default = "default_sku_prefix")]
    pub sku_prefix: String,

    /// Layout of the full inventory listing
    #[serde(default)]
    pub list_table: TableStyle,

    /// Layout of the stock valuation table
    #[serde(default)]
    pub valuation_table: TableStyle,

    /// Whether additions and restocks are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_sku_prefix() -> String {
    DEFAULT_SKU_PREFIX.to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            inventory_file: None,
            sku_prefix: default_sku_prefix(),
            list_table: TableStyle::default(),
            valuation_table: TableStyle::default(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &StockPaths) -> Result<Self, StockError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| StockError::Io(format!("Failed to read settings file: {}", e)))?;

            let mut settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                StockError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            // Codes are uppercased on entry, so the prefix must be too
            settings.sku_prefix = settings.sku_prefix.trim().to_uppercase();

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &StockPaths) -> Result<(), StockError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| StockError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| StockError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Inventory file to use, honoring the configured override
    pub fn inventory_path(&self, paths: &StockPaths) -> PathBuf {
        self.inventory_file
            .clone()
            .unwrap_or_else(|| paths.inventory_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.sku_prefix, "SKU");
        assert_eq!(settings.list_table.column_spacing, 5);
        assert_eq!(settings.valuation_table.padding, 0);
        assert!(settings.audit_enabled);
        assert!(settings.inventory_file.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StockPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.sku_prefix = "ITM".into();
        settings.list_table.vertical_lines = true;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.sku_prefix, "ITM");
        assert!(loaded.list_table.vertical_lines);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StockPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"audit_enabled": false}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.audit_enabled);
        assert_eq!(loaded.sku_prefix, "SKU");
    }

    #[test]
    fn test_sku_prefix_is_uppercased_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StockPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"sku_prefix": " itm "}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.sku_prefix, "ITM");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StockPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, StockError::Config(_)));
    }

    #[test]
    fn test_inventory_path_override() {
        let paths = StockPaths::with_base_dir(PathBuf::from("/data"));
        let mut settings = Settings::default();
        assert_eq!(settings.inventory_path(&paths), PathBuf::from("/data/inventory.txt"));

        settings.inventory_file = Some(PathBuf::from("/elsewhere/stock.txt"));
        assert_eq!(settings.inventory_path(&paths), PathBuf::from("/elsewhere/stock.txt"));
    }

    #[test]
    fn test_ruled_style() {
        let options = TableStyle::default().ruled();
        assert!(options.horizontal_lines);
        assert!(options.header_separator);
        assert!(!options.vertical_lines);
        assert_eq!(options.column_spacing, 5);
    }
}
