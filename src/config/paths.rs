//! Path management for Stockroom
//!
//! Provides XDG-compliant path resolution for configuration, the inventory
//! file and the audit log.
//!
//! ## Path Resolution Order
//!
//! 1. `STOCKROOM_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/stockroom` or `~/.config/stockroom`
//! 3. Windows: `%APPDATA%\stockroom`

use std::path::PathBuf;

use crate::error::StockError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "STOCKROOM_DATA_DIR";

/// Manages all paths used by Stockroom
#[derive(Debug, Clone)]
pub struct StockPaths {
    /// Base directory for all Stockroom data
    base_dir: PathBuf,
}

impl StockPaths {
    /// Create a new StockPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, StockError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create StockPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/stockroom/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the default path of the inventory file
    pub fn inventory_file(&self) -> PathBuf {
        self.base_dir.join("inventory.txt")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), StockError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| StockError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if Stockroom has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, StockError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    if let Ok(config_home) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(config_home).join("stockroom"));
    }

    let home = std::env::var("HOME")
        .map_err(|_| StockError::Config("HOME environment variable not set".into()))?;
    Ok(PathBuf::from(home).join(".config").join("stockroom"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, StockError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| StockError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("stockroom"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StockPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.inventory_file(), temp_dir.path().join("inventory.txt"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StockPaths::with_base_dir(temp_dir.path().join("nested"));

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
