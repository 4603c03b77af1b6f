//! Append-only inventory history
//!
//! One JSON object per line. Reading filters by product code so `history`
//! can show the changes made to a single record.

use std::collections::VecDeque;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{StockError, StockResult};
use crate::storage::read_text;

use super::entry::AuditEntry;

/// Writes and reads the JSONL history of inventory changes
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
        }
    }

    /// Append entries in order, flushing once
    pub fn record(&self, entries: &[AuditEntry]) -> StockResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut lines = String::new();
        for entry in entries {
            lines.push_str(&serde_json::to_string(entry)?);
            lines.push('\n');
        }

        if let Some(parent) = self.log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| StockError::Io(format!("Cannot open {}: {}", self.log_path.display(), e)))?;
        file.write_all(lines.as_bytes())?;
        file.flush()?;

        Ok(())
    }

    /// The last `limit` entries, oldest first, optionally only for one code
    pub fn history(&self, code: Option<&str>, limit: usize) -> StockResult<Vec<AuditEntry>> {
        let Some(text) = read_text(&self.log_path)? else {
            return Ok(Vec::new());
        };

        let code = code.map(str::to_uppercase);
        let mut kept = VecDeque::with_capacity(limit.min(64));

        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(line).map_err(|e| {
                StockError::Json(format!("History line {} is damaged: {}", index + 1, e))
            })?;

            if code.as_deref().is_some_and(|wanted| entry.code != wanted) {
                continue;
            }

            if kept.len() == limit {
                kept.pop_front();
            }
            if limit > 0 {
                kept.push_back(entry);
            }
        }

        Ok(kept.into())
    }
}
