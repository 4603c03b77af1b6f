//! Audit logging system for Stockroom
//!
//! Records every added record and every restock with before/after values
//! in an append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single entry with timestamp, operation, the affected
//!   record's code and product, and optional before/after snapshots.
//! - `AuditLogger`: appends entries to the log file as JSON lines (JSONL).
//! - `generate_diff`: summarizes which fields changed between snapshots.
//!
//! # Example
//!
//! ```rust,ignore
//! use stockroom::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! logger.record(&[AuditEntry::update(&before, &after)])?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
