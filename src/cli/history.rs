//! History CLI command
//!
//! Shows the most recent entries of the audit log.

use crate::audit::AuditLogger;
use crate::error::StockResult;

/// Print the last `limit` audit entries, oldest first, optionally for one code
pub fn handle_history_command(
    logger: &AuditLogger,
    code: Option<&str>,
    limit: usize,
) -> StockResult<()> {
    let entries = logger.history(code, limit)?;

    if entries.is_empty() {
        match code {
            Some(code) => println!("No history recorded for {}.", code.to_uppercase()),
            None => println!("No history recorded yet."),
        }
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
