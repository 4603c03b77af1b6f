//! Inventory CLI commands
//!
//! Implements the one-shot commands that mirror the interactive menu.

use clap::Subcommand;

use crate::audit::AuditLogger;
use crate::config::Settings;
use crate::display::{
    format_inventory_list, format_record_panel, format_sale_panel, format_valuation,
};
use crate::error::StockResult;
use crate::models::Record;
use crate::services::InventoryService;
use crate::storage::InventoryStore;

/// Inventory subcommands
#[derive(Subcommand)]
pub enum InventoryCommands {
    /// List all records sorted by product name
    #[command(alias = "ls")]
    List,
    /// Add a new record
    Add {
        /// Country of origin
        country: String,
        /// Product code (SKU)
        code: String,
        /// Product name
        product: String,
        /// Unit cost
        cost: i64,
        /// Quantity in stock
        quantity: i64,
    },
    /// Find a record by product code
    Search {
        /// Product code to look for
        code: String,
    },
    /// Add stock to the record with the lowest quantity
    Restock {
        /// Number of units to add
        amount: i64,
    },
    /// Show the record with the lowest quantity
    Lowest,
    /// Show the record with the highest quantity
    Highest,
    /// Show the stock value of every record and the total
    #[command(alias = "values")]
    Value,
}

/// Handle an inventory command
pub fn handle_inventory_command(
    store: &mut InventoryStore,
    settings: &Settings,
    audit: Option<&AuditLogger>,
    cmd: InventoryCommands,
) -> StockResult<()> {
    let mut service = InventoryService::new(store).with_sku_prefix(&settings.sku_prefix);
    if let Some(logger) = audit {
        service = service.with_audit(logger);
    }

    match cmd {
        InventoryCommands::List => {
            println!(
                "{}",
                format_inventory_list(service.list_sorted(), &settings.list_table)
            );
        }

        InventoryCommands::Add {
            country,
            code,
            product,
            cost,
            quantity,
        } => {
            let record = Record::new(
                country.trim(),
                code.trim().to_uppercase(),
                product.trim(),
                cost,
                quantity,
            );
            service.add_records(vec![record.clone()])?;

            println!("Record added:");
            println!("{}", record);
        }

        InventoryCommands::Search { code } => {
            let code = code.trim().to_uppercase();
            let record = service.get_by_code(&code)?;
            println!("{}", format_record_panel("Record found:", record));
        }

        InventoryCommands::Restock { amount } => {
            let outcome = service.restock_lowest(amount)?;
            println!(
                "Restocked {} ({}): {} -> {}",
                outcome.record.code,
                outcome.record.product,
                outcome.previous_quantity,
                outcome.record.quantity()
            );
        }

        InventoryCommands::Lowest => {
            println!("{}", format_record_panel("Lowest stock:", service.lowest_stock()?));
        }

        InventoryCommands::Highest => {
            println!("{}", format_sale_panel(service.highest_stock()?));
        }

        InventoryCommands::Value => {
            let valuation = service.valuation()?;
            println!("{}", format_valuation(&valuation, &settings.valuation_table));
        }
    }

    Ok(())
}
