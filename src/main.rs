use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use stockroom::audit::AuditLogger;
use stockroom::cli::{handle_history_command, handle_inventory_command, InventoryCommands};
use stockroom::config::{paths::StockPaths, settings::Settings};
use stockroom::menu::Menu;
use stockroom::services::InventoryService;
use stockroom::storage::{serialize_inventory, write_text_atomic, FileBackend, InventoryStore};

#[derive(Parser)]
#[command(
    name = "stockroom",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based inventory manager",
    long_about = "Stockroom keeps a catalog of stock-keeping records in a flat \
                  comma-delimited text file. Run it without a command for the \
                  interactive menu, or use the commands below for one-shot tasks."
)]
struct Cli {
    /// Inventory file to use instead of the configured one
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu
    Menu,

    #[command(flatten)]
    Inventory(InventoryCommands),

    /// Show recent inventory changes
    History {
        /// Only show changes to this product code
        #[arg(short, long)]
        code: Option<String>,
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the data directory and an empty inventory file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = StockPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let inventory_path = cli
        .file
        .clone()
        .unwrap_or_else(|| settings.inventory_path(&paths));
    let audit = AuditLogger::new(paths.audit_log());

    match cli.command {
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("Stockroom is already set up at: {}", paths.base_dir().display());
            } else {
                println!("Initializing Stockroom at: {}", paths.base_dir().display());
            }
            settings.save(&paths)?;

            if inventory_path.exists() {
                println!("Keeping existing inventory file: {}", inventory_path.display());
            } else {
                write_text_atomic(&inventory_path, &serialize_inventory(&[]))?;
                println!("Created inventory file: {}", inventory_path.display());
            }
            println!("Initialization complete!");
            println!();
            println!("Run 'stockroom add' to add records, or 'stockroom' for the menu.");
        }
        Some(Commands::Config) => {
            println!("Stockroom Configuration");
            println!("=======================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Inventory file: {}", inventory_path.display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  SKU prefix:    {}", settings.sku_prefix);
            println!("  Audit enabled: {}", settings.audit_enabled);
            println!(
                "  List table:    spacing {}, padding {}, vertical lines {}",
                settings.list_table.column_spacing,
                settings.list_table.padding,
                settings.list_table.vertical_lines
            );
        }
        Some(Commands::History { code, limit }) => {
            handle_history_command(&audit, code.as_deref(), limit)?;
        }
        command => {
            let audit = settings.audit_enabled.then_some(&audit);

            let mut store = InventoryStore::new(FileBackend::new(&inventory_path));
            let source = store.backend().describe();
            let status = store
                .load()
                .with_context(|| format!("Failed to load inventory from {}", source))?;

            match command {
                Some(Commands::Inventory(cmd)) => {
                    handle_inventory_command(&mut store, &settings, audit, cmd)?;
                }
                _ => {
                    if let Some(notice) = status.notice() {
                        println!("{}", notice);
                    }

                    let mut service = InventoryService::new(&mut store)
                        .with_sku_prefix(&settings.sku_prefix);
                    if let Some(logger) = audit {
                        service = service.with_audit(logger);
                    }

                    let stdin = io::stdin();
                    let mut menu = Menu::new(service, &settings, stdin.lock(), io::stdout());
                    menu.run()?;
                }
            }
        }
    }

    Ok(())
}
