//! Display formatting for terminal output
//!
//! Provides the aligned table renderer and the inventory views built on it.

pub mod inventory;
pub mod table;

pub use inventory::{
    format_inventory_list, format_menu, format_record_panel, format_sale_panel, format_valuation,
};
pub use table::{render_table, Cell, TableOptions};
