//! Interactive menu
//!
//! Drives the inventory through numbered menu choices. When the inventory is
//! empty only adding records and exiting are offered.

pub mod prompt;

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::{
    format_inventory_list, format_menu, format_record_panel, format_sale_panel, format_valuation,
};
use crate::error::{StockError, StockResult};
use crate::models::Record;
use crate::services::InventoryService;

pub use prompt::Prompter;

const RETURN_PROMPT: &str = "Press enter to return to menu.";

const REDUCED_MENU: [(i64, &str); 2] = [(1, "Add a new record"), (2, "Exit")];

const FULL_MENU: [(i64, &str); 7] = [
    (1, "List all records"),
    (2, "Re-stock"),
    (3, "Add a new record"),
    (4, "Search records"),
    (5, "Display stock values"),
    (6, "Display highest quantity record"),
    (7, "Exit"),
];

/// Whether the menu loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Turn an exhausted prompt into an exit
macro_rules! answer {
    ($prompt:expr) => {
        match $prompt? {
            Some(value) => value,
            None => return Ok(Flow::Exit),
        }
    };
}

/// The interactive menu over one inventory
pub struct Menu<'a, R, W> {
    service: InventoryService<'a>,
    settings: &'a Settings,
    prompt: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(service: InventoryService<'a>, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            service,
            settings,
            prompt: Prompter::new(input, output),
        }
    }

    /// Hand back the output sink
    pub fn finish(self) -> W {
        self.prompt.into_output()
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> StockResult<()> {
        loop {
            let flow = if self.service.store().is_empty() {
                self.reduced_round()
            } else {
                self.full_round()
            };

            match flow {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                // Terminal failures end the session; anything else is reported
                Err(e @ StockError::Io(_)) => return Err(e),
                Err(e) => self.prompt.say(&format!("Error: {}", e))?,
            }
        }
    }

    fn reduced_round(&mut self) -> StockResult<Flow> {
        if answer!(self.prompt.confirm("Add a record now (Y/N)? ")) {
            return self.capture_records();
        }

        self.prompt.say(&format_menu("Main Menu:", &REDUCED_MENU))?;
        let Some(option) = self.choose()? else {
            return Ok(Flow::Exit);
        };

        match option {
            Some(1) => {
                let flow = self.capture_records()?;
                self.pause_unless(flow)
            }
            Some(2) => Ok(Flow::Exit),
            _ => self.complain_choice(option),
        }
    }

    fn full_round(&mut self) -> StockResult<Flow> {
        self.prompt.say(&format_menu("Main Menu:", &FULL_MENU))?;
        let Some(option) = self.choose()? else {
            return Ok(Flow::Exit);
        };

        let flow = match option {
            Some(1) => self.list_all()?,
            Some(2) => self.restock()?,
            Some(3) => self.capture_records()?,
            Some(4) => self.search()?,
            Some(5) => self.show_values()?,
            Some(6) => self.show_highest()?,
            Some(7) => return Ok(Flow::Exit),
            _ => return self.complain_choice(option),
        };

        self.pause_unless(flow)
    }

    /// `Some(None)` is an answer that is not a number
    fn choose(&mut self) -> StockResult<Option<Option<i64>>> {
        Ok(self
            .prompt
            .ask("Please select an option: ")?
            .map(|answer| answer.parse::<i64>().ok()))
    }

    fn complain_choice(&mut self, option: Option<i64>) -> StockResult<Flow> {
        let message = match option {
            None => "Chosen option must be an integer. Press enter to return to menu.",
            Some(_) => "Invalid choice. Press enter to return to menu.",
        };
        answer!(self.prompt.pause(message));
        Ok(Flow::Continue)
    }

    fn pause_unless(&mut self, flow: Flow) -> StockResult<Flow> {
        if flow == Flow::Exit {
            return Ok(Flow::Exit);
        }
        answer!(self.prompt.pause(RETURN_PROMPT));
        Ok(Flow::Continue)
    }

    fn list_all(&mut self) -> StockResult<Flow> {
        let style = self.settings.list_table;
        let listing = format_inventory_list(self.service.list_sorted(), &style);
        self.prompt.say(&listing)?;
        Ok(Flow::Continue)
    }

    /// Capture records until the user stops, then persist them together
    fn capture_records(&mut self) -> StockResult<Flow> {
        let mut pending = Vec::new();

        let flow = loop {
            let record = match self.capture_record()? {
                Some(record) => record,
                None => break Flow::Exit,
            };

            self.prompt.say("Record added:")?;
            self.prompt.say(&record.to_string())?;
            pending.push(record);

            match self.prompt.confirm("Add another record (Y/N)? ")? {
                Some(true) => continue,
                Some(false) => break Flow::Continue,
                None => break Flow::Exit,
            }
        };

        if !pending.is_empty() {
            self.service.add_records(pending)?;
            self.prompt.say("Data file updated.")?;
        }

        Ok(flow)
    }

    fn capture_record(&mut self) -> StockResult<Option<Record>> {
        let prefix = self.settings.sku_prefix.to_uppercase();

        loop {
            let Some(country) = self.prompt.ask_non_empty(
                "Please enter the country: ",
                "Country cannot be empty. Please try again.",
            )?
            else {
                return Ok(None);
            };

            let Some(code) = self.ask_code("Please enter the SKU: ", &prefix)? else {
                return Ok(None);
            };

            let Some(product) = self.prompt.ask_non_empty(
                "Please enter the product name: ",
                "Product name cannot be empty. Please try again.",
            )?
            else {
                return Ok(None);
            };

            let cost = loop {
                match self.prompt.ask_integer(
                    "Please enter the product cost: ",
                    "Product cost must be an integer. Please try again.",
                )? {
                    None => return Ok(None),
                    Some(0) => self
                        .prompt
                        .say("Product cost cannot be nil. Please try again.")?,
                    Some(cost) => break cost,
                }
            };

            let Some(quantity) = self.prompt.ask_integer(
                "Please enter the quantity: ",
                "Quantity must be an integer. Please try again.",
            )?
            else {
                return Ok(None);
            };

            let record = Record::new(country, code, product, cost, quantity);
            match record.validate(&prefix) {
                Ok(()) => return Ok(Some(record)),
                Err(e) => self.prompt.say(&format!("{}. Please try again.", e))?,
            }
        }
    }

    /// Ask for a product code, uppercased, until it carries the prefix
    fn ask_code(&mut self, prompt: &str, prefix: &str) -> StockResult<Option<String>> {
        loop {
            let Some(code) = self.prompt.ask(prompt)? else {
                return Ok(None);
            };
            let code = code.to_uppercase();

            if code.is_empty() {
                self.prompt.say("SKU cannot be empty. Please try again.")?;
            } else if !code.starts_with(prefix) {
                self.prompt.say(&format!(
                    "SKU must start with '{}'. Please try again.",
                    prefix
                ))?;
            } else {
                return Ok(Some(code));
            }
        }
    }

    fn restock(&mut self) -> StockResult<Flow> {
        let lowest = self.service.lowest_stock()?.clone();
        self.prompt
            .say(&format_record_panel("Lowest stock:", &lowest))?;

        if !answer!(self.prompt.confirm("Re-stock this record (Y/N)? ")) {
            return Ok(Flow::Continue);
        }

        let amount = loop {
            let amount = answer!(self.prompt.ask_integer(
                "How many do you want to add? ",
                "Quantity must be an integer. Please try again.",
            ));
            if amount < 0 {
                self.prompt
                    .say("Quantity must be a positive number. Please try again.")?;
            } else {
                break amount;
            }
        };

        let outcome = self.service.restock_lowest(amount)?;
        self.prompt.say(&format!(
            "Quantity updated. New quantity: {}",
            outcome.record.quantity()
        ))?;
        self.prompt.say("Data file updated.")?;

        Ok(Flow::Continue)
    }

    fn search(&mut self) -> StockResult<Flow> {
        let prefix = self.settings.sku_prefix.to_uppercase();

        let found = loop {
            let code = answer!(self.prompt.ask("Please enter the product code to search for: "))
                .to_uppercase();

            if code.is_empty() {
                self.prompt
                    .say("Product code cannot be blank. Please try again.")?;
                continue;
            }
            if !code.starts_with(&prefix) {
                self.prompt.say(&format!(
                    "Product code must start with '{}'. Please try again.",
                    prefix
                ))?;
                continue;
            }

            if let Some(record) = self.service.find_by_code(&code) {
                break Some(record.clone());
            }

            if !answer!(self
                .prompt
                .confirm("The chosen record was not found. Try again (Y/N)? "))
            {
                break None;
            }
        };

        match found {
            Some(record) => self
                .prompt
                .say(&format_record_panel("Record found:", &record))?,
            None => self
                .prompt
                .say("No records found with the chosen product code.")?,
        }

        Ok(Flow::Continue)
    }

    fn show_values(&mut self) -> StockResult<Flow> {
        let valuation = self.service.valuation()?;
        let table = format_valuation(&valuation, &self.settings.valuation_table);
        self.prompt.say(&table)?;
        Ok(Flow::Continue)
    }

    fn show_highest(&mut self) -> StockResult<Flow> {
        let panel = format_sale_panel(self.service.highest_stock()?);
        self.prompt.say(&panel)?;
        Ok(Flow::Continue)
    }
}
