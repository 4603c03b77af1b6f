//! Inventory display formatting
//!
//! Projects records, valuations and menus onto rows for the table renderer.

use super::table::{render_table, Cell, TableOptions};
use crate::config::TableStyle;
use crate::models::{Field, FieldValue, Record};
use crate::storage::Valuation;

/// Width of the dashed rules around single-record panels
pub const RULE_WIDTH: usize = 50;

impl From<FieldValue> for Cell {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Text(text) => Cell::Text(text),
            FieldValue::Integer(n) => Cell::Number(n),
        }
    }
}

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Canonical header row
pub fn header_row() -> Vec<Cell> {
    Field::ALL.iter().map(|f| Cell::from(f.label())).collect()
}

/// One record in canonical column order
pub fn record_row(record: &Record) -> Vec<Cell> {
    record
        .ordered_fields()
        .into_iter()
        .map(|(_, value)| Cell::from(value))
        .collect()
}

/// Format every record as a table under the canonical header
pub fn format_inventory_list(records: &[Record], style: &TableStyle) -> String {
    if records.is_empty() {
        return "No records found.".to_string();
    }

    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(header_row());
    rows.extend(records.iter().map(record_row));

    render_table(&rows, &style.ruled())
}

/// Format a stock valuation with a closing total row
pub fn format_valuation(valuation: &Valuation, style: &TableStyle) -> String {
    let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(valuation.lines.len() + 3);

    rows.push(
        ["Code", "Product", "Cost", "Quantity", "Total Value"]
            .into_iter()
            .map(Cell::from)
            .collect(),
    );

    for line in &valuation.lines {
        rows.push(vec![
            Cell::from(line.record.code.as_str()),
            Cell::from(line.record.product.as_str()),
            Cell::from(line.record.cost),
            Cell::from(line.record.quantity),
            Cell::from(line.value),
        ]);
    }

    rows.push(vec![Cell::blank(); 5]);
    rows.push(vec![
        Cell::blank(),
        Cell::blank(),
        Cell::blank(),
        Cell::from("TOTAL:"),
        Cell::from(valuation.grand_total),
    ]);

    render_table(&rows, &style.ruled())
}

/// A record between dashed rules, under a title
pub fn format_record_panel(title: &str, record: &Record) -> String {
    format!("{}\n{}\n{}\n{}", rule(), title, record, rule())
}

/// The highest-stock record, announced as a sale
pub fn format_sale_panel(record: &Record) -> String {
    format!(
        "{}\nSALE\n{}",
        rule(),
        format_record_panel("Highest stock record:", record)
    )
}

/// A numbered menu under a title
pub fn format_menu(title: &str, entries: &[(i64, &str)]) -> String {
    let mut rows = Vec::with_capacity(entries.len() + 1);
    rows.push(vec![Cell::blank(), Cell::from(title)]);
    rows.extend(
        entries
            .iter()
            .map(|(number, label)| vec![Cell::from(*number), Cell::from(*label)]),
    );

    let options = TableOptions::new()
        .with_spacing(0)
        .with_padding(5)
        .with_horizontal_lines()
        .with_header_separator();

    render_table(&rows, &options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ValuationLine;

    fn records() -> Vec<Record> {
        vec![
            Record::new("South Africa", "SKU44386", "Air Max 90", 2300, 20),
            Record::new("China", "SKU90000", "Jordan 1", 3200, 5),
        ]
    }

    #[test]
    fn test_record_row_tags_numbers() {
        let row = record_row(&records()[0]);
        assert_eq!(row[0], Cell::Text("South Africa".into()));
        assert_eq!(row[3], Cell::Number(2300));
        assert_eq!(row[4], Cell::Number(20));
    }

    #[test]
    fn test_format_inventory_list() {
        let output = format_inventory_list(&records(), &TableStyle::default());
        let lines: Vec<&str> = output.lines().collect();

        // rule, header, rule, two records, rule
        assert_eq!(lines.len(), 6);
        assert!(lines[0].chars().all(|c| c == '-'));
        assert!(lines[1].starts_with("Country"));
        assert!(lines[3].starts_with("South Africa"));
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_inventory_list(&[], &TableStyle::default());
        assert!(output.contains("No records found"));
    }

    #[test]
    fn test_format_valuation() {
        let [first, second] = <[Record; 2]>::try_from(records()).unwrap();
        let valuation = Valuation {
            lines: vec![
                ValuationLine {
                    record: first,
                    value: 46000,
                },
                ValuationLine {
                    record: second,
                    value: 16000,
                },
            ],
            grand_total: 62000,
        };

        let output = format_valuation(&valuation, &TableStyle::default());
        let lines: Vec<&str> = output.lines().collect();

        // rule, header, rule, two lines, blank row, total, rule
        assert_eq!(lines.len(), 8);
        assert!(lines[1].starts_with("Code"));
        assert!(lines[3].contains("46000"));
        assert!(lines[5].trim().is_empty());
        assert!(lines[6].contains("TOTAL:"));
        assert!(lines[6].trim_end().ends_with("62000"));
    }

    #[test]
    fn test_format_record_panel() {
        let output = format_record_panel("Lowest stock:", &records()[1]);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "-".repeat(RULE_WIDTH));
        assert_eq!(lines[1], "Lowest stock:");
        assert_eq!(lines[2], "Country: China");
        assert_eq!(lines[6], "Quantity: 5");
        assert_eq!(lines[7], "-".repeat(RULE_WIDTH));
    }

    #[test]
    fn test_format_sale_panel() {
        let output = format_sale_panel(&records()[0]);
        assert!(output.contains("SALE"));
        assert!(output.contains("Highest stock record:"));
        assert!(output.contains("Code: SKU44386"));
    }

    #[test]
    fn test_format_menu() {
        let output = format_menu("Main Menu:", &[(1, "Add a new record"), (2, "Exit")]);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1].trim(), "Main Menu:");
        assert!(lines[3].contains("1"));
        assert!(lines[3].contains("Add a new record"));
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }
}
