//! Aligned text tables
//!
//! Renders rows of text and number cells into fixed-width columns. Text is
//! left-aligned and numbers are right-aligned so that digits line up on their
//! last place. Rows may be ragged: a short row simply stops early.

use std::fmt;

/// One table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Left-aligned text
    Text(String),
    /// Right-aligned integer
    Number(i64),
}

impl Cell {
    /// Printed width in characters
    pub fn width(&self) -> usize {
        match self {
            Self::Text(text) => text.chars().count(),
            Self::Number(n) => n.to_string().len(),
        }
    }

    /// An empty text cell
    pub fn blank() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

/// Layout options for [`render_table`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Spaces added after every cell
    pub column_spacing: usize,
    /// Spaces added on both sides of every cell
    pub padding: usize,
    /// Draw `|` between columns and `+` where rules cross them
    pub vertical_lines: bool,
    /// Draw a rule above the first row and below the last
    pub horizontal_lines: bool,
    /// Draw a rule below the first (header) row
    pub header_separator: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            column_spacing: 5,
            padding: 0,
            vertical_lines: false,
            horizontal_lines: false,
            header_separator: false,
        }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spacing(mut self, column_spacing: usize) -> Self {
        self.column_spacing = column_spacing;
        self
    }

    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_vertical_lines(mut self) -> Self {
        self.vertical_lines = true;
        self
    }

    pub fn with_horizontal_lines(mut self) -> Self {
        self.horizontal_lines = true;
        self
    }

    pub fn with_header_separator(mut self) -> Self {
        self.header_separator = true;
        self
    }

    /// Total width a column occupies, excluding any `|` prefix
    pub fn column_width(&self, content_width: usize) -> usize {
        content_width + self.column_spacing + self.padding * 2
    }
}

/// Render rows into an aligned text block with no trailing newline
pub fn render_table(rows: &[Vec<Cell>], options: &TableOptions) -> String {
    let widths = column_widths(rows);

    let separator = (options.horizontal_lines || options.header_separator)
        .then(|| separator_line(&widths, options));

    let mut lines = Vec::with_capacity(rows.len() + 3);

    if let (true, Some(rule)) = (options.horizontal_lines, &separator) {
        lines.push(rule.clone());
    }

    for (index, row) in rows.iter().enumerate() {
        lines.push(render_row(row, &widths, options));

        if index == 0 {
            if let (true, Some(rule)) = (options.header_separator, &separator) {
                lines.push(rule.clone());
            }
        }
    }

    if let (true, Some(rule)) = (options.horizontal_lines, &separator) {
        lines.push(rule.clone());
    }

    lines.join("\n")
}

/// Widest printed cell per column; the column count is the longest row
fn column_widths(rows: &[Vec<Cell>]) -> Vec<usize> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; columns];

    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    widths
}

fn separator_line(widths: &[usize], options: &TableOptions) -> String {
    let mut line = String::new();

    for &width in widths {
        if options.vertical_lines {
            line.push('+');
        }
        line.push_str(&"-".repeat(options.column_width(width)));
    }

    if options.vertical_lines {
        line.push('+');
    }

    line
}

fn render_row(row: &[Cell], widths: &[usize], options: &TableOptions) -> String {
    let mut line = String::new();

    for (cell, &width) in row.iter().zip(widths) {
        if options.vertical_lines {
            line.push('|');
        }

        let extra = width - cell.width();
        let (before, after) = match cell {
            Cell::Number(_) => (
                options.padding + extra,
                options.padding + options.column_spacing,
            ),
            Cell::Text(_) => (
                options.padding,
                options.padding + options.column_spacing + extra,
            ),
        };

        line.push_str(&" ".repeat(before));
        line.push_str(&cell.to_string());
        line.push_str(&" ".repeat(after));
    }

    if options.vertical_lines {
        line.push('|');
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spaces(n: usize) -> String {
        " ".repeat(n)
    }

    #[test]
    fn test_default_layout() {
        let rows = vec![
            vec![Cell::from("Name"), Cell::from("Qty")],
            vec![Cell::from("Boot"), Cell::from(5)],
            vec![Cell::from("Sandal"), Cell::from(12)],
        ];

        let output = render_table(&rows, &TableOptions::default());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("Name{}Qty{}", spaces(7), spaces(5)));
        assert_eq!(lines[1], format!("Boot{}  5{}", spaces(7), spaces(5)));
        assert_eq!(lines[2], format!("Sandal{} 12{}", spaces(5), spaces(5)));
        assert!(!output.ends_with('\n'));
    }

    #[test]
    fn test_all_lines_with_padding() {
        let rows = vec![
            vec![Cell::from("A"), Cell::from("B")],
            vec![Cell::from(1), Cell::from("xy")],
        ];
        let options = TableOptions::new()
            .with_spacing(1)
            .with_padding(1)
            .with_vertical_lines()
            .with_horizontal_lines()
            .with_header_separator();

        let output = render_table(&rows, &options);
        assert_eq!(
            output,
            "+----+-----+\n| A  | B   |\n+----+-----+\n| 1  | xy  |\n+----+-----+"
        );
    }

    #[test]
    fn test_numbers_right_align_text_left_aligns() {
        let rows = vec![
            vec![Cell::from("Qty")],
            vec![Cell::from(5)],
            vec![Cell::from("ab")],
            vec![Cell::from(1234)],
        ];
        let options = TableOptions::new().with_spacing(0);

        let output = render_table(&rows, &options);
        let lines: Vec<&str> = output.split('\n').collect();

        assert_eq!(lines, vec!["Qty ", "   5", "ab  ", "1234"]);
    }

    #[test]
    fn test_negative_numbers_count_sign() {
        let rows = vec![vec![Cell::from(-12)], vec![Cell::from(7)]];
        let output = render_table(&rows, &TableOptions::new().with_spacing(0));
        assert_eq!(output, "-12\n  7");
    }

    #[test]
    fn test_ragged_rows() {
        let rows = vec![
            vec![Cell::from("a"), Cell::from("b"), Cell::from("c")],
            vec![Cell::from("dd")],
            vec![],
        ];

        let output = render_table(&rows, &TableOptions::new().with_spacing(1));
        assert_eq!(output, "a  b c \ndd \n");

        let output = render_table(
            &rows,
            &TableOptions::new().with_spacing(1).with_vertical_lines(),
        );
        assert_eq!(output, "|a  |b |c |\n|dd |\n|");
    }

    #[test]
    fn test_header_separator_only() {
        let rows = vec![
            vec![Cell::from("Code"), Cell::from("Qty")],
            vec![Cell::from("SKU1"), Cell::from(3)],
        ];
        let options = TableOptions::new().with_spacing(2).with_header_separator();

        let output = render_table(&rows, &options);
        assert_eq!(output, "Code  Qty  \n-----------\nSKU1    3  ");
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(render_table(&[], &TableOptions::default()), "");

        let options = TableOptions::new().with_horizontal_lines();
        assert_eq!(render_table(&[], &options), "\n");

        let options = options.with_vertical_lines();
        assert_eq!(render_table(&[], &options), "+\n+");
    }

    #[test]
    fn test_every_line_has_equal_width() {
        let rows = vec![
            vec![Cell::blank(), Cell::from("Main Menu:")],
            vec![Cell::from(1), Cell::from("List all records")],
            vec![Cell::from(2), Cell::from("Re-stock")],
            vec![Cell::from(10), Cell::from("Exit")],
        ];
        let options = TableOptions::new()
            .with_spacing(0)
            .with_padding(5)
            .with_vertical_lines()
            .with_horizontal_lines()
            .with_header_separator();

        let output = render_table(&rows, &options);
        let widths: Vec<usize> = output.lines().map(|l| l.chars().count()).collect();

        // 1 + (2 + 10) + 1 + (16 + 10) + 1
        assert!(widths.iter().all(|&w| w == 41), "{:?}", widths);
    }

    #[test]
    fn test_never_truncates() {
        let long = "x".repeat(200);
        let rows = vec![vec![Cell::from("short")], vec![Cell::from(long.as_str())]];
        let output = render_table(&rows, &TableOptions::default());
        assert!(output.contains(&long));
    }

    #[test]
    fn test_width_counts_characters() {
        assert_eq!(Cell::from("Côte d'Ivoire").width(), 13);
        assert_eq!(Cell::from(-100).width(), 4);
    }
}
