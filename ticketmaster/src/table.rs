//! Generic aligned text table for homogeneous JSON records
//!
//! Column widths fit the widest cell (never narrower than the label) up to
//! [`MAX_COLUMN_WIDTH`]; longer cells are cut to that width without any
//! ellipsis marker. Widths count characters, not bytes.

use colored::*;
use serde_json::Value;

/// Widest a column may grow because of its cells
pub const MAX_COLUMN_WIDTH: usize = 50;

const COLUMN_SEPARATOR: &str = "  ";

/// Custom cell formatter: receives the raw field (if any) and the whole row.
pub type CellFormatter = Box<dyn Fn(Option<&Value>, &Value) -> String>;

/// One column of a table
pub struct Column {
    key: String,
    label: String,
    format: Option<CellFormatter>,
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("format", &self.format.is_some())
            .finish()
    }
}

impl Column {
    /// Column showing `row[key]` under `label`
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            format: None,
        }
    }

    /// Use a custom formatter for this column's cells
    pub fn with_format<F>(mut self, format: F) -> Self
    where
        F: Fn(Option<&Value>, &Value) -> String + 'static,
    {
        self.format = Some(Box::new(format));
        self
    }

    /// Untruncated text of this column for `row`
    fn cell(&self, row: &Value) -> String {
        let raw = row.get(&self.key).filter(|v| !v.is_null());

        match &self.format {
            Some(format) => format(raw, row),
            None => raw.map(display_value).unwrap_or_default(),
        }
    }
}

/// String form of a raw JSON value: strings verbatim, everything else as JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Compute each column's display width for `data`.
pub fn column_widths(data: &[Value], columns: &[Column]) -> Vec<usize> {
    columns
        .iter()
        .map(|column| {
            let label_len = column.label.chars().count();
            let widest_cell = data
                .iter()
                .map(|row| column.cell(row).chars().count())
                .max()
                .unwrap_or(0);

            widest_cell.min(MAX_COLUMN_WIDTH).max(label_len)
        })
        .collect()
}

fn fit(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{:<width$}", truncated, width = width)
}

/// Render `data` as a table with the given columns.
///
/// An empty input yields a single "No results found." notice.
pub fn render_table(data: &[Value], columns: &[Column]) -> String {
    if data.is_empty() {
        return "No results found.".yellow().to_string();
    }

    let widths = column_widths(data, columns);

    let header = columns
        .iter()
        .zip(&widths)
        .map(|(column, &width)| format!("{:<width$}", column.label, width = width))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR);
    let rule = "─".repeat(header.chars().count());

    let mut lines = Vec::with_capacity(data.len() + 4);
    lines.push(header.cyan().bold().to_string());
    lines.push(rule.dimmed().to_string());

    for row in data {
        let line = columns
            .iter()
            .zip(&widths)
            .map(|(column, &width)| fit(&column.cell(row), width))
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR);
        lines.push(line);
    }

    lines.push(String::new());
    lines.push(format!("{} result(s)", data.len()).dimmed().to_string());

    lines.join("\n")
}
