//! Table rendering for formatted output.
//!
//! A [`Table`] renders as a box-drawn grid for humans or as CSV, JSON or
//! YAML records keyed by header for machines.

use std::str::FromStr;

use console::measure_text_width;

use crate::error::{MagerootError, Result};

/// Output encoding for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFormat {
    /// Box-drawn grid.
    #[default]
    Table,
    Csv,
    Json,
    Yaml,
}

impl FromStr for TableFormat {
    type Err = MagerootError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(MagerootError::UnknownFormat {
                format: s.to_string(),
            }),
        }
    }
}

/// A simple table for formatted output.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| measure_text_width(h)).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row to the table. Cells may carry terminal styling.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (i, cell) in row.iter().enumerate() {
            if i < self.column_widths.len() {
                self.column_widths[i] = self.column_widths[i].max(measure_text_width(cell));
            }
        }

        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render in the given format.
    pub fn render_as(&self, format: TableFormat) -> Result<String> {
        match format {
            TableFormat::Table => Ok(self.render()),
            TableFormat::Csv => Ok(self.render_csv()),
            TableFormat::Json => serde_json::to_string_pretty(&self.records_json())
                .map_err(|e| MagerootError::Other(e.into())),
            TableFormat::Yaml => serde_yaml::to_string(&self.records_yaml())
                .map_err(|e| MagerootError::Other(e.into())),
        }
    }

    /// Render the table as a box-drawn grid.
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_border('┌', '┬', '┐'));
        output.push('\n');

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');

        output.push_str(&self.render_border('├', '┼', '┤'));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output.push_str(&self.render_border('└', '┴', '┘'));

        output
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let mut s = String::new();
        s.push(left);

        for (i, width) in self.column_widths.iter().enumerate() {
            s.push_str(&"─".repeat(width + 2));
            if i < self.column_widths.len() - 1 {
                s.push(mid);
            }
        }

        s.push(right);
        s
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::from("│");

        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(|s| s.as_str()).unwrap_or("");
            // Pad by visible width so styled cells line up.
            let padding = width.saturating_sub(measure_text_width(cell));
            s.push_str(&format!(" {}{} │", cell, " ".repeat(padding)));
        }

        s
    }

    fn render_csv(&self) -> String {
        let mut output = String::new();
        for line in std::iter::once(&self.headers).chain(self.rows.iter()) {
            let cells: Vec<String> = line.iter().map(|c| csv_field(c)).collect();
            output.push_str(&cells.join(","));
            output.push('\n');
        }
        output
    }

    fn records_json(&self) -> Vec<serde_json::Map<String, serde_json::Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .enumerate()
                    .map(|(i, h)| {
                        let cell = row.get(i).cloned().unwrap_or_default();
                        (h.clone(), serde_json::Value::String(cell))
                    })
                    .collect()
            })
            .collect()
    }

    fn records_yaml(&self) -> Vec<serde_yaml::Mapping> {
        self.rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .enumerate()
                    .map(|(i, h)| {
                        let cell = row.get(i).cloned().unwrap_or_default();
                        (
                            serde_yaml::Value::String(h.clone()),
                            serde_yaml::Value::String(cell),
                        )
                    })
                    .collect()
            })
            .collect()
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
