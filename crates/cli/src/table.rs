// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plain-text table renderer for CLI list views.

use std::io::Write;

/// Column text alignment.
pub enum Align {
    Left,
    Right,
}

/// A column definition in a [`Table`].
pub struct Column {
    pub name: &'static str,
    pub align: Align,
    /// Maximum width in characters (`None` = unlimited)
    pub max_width: Option<usize>,
}

impl Column {
    pub fn left(name: &'static str) -> Self {
        Self {
            name,
            align: Align::Left,
            max_width: None,
        }
    }

    pub fn right(name: &'static str) -> Self {
        Self {
            name,
            align: Align::Right,
            max_width: None,
        }
    }

    /// Truncate values longer than `max` characters
    pub fn with_max(mut self, max: usize) -> Self {
        self.max_width = Some(max);
        self
    }
}

/// Column separator: double space.
const SEP: &str = "  ";

/// A tabular renderer that computes column widths from its rows.
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Render header and rows. An empty table prints nothing, and a trailing
    /// left-aligned column is never padded.
    pub fn render(&self, out: &mut impl Write) -> std::io::Result<()> {
        if self.rows.is_empty() {
            return Ok(());
        }
        let widths = self.compute_widths();

        let header: Vec<String> = self.columns.iter().map(|col| col.name.to_string()).collect();
        writeln!(out, "{}", self.format_line(&header, &widths))?;
        for row in &self.rows {
            writeln!(out, "{}", self.format_line(row, &widths))?;
        }
        Ok(())
    }

    fn format_line(&self, cells: &[String], widths: &[usize]) -> String {
        let last = self.columns.len().saturating_sub(1);
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let raw = cells.get(i).map(String::as_str).unwrap_or("");
                let text = truncate(raw, col.max_width);
                if i == last && matches!(col.align, Align::Left) {
                    text
                } else {
                    pad(&text, widths[i], &col.align)
                }
            })
            .collect::<Vec<_>>()
            .join(SEP)
    }

    fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let data = self
                    .rows
                    .iter()
                    .map(|row| {
                        let len = row.get(i).map(|s| s.chars().count()).unwrap_or(0);
                        col.max_width.map_or(len, |max| len.min(max))
                    })
                    .max()
                    .unwrap_or(0);
                col.name.len().max(data)
            })
            .collect()
    }
}

fn pad(text: &str, width: usize, align: &Align) -> String {
    match align {
        Align::Left => format!("{:<width$}", text),
        Align::Right => format!("{:>width$}", text),
    }
}

/// Cut to at most `max` characters, never inside a multi-byte character
fn truncate(s: &str, max: Option<usize>) -> String {
    match max {
        Some(m) if s.chars().count() > m => s.chars().take(m).collect(),
        _ => s.to_string(),
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
