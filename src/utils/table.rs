//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

/// A row is either a set of plain cells (one per column) or a free-form
/// line spanning the whole table (used for waived days and summaries).
pub enum Row {
    Cells(Vec<String>),
    Span(String),
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

/// Pad a cell to a display width, ignoring ANSI escape sequences.
fn pad(cell: &str, width: usize) -> String {
    let visible = strip_ansi(cell);
    let w = UnicodeWidthStr::width(visible.as_str());
    let fill = width.saturating_sub(w);
    format!("{}{}", cell, " ".repeat(fill))
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_escape = false;
    for c in s.chars() {
        if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else if c == '\x1b' {
            in_escape = true;
        } else {
            out.push(c);
        }
    }
    out
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(Row::Cells(row));
    }

    pub fn add_span(&mut self, line: String) {
        self.rows.push(Row::Span(line));
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            match row {
                Row::Cells(cells) => {
                    for (i, col) in self.columns.iter().enumerate() {
                        let cell = cells.get(i).map(String::as_str).unwrap_or("");
                        out.push_str(&pad(cell, col.width));
                        out.push(' ');
                    }
                }
                Row::Span(line) => out.push_str(line),
            }
            out.push('\n');
        }

        out
    }
}
