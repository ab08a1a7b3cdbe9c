//! Table rendering for CLI outputs.
//!
//! Cells are written into a pending row, then committed. Every commit widens
//! the tracked column widths when needed; rendering pads each cell (except the
//! last column) up to its column width and joins cells with the spacing string.

use crate::core::style::Styler;
use crate::models::cell::{Cell, Row, char_width};
use std::fmt;
use std::io::{self, Write};

/// Buffered, left-aligned text table.
///
/// Not meant to be shared between threads: one table per report, owned by
/// whoever fills it.
#[derive(Debug, Clone, Default)]
pub struct Table {
    col_widths: Vec<usize>,
    rows: Vec<Row>,
    pending_row: Row,
    prefix: String,
    spacing: String,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------
    // Configuration
    // ---------------------------

    /// String printed at the start of every row.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// String printed between two adjacent cells.
    pub fn set_spacing(&mut self, spacing: impl Into<String>) {
        self.spacing = spacing.into();
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn spacing(&self) -> &str {
        &self.spacing
    }

    // ---------------------------
    // Cell accumulation
    // ---------------------------

    pub fn write_cell(&mut self, text: impl Into<String>) {
        self.pending_row.push(Cell::new(text));
    }

    /// Adds a cell whose padding is computed from `width` instead of the
    /// length of `text`.
    pub fn write_cell_width(&mut self, text: impl Into<String>, width: usize) {
        self.pending_row.push(Cell::with_width(text, width));
    }

    /// Adds `text` styled by `style`, measured on the unstyled text.
    pub fn write_cell_color<S: Styler + ?Sized>(&mut self, text: &str, style: &S) {
        self.write_cell_width(style.apply(text), char_width(text));
    }

    /// Writes every header with `style` and commits the row.
    pub fn write_colored_row<S, I, T>(&mut self, style: &S, headers: I)
    where
        S: Styler + ?Sized,
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        for header in headers {
            self.write_cell_color(header.as_ref(), style);
        }
        self.commit_row();
    }

    /// Cells written since the last commit.
    pub fn pending_cells(&self) -> &[Cell] {
        &self.pending_row
    }

    // ---------------------------
    // Row lifecycle
    // ---------------------------

    /// Moves the pending row (even an empty one) into the table.
    pub fn commit_row(&mut self) {
        let row = std::mem::take(&mut self.pending_row);
        self.expand_col_widths(&row);
        self.rows.push(row);
    }

    /// Number of committed rows.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    // ---------------------------
    // Width queries
    // ---------------------------

    pub fn column_count(&self) -> usize {
        self.col_widths.len()
    }

    pub fn column_widths(&self) -> &[usize] {
        &self.col_widths
    }

    pub fn widest_cell_width(&self) -> usize {
        self.col_widths.iter().copied().max().unwrap_or(0)
    }

    /// Total width of a full rendered line: columns, prefix and the spacing
    /// between columns (never before the first or after the last).
    /// Prefix and spacing are measured in code points, like cell widths.
    pub fn width(&self) -> usize {
        let cols: usize = self.col_widths.iter().sum();
        let gaps = self.col_widths.len().saturating_sub(1);
        cols + char_width(&self.prefix) + char_width(&self.spacing) * gaps
    }

    // ---------------------------
    // Rendering
    // ---------------------------

    /// Assembles the full output, one line per committed row.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let last_col = self.col_widths.len().saturating_sub(1);
        let spaces = " ".repeat(self.widest_cell_width());

        for row in &self.rows {
            out.push_str(&self.prefix);
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    out.push_str(&self.spacing);
                }
                out.push_str(cell.text());
                if i < last_col {
                    let pad = self.col_widths[i].saturating_sub(cell.width());
                    out.push_str(&spaces[..pad]);
                }
            }
            out.push('\n');
        }

        out
    }

    /// Writes the rendered table to `w` with a single write.
    pub fn fprintln<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(self.render().as_bytes())
    }

    /// Writes the rendered table to stdout.
    pub fn println(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.fprintln(&mut handle)?;
        handle.flush()
    }

    fn expand_col_widths(&mut self, cells: &[Cell]) {
        if self.col_widths.len() < cells.len() {
            self.col_widths.resize(cells.len(), 0);
        }
        for (width, cell) in self.col_widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.width());
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
