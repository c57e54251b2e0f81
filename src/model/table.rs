//! Table, header and row types

use super::cell::{Cell, Display, Style};

/// A column title with its visibility state.
///
/// The cell's index is its position among header cells at scan time;
/// suppressed cells are hidden, never removed, so indices never shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub text: String,
    pub display: Display,
}

impl HeaderCell {
    pub fn new(text: impl Into<String>) -> Self {
        HeaderCell {
            text: text.into(),
            display: Display::Shown,
        }
    }
}

/// One body row: an ordered sequence of cells plus row-level state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub cells: Vec<Cell>,
    pub display: Display,
    pub style: Style,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Row {
            cells,
            display: Display::Shown,
            style: Style::default(),
        }
    }

    /// Build a row of plain text cells
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Row::new(texts.into_iter().map(Cell::new).collect())
    }
}

/// The one table instance being transformed, read and mutated in place
/// exactly once per invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    /// Header cells in column order; empty means "no header row"
    pub header: Vec<HeaderCell>,
    /// Body rows in document order
    pub body: Vec<Row>,
}

impl Table {
    pub fn new() -> Self {
        Table::default()
    }

    /// Build a table from a header line and plain text rows
    pub fn from_texts<H, R, S, T>(header: H, rows: R) -> Self
    where
        H: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = Vec<T>>,
        T: Into<String>,
    {
        Table {
            header: header.into_iter().map(HeaderCell::new).collect(),
            body: rows.into_iter().map(Row::from_texts).collect(),
        }
    }

    /// Build a table with a header row and an empty body
    pub fn from_header<H, S>(header: H) -> Self
    where
        H: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Table {
            header: header.into_iter().map(HeaderCell::new).collect(),
            body: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.body.push(row);
    }

    /// Number of header columns
    pub fn column_count(&self) -> usize {
        self.header.len()
    }
}
