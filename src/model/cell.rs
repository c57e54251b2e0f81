//! Cell types and visibility state for the table model

/// Visibility attribute for header cells, body cells, sub-items and rows.
///
/// Hiding is always an attribute flip, never structural removal, so column
/// indices stay stable for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Shown,
    Hidden,
}

impl Display {
    pub fn is_hidden(&self) -> bool {
        matches!(self, Display::Hidden)
    }
}

/// Visual emphasis applied to a row or cell.
///
/// Values are literal style strings (e.g. `"#cfe2ff"`, `"2px solid #0dcaf0"`),
/// never computed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Style {
    /// Background color, e.g. `"#ffc107"`
    pub background: Option<String>,
    /// Outline specification, e.g. `"2px solid #b28704"`
    pub outline: Option<String>,
    /// Bold font weight marker
    pub bold: bool,
}

impl Style {
    /// True when no emphasis has been applied
    pub fn is_plain(&self) -> bool {
        self.background.is_none() && self.outline.is_none() && !self.bold
    }
}

/// One stacked value inside a multi-value cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubItem {
    pub text: String,
    pub display: Display,
}

impl SubItem {
    pub fn new(text: impl Into<String>) -> Self {
        SubItem {
            text: text.into(),
            display: Display::Shown,
        }
    }
}

/// A single body cell: direct text plus an ordered sequence of sub-items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Direct text content (not a sub-item, never collapsed)
    pub text: String,
    /// Stacked sub-items; only the first stays visible after collapse
    pub items: Vec<SubItem>,
    /// Column span; `> 1` marks a spanning/merged cell
    pub colspan: usize,
    pub display: Display,
    pub style: Style,
}

impl Cell {
    /// Create a plain text cell
    pub fn new(text: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            items: Vec::new(),
            colspan: 1,
            display: Display::Shown,
            style: Style::default(),
        }
    }

    /// Create an empty cell
    pub fn empty() -> Self {
        Cell::new("")
    }

    /// Create a cell holding stacked sub-items
    pub fn with_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cell = Cell::empty();
        cell.items = items.into_iter().map(SubItem::new).collect();
        cell
    }

    /// Create a spanning/merged cell covering `colspan` columns
    pub fn spanning(text: impl Into<String>, colspan: usize) -> Self {
        let mut cell = Cell::new(text);
        cell.colspan = colspan.max(1);
        cell
    }

    /// Whether this cell represents a merged/summary region
    pub fn is_spanning(&self) -> bool {
        self.colspan > 1
    }

    /// Full text content: direct text followed by every sub-item's text,
    /// visible or not. Hidden sub-items still contribute, mirroring how the
    /// host's text extraction works, which keeps rule matching stable across
    /// repeated runs.
    pub fn content(&self) -> String {
        let mut out = self.text.clone();
        for item in &self.items {
            out.push_str(&item.text);
        }
        out
    }
}
