//! Run summary reporting
//!
//! One [`ReduceReport`] is produced per reduction run. The counters make the
//! run observable without inspecting the table: a second run over the same
//! table hides the same columns and rows but collapses zero new sub-items.

use std::fmt;

use crate::core::columns::HiddenColumns;
use crate::core::rows::RowStats;

/// Summary of a single reduction run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReduceReport {
    /// Hidden column indices in discovery order
    pub hidden_columns: Vec<usize>,
    /// Rows hidden by the row-suppression vocabulary
    pub suppressed_rows: usize,
    /// Rows that matched a named emphasis target
    pub emphasized_rows: usize,
    /// Sub-items newly hidden by the collapse step
    pub collapsed_items: usize,
}

impl ReduceReport {
    pub(crate) fn new(hidden: &HiddenColumns, stats: RowStats) -> Self {
        ReduceReport {
            hidden_columns: hidden.iter().collect(),
            suppressed_rows: stats.suppressed_rows,
            emphasized_rows: stats.emphasized_rows,
            collapsed_items: stats.collapsed_items,
        }
    }

    /// Whether the run changed or marked anything at all
    pub fn is_empty(&self) -> bool {
        self.hidden_columns.is_empty()
            && self.suppressed_rows == 0
            && self.emphasized_rows == 0
            && self.collapsed_items == 0
    }

    /// One-line human readable summary
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if !self.hidden_columns.is_empty() {
            parts.push(format!(
                "{} column{} hidden",
                self.hidden_columns.len(),
                if self.hidden_columns.len() == 1 { "" } else { "s" }
            ));
        }
        if self.suppressed_rows > 0 {
            parts.push(format!(
                "{} row{} hidden",
                self.suppressed_rows,
                if self.suppressed_rows == 1 { "" } else { "s" }
            ));
        }
        if self.emphasized_rows > 0 {
            parts.push(format!(
                "{} row{} emphasized",
                self.emphasized_rows,
                if self.emphasized_rows == 1 { "" } else { "s" }
            ));
        }
        if self.collapsed_items > 0 {
            parts.push(format!(
                "{} sub-item{} collapsed",
                self.collapsed_items,
                if self.collapsed_items == 1 { "" } else { "s" }
            ));
        }
        if parts.is_empty() {
            "nothing to reduce".to_string()
        } else {
            parts.join(", ")
        }
    }
}

impl fmt::Display for ReduceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}
