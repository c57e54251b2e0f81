//! Row processing: suppression, sub-item collapse and emphasis
//!
//! Each body row is processed independently and exactly once. The
//! hidden-column-index set from the column pass is consumed read-only here;
//! emphasis backgrounds only touch cells whose index survived suppression.

use crate::core::columns::HiddenColumns;
use crate::core::normalize::normalize;
use crate::core::rules::ReducerConfig;
use crate::model::{Display, Table};

/// Per-run counters produced by [`process_rows`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowStats {
    /// Rows hidden by the row-suppression vocabulary
    pub suppressed_rows: usize,
    /// Rows that matched a named emphasis target
    pub emphasized_rows: usize,
    /// Sub-items newly hidden by the collapse step
    pub collapsed_items: usize,
}

/// Process every body row in document order.
///
/// Per row: the key cell is checked against the row-suppression vocabulary
/// first (a match hides the row and stops all further processing for it);
/// surviving rows have their secondary cell content collapsed to the first
/// sub-item; finally the key cell is checked against the emphasis targets
/// and, on a match, the rule's styling is applied to the row and to every
/// cell not in `hidden`.
///
/// Rows without a cell at the key-column index are skipped silently.
pub fn process_rows(
    table: &mut Table,
    hidden: &HiddenColumns,
    config: &ReducerConfig,
) -> RowStats {
    let mut stats = RowStats::default();

    for row in &mut table.body {
        let Some(key_cell) = row.cells.get(config.key_column) else {
            continue;
        };
        let key = normalize(&key_cell.content());

        if config.rows.contains_key(&key) {
            row.display = Display::Hidden;
            stats.suppressed_rows += 1;
            continue;
        }

        // Collapse runs for every surviving row, emphasized or not. The key
        // column and spanning cells keep their full content.
        for (index, cell) in row.cells.iter_mut().enumerate() {
            if index == 0 || cell.is_spanning() {
                continue;
            }
            for item in cell.items.iter_mut().skip(1) {
                if !item.display.is_hidden() {
                    item.display = Display::Hidden;
                    stats.collapsed_items += 1;
                }
            }
        }

        if let Some(rule) = config.emphasis.find_key(&key) {
            row.style.outline = Some(format!("2px solid {}", rule.border));
            row.style.bold = true;

            // Background goes on surviving columns only; cells at hidden
            // indices stay untouched. This is an index-set check, not a
            // spanning check.
            for (index, cell) in row.cells.iter_mut().enumerate() {
                if !hidden.contains(index) {
                    cell.style.background = Some(rule.background.clone());
                }
            }
            stats.emphasized_rows += 1;
        }
    }

    stats
}
