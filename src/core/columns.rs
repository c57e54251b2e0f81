//! Column suppression
//!
//! Scans the header row once, decides which column indices to hide, hides
//! them in the header and in every body row, and hands the resulting index
//! set forward. Row emphasis later consults that set, so this step must run
//! before row processing.

use indexmap::IndexSet;

use crate::core::rules::ColumnRules;
use crate::model::{Display, Table};

/// The set of column positions removed from visual consideration.
///
/// Computed once by [`suppress_columns`], then consumed read-only: there are
/// no public mutators, so the set cannot drift between the column pass and
/// the row pass. Insertion order is discovery order (header scan order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HiddenColumns {
    indices: IndexSet<usize>,
}

impl HiddenColumns {
    pub fn empty() -> Self {
        HiddenColumns::default()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Hidden indices in discovery order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

/// Hide every column whose normalized header title is in the vocabulary,
/// plus the reserved trailing index, and return the hidden-index set.
///
/// A table with no header row yields an empty set and no mutation. Column
/// order is never changed, only visibility.
pub fn suppress_columns(table: &mut Table, rules: &ColumnRules) -> HiddenColumns {
    let mut indices = IndexSet::new();

    if table.header.is_empty() {
        return HiddenColumns::empty();
    }

    for (index, header) in table.header.iter_mut().enumerate() {
        let by_title = rules.matches(&header.text);
        let by_position = rules.reserved_index == Some(index);

        if by_title || by_position {
            indices.insert(index);
            header.display = Display::Hidden;
        }
    }

    for row in &mut table.body {
        for (index, cell) in row.cells.iter_mut().enumerate() {
            // Spanning cells cover multiple columns and are left alone
            if cell.is_spanning() {
                continue;
            }
            if indices.contains(&index) {
                cell.display = Display::Hidden;
            }
        }
    }

    HiddenColumns { indices }
}
