//! Core reduction pipeline
//!
//! Three components composed in strict sequence on a single table instance:
//!
//! 1. [`normalize`] - canonicalizes label text into a comparison key; the
//!    single comparison primitive used everywhere else.
//! 2. [`suppress_columns`] - scans the header once, hides matching columns
//!    and produces the hidden-column-index set.
//! 3. [`process_rows`] - suppresses, collapses and emphasizes body rows,
//!    consulting the hidden set so emphasis never paints hidden cells.
//!
//! The hidden set is threaded explicitly from step 2 into step 3; running
//! column suppression after row emphasis would incorrectly paint now-hidden
//! cells, so [`reduce`] owns the ordering.

pub mod columns;
pub mod normalize;
pub mod rows;
pub mod rules;


// Re-export public API
pub use columns::{suppress_columns, HiddenColumns};
pub use normalize::normalize;
pub use rows::{process_rows, RowStats};
pub use rules::{ColumnRules, EmphasisRule, EmphasisRules, ReducerConfig, RowRules};

use crate::model::Table;
use crate::utils::report::ReduceReport;

/// Run the full reduction on a table: column suppression first, then row
/// processing against the resulting hidden-index set.
///
/// The whole transformation is synchronous, one-shot and idempotent: running
/// it twice leaves the same visible state as running it once.
///
/// ```
/// use gridtrim::{reduce, ReducerConfig, Table};
///
/// let mut table = Table::from_texts(
///     ["Uitvoerder", "Binnen deadline", "Open"],
///     vec![vec!["Gijs Hofman", "2", "5"], vec!["Totaal", "9", "12"]],
/// );
/// let report = reduce(&mut table, &ReducerConfig::default());
///
/// assert_eq!(report.hidden_columns, vec![1]);
/// assert_eq!(report.suppressed_rows, 1);
/// assert_eq!(report.emphasized_rows, 1);
/// ```
pub fn reduce(table: &mut Table, config: &ReducerConfig) -> ReduceReport {
    let hidden = suppress_columns(table, &config.columns);
    let stats = process_rows(table, &hidden, config);
    ReduceReport::new(&hidden, stats)
}
