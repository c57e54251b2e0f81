//! # gridtrim
//!
//! Rule-driven reducer for rendered status grids.
//!
//! Given a table of rows and columns, gridtrim:
//!
//! - suppresses whole columns whose header title matches a configured
//!   vocabulary (plus one reserved trailing index)
//! - suppresses whole rows whose key cell matches a configured vocabulary
//! - collapses multi-value cells down to their first visible sub-item
//! - emphasizes rows matching a named target, painting only the columns
//!   that survived suppression
//!
//! Everything is driven by rule tables - plain data that can be swapped or
//! loaded from a TOML file - and all matching is whitespace- and
//! case-insensitive. Hiding is a visibility flip, never structural removal,
//! so column indices stay stable throughout a run.
//!
//! ## Usage
//!
//! ```rust
//! use gridtrim::{reduce, ReducerConfig, Table};
//!
//! let mut table = Table::from_texts(
//!     ["Uitvoerder", "Binnen deadline", "Open"],
//!     vec![
//!         vec!["Gijs Hofman", "2", "5"],
//!         vec!["Totaal", "9", "12"],
//!     ],
//! );
//!
//! let report = reduce(&mut table, &ReducerConfig::default());
//!
//! // "Binnen deadline" is in the stock column vocabulary
//! assert_eq!(report.hidden_columns, vec![1]);
//! // the "Totaal" summary row is gone, the named target is emphasized
//! assert_eq!(report.suppressed_rows, 1);
//! assert!(table.body[0].style.bold);
//! ```
//!
//! ## Custom rules
//!
//! ```rust
//! use gridtrim::{reduce, ColumnRules, EmphasisRules, ReducerConfig, RowRules, Table};
//!
//! let config = ReducerConfig {
//!     columns: ColumnRules::new(["internal id"]).with_reserved_index(5),
//!     rows: RowRules::new(["subtotal", " "]),
//!     emphasis: EmphasisRules::default(),
//!     key_column: 0,
//! };
//!
//! let mut table = Table::from_texts(
//!     ["Name", "Internal  ID", "Open"],
//!     vec![vec!["Subtotal", "77", "3"]],
//! );
//! let report = reduce(&mut table, &config);
//! assert_eq!(report.hidden_columns, vec![1]);
//! assert_eq!(report.suppressed_rows, 1);
//! ```

/// Core reduction pipeline
pub mod core;

/// Data layer - shipped rule vocabularies
pub mod data;

/// Table model, parsing and rendering
pub mod model;

/// Utility modules
pub mod utils;

// Re-export the public API
pub use crate::core::{
    normalize, process_rows, reduce, suppress_columns, ColumnRules, EmphasisRule, EmphasisRules,
    HiddenColumns, ReducerConfig, RowRules, RowStats,
};
pub use crate::model::{
    parse_document, render_visible, Cell, Display, HeaderCell, Row, Style, SubItem, Table,
};
pub use crate::utils::error::{GridError, GridResult};
pub use crate::utils::report::ReduceReport;

/// Reduce a table with the shipped status-overview rule tables
pub fn reduce_with_defaults(table: &mut Table) -> ReduceReport {
    reduce(table, &ReducerConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_with_defaults() {
        let mut table = Table::from_texts(
            ["Uitvoerder", "Gereed", "Open"],
            vec![vec!["Afdeling Servicedesk", "1", "2"]],
        );
        let report = reduce_with_defaults(&mut table);

        assert_eq!(report.hidden_columns, vec![1]);
        assert_eq!(report.emphasized_rows, 1);
        assert_eq!(
            table.body[0].style.outline.as_deref(),
            Some("2px solid #b28704")
        );
    }

    #[test]
    fn test_parse_reduce_render_pipeline() {
        let input = "Uitvoerder || Gereed || Open\n\
                     Gijs Hofman || 4 || a ;; b\n\
                     Totaal || 9 || 9\n";
        let mut table = parse_document(input).unwrap();
        reduce_with_defaults(&mut table);

        let out = render_visible(&table);
        assert_eq!(out, "Uitvoerder || Open\nGijs Hofman || a\n");
    }
}
