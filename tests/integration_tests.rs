//! Integration tests for the full gridtrim reduction pipeline

use gridtrim::{
    normalize, parse_document, reduce, reduce_with_defaults, render_visible, Cell, ColumnRules,
    EmphasisRule, EmphasisRules, ReducerConfig, Row, RowRules, Table,
};

// ============================================================================
// Normalization invariance
// ============================================================================

mod normalization {
    use super::*;

    #[test]
    fn test_matching_is_layout_insensitive() {
        // Varying internal whitespace and letter case must not change
        // matching outcomes anywhere in the pipeline.
        let variants = ["Binnen Deadline", "binnendeadline", "BINNEN   DEADLINE"];

        for variant in variants {
            let mut table = Table::from_texts([variant, "Open"], vec![vec!["Bob", "1"]]);
            let report = reduce_with_defaults(&mut table);
            assert_eq!(
                report.hidden_columns,
                vec![0],
                "variant {:?} should be suppressed",
                variant
            );
        }
    }

    #[test]
    fn test_normalize_is_the_single_primitive() {
        for variant in ["Gijs  Hofman", "GIJS\u{a0}HOFMAN", "gijshofman"] {
            assert_eq!(normalize(variant), "gijshofman");
        }
    }
}

// ============================================================================
// Ordering invariant: emphasis never paints hidden columns
// ============================================================================

mod ordering {
    use super::*;

    #[test]
    fn test_emphasis_background_skips_hidden_indices() {
        let config = ReducerConfig {
            columns: ColumnRules::new(["secret"]).with_reserved_index(3),
            rows: RowRules::new(Vec::<&str>::new()),
            emphasis: EmphasisRules::new(vec![EmphasisRule::new("target", "#cfe2ff", "#0dcaf0")]),
            key_column: 0,
        };
        let mut table = Table::from_texts(
            ["Name", "Secret", "Open", "Trailing"],
            vec![vec!["Target", "a", "b", "c"]],
        );
        let report = reduce(&mut table, &config);
        assert_eq!(report.hidden_columns, vec![1, 3]);

        let row = &table.body[0];
        // Row-level marker is still applied in full
        assert_eq!(row.style.outline.as_deref(), Some("2px solid #0dcaf0"));
        assert!(row.style.bold);
        // Hidden indices never receive the background
        assert_eq!(row.cells[0].style.background.as_deref(), Some("#cfe2ff"));
        assert_eq!(row.cells[1].style.background, None);
        assert_eq!(row.cells[2].style.background.as_deref(), Some("#cfe2ff"));
        assert_eq!(row.cells[3].style.background, None);
    }
}

// ============================================================================
// End-to-end: parse, reduce, render
// ============================================================================

mod pipeline {
    use super::*;
    use pretty_assertions::assert_eq;

    const STATUS_GRID: &str = "\
# weekly status overview
Uitvoerder || Binnen deadline || Open || Gereed
Gijs Hofman || 2 || eerste ;; tweede ;; derde || 4
Afdeling Servicedesk || 1 || 7 || 2
Totaal || 9 || 12 || 6
  || 0 || 0 || 0
Bob || 1 || 3 || 1
";

    #[test]
    fn test_full_reduction() {
        let mut table = parse_document(STATUS_GRID).expect("grid present");
        let report = reduce_with_defaults(&mut table);

        // "Binnen deadline" and "Gereed" are vocabulary columns
        assert_eq!(report.hidden_columns, vec![1, 3]);
        // "Totaal" and the blank-key row are suppressed
        assert_eq!(report.suppressed_rows, 2);
        // Gijs Hofman and Afdeling Servicedesk are named targets
        assert_eq!(report.emphasized_rows, 2);
        assert_eq!(report.collapsed_items, 2);

        let out = render_visible(&table);
        assert_eq!(
            out,
            "Uitvoerder || Open\n\
             Gijs Hofman || eerste\n\
             Afdeling Servicedesk || 7\n\
             Bob || 3\n"
        );
    }

    #[test]
    fn test_rendered_output_is_stable_under_rerun() {
        let mut table = parse_document(STATUS_GRID).unwrap();
        reduce_with_defaults(&mut table);
        let first = render_visible(&table);

        let second_report = reduce_with_defaults(&mut table);
        assert_eq!(render_visible(&table), first);
        assert_eq!(second_report.collapsed_items, 0);
    }

    #[test]
    fn test_spanning_row_survives_column_suppression() {
        let input = "A || Gereed || C\n@3 Samenvatting over alles\n";
        let mut table = parse_document(input).unwrap();
        reduce_with_defaults(&mut table);

        // The spanning cell sits at index 0 but is never hidden by the
        // column pass, even though column 1 is suppressed.
        let out = render_visible(&table);
        assert!(out.contains("@3 Samenvatting over alles"));
    }

    #[test]
    fn test_locator_absence() {
        assert!(parse_document("").is_none());
        assert!(parse_document("# nothing but comments\n").is_none());
    }
}

// ============================================================================
// Rules files
// ============================================================================

mod rules_files {
    use super::*;

    #[test]
    fn test_toml_rules_drive_the_run() {
        let config = ReducerConfig::from_toml_str(
            r##"
            key_column = 0

            [columns]
            titles = ["noise"]
            reserved_index = 2

            [rows]
            keys = ["footer"]

            [[emphasis]]
            key = "alice"
            background = "#eeeeee"
            border = "#333333"
            "##,
        )
        .unwrap();

        let mut table = Table::from_texts(
            ["Name", "Noise", "Empty"],
            vec![vec!["Alice", "x", "y"], vec!["Footer", "x", "y"]],
        );
        let report = reduce(&mut table, &config);

        assert_eq!(report.hidden_columns, vec![1, 2]);
        assert_eq!(report.suppressed_rows, 1);
        assert_eq!(report.emphasized_rows, 1);
        assert_eq!(
            table.body[0].style.outline.as_deref(),
            Some("2px solid #333333")
        );
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(ReducerConfig::from_toml_str("not valid [").is_err());
        assert!(ReducerConfig::from_toml_str("[columns]\nunknown = true\n").is_err());
    }
}

// ============================================================================
// Model edge cases through the public API
// ============================================================================

mod edge_cases {
    use super::*;

    #[test]
    fn test_row_with_zero_cells_is_harmless() {
        let mut table = Table::from_texts(["A", "B"], vec![vec!["x", "y"]]);
        table.push_row(Row::new(Vec::new()));
        let report = reduce_with_defaults(&mut table);
        assert_eq!(report.suppressed_rows, 0);
    }

    #[test]
    fn test_cell_without_sub_items_is_not_collapsed() {
        let mut table = Table::from_texts(["A", "B"], vec![vec!["x", "plain"]]);
        let report = reduce_with_defaults(&mut table);
        assert_eq!(report.collapsed_items, 0);
        assert_eq!(table.body[0].cells[1].text, "plain");
    }

    #[test]
    fn test_ragged_rows() {
        let mut table = Table::from_texts(
            ["A", "Gereed", "C"],
            vec![vec!["only key"], vec!["x", "y", "z"]],
        );
        let report = reduce_with_defaults(&mut table);
        assert_eq!(report.hidden_columns, vec![1]);
        assert!(table.body[1].cells[1].display.is_hidden());
    }

    #[test]
    fn test_emphasis_key_from_stacked_cell() {
        // The key cell's comparison text includes every sub-item, visible
        // or not, so collapse elsewhere cannot change match outcomes.
        let mut table = Table::from_header(["A", "B"]);
        table.push_row(Row::new(vec![
            Cell::with_items(["Gijs", "Hofman"]),
            Cell::new("x"),
        ]));
        let report = reduce_with_defaults(&mut table);
        assert_eq!(report.emphasized_rows, 1);
    }
}
