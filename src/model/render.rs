//! Rendering the visible state of a table
//!
//! Hidden columns, rows and sub-items are omitted entirely; what remains is
//! printed back in the same grid format [`parse_document`] reads, so output
//! can be piped through again. This is also the canonical "visible state"
//! observation used by the idempotence tests.
//!
//! [`parse_document`]: super::parse::parse_document

use std::fmt::Write;

use super::cell::Cell;
use super::table::Table;

/// Render only the visible parts of the table
pub fn render_visible(table: &Table) -> String {
    let mut out = String::new();

    let titles: Vec<&str> = table
        .header
        .iter()
        .filter(|h| !h.display.is_hidden())
        .map(|h| h.text.as_str())
        .collect();
    if !titles.is_empty() {
        let _ = writeln!(out, "{}", titles.join(" || "));
    }

    for row in &table.body {
        if row.display.is_hidden() {
            continue;
        }
        let cells: Vec<String> = row
            .cells
            .iter()
            .filter(|c| !c.display.is_hidden())
            .map(render_cell)
            .collect();
        let _ = writeln!(out, "{}", cells.join(" || "));
    }

    out
}

fn render_cell(cell: &Cell) -> String {
    let content = if cell.items.is_empty() {
        cell.text.clone()
    } else {
        cell.items
            .iter()
            .filter(|item| !item.display.is_hidden())
            .map(|item| item.text.as_str())
            .collect::<Vec<_>>()
            .join(" ;; ")
    };

    if cell.is_spanning() {
        format!("@{} {}", cell.colspan, content)
    } else {
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell, Display, Row};

    #[test]
    fn test_hidden_parts_are_omitted() {
        let mut table = Table::from_texts(
            ["A", "B", "C"],
            vec![vec!["1", "2", "3"], vec!["4", "5", "6"]],
        );
        table.header[1].display = Display::Hidden;
        table.body[0].cells[1].display = Display::Hidden;
        table.body[1].display = Display::Hidden;

        let out = render_visible(&table);
        assert_eq!(out, "A || C\n1 || 3\n");
    }

    #[test]
    fn test_collapsed_items_render_first_only() {
        let mut table = Table::from_header(["A", "B"]);
        let mut cell = Cell::with_items(["eerste", "tweede"]);
        cell.items[1].display = Display::Hidden;
        table.push_row(Row::new(vec![Cell::new("x"), cell]));

        let out = render_visible(&table);
        assert_eq!(out, "A || B\nx || eerste\n");
    }

    #[test]
    fn test_spanning_cell_keeps_prefix() {
        let mut table = Table::from_header(["A", "B"]);
        table.push_row(Row::new(vec![Cell::spanning("Samenvatting", 2)]));

        let out = render_visible(&table);
        assert!(out.contains("@2 Samenvatting"));
    }

    #[test]
    fn test_roundtrip_through_parser() {
        let source = "A || B || C\n1 || x ;; y || @2 wide\n";
        let table = crate::model::parse::parse_document(source).unwrap();
        // An untouched table renders back to its source form
        assert_eq!(render_visible(&table), "A || B || C\n1 || x ;; y || @2 wide\n");
    }
}
