//! Text-grid parsing: the table locator for the CLI
//!
//! The grid format is line oriented:
//!
//! ```text
//! # comment
//! Uitvoerder || Binnen deadline || Open
//! Gijs Hofman || 3 || eerste ;; tweede ;; derde
//! @2 Samenvatting over twee kolommen || 9
//! ```
//!
//! - the first content line is the header row
//! - cells are separated by `||`, sub-items inside a cell by `;;`
//! - a cell starting with `@N ` spans N columns
//! - `#` lines and blank lines are ignored
//!
//! [`parse_document`] is the locator: it yields the one table the input
//! contains, or `None` when there is nothing to transform. Absence is the
//! caller's single diagnostic, not an error raised here.

use lazy_static::lazy_static;
use regex::Regex;

use super::cell::Cell;
use super::table::{HeaderCell, Row, Table};

lazy_static! {
    /// `@N ` span prefix on a cell
    static ref SPAN_PREFIX: Regex = Regex::new(r"^@(\d+)\s+(.*)$").unwrap();
}

/// Locate and parse the table in a grid document.
///
/// Returns `None` when the input holds no content lines at all.
pub fn parse_document(input: &str) -> Option<Table> {
    let mut lines = input
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'));

    let header_line = lines.next()?;
    let mut table = Table::new();
    table.header = header_line
        .split("||")
        .map(|title| HeaderCell::new(title.trim()))
        .collect();

    for line in lines {
        let cells = line.split("||").map(|raw| parse_cell(raw.trim())).collect();
        table.push_row(Row::new(cells));
    }

    Some(table)
}

fn parse_cell(raw: &str) -> Cell {
    let (colspan, content) = match SPAN_PREFIX.captures(raw) {
        Some(caps) => {
            let span = caps[1].parse::<usize>().unwrap_or(1);
            (span, caps[2].trim().to_string())
        }
        None => (1, raw.to_string()),
    };

    let mut cell = if content.contains(";;") {
        Cell::with_items(content.split(";;").map(str::trim))
    } else {
        Cell::new(content)
    };
    cell.colspan = colspan.max(1);
    cell
}
