//! Text canonicalization for rule matching
//!
//! Every vocabulary lookup in the crate goes through [`normalize`], so
//! matching is insensitive to letter case and to how the source text is laid
//! out (tabs, multiple spaces, non-breaking spaces).

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Any run of Unicode whitespace, including NBSP
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Canonicalize label text into a comparison key: lowercase with every
/// whitespace character removed.
///
/// Pure, deterministic and idempotent.
///
/// ```
/// use gridtrim::normalize;
///
/// assert_eq!(normalize("Binnen  Deadline"), "binnendeadline");
/// assert_eq!(normalize("BINNEN\tDEADLINE"), "binnendeadline");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    WHITESPACE.replace_all(text, "").to_lowercase()
}
