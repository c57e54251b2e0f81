//! Shipped rule vocabulary for the helpdesk status overview
//!
//! These are the stock rule tables the reducer was built around: the column
//! titles and row keys of the status overview grid, the reserved index of its
//! trailing empty column, and the emphasis palette for the named targets.
//! All of it is plain data; callers can swap in their own
//! [`ReducerConfig`](crate::core::rules::ReducerConfig) without touching the
//! matching logic.

use crate::core::rules::EmphasisRule;

/// Position of the key cell compared against the row-suppression and
/// emphasis vocabularies
pub const KEY_COLUMN_INDEX: usize = 0;

/// Index of the trailing structurally-empty column; it carries no stable
/// title, so it is suppressed by position rather than by vocabulary
pub const RESERVED_TRAILING_INDEX: usize = 13;

/// Column titles suppressed in full (whitespace and case are ignored)
pub const HIDDEN_COLUMN_TITLES: [&str; 7] = [
    "binnen deadline",
    "totaal alle statussen",
    "gereed",
    "gereed vol",
    "eind arc",
    "vrp",
    "exact",
];

/// Key-cell values whose rows are suppressed in full. The single-space entry
/// suppresses rows with a blank key cell.
pub const HIDDEN_ROW_KEYS: [&str; 17] = [
    "totaal",
    "ticket soorten",
    "administratie",
    "bestellingen",
    "engineering",
    "nieuw/ opzegging/ aanpassing - oc | vast",
    "nieuw/ opzegging/ aanpassing - overige | vast",
    "nieuw/ opzegging/ verlenging/ np | mobiel",
    "project",
    "verzoek binnendienst",
    "verzoek servicedesk",
    "werkzaamheden intern",
    "uitvoerders",
    "sales am",
    "sales ondersteuning",
    "verlenging en nieuw",
    " ",
];

/// Stock emphasis targets: key-cell value, background color, border color
pub fn default_emphasis() -> Vec<EmphasisRule> {
    vec![
        EmphasisRule::new("Gijs Hofman", "#cfe2ff", "#0dcaf0"),
        EmphasisRule::new("Afdeling Servicedesk", "#ffc107", "#b28704"),
        EmphasisRule::new("storing / issue", "#f5d7f3", "#a893a7"),
    ]
}
