//! Rule-set configuration for column suppression, row suppression and
//! row emphasis
//!
//! The vocabularies are pure data passed into the components, not code
//! branches: they can be swapped or loaded from a TOML file without touching
//! the matching logic. Every vocabulary entry is normalized with
//! [`normalize`] at construction time, so lookups are whitespace- and
//! case-insensitive.

use fxhash::FxHashSet;
use serde::Deserialize;

use crate::core::normalize::normalize;
use crate::data::defaults;
use crate::utils::error::{GridError, GridResult};

/// Which columns to suppress: a title vocabulary plus an optional fixed
/// trailing index for a structurally-empty column that carries no stable
/// title.
#[derive(Debug, Clone)]
pub struct ColumnRules {
    titles: FxHashSet<String>,
    /// Positional escape hatch; the column at this index is always hidden
    pub reserved_index: Option<usize>,
}

impl ColumnRules {
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ColumnRules {
            titles: titles.into_iter().map(|t| normalize(t.as_ref())).collect(),
            reserved_index: None,
        }
    }

    pub fn with_reserved_index(mut self, index: usize) -> Self {
        self.reserved_index = Some(index);
        self
    }

    /// Whether a header title matches the suppression vocabulary
    pub fn matches(&self, title: &str) -> bool {
        self.contains_key(&normalize(title))
    }

    pub(crate) fn contains_key(&self, key: &str) -> bool {
        self.titles.contains(key)
    }
}

impl Default for ColumnRules {
    fn default() -> Self {
        ColumnRules::new(defaults::HIDDEN_COLUMN_TITLES)
            .with_reserved_index(defaults::RESERVED_TRAILING_INDEX)
    }
}

/// Which rows to suppress, keyed on the leading cell's text.
///
/// A whitespace-only vocabulary entry normalizes to `""`, so rows whose key
/// cell is blank are suppressed as well.
#[derive(Debug, Clone)]
pub struct RowRules {
    keys: FxHashSet<String>,
}

impl RowRules {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        RowRules {
            keys: keys.into_iter().map(|k| normalize(k.as_ref())).collect(),
        }
    }

    /// Whether a key-cell text matches the suppression vocabulary
    pub fn matches(&self, text: &str) -> bool {
        self.contains_key(&normalize(text))
    }

    pub(crate) fn contains_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

impl Default for RowRules {
    fn default() -> Self {
        RowRules::new(defaults::HIDDEN_ROW_KEYS)
    }
}

/// A named emphasis target: key-cell value mapped to a background and a
/// border/outline color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmphasisRule {
    key: String,
    pub background: String,
    pub border: String,
}

impl EmphasisRule {
    pub fn new(
        key: impl AsRef<str>,
        background: impl Into<String>,
        border: impl Into<String>,
    ) -> Self {
        EmphasisRule {
            key: normalize(key.as_ref()),
            background: background.into(),
            border: border.into(),
        }
    }

    /// The normalized comparison key
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Ordered emphasis rule list; first match wins. The vocabulary is expected
/// to be mutually exclusive in practice.
#[derive(Debug, Clone, Default)]
pub struct EmphasisRules {
    rules: Vec<EmphasisRule>,
}

impl EmphasisRules {
    pub fn new(rules: Vec<EmphasisRule>) -> Self {
        EmphasisRules { rules }
    }

    /// Look up the first rule matching a key-cell text
    pub fn find(&self, text: &str) -> Option<&EmphasisRule> {
        self.find_key(&normalize(text))
    }

    pub(crate) fn find_key(&self, key: &str) -> Option<&EmphasisRule> {
        self.rules.iter().find(|rule| rule.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

/// Full configuration threaded through one reduction run
#[derive(Debug, Clone)]
pub struct ReducerConfig {
    pub columns: ColumnRules,
    pub rows: RowRules,
    pub emphasis: EmphasisRules,
    /// Index of the cell compared against the row-suppression and emphasis
    /// vocabularies
    pub key_column: usize,
}

impl Default for ReducerConfig {
    fn default() -> Self {
        ReducerConfig {
            columns: ColumnRules::default(),
            rows: RowRules::default(),
            emphasis: EmphasisRules::new(defaults::default_emphasis()),
            key_column: defaults::KEY_COLUMN_INDEX,
        }
    }
}

impl ReducerConfig {
    /// Parse a TOML rules file. Missing sections fall back to the shipped
    /// defaults, so a partial file only overrides what it names.
    ///
    /// ```
    /// use gridtrim::ReducerConfig;
    ///
    /// let config = ReducerConfig::from_toml_str(r##"
    ///     key_column = 0
    ///
    ///     [columns]
    ///     titles = ["Binnen deadline"]
    ///     reserved_index = 13
    ///
    ///     [rows]
    ///     keys = ["Totaal", " "]
    ///
    ///     [[emphasis]]
    ///     key = "Gijs Hofman"
    ///     background = "#cfe2ff"
    ///     border = "#0dcaf0"
    /// "##).unwrap();
    /// assert!(config.columns.matches("BINNEN   DEADLINE"));
    /// assert!(config.rows.matches("totaal"));
    /// assert_eq!(config.emphasis.len(), 1);
    /// ```
    pub fn from_toml_str(input: &str) -> GridResult<ReducerConfig> {
        let file: RulesFile = toml::from_str(input).map_err(GridError::from)?;
        Ok(file.into())
    }
}

// Raw mirror of the TOML rules file; normalization happens on conversion.

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RulesFile {
    columns: ColumnSection,
    rows: RowSection,
    emphasis: Option<Vec<EmphasisEntry>>,
    key_column: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ColumnSection {
    titles: Option<Vec<String>>,
    reserved_index: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RowSection {
    keys: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct EmphasisEntry {
    key: String,
    background: String,
    border: String,
}

impl From<RulesFile> for ReducerConfig {
    fn from(file: RulesFile) -> Self {
        let mut columns = match file.columns.titles {
            Some(titles) => ColumnRules::new(titles),
            None => ColumnRules::default(),
        };
        columns.reserved_index = file
            .columns
            .reserved_index
            .or(Some(defaults::RESERVED_TRAILING_INDEX));

        let rows = match file.rows.keys {
            Some(keys) => RowRules::new(keys),
            None => RowRules::default(),
        };

        let emphasis = match file.emphasis {
            Some(entries) => EmphasisRules::new(
                entries
                    .into_iter()
                    .map(|e| EmphasisRule::new(e.key, e.background, e.border))
                    .collect(),
            ),
            None => EmphasisRules::new(defaults::default_emphasis()),
        };

        ReducerConfig {
            columns,
            rows,
            emphasis,
            key_column: file.key_column.unwrap_or(defaults::KEY_COLUMN_INDEX),
        }
    }
}
