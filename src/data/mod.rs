//! Data layer - shipped rule vocabularies and constants

pub mod defaults;

// Re-export commonly used items
pub use defaults::{
    default_emphasis, HIDDEN_COLUMN_TITLES, HIDDEN_ROW_KEYS, KEY_COLUMN_INDEX,
    RESERVED_TRAILING_INDEX,
};
