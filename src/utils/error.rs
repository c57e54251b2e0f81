//! Error types for the adapter boundary
//!
//! The reduction itself is infallible; errors only arise around it, when
//! locating a table, reading input, or loading a rules file.

use std::fmt;

/// Boundary error type
#[derive(Debug, Clone)]
pub enum GridError {
    /// The locator matched no table in the input
    TableNotFound,
    /// Malformed rules file
    Rules { message: String },
    /// IO error (file operations)
    Io { message: String },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::TableNotFound => {
                write!(f, "the main table could not be found in the input")
            }
            GridError::Rules { message } => write!(f, "Rules error: {}", message),
            GridError::Io { message } => write!(f, "IO error: {}", message),
        }
    }
}

impl std::error::Error for GridError {}

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        GridError::Io {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for GridError {
    fn from(err: toml::de::Error) -> Self {
        GridError::Rules {
            message: err.to_string(),
        }
    }
}

impl GridError {
    pub fn rules(message: impl Into<String>) -> Self {
        GridError::Rules {
            message: message.into(),
        }
    }
}

/// Result type for boundary operations
pub type GridResult<T> = Result<T, GridError>;
