//! Utility modules
//!
//! - Error types for the adapter boundary
//! - Run summary reporting

pub mod error;
pub mod report;

// Re-export commonly used items
pub use error::{GridError, GridResult};
pub use report::ReduceReport;
