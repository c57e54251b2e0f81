//! In-memory table model
//!
//! The model mirrors a rendered grid: one header section and a body of rows,
//! where every entity carries a visibility attribute instead of being
//! removed. Indices therefore stay stable for the lifetime of a run, which
//! later processing relies on when it addresses cells by original position.

pub mod cell;
pub mod parse;
pub mod render;
pub mod table;

// Re-export commonly used items
pub use cell::{Cell, Display, Style, SubItem};
pub use parse::parse_document;
pub use render::render_visible;
pub use table::{HeaderCell, Row, Table};
