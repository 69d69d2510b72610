//! `tablegrid-engine` — structural state of a table block.
//!
//! Pure transforms only: every operation takes the current `TableState`
//! and returns a `TablePatch` for the sections it changed. Rendering,
//! undo history and persistence belong to the host.

pub mod cell;
pub mod config;
pub mod edit;
pub mod error;
pub mod patch;
pub mod section;
pub mod table;

#[cfg(test)]
pub mod harness;

pub use cell::{Alignment, AttributeValue, Cell, CellAttribute, CellTag, RichText};
pub use config::TableSettings;
pub use edit::TableEdit;
pub use error::{Axis, TableError};
pub use patch::TablePatch;
pub use section::{is_empty_table_section, Row, SectionKind};
pub use table::TableState;
