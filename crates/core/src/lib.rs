//! `tablegrid-core` — selection and range geometry over a table grid.
//!
//! Reads table shape from `tablegrid-engine` but never edits it.

pub mod actions;
pub mod range;
pub mod selection;

#[cfg(test)]
mod test_support;

pub use actions::TableAction;
pub use range::{
    classify_cell, horizontal_selection_range_end, horizontal_selection_range_start,
    is_bottom_of_selection_range, is_cell_in_selection_range, is_left_of_selection_range,
    is_right_of_selection_range, is_top_of_selection_range, selected_cells,
    vertical_selection_range_end, vertical_selection_range_start, CellHighlight,
};
pub use selection::{Coordinate, Selection, SelectionBounds, SelectionIntent};
pub use tablegrid_engine::is_empty_table_section;
