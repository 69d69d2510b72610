//! Selection range geometry.
//!
//! Head, body and foot render as one continuous grid, so a range may start
//! in one section and end in another. Rows are compared within the
//! (section, row) ordering; columns are shared by every section.

use tablegrid_engine::{SectionKind, TableState};

use crate::selection::{Coordinate, Selection};

// =============================================================================
// Range endpoints
// =============================================================================

/// First cell of a whole-column selection, or of the whole table when
/// `column` is `None`: row 0 of the first non-empty section.
pub fn vertical_selection_range_start(table: &TableState, column: Option<usize>) -> Option<Coordinate> {
    let section = table.first_non_empty_section()?;
    Some(Coordinate::new(section, 0, column.unwrap_or(0)))
}

/// Last cell of a whole-column (or whole-table) selection: the last row of
/// the last non-empty section. A whole-table range ends at the widest
/// section's last column, so narrower sections never clip it.
pub fn vertical_selection_range_end(table: &TableState, column: Option<usize>) -> Option<Coordinate> {
    let section = table.last_non_empty_section()?;
    let row = table.row_count(section) - 1;
    let column = column.unwrap_or_else(|| table.max_column_count().saturating_sub(1));
    Some(Coordinate::new(section, row, column))
}

pub fn horizontal_selection_range_start(table: &TableState, section: SectionKind, row: usize) -> Option<Coordinate> {
    table.section(section).get(row)?;
    Some(Coordinate::new(section, row, 0))
}

pub fn horizontal_selection_range_end(table: &TableState, section: SectionKind, row: usize) -> Option<Coordinate> {
    let cells = &table.section(section).get(row)?.cells;
    Some(Coordinate::new(section, row, cells.len().saturating_sub(1)))
}

// =============================================================================
// Classification
// =============================================================================

pub fn is_cell_in_selection_range(selection: &Selection, section: SectionKind, row: usize, column: usize) -> bool {
    selection
        .bounds()
        .is_some_and(|b| b.contains(section, row, column))
}

/// True when `row` is the first selected row of the range.
pub fn is_top_of_selection_range(selection: &Selection, section: SectionKind, row: usize) -> bool {
    selection
        .bounds()
        .is_some_and(|b| b.start_section == section && b.start_row == row)
}

/// True when `row` is the last selected row of the range.
pub fn is_bottom_of_selection_range(selection: &Selection, section: SectionKind, row: usize) -> bool {
    selection
        .bounds()
        .is_some_and(|b| b.end_section == section && b.end_row == row)
}

pub fn is_left_of_selection_range(selection: &Selection, section: SectionKind, column: usize) -> bool {
    selection
        .bounds()
        .is_some_and(|b| b.spans_section(section) && b.col_min == column)
}

pub fn is_right_of_selection_range(selection: &Selection, section: SectionKind, column: usize) -> bool {
    selection
        .bounds()
        .is_some_and(|b| b.spans_section(section) && b.col_max == column)
}

/// Render state of one cell against the active selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellHighlight {
    pub selected: bool,
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

/// Membership plus border edges. Edges are only reported for selected
/// cells, so a border is never drawn on a cell outside the range.
pub fn classify_cell(selection: &Selection, section: SectionKind, row: usize, column: usize) -> CellHighlight {
    if !is_cell_in_selection_range(selection, section, row, column) {
        return CellHighlight::default();
    }
    CellHighlight {
        selected: true,
        top: is_top_of_selection_range(selection, section, row),
        bottom: is_bottom_of_selection_range(selection, section, row),
        left: is_left_of_selection_range(selection, section, column),
        right: is_right_of_selection_range(selection, section, column),
    }
}

/// Every existing cell inside the selection, in render order.
pub fn selected_cells(table: &TableState, selection: &Selection) -> Vec<Coordinate> {
    let Some(bounds) = selection.bounds() else {
        return Vec::new();
    };

    let mut cells = Vec::new();
    for section in SectionKind::ALL {
        if !bounds.spans_section(section) {
            continue;
        }
        for (row, r) in table.section(section).iter().enumerate() {
            if !bounds.contains_row(section, row) {
                continue;
            }
            for column in 0..r.cells.len() {
                if bounds.contains_column(column) {
                    cells.push(Coordinate::new(section, row, column));
                }
            }
        }
    }
    cells
}
