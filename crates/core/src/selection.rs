//! Transient table selection.
//!
//! A selection lives only in the host's view state: it is never persisted
//! with the table, and any structural edit drops it because row/column
//! indices stop naming the same cells.

use serde::{Deserialize, Serialize};

use tablegrid_engine::{SectionKind, TableEdit, TableState};

use crate::range;

/// Position of one cell. Orders head → body → foot, then by row, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub section: SectionKind,
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    pub fn new(section: SectionKind, row: usize, column: usize) -> Self {
        Self { section, row, column }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Selection {
    #[default]
    Absent,
    /// The cell that holds input focus.
    Cell(Coordinate),
    /// A rectangular span picked with a row, column or table handle.
    Range { from: Coordinate, to: Coordinate },
}

/// Normalized inclusive bounds of a selection.
///
/// Rows are bounded per section: `start_*` is the first selected row in
/// head → body → foot order, `end_*` the last. Columns apply uniformly to
/// every section in the span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionBounds {
    pub start_section: SectionKind,
    pub start_row: usize,
    pub end_section: SectionKind,
    pub end_row: usize,
    pub col_min: usize,
    pub col_max: usize,
}

impl SelectionBounds {
    pub fn spans_section(&self, section: SectionKind) -> bool {
        section >= self.start_section && section <= self.end_section
    }

    pub fn contains_row(&self, section: SectionKind, row: usize) -> bool {
        self.spans_section(section)
            && (section != self.start_section || row >= self.start_row)
            && (section != self.end_section || row <= self.end_row)
    }

    pub fn contains_column(&self, column: usize) -> bool {
        column >= self.col_min && column <= self.col_max
    }

    pub fn contains(&self, section: SectionKind, row: usize, column: usize) -> bool {
        self.contains_row(section, row) && self.contains_column(column)
    }
}

/// A user gesture that changes the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum SelectionIntent {
    FocusCell(Coordinate),
    SelectRow { section: SectionKind, row: usize },
    SelectColumn { column: usize },
    SelectTable,
    /// The host reported that the table lost focus.
    Blur,
}

impl Selection {
    pub fn range(from: Coordinate, to: Coordinate) -> Self {
        Selection::Range { from, to }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Selection::Absent)
    }

    /// Normalized bounds; a cell selection is the one-cell range.
    pub fn bounds(&self) -> Option<SelectionBounds> {
        let (from, to) = match *self {
            Selection::Absent => return None,
            Selection::Cell(cell) => (cell, cell),
            Selection::Range { from, to } => (from, to),
        };

        let (start, end) = if (from.section, from.row) <= (to.section, to.row) {
            (from, to)
        } else {
            (to, from)
        };

        Some(SelectionBounds {
            start_section: start.section,
            start_row: start.row,
            end_section: end.section,
            end_row: end.row,
            col_min: from.column.min(to.column),
            col_max: from.column.max(to.column),
        })
    }

    /// The cell toolbar actions operate on: the focused cell, or the
    /// top-left cell of a range.
    pub fn anchor(&self) -> Option<Coordinate> {
        self.bounds()
            .map(|b| Coordinate::new(b.start_section, b.start_row, b.col_min))
    }

    pub fn transition(&self, table: &TableState, intent: SelectionIntent) -> Selection {
        let next = match intent {
            SelectionIntent::FocusCell(cell) => Selection::Cell(cell),
            SelectionIntent::SelectRow { section, row } => {
                match (
                    range::horizontal_selection_range_start(table, section, row),
                    range::horizontal_selection_range_end(table, section, row),
                ) {
                    (Some(from), Some(to)) => Selection::range(from, to),
                    _ => Selection::Absent,
                }
            }
            SelectionIntent::SelectColumn { column } if column < table.max_column_count() => {
                Self::vertical(table, Some(column))
            }
            SelectionIntent::SelectColumn { .. } => Selection::Absent,
            SelectionIntent::SelectTable => Self::vertical(table, None),
            SelectionIntent::Blur => Selection::Absent,
        };

        log::trace!("selection {:?} -> {:?} on {:?}", self, next, intent);
        next
    }

    /// Selection to keep after `edit` was applied.
    pub fn after_edit(&self, edit: &TableEdit) -> Selection {
        if edit.is_structural() && !self.is_absent() {
            log::trace!("selection dropped by structural edit {:?}", edit);
            return Selection::Absent;
        }
        *self
    }

    fn vertical(table: &TableState, column: Option<usize>) -> Selection {
        match (
            range::vertical_selection_range_start(table, column),
            range::vertical_selection_range_end(table, column),
        ) {
            (Some(from), Some(to)) => Selection::range(from, to),
            _ => Selection::Absent,
        }
    }
}
