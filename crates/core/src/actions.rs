//! Toolbar actions relative to the current selection.

use serde::{Deserialize, Serialize};

use tablegrid_engine::{SectionKind, TableEdit, TableState};

use crate::selection::Selection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableAction {
    InsertRowBefore,
    InsertRowAfter,
    DeleteRow,
    InsertColumnBefore,
    InsertColumnAfter,
    DeleteColumn,
}

impl TableAction {
    pub const ALL: [TableAction; 6] = [
        TableAction::InsertRowBefore,
        TableAction::InsertRowAfter,
        TableAction::DeleteRow,
        TableAction::InsertColumnBefore,
        TableAction::InsertColumnAfter,
        TableAction::DeleteColumn,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::InsertRowBefore => "Insert row before",
            Self::InsertRowAfter => "Insert row after",
            Self::DeleteRow => "Delete row",
            Self::InsertColumnBefore => "Insert column before",
            Self::InsertColumnAfter => "Insert column after",
            Self::DeleteColumn => "Delete column",
        }
    }

    /// Edit for this action against the selection, or `None` with nothing
    /// selected.
    ///
    /// "Before" actions and deletes act on the range's top-left cell; "after"
    /// actions insert past its bottom row or right column.
    pub fn resolve(&self, selection: &Selection, table: &TableState) -> Option<TableEdit> {
        let bounds = selection.bounds()?;
        let row_width = |section: SectionKind, row: usize| {
            table.section(section).get(row).map(|r| r.len())
        };

        let (top, bottom) = (bounds.start_section, bounds.end_section);
        let edit = match self {
            Self::InsertRowBefore => TableEdit::InsertRow {
                section: top,
                index: bounds.start_row,
                column_count: row_width(top, bounds.start_row),
            },
            Self::InsertRowAfter => TableEdit::InsertRow {
                section: bottom,
                index: bounds.end_row.saturating_add(1),
                column_count: row_width(bottom, bounds.end_row),
            },
            Self::DeleteRow => TableEdit::DeleteRow { section: top, index: bounds.start_row },
            Self::InsertColumnBefore => TableEdit::InsertColumn { index: bounds.col_min },
            Self::InsertColumnAfter => TableEdit::InsertColumn { index: bounds.col_max.saturating_add(1) },
            Self::DeleteColumn => TableEdit::DeleteColumn { section: top, index: bounds.col_min },
        };
        Some(edit)
    }
}
