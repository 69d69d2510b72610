//! Edit descriptors.
//!
//! A `TableEdit` names one user edit intent. Hosts can build them directly
//! or deserialize them from JSON (`{"op": "insert_row", ...}`), then hand
//! them to [`TableState::apply_edit`] to get the patch to persist.

use serde::{Deserialize, Serialize};

use crate::cell::AttributeValue;
use crate::patch::TablePatch;
use crate::section::SectionKind;
use crate::table::TableState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TableEdit {
    InsertRow {
        section: SectionKind,
        index: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        column_count: Option<usize>,
    },
    DeleteRow {
        section: SectionKind,
        index: usize,
    },
    InsertColumn {
        index: usize,
    },
    DeleteColumn {
        section: SectionKind,
        index: usize,
    },
    ToggleSection {
        section: SectionKind,
    },
    UpdateCell {
        section: SectionKind,
        row: usize,
        column: usize,
        #[serde(flatten)]
        value: AttributeValue,
    },
}

impl TableEdit {
    /// True for edits that change the grid shape. Index-based selections
    /// no longer point at the same cells after one of these.
    pub fn is_structural(&self) -> bool {
        !matches!(self, TableEdit::UpdateCell { .. })
    }
}

impl TableState {
    pub fn apply_edit(&self, edit: &TableEdit) -> TablePatch {
        match edit {
            TableEdit::InsertRow { section, index, column_count } => {
                self.insert_row(*section, *index, *column_count)
            }
            TableEdit::DeleteRow { section, index } => self.delete_row(*section, *index),
            TableEdit::InsertColumn { index } => self.insert_column(*index),
            TableEdit::DeleteColumn { section, index } => self.delete_column(*section, *index),
            TableEdit::ToggleSection { section } => self.toggle_section(*section),
            TableEdit::UpdateCell { section, row, column, value } => {
                self.update_cell_attribute(*section, *row, *column, value.clone())
            }
        }
    }
}
