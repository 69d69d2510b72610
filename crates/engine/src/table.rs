use serde::{Deserialize, Serialize};

use crate::cell::{AttributeValue, Cell, CellAttribute, RichText};
use crate::error::{Axis, TableError};
use crate::patch::TablePatch;
use crate::section::{section_column_count, Row, SectionKind};

/// Structural state of a table block: three independent row sequences.
///
/// All edit operations borrow the state immutably and return a
/// [`TablePatch`]; nothing here mutates in place except [`TableState::apply`].
/// Out-of-range row/column indices are tolerated: mutations become no-ops
/// and lookups return `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableState {
    pub head: Vec<Row>,
    pub body: Vec<Row>,
    pub foot: Vec<Row>,
}

impl TableState {
    /// Build a table with a `rows` × `columns` body and no head or foot.
    pub fn create(rows: usize, columns: usize) -> Result<Self, TableError> {
        if rows == 0 {
            return Err(TableError::InvalidDimension { axis: Axis::Rows, value: rows });
        }
        if columns == 0 {
            return Err(TableError::InvalidDimension { axis: Axis::Columns, value: columns });
        }

        log::debug!("create table {rows}x{columns}");
        Ok(Self {
            head: Vec::new(),
            body: (0..rows).map(|_| Row::new(SectionKind::Body, columns)).collect(),
            foot: Vec::new(),
        })
    }

    pub fn from_json(input: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn to_json(&self) -> Result<String, TableError> {
        Ok(serde_json::to_string(self)?)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn section(&self, kind: SectionKind) -> &[Row] {
        match kind {
            SectionKind::Head => &self.head,
            SectionKind::Body => &self.body,
            SectionKind::Foot => &self.foot,
        }
    }

    pub fn row_count(&self, kind: SectionKind) -> usize {
        self.section(kind).len()
    }

    /// Cells-per-row of the first non-empty section (0 for an empty table).
    pub fn column_count(&self) -> usize {
        self.first_non_empty_section()
            .and_then(|kind| section_column_count(self.section(kind)))
            .unwrap_or(0)
    }

    /// Widest row across all sections. Differs from `column_count` once a
    /// section-scoped column delete has narrowed one section.
    pub fn max_column_count(&self) -> usize {
        SectionKind::ALL
            .into_iter()
            .flat_map(|kind| self.section(kind).iter())
            .map(Row::len)
            .max()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_empty() && self.body.is_empty() && self.foot.is_empty()
    }

    pub fn first_non_empty_section(&self) -> Option<SectionKind> {
        SectionKind::ALL
            .into_iter()
            .find(|kind| !self.section(*kind).is_empty())
    }

    pub fn last_non_empty_section(&self) -> Option<SectionKind> {
        SectionKind::ALL
            .into_iter()
            .rev()
            .find(|kind| !self.section(*kind).is_empty())
    }

    pub fn cell(&self, section: SectionKind, row: usize, column: usize) -> Option<&Cell> {
        self.section(section).get(row)?.cells.get(column)
    }

    pub fn get_cell_attribute(
        &self,
        section: SectionKind,
        row: usize,
        column: usize,
        attribute: CellAttribute,
    ) -> Option<AttributeValue> {
        self.cell(section, row, column)?.get(attribute)
    }

    /// Merge a patch into this state.
    pub fn apply(&mut self, patch: TablePatch) {
        patch.apply_to(self);
    }

    // =========================================================================
    // Cell updates
    // =========================================================================

    /// Replace one attribute of one cell. Every other row is carried over as is.
    pub fn update_cell_attribute(
        &self,
        section: SectionKind,
        row: usize,
        column: usize,
        value: AttributeValue,
    ) -> TablePatch {
        let rows = self.section(section);
        if self.cell(section, row, column).is_none() {
            log::warn!("update of {} ignored: {section}[{row}][{column}] out of range", value.attribute());
            return TablePatch::section(section, rows.to_vec());
        }

        let updated = rows
            .iter()
            .enumerate()
            .map(|(r, existing)| {
                if r != row {
                    return existing.clone();
                }
                Row {
                    cells: existing
                        .cells
                        .iter()
                        .enumerate()
                        .map(|(c, cell)| if c == column { cell.with(value.clone()) } else { cell.clone() })
                        .collect(),
                }
            })
            .collect();

        TablePatch::section(section, updated)
    }

    pub fn update_cell_content(
        &self,
        section: SectionKind,
        row: usize,
        column: usize,
        content: impl Into<RichText>,
    ) -> TablePatch {
        self.update_cell_attribute(section, row, column, AttributeValue::Content(content.into()))
    }

    // =========================================================================
    // Row operations
    // =========================================================================

    /// Insert one row at `row_index` (equal to the row count appends).
    ///
    /// The new row has `column_count` cells, or as many as the section's
    /// first row. An empty section with no explicit count falls back to the
    /// table's column count, then to 1.
    pub fn insert_row(
        &self,
        section: SectionKind,
        row_index: usize,
        column_count: Option<usize>,
    ) -> TablePatch {
        let rows = self.section(section);
        if row_index > rows.len() {
            log::warn!("insert row ignored: {section}[{row_index}] beyond {} rows", rows.len());
            return TablePatch::section(section, rows.to_vec());
        }

        let columns = column_count
            .or_else(|| section_column_count(rows))
            .unwrap_or_else(|| self.column_count().max(1));

        let mut updated = rows.to_vec();
        updated.insert(row_index, Row::new(section, columns));
        log::debug!("insert row {section}[{row_index}] ({columns} cells), {} rows", updated.len());
        TablePatch::section(section, updated)
    }

    pub fn delete_row(&self, section: SectionKind, row_index: usize) -> TablePatch {
        let rows = self.section(section);
        if row_index >= rows.len() {
            log::warn!("delete row ignored: {section}[{row_index}] beyond {} rows", rows.len());
            return TablePatch::section(section, rows.to_vec());
        }

        let mut updated = rows.to_vec();
        updated.remove(row_index);
        log::debug!("delete row {section}[{row_index}], {} rows left", updated.len());
        TablePatch::section(section, updated)
    }

    // =========================================================================
    // Column operations
    // =========================================================================

    /// Insert one cell at `column_index` into every row of every section.
    ///
    /// Column structure is table-wide: head, body and foot all grow. Rows
    /// shorter than `column_index` are left unchanged.
    pub fn insert_column(&self, column_index: usize) -> TablePatch {
        let mut patch = TablePatch::new();
        for kind in SectionKind::ALL {
            let rows = self.section(kind);
            if rows.is_empty() {
                continue;
            }

            let updated = rows
                .iter()
                .map(|row| {
                    let mut row = row.clone();
                    if column_index <= row.cells.len() {
                        row.cells.insert(column_index, Cell::default_for(kind));
                    }
                    row
                })
                .collect();
            patch.set(kind, updated);
        }

        log::debug!("insert column {column_index} into {:?}", patch.touched());
        patch
    }

    /// Remove the cell at `column_index` from every row of `section` only.
    ///
    /// Rows left without cells are dropped. Other sections keep their
    /// column count, so head/foot may disagree with body afterwards.
    pub fn delete_column(&self, section: SectionKind, column_index: usize) -> TablePatch {
        let updated: Vec<Row> = self
            .section(section)
            .iter()
            .map(|row| {
                let mut row = row.clone();
                if column_index < row.cells.len() {
                    row.cells.remove(column_index);
                }
                row
            })
            .filter(|row| !row.is_empty())
            .collect();

        log::debug!(
            "delete column {section}[{column_index}], {} cells per row",
            section_column_count(&updated).unwrap_or(0)
        );
        TablePatch::section(section, updated)
    }

    // =========================================================================
    // Sections
    // =========================================================================

    /// Remove a non-empty section, or create an empty one with a single row
    /// as wide as the body's first row (1 cell when the body is empty too).
    pub fn toggle_section(&self, section: SectionKind) -> TablePatch {
        if !self.section(section).is_empty() {
            log::debug!("remove section {section}");
            return TablePatch::section(section, Vec::new());
        }

        let columns = section_column_count(&self.body).unwrap_or(1);
        log::debug!("add section {section} ({columns} cells)");
        TablePatch::section(section, vec![Row::new(section, columns)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellTag;
    use crate::harness::{assert_rectangular, cell_text, table_with_sections};

    #[test]
    fn test_create_table() {
        let table = TableState::create(3, 2).unwrap();
        assert_eq!(table.body.len(), 3);
        for row in &table.body {
            assert_eq!(row.cells.len(), 2);
            for cell in &row.cells {
                assert_eq!(cell, &Cell::empty(CellTag::Td));
            }
        }
        assert!(table.head.is_empty());
        assert!(table.foot.is_empty());
    }

    #[test]
    fn test_create_rejects_zero() {
        assert_eq!(
            TableState::create(0, 2),
            Err(TableError::InvalidDimension { axis: Axis::Rows, value: 0 })
        );
        assert_eq!(
            TableState::create(2, 0),
            Err(TableError::InvalidDimension { axis: Axis::Columns, value: 0 })
        );
    }

    #[test]
    fn test_update_cell_content() {
        let table = TableState::create(2, 2).unwrap();
        let patch = table.update_cell_content(SectionKind::Body, 1, 0, "Hello");

        assert_eq!(patch.touched(), vec![SectionKind::Body]);
        let next = patch.merged(&table);
        assert_eq!(cell_text(&next, SectionKind::Body, 1, 0), "Hello");
        assert_eq!(cell_text(&next, SectionKind::Body, 0, 0), "");
        assert_eq!(next.body[0], table.body[0]);
    }

    #[test]
    fn test_update_out_of_range_is_noop() {
        let table = TableState::create(2, 2).unwrap();

        let patch = table.update_cell_content(SectionKind::Body, 5, 0, "x");
        assert_eq!(patch.merged(&table), table);

        let patch = table.update_cell_content(SectionKind::Body, 0, 9, "x");
        assert_eq!(patch.merged(&table), table);

        let patch = table.update_cell_content(SectionKind::Head, 0, 0, "x");
        assert_eq!(patch.merged(&table), table);
    }

    #[test]
    fn test_get_cell_attribute() {
        let table = TableState::create(1, 1).unwrap();
        let table = table
            .update_cell_attribute(SectionKind::Body, 0, 0, AttributeValue::Tag(CellTag::Th))
            .merged(&table);

        assert_eq!(
            table.get_cell_attribute(SectionKind::Body, 0, 0, CellAttribute::Tag),
            Some(AttributeValue::Tag(CellTag::Th))
        );
        assert_eq!(table.get_cell_attribute(SectionKind::Body, 1, 0, CellAttribute::Tag), None);
        assert_eq!(table.get_cell_attribute(SectionKind::Foot, 0, 0, CellAttribute::Content), None);
    }

    #[test]
    fn test_insert_row_middle_and_end() {
        let table = TableState::create(2, 3).unwrap();
        let table = table.update_cell_content(SectionKind::Body, 1, 0, "last").merged(&table);

        let middle = table.insert_row(SectionKind::Body, 1, None).merged(&table);
        assert_eq!(middle.body.len(), 3);
        assert_eq!(cell_text(&middle, SectionKind::Body, 2, 0), "last");
        assert_eq!(middle.body[1], Row::new(SectionKind::Body, 3));

        let appended = table.insert_row(SectionKind::Body, 2, None).merged(&table);
        assert_eq!(appended.body.len(), 3);
        assert_eq!(cell_text(&appended, SectionKind::Body, 1, 0), "last");
    }

    #[test]
    fn test_insert_row_beyond_end_is_noop() {
        let table = TableState::create(2, 2).unwrap();
        assert_eq!(table.insert_row(SectionKind::Body, 3, None).merged(&table), table);
    }

    #[test]
    fn test_insert_row_head_uses_th() {
        let table = table_with_sections(1, 2, 1, 3);
        let next = table.insert_row(SectionKind::Head, 0, None).merged(&table);
        assert_eq!(next.head.len(), 2);
        assert!(next.head[0].cells.iter().all(|c| c.tag == CellTag::Th));
        assert_eq!(next.head[0].len(), 3);
    }

    #[test]
    fn test_insert_row_into_empty_section() {
        let table = TableState::create(2, 4).unwrap();

        let explicit = table.insert_row(SectionKind::Foot, 0, Some(2)).merged(&table);
        assert_eq!(explicit.foot[0].len(), 2);

        let inferred = table.insert_row(SectionKind::Foot, 0, None).merged(&table);
        assert_eq!(inferred.foot[0].len(), 4);

        let blank = TableState::default();
        let next = blank.insert_row(SectionKind::Body, 0, None).merged(&blank);
        assert_eq!(next.body[0].len(), 1);
    }

    #[test]
    fn test_delete_row() {
        let table = TableState::create(3, 2).unwrap();
        let table = table.update_cell_content(SectionKind::Body, 2, 1, "z").merged(&table);

        let next = table.delete_row(SectionKind::Body, 0).merged(&table);
        assert_eq!(next.body.len(), 2);
        assert_eq!(cell_text(&next, SectionKind::Body, 1, 1), "z");

        assert_eq!(table.delete_row(SectionKind::Body, 3).merged(&table), table);
        assert_eq!(table.delete_row(SectionKind::Head, 0).merged(&table), table);
    }

    #[test]
    fn test_insert_column_is_table_wide() {
        let table = table_with_sections(1, 2, 1, 2);
        let patch = table.insert_column(1);
        assert_eq!(
            patch.touched(),
            vec![SectionKind::Head, SectionKind::Body, SectionKind::Foot]
        );

        let next = patch.merged(&table);
        for kind in SectionKind::ALL {
            assert_rectangular(next.section(kind));
            assert!(next.section(kind).iter().all(|row| row.len() == 3));
        }
        assert_eq!(next.head[0].cells[1].tag, CellTag::Th);
        assert_eq!(next.body[0].cells[1].tag, CellTag::Td);
        assert_eq!(next.foot[0].cells[1].tag, CellTag::Td);
    }

    #[test]
    fn test_insert_column_skips_empty_sections() {
        let table = TableState::create(2, 2).unwrap();
        let patch = table.insert_column(2);
        assert_eq!(patch.touched(), vec![SectionKind::Body]);
        assert!(patch.merged(&table).head.is_empty());
    }

    #[test]
    fn test_insert_column_beyond_width_leaves_rows() {
        let table = TableState::create(2, 2).unwrap();
        assert_eq!(table.insert_column(5).merged(&table), table);
    }

    #[test]
    fn test_delete_column_is_section_scoped() {
        let table = table_with_sections(1, 2, 1, 3);
        let patch = table.delete_column(SectionKind::Body, 0);
        assert_eq!(patch.touched(), vec![SectionKind::Body]);

        let next = patch.merged(&table);
        assert!(next.body.iter().all(|row| row.len() == 2));
        assert_eq!(next.head[0].len(), 3);
        assert_eq!(next.foot[0].len(), 3);
    }

    #[test]
    fn test_delete_last_column_drops_rows() {
        let table = TableState::create(3, 1).unwrap();
        let next = table.delete_column(SectionKind::Body, 0).merged(&table);
        assert!(next.body.is_empty());
        assert!(next.is_empty());
    }

    #[test]
    fn test_delete_column_out_of_range() {
        let table = TableState::create(2, 2).unwrap();
        assert_eq!(table.delete_column(SectionKind::Body, 2).merged(&table), table);
    }

    #[test]
    fn test_toggle_section() {
        let table = TableState::create(2, 3).unwrap();

        let with_head = table.toggle_section(SectionKind::Head).merged(&table);
        assert_eq!(with_head.head.len(), 1);
        assert_eq!(with_head.head[0].len(), 3);
        assert!(with_head.head[0].cells.iter().all(|c| c.tag == CellTag::Th));

        let without = with_head.toggle_section(SectionKind::Head).merged(&with_head);
        assert!(without.head.is_empty());
        assert_eq!(without, table);
    }

    #[test]
    fn test_toggle_section_without_body() {
        let table = TableState::default();
        let next = table.toggle_section(SectionKind::Foot).merged(&table);
        assert_eq!(next.foot.len(), 1);
        assert_eq!(next.foot[0].len(), 1);
    }

    #[test]
    fn test_toggle_body_clears_it() {
        let table = TableState::create(2, 2).unwrap();
        let next = table.toggle_section(SectionKind::Body).merged(&table);
        assert!(next.body.is_empty());
    }

    #[test]
    fn test_column_count_and_section_bounds() {
        let table = TableState::create(2, 4).unwrap();
        assert_eq!(table.column_count(), 4);
        assert_eq!(table.first_non_empty_section(), Some(SectionKind::Body));
        assert_eq!(table.last_non_empty_section(), Some(SectionKind::Body));

        let full = table_with_sections(1, 2, 1, 4);
        assert_eq!(full.first_non_empty_section(), Some(SectionKind::Head));
        assert_eq!(full.last_non_empty_section(), Some(SectionKind::Foot));

        let empty = TableState::default();
        assert_eq!(empty.column_count(), 0);
        assert_eq!(empty.max_column_count(), 0);
        assert_eq!(empty.first_non_empty_section(), None);
    }

    #[test]
    fn test_max_column_count_after_section_delete() {
        let table = table_with_sections(1, 2, 0, 3);
        let narrow_head = table.delete_column(SectionKind::Head, 2).merged(&table);

        assert_eq!(narrow_head.column_count(), 2);
        assert_eq!(narrow_head.max_column_count(), 3);
    }

    #[test]
    fn test_json_round_trip() {
        let table = table_with_sections(1, 2, 0, 2);
        let table = table.update_cell_content(SectionKind::Body, 0, 1, "<strong>x</strong>").merged(&table);

        let json = table.to_json().unwrap();
        assert!(!json.contains("scope"));
        assert_eq!(TableState::from_json(&json).unwrap(), table);
    }

    #[test]
    fn test_from_json_missing_sections() {
        let table = TableState::from_json(
            r#"{"body":[{"cells":[{"content":"a","tag":"td"},{"content":"b","tag":"td"}]}]}"#,
        )
        .unwrap();
        assert!(table.head.is_empty());
        assert!(table.foot.is_empty());
        assert_eq!(table.column_count(), 2);

        assert!(matches!(
            TableState::from_json(r#"{"body":[{"cells":[{"tag":"tr"}]}]}"#),
            Err(TableError::Serialization(_))
        ));
    }
}
