//! Test helpers for building tables and checking grid invariants.
//!
//! The invariants checked here are the ones every reachable edit sequence
//! must preserve: rows within a section share one cell count, and
//! head rows carry header cells.

use crate::cell::CellTag;
use crate::section::{is_rectangular, Row, SectionKind};
use crate::table::TableState;

/// A table with the given row counts per section, all `columns` wide.
pub fn table_with_sections(head: usize, body: usize, foot: usize, columns: usize) -> TableState {
    let rows = |kind: SectionKind, count: usize| -> Vec<Row> { (0..count).map(|_| Row::new(kind, columns)).collect() };
    TableState {
        head: rows(SectionKind::Head, head),
        body: rows(SectionKind::Body, body),
        foot: rows(SectionKind::Foot, foot),
    }
}

pub fn cell_text(table: &TableState, section: SectionKind, row: usize, column: usize) -> String {
    table
        .cell(section, row, column)
        .map(|cell| cell.content.as_str().to_string())
        .unwrap_or_default()
}

pub fn assert_rectangular(rows: &[Row]) {
    assert!(
        is_rectangular(rows),
        "ragged section: {:?}",
        rows.iter().map(Row::len).collect::<Vec<_>>()
    );
}

/// Check every section is rectangular and newly built head cells are headers.
pub fn assert_table_invariants(table: &TableState) {
    for kind in SectionKind::ALL {
        assert_rectangular(table.section(kind));
    }
    for row in &table.head {
        for cell in &row.cells {
            if cell.content.is_empty() && cell.scope.is_none() {
                assert_eq!(cell.tag, CellTag::Th, "blank head cell should be a header");
            }
        }
    }
}
