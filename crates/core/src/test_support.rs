//! Table builders shared by the unit tests.

use tablegrid_engine::{Row, SectionKind, TableState};

/// A table with the given row counts per section, all `columns` wide.
pub fn table(head: usize, body: usize, foot: usize, columns: usize) -> TableState {
    let rows = |kind: SectionKind, count: usize| -> Vec<Row> {
        (0..count).map(|_| Row::new(kind, columns)).collect()
    };
    TableState {
        head: rows(SectionKind::Head, head),
        body: rows(SectionKind::Body, body),
        foot: rows(SectionKind::Foot, foot),
    }
}

/// Body `body` × `columns` with a single-row head and foot, then `narrowed`
/// cut down by one column the way a section-scoped delete leaves it.
pub fn table_with_narrow_section(body: usize, columns: usize, narrowed: SectionKind) -> TableState {
    let full = table(1, body, 1, columns);
    full.delete_column(narrowed, columns - 1).merged(&full)
}
