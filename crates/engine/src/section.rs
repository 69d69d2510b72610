//! Table sections and rows.
//!
//! A table is rendered as one continuous grid but stored as three
//! independent row sequences: head, body and foot. A section with zero
//! rows is treated as absent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::TableError;

/// One of the three section slots, ordered head → body → foot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Head,
    Body,
    Foot,
}

impl SectionKind {
    /// All sections in render order.
    pub const ALL: [SectionKind; 3] = [SectionKind::Head, SectionKind::Body, SectionKind::Foot];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Body => "body",
            Self::Foot => "foot",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SectionKind {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "head" => Ok(Self::Head),
            "body" => Ok(Self::Body),
            "foot" => Ok(Self::Foot),
            other => Err(TableError::UnknownSection(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    /// A row of `columns` default cells for `section`.
    pub fn new(section: SectionKind, columns: usize) -> Self {
        Self {
            cells: (0..columns).map(|_| Cell::default_for(section)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// True iff the section has no rows.
pub fn is_empty_table_section(rows: &[Row]) -> bool {
    rows.is_empty()
}

/// Cells-per-row of a section, taken from its first row.
pub fn section_column_count(rows: &[Row]) -> Option<usize> {
    rows.first().map(Row::len)
}

/// True iff every row of the section has the same cell count.
pub fn is_rectangular(rows: &[Row]) -> bool {
    match rows.first() {
        Some(first) => rows.iter().all(|row| row.len() == first.len()),
        None => true,
    }
}
