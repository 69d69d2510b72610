// Table creation settings
// Loaded by the host from its TOML settings file

use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::section::SectionKind;
use crate::table::TableState;

/// Defaults used by the placeholder form that creates a new table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
    /// Row count used when the form input is missing or unusable
    pub default_rows: usize,

    /// Column count used when the form input is missing or unusable
    pub default_columns: usize,

    /// Start new tables with a header section
    pub head_by_default: bool,

    /// Start new tables with a footer section
    pub foot_by_default: bool,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            default_rows: 2,
            default_columns: 2,
            head_by_default: false,
            foot_by_default: false,
        }
    }
}

impl TableSettings {
    pub fn from_toml(input: &str) -> Result<Self, TableError> {
        let settings: TableSettings =
            toml::from_str(input).map_err(|e| TableError::ConfigParse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), TableError> {
        if self.default_rows == 0 {
            return Err(TableError::ConfigValidation(
                "default_rows must be at least 1".into(),
            ));
        }
        if self.default_columns == 0 {
            return Err(TableError::ConfigValidation(
                "default_columns must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Parse a form field as a positive count, falling back on anything else.
    pub fn coerce_dimension(input: &str, fallback: usize) -> usize {
        match input.trim().parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => fallback,
        }
    }

    /// Create a table from raw form input, applying the configured sections.
    pub fn create_table(&self, rows_input: &str, columns_input: &str) -> Result<TableState, TableError> {
        let rows = Self::coerce_dimension(rows_input, self.default_rows);
        let columns = Self::coerce_dimension(columns_input, self.default_columns);

        let mut table = TableState::create(rows, columns)?;
        if self.head_by_default {
            let patch = table.toggle_section(SectionKind::Head);
            table.apply(patch);
        }
        if self.foot_by_default {
            let patch = table.toggle_section(SectionKind::Foot);
            table.apply(patch);
        }
        Ok(table)
    }
}
