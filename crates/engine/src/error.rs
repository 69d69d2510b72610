use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Table creation with a zero row or column count.
    InvalidDimension { axis: Axis, value: usize },
    /// Attribute name the engine does not know.
    UnknownAttribute(String),
    /// Section name other than head/body/foot.
    UnknownSection(String),
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Settings parsed but hold an unusable value.
    ConfigValidation(String),
    /// Persisted table attributes could not be read or written.
    Serialization(String),
}

/// Which dimension an `InvalidDimension` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Columns,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rows => write!(f, "rows"),
            Self::Columns => write!(f, "columns"),
        }
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { axis, value } => {
                write!(f, "invalid table dimension: {axis} must be at least 1, got {value}")
            }
            Self::UnknownAttribute(name) => write!(f, "unknown cell attribute: {name}"),
            Self::UnknownSection(name) => write!(f, "unknown table section: {name}"),
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::Serialization(msg) => write!(f, "table serialization error: {msg}"),
        }
    }
}

impl std::error::Error for TableError {}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
