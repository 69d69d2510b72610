use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::section::SectionKind;

/// Formatted cell text as handed over by the host editor.
///
/// Opaque to the engine: it is stored and replaced wholesale, never parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(String);

impl RichText {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for RichText {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RichText {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Semantic role of a cell: header (`th`) or data (`td`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellTag {
    #[default]
    Td,
    Th,
}

impl fmt::Display for CellTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Td => write!(f, "td"),
            Self::Th => write!(f, "th"),
        }
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub content: RichText,
    pub tag: CellTag,
    /// Only meaningful when `tag` is `Th`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
}

impl Cell {
    pub fn empty(tag: CellTag) -> Self {
        Self {
            content: RichText::default(),
            tag,
            scope: None,
            align: None,
        }
    }

    /// A fresh cell for a row of `section`: header cells in the head, data cells elsewhere.
    pub fn default_for(section: SectionKind) -> Self {
        match section {
            SectionKind::Head => Self::empty(CellTag::Th),
            SectionKind::Body | SectionKind::Foot => Self::empty(CellTag::Td),
        }
    }

    pub fn get(&self, attribute: CellAttribute) -> Option<AttributeValue> {
        match attribute {
            CellAttribute::Content => Some(AttributeValue::Content(self.content.clone())),
            CellAttribute::Tag => Some(AttributeValue::Tag(self.tag)),
            CellAttribute::Scope => self.scope.clone().map(|s| AttributeValue::Scope(Some(s))),
            CellAttribute::Align => self.align.map(|a| AttributeValue::Align(Some(a))),
        }
    }

    /// Copy of this cell with one attribute replaced.
    pub fn with(&self, value: AttributeValue) -> Self {
        let mut cell = self.clone();
        match value {
            AttributeValue::Content(content) => cell.content = content,
            AttributeValue::Tag(tag) => cell.tag = tag,
            AttributeValue::Scope(scope) => cell.scope = scope,
            AttributeValue::Align(align) => cell.align = align,
        }
        cell
    }
}

/// Name of a cell attribute addressable by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellAttribute {
    Content,
    Tag,
    Scope,
    Align,
}

impl CellAttribute {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Tag => "tag",
            Self::Scope => "scope",
            Self::Align => "align",
        }
    }
}

impl fmt::Display for CellAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CellAttribute {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "content" => Ok(Self::Content),
            "tag" => Ok(Self::Tag),
            "scope" => Ok(Self::Scope),
            "align" => Ok(Self::Align),
            other => Err(TableError::UnknownAttribute(other.to_string())),
        }
    }
}

/// A value for exactly one cell attribute. `None` on the optional
/// attributes clears them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "attribute", content = "value", rename_all = "lowercase")]
pub enum AttributeValue {
    Content(RichText),
    Tag(CellTag),
    Scope(Option<String>),
    Align(Option<Alignment>),
}

impl AttributeValue {
    pub fn attribute(&self) -> CellAttribute {
        match self {
            Self::Content(_) => CellAttribute::Content,
            Self::Tag(_) => CellAttribute::Tag,
            Self::Scope(_) => CellAttribute::Scope,
            Self::Align(_) => CellAttribute::Align,
        }
    }
}
