//! Partial table updates.
//!
//! Every edit returns a `TablePatch` carrying replacement row sequences for
//! just the sections it touched. The host merges the patch over its stored
//! state (JSON merge-patch style: absent keys leave the section alone).

use serde::{Deserialize, Serialize};

use crate::section::{Row, SectionKind};
use crate::table::TableState;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<Vec<Row>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Vec<Row>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foot: Option<Vec<Row>>,
}

impl TablePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch replacing a single section.
    pub fn section(kind: SectionKind, rows: Vec<Row>) -> Self {
        let mut patch = Self::new();
        patch.set(kind, rows);
        patch
    }

    pub fn set(&mut self, kind: SectionKind, rows: Vec<Row>) {
        *self.slot_mut(kind) = Some(rows);
    }

    pub fn get(&self, kind: SectionKind) -> Option<&[Row]> {
        match kind {
            SectionKind::Head => self.head.as_deref(),
            SectionKind::Body => self.body.as_deref(),
            SectionKind::Foot => self.foot.as_deref(),
        }
    }

    /// Sections carried by this patch, in head → body → foot order.
    pub fn touched(&self) -> Vec<SectionKind> {
        SectionKind::ALL
            .into_iter()
            .filter(|kind| self.get(*kind).is_some())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none() && self.body.is_none() && self.foot.is_none()
    }

    /// Merge into `state` in place.
    pub fn apply_to(self, state: &mut TableState) {
        if let Some(rows) = self.head {
            state.head = rows;
        }
        if let Some(rows) = self.body {
            state.body = rows;
        }
        if let Some(rows) = self.foot {
            state.foot = rows;
        }
    }

    /// New state with this patch merged over `state`.
    pub fn merged(&self, state: &TableState) -> TableState {
        let mut next = state.clone();
        self.clone().apply_to(&mut next);
        next
    }

    fn slot_mut(&mut self, kind: SectionKind) -> &mut Option<Vec<Row>> {
        match kind {
            SectionKind::Head => &mut self.head,
            SectionKind::Body => &mut self.body,
            SectionKind::Foot => &mut self.foot,
        }
    }
}
