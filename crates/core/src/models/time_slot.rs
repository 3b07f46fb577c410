use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier the backend assigned to a persisted slot.
///
/// The backend is not consistent about sending ids as numbers or strings, so
/// both are accepted and echoed back in the shape they arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotId::Number(id) => write!(f, "{id}"),
            SlotId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i32> for SlotId {
    fn from(id: i32) -> Self {
        SlotId::Number(i64::from(id))
    }
}

impl From<i64> for SlotId {
    fn from(id: i64) -> Self {
        SlotId::Number(id)
    }
}

impl From<&str> for SlotId {
    fn from(id: &str) -> Self {
        SlotId::Text(id.to_string())
    }
}

/// One recurring availability interval on a weekday.
///
/// `id` is `None` until the slot has been saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: Option<SlotId>,
    pub start: String,
    pub end: String,
}

impl TimeSlot {
    /// A slot that has not been persisted yet.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            id: None,
            start: start.into(),
            end: end.into(),
        }
    }

    /// A slot loaded from the backend.
    pub fn persisted(id: impl Into<SlotId>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Which end of a slot an edit replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotField {
    Start,
    End,
}
