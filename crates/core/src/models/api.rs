//! Wire types for the agent time-schedule endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};

use crate::models::extra_slot::ExtraSlot;
use crate::models::time_slot::SlotId;

/// Response envelope used by every schedule endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub error: Option<bool>,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            error: Some(false),
            message: Some(message.into()),
            data,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(true),
            message: Some(message.into()),
            data: None,
        }
    }

    /// Only an explicit `"error": false` counts as success.
    pub fn is_success(&self) -> bool {
        self.error == Some(false)
    }

    pub fn message_or_default(&self) -> String {
        self.message.clone().unwrap_or_default()
    }
}

/// Payload of `GET schedule`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleData {
    #[serde(default)]
    pub time_schedules: Vec<TimeScheduleRecord>,
    #[serde(default)]
    pub extra_slots: Vec<ExtraSlot>,
}

/// A recurring slot as stored by the backend. Times may carry seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeScheduleRecord {
    #[serde(default)]
    pub id: Option<SlotId>,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

/// One entry of the positional save map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecord {
    /// Existing id, or an empty string for slots the backend has not seen.
    #[serde(default, serialize_with = "id_or_empty", deserialize_with = "empty_as_none")]
    pub id: Option<SlotId>,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

/// Body of `POST schedule`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveScheduleRequest {
    /// Slots keyed by their position across the whole week.
    pub schedule: BTreeMap<usize, SlotRecord>,
    #[serde(rename = "deletedSlots")]
    pub deleted_slots: Vec<SlotId>,
}

fn id_or_empty<S: Serializer>(id: &Option<SlotId>, serializer: S) -> Result<S::Ok, S::Error> {
    match id {
        Some(id) => id.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<SlotId>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let id = Option::<SlotId>::deserialize(deserializer)?;
    Ok(id.filter(|id| !matches!(id, SlotId::Text(text) if text.is_empty())))
}
