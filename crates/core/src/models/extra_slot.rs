use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::{to_12_hour, truncate_to_minutes};

/// A one-off availability entry on a specific date, outside the weekly
/// pattern. Times arrive as `HH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraSlot {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

impl ExtraSlot {
    pub fn new(date: &str, start_time: &str, end_time: &str) -> Self {
        Self {
            date: Some(date.to_string()),
            start_time: Some(start_time.to_string()),
            end_time: Some(end_time.to_string()),
        }
    }

    /// Start time used for ordering; a missing start sorts first.
    pub fn sort_key(&self) -> &str {
        self.start_time.as_deref().unwrap_or("00:00:00")
    }
}

/// All extra slots that fall on one date, as shown on the date schedule card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSchedule {
    /// Date exactly as the backend sent it.
    pub date: String,
    pub parsed_date: Option<NaiveDate>,
    /// Long form, e.g. `October 18, 2026`.
    pub formatted_date: String,
    /// Earliest slot's start, `HH:MM`.
    pub first_start: String,
    /// Earliest slot's end, `HH:MM`.
    pub first_end: String,
    pub total_slots: usize,
    /// Every slot on the date ordered by start time.
    pub slots: Vec<ExtraSlot>,
}

impl DateSchedule {
    /// Builds the card for one date. `slots` must already be sorted and
    /// non-empty.
    pub fn from_sorted(date: String, slots: Vec<ExtraSlot>) -> Self {
        let parsed_date = NaiveDate::parse_from_str(&date, "%Y-%m-%d").ok();
        let formatted_date = parsed_date
            .map(|d| d.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| date.clone());

        let (first_start, first_end) = slots
            .first()
            .map(|slot| {
                (
                    truncate_to_minutes(slot.start_time.as_deref().unwrap_or_default()).to_string(),
                    truncate_to_minutes(slot.end_time.as_deref().unwrap_or_default()).to_string(),
                )
            })
            .unwrap_or_default();

        Self {
            date,
            parsed_date,
            formatted_date,
            first_start,
            first_end,
            total_slots: slots.len(),
            slots,
        }
    }

    /// Earliest slot as `09:00 AM to 10:00 AM`.
    pub fn time_range(&self) -> String {
        format!("{} to {}", to_12_hour(&self.first_start), to_12_hour(&self.first_end))
    }
}
