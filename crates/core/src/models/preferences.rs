use serde::{Deserialize, Serialize};

use crate::time::FALLBACK_MEETING_DURATION;

/// Booking preferences an agent configured elsewhere. Read-only to the
/// scheduler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub meeting_duration_minutes: u32,
    #[serde(default)]
    pub buffer_time_minutes: u32,
}

impl Preferences {
    pub fn new(meeting_duration_minutes: u32, buffer_time_minutes: u32) -> Self {
        Self {
            meeting_duration_minutes,
            buffer_time_minutes,
        }
    }

    /// Duration of the slot created when a day is switched on.
    pub fn default_slot_duration(&self) -> u32 {
        if self.meeting_duration_minutes == 0 {
            FALLBACK_MEETING_DURATION
        } else {
            self.meeting_duration_minutes
        }
    }
}
