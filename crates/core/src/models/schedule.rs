use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AvailabilityError;
use crate::models::time_slot::TimeSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days in the order a week is displayed and serialized.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Lowercase key used by the schedule API.
    pub fn key(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = AvailabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|day| day.key() == key)
            .ok_or_else(|| AvailabilityError::UnknownWeekday(s.to_string()))
    }
}

/// Availability for a single weekday.
///
/// Slots on a disabled day are kept so the day can be re-enabled, but the day
/// is treated as closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub is_enabled: bool,
    pub time_slots: Vec<TimeSlot>,
}

impl DaySchedule {
    pub fn new(is_enabled: bool, time_slots: Vec<TimeSlot>) -> Self {
        Self {
            is_enabled,
            time_slots,
        }
    }

    pub fn closed() -> Self {
        Self::default()
    }
}

/// The recurring weekly pattern. Every weekday is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekSchedule {
    days: [DaySchedule; 7],
}

impl WeekSchedule {
    /// Shape used for agents without a saved schedule: weekdays open with no
    /// slots, weekend closed.
    pub fn default_shape() -> Self {
        Self {
            days: Weekday::ALL.map(|day| DaySchedule::new(!day.is_weekend(), Vec::new())),
        }
    }

    /// Every day closed with no slots.
    pub fn closed() -> Self {
        Self {
            days: Weekday::ALL.map(|_| DaySchedule::closed()),
        }
    }

    pub fn day(&self, day: Weekday) -> &DaySchedule {
        &self.days[day.position()]
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut DaySchedule {
        &mut self.days[day.position()]
    }

    /// Days in Monday to Sunday order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DaySchedule)> {
        Weekday::ALL.into_iter().zip(self.days.iter())
    }

    pub fn enabled_days(&self) -> impl Iterator<Item = (Weekday, &DaySchedule)> {
        self.iter().filter(|(_, schedule)| schedule.is_enabled)
    }
}

impl Default for WeekSchedule {
    fn default() -> Self {
        Self::default_shape()
    }
}

impl Index<Weekday> for WeekSchedule {
    type Output = DaySchedule;

    fn index(&self, day: Weekday) -> &Self::Output {
        self.day(day)
    }
}

impl IndexMut<Weekday> for WeekSchedule {
    fn index_mut(&mut self, day: Weekday) -> &mut Self::Output {
        self.day_mut(day)
    }
}
