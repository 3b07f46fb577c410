use std::fmt;

use thiserror::Error;

use crate::models::schedule::Weekday;

#[derive(Error, Debug)]
pub enum AvailabilityError {
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    #[error("No time slot {index} on {day}")]
    SlotNotFound { day: Weekday, index: usize },

    #[error("Slot already exists")]
    SlotAlreadyExists,

    #[error("Cannot add slot, it would exceed the day")]
    WouldExceedDay,

    #[error("Please fix the following issues:\n{}", join_issues(.0))]
    Validation(Vec<ValidationIssue>),

    #[error("Schedule save rejected: {0}")]
    SaveRejected(String),

    #[error("Network error: {0}")]
    Network(#[from] eyre::Report),
}

pub type AvailabilityResult<T> = Result<T, AvailabilityError>;

/// A single problem found while validating a week before it is saved.
///
/// Slot numbers are 1-based, the way they are shown to the agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    NoTimeSlots { day: Weekday },
    Overlapping { day: Weekday },
    InvalidDuration { day: Weekday, slot: usize },
    InvalidTime { day: Weekday, slot: usize },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::NoTimeSlots { day } => {
                write!(f, "{day} is enabled but has no time slots")
            }
            ValidationIssue::Overlapping { day } => write!(f, "{day} has overlapping time slots"),
            ValidationIssue::InvalidDuration { day, slot } => {
                write!(f, "{day} slot {slot} has an invalid duration")
            }
            ValidationIssue::InvalidTime { day, slot } => {
                write!(f, "{day} slot {slot} has an invalid time")
            }
        }
    }
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
