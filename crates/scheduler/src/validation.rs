use availability_core::{
    errors::ValidationIssue,
    models::{schedule::WeekSchedule, time_slot::TimeSlot},
    time::parse_time_to_minutes,
};

/// Checks every enabled day and returns all problems found.
///
/// Disabled days are never checked, whatever slots they still hold. Slots
/// that touch (`end == next start`) do not overlap, and a day reports at most
/// one overlap. Slots with unreadable times are reported as `InvalidTime`
/// and left out of the overlap check.
pub fn validate_schedule(schedule: &WeekSchedule) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (day, day_schedule) in schedule.enabled_days() {
        let slots = &day_schedule.time_slots;

        if slots.is_empty() {
            issues.push(ValidationIssue::NoTimeSlots { day });
        }

        let mut intervals: Vec<(u32, u32)> = slots
            .iter()
            .filter_map(|slot| {
                let start = parse_time_to_minutes(&slot.start).ok()?;
                let end = parse_time_to_minutes(&slot.end).ok()?;
                Some((start, end))
            })
            .collect();
        intervals.sort_by_key(|&(start, _)| start);
        if intervals.windows(2).any(|pair| pair[0].1 > pair[1].0) {
            issues.push(ValidationIssue::Overlapping { day });
        }

        for (index, slot) in slots.iter().enumerate() {
            let slot_number = index + 1;
            match (parse_time_to_minutes(&slot.start), parse_time_to_minutes(&slot.end)) {
                (Ok(start), Ok(end)) if end <= start => {
                    issues.push(ValidationIssue::InvalidDuration { day, slot: slot_number });
                }
                (Ok(_), Ok(_)) => {}
                _ => issues.push(ValidationIssue::InvalidTime { day, slot: slot_number }),
            }
        }
    }

    issues
}

/// Slots ordered by start time. Slots with an unreadable start come first;
/// ties keep their input order.
pub fn sorted_by_start(slots: &[TimeSlot]) -> Vec<&TimeSlot> {
    let mut sorted: Vec<&TimeSlot> = slots.iter().collect();
    sorted.sort_by_key(|slot| parse_time_to_minutes(&slot.start).ok());
    sorted
}
