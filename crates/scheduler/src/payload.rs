use std::collections::BTreeMap;

use availability_core::{
    errors::{AvailabilityError, AvailabilityResult},
    models::{
        api::{SaveScheduleRequest, SlotRecord},
        schedule::WeekSchedule,
        time_slot::SlotId,
    },
};

use crate::validation::{sorted_by_start, validate_schedule};

/// Builds the body of `POST schedule`.
///
/// Enabled days are walked Monday to Sunday, each day's slots in start-time
/// order, and every slot is keyed by its position across the whole week.
///
/// # Errors
///
/// Returns `AvailabilityError::Validation` with every issue found if the
/// week does not validate.
pub fn build_save_request(
    schedule: &WeekSchedule,
    deleted_slot_ids: &[SlotId],
) -> AvailabilityResult<SaveScheduleRequest> {
    let issues = validate_schedule(schedule);
    if !issues.is_empty() {
        return Err(AvailabilityError::Validation(issues));
    }

    let records: BTreeMap<usize, SlotRecord> = schedule
        .enabled_days()
        .filter(|(_, day_schedule)| !day_schedule.time_slots.is_empty())
        .flat_map(|(day, day_schedule)| {
            sorted_by_start(&day_schedule.time_slots)
                .into_iter()
                .map(move |slot| SlotRecord {
                    id: slot.id.clone(),
                    day: day.key().to_string(),
                    start_time: slot.start.clone(),
                    end_time: slot.end.clone(),
                })
        })
        .enumerate()
        .collect();

    Ok(SaveScheduleRequest {
        schedule: records,
        deleted_slots: deleted_slot_ids.to_vec(),
    })
}
