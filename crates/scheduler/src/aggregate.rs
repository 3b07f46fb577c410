use std::collections::BTreeMap;

use availability_core::{
    models::{
        api::TimeScheduleRecord,
        extra_slot::{DateSchedule, ExtraSlot},
        schedule::{WeekSchedule, Weekday},
        time_slot::TimeSlot,
    },
    time::{parse_time_to_minutes, truncate_to_minutes},
};
use tracing::warn;

/// Groups backend slot records into a week.
///
/// Times are cut to `HH:MM`, each day's slots are ordered by start time and a
/// day is enabled exactly when it has slots. Records for an unknown day are
/// skipped.
pub fn aggregate_schedules_by_day(records: &[TimeScheduleRecord]) -> WeekSchedule {
    let mut week = WeekSchedule::closed();

    for record in records {
        let day = match record.day.parse::<Weekday>() {
            Ok(day) => day,
            Err(err) => {
                warn!("Skipping time schedule record: {}", err);
                continue;
            }
        };

        week[day].time_slots.push(TimeSlot {
            id: record.id.clone(),
            start: truncate_to_minutes(&record.start_time).to_string(),
            end: truncate_to_minutes(&record.end_time).to_string(),
        });
    }

    for day in Weekday::ALL {
        let day_schedule = &mut week[day];
        day_schedule
            .time_slots
            .sort_by_key(|slot| parse_time_to_minutes(&slot.start).ok());
        day_schedule.is_enabled = !day_schedule.time_slots.is_empty();
    }

    week
}

/// Groups date-specific slots into one card per date, earliest date first.
///
/// Entries without a date are dropped. Dates and `HH:MM:SS` start times are
/// fixed width, so plain string ordering is chronological.
pub fn summarize_extra_slots(slots: Vec<ExtraSlot>) -> Vec<DateSchedule> {
    let mut by_date: BTreeMap<String, Vec<ExtraSlot>> = BTreeMap::new();

    for slot in slots {
        let Some(date) = slot.date.clone().filter(|date| !date.is_empty()) else {
            continue;
        };
        by_date.entry(date).or_default().push(slot);
    }

    by_date
        .into_iter()
        .map(|(date, mut slots)| {
            slots.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
            DateSchedule::from_sorted(date, slots)
        })
        .collect()
}
