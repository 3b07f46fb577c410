use availability_core::models::{
    schedule::{DaySchedule, WeekSchedule},
    time_slot::SlotId,
};

/// Whether `current` has edits that are not part of the last saved state.
///
/// Always false until a snapshot exists, so nothing can be saved while the
/// initial load is still pending.
pub fn has_unsaved_changes(
    current: &WeekSchedule,
    snapshot: Option<&WeekSchedule>,
    deleted_slot_ids: &[SlotId],
) -> bool {
    let Some(snapshot) = snapshot else {
        return false;
    };

    if !deleted_slot_ids.is_empty() {
        return true;
    }

    current
        .iter()
        .any(|(day, current_day)| day_changed(current_day, snapshot.day(day)))
}

fn day_changed(current: &DaySchedule, initial: &DaySchedule) -> bool {
    if current.is_enabled != initial.is_enabled {
        return true;
    }

    // Unsaved slots
    if current.time_slots.iter().any(|slot| !slot.is_persisted()) {
        return true;
    }

    if current.time_slots.len() != initial.time_slots.len() {
        return true;
    }

    current
        .time_slots
        .iter()
        .zip(&initial.time_slots)
        .any(|(now, before)| now.id == before.id && (now.start != before.start || now.end != before.end))
}
