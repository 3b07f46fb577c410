use availability_client::ScheduleApi;
use availability_core::{
    errors::{AvailabilityError, AvailabilityResult, ValidationIssue},
    models::{
        api::{SaveScheduleRequest, ScheduleData},
        extra_slot::DateSchedule,
        preferences::Preferences,
        schedule::{DaySchedule, WeekSchedule, Weekday},
        time_slot::{SlotField, SlotId, TimeSlot},
    },
    time::{DEFAULT_START_MINUTES, DEFAULT_START_TIME, MINUTES_PER_DAY, format_minutes_to_time, parse_time_to_minutes},
};
use chrono::NaiveDate;
use tracing::{debug, error, info, warn};

use crate::{
    aggregate::{aggregate_schedules_by_day, summarize_extra_slots},
    changes, payload, validation,
};

/// Editable weekly availability for one agent.
///
/// The scheduler is created with the default week shape and no snapshot.
/// Loading establishes the snapshot; until then [`has_unsaved_changes`]
/// reports false. Every successful save replaces the snapshot with the
/// current week and clears the ids queued for deletion.
///
/// [`has_unsaved_changes`]: AvailabilityScheduler::has_unsaved_changes
#[derive(Debug, Clone)]
pub struct AvailabilityScheduler {
    preferences: Preferences,
    schedule: WeekSchedule,
    initial_schedule: Option<WeekSchedule>,
    deleted_slot_ids: Vec<SlotId>,
    extra_slots: Vec<DateSchedule>,
}

impl AvailabilityScheduler {
    pub fn new(preferences: Preferences) -> Self {
        Self {
            preferences,
            schedule: WeekSchedule::default_shape(),
            initial_schedule: None,
            deleted_slot_ids: Vec::new(),
            extra_slots: Vec::new(),
        }
    }

    /// A scheduler whose current and saved state are both `schedule`.
    pub fn with_schedule(preferences: Preferences, schedule: WeekSchedule) -> Self {
        Self {
            preferences,
            initial_schedule: Some(schedule.clone()),
            schedule,
            deleted_slot_ids: Vec::new(),
            extra_slots: Vec::new(),
        }
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn schedule(&self) -> &WeekSchedule {
        &self.schedule
    }

    pub fn day(&self, day: Weekday) -> &DaySchedule {
        self.schedule.day(day)
    }

    /// The last saved (or loaded) week, if loading has finished.
    pub fn initial_schedule(&self) -> Option<&WeekSchedule> {
        self.initial_schedule.as_ref()
    }

    pub fn deleted_slot_ids(&self) -> &[SlotId] {
        &self.deleted_slot_ids
    }

    pub fn extra_slots(&self) -> &[DateSchedule] {
        &self.extra_slots
    }

    /// Every extra slot on `date`, for the "view all" listing.
    pub fn extra_slots_on(&self, date: NaiveDate) -> Option<&DateSchedule> {
        self.extra_slots
            .iter()
            .find(|card| card.parsed_date == Some(date))
    }

    pub fn is_loaded(&self) -> bool {
        self.initial_schedule.is_some()
    }

    /// Replaces all state with data fetched from the backend.
    pub fn hydrate(&mut self, data: ScheduleData) {
        self.schedule = aggregate_schedules_by_day(&data.time_schedules);
        self.initial_schedule = Some(self.schedule.clone());
        self.deleted_slot_ids.clear();
        self.extra_slots = summarize_extra_slots(data.extra_slots);

        debug!(
            "Hydrated schedule: {} enabled days, {} extra slot dates",
            self.schedule.enabled_days().count(),
            self.extra_slots.len()
        );
    }

    /// Starts from the default week for an agent with nothing saved yet.
    pub fn hydrate_default(&mut self) {
        self.schedule = WeekSchedule::default_shape();
        self.initial_schedule = Some(self.schedule.clone());
        self.deleted_slot_ids.clear();
        self.extra_slots.clear();
    }

    /// Fetches the saved schedule.
    ///
    /// Never fails: if the request fails or returns nothing the default week
    /// is used so the agent can build a schedule from scratch.
    pub async fn load<A>(&mut self, api: &A)
    where
        A: ScheduleApi + ?Sized,
    {
        match api.fetch_schedule().await {
            Ok(response) if response.is_success() => match response.data {
                Some(data) => {
                    self.hydrate(data);
                    info!("Loaded saved schedule");
                }
                None => {
                    info!("No saved schedule, starting from defaults");
                    self.hydrate_default();
                }
            },
            Ok(response) => {
                info!(
                    "Schedule not available ({}), starting from defaults",
                    response.message_or_default()
                );
                self.hydrate_default();
            }
            Err(err) => {
                error!("Error loading schedule data: {:?}", err);
                self.hydrate_default();
            }
        }
    }

    /// Opens or closes a day.
    ///
    /// Closing a day queues its persisted slots for deletion but keeps them so
    /// the day can be reopened. Opening an empty day gives it one slot from
    /// 09:00 lasting one meeting.
    pub fn toggle_day(&mut self, day: Weekday, enabled: bool) {
        let was_enabled = self.schedule[day].is_enabled;
        let persisted: Vec<SlotId> = self.schedule[day]
            .time_slots
            .iter()
            .filter_map(|slot| slot.id.clone())
            .collect();

        if !enabled && was_enabled {
            for id in persisted {
                self.mark_deleted(id);
            }
        } else if enabled && !was_enabled {
            self.deleted_slot_ids.retain(|id| !persisted.contains(id));
        }

        let duration = self.preferences.default_slot_duration();
        let day_schedule = &mut self.schedule[day];
        day_schedule.is_enabled = enabled;

        if enabled && day_schedule.time_slots.is_empty() {
            day_schedule.time_slots.push(TimeSlot::new(
                DEFAULT_START_TIME,
                format_minutes_to_time(DEFAULT_START_MINUTES + duration),
            ));
        }

        debug!("{} {}", day, if enabled { "enabled" } else { "disabled" });
    }

    /// Replaces one end of a slot. Nothing else is adjusted or checked.
    pub fn change_slot(
        &mut self,
        day: Weekday,
        index: usize,
        field: SlotField,
        value: impl Into<String>,
    ) -> AvailabilityResult<()> {
        let slot = self.schedule[day]
            .time_slots
            .get_mut(index)
            .ok_or(AvailabilityError::SlotNotFound { day, index })?;

        match field {
            SlotField::Start => slot.start = value.into(),
            SlotField::End => slot.end = value.into(),
        }

        Ok(())
    }

    /// Appends a slot one buffer after the latest-ending slot of the day.
    ///
    /// # Errors
    ///
    /// * `WouldExceedDay` - the new slot would end at or after midnight
    /// * `SlotAlreadyExists` - a slot with the same start and end exists
    /// * `InvalidTime` - an existing slot's end time cannot be read
    pub fn add_slot(&mut self, day: Weekday) -> AvailabilityResult<TimeSlot> {
        let slots = &self.schedule[day].time_slots;

        let latest_end = slots
            .iter()
            .map(|slot| parse_time_to_minutes(&slot.end))
            .collect::<AvailabilityResult<Vec<_>>>()?
            .into_iter()
            .max();

        let start = match latest_end {
            Some(end) => end + self.preferences.buffer_time_minutes,
            None => DEFAULT_START_MINUTES,
        };
        let end = start + self.preferences.meeting_duration_minutes;

        if end >= MINUTES_PER_DAY {
            warn!("Cannot add slot on {}: it would end at {}", day, format_minutes_to_time(end));
            return Err(AvailabilityError::WouldExceedDay);
        }

        let is_duplicate = slots.iter().any(|slot| {
            parse_time_to_minutes(&slot.start).ok() == Some(start)
                && parse_time_to_minutes(&slot.end).ok() == Some(end)
        });
        if is_duplicate {
            warn!("Slot {} already exists on {}", format_minutes_to_time(start), day);
            return Err(AvailabilityError::SlotAlreadyExists);
        }

        let slot = TimeSlot::new(format_minutes_to_time(start), format_minutes_to_time(end));
        self.schedule[day].time_slots.push(slot.clone());
        debug!("Added slot {}-{} on {}", slot.start, slot.end, day);

        Ok(slot)
    }

    /// Removes a slot, queueing it for deletion if it was saved.
    /// Removing the day's only slot closes the day.
    pub fn remove_slot(&mut self, day: Weekday, index: usize) -> AvailabilityResult<TimeSlot> {
        if index >= self.schedule[day].time_slots.len() {
            return Err(AvailabilityError::SlotNotFound { day, index });
        }

        let day_schedule = &mut self.schedule[day];
        let was_only_slot = day_schedule.time_slots.len() == 1;
        let removed = day_schedule.time_slots.remove(index);
        if was_only_slot {
            day_schedule.is_enabled = false;
        }

        if let Some(id) = &removed.id {
            self.mark_deleted(id.clone());
        }

        debug!("Removed slot {}-{} from {}", removed.start, removed.end, day);
        Ok(removed)
    }

    pub fn validate(&self) -> Vec<ValidationIssue> {
        validation::validate_schedule(&self.schedule)
    }

    pub fn has_unsaved_changes(&self) -> bool {
        changes::has_unsaved_changes(
            &self.schedule,
            self.initial_schedule.as_ref(),
            &self.deleted_slot_ids,
        )
    }

    pub fn build_save_request(&self) -> AvailabilityResult<SaveScheduleRequest> {
        payload::build_save_request(&self.schedule, &self.deleted_slot_ids)
    }

    /// Validates and submits the week, returning the server's message.
    ///
    /// On success the snapshot becomes the current week, the deletion queue is
    /// emptied and the schedule is fetched again so new slots pick up their
    /// ids. On any failure the scheduler is left exactly as it was.
    pub async fn save<A>(&mut self, api: &A) -> AvailabilityResult<String>
    where
        A: ScheduleApi + ?Sized,
    {
        let request = self.build_save_request().inspect_err(|err| {
            warn!("Schedule not saved: {}", err);
        })?;

        let response = api.save_schedule(request).await.map_err(|err| {
            error!("Error saving schedule: {:?}", err);
            AvailabilityError::Network(err)
        })?;

        if !response.is_success() {
            let message = response.message_or_default();
            error!("Error saving schedule: {}", message);
            return Err(AvailabilityError::SaveRejected(message));
        }

        self.initial_schedule = Some(self.schedule.clone());
        self.deleted_slot_ids.clear();
        info!("Schedule saved");

        self.refresh(api).await;

        Ok(response.message_or_default())
    }

    /// Re-reads the saved schedule after a save. Failures keep local state.
    async fn refresh<A>(&mut self, api: &A)
    where
        A: ScheduleApi + ?Sized,
    {
        match api.fetch_schedule().await {
            Ok(response) if response.is_success() => {
                if let Some(data) = response.data {
                    self.hydrate(data);
                }
            }
            Ok(response) => warn!(
                "Could not refresh schedule after save: {}",
                response.message_or_default()
            ),
            Err(err) => warn!("Could not refresh schedule after save: {:?}", err),
        }
    }

    fn mark_deleted(&mut self, id: SlotId) {
        if !self.deleted_slot_ids.contains(&id) {
            self.deleted_slot_ids.push(id);
        }
    }
}
