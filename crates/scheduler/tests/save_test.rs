use availability_client::mock::MockScheduleApi;
use availability_core::{
    errors::AvailabilityError,
    models::{
        api::{ApiResponse, ScheduleData, TimeScheduleRecord},
        extra_slot::ExtraSlot,
        preferences::Preferences,
        schedule::{WeekSchedule, Weekday},
        time_slot::{SlotField, SlotId, TimeSlot},
    },
};
use availability_scheduler::AvailabilityScheduler;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn record(id: i64, day: &str, start: &str, end: &str) -> TimeScheduleRecord {
    TimeScheduleRecord {
        id: Some(SlotId::Number(id)),
        day: day.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
    }
}

fn saved_schedule() -> ScheduleData {
    ScheduleData {
        time_schedules: vec![
            record(1, "monday", "09:00:00", "10:00:00"),
            record(2, "tuesday", "13:00:00", "14:00:00"),
        ],
        extra_slots: vec![
            ExtraSlot::new("2026-10-21", "10:00:00", "10:30:00"),
            ExtraSlot::new("2026-10-21", "09:00:00", "09:30:00"),
        ],
    }
}

async fn loaded_scheduler() -> AvailabilityScheduler {
    let mut api = MockScheduleApi::new();
    api.expect_fetch_schedule()
        .times(1)
        .returning(|| Ok(ApiResponse::ok("Data fetched", Some(saved_schedule()))));

    let mut scheduler = AvailabilityScheduler::new(Preferences::new(60, 15));
    scheduler.load(&api).await;
    scheduler
}

#[tokio::test]
async fn test_load_hydrates_week_and_extra_slots() {
    let scheduler = loaded_scheduler().await;

    assert!(scheduler.is_loaded());
    assert!(!scheduler.has_unsaved_changes());
    assert_eq!(
        scheduler.day(Weekday::Monday).time_slots,
        vec![TimeSlot::persisted(1, "09:00", "10:00")]
    );
    assert!(scheduler.day(Weekday::Tuesday).is_enabled);
    assert!(!scheduler.day(Weekday::Wednesday).is_enabled);

    let date = NaiveDate::from_ymd_opt(2026, 10, 21).unwrap();
    let card = scheduler.extra_slots_on(date).unwrap();
    assert_eq!(card.total_slots, 2);
    assert_eq!(card.time_range(), "09:00 AM to 09:30 AM");
    assert_eq!(scheduler.extra_slots().len(), 1);
}

#[tokio::test]
async fn test_load_failure_falls_back_to_default_week() {
    let mut api = MockScheduleApi::new();
    api.expect_fetch_schedule()
        .times(1)
        .returning(|| Err(eyre::eyre!("connection reset")));

    let mut scheduler = AvailabilityScheduler::new(Preferences::new(60, 15));
    scheduler.load(&api).await;

    assert!(scheduler.is_loaded());
    assert_eq!(scheduler.schedule(), &WeekSchedule::default_shape());
    assert!(!scheduler.has_unsaved_changes());
}

#[tokio::test]
async fn test_load_without_saved_schedule_uses_defaults() {
    let mut api = MockScheduleApi::new();
    api.expect_fetch_schedule()
        .times(1)
        .returning(|| Ok(ApiResponse::failed("No schedule found")));

    let mut scheduler = AvailabilityScheduler::new(Preferences::new(60, 15));
    scheduler.load(&api).await;

    assert!(scheduler.is_loaded());
    assert!(scheduler.day(Weekday::Monday).is_enabled);
    assert!(!scheduler.day(Weekday::Saturday).is_enabled);

    scheduler.toggle_day(Weekday::Saturday, true);
    assert!(scheduler.has_unsaved_changes());
}

#[tokio::test]
async fn test_save_submits_payload_and_resets_snapshot() {
    let mut scheduler = loaded_scheduler().await;
    scheduler
        .change_slot(Weekday::Tuesday, 0, SlotField::End, "14:30")
        .unwrap();
    scheduler.toggle_day(Weekday::Monday, false);
    assert!(scheduler.has_unsaved_changes());

    let mut api = MockScheduleApi::new();
    api.expect_save_schedule()
        .withf(|request| {
            request.schedule.len() == 1
                && request.schedule[&0].day == "tuesday"
                && request.schedule[&0].end_time == "14:30"
                && request.schedule[&0].id == Some(SlotId::Number(2))
                && request.deleted_slots == vec![SlotId::Number(1)]
        })
        .times(1)
        .returning(|_| Ok(ApiResponse::ok("Schedule saved successfully", None)));
    api.expect_fetch_schedule().times(1).returning(|| {
        Ok(ApiResponse::ok(
            "Data fetched",
            Some(ScheduleData {
                time_schedules: vec![record(2, "tuesday", "13:00:00", "14:30:00")],
                extra_slots: vec![],
            }),
        ))
    });

    let message = scheduler.save(&api).await.unwrap();

    assert_eq!(message, "Schedule saved successfully");
    assert!(!scheduler.has_unsaved_changes());
    assert!(scheduler.deleted_slot_ids().is_empty());
    assert!(!scheduler.day(Weekday::Monday).is_enabled);

    scheduler
        .change_slot(Weekday::Tuesday, 0, SlotField::Start, "12:00")
        .unwrap();
    assert!(scheduler.has_unsaved_changes());
}

#[tokio::test]
async fn test_save_picks_up_ids_of_new_slots() {
    let mut scheduler = loaded_scheduler().await;
    let added = scheduler.add_slot(Weekday::Monday).unwrap();
    assert_eq!(added, TimeSlot::new("10:15", "11:15"));

    let mut api = MockScheduleApi::new();
    api.expect_save_schedule()
        .withf(|request| request.schedule.len() == 3 && request.schedule[&1].id.is_none())
        .times(1)
        .returning(|_| Ok(ApiResponse::ok("Saved", None)));
    api.expect_fetch_schedule().times(1).returning(|| {
        let mut data = saved_schedule();
        data.time_schedules
            .push(record(3, "monday", "10:15:00", "11:15:00"));
        Ok(ApiResponse::ok("Data fetched", Some(data)))
    });

    scheduler.save(&api).await.unwrap();

    assert!(!scheduler.has_unsaved_changes());
    assert_eq!(
        scheduler.day(Weekday::Monday).time_slots[1],
        TimeSlot::persisted(3, "10:15", "11:15")
    );
}

#[tokio::test]
async fn test_save_keeps_snapshot_when_refresh_fails() {
    let mut scheduler = loaded_scheduler().await;
    scheduler
        .change_slot(Weekday::Monday, 0, SlotField::Start, "08:00")
        .unwrap();

    let mut api = MockScheduleApi::new();
    api.expect_save_schedule()
        .times(1)
        .returning(|_| Ok(ApiResponse::ok("Saved", None)));
    api.expect_fetch_schedule()
        .times(1)
        .returning(|| Err(eyre::eyre!("timeout")));

    scheduler.save(&api).await.unwrap();

    assert!(!scheduler.has_unsaved_changes());
    assert_eq!(scheduler.day(Weekday::Monday).time_slots[0].start, "08:00");
}

#[tokio::test]
async fn test_save_network_failure_preserves_edits() {
    let mut scheduler = loaded_scheduler().await;
    scheduler.remove_slot(Weekday::Tuesday, 0).unwrap();
    let before = scheduler.clone();

    let mut api = MockScheduleApi::new();
    api.expect_save_schedule()
        .times(1)
        .returning(|_| Err(eyre::eyre!("connection refused")));
    api.expect_fetch_schedule().times(0);

    let err = scheduler.save(&api).await.unwrap_err();

    assert!(matches!(err, AvailabilityError::Network(_)));
    assert_eq!(scheduler.schedule(), before.schedule());
    assert_eq!(scheduler.deleted_slot_ids(), &[SlotId::Number(2)]);
    assert!(scheduler.has_unsaved_changes());
}

#[tokio::test]
async fn test_save_rejected_by_backend_preserves_edits() {
    let mut scheduler = loaded_scheduler().await;
    scheduler.toggle_day(Weekday::Monday, false);

    let mut api = MockScheduleApi::new();
    api.expect_save_schedule()
        .times(1)
        .returning(|_| Ok(ApiResponse::failed("Agent is not verified")));
    api.expect_fetch_schedule().times(0);

    let err = scheduler.save(&api).await.unwrap_err();

    assert!(matches!(err, AvailabilityError::SaveRejected(message) if message == "Agent is not verified"));
    assert_eq!(scheduler.deleted_slot_ids(), &[SlotId::Number(1)]);
    assert!(scheduler.has_unsaved_changes());
}

#[tokio::test]
async fn test_save_with_invalid_week_never_calls_api() {
    let mut scheduler = loaded_scheduler().await;
    scheduler
        .change_slot(Weekday::Monday, 0, SlotField::End, "08:00")
        .unwrap();

    let mut api = MockScheduleApi::new();
    api.expect_save_schedule().times(0);
    api.expect_fetch_schedule().times(0);

    let err = scheduler.save(&api).await.unwrap_err();

    assert!(matches!(err, AvailabilityError::Validation(ref issues) if issues.len() == 1));
    assert!(err.to_string().contains("Monday slot 1 has an invalid duration"));
    assert!(scheduler.has_unsaved_changes());
}
