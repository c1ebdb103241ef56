use chrono::{TimeDelta, TimeZone, Utc};
use timestamps_core::{Clock, HasTimestamps, Layout, ManualClock, NullTime, ParseError, Timestamps};

fn base_clock() -> ManualClock {
    ManualClock::new(Utc.with_ymd_and_hms(2024, 2, 13, 10, 0, 0).unwrap())
}

#[test]
fn fresh_timestamps_are_unset_and_live() {
    let timestamps = Timestamps::new();

    assert!(timestamps.created_at_sql_time().is_null());
    assert!(timestamps.updated_at_sql_time().is_null());
    assert!(timestamps.deleted_at_sql_time().is_null());
    assert!(!timestamps.is_delete());
    assert_eq!(timestamps.created_at_fine_date_with_zone(), "");
}

#[test]
fn load_defaults_sets_created_and_updated_once() {
    let clock = base_clock();
    let mut timestamps = Timestamps::new();

    timestamps.load_default_timestamps_with(&clock);
    let created = timestamps.created_at_sql_time();
    let updated = timestamps.updated_at_sql_time();
    assert!(created.is_valid());
    assert!(updated.is_valid());
    assert!(timestamps.deleted_at_sql_time().is_null());

    clock.advance(TimeDelta::minutes(5));
    timestamps.load_default_timestamps_with(&clock);
    assert_eq!(timestamps.created_at_sql_time(), created);
    assert_eq!(timestamps.updated_at_sql_time(), updated);
}

#[test]
fn load_defaults_fills_fields_independently() {
    let clock = base_clock();
    let mut timestamps = Timestamps::new();
    let earlier = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    timestamps.set_created_at(earlier);

    timestamps.load_default_timestamps_with(&clock);
    assert_eq!(timestamps.created_at(), earlier);
    assert_eq!(timestamps.updated_at(), clock.now());
}

#[test]
fn load_defaults_with_system_clock_is_idempotent() {
    let mut timestamps = Timestamps::new();
    timestamps.load_default_timestamps();
    let first = timestamps;

    timestamps.load_default_timestamps();
    assert_eq!(timestamps, first);
}

#[test]
fn touch_create_always_replaces_with_later_or_equal_instant() {
    let mut timestamps = Timestamps::new();
    timestamps.touch_create_timestamps();
    let before = timestamps.created_at();

    timestamps.touch_create_timestamps();
    assert!(timestamps.created_at() >= before);

    let clock = base_clock();
    timestamps.touch_create_timestamps_with(&clock);
    assert_eq!(timestamps.created_at(), clock.now());
}

#[test]
fn touch_update_and_delete_overwrite() {
    let clock = base_clock();
    let mut timestamps = Timestamps::new();
    timestamps.touch_update_timestamps_with(&clock);
    timestamps.touch_delete_timestamps_with(&clock);

    clock.advance(TimeDelta::hours(2));
    timestamps.touch_update_timestamps_with(&clock);
    timestamps.touch_delete_timestamps_with(&clock);

    assert_eq!(timestamps.updated_at(), clock.now());
    assert_eq!(timestamps.deleted_at(), clock.now());
}

#[test]
fn soft_delete_marker_follows_deleted_at_presence() {
    let mut timestamps = Timestamps::new();
    assert!(!timestamps.is_delete());

    timestamps.touch_delete_timestamps();
    assert!(timestamps.is_delete());

    timestamps.set_deleted_at_sql_time(NullTime::null());
    assert!(!timestamps.is_delete());

    // Any present value counts, even one far in the future.
    timestamps.set_deleted_at(Utc.with_ymd_and_hms(2999, 1, 1, 0, 0, 0).unwrap());
    assert!(timestamps.is_delete());
}

#[test]
fn invalid_text_leaves_created_at_unchanged() {
    let mut timestamps = Timestamps::new();
    timestamps.set_created_at_date("2024-02-13 10:00:00").unwrap();
    let before = timestamps.created_at_sql_time();

    let err = timestamps.set_created_at_date("13/02/2024").unwrap_err();
    assert!(matches!(err, ParseError::Mismatch { .. }));
    assert_eq!(timestamps.created_at_sql_time(), before);

    assert!(timestamps
        .set_created_at_with_layout("%Y-%m-%d", "2024-02-30")
        .is_err());
    assert!(timestamps.set_created_at_fine_date_with_zone("").is_err());
    assert_eq!(timestamps.created_at_sql_time(), before);
}

#[test]
fn layout_accessors_cover_all_three_fields() {
    let mut timestamps = Timestamps::new();

    timestamps
        .set_created_at_date_with_zone("2024-02-13 10:00:00 +08:00")
        .unwrap();
    timestamps
        .set_updated_at_fine_date("2024-02-13 10:00:00.000001")
        .unwrap();
    timestamps
        .set_deleted_at_rfc3339_nano_date("2024-02-13T10:00:00.5Z")
        .unwrap();

    assert_eq!(
        timestamps.created_at_date_with_zone(),
        "2024-02-13 10:00:00 +08:00"
    );
    assert_eq!(timestamps.created_at_rfc3339_date(), "2024-02-13T10:00:00+08:00");
    assert_eq!(timestamps.updated_at_fine_date(), "2024-02-13 10:00:00.000001");
    assert_eq!(timestamps.updated_at_date(), "2024-02-13 10:00:00");
    assert_eq!(
        timestamps.deleted_at_fine_date_with_zone(),
        "2024-02-13 10:00:00.5 Z"
    );
    assert_eq!(timestamps.deleted_at_with_layout("%H:%M"), "10:00");
    assert_eq!(
        timestamps.format_deleted_at(Layout::Rfc3339),
        "2024-02-13T10:00:00Z"
    );
}

#[test]
fn serde_uses_field_names_and_defaults_missing_fields() {
    let mut timestamps = Timestamps::new();
    timestamps
        .set_created_at_rfc3339_date("2024-02-13T10:00:00+08:00")
        .unwrap();

    let json = serde_json::to_value(timestamps).unwrap();
    assert_eq!(json["created_at"], "2024-02-13T10:00:00+08:00");
    assert!(json["updated_at"].is_null());
    assert!(json["deleted_at"].is_null());

    let decoded: Timestamps =
        serde_json::from_value(serde_json::json!({ "created_at": "2024-02-13T10:00:00+08:00" }))
            .unwrap();
    assert_eq!(decoded, timestamps);
}

struct Note {
    body: String,
    timestamps: Timestamps,
}

impl HasTimestamps for Note {
    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }
}

#[test]
fn host_record_soft_deletes_through_embedded_timestamps() {
    let mut note = Note {
        body: "draft".to_string(),
        timestamps: Timestamps::new(),
    };
    note.timestamps_mut().load_default_timestamps();
    assert!(!note.is_soft_deleted());

    note.soft_delete();
    assert!(note.is_soft_deleted());
    assert!(note.timestamps().deleted_at_sql_time().is_valid());
    assert_eq!(note.body, "draft");
}
