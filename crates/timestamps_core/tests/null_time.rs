use chrono::{FixedOffset, Local, TimeZone, Timelike};
use timestamps_core::{Layout, NullTime, ParseError};

#[test]
fn every_fixed_layout_roundtrips_current_instant() {
    let now = NullTime::now();

    for layout in Layout::FIXED {
        let formatted = now.format(layout);
        assert!(!formatted.is_empty(), "layout {layout}");

        let parsed = NullTime::parse(layout, &formatted).unwrap();
        assert!(parsed.is_valid());
        assert_eq!(parsed.format(layout), formatted, "layout {layout}");
    }
}

#[test]
fn custom_layout_roundtrips_at_its_resolution() {
    let layout = "%d.%m.%Y %H:%M";
    let now = NullTime::now();
    let formatted = now.format_with_layout(layout);

    let parsed = NullTime::parse_with_layout(layout, &formatted).unwrap();
    assert_eq!(parsed.format_with_layout(layout), formatted);
    assert_eq!(parsed.time().second(), 0);
}

#[test]
fn absent_value_formats_to_empty_string() {
    let absent = NullTime::null();
    assert_eq!(absent.format_date(), "");
    assert_eq!(absent.format_date_with_zone(), "");
    assert_eq!(absent.format_fine_date(), "");
    assert_eq!(absent.format_fine_date_with_zone(), "");
    assert_eq!(absent.format_rfc3339(), "");
    assert_eq!(absent.format_rfc3339_nano(), "");
    assert_eq!(absent.format_with_layout("%Y-%m-%d"), "");
}

#[test]
fn zoneless_layouts_parse_in_local_time_zone() {
    let parsed = NullTime::parse_date("2024-03-05 10:20:30").unwrap();
    let expected = Local
        .with_ymd_and_hms(2024, 3, 5, 10, 20, 30)
        .single()
        .unwrap();

    assert_eq!(parsed.get(), Some(expected.fixed_offset()));
    assert_eq!(parsed.format_date(), "2024-03-05 10:20:30");
}

#[test]
fn plain_layout_accepts_fractional_seconds() {
    let parsed = NullTime::parse_date("2024-03-05 10:20:30.125").unwrap();
    assert_eq!(parsed.time().nanosecond(), 125_000_000);
    assert_eq!(parsed.format_date(), "2024-03-05 10:20:30");
    assert_eq!(parsed.format_fine_date(), "2024-03-05 10:20:30.125");
}

#[test]
fn rfc3339_layouts_render_zulu_and_trimmed_fraction() {
    let utc = FixedOffset::east_opt(0).unwrap();
    let time = utc
        .with_ymd_and_hms(2024, 3, 5, 10, 20, 30)
        .unwrap()
        .with_nanosecond(123_450_000)
        .unwrap();
    let value = NullTime::at(time);

    assert_eq!(value.format_rfc3339(), "2024-03-05T10:20:30Z");
    assert_eq!(value.format_rfc3339_nano(), "2024-03-05T10:20:30.12345Z");

    let parsed = NullTime::parse_rfc3339_nano("2024-03-05T10:20:30.12345Z").unwrap();
    assert_eq!(parsed, value);
}

#[test]
fn parse_failure_carries_layout_mismatch_diagnostic() {
    let err = NullTime::parse_date_with_zone("2024-03-05 10:20:30").unwrap_err();
    match &err {
        ParseError::Mismatch { layout, .. } => assert_eq!(layout, "date_with_zone"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(std::error::Error::source(&err).is_some());

    assert!(NullTime::parse_rfc3339("yesterday").is_err());
    assert!(NullTime::parse_fine_date("2024-13-05 10:20:30").is_err());
    assert!(NullTime::parse_with_layout("%Y-%m-%d", "05/03/2024").is_err());
}

#[test]
fn serde_uses_rfc3339_or_null() {
    let time = FixedOffset::east_opt(3600)
        .unwrap()
        .with_ymd_and_hms(2024, 3, 5, 10, 20, 30)
        .unwrap();

    let json = serde_json::to_value(NullTime::at(time)).unwrap();
    assert_eq!(json, "2024-03-05T10:20:30+01:00");
    assert_eq!(serde_json::from_value::<NullTime>(json).unwrap(), NullTime::at(time));

    let json = serde_json::to_value(NullTime::null()).unwrap();
    assert!(json.is_null());
    assert!(serde_json::from_value::<NullTime>(json).unwrap().is_null());
}

#[test]
fn fixed_layouts_reject_text_with_loose_separators_or_offsets() {
    assert!(NullTime::parse_date("2024-03-0510:20:30").is_err());
    assert!(NullTime::parse_date_with_zone("2024-03-05 10:20:30+02:00").is_err());
    assert!(NullTime::parse_fine_date_with_zone("2024-03-05 10:20:30.5+02:00").is_err());

    let err = NullTime::parse_date_with_zone("2024-03-05 10:20:30 +0200").unwrap_err();
    assert_eq!(err.layout(), "date_with_zone");
    assert!(NullTime::parse_date_with_zone("2024-03-05 10:20:30 +02").is_err());
}

#[test]
fn time_only_custom_layout_lands_on_epoch_date() {
    let parsed = NullTime::parse_with_layout("%H:%M", "10:00").unwrap();
    assert_eq!(parsed.format_with_layout("%H:%M"), "10:00");
    assert_eq!(parsed.format_date(), "1970-01-01 10:00:00");
}
