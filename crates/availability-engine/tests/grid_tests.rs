//! Tests for interval → slot label expansion.

use availability_engine::grid::{expand_slots, SlotLabel};
use chrono::{NaiveDateTime, NaiveTime};

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
}

fn at_secs(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn labels(start: &str, end: &str, step: u32) -> Vec<String> {
    expand_slots(at(start), at(end), step)
        .iter()
        .map(|s| s.to_string())
        .collect()
}

// ── Expansion ───────────────────────────────────────────────────────────────

#[test]
fn three_hour_interval_yields_six_half_hour_slots() {
    assert_eq!(
        labels("2018-05-21 09:00", "2018-05-21 12:00", 30),
        ["9:00", "9:30", "10:00", "10:30", "11:00", "11:30"]
    );
}

#[test]
fn end_is_exclusive() {
    let slots = labels("2014-08-11 09:30", "2014-08-11 12:30", 30);
    assert_eq!(slots.last().map(String::as_str), Some("12:00"));
    assert!(!slots.contains(&"12:30".to_string()));
}

#[test]
fn end_off_grid_keeps_last_started_slot() {
    // 10:00 < 10:10, so the 10:00 slot is still produced.
    assert_eq!(
        labels("2018-05-21 09:00", "2018-05-21 10:10", 30),
        ["9:00", "9:30", "10:00"]
    );
}

#[test]
fn grid_follows_start_minute() {
    assert_eq!(
        labels("2018-05-21 09:15", "2018-05-21 10:15", 30),
        ["9:15", "9:45"]
    );
}

#[test]
fn custom_step() {
    assert_eq!(
        labels("2018-05-21 09:00", "2018-05-21 12:00", 60),
        ["9:00", "10:00", "11:00"]
    );
}

#[test]
fn seconds_on_start_do_not_leak_into_labels() {
    let slots = expand_slots(at_secs("2018-05-21 09:30:15"), at("2018-05-21 10:30"), 30);

    let rendered: Vec<String> = slots.iter().map(|s| s.to_string()).collect();
    assert_eq!(rendered, ["9:30", "10:00"]);
    assert!(slots.contains(&SlotLabel::from_hm(9, 30).unwrap()));
    assert!(slots.contains(&SlotLabel::from_hm(10, 0).unwrap()));
}

// ── Malformed and degenerate intervals ──────────────────────────────────────

#[test]
fn empty_interval_yields_nothing() {
    assert!(labels("2018-05-21 09:00", "2018-05-21 09:00", 30).is_empty());
}

#[test]
fn reversed_interval_yields_nothing() {
    assert!(labels("2018-05-21 12:00", "2018-05-21 09:00", 30).is_empty());
}

#[test]
fn zero_step_yields_nothing() {
    assert!(labels("2018-05-21 09:00", "2018-05-21 12:00", 0).is_empty());
}

#[test]
fn interval_crossing_midnight_is_clipped_to_start_day() {
    assert_eq!(
        labels("2018-05-21 23:00", "2018-05-22 01:00", 30),
        ["23:00", "23:30"]
    );
}

// ── SlotLabel ───────────────────────────────────────────────────────────────

#[test]
fn label_renders_without_leading_zero_on_hour() {
    assert_eq!(SlotLabel::from_hm(9, 30).unwrap().to_string(), "9:30");
    assert_eq!(SlotLabel::from_hm(0, 0).unwrap().to_string(), "0:00");
    assert_eq!(SlotLabel::from_hm(14, 0).unwrap().to_string(), "14:00");
}

#[test]
fn label_orders_by_time_not_text() {
    let nine_thirty = SlotLabel::from_hm(9, 30).unwrap();
    let ten = SlotLabel::from_hm(10, 0).unwrap();
    assert!(nine_thirty < ten);
    assert!(nine_thirty.to_string() > ten.to_string());
}

#[test]
fn label_parses_with_or_without_leading_zero() {
    let a: SlotLabel = "9:30".parse().unwrap();
    let b: SlotLabel = "09:30".parse().unwrap();
    assert_eq!(a, b);
    assert!("25:00".parse::<SlotLabel>().is_err());
}

#[test]
fn label_serializes_as_string() {
    let label = SlotLabel::from_hm(9, 30).unwrap();
    assert_eq!(serde_json::to_string(&label).unwrap(), r#""9:30""#);
    let back: SlotLabel = serde_json::from_str(r#""9:30""#).unwrap();
    assert_eq!(back, label);
}

#[test]
fn label_keeps_only_hour_and_minute() {
    let with_seconds = NaiveTime::from_hms_nano_opt(9, 30, 45, 500).unwrap();
    let label = SlotLabel::new(with_seconds);

    assert_eq!(label, SlotLabel::from_hm(9, 30).unwrap());
    assert_eq!(label.time(), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
}

#[test]
fn out_of_range_label_is_rejected() {
    assert!(SlotLabel::from_hm(24, 0).is_none());
}
