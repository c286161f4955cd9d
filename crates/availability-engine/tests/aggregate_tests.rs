//! Tests for per-day union of openings and subtraction of appointments.

use availability_engine::aggregate::{aggregate, aggregate_day, DaySlotSet};
use availability_engine::{AvailabilityWindow, Event, FetchedEvents, SlotPolicy};
use chrono::{NaiveDate, NaiveDateTime};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
}

fn at_secs(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn opening(start: &str, end: &str) -> Event {
    Event::opening(at(start), at(end))
}

fn weekly(start: &str, end: &str) -> Event {
    Event::weekly_opening(at(start), at(end))
}

fn appointment(start: &str, end: &str) -> Event {
    Event::appointment(at(start), at(end))
}

fn day_labels(events: &FetchedEvents, day: &str) -> Vec<String> {
    aggregate_day(events, date(day), &SlotPolicy::default())
        .iter()
        .map(|s| s.to_string())
        .collect()
}

// ── Union ───────────────────────────────────────────────────────────────────

#[test]
fn two_separate_openings_on_one_day_accumulate() {
    let events = FetchedEvents::partition([
        opening("2018-05-21 09:00", "2018-05-21 12:00"),
        opening("2018-05-21 14:00", "2018-05-21 16:00"),
    ]);

    let slots = day_labels(&events, "2018-05-21");
    assert_eq!(slots.len(), 10);
    assert_eq!(slots.first().map(String::as_str), Some("9:00"));
    assert_eq!(slots.last().map(String::as_str), Some("15:30"));
}

#[test]
fn recurring_and_one_off_openings_union_without_double_counting() {
    // 2018-05-21 is a Monday.
    let events = FetchedEvents::partition([
        weekly("2018-05-21 09:00", "2018-05-21 11:00"),
        opening("2018-05-21 09:30", "2018-05-21 12:00"),
    ]);

    assert_eq!(
        day_labels(&events, "2018-05-21"),
        ["9:00", "9:30", "10:00", "10:30", "11:00", "11:30"]
    );
}

#[test]
fn identical_openings_count_once() {
    let once = FetchedEvents::partition([opening("2018-05-21 09:00", "2018-05-21 12:00")]);
    let twice = FetchedEvents::partition([
        opening("2018-05-21 09:00", "2018-05-21 12:00"),
        opening("2018-05-21 09:00", "2018-05-21 12:00"),
    ]);

    assert_eq!(day_labels(&once, "2018-05-21"), day_labels(&twice, "2018-05-21"));
}

#[test]
fn malformed_opening_adds_nothing() {
    let events = FetchedEvents::partition([
        opening("2018-05-21 12:00", "2018-05-21 09:00"),
        weekly("2018-05-21 10:00", "2018-05-21 10:00"),
    ]);

    assert!(day_labels(&events, "2018-05-21").is_empty());
}

// ── Subtraction ─────────────────────────────────────────────────────────────

#[test]
fn overlapping_appointments_leave_one_slot() {
    let events = FetchedEvents::partition([
        appointment("2018-05-21 09:00", "2018-05-21 11:00"),
        appointment("2018-05-21 10:00", "2018-05-21 11:30"),
        opening("2018-05-21 09:00", "2018-05-21 12:00"),
    ]);

    assert_eq!(day_labels(&events, "2018-05-21"), ["11:30"]);
}

#[test]
fn appointment_order_does_not_matter() {
    // Appointments listed before openings still subtract after the union.
    let events = FetchedEvents {
        appointments: vec![appointment("2018-05-21 10:00", "2018-05-21 11:00")],
        recurring_openings: vec![],
        non_recurring_openings: vec![opening("2018-05-21 09:00", "2018-05-21 12:00")],
    };

    assert_eq!(
        day_labels(&events, "2018-05-21"),
        ["9:00", "9:30", "11:00", "11:30"]
    );
}

#[test]
fn appointment_on_day_without_openings_is_a_no_op() {
    let events = FetchedEvents::partition([
        appointment("2018-05-22 17:30", "2018-05-22 18:30"),
        opening("2018-05-21 09:30", "2018-05-21 20:00"),
    ]);

    assert_eq!(day_labels(&events, "2018-05-21").len(), 21);
    assert!(day_labels(&events, "2018-05-22").is_empty());
}

#[test]
fn malformed_appointment_removes_nothing() {
    let events = FetchedEvents::partition([
        opening("2018-05-21 09:00", "2018-05-21 12:00"),
        appointment("2018-05-21 11:00", "2018-05-21 09:00"),
    ]);

    assert_eq!(day_labels(&events, "2018-05-21").len(), 6);
}

#[test]
fn appointment_removes_only_from_its_own_day() {
    let events = FetchedEvents::partition([
        weekly("2018-05-21 09:00", "2018-05-21 10:00"),
        opening("2018-05-22 09:00", "2018-05-22 10:00"),
        appointment("2018-05-22 09:00", "2018-05-22 10:00"),
    ]);

    assert_eq!(day_labels(&events, "2018-05-21"), ["9:00", "9:30"]);
    assert!(day_labels(&events, "2018-05-22").is_empty());
}

#[test]
fn instants_with_seconds_share_slots_with_whole_minutes() {
    let events = FetchedEvents::partition([
        Event::opening(at_secs("2018-05-21 09:30:00"), at("2018-05-21 10:30")),
        Event::opening(at_secs("2018-05-21 09:30:15"), at("2018-05-21 10:30")),
        Event::appointment(at_secs("2018-05-21 10:00:45"), at("2018-05-21 10:30")),
    ]);

    assert_eq!(day_labels(&events, "2018-05-21"), ["9:30"]);
}

// ── Window bounds ───────────────────────────────────────────────────────────

#[test]
fn events_outside_window_are_ignored() {
    let events = FetchedEvents::partition([
        opening("2018-05-20 09:00", "2018-05-20 12:00"),
        opening("2018-05-28 09:00", "2018-05-28 12:00"),
    ]);
    let window = AvailabilityWindow::new(date("2018-05-21"));

    let slot_set = aggregate(&events, &window, &SlotPolicy::default());

    assert_eq!(slot_set.dates().count(), 0);
}

// ── DaySlotSet ──────────────────────────────────────────────────────────────

#[test]
fn missing_day_reads_as_empty() {
    let slot_set = DaySlotSet::new(30);
    assert!(slot_set.slots_on(date("2018-05-21")).is_empty());
}

#[test]
fn fully_booked_day_is_not_listed_in_dates() {
    let mut slot_set = DaySlotSet::new(30);
    slot_set.add_opening(at("2018-05-21 09:00"), at("2018-05-21 10:00"));
    slot_set.remove_appointment(at("2018-05-21 09:00"), at("2018-05-21 10:00"));

    assert_eq!(slot_set.dates().count(), 0);
    assert!(slot_set.slots_on(date("2018-05-21")).is_empty());
}
