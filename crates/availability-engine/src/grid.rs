//! Discretize civil intervals into fixed-step slot labels.
//!
//! A slot label is a time-of-day only. Two labels on different dates compare
//! equal when their times match; the date lives in the map that owns them.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::calendar::{add_days, start_of_day, time_of_day};

/// A bookable time-of-day, rendered as `H:MM` (`"9:30"`, `"14:00"`).
///
/// Only hour and minute are kept: labels built from `9:30:00` and `9:30:15`
/// are the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotLabel(NaiveTime);

impl SlotLabel {
    /// Label for the minute containing `time`; seconds are dropped.
    pub fn new(time: NaiveTime) -> Self {
        Self(time.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(time))
    }

    /// Label for `hour:minute`, or `None` when out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for SlotLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.0.hour(), self.0.minute())
    }
}

impl FromStr for SlotLabel {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s, "%H:%M").map(Self)
    }
}

impl Serialize for SlotLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Expand `[start, end)` into slot labels every `slot_minutes`, starting at
/// `start`'s time-of-day.
///
/// The interval is clipped to the midnight that follows `start`, so a label
/// always belongs to the day the interval starts on and never wraps past
/// 24:00. Empty when `start >= end` or `slot_minutes == 0`.
pub fn expand_slots(
    start: NaiveDateTime,
    end: NaiveDateTime,
    slot_minutes: u32,
) -> BTreeSet<SlotLabel> {
    let mut slots = BTreeSet::new();
    if start >= end || slot_minutes == 0 {
        return slots;
    }

    let next_midnight = start_of_day(add_days(start.date(), 1));
    let limit = end.min(next_midnight);
    let step = Duration::minutes(i64::from(slot_minutes));

    let mut cursor = start;
    while cursor < limit {
        slots.insert(SlotLabel::new(time_of_day(cursor)));
        cursor += step;
    }

    slots
}
