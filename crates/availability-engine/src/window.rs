//! The fixed availability horizon and the per-day output it is formatted into.
//!
//! A window is the half-open date range `[start, start + days)`. The output is
//! one [`AvailabilityDay`] per date in that range, in ascending order, with an
//! empty slot list for days that have nothing bookable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::{aggregate, DaySlotSet};
use crate::calendar::checked_add_days;
use crate::config::SlotPolicy;
use crate::event::FetchedEvents;
use crate::grid::SlotLabel;

/// Number of days in the default availability window.
pub const DEFAULT_HORIZON_DAYS: u32 = 7;

/// Longest window a policy may ask for.
pub const MAX_HORIZON_DAYS: u32 = 366;

/// Consecutive calendar dates for which availability is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityWindow {
    start: NaiveDate,
    days: u32,
}

impl AvailabilityWindow {
    /// The default 7-day window starting at `start`.
    pub fn new(start: NaiveDate) -> Self {
        Self::with_days(start, DEFAULT_HORIZON_DAYS)
    }

    pub fn with_days(start: NaiveDate, days: u32) -> Self {
        Self { start, days }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// First date after the window (exclusive bound).
    ///
    /// `None` when that date is past the last representable date, in which
    /// case the window runs to the end of the calendar.
    pub fn end(&self) -> Option<NaiveDate> {
        checked_add_days(self.start, i64::from(self.days))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && self.end().map_or(true, |end| date < end)
    }

    /// Dates in the window, strictly ascending. Stops early at the end of
    /// the representable calendar instead of repeating a date.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..self.days).map_while(move |offset| checked_add_days(start, i64::from(offset)))
    }
}

/// Bookable slots for a single date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityDay {
    pub date: NaiveDate,
    /// Chronological; empty when nothing is bookable.
    pub slots: Vec<SlotLabel>,
}

/// Emit one entry per window date from an aggregated slot set.
///
/// Only a window ending past the last representable date yields fewer than
/// `window.days()` entries.
pub fn format_window(slot_set: &DaySlotSet, window: &AvailabilityWindow) -> Vec<AvailabilityDay> {
    window
        .dates()
        .map(|date| {
            let mut slots = slot_set.slots_on(date);
            slots.sort();
            AvailabilityDay { date, slots }
        })
        .collect()
}

/// Availability for the 7 days starting at `date`, using the default policy.
///
/// Always returns exactly 7 entries, even for an empty event set.
pub fn availabilities_from_events(events: &FetchedEvents, date: NaiveDate) -> Vec<AvailabilityDay> {
    availabilities_with_policy(events, date, &SlotPolicy::default())
}

/// Availability for `policy.horizon_days` days starting at `date`.
pub fn availabilities_with_policy(
    events: &FetchedEvents,
    date: NaiveDate,
    policy: &SlotPolicy,
) -> Vec<AvailabilityDay> {
    let window = AvailabilityWindow::with_days(date, policy.horizon_days);
    let slot_set = aggregate(events, &window, policy);
    let days = format_window(&slot_set, &window);

    tracing::debug!(
        start = %window.start(),
        days = days.len(),
        slots = days.iter().map(|d| d.slots.len()).sum::<usize>(),
        "computed availability window"
    );
    days
}
