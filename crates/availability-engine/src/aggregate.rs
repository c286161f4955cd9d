//! Per-day slot aggregation: union openings, then subtract appointments.
//!
//! The map built here lives for one computation only. All openings are added
//! before any appointment is removed, so the order events arrive in never
//! changes the result.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::SlotPolicy;
use crate::event::{Event, FetchedEvents};
use crate::grid::{expand_slots, SlotLabel};
use crate::recurrence::project_weekly;
use crate::window::AvailabilityWindow;

/// Bookable slot labels keyed by calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySlotSet {
    days: BTreeMap<NaiveDate, BTreeSet<SlotLabel>>,
    slot_minutes: u32,
}

impl DaySlotSet {
    pub fn new(slot_minutes: u32) -> Self {
        Self {
            days: BTreeMap::new(),
            slot_minutes,
        }
    }

    /// Add every slot of `[starts_at, ends_at)` to the day it starts on.
    ///
    /// Openings on the same day accumulate; overlapping ones add nothing twice.
    pub fn add_opening(&mut self, starts_at: NaiveDateTime, ends_at: NaiveDateTime) {
        let slots = expand_slots(starts_at, ends_at, self.slot_minutes);
        if slots.is_empty() {
            tracing::debug!(%starts_at, %ends_at, "skipping empty or malformed opening");
            return;
        }
        self.days
            .entry(starts_at.date())
            .or_default()
            .extend(slots);
    }

    /// Remove every slot of `[starts_at, ends_at)` from the day it starts on.
    ///
    /// A day with no openings is left untouched.
    pub fn remove_appointment(&mut self, starts_at: NaiveDateTime, ends_at: NaiveDateTime) {
        let Some(day) = self.days.get_mut(&starts_at.date()) else {
            return;
        };
        let taken = expand_slots(starts_at, ends_at, self.slot_minutes);
        if taken.is_empty() {
            tracing::debug!(%starts_at, %ends_at, "skipping empty or malformed appointment");
            return;
        }
        day.retain(|slot| !taken.contains(slot));
    }

    /// Slots on `date` in chronological order; empty when the date has none.
    pub fn slots_on(&self, date: NaiveDate) -> Vec<SlotLabel> {
        self.days
            .get(&date)
            .map(|slots| slots.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Dates that currently hold at least one slot.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days
            .iter()
            .filter(|(_, slots)| !slots.is_empty())
            .map(|(date, _)| *date)
    }
}

/// Aggregate all events into per-day slot sets for the dates in `window`.
///
/// Recurring openings are projected onto their matching window dates, one-off
/// openings and appointments apply to the date they start on. Events outside
/// the window are ignored.
pub fn aggregate(
    events: &FetchedEvents,
    window: &AvailabilityWindow,
    policy: &SlotPolicy,
) -> DaySlotSet {
    let mut slot_set = DaySlotSet::new(policy.slot_minutes);

    for recurring in &events.recurring_openings {
        for projected in project_weekly(recurring, window, policy) {
            slot_set.add_opening(projected.starts_at, projected.ends_at);
        }
    }

    for opening in in_window(&events.non_recurring_openings, window) {
        slot_set.add_opening(opening.starts_at, opening.ends_at);
    }

    for appointment in in_window(&events.appointments, window) {
        slot_set.remove_appointment(appointment.starts_at, appointment.ends_at);
    }

    slot_set
}

/// Final slot set for a single date.
pub fn aggregate_day(
    events: &FetchedEvents,
    date: NaiveDate,
    policy: &SlotPolicy,
) -> BTreeSet<SlotLabel> {
    let window = AvailabilityWindow::with_days(date, 1);
    aggregate(events, &window, policy)
        .slots_on(date)
        .into_iter()
        .collect()
}

fn in_window<'a>(
    events: &'a [Event],
    window: &'a AvailabilityWindow,
) -> impl Iterator<Item = &'a Event> + 'a {
    events.iter().filter(move |event| window.contains(event.date()))
}
