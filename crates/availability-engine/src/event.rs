//! Calendar event records consumed by the slot computation.
//!
//! Events arrive from an external store as a flat list. Only three facts
//! matter: whether the time is open or taken, the civil interval, and (for
//! openings) whether it repeats weekly.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Whether an event adds or removes bookable time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Available, bookable time.
    Opening,
    /// Time that is already taken.
    Appointment,
}

/// A single event record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    /// Repeats every week on the same weekday and time-of-day.
    /// Only meaningful for openings.
    #[serde(default)]
    pub weekly_recurring: bool,
}

impl Event {
    /// A one-off opening.
    pub fn opening(starts_at: NaiveDateTime, ends_at: NaiveDateTime) -> Self {
        Self {
            kind: EventKind::Opening,
            starts_at,
            ends_at,
            weekly_recurring: false,
        }
    }

    /// An opening that repeats every week with no end date.
    pub fn weekly_opening(starts_at: NaiveDateTime, ends_at: NaiveDateTime) -> Self {
        Self {
            kind: EventKind::Opening,
            starts_at,
            ends_at,
            weekly_recurring: true,
        }
    }

    pub fn appointment(starts_at: NaiveDateTime, ends_at: NaiveDateTime) -> Self {
        Self {
            kind: EventKind::Appointment,
            starts_at,
            ends_at,
            weekly_recurring: false,
        }
    }

    /// `starts_at < ends_at`. Malformed events contribute nothing.
    pub fn is_well_formed(&self) -> bool {
        self.starts_at < self.ends_at
    }

    pub fn is_recurring_opening(&self) -> bool {
        self.kind == EventKind::Opening && self.weekly_recurring
    }

    /// Calendar date the event is attributed to (the date it starts on).
    pub fn date(&self) -> NaiveDate {
        self.starts_at.date()
    }
}

/// Events handed over by a source, already split by kind and recurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedEvents {
    pub appointments: Vec<Event>,
    pub recurring_openings: Vec<Event>,
    pub non_recurring_openings: Vec<Event>,
}

impl FetchedEvents {
    /// Split a flat event list into appointments, recurring openings and
    /// one-off openings. The recurrence flag is ignored on appointments.
    pub fn partition(events: impl IntoIterator<Item = Event>) -> Self {
        let mut fetched = Self::default();
        for event in events {
            match event.kind {
                EventKind::Appointment => fetched.appointments.push(event),
                EventKind::Opening if event.weekly_recurring => {
                    fetched.recurring_openings.push(event)
                }
                EventKind::Opening => fetched.non_recurring_openings.push(event),
            }
        }
        fetched
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
            && self.recurring_openings.is_empty()
            && self.non_recurring_openings.is_empty()
    }

    /// Total number of events across all three lists.
    pub fn len(&self) -> usize {
        self.appointments.len() + self.recurring_openings.len() + self.non_recurring_openings.len()
    }
}
