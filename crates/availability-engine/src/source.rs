//! Event sources: where events come from before slots are computed.
//!
//! A source answers three queries for a window. [`fetch_events`] runs them and
//! turns any failed query into an empty list for that category, so a storage
//! problem only ever reduces availability and never aborts the computation.

use std::io::Read;

use chrono::NaiveDate;

use crate::calendar::start_of_day;
use crate::config::SlotPolicy;
use crate::error::Result;
use crate::event::{Event, FetchedEvents};
use crate::window::{availabilities_with_policy, AvailabilityDay, AvailabilityWindow};

/// Backing store for calendar events.
pub trait EventSource {
    /// Appointments starting inside the window.
    fn appointments(&self, window: &AvailabilityWindow) -> Result<Vec<Event>>;

    /// Weekly-recurring openings that may recur inside the window.
    ///
    /// These repeat indefinitely, so they are not bounded by the window start.
    fn recurring_openings(&self, window: &AvailabilityWindow) -> Result<Vec<Event>>;

    /// One-off openings starting inside the window.
    fn non_recurring_openings(&self, window: &AvailabilityWindow) -> Result<Vec<Event>>;
}

/// Run all three queries against `source`, degrading failures to empty lists.
pub fn fetch_events<S: EventSource + ?Sized>(
    source: &S,
    window: &AvailabilityWindow,
) -> FetchedEvents {
    FetchedEvents {
        appointments: or_empty("appointments", source.appointments(window)),
        recurring_openings: or_empty("recurring openings", source.recurring_openings(window)),
        non_recurring_openings: or_empty(
            "non-recurring openings",
            source.non_recurring_openings(window),
        ),
    }
}

/// Fetch events for the window starting at `date` and compute its availability.
pub fn get_availabilities<S: EventSource + ?Sized>(
    source: &S,
    date: NaiveDate,
    policy: &SlotPolicy,
) -> Vec<AvailabilityDay> {
    let window = AvailabilityWindow::with_days(date, policy.horizon_days);
    let events = fetch_events(source, &window);
    tracing::debug!(start = %date, events = events.len(), "fetched events");
    availabilities_with_policy(&events, date, policy)
}

fn or_empty(category: &str, fetched: Result<Vec<Event>>) -> Vec<Event> {
    fetched.unwrap_or_else(|err| {
        tracing::warn!(category, error = %err, "event query failed, treating as empty");
        Vec::new()
    })
}

/// In-memory event store, typically loaded from a JSON array of events.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Parse a JSON array of event records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json_str(&json)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn starting_in<'a>(
        &'a self,
        window: &AvailabilityWindow,
    ) -> impl Iterator<Item = &'a Event> + 'a {
        let from = start_of_day(window.start());
        let until = window.end().map(start_of_day);
        self.events
            .iter()
            .filter(move |e| e.starts_at >= from && until.map_or(true, |u| e.starts_at < u))
    }
}

impl EventSource for EventStore {
    fn appointments(&self, window: &AvailabilityWindow) -> Result<Vec<Event>> {
        Ok(FetchedEvents::partition(self.starting_in(window).cloned()).appointments)
    }

    fn recurring_openings(&self, window: &AvailabilityWindow) -> Result<Vec<Event>> {
        let until = window.end().map(start_of_day);
        Ok(self
            .events
            .iter()
            .filter(|e| e.is_recurring_opening() && until.map_or(true, |u| e.starts_at < u))
            .cloned()
            .collect())
    }

    fn non_recurring_openings(&self, window: &AvailabilityWindow) -> Result<Vec<Event>> {
        Ok(FetchedEvents::partition(self.starting_in(window).cloned()).non_recurring_openings)
    }
}
