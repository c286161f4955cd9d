//! # availability-engine
//!
//! Bookable slots for the next seven days, computed from calendar events.
//!
//! Three kinds of events feed the computation: one-off openings, weekly
//! recurring openings, and appointments. Openings are expanded onto a 30-minute
//! grid and unioned per day, appointments are subtracted, and the result is one
//! entry per day with its slots in chronological order.
//!
//! ```rust
//! use availability_engine::{availabilities_from_events, Event, FetchedEvents};
//! use chrono::NaiveDate;
//!
//! let at = |d: u32, h: u32, m: u32| {
//!     NaiveDate::from_ymd_opt(2014, 8, d).unwrap().and_hms_opt(h, m, 0).unwrap()
//! };
//! let events = FetchedEvents::partition([
//!     Event::weekly_opening(at(4, 9, 30), at(4, 12, 30)),
//!     Event::appointment(at(11, 10, 30), at(11, 11, 30)),
//! ]);
//!
//! let days = availabilities_from_events(&events, NaiveDate::from_ymd_opt(2014, 8, 10).unwrap());
//! assert_eq!(days.len(), 7);
//! assert!(days[0].slots.is_empty());
//! let monday: Vec<String> = days[1].slots.iter().map(|s| s.to_string()).collect();
//! assert_eq!(monday, ["9:30", "10:00", "11:30", "12:00"]);
//! ```
//!
//! ## Modules
//!
//! - [`calendar`] — Pure date helpers (weekday, day offsets, re-basing)
//! - [`event`] — Event records and the partitioned hand-off from a source
//! - [`grid`] — Interval → set of slot labels
//! - [`recurrence`] — Weekly openings → concrete dates in a window
//! - [`aggregate`] — Per-day union of openings minus appointments
//! - [`window`] — The 7-day window and its ordered output
//! - [`source`] — Event sources and failure-tolerant fetching
//! - [`config`] — Slot policy (grid size, horizon, closed days)
//! - [`error`] — Error types

pub mod aggregate;
pub mod calendar;
pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod recurrence;
pub mod source;
pub mod window;

pub use aggregate::{aggregate, aggregate_day, DaySlotSet};
pub use config::SlotPolicy;
pub use error::AvailabilityError;
pub use event::{Event, EventKind, FetchedEvents};
pub use grid::{expand_slots, SlotLabel};
pub use recurrence::{project_weekly, ProjectedOpening};
pub use source::{fetch_events, get_availabilities, EventSource, EventStore};
pub use window::{
    availabilities_from_events, availabilities_with_policy, format_window, AvailabilityDay,
    AvailabilityWindow,
};
