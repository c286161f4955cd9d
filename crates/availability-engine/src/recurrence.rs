//! Project weekly-recurring openings onto the concrete dates of a window.
//!
//! A weekly opening recurs on the weekday of its `starts_at`, from its own start
//! date onward, with no end date. Projection keeps the time-of-day and moves
//! only the date.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::calendar::{add_days, checked_add_days, rebase, weekday_of};
use crate::config::SlotPolicy;
use crate::event::Event;
use crate::window::AvailabilityWindow;

/// One occurrence of a recurring opening, re-based onto a concrete date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedOpening {
    pub date: NaiveDate,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
}

/// Every occurrence of `opening` that falls inside `window`.
///
/// An occurrence lands on each date in the window that shares the weekday of
/// `opening.starts_at` and is not earlier than the opening's own start date.
/// Dates on a weekday the policy closes for recurring openings (Sunday by
/// default) are dropped.
///
/// The end instant moves by the same number of days as the start, so an
/// opening keeps its duration. Malformed openings project like any other and
/// expand to no slots later.
pub fn project_weekly(
    opening: &Event,
    window: &AvailabilityWindow,
    policy: &SlotPolicy,
) -> Vec<ProjectedOpening> {
    let first_date = opening.date();
    let mut projected = Vec::new();

    let mut date = next_occurrence(opening, window.start());
    while window.contains(date) {
        if !policy.is_closed_for_recurring(date.weekday()) {
            let offset = (date - first_date).num_days();
            projected.push(ProjectedOpening {
                date,
                starts_at: rebase(opening.starts_at, date),
                ends_at: rebase(opening.ends_at, add_days(opening.ends_at.date(), offset)),
            });
        }

        match checked_add_days(date, 7) {
            Some(next) => date = next,
            None => break,
        }
    }

    tracing::debug!(
        weekday = %weekday_of(opening.starts_at),
        occurrences = projected.len(),
        "projected weekly opening"
    );
    projected
}

/// Date of the first occurrence of `opening` on or after `from`.
///
/// Closed weekdays are not considered here; see [`project_weekly`].
pub fn next_occurrence(opening: &Event, from: NaiveDate) -> NaiveDate {
    let first_date = opening.date();
    if from <= first_date {
        return first_date;
    }
    match (from - first_date).num_days().rem_euclid(7) {
        0 => from,
        remainder => add_days(from, 7 - remainder),
    }
}
