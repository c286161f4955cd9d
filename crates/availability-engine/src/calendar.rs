//! Pure civil-calendar helpers.
//!
//! Every function takes values and returns new values; nothing mutates a shared
//! date. All types are `chrono` naive types: instants are already in the
//! caller's local calendar and no zone conversion ever happens here.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Weekday of a civil instant.
pub fn weekday_of(instant: NaiveDateTime) -> Weekday {
    instant.date().weekday()
}

/// `date` shifted by `n` days (negative goes backwards), or `None` when the
/// result falls outside the representable calendar.
pub fn checked_add_days(date: NaiveDate, n: i64) -> Option<NaiveDate> {
    let days = Days::new(n.unsigned_abs());
    if n >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    }
}

/// `date` shifted by `n` days (negative goes backwards).
///
/// Out-of-range results leave the date unchanged rather than panicking.
pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    checked_add_days(date, n).unwrap_or(date)
}

/// Time-of-day component of a civil instant.
pub fn time_of_day(instant: NaiveDateTime) -> NaiveTime {
    instant.time()
}

/// Midnight at the start of `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// The same time-of-day as `instant`, placed on `date`.
pub fn rebase(instant: NaiveDateTime, date: NaiveDate) -> NaiveDateTime {
    date.and_time(time_of_day(instant))
}
