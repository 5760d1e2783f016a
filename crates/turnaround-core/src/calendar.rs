//! Fixed business calendar: Monday to Friday, 09:00 to 17:00.
//!
//! Every helper here works on `chrono::NaiveDateTime`. Shifts go through
//! checked arithmetic and report [`DueDateError::OutOfRange`] instead of
//! panicking at the edges of the representable calendar.

use crate::error::{DueDateError, Result};
use chrono::{Datelike, Duration, NaiveDateTime, Timelike, Weekday};

/// Constants of the business calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BusinessCalendar;

impl BusinessCalendar {
    /// First business hour of a workday.
    pub const START_HOUR: u32 = 9;
    /// Last business hour of a workday.
    pub const END_HOUR: u32 = 17;
    /// Business hours in one workday.
    pub const HOURS_PER_DAY: u32 = Self::END_HOUR - Self::START_HOUR;
    /// ISO ordinal of Friday; anything above is weekend.
    pub const LAST_WORKDAY_ORDINAL: u32 = 5;
}

/// ISO weekday ordinal, Monday = 1 through Sunday = 7.
#[must_use]
pub fn weekday_ordinal(instant: &NaiveDateTime) -> u32 {
    instant.weekday().number_from_monday()
}

/// Whether `instant` falls on a Saturday or Sunday.
#[must_use]
pub fn is_weekend(instant: &NaiveDateTime) -> bool {
    weekday_ordinal(instant) > BusinessCalendar::LAST_WORKDAY_ORDINAL
}

/// Count the weekend days among the `days` calendar days strictly after
/// `instant` (offsets `1..=days`).
#[must_use]
pub fn weekend_days_ahead(instant: &NaiveDateTime, days: u32) -> u32 {
    let start = instant.weekday().num_days_from_monday();
    let full_weeks = days / 7;
    // 0 = Monday, so 5 and 6 are Saturday and Sunday
    let partial = (1..=days % 7)
        .filter(|offset| (start + offset) % 7 >= BusinessCalendar::LAST_WORKDAY_ORDINAL)
        .fold(0, |count, _| count + 1);
    full_weeks * 2 + partial
}

/// Whether the time-of-day is strictly later than 17:00:00.
#[must_use]
pub fn is_after_end_of_day(instant: &NaiveDateTime) -> bool {
    (
        instant.hour(),
        instant.minute(),
        instant.second(),
        instant.nanosecond(),
    ) > (BusinessCalendar::END_HOUR, 0, 0, 0)
}

/// Whether the time-of-day is exactly 09:00:00.
///
/// Seconds and sub-seconds count: 09:00:30 is not the start of the day.
#[must_use]
pub fn is_start_of_day(instant: &NaiveDateTime) -> bool {
    instant.hour() == BusinessCalendar::START_HOUR
        && instant.minute() == 0
        && instant.second() == 0
        && instant.nanosecond() == 0
}

/// Shift `instant` by a signed number of calendar days.
pub fn shift_days(instant: NaiveDateTime, days: i64) -> Result<NaiveDateTime> {
    instant
        .checked_add_signed(Duration::days(days))
        .ok_or(DueDateError::OutOfRange)
}

/// Shift `instant` by a signed number of hours.
pub fn shift_hours(instant: NaiveDateTime, hours: i64) -> Result<NaiveDateTime> {
    instant
        .checked_add_signed(Duration::hours(hours))
        .ok_or(DueDateError::OutOfRange)
}

/// Move `instant` to the 09 hour of its day, keeping minutes and seconds.
pub fn start_of_day(instant: NaiveDateTime) -> Result<NaiveDateTime> {
    with_hour(instant, BusinessCalendar::START_HOUR)
}

/// Move `instant` to the 17 hour of its day, keeping minutes and seconds.
pub fn end_of_day(instant: NaiveDateTime) -> Result<NaiveDateTime> {
    with_hour(instant, BusinessCalendar::END_HOUR)
}

fn with_hour(instant: NaiveDateTime, hour: u32) -> Result<NaiveDateTime> {
    shift_hours(instant, i64::from(hour) - i64::from(instant.hour()))
}

/// Day offsets applied when an instant lands on a weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingCorrection {
    /// Days added when landing on Saturday.
    pub saturday_days: i64,
    /// Days added when landing on Sunday.
    pub sunday_days: i64,
}

impl LandingCorrection {
    /// Push Saturday and Sunday forward to Monday.
    pub const FORWARD: Self = Self {
        saturday_days: 2,
        sunday_days: 1,
    };

    /// Pull Saturday and Sunday back to Friday.
    pub const BACKWARD: Self = Self {
        saturday_days: -1,
        sunday_days: -2,
    };

    /// Move `instant` off a weekend day; workdays pass through unchanged.
    pub fn apply(&self, instant: NaiveDateTime) -> Result<NaiveDateTime> {
        match instant.weekday() {
            Weekday::Sat => shift_days(instant, self.saturday_days),
            Weekday::Sun => shift_days(instant, self.sunday_days),
            _ => Ok(instant),
        }
    }
}
