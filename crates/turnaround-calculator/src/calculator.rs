//! Due-date calculation over the fixed business calendar.

use chrono::{NaiveDateTime, Timelike};
use tracing::{debug, trace};
use turnaround_core::calendar::{
    end_of_day, is_after_end_of_day, is_start_of_day, is_weekend, shift_days, shift_hours,
    start_of_day, weekend_days_ahead,
};
use turnaround_core::{BusinessCalendar, DueDateError, LandingCorrection, Result, TurnaroundHours};

/// Computes due dates for work items from a submission instant and a
/// turnaround in business hours.
///
/// Stateless; every call is a pure function of its arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DueDateCalculator;

impl DueDateCalculator {
    /// Create a calculator over the standard Monday-Friday, 09:00-17:00 calendar.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Calculate the due date for work submitted at `submit` that needs
    /// `turnaround` business hours.
    ///
    /// Whole business days are added first, then the remaining hours. A
    /// result that lands exactly on 09:00:00 is reported as 17:00:00 of the
    /// previous workday. A zero turnaround returns `submit` unchanged.
    ///
    /// # Errors
    /// - [`DueDateError::WeekendSubmission`] if `submit` is a Saturday or Sunday
    /// - [`DueDateError::HourTooLate`] if `submit` is at or after 18:00
    /// - [`DueDateError::HourTooEarly`] if `submit` is before 09:00
    /// - [`DueDateError::OutOfRange`] if the result is not representable
    pub fn calculate_due_date(
        &self,
        submit: NaiveDateTime,
        turnaround: impl Into<TurnaroundHours>,
    ) -> Result<NaiveDateTime> {
        let turnaround = turnaround.into();
        self.validate_submission(&submit)?;

        if turnaround.is_zero() {
            return Ok(submit);
        }

        let days = turnaround.whole_days();
        let hours = turnaround.remainder_hours();
        debug!(%submit, %turnaround, days, hours, "calculating due date");

        let mut due = submit;
        if days > 0 {
            due = Self::add_days(due, days)?;
        }
        if hours > 0 {
            due = Self::add_hours(due, hours)?;
        }

        if is_start_of_day(&due) {
            due = Self::previous_day_end(due)?;
        }

        debug!(%due, "due date calculated");
        Ok(due)
    }

    /// Reject submissions outside business hours or on weekends.
    pub fn validate_submission(&self, submit: &NaiveDateTime) -> Result<()> {
        if is_weekend(submit) {
            return Err(DueDateError::WeekendSubmission);
        }
        if submit.hour() > BusinessCalendar::END_HOUR {
            return Err(DueDateError::HourTooLate);
        }
        if submit.hour() < BusinessCalendar::START_HOUR {
            return Err(DueDateError::HourTooEarly);
        }
        Ok(())
    }

    /// Advance by whole business days.
    ///
    /// Weekend days are counted once over the original window and added on
    /// top; the landing day is then pushed off a weekend.
    fn add_days(due: NaiveDateTime, days: u32) -> Result<NaiveDateTime> {
        let weekend_days = weekend_days_ahead(&due, days);
        trace!(days, weekend_days, "advancing by business days");

        let shifted = shift_days(due, i64::from(days) + i64::from(weekend_days))?;
        LandingCorrection::FORWARD.apply(shifted)
    }

    /// Advance by fewer than a business day of hours, carrying overflow past
    /// 17:00 into the next morning once.
    fn add_hours(due: NaiveDateTime, hours: u32) -> Result<NaiveDateTime> {
        let tentative = shift_hours(due, i64::from(hours))?;

        let advanced = if is_after_end_of_day(&tentative) {
            let overflow = tentative.hour() - BusinessCalendar::END_HOUR;
            trace!(overflow, "carrying hours into the next day");

            let next_morning = start_of_day(shift_days(due, 1)?)?;
            shift_hours(next_morning, i64::from(overflow))?
        } else {
            tentative
        };

        LandingCorrection::FORWARD.apply(advanced)
    }

    /// Report a 09:00 finish as 17:00 of the previous workday.
    fn previous_day_end(due: NaiveDateTime) -> Result<NaiveDateTime> {
        trace!(%due, "normalizing start-of-day finish");
        let previous = end_of_day(shift_days(due, -1)?)?;
        LandingCorrection::BACKWARD.apply(previous)
    }
}

/// Calculate a due date with the standard calendar.
///
/// Shorthand for [`DueDateCalculator::calculate_due_date`].
pub fn calculate_due_date(submit: NaiveDateTime, turnaround_hours: u32) -> Result<NaiveDateTime> {
    DueDateCalculator::new().calculate_due_date(submit, turnaround_hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, s))
            .expect("valid test datetime")
    }

    #[test]
    fn test_add_days_pushes_through_weekend() {
        let due = DueDateCalculator::add_days(at(2019, 10, 11, 10, 0, 0), 6).expect("add days");
        assert_eq!(due, at(2019, 10, 21, 10, 0, 0));
    }

    #[test]
    fn test_add_hours_carries_overflow() {
        let due = DueDateCalculator::add_hours(at(2019, 10, 7, 15, 30, 0), 4).expect("add hours");
        assert_eq!(due, at(2019, 10, 8, 11, 30, 0));
    }

    #[test]
    fn test_add_hours_within_day() {
        let due = DueDateCalculator::add_hours(at(2019, 10, 7, 10, 0, 0), 7).expect("add hours");
        assert_eq!(due, at(2019, 10, 7, 17, 0, 0));
    }

    #[test]
    fn test_previous_day_end_steps_back_over_weekend() {
        let due = DueDateCalculator::previous_day_end(at(2019, 10, 14, 9, 0, 0))
            .expect("normalize");
        assert_eq!(due, at(2019, 10, 11, 17, 0, 0));
    }

    #[test]
    fn test_validation_order() {
        let calc = DueDateCalculator::new();
        // Sunday 20:00 reports the weekend first
        assert_eq!(
            calc.validate_submission(&at(2019, 10, 6, 20, 0, 0)),
            Err(DueDateError::WeekendSubmission)
        );
        assert_eq!(
            calc.validate_submission(&at(2019, 10, 7, 17, 59, 59)),
            Ok(())
        );
    }
}
