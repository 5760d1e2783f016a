//! Turnaround Calculator - due dates over business hours.
//!
//! Given a submission instant and a turnaround in business hours, computes
//! when the work is due. Business hours run 09:00-17:00, Monday to Friday;
//! weekends are skipped.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use turnaround_calculator::DueDateCalculator;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Friday 10:01:02 plus one business day
//! let submit = NaiveDate::from_ymd_opt(2019, 10, 11)
//!     .and_then(|d| d.and_hms_opt(10, 1, 2))
//!     .ok_or("invalid date")?;
//!
//! let due = DueDateCalculator::new().calculate_due_date(submit, 8u32)?;
//! assert_eq!(due.to_string(), "2019-10-14 10:01:02");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::unused_self)]

pub mod calculator;

pub use calculator::{calculate_due_date, DueDateCalculator};
pub use turnaround_core::{DueDateError, Result, TurnaroundHours};
