//! Turnaround Core - Foundation crate for due-date computation.
//!
//! This crate provides the fixed business calendar, error handling,
//! configuration management, and tracing setup that the calculator
//! crate builds on.
//!
//! # Modules
//!
//! - [`calendar`] - Business-calendar constants, weekday helpers, landing correction
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared input types (`TurnaroundHours`)
//! - [`telemetry`] - `tracing-subscriber` initialization
//!
//! # Example
//!
//! ```rust
//! use turnaround_core::{BusinessCalendar, TurnaroundHours};
//!
//! let hours = TurnaroundHours::new(20);
//! assert_eq!(hours.whole_days(), 2);
//! assert_eq!(hours.remainder_hours(), 4);
//! assert_eq!(BusinessCalendar::HOURS_PER_DAY, 8);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod calendar;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod types;

// Re-export commonly used types
pub use calendar::{BusinessCalendar, LandingCorrection};
pub use config::{AppConfig, LoggingConfig};
pub use error::{ConfigError, ConfigResult, DueDateError, Result};
pub use telemetry::init_tracing;
pub use types::TurnaroundHours;
