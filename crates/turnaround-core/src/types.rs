//! Shared input types.

use crate::calendar::BusinessCalendar;
use crate::error::DueDateError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Requested turnaround measured in business hours.
///
/// Non-negative by construction. Signed input goes through `TryFrom<i64>`,
/// which rejects negative values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TurnaroundHours(u32);

impl TurnaroundHours {
    /// Create a turnaround of `hours` business hours.
    #[must_use]
    pub const fn new(hours: u32) -> Self {
        Self(hours)
    }

    /// Total business hours.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Whole business days contained in the turnaround.
    #[must_use]
    pub const fn whole_days(self) -> u32 {
        self.0 / BusinessCalendar::HOURS_PER_DAY
    }

    /// Hours left over after removing whole business days.
    #[must_use]
    pub const fn remainder_hours(self) -> u32 {
        self.0 % BusinessCalendar::HOURS_PER_DAY
    }

    /// Whether no time is requested.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for TurnaroundHours {
    fn from(hours: u32) -> Self {
        Self(hours)
    }
}

impl TryFrom<i64> for TurnaroundHours {
    type Error = DueDateError;

    fn try_from(hours: i64) -> Result<Self, Self::Error> {
        if hours < 0 {
            return Err(DueDateError::NegativeTurnaround(hours));
        }
        u32::try_from(hours)
            .map(Self)
            .map_err(|_| DueDateError::OutOfRange)
    }
}

impl fmt::Display for TurnaroundHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decomposition() {
        let hours = TurnaroundHours::new(17);
        assert_eq!(hours.whole_days(), 2);
        assert_eq!(hours.remainder_hours(), 1);

        let hours = TurnaroundHours::new(48);
        assert_eq!(hours.whole_days(), 6);
        assert_eq!(hours.remainder_hours(), 0);

        let hours = TurnaroundHours::new(7);
        assert_eq!(hours.whole_days(), 0);
        assert_eq!(hours.remainder_hours(), 7);
    }

    #[test]
    fn test_zero() {
        assert!(TurnaroundHours::default().is_zero());
        assert!(!TurnaroundHours::from(1).is_zero());
    }

    #[test]
    fn test_try_from_signed() {
        assert_eq!(TurnaroundHours::try_from(16_i64), Ok(TurnaroundHours::new(16)));
        assert_eq!(
            TurnaroundHours::try_from(-1_i64),
            Err(DueDateError::NegativeTurnaround(-1))
        );
        assert_eq!(
            TurnaroundHours::try_from(i64::from(u32::MAX) + 1),
            Err(DueDateError::OutOfRange)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(TurnaroundHours::new(24).to_string(), "24h");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TurnaroundHours::new(8)).expect("serialize hours");
        assert_eq!(json, "8");

        let parsed: TurnaroundHours = serde_json::from_str("16").expect("deserialize hours");
        assert_eq!(parsed.get(), 16);
    }
}
