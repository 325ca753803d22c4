//! Trip duration handling.
//!
//! Deal data expresses durations as hours plus minutes. The routing engine
//! needs a single linear unit so durations can be summed and compared, so
//! this type normalizes to total minutes.

use std::fmt;

/// Error returned when constructing an invalid duration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid duration: {reason}")]
pub struct InvalidDuration {
    reason: &'static str,
}

/// A trip duration in hours and minutes.
///
/// # Examples
///
/// ```
/// use trip_server::domain::TripDuration;
///
/// let d = TripDuration::new(1, 30).unwrap();
/// assert_eq!(d.total_minutes(), 90);
/// assert_eq!(d.to_string(), "1h30m");
///
/// // The minutes component must stay below an hour
/// assert!(TripDuration::new(1, 60).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TripDuration {
    hours: u32,
    minutes: u32,
}

impl TripDuration {
    /// Create a duration from hours and minutes.
    ///
    /// The minutes component must be less than 60.
    pub fn new(hours: u32, minutes: u32) -> Result<Self, InvalidDuration> {
        if minutes >= 60 {
            return Err(InvalidDuration {
                reason: "minutes component must be less than 60",
            });
        }
        Ok(Self { hours, minutes })
    }

    /// Create a duration from a total number of minutes.
    ///
    /// Used when aggregating leg durations back into hours and minutes
    /// for display.
    pub fn from_total_minutes(total: u64) -> Self {
        Self {
            hours: (total / 60) as u32,
            minutes: (total % 60) as u32,
        }
    }

    /// The hours component.
    pub fn hours(&self) -> u32 {
        self.hours
    }

    /// The minutes component.
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Total minutes, the unit summed by the duration search.
    pub fn total_minutes(&self) -> u64 {
        u64::from(self.hours) * 60 + u64::from(self.minutes)
    }
}

impl fmt::Debug for TripDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TripDuration({}h{:02}m)", self.hours, self.minutes)
    }
}

impl fmt::Display for TripDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h{:02}m", self.hours, self.minutes)
    }
}
