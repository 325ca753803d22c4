//! City identifier type.

use std::fmt;

/// Error returned when parsing an invalid city name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid city: {reason}")]
pub struct InvalidCity {
    reason: &'static str,
}

/// A city name used as a vertex key in the deal graph.
///
/// City names come from the deal data and are free-form, but an empty or
/// whitespace-only name is never valid. This type guarantees that any `City`
/// value holds a non-empty, trimmed name.
///
/// # Examples
///
/// ```
/// use trip_server::domain::City;
///
/// let city = City::parse("Amsterdam").unwrap();
/// assert_eq!(city.as_str(), "Amsterdam");
///
/// // Surrounding whitespace is trimmed
/// assert_eq!(City::parse("  Paris ").unwrap().as_str(), "Paris");
///
/// // Empty input is rejected
/// assert!(City::parse("").is_err());
/// assert!(City::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct City(String);

impl City {
    /// Parse a city name, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidCity> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidCity {
                reason: "must not be empty",
            });
        }
        Ok(City(trimmed.to_string()))
    }

    /// Returns the city name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "City({})", self.0)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
