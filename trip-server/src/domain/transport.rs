//! Transport mode type.

use std::fmt;

/// Error returned when parsing an invalid transport mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid transport mode: {reason}")]
pub struct InvalidTransportMode {
    reason: &'static str,
}

/// A transport mode (bus, train, car, ...) attached to a deal.
///
/// Modes are open-ended string keys rather than a closed enum: the deal data
/// decides which modes exist. Parallel edges between the same two cities are
/// keyed by mode.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TransportMode(String);

impl TransportMode {
    /// Parse a transport mode, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidTransportMode> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidTransportMode {
                reason: "must not be empty",
            });
        }
        Ok(TransportMode(trimmed.to_string()))
    }

    /// Returns the mode as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransportMode({})", self.0)
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_mode() {
        assert_eq!(TransportMode::parse("bus").unwrap().as_str(), "bus");
        assert_eq!(TransportMode::parse(" train ").unwrap().as_str(), "train");
    }

    #[test]
    fn reject_empty() {
        assert!(TransportMode::parse("").is_err());
        assert!(TransportMode::parse("  ").is_err());
    }
}
