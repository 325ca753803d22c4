//! Deal reference type.

use std::fmt;

/// Error returned when parsing an invalid deal reference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid deal reference: {reason}")]
pub struct InvalidDealRef {
    reason: &'static str,
}

/// A deal's unique reference.
///
/// The reference is the edge identity for the whole routing engine: the
/// search records references along the chosen path, and the resolver maps
/// them back to full deals. Uniqueness across a deal set is enforced at
/// ingestion, not here; this type only guarantees a non-empty value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DealRef(String);

impl DealRef {
    /// Parse a deal reference, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidDealRef> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidDealRef {
                reason: "must not be empty",
            });
        }
        Ok(DealRef(trimmed.to_string()))
    }

    /// Returns the reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for DealRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DealRef({})", self.0)
    }
}

impl fmt::Display for DealRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_reference() {
        assert_eq!(DealRef::parse("TLA0500").unwrap().as_str(), "TLA0500");
    }

    #[test]
    fn reject_empty() {
        assert!(DealRef::parse("").is_err());
        assert!(DealRef::parse("   ").is_err());
    }
}
