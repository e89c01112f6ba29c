use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Stable 1-based ordering key for a vocabulary word.
///
/// Serial numbers are assigned by the word-list source; the store treats
/// them as opaque identifiers and never renumbers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SerialNo(u32);

impl SerialNo {
    /// Creates a new `SerialNo`
    #[must_use]
    pub fn new(n: u32) -> Self {
        Self(n)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for SerialNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SerialNo({})", self.0)
    }
}

impl fmt::Display for SerialNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing a serial number from string
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("failed to parse serial number from string")]
pub struct ParseSerialNoError;

impl FromStr for SerialNo {
    type Err = ParseSerialNoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .map(SerialNo::new)
            .map_err(|_| ParseSerialNoError)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_no_display() {
        let id = SerialNo::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_serial_no_from_str() {
        let id: SerialNo = "123".parse().unwrap();
        assert_eq!(id, SerialNo::new(123));
    }

    #[test]
    fn test_serial_no_from_str_invalid() {
        let result = "not-a-number".parse::<SerialNo>();
        assert!(result.is_err());
    }

    #[test]
    fn test_serial_no_ordering() {
        assert!(SerialNo::new(2) < SerialNo::new(10));
    }

    #[test]
    fn test_serial_no_roundtrip() {
        let original = SerialNo::new(42);
        let serialized = original.to_string();
        let deserialized: SerialNo = serialized.parse().unwrap();
        assert_eq!(original, deserialized);
    }
}
