//! Content-Length header (RFC 3261 Section 20.14). Body octet count;
//! negative values are rejected where wider integers enter the model.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Typed Content-Length header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContentLength(pub u32);

impl ContentLength {
    /// Creates a new Content-Length header.
    pub fn new(length: u32) -> Self {
        Self(length)
    }
}

impl fmt::Display for ContentLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContentLength {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u32>()
            .map(ContentLength)
            .map_err(|e| Error::format(format!("invalid Content-Length value: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!(ContentLength::from_str("349").unwrap().0, 349);
        assert_eq!(ContentLength::new(0).to_string(), "0");
        assert!(ContentLength::from_str("-5").is_err());
    }
}
