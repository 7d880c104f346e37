//! # SIP Date Header
//!
//! Origination time of the message (RFC 3261 Section 20.17). SIP only
//! permits the RFC 1123 date form and the time zone must be `GMT`.

use std::fmt;
use std::str::FromStr;
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Typed Date header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Date(pub DateTime<FixedOffset>);

impl Date {
    /// Creates a Date header from a calendar value.
    pub fn new(when: DateTime<FixedOffset>) -> Self {
        Date(when)
    }

    /// Creates a Date header holding the current time.
    pub fn now() -> Self {
        Date(Utc::now().fixed_offset())
    }

    /// Returns the calendar value, the header's primary payload.
    pub fn datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // SIP-date is rfc1123-date with the zone fixed to GMT.
        write!(
            f,
            "{}",
            self.0.with_timezone(&Utc).format("%a, %d %b %Y %H:%M:%S GMT")
        )
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DateTime::parse_from_rfc2822(s.trim())
            .map(Date)
            .map_err(|e| Error::format(format!("invalid SIP date: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let date = Date::from_str("Sat, 13 Nov 2010 23:29:00 GMT").unwrap();
        assert_eq!(date.to_string(), "Sat, 13 Nov 2010 23:29:00 GMT");
    }

    #[test]
    fn test_offset_normalizes_to_gmt() {
        let date = Date::from_str("Sat, 13 Nov 2010 23:29:00 +0100").unwrap();
        assert_eq!(date.to_string(), "Sat, 13 Nov 2010 22:29:00 GMT");
    }

    #[test]
    fn test_invalid_date_rejected() {
        assert!(Date::from_str("not a date").is_err());
    }
}
