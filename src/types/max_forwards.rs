//! # SIP Max-Forwards Header
//!
//! Hop limit header (RFC 3261 Section 20.22). The value is an 8-bit
//! unsigned integer; callers working with wider integers validate the
//! 0..=255 range at the factory boundary.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Represents the Max-Forwards header field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MaxForwards(pub u8);

impl MaxForwards {
    /// Creates a new Max-Forwards header value.
    pub fn new(hops: u8) -> Self {
        Self(hops)
    }

    /// Decrements the value, returning `None` once it reaches zero.
    ///
    /// A proxy that receives `None` must not forward the request and
    /// answers 483 (Too Many Hops) instead.
    pub fn decrement(self) -> Option<Self> {
        if self.0 > 0 {
            Some(Self(self.0 - 1))
        } else {
            None
        }
    }

    /// True when no further hops are permitted.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for MaxForwards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MaxForwards {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u8>()
            .map(MaxForwards)
            .map_err(|e| Error::format(format!("invalid Max-Forwards value: {e}")))
    }
}
