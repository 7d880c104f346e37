//! Expires header (RFC 3261 Section 20.19): a delta-seconds interval.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Typed Expires header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Expires(pub u32);

impl Expires {
    /// Creates a new Expires header.
    pub fn new(delta_seconds: u32) -> Self {
        Self(delta_seconds)
    }
}

impl fmt::Display for Expires {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Expires {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u32>()
            .map(Expires)
            .map_err(|e| Error::format(format!("invalid Expires value: {e}")))
    }
}
