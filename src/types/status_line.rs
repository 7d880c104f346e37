//! Status line (RFC 3261 Section 7.2): `SIP-Version Status-Code
//! Reason-Phrase`. Equality is fully structural, matching
//! [`crate::types::request_line::RequestLine`].

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::request_line::SIP_VERSION;

/// The first line of a SIP response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLine {
    pub version: String,
    pub status_code: u16,
    pub reason: Option<String>,
}

impl StatusLine {
    /// Creates a status line with the standard version token, rejecting
    /// codes outside 100..=699.
    pub fn new(status_code: u16, reason: Option<String>) -> Result<Self> {
        if !(100..=699).contains(&status_code) {
            return Err(Error::format(format!(
                "status code out of range: {status_code}"
            )));
        }
        Ok(StatusLine {
            version: SIP_VERSION.to_string(),
            status_code,
            reason,
        })
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            Some(reason) => write!(f, "{} {} {}\r\n", self.version, self.status_code, reason),
            None => write!(f, "{} {}\r\n", self.version, self.status_code),
        }
    }
}

impl FromStr for StatusLine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut parts = s.splitn(3, ' ');
        let version = parts
            .next()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::format(format!("invalid status line: {s}")))?;
        let code = parts
            .next()
            .ok_or_else(|| Error::format(format!("invalid status line: {s}")))?
            .parse::<u16>()
            .map_err(|e| Error::format(format!("invalid status code: {e}")))?;
        let reason = parts.next().map(|r| r.to_string());
        let mut line = StatusLine::new(code, reason)?;
        line.version = version.to_string();
        Ok(line)
    }
}
