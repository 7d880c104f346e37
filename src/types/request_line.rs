//! Request line (RFC 3261 Section 7.1): `Method Request-URI SIP-Version`.
//! Not part of the header-name space, but it shares the encode/clone/
//! equality discipline of the header model.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::uri::Uri;

/// Protocol version token used by both line records.
pub const SIP_VERSION: &str = "SIP/2.0";

/// The first line of a SIP request.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct RequestLine {
    pub method: String,
    pub uri: Uri,
    pub version: String,
}

// Methods and version tokens compare case-insensitively.
impl PartialEq for RequestLine {
    fn eq(&self, other: &Self) -> bool {
        self.method.eq_ignore_ascii_case(&other.method)
            && self.uri == other.uri
            && self.version.eq_ignore_ascii_case(&other.version)
    }
}

impl RequestLine {
    /// Creates a request line with the standard version token.
    pub fn new(method: impl Into<String>, uri: Uri) -> Result<Self> {
        let method = method.into();
        if method.trim().is_empty() {
            return Err(Error::format("request method must not be empty"));
        }
        Ok(RequestLine {
            method,
            uri,
            version: SIP_VERSION.to_string(),
        })
    }
}

impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}\r\n", self.method, self.uri, self.version)
    }
}

impl FromStr for RequestLine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim().split_whitespace();
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(method), Some(uri), Some(version), None) => Ok(RequestLine {
                method: method.to_string(),
                uri: uri.parse()?,
                version: version.to_string(),
            }),
            _ => Err(Error::format(format!("invalid request line: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let line = RequestLine::new("INVITE", Uri::sip("bob@biloxi.com")).unwrap();
        assert_eq!(line.to_string(), "INVITE sip:bob@biloxi.com SIP/2.0\r\n");
    }

    #[test]
    fn test_round_trip() {
        let line = "REGISTER sip:registrar.biloxi.com SIP/2.0"
            .parse::<RequestLine>()
            .unwrap();
        assert_eq!(line.method, "REGISTER");
        assert_eq!(line.version, "SIP/2.0");
    }

    #[test]
    fn test_structural_equality() {
        let a = RequestLine::new("INVITE", Uri::sip("bob@biloxi.com")).unwrap();
        let b = RequestLine::new("invite", Uri::sip("bob@biloxi.com")).unwrap();
        let c = RequestLine::new("INVITE", Uri::sip("alice@atlanta.com")).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
