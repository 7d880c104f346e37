//! # SIP Via Header
//!
//! Path-recording header (RFC 3261 Section 20.42): the `sent-protocol`
//! token, the `sent-by` host-port, and the transaction parameters. The
//! `received` and `ttl` parameters have dedicated validated setters; the
//! generic parameter path stays open for everything else.
//!
//! ## Format
//!
//! ```text
//! Via: SIP/2.0/UDP host.example.com:5060;branch=z9hG4bK776asdhds
//! v: SIP/2.0/TCP 192.0.2.4;received=192.0.2.1;ttl=16
//! ```

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::param::{ParamValue, Params};
use crate::types::uri::HostPort;

/// The `sent-protocol` token of a Via header: `SIP/2.0/UDP`.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Protocol {
    pub name: String,
    pub version: String,
    pub transport: String,
}

impl Default for Protocol {
    fn default() -> Self {
        Protocol {
            name: "SIP".to_string(),
            version: "2.0".to_string(),
            transport: "UDP".to_string(),
        }
    }
}

// All three components are tokens.
impl PartialEq for Protocol {
    fn eq(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
            && self.version == other.version
            && self.transport.eq_ignore_ascii_case(&other.transport)
    }
}

impl Protocol {
    /// Creates a `SIP/2.0/<transport>` protocol token.
    pub fn for_transport(transport: impl Into<String>) -> Self {
        Protocol {
            transport: transport.into(),
            ..Protocol::default()
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.name, self.version, self.transport)
    }
}

/// Typed Via header (one `via-parm`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Via {
    pub sent_protocol: Protocol,
    pub sent_by: HostPort,
    pub params: Params,
}

impl Via {
    /// Creates a Via from its sent-protocol and sent-by parts.
    pub fn new(sent_protocol: Protocol, sent_by: HostPort) -> Self {
        Via {
            sent_protocol,
            sent_by,
            params: Params::new(),
        }
    }

    /// Returns the branch parameter, if present.
    pub fn branch(&self) -> Option<&str> {
        self.params.get("branch")
    }

    /// Sets the branch parameter.
    pub fn set_branch(&mut self, branch: impl Into<String>) {
        self.params.set("branch", branch.into());
    }

    /// Returns the transport token of the sent-protocol.
    pub fn transport(&self) -> &str {
        &self.sent_protocol.transport
    }

    /// Returns the received parameter, if present.
    pub fn received(&self) -> Option<&str> {
        self.params.get("received")
    }

    /// Sets the received parameter; the value must be an IP address.
    pub fn set_received(&mut self, received: &str) -> Result<()> {
        received
            .parse::<IpAddr>()
            .map_err(|_| Error::format(format!("received must be an IP address: {received}")))?;
        self.params.set("received", received);
        Ok(())
    }

    /// Returns the ttl parameter, if present and numeric.
    pub fn ttl(&self) -> Option<u8> {
        self.params
            .entry("ttl")
            .and_then(|e| e.value.as_ref())
            .and_then(|v| v.as_text().parse().ok())
    }

    /// Sets the ttl parameter (0..=255 enforced by the type).
    pub fn set_ttl(&mut self, ttl: u8) {
        self.params.set("ttl", ParamValue::Integer(ttl as i64));
    }

    /// Returns the maddr parameter, if present.
    pub fn maddr(&self) -> Option<&str> {
        self.params.get("maddr")
    }

    /// Returns the rport parameter value, if the flag carries one.
    pub fn rport(&self) -> Option<u16> {
        self.params
            .entry("rport")
            .and_then(|e| e.value.as_ref())
            .and_then(|v| v.as_text().parse().ok())
    }
}

impl fmt::Display for Via {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}{}",
            self.sent_protocol,
            self.sent_by,
            self.params.encode()
        )
    }
}

impl FromStr for Via {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse_via(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::uri::Host;

    fn sample() -> Via {
        let mut via = Via::new(
            Protocol::for_transport("UDP"),
            HostPort::with_port(Host::domain("host.example.com"), 5060),
        );
        via.set_branch("z9hG4bK776asdhds");
        via
    }

    #[test]
    fn test_display() {
        assert_eq!(
            sample().to_string(),
            "SIP/2.0/UDP host.example.com:5060;branch=z9hG4bK776asdhds"
        );
    }

    #[test]
    fn test_received_validation() {
        let mut via = sample();
        assert!(via.set_received("192.0.2.1").is_ok());
        assert_eq!(via.received(), Some("192.0.2.1"));
        assert!(via.set_received("not-an-ip").is_err());
    }

    #[test]
    fn test_ttl() {
        let mut via = sample();
        via.set_ttl(16);
        assert_eq!(via.ttl(), Some(16));
        assert_eq!(via.params.get("ttl"), Some("16"));
        assert!(via.to_string().contains(";ttl=16"));
    }

    #[test]
    fn test_typed_params_survive_reparse() {
        let mut via = sample();
        via.set_ttl(4);
        let reparsed: Via = via.to_string().parse().unwrap();
        assert_eq!(reparsed, via);
    }

    #[test]
    fn test_protocol_case_insensitive_eq() {
        let a = Protocol::for_transport("udp");
        let b = Protocol::for_transport("UDP");
        assert_eq!(a, b);
    }
}
