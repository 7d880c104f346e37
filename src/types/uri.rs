//! # URI value types
//!
//! The header model stores and forwards URIs without interpreting them;
//! the URI grammar itself lives outside this crate. [`Uri`] therefore
//! keeps the scheme plus an opaque remainder and round-trips text
//! unchanged. [`Host`] and [`HostPort`] are the small structured pieces
//! the Via header needs for its `sent-by` field.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A domain name or IP address literal.
///
/// IPv6 literals are stored without brackets; `Display` adds them back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Host {
    /// A DNS hostname, compared case-insensitively through `hostname()`
    Domain(String),
    /// An IPv4 or IPv6 address
    Address(std::net::IpAddr),
}

impl Host {
    /// Creates a domain host.
    pub fn domain(name: impl Into<String>) -> Self {
        Host::Domain(name.into())
    }

    /// Returns the host rendered without IPv6 brackets.
    pub fn hostname(&self) -> String {
        match self {
            Host::Domain(d) => d.clone(),
            Host::Address(a) => a.to_string(),
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Host::Domain(d) => write!(f, "{}", d),
            Host::Address(std::net::IpAddr::V6(a)) => write!(f, "[{}]", a),
            Host::Address(a) => write!(f, "{}", a),
        }
    }
}

impl FromStr for Host {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::format("empty host"));
        }
        if s.starts_with('[') && s.ends_with(']') {
            let inner = &s[1..s.len() - 1];
            return inner
                .parse::<std::net::Ipv6Addr>()
                .map(|a| Host::Address(a.into()))
                .map_err(|_| Error::format(format!("invalid IPv6 literal: {s}")));
        }
        if let Ok(addr) = s.parse::<std::net::IpAddr>() {
            return Ok(Host::Address(addr));
        }
        Ok(Host::Domain(s.to_string()))
    }
}

/// A host with an optional port, the `sent-by` of a Via header.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostPort {
    pub host: Host,
    pub port: Option<u16>,
}

impl HostPort {
    /// Creates a host with no port.
    pub fn new(host: Host) -> Self {
        HostPort { host, port: None }
    }

    /// Creates a host with an explicit port.
    pub fn with_port(host: Host, port: u16) -> Self {
        HostPort {
            host,
            port: Some(port),
        }
    }
}

impl fmt::Display for HostPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{}", self.host, port),
            None => write!(f, "{}", self.host),
        }
    }
}

impl FromStr for HostPort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        // IPv6 literals contain colons; split on the colon after `]` only.
        let (host_str, port_str) = if s.starts_with('[') {
            match s.find(']') {
                Some(end) => {
                    let rest = &s[end + 1..];
                    if let Some(p) = rest.strip_prefix(':') {
                        (&s[..=end], Some(p))
                    } else if rest.is_empty() {
                        (s, None)
                    } else {
                        return Err(Error::format(format!("invalid host-port: {s}")));
                    }
                }
                None => return Err(Error::format(format!("unterminated IPv6 literal: {s}"))),
            }
        } else {
            match s.rfind(':') {
                Some(idx) if s[..idx].find(':').is_none() => (&s[..idx], Some(&s[idx + 1..])),
                _ => (s, None),
            }
        };
        let host = host_str.parse::<Host>()?;
        let port = match port_str {
            Some(p) => Some(
                p.parse::<u16>()
                    .map_err(|_| Error::format(format!("invalid port: {p}")))?,
            ),
            None => None,
        };
        Ok(HostPort { host, port })
    }
}

/// A semi-opaque URI: `scheme:rest`.
///
/// The rest of the URI is carried verbatim so that whatever the address
/// grammar produced survives re-encoding untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Uri {
    /// URI scheme (`sip`, `sips`, `tel`, ...)
    pub scheme: String,
    /// Everything after the first colon, uninterpreted
    pub rest: String,
}

impl Uri {
    /// Creates a URI from its scheme and opaque remainder.
    pub fn new(scheme: impl Into<String>, rest: impl Into<String>) -> Self {
        Uri {
            scheme: scheme.into(),
            rest: rest.into(),
        }
    }

    /// Creates a `sip:` URI.
    pub fn sip(rest: impl Into<String>) -> Self {
        Uri::new("sip", rest)
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scheme, self.rest)
    }
}

impl FromStr for Uri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.find(':') {
            Some(idx) if idx > 0 => Ok(Uri {
                scheme: s[..idx].to_string(),
                rest: s[idx + 1..].to_string(),
            }),
            _ => Err(Error::format(format!("URI without scheme: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_round_trip() {
        let uri = Uri::from_str("sip:bell@example.com;transport=tcp").unwrap();
        assert_eq!(uri.scheme, "sip");
        assert_eq!(uri.to_string(), "sip:bell@example.com;transport=tcp");
    }

    #[test]
    fn test_uri_without_scheme_rejected() {
        assert!(Uri::from_str("bell@example.com").is_err());
    }

    #[test]
    fn test_host_port_parsing() {
        let hp = HostPort::from_str("host.example.com:5060").unwrap();
        assert_eq!(hp.host, Host::domain("host.example.com"));
        assert_eq!(hp.port, Some(5060));
        assert_eq!(hp.to_string(), "host.example.com:5060");
    }

    #[test]
    fn test_host_port_ipv6() {
        let hp = HostPort::from_str("[2001:db8::1]:5061").unwrap();
        assert_eq!(hp.port, Some(5061));
        assert_eq!(hp.to_string(), "[2001:db8::1]:5061");

        let bare = HostPort::from_str("[2001:db8::1]").unwrap();
        assert_eq!(bare.port, None);
    }

    #[test]
    fn test_invalid_port() {
        assert!(HostPort::from_str("host:99999").is_err());
    }
}
