//! # Header names and the name resolver
//!
//! Canonical header names (RFC 3261 Section 20, plus RFCs 3262/3265/3515),
//! their single-letter compact forms, and the classification tables the
//! factory and list machinery dispatch on: which names are parameter-less,
//! which may repeat, and which belong to the authentication family.
//!
//! The tables are `const`; nothing here is mutated after initialization.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Compact form table: single letter to canonical long form.
const COMPACT_FORMS: &[(char, &str)] = &[
    ('i', "Call-ID"),
    ('m', "Contact"),
    ('e', "Content-Encoding"),
    ('l', "Content-Length"),
    ('c', "Content-Type"),
    ('f', "From"),
    ('s', "Subject"),
    ('k', "Supported"),
    ('t', "To"),
    ('v', "Via"),
    ('o', "Event"),
    ('u', "Allow-Events"),
    ('r', "Refer-To"),
    ('a', "Accept-Contact"),
];

/// Headers that can never carry `;param=value` syntax and are modeled as
/// opaque text. Content-Length has a dedicated variant but is forced into
/// this table as well so the generic text path refuses parameters on it.
const PARAMETER_LESS: &[&str] = &[
    "Allow",
    "Allow-Events",
    "Content-Encoding",
    "Content-Language",
    "Content-Length",
    "In-Reply-To",
    "MIME-Version",
    "Organization",
    "Priority",
    "Proxy-Require",
    "Require",
    "Server",
    "Subject",
    "Supported",
    "Timestamp",
    "Unsupported",
    "User-Agent",
];

/// Expands a compact header name to its canonical long form.
///
/// Any input that is not a known single-letter compact form is returned
/// unchanged, so the function is idempotent: expanding an already-long
/// name is a no-op.
pub fn expand_compact(name: &str) -> &str {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => COMPACT_FORMS
            .iter()
            .find(|(compact, _)| compact.eq_ignore_ascii_case(&c))
            .map(|(_, long)| *long)
            .unwrap_or(name),
        _ => name,
    }
}

/// Canonical SIP header names.
///
/// Names with dedicated typed variants get their own discriminant; every
/// other name is carried as `Other` and maps onto the generic extension or
/// opaque header shapes. Equality and hashing fold `Other` names
/// case-insensitively, matching header name comparison on the wire.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub enum HeaderName {
    /// Accept-Contact: caller preferences for contact selection
    AcceptContact,
    /// Authorization: credentials provided by a UA
    Authorization,
    /// Call-ID: unique identifier for this call
    CallId,
    /// Contact: where subsequent requests should be sent
    Contact,
    /// Content-Length: size of the message body
    ContentLength,
    /// Content-Type: media type of the message body
    ContentType,
    /// CSeq: command sequence number
    CSeq,
    /// Date: origination time of the message
    Date,
    /// Event: event package for SUBSCRIBE/NOTIFY
    Event,
    /// Expires: expiration interval
    Expires,
    /// From: initiator of the request
    From,
    /// Max-Forwards: limit on the number of proxies or gateways
    MaxForwards,
    /// Proxy-Authenticate: challenge for proxy authentication
    ProxyAuthenticate,
    /// Proxy-Authorization: credentials for proxy authentication
    ProxyAuthorization,
    /// RAck: acknowledges a reliable provisional response
    RAck,
    /// Record-Route: proxies that want to stay in the path
    RecordRoute,
    /// Route: forced route for a request
    Route,
    /// RSeq: response sequence number for reliable provisionals
    RSeq,
    /// Subscription-State: state of a subscription in NOTIFY
    SubscriptionState,
    /// To: logical recipient of the request
    To,
    /// Via: path taken by the request so far
    Via,
    /// WWW-Authenticate: challenge for authentication
    WwwAuthenticate,
    /// Any other header name, canonical spelling preserved
    Other(String),
}

impl PartialEq for HeaderName {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (HeaderName::Other(a), HeaderName::Other(b)) => a.eq_ignore_ascii_case(b),
            _ => mem::discriminant(self) == mem::discriminant(other),
        }
    }
}

impl Hash for HeaderName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        if let HeaderName::Other(name) = self {
            name.to_ascii_lowercase().hash(state);
        }
    }
}

impl HeaderName {
    /// Returns the canonical name of the header
    pub fn as_str(&self) -> &str {
        match self {
            HeaderName::AcceptContact => "Accept-Contact",
            HeaderName::Authorization => "Authorization",
            HeaderName::CallId => "Call-ID",
            HeaderName::Contact => "Contact",
            HeaderName::ContentLength => "Content-Length",
            HeaderName::ContentType => "Content-Type",
            HeaderName::CSeq => "CSeq",
            HeaderName::Date => "Date",
            HeaderName::Event => "Event",
            HeaderName::Expires => "Expires",
            HeaderName::From => "From",
            HeaderName::MaxForwards => "Max-Forwards",
            HeaderName::ProxyAuthenticate => "Proxy-Authenticate",
            HeaderName::ProxyAuthorization => "Proxy-Authorization",
            HeaderName::RAck => "RAck",
            HeaderName::RecordRoute => "Record-Route",
            HeaderName::Route => "Route",
            HeaderName::RSeq => "RSeq",
            HeaderName::SubscriptionState => "Subscription-State",
            HeaderName::To => "To",
            HeaderName::Via => "Via",
            HeaderName::WwwAuthenticate => "WWW-Authenticate",
            HeaderName::Other(s) => s,
        }
    }

    /// True when the name can never carry `;param=value` syntax.
    pub fn is_parameter_less(&self) -> bool {
        PARAMETER_LESS
            .iter()
            .any(|n| n.eq_ignore_ascii_case(self.as_str()))
    }

    /// True for the WWW-Authenticate/Authorization/Proxy-* family, whose
    /// parameters are comma-separated and whose lists never comma-join.
    pub fn is_auth_family(&self) -> bool {
        matches!(
            self,
            HeaderName::WwwAuthenticate
                | HeaderName::Authorization
                | HeaderName::ProxyAuthenticate
                | HeaderName::ProxyAuthorization
        )
    }

    /// True when more than one instance of the header may appear in a
    /// message, either comma-joined on one line or as separate lines.
    pub fn is_repeatable(&self) -> bool {
        match self {
            HeaderName::Via
            | HeaderName::Contact
            | HeaderName::Route
            | HeaderName::RecordRoute
            | HeaderName::AcceptContact => true,
            _ if self.is_auth_family() => true,
            HeaderName::Other(s) => {
                // Token-list headers repeat; they are all parameter-less.
                matches!(
                    s.to_ascii_lowercase().as_str(),
                    "allow" | "allow-events" | "supported" | "unsupported" | "require"
                        | "proxy-require" | "accept" | "accept-encoding" | "accept-language"
                        | "in-reply-to" | "content-encoding" | "content-language"
                )
            }
            _ => false,
        }
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HeaderName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let expanded = expand_compact(s.trim());
        match expanded.to_ascii_lowercase().as_str() {
            "accept-contact" => Ok(HeaderName::AcceptContact),
            "authorization" => Ok(HeaderName::Authorization),
            "call-id" => Ok(HeaderName::CallId),
            "contact" => Ok(HeaderName::Contact),
            "content-length" => Ok(HeaderName::ContentLength),
            "content-type" => Ok(HeaderName::ContentType),
            "cseq" => Ok(HeaderName::CSeq),
            "date" => Ok(HeaderName::Date),
            "event" => Ok(HeaderName::Event),
            "expires" => Ok(HeaderName::Expires),
            "from" => Ok(HeaderName::From),
            "max-forwards" => Ok(HeaderName::MaxForwards),
            "proxy-authenticate" => Ok(HeaderName::ProxyAuthenticate),
            "proxy-authorization" => Ok(HeaderName::ProxyAuthorization),
            "rack" => Ok(HeaderName::RAck),
            "record-route" => Ok(HeaderName::RecordRoute),
            "route" => Ok(HeaderName::Route),
            "rseq" => Ok(HeaderName::RSeq),
            "subscription-state" => Ok(HeaderName::SubscriptionState),
            "to" => Ok(HeaderName::To),
            "via" => Ok(HeaderName::Via),
            "www-authenticate" => Ok(HeaderName::WwwAuthenticate),
            _ if !expanded.is_empty() => Ok(HeaderName::Other(expanded.to_string())),
            _ => Err(Error::format("empty header name")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_compact() {
        assert_eq!(expand_compact("f"), "From");
        assert_eq!(expand_compact("F"), "From");
        assert_eq!(expand_compact("i"), "Call-ID");
        assert_eq!(expand_compact("u"), "Allow-Events");
        assert_eq!(expand_compact("a"), "Accept-Contact");
        assert_eq!(expand_compact("x"), "x");
    }

    #[test]
    fn test_expand_compact_idempotent() {
        for name in ["f", "From", "Via", "v", "Subject", "s", "unknown"] {
            let once = expand_compact(name);
            assert_eq!(expand_compact(once), once);
        }
    }

    #[test]
    fn test_from_str_compact_and_long() {
        assert_eq!("f".parse::<HeaderName>().unwrap(), HeaderName::From);
        assert_eq!("FROM".parse::<HeaderName>().unwrap(), HeaderName::From);
        assert_eq!("v".parse::<HeaderName>().unwrap(), HeaderName::Via);
        assert_eq!(
            "X-Custom".parse::<HeaderName>().unwrap(),
            HeaderName::Other("X-Custom".to_string())
        );
    }

    #[test]
    fn test_parameter_less_table() {
        assert!(HeaderName::Other("Allow".into()).is_parameter_less());
        assert!(HeaderName::Other("User-Agent".into()).is_parameter_less());
        assert!(HeaderName::ContentLength.is_parameter_less());
        assert!(!HeaderName::Via.is_parameter_less());
        assert!(!HeaderName::From.is_parameter_less());
    }

    #[test]
    fn test_other_name_case_insensitive() {
        assert_eq!(
            HeaderName::Other("X-Custom".into()),
            HeaderName::Other("x-custom".into())
        );
        assert_ne!(
            HeaderName::Other("X-Custom".into()),
            HeaderName::Other("X-Other".into())
        );
        assert_ne!(HeaderName::Via, HeaderName::From);
    }

    #[test]
    fn test_repeatable() {
        assert!(HeaderName::Via.is_repeatable());
        assert!(HeaderName::WwwAuthenticate.is_repeatable());
        assert!(HeaderName::Other("Allow".into()).is_repeatable());
        assert!(!HeaderName::CallId.is_repeatable());
        assert!(!HeaderName::CSeq.is_repeatable());
    }
}
