//! # Header envelope
//!
//! [`TypedHeader`] is a flat tagged union over every typed header shape
//! in the crate, with fallback variants for extension and parameter-less
//! headers. [`Header`] wraps a `TypedHeader` together with the name
//! spelling the header was received under, so a message that arrived
//! with `i: abc@host` can be re-emitted the same way while still being
//! a `Call-ID` for every other purpose.

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::types::accept_contact::AcceptContact;
use crate::types::auth::{
    Authorization, ProxyAuthenticate, ProxyAuthorization, WwwAuthenticate,
};
use crate::types::call_id::CallId;
use crate::types::contact::Contact;
use crate::types::content_length::ContentLength;
use crate::types::content_type::ContentType;
use crate::types::cseq::CSeq;
use crate::types::date::Date;
use crate::types::event::Event;
use crate::types::expires::Expires;
use crate::types::extension::{ExtensionHeader, GenericHeader};
use crate::types::from::From as FromHeader;
use crate::types::header_name::HeaderName;
use crate::types::max_forwards::MaxForwards;
use crate::types::record_route::RecordRoute;
use crate::types::route::Route;
use crate::types::rseq::{RAck, RSeq};
use crate::types::subscription_state::SubscriptionState;
use crate::types::to::To;
use crate::types::via::Via;

/// Every header shape the crate understands, as one flat enum.
///
/// Extension and generic headers carry their canonical (long form) name
/// alongside the payload since no variant tag identifies them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypedHeader {
    AcceptContact(AcceptContact),
    Authorization(Authorization),
    CallId(CallId),
    Contact(Contact),
    ContentLength(ContentLength),
    ContentType(ContentType),
    CSeq(CSeq),
    Date(Date),
    Event(Event),
    Expires(Expires),
    From(FromHeader),
    MaxForwards(MaxForwards),
    ProxyAuthenticate(ProxyAuthenticate),
    ProxyAuthorization(ProxyAuthorization),
    RAck(RAck),
    RecordRoute(RecordRoute),
    Route(Route),
    RSeq(RSeq),
    SubscriptionState(SubscriptionState),
    To(To),
    Via(Via),
    WwwAuthenticate(WwwAuthenticate),
    /// An unknown header with `;param` syntax, tagged with its name.
    Extension(String, ExtensionHeader),
    /// A parameter-less header treated as opaque text, tagged with its
    /// name.
    Generic(String, GenericHeader),
}

impl TypedHeader {
    /// Returns the canonical name this header encodes under.
    pub fn name(&self) -> HeaderName {
        match self {
            TypedHeader::AcceptContact(_) => HeaderName::AcceptContact,
            TypedHeader::Authorization(_) => HeaderName::Authorization,
            TypedHeader::CallId(_) => HeaderName::CallId,
            TypedHeader::Contact(_) => HeaderName::Contact,
            TypedHeader::ContentLength(_) => HeaderName::ContentLength,
            TypedHeader::ContentType(_) => HeaderName::ContentType,
            TypedHeader::CSeq(_) => HeaderName::CSeq,
            TypedHeader::Date(_) => HeaderName::Date,
            TypedHeader::Event(_) => HeaderName::Event,
            TypedHeader::Expires(_) => HeaderName::Expires,
            TypedHeader::From(_) => HeaderName::From,
            TypedHeader::MaxForwards(_) => HeaderName::MaxForwards,
            TypedHeader::ProxyAuthenticate(_) => HeaderName::ProxyAuthenticate,
            TypedHeader::ProxyAuthorization(_) => HeaderName::ProxyAuthorization,
            TypedHeader::RAck(_) => HeaderName::RAck,
            TypedHeader::RecordRoute(_) => HeaderName::RecordRoute,
            TypedHeader::Route(_) => HeaderName::Route,
            TypedHeader::RSeq(_) => HeaderName::RSeq,
            TypedHeader::SubscriptionState(_) => HeaderName::SubscriptionState,
            TypedHeader::To(_) => HeaderName::To,
            TypedHeader::Via(_) => HeaderName::Via,
            TypedHeader::WwwAuthenticate(_) => HeaderName::WwwAuthenticate,
            TypedHeader::Extension(name, _) | TypedHeader::Generic(name, _) => {
                HeaderName::Other(name.clone())
            }
        }
    }

    /// Returns the primary payload rendered without its parameters.
    ///
    /// For an address header this is the address, for Via the protocol
    /// and sent-by, for Digest credentials the scheme line, and so on.
    pub fn value(&self) -> String {
        match self {
            TypedHeader::AcceptContact(_) => "*".to_string(),
            TypedHeader::Authorization(h) => h.to_string(),
            TypedHeader::CallId(h) => h.to_string(),
            TypedHeader::Contact(h) => match h.address() {
                Some(address) => address.to_string(),
                None => "*".to_string(),
            },
            TypedHeader::ContentLength(h) => h.to_string(),
            TypedHeader::ContentType(h) => {
                format!("{}/{}", h.media_type.m_type, h.media_type.m_subtype)
            }
            TypedHeader::CSeq(h) => h.to_string(),
            TypedHeader::Date(h) => h.to_string(),
            TypedHeader::Event(h) => h.package.clone(),
            TypedHeader::Expires(h) => h.to_string(),
            TypedHeader::From(h) => h.address.to_string(),
            TypedHeader::MaxForwards(h) => h.to_string(),
            TypedHeader::ProxyAuthenticate(h) => h.to_string(),
            TypedHeader::ProxyAuthorization(h) => h.to_string(),
            TypedHeader::RAck(h) => h.to_string(),
            TypedHeader::RecordRoute(h) => h.address.to_string(),
            TypedHeader::Route(h) => h.address.to_string(),
            TypedHeader::RSeq(h) => h.to_string(),
            TypedHeader::SubscriptionState(h) => h.state.clone(),
            TypedHeader::To(h) => h.address.to_string(),
            TypedHeader::Via(h) => format!("{} {}", h.sent_protocol, h.sent_by),
            TypedHeader::WwwAuthenticate(h) => h.to_string(),
            TypedHeader::Extension(_, h) => h.value.clone(),
            TypedHeader::Generic(_, h) => h.value.clone(),
        }
    }

    /// True when `other` is the same variant, regardless of payload.
    pub fn same_kind(&self, other: &TypedHeader) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for TypedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedHeader::AcceptContact(h) => h.fmt(f),
            TypedHeader::Authorization(h) => h.fmt(f),
            TypedHeader::CallId(h) => h.fmt(f),
            TypedHeader::Contact(h) => h.fmt(f),
            TypedHeader::ContentLength(h) => h.fmt(f),
            TypedHeader::ContentType(h) => h.fmt(f),
            TypedHeader::CSeq(h) => h.fmt(f),
            TypedHeader::Date(h) => h.fmt(f),
            TypedHeader::Event(h) => h.fmt(f),
            TypedHeader::Expires(h) => h.fmt(f),
            TypedHeader::From(h) => h.fmt(f),
            TypedHeader::MaxForwards(h) => h.fmt(f),
            TypedHeader::ProxyAuthenticate(h) => h.fmt(f),
            TypedHeader::ProxyAuthorization(h) => h.fmt(f),
            TypedHeader::RAck(h) => h.fmt(f),
            TypedHeader::RecordRoute(h) => h.fmt(f),
            TypedHeader::Route(h) => h.fmt(f),
            TypedHeader::RSeq(h) => h.fmt(f),
            TypedHeader::SubscriptionState(h) => h.fmt(f),
            TypedHeader::To(h) => h.fmt(f),
            TypedHeader::Via(h) => h.fmt(f),
            TypedHeader::WwwAuthenticate(h) => h.fmt(f),
            TypedHeader::Extension(_, h) => h.fmt(f),
            TypedHeader::Generic(_, h) => h.fmt(f),
        }
    }
}

/// A typed header together with the name spelling it arrived under.
///
/// Two headers compare equal when their typed values do; the spelling
/// is presentation state only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Header {
    name: String,
    pub value: TypedHeader,
}

impl Header {
    /// Wraps a typed header under its canonical long-form name.
    pub fn new(value: TypedHeader) -> Self {
        let name = value.name().as_str().to_string();
        Header { name, value }
    }

    /// Wraps a typed header under an explicit spelling, typically the
    /// compact form a message arrived with.
    pub fn with_name(name: impl Into<String>, value: TypedHeader) -> Self {
        Header {
            name: name.into(),
            value,
        }
    }

    /// Returns the spelling this header encodes under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the canonical name regardless of spelling.
    pub fn canonical_name(&self) -> HeaderName {
        self.value.name()
    }
}

impl PartialEq for Header {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            return Ok(());
        }
        write!(f, "{}: {}\r\n", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::call_id::CallId;
    use crate::types::cseq::CSeq;

    fn cseq(seq: u32, method: &str) -> TypedHeader {
        TypedHeader::CSeq(CSeq::new(seq, method).unwrap())
    }

    #[test]
    fn test_canonical_line() {
        let header = Header::new(cseq(4711, "INVITE"));
        assert_eq!(header.to_string(), "CSeq: 4711 INVITE\r\n");
    }

    #[test]
    fn test_spelling_preserved_but_ignored_in_equality() {
        let compact = Header::with_name("i", TypedHeader::CallId(CallId::new("abc@host").unwrap()));
        let long = Header::new(TypedHeader::CallId(CallId::new("abc@host").unwrap()));
        assert_eq!(compact, long);
        assert_eq!(compact.to_string(), "i: abc@host\r\n");
        assert_eq!(compact.canonical_name(), HeaderName::CallId);
    }

    #[test]
    fn test_empty_name_encodes_nothing() {
        let header = Header::with_name("", cseq(1, "ACK"));
        assert_eq!(header.to_string(), "");
    }

    #[test]
    fn test_same_kind() {
        assert!(cseq(1, "ACK").same_kind(&cseq(2, "BYE")));
        assert!(!cseq(1, "ACK").same_kind(&TypedHeader::MaxForwards(MaxForwards(70))));
    }
}
