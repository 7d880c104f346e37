//! # Header factory
//!
//! The construction/validation surface callers use to build headers
//! field-by-field or from raw text. Every numeric constructor takes a
//! wide signed integer and rejects out-of-range input loudly; nothing is
//! clamped. The raw-text paths defer to [`crate::parser`] and keep the
//! caller-supplied (possibly compact) name spelling on the result.

use chrono::{DateTime, FixedOffset};

use crate::error::{Error, Result};
use crate::parser;
use crate::types::accept_contact::AcceptContact;
use crate::types::address::Address;
use crate::types::auth::{
    Authorization, ProxyAuthenticate, ProxyAuthorization, WwwAuthenticate,
};
use crate::types::call_id::CallId;
use crate::types::contact::Contact;
use crate::types::content_length::ContentLength;
use crate::types::content_type::ContentType;
use crate::types::cseq::{CSeq, MAX_SEQ};
use crate::types::date::Date;
use crate::types::event::Event;
use crate::types::expires::Expires;
use crate::types::extension::ExtensionHeader;
use crate::types::from::From as FromHeader;
use crate::types::header::{Header, TypedHeader};
use crate::types::header_name::HeaderName;
use crate::types::max_forwards::MaxForwards;
use crate::types::record_route::RecordRoute;
use crate::types::request_line::RequestLine;
use crate::types::route::Route;
use crate::types::rseq::{RAck, RSeq};
use crate::types::status_line::StatusLine;
use crate::types::subscription_state::SubscriptionState;
use crate::types::to::To;
use crate::types::uri::{Host, HostPort, Uri};
use crate::types::via::{Protocol, Via};

fn checked_seq(field: &str, value: i64) -> Result<u32> {
    if !(0..=MAX_SEQ as i64).contains(&value) {
        return Err(Error::format(format!(
            "{field} must be within 0..=2**31-1, got {value}"
        )));
    }
    Ok(value as u32)
}

fn checked_u32(field: &str, value: i64) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| Error::format(format!("{field} must be a non-negative 32-bit value, got {value}")))
}

/// Stateless constructor surface for the header model.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderFactory;

impl HeaderFactory {
    pub fn new() -> Self {
        HeaderFactory
    }

    /// `CSeq: {seq} {method}`; the sequence number is bounded to 2^31-1.
    pub fn create_cseq(&self, seq: i64, method: &str) -> Result<CSeq> {
        CSeq::new(checked_seq("CSeq sequence number", seq)?, method)
    }

    /// `Call-ID: local[@host]`, validating the word character class.
    pub fn create_call_id(&self, call_id: &str) -> Result<CallId> {
        CallId::new(call_id)
    }

    pub fn create_contact(&self, address: Address) -> Contact {
        Contact::new(address)
    }

    /// The `Contact: *` form used by REGISTER de-registration.
    pub fn create_wildcard_contact(&self) -> Contact {
        Contact::wildcard()
    }

    pub fn create_content_length(&self, length: i64) -> Result<ContentLength> {
        Ok(ContentLength::new(checked_u32("Content-Length", length)?))
    }

    pub fn create_content_type(&self, m_type: &str, m_subtype: &str) -> Result<ContentType> {
        ContentType::from_parts(m_type, m_subtype)
    }

    pub fn create_date(&self, when: DateTime<FixedOffset>) -> Date {
        Date::new(when)
    }

    pub fn create_event(&self, package: &str) -> Result<Event> {
        Event::new(package)
    }

    pub fn create_expires(&self, delta_seconds: i64) -> Result<Expires> {
        Ok(Expires::new(checked_u32("Expires", delta_seconds)?))
    }

    /// An unknown header built from structured parts rather than text.
    pub fn create_extension(&self, name: &str, value: &str) -> Result<Header> {
        let canonical = name.parse::<HeaderName>()?;
        if canonical.is_parameter_less() {
            return Err(Error::UnsupportedOperation(format!(
                "{} is parameter-less; use create_header",
                canonical.as_str()
            )));
        }
        Ok(Header::with_name(
            name,
            TypedHeader::Extension(
                canonical.as_str().to_string(),
                ExtensionHeader::new(value),
            ),
        ))
    }

    pub fn create_from(&self, address: Address) -> FromHeader {
        FromHeader::new(address)
    }

    pub fn create_to(&self, address: Address) -> To {
        To::new(address)
    }

    pub fn create_route(&self, address: Address) -> Route {
        Route::new(address)
    }

    pub fn create_record_route(&self, address: Address) -> RecordRoute {
        RecordRoute::new(address)
    }

    /// `Max-Forwards` bounded to 0..=255.
    pub fn create_max_forwards(&self, hops: i64) -> Result<MaxForwards> {
        u8::try_from(hops)
            .map(MaxForwards::new)
            .map_err(|_| Error::format(format!("Max-Forwards must be within 0..=255, got {hops}")))
    }

    pub fn create_via(
        &self,
        host: &str,
        port: Option<u16>,
        transport: &str,
        branch: Option<&str>,
    ) -> Result<Via> {
        let host = host.parse::<Host>()?;
        let sent_by = match port {
            Some(port) => HostPort::with_port(host, port),
            None => HostPort::new(host),
        };
        let mut via = Via::new(Protocol::for_transport(transport), sent_by);
        if let Some(branch) = branch {
            via.set_branch(branch);
        }
        Ok(via)
    }

    pub fn create_rseq(&self, seq: i64) -> Result<RSeq> {
        RSeq::new(checked_seq("RSeq", seq)?)
    }

    pub fn create_rack(&self, rseq: i64, cseq: i64, method: &str) -> Result<RAck> {
        RAck::new(
            checked_seq("RAck response number", rseq)?,
            checked_seq("RAck sequence number", cseq)?,
            method,
        )
    }

    pub fn create_subscription_state(&self, state: &str) -> Result<SubscriptionState> {
        SubscriptionState::new(state)
    }

    pub fn create_accept_contact(&self) -> AcceptContact {
        AcceptContact::new()
    }

    pub fn create_www_authenticate(&self) -> WwwAuthenticate {
        WwwAuthenticate::new()
    }

    pub fn create_authorization(&self) -> Authorization {
        Authorization::new()
    }

    pub fn create_proxy_authenticate(&self) -> ProxyAuthenticate {
        ProxyAuthenticate::new()
    }

    pub fn create_proxy_authorization(&self) -> ProxyAuthorization {
        ProxyAuthorization::new()
    }

    pub fn create_request_line(&self, method: &str, uri: Uri) -> Result<RequestLine> {
        RequestLine::new(method, uri)
    }

    pub fn create_status_line(&self, status_code: u16, reason: Option<String>) -> Result<StatusLine> {
        StatusLine::new(status_code, reason)
    }

    /// Builds a header from a raw value under a possibly-compact name.
    ///
    /// The compact name expands for dispatch and type selection, but the
    /// caller's spelling is stamped back onto the result so it survives
    /// re-encoding.
    pub fn create_header(&self, name: &str, raw_value: &str) -> Result<Header> {
        let trimmed = name.trim();
        let canonical = trimmed.parse::<HeaderName>()?;
        log::debug!("creating header {} ({})", canonical.as_str(), trimmed);
        let value = parser::parse_typed(&canonical, raw_value)?;
        Ok(Header::with_name(trimmed, value))
    }

    /// Parses a block of header lines into a flat list, fanning a
    /// comma-joined repeatable header out into one entry per item and
    /// failing when a singleton header appears more than once.
    pub fn create_headers(&self, text: &str) -> Result<Vec<Header>> {
        let headers = parser::parse_headers(text)?;
        let mut seen: Vec<HeaderName> = Vec::new();
        for header in &headers {
            let name = header.canonical_name();
            if seen.contains(&name) && !name.is_repeatable() {
                return Err(Error::mismatch(
                    format!("a single {}", name.as_str()),
                    "repeated instances".to_string(),
                ));
            }
            seen.push(name);
        }
        Ok(headers)
    }
}
