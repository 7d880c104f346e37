//! # Header tokenizer
//!
//! Character-level parsing from raw header text to typed values. The
//! entry points are [`parse_header`] for one `Name: value` line and
//! [`parse_headers`] for a block of lines; both resolve compact names,
//! dispatch on the canonical name, and keep the as-received spelling on
//! the resulting [`Header`].
//!
//! The value grammars live in the submodules: [`common`] for tokens,
//! quoted strings, and parameters; [`address`] for name addresses;
//! [`via`], [`auth`], and [`headers`] for the remaining shapes.

pub mod address;
pub mod auth;
pub mod common;
pub mod headers;
pub mod via;

use crate::error::{Error, Result};
use crate::types::call_id::CallId;
use crate::types::contact::Contact;
use crate::types::date::Date;
use crate::types::extension::{ExtensionHeader, GenericHeader};
use crate::types::from::From as FromHeader;
use crate::types::header::{Header, TypedHeader};
use crate::types::header_name::HeaderName;
use crate::types::record_route::RecordRoute;
use crate::types::route::Route;
use crate::types::to::To;

pub use address::{parse_address, parse_address_params};
pub use auth::parse_auth_params;
pub use common::split_list_items;
pub use headers::{
    parse_accept_contact, parse_content_type, parse_cseq, parse_event, parse_rack,
    parse_subscription_state,
};
pub use via::parse_via;

use crate::types::auth::{
    Authorization, ProxyAuthenticate, ProxyAuthorization, WwwAuthenticate,
};

/// Parses a raw header value under an already-resolved canonical name.
pub(crate) fn parse_typed(name: &HeaderName, value: &str) -> Result<TypedHeader> {
    let value = value.trim();
    Ok(match name {
        HeaderName::AcceptContact => TypedHeader::AcceptContact(parse_accept_contact(value)?),
        HeaderName::Authorization => {
            TypedHeader::Authorization(Authorization(parse_auth_params(value)?))
        }
        HeaderName::CallId => TypedHeader::CallId(CallId::new(value)?),
        HeaderName::Contact => TypedHeader::Contact(value.parse::<Contact>()?),
        HeaderName::ContentLength => TypedHeader::ContentLength(value.parse()?),
        HeaderName::ContentType => TypedHeader::ContentType(parse_content_type(value)?),
        HeaderName::CSeq => TypedHeader::CSeq(parse_cseq(value)?),
        HeaderName::Date => TypedHeader::Date(value.parse::<Date>()?),
        HeaderName::Event => TypedHeader::Event(parse_event(value)?),
        HeaderName::Expires => TypedHeader::Expires(value.parse()?),
        HeaderName::From => TypedHeader::From(value.parse::<FromHeader>()?),
        HeaderName::MaxForwards => TypedHeader::MaxForwards(value.parse()?),
        HeaderName::ProxyAuthenticate => {
            TypedHeader::ProxyAuthenticate(ProxyAuthenticate(parse_auth_params(value)?))
        }
        HeaderName::ProxyAuthorization => {
            TypedHeader::ProxyAuthorization(ProxyAuthorization(parse_auth_params(value)?))
        }
        HeaderName::RAck => TypedHeader::RAck(parse_rack(value)?),
        HeaderName::RecordRoute => TypedHeader::RecordRoute(value.parse::<RecordRoute>()?),
        HeaderName::Route => TypedHeader::Route(value.parse::<Route>()?),
        HeaderName::RSeq => TypedHeader::RSeq(value.parse()?),
        HeaderName::SubscriptionState => {
            TypedHeader::SubscriptionState(parse_subscription_state(value)?)
        }
        HeaderName::To => TypedHeader::To(value.parse::<To>()?),
        HeaderName::Via => TypedHeader::Via(parse_via(value)?),
        HeaderName::WwwAuthenticate => {
            TypedHeader::WwwAuthenticate(WwwAuthenticate(parse_auth_params(value)?))
        }
        HeaderName::Other(other) => {
            if name.is_parameter_less() {
                TypedHeader::Generic(other.clone(), GenericHeader::new(value))
            } else {
                TypedHeader::Extension(other.clone(), extension_value(value))
            }
        }
    })
}

/// Splits an unknown header value into its bare value and trailing
/// parameters. A tail that does not parse as parameters stays part of
/// the opaque value.
fn extension_value(value: &str) -> ExtensionHeader {
    if let Some(split_at) = find_param_start(value) {
        let (head, tail) = value.split_at(split_at);
        if let Ok(("", params)) = common::params_with(';')(tail) {
            let mut ext = ExtensionHeader::new(head.trim_end());
            ext.params = params;
            return ext;
        }
    }
    ExtensionHeader::new(value)
}

/// Index of the first ';' outside quotes and angle brackets, if any.
fn find_param_start(value: &str) -> Option<usize> {
    let mut in_quotes = false;
    let mut in_angle = false;
    let mut escaped = false;
    for (i, c) in value.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            '<' if !in_quotes => in_angle = true,
            '>' if !in_quotes => in_angle = false,
            ';' if !in_quotes && !in_angle => return Some(i),
            _ => {}
        }
    }
    None
}

/// Parses one `Name: value` line into a [`Header`], preserving the
/// as-received (possibly compact) name spelling.
pub fn parse_header(line: &str) -> Result<Header> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (raw_name, raw_value) = line
        .split_once(':')
        .ok_or_else(|| Error::format(format!("header line without colon: {line}")))?;
    let raw_name = raw_name.trim();
    let name = raw_name.parse::<HeaderName>()?;
    log::trace!("parsing header line: {}", raw_name);
    let value = parse_typed(&name, raw_value)?;
    Ok(Header::with_name(raw_name, value))
}

/// Parses a block of header lines into a flat list.
///
/// Lines end in CRLF or bare LF; a line starting with whitespace folds
/// into the previous one. A repeatable header given as one comma-joined
/// line fans out into one [`Header`] per item, except the authentication
/// family where commas separate parameters, not items.
pub fn parse_headers(text: &str) -> Result<Vec<Header>> {
    let mut headers = Vec::new();
    for line in unfold_lines(text) {
        let (raw_name, raw_value) = line
            .split_once(':')
            .ok_or_else(|| Error::format(format!("header line without colon: {line}")))?;
        let raw_name = raw_name.trim();
        let name = raw_name.parse::<HeaderName>()?;
        if name.is_repeatable() && !name.is_auth_family() {
            for item in split_list_items(raw_value) {
                headers.push(Header::with_name(raw_name, parse_typed(&name, item)?));
            }
        } else {
            headers.push(Header::with_name(raw_name, parse_typed(&name, raw_value)?));
        }
    }
    Ok(headers)
}

/// Splits a block into logical lines, joining folded continuations.
fn unfold_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for raw in text.split('\n') {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        if raw.trim().is_empty() {
            continue;
        }
        if raw.starts_with([' ', '\t']) {
            if let Some(last) = lines.last_mut() {
                last.push(' ');
                last.push_str(raw.trim_start());
                continue;
            }
        }
        lines.push(raw.to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_compact_spelling_survives() {
        let header = parse_header("f: \"A. Bell\" <sip:bell@example.com>").unwrap();
        assert_eq!(header.name(), "f");
        assert_eq!(header.canonical_name(), HeaderName::From);
        assert_eq!(
            header.to_string(),
            "f: \"A. Bell\" <sip:bell@example.com>\r\n"
        );
    }

    #[test]
    fn test_parse_headers_comma_fan_out() {
        let headers = parse_headers(
            "Via: SIP/2.0/UDP a.example.com;branch=z9hG4bK1,SIP/2.0/TCP b.example.com;branch=z9hG4bK2\r\n",
        )
        .unwrap();
        assert_eq!(headers.len(), 2);
        assert!(matches!(headers[1].value, TypedHeader::Via(_)));
    }

    #[test]
    fn test_parse_headers_no_fan_out_inside_quotes() {
        let headers =
            parse_headers("Contact: \"Smith, John\" <sip:j@example.com>;q=0.7\r\n").unwrap();
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_parse_headers_auth_commas_are_params() {
        let headers = parse_headers(
            "WWW-Authenticate: Digest realm=\"atlanta.com\", nonce=\"84a4\"\r\n",
        )
        .unwrap();
        assert_eq!(headers.len(), 1);
        match &headers[0].value {
            TypedHeader::WwwAuthenticate(www) => {
                assert_eq!(www.realm(), Some("atlanta.com"));
                assert_eq!(www.nonce(), Some("84a4"));
            }
            other => panic!("unexpected header: {other:?}"),
        }
    }

    #[test]
    fn test_parse_headers_mixed_line_endings() {
        let headers =
            parse_headers("CSeq: 1 INVITE\nMax-Forwards: 70\r\nExpires: 3600\r\n").unwrap();
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn test_parse_headers_folded_line() {
        let headers =
            parse_headers("Subject: I know you're there,\r\n pick up the phone!\r\n").unwrap();
        assert_eq!(headers.len(), 1);
        match &headers[0].value {
            TypedHeader::Generic(name, value) => {
                assert_eq!(name, "Subject");
                assert_eq!(value.value(), "I know you're there, pick up the phone!");
            }
            other => panic!("unexpected header: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_header_with_params() {
        let header = parse_header("X-Custom: foo;flavor=vanilla").unwrap();
        match &header.value {
            TypedHeader::Extension(name, ext) => {
                assert_eq!(name, "X-Custom");
                assert_eq!(ext.value(), "foo");
                assert_eq!(ext.params().get("flavor"), Some("vanilla"));
            }
            other => panic!("unexpected header: {other:?}"),
        }
    }

    #[test]
    fn test_parameter_less_header_stays_opaque() {
        let header = parse_header("User-Agent: softphone/1.0 (linux; x86_64)").unwrap();
        match &header.value {
            TypedHeader::Generic(name, value) => {
                assert_eq!(name, "User-Agent");
                assert_eq!(value.value(), "softphone/1.0 (linux; x86_64)");
            }
            other => panic!("unexpected header: {other:?}"),
        }
    }

    #[test]
    fn test_missing_colon_rejected() {
        assert!(parse_header("not a header").is_err());
    }
}
