//! Factory surface tests: validated constructors, raw-text paths, and
//! the block parser.

use sip_headers::prelude::*;
use sip_headers::types::header_name::expand_compact;
use sip_headers::{Error, HeaderFactory};

#[test]
fn test_numeric_boundaries() {
    let factory = HeaderFactory::new();
    assert!(matches!(
        factory.create_max_forwards(256),
        Err(Error::InvalidFormat(_))
    ));
    assert!(matches!(
        factory.create_max_forwards(-1),
        Err(Error::InvalidFormat(_))
    ));
    assert!(factory.create_max_forwards(0).is_ok());
    assert!(factory.create_max_forwards(255).is_ok());
    assert!(matches!(
        factory.create_cseq(-1, "INVITE"),
        Err(Error::InvalidFormat(_))
    ));
    assert!(matches!(
        factory.create_rseq(1i64 << 31),
        Err(Error::InvalidFormat(_))
    ));
}

#[test]
fn test_create_header_compact_from() {
    let factory = HeaderFactory::new();
    let header = factory
        .create_header("f", "\"A. Bell\" <sip:bell@example.com>")
        .unwrap();
    assert_eq!(header.canonical_name().as_str(), "From");
    assert_eq!(header.name(), "f");
    match &header.value {
        TypedHeader::From(from) => {
            assert_eq!(from.address().display_name(), Some("A. Bell"));
        }
        other => panic!("expected a From header, got {other:?}"),
    }
}

#[test]
fn test_create_headers_block() {
    let factory = HeaderFactory::new();
    let text = "Via: SIP/2.0/UDP a.example.com;branch=z9hG4bK1,SIP/2.0/UDP b.example.com;branch=z9hG4bK2\r\n\
                From: Alice <sip:alice@atlanta.com>;tag=1928301774\r\n\
                i: a84b4c76e66710@pc33.atlanta.com\r\n\
                CSeq: 314159 INVITE\r\n";
    let headers = factory.create_headers(text).unwrap();
    assert_eq!(headers.len(), 5);
    assert!(matches!(headers[0].value, TypedHeader::Via(_)));
    assert!(matches!(headers[1].value, TypedHeader::Via(_)));
    assert_eq!(headers[2].canonical_name(), HeaderName::From);
    assert_eq!(headers[3].name(), "i");
    assert_eq!(headers[3].canonical_name(), HeaderName::CallId);
}

#[test]
fn test_create_headers_repeated_singleton_fails() {
    let factory = HeaderFactory::new();
    let err = factory
        .create_headers("Call-ID: a@x.com\r\ni: b@y.com\r\n")
        .unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
}

#[test]
fn test_create_via() {
    let factory = HeaderFactory::new();
    let via = factory
        .create_via("host.example.com", Some(5060), "UDP", Some("z9hG4bK776asdhds"))
        .unwrap();
    assert!(via
        .to_string()
        .contains("SIP/2.0/UDP host.example.com:5060;branch=z9hG4bK776asdhds"));
}

#[test]
fn test_wildcard_contact() {
    let factory = HeaderFactory::new();
    let contact = factory.create_wildcard_contact();
    assert!(contact.is_wildcard());
    assert_eq!(contact.to_string(), "*");

    let header = factory.create_header("Contact", "*").unwrap();
    match header.value {
        TypedHeader::Contact(c) => assert!(c.is_wildcard()),
        other => panic!("expected a Contact header, got {other:?}"),
    }
}

#[test]
fn test_generic_header_parameter_access_unsupported() {
    let factory = HeaderFactory::new();
    let header = factory.create_header("Allow", "INVITE, ACK, BYE").unwrap();
    match &header.value {
        TypedHeader::Generic(_, generic) => {
            assert!(matches!(
                generic.parameter("x"),
                Err(Error::UnsupportedOperation(_))
            ));
        }
        other => panic!("expected an opaque header, got {other:?}"),
    }
}

#[test]
fn test_compact_expansion_table() {
    let pairs = [
        ("i", "Call-ID"),
        ("m", "Contact"),
        ("e", "Content-Encoding"),
        ("l", "Content-Length"),
        ("c", "Content-Type"),
        ("f", "From"),
        ("s", "Subject"),
        ("k", "Supported"),
        ("t", "To"),
        ("v", "Via"),
        ("o", "Event"),
        ("u", "Allow-Events"),
        ("r", "Refer-To"),
        ("a", "Accept-Contact"),
    ];
    for (compact, long) in pairs {
        assert_eq!(expand_compact(compact), long);
        assert_eq!(expand_compact(long), long);
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn expand_compact_is_idempotent(name in "[A-Za-z][A-Za-z-]{0,12}") {
            let once = expand_compact(&name);
            prop_assert_eq!(expand_compact(once), once);
        }

        #[test]
        fn cseq_round_trips(seq in 0u32..=0x7FFF_FFFF, method in "[A-Z]{3,9}") {
            let factory = HeaderFactory::new();
            let cseq = factory.create_cseq(i64::from(seq), &method).unwrap();
            let reparsed = sip_headers::parser::parse_cseq(&cseq.to_string()).unwrap();
            prop_assert_eq!(reparsed, cseq);
        }

        #[test]
        fn token_params_round_trip(
            names in prop::collection::vec("[a-z][a-z0-9]{0,7}", 1..5),
            values in prop::collection::vec("[a-zA-Z0-9.]{1,8}", 1..5),
        ) {
            let mut params = Params::new();
            for (name, value) in names.iter().zip(values.iter()) {
                params.set(name.clone(), value.clone());
            }
            let encoded = params.encode();
            let (rest, reparsed) =
                sip_headers::parser::common::params_with(';')(&encoded).unwrap();
            prop_assert!(rest.is_empty());
            prop_assert_eq!(reparsed, params);
        }
    }
}
