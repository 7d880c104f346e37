//! Value grammars for the headers whose shape is more than an address or
//! a bare number.

use nom::{
    character::complete::{char, digit1, space1},
    sequence::tuple,
};

use crate::error::{Error, Result};
use crate::types::accept_contact::AcceptContact;
use crate::types::content_type::{ContentType, MediaType};
use crate::types::cseq::CSeq;
use crate::types::event::Event;
use crate::types::rseq::RAck;
use crate::types::subscription_state::SubscriptionState;

use super::common::{params_with, token};

fn seq_number(digits: &str) -> Result<u32> {
    digits
        .parse::<u32>()
        .map_err(|e| Error::format(format!("invalid sequence number {digits}: {e}")))
}

fn no_trailing(rest: &str) -> Result<()> {
    if rest.trim().is_empty() {
        Ok(())
    } else {
        Err(Error::format(format!("trailing input: {rest}")))
    }
}

/// `CSeq: 4711 INVITE`
pub fn parse_cseq(input: &str) -> Result<CSeq> {
    let (rest, (digits, _, method)) = tuple((digit1, space1, token))(input.trim())?;
    no_trailing(rest)?;
    CSeq::new(seq_number(digits)?, method)
}

/// `RAck: 776656 1 INVITE`
pub fn parse_rack(input: &str) -> Result<RAck> {
    let (rest, (rseq, _, cseq, _, method)) =
        tuple((digit1, space1, digit1, space1, token))(input.trim())?;
    no_trailing(rest)?;
    RAck::new(seq_number(rseq)?, seq_number(cseq)?, method)
}

/// `Content-Type: application/sdp;charset=UTF-8`
pub fn parse_content_type(input: &str) -> Result<ContentType> {
    let (rest, (m_type, _, m_subtype)) = tuple((token, char('/'), token))(input.trim())?;
    let (rest, params) = params_with(';')(rest)?;
    no_trailing(rest)?;
    Ok(ContentType {
        media_type: MediaType::new(m_type, m_subtype)?,
        params,
    })
}

/// `Event: presence;id=1234`
pub fn parse_event(input: &str) -> Result<Event> {
    let (rest, package) = token(input.trim())?;
    let (rest, params) = params_with(';')(rest)?;
    no_trailing(rest)?;
    let mut event = Event::new(package)?;
    event.params = params;
    Ok(event)
}

/// `Subscription-State: terminated;reason=timeout`
pub fn parse_subscription_state(input: &str) -> Result<SubscriptionState> {
    let (rest, state) = token(input.trim())?;
    let (rest, params) = params_with(';')(rest)?;
    no_trailing(rest)?;
    let mut sub = SubscriptionState::new(state)?;
    sub.params = params;
    Ok(sub)
}

/// `Accept-Contact: *;audio;require`
pub fn parse_accept_contact(input: &str) -> Result<AcceptContact> {
    let trimmed = input.trim();
    let rest = trimmed
        .strip_prefix('*')
        .ok_or_else(|| Error::format(format!("Accept-Contact must start with *: {trimmed}")))?;
    let (rest, params) = params_with(';')(rest)?;
    no_trailing(rest)?;
    let mut ac = AcceptContact::new();
    ac.params = params;
    Ok(ac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cseq() {
        let cseq = parse_cseq("4711 INVITE").unwrap();
        assert_eq!(cseq.to_string(), "4711 INVITE");
        assert!(parse_cseq("INVITE 4711").is_err());
        assert!(parse_cseq("4711").is_err());
    }

    #[test]
    fn test_parse_cseq_bound() {
        assert!(parse_cseq("2147483647 ACK").is_ok());
        assert!(parse_cseq("2147483648 ACK").is_err());
    }

    #[test]
    fn test_parse_rack() {
        let rack = parse_rack("776656 1 INVITE").unwrap();
        assert_eq!(rack.rseq, 776656);
        assert_eq!(rack.cseq, 1);
        assert_eq!(rack.method, "INVITE");
    }

    #[test]
    fn test_parse_content_type_with_params() {
        let ct = parse_content_type("multipart/mixed;boundary=boundary1").unwrap();
        assert_eq!(ct.to_string(), "multipart/mixed;boundary=boundary1");
        assert!(parse_content_type("application").is_err());
    }

    #[test]
    fn test_parse_event_dotted_package() {
        let event = parse_event("presence.winfo;id=99").unwrap();
        assert_eq!(event.package(), "presence.winfo");
        assert_eq!(event.id(), Some("99"));
    }

    #[test]
    fn test_parse_subscription_state() {
        let sub = parse_subscription_state("terminated;reason=timeout;retry-after=120").unwrap();
        assert_eq!(sub.state(), "terminated");
        assert_eq!(sub.reason(), Some("timeout"));
        assert_eq!(sub.retry_after(), Some(120));
    }

    #[test]
    fn test_parse_accept_contact() {
        let ac = parse_accept_contact("*;audio=TRUE;require").unwrap();
        assert_eq!(ac.to_string(), "*;audio=TRUE;require");
        assert!(parse_accept_contact("audio").is_err());
    }
}
