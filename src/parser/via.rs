//! Via header grammar: `sent-protocol LWS sent-by *( SEMI via-params )`.

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, space1},
    sequence::tuple,
};

use crate::error::{Error, Result};
use crate::types::uri::HostPort;
use crate::types::via::{Protocol, Via};

use super::common::{params_with, token};

/// Parses one `via-parm`: `SIP/2.0/UDP host.example.com:5060;branch=...`.
pub fn parse_via(input: &str) -> Result<Via> {
    let trimmed = input.trim();
    let (rest, (name, _, version, _, transport, _)) = tuple((
        token,
        char('/'),
        token,
        char('/'),
        token,
        space1,
    ))(trimmed)?;
    let (rest, sent_by) =
        take_while1(|c: char| c != ';' && c != ',' && !c.is_whitespace())(rest)?;
    let sent_by = sent_by.parse::<HostPort>()?;
    let (rest, params) = params_with(';')(rest)?;
    if !rest.trim().is_empty() {
        return Err(Error::format(format!("trailing input after Via: {rest}")));
    }
    Ok(Via {
        sent_protocol: Protocol {
            name: name.to_string(),
            version: version.to_string(),
            transport: transport.to_string(),
        },
        sent_by,
        params,
    })
}
