//! Name-address grammar: `[display-name] <URI>` or a bare addr-spec,
//! optionally followed by semicolon parameters that belong to the owning
//! header.

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, space0},
    combinator::{map, map_res, opt},
    multi::many1,
    sequence::{delimited, pair, terminated},
    IResult,
};

use crate::error::{Error, Result};
use crate::types::address::Address;
use crate::types::param::Params;
use crate::types::uri::Uri;

use super::common::{params_with, quoted_string, token};

fn display_name(input: &str) -> IResult<&str, String> {
    alt((
        quoted_string,
        map(many1(terminated(token, space0)), |tokens| tokens.join(" ")),
    ))(input)
}

fn angle_addr(input: &str) -> IResult<&str, Uri> {
    delimited(
        char('<'),
        map_res(take_while1(|c| c != '>'), str::parse::<Uri>),
        char('>'),
    )(input)
}

// addr-spec with no angle brackets stops at the first ';' so trailing
// parameters stay with the header, not the URI.
fn bare_addr_spec(input: &str) -> IResult<&str, Uri> {
    map_res(
        take_while1(|c: char| c != ';' && c != ',' && c != '<' && c != '>' && !c.is_whitespace()),
        str::parse::<Uri>,
    )(input)
}

fn name_addr(input: &str) -> IResult<&str, Address> {
    map(
        pair(opt(terminated(display_name, space0)), angle_addr),
        |(display_name, uri)| match display_name {
            Some(name) => Address::with_display_name(name, uri),
            None => Address::new(uri),
        },
    )(input)
}

fn address(input: &str) -> IResult<&str, Address> {
    alt((name_addr, map(bare_addr_spec, Address::new)))(input)
}

/// Parses a complete name address, requiring the whole input to match.
pub fn parse_address(input: &str) -> Result<Address> {
    let trimmed = input.trim();
    let (rest, address) = address(trimmed)?;
    if !rest.trim().is_empty() {
        return Err(Error::format(format!(
            "trailing input after address: {rest}"
        )));
    }
    Ok(address)
}

/// Parses a name address followed by its header parameters, which is the
/// value shape of From, To, Contact, Route, and Record-Route.
pub fn parse_address_params(input: &str) -> Result<(Address, Params)> {
    let trimmed = input.trim();
    let (rest, address) = address(trimmed)?;
    let (rest, params) = params_with(';')(rest)?;
    if !rest.trim().is_empty() {
        return Err(Error::format(format!(
            "trailing input after address parameters: {rest}"
        )));
    }
    Ok((address, params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::uri::Uri;

    #[test]
    fn test_quoted_display_name() {
        let addr = parse_address("\"A. Bell\" <sip:bell@example.com>").unwrap();
        assert_eq!(addr.display_name(), Some("A. Bell"));
        assert_eq!(addr.uri(), &Uri::sip("bell@example.com"));
    }

    #[test]
    fn test_token_display_name() {
        let addr = parse_address("Bob <sip:bob@biloxi.com>").unwrap();
        assert_eq!(addr.display_name(), Some("Bob"));
    }

    #[test]
    fn test_bare_addr_spec() {
        let addr = parse_address("sip:bob@biloxi.com").unwrap();
        assert_eq!(addr.display_name(), None);
        assert_eq!(addr.uri(), &Uri::sip("bob@biloxi.com"));
    }

    #[test]
    fn test_uri_params_stay_inside_angles() {
        let (addr, params) = parse_address_params("<sip:bob@biloxi.com;transport=tcp>;tag=a48s").unwrap();
        assert_eq!(addr.uri().rest, "bob@biloxi.com;transport=tcp");
        assert_eq!(params.get("tag"), Some("a48s"));
    }

    #[test]
    fn test_bare_addr_spec_params_go_to_header() {
        let (addr, params) = parse_address_params("sip:bob@biloxi.com;tag=a48s").unwrap();
        assert_eq!(addr.uri().rest, "bob@biloxi.com");
        assert_eq!(params.get("tag"), Some("a48s"));
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        assert!(parse_address("<sip:bob@biloxi.com> extra").is_err());
    }
}
