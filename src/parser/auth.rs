//! Challenge/credentials grammar shared by the authentication family:
//! a scheme token followed by comma-separated parameters.

use crate::error::{Error, Result};
use crate::types::auth::DigestParams;
use crate::types::param::COMMA;

use super::common::{param_list, token};

/// Parses `Digest realm="x",nonce="y",...` into a [`DigestParams`].
///
/// Quoting is taken from the wire: a value that arrived quoted keeps its
/// quoted flag, a bare token stays bare. A scheme with no parameters is
/// accepted.
pub fn parse_auth_params(input: &str) -> Result<DigestParams> {
    let trimmed = input.trim();
    let (rest, scheme) = token(trimmed)?;
    let rest = rest.trim_start();
    let (rest, params) = param_list(COMMA)(rest)?;
    if !rest.trim().is_empty() {
        return Err(Error::format(format!(
            "trailing input after credentials: {rest}"
        )));
    }
    Ok(DigestParams {
        scheme: scheme.to_string(),
        params,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_challenge() {
        let auth = parse_auth_params(
            "Digest realm=\"atlanta.com\", nonce=\"84a4cc6f3082121f32b42a2187831a9e\", qop=\"auth\"",
        )
        .unwrap();
        assert_eq!(auth.scheme(), "Digest");
        assert_eq!(auth.realm(), Some("atlanta.com"));
        assert_eq!(auth.qop(), Some("auth"));
    }

    #[test]
    fn test_parse_credentials_with_nc() {
        let auth = parse_auth_params(
            "Digest username=\"bob\", realm=\"atlanta.com\", nc=000000ff, response=\"6629fae49393a05397450978507c4ef1\"",
        )
        .unwrap();
        assert_eq!(auth.username(), Some("bob"));
        assert_eq!(auth.nonce_count(), Some(255));
    }

    #[test]
    fn test_scheme_only() {
        let auth = parse_auth_params("Digest").unwrap();
        assert!(auth.params.is_empty());
    }

    #[test]
    fn test_round_trip_preserves_wire_quoting() {
        let text = "Digest realm=\"atlanta.com\",algorithm=MD5";
        let auth = parse_auth_params(text).unwrap();
        assert_eq!(auth.to_string(), text);
    }
}
