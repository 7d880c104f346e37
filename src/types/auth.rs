//! # SIP Authentication Headers
//!
//! The RFC 2617-style challenge/credentials family: WWW-Authenticate,
//! Authorization, Proxy-Authenticate, and Proxy-Authorization (RFC 3261
//! Sections 20.44, 20.7, 20.27, 20.28). All four share one shape,
//! [`DigestParams`]: a scheme token followed by comma-separated
//! parameters.
//!
//! A fixed set of parameter names is quoted-string typed (`realm`,
//! `nonce`, `uri`, ...); every other parameter is a token. The
//! `nonce-count` (`nc`) parameter is a wire-format quirk preserved
//! exactly: 8 hex digits, zero-padded, lowercase.
//!
//! ## Format
//!
//! ```text
//! WWW-Authenticate: Digest realm="atlanta.com",nonce="84a4cc6f3",qop="auth"
//! Authorization: Digest username="bob",realm="atlanta.com",nc=000000ff
//! ```

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::param::{ParamValue, Params, COMMA};

/// Parameter names whose values are quoted-string typed.
const QUOTED_PARAMS: &[&str] = &[
    "realm",
    "nonce",
    "uri",
    "cnonce",
    "username",
    "domain",
    "opaque",
    "next-nonce",
    "nextnonce",
    "response",
    "qop",
];

fn is_quoted_param(name: &str) -> bool {
    QUOTED_PARAMS.iter().any(|q| q.eq_ignore_ascii_case(name))
}

/// Scheme plus comma-separated, selectively-quoted parameters.
///
/// The quoting decision lives in one table here rather than being spread
/// across the four header types.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct DigestParams {
    pub scheme: String,
    pub params: Params,
}

// Scheme tokens compare case-insensitively.
impl PartialEq for DigestParams {
    fn eq(&self, other: &Self) -> bool {
        self.scheme.eq_ignore_ascii_case(&other.scheme) && self.params == other.params
    }
}

impl Default for DigestParams {
    fn default() -> Self {
        DigestParams {
            scheme: "Digest".to_string(),
            params: Params::with_separator(COMMA),
        }
    }
}

impl DigestParams {
    /// Creates an empty parameter set with the default `Digest` scheme.
    pub fn new() -> Self {
        DigestParams::default()
    }

    /// Creates an empty parameter set with an explicit scheme.
    pub fn with_scheme(scheme: impl Into<String>) -> Self {
        DigestParams {
            scheme: scheme.into(),
            ..DigestParams::default()
        }
    }

    /// Returns the scheme token.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Sets a parameter, routing through the quoted-name table: values of
    /// quoted-string typed names go through quote validation, all others
    /// are stored as tokens.
    pub fn set_parameter(&mut self, name: &str, value: &str) -> Result<()> {
        if is_quoted_param(name) {
            self.params.set_quoted(name, value)
        } else {
            self.params.set(name, value);
            Ok(())
        }
    }

    /// Case-insensitive parameter lookup, unquoted.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// Accessors for the standard Digest parameters.
    pub fn realm(&self) -> Option<&str> {
        self.parameter("realm")
    }

    pub fn set_realm(&mut self, realm: &str) -> Result<()> {
        self.set_parameter("realm", realm)
    }

    pub fn nonce(&self) -> Option<&str> {
        self.parameter("nonce")
    }

    pub fn set_nonce(&mut self, nonce: &str) -> Result<()> {
        self.set_parameter("nonce", nonce)
    }

    pub fn opaque(&self) -> Option<&str> {
        self.parameter("opaque")
    }

    pub fn set_opaque(&mut self, opaque: &str) -> Result<()> {
        self.set_parameter("opaque", opaque)
    }

    pub fn domain(&self) -> Option<&str> {
        self.parameter("domain")
    }

    pub fn set_domain(&mut self, domain: &str) -> Result<()> {
        self.set_parameter("domain", domain)
    }

    pub fn qop(&self) -> Option<&str> {
        self.parameter("qop")
    }

    pub fn set_qop(&mut self, qop: &str) -> Result<()> {
        self.set_parameter("qop", qop)
    }

    pub fn cnonce(&self) -> Option<&str> {
        self.parameter("cnonce")
    }

    pub fn set_cnonce(&mut self, cnonce: &str) -> Result<()> {
        self.set_parameter("cnonce", cnonce)
    }

    pub fn username(&self) -> Option<&str> {
        self.parameter("username")
    }

    pub fn set_username(&mut self, username: &str) -> Result<()> {
        self.set_parameter("username", username)
    }

    pub fn response(&self) -> Option<&str> {
        self.parameter("response")
    }

    pub fn set_response(&mut self, response: &str) -> Result<()> {
        self.set_parameter("response", response)
    }

    pub fn uri(&self) -> Option<&str> {
        self.parameter("uri")
    }

    pub fn set_uri(&mut self, uri: &str) -> Result<()> {
        self.set_parameter("uri", uri)
    }

    pub fn algorithm(&self) -> Option<&str> {
        self.parameter("algorithm")
    }

    pub fn set_algorithm(&mut self, algorithm: &str) -> Result<()> {
        self.set_parameter("algorithm", algorithm)
    }

    /// Returns the stale flag, if present.
    pub fn stale(&self) -> Option<bool> {
        self.parameter("stale").map(|s| s.eq_ignore_ascii_case("true"))
    }

    pub fn set_stale(&mut self, stale: bool) {
        self.params.set("stale", ParamValue::Boolean(stale));
    }

    /// Returns the nonce count, parsed from its 8-hex-digit form.
    pub fn nonce_count(&self) -> Option<u32> {
        self.parameter("nc")
            .and_then(|s| u32::from_str_radix(s, 16).ok())
    }

    /// Sets the nonce count, stored as 8-hex-digit zero-padded lowercase
    /// text (`255` encodes as `nc=000000ff`).
    pub fn set_nonce_count(&mut self, nc: u32) {
        self.params.set("nc", format!("{:08x}", nc));
    }
}

impl fmt::Display for DigestParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.is_empty() {
            write!(f, "{}", self.scheme)
        } else {
            write!(f, "{} {}", self.scheme, self.params.body())
        }
    }
}

macro_rules! auth_header {
    ($(#[$doc:meta])* $name:ident, $parse:path) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name(pub DigestParams);

        impl $name {
            /// Creates an empty header with the default `Digest` scheme.
            pub fn new() -> Self {
                $name(DigestParams::new())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::ops::Deref for $name {
            type Target = DigestParams;

            fn deref(&self) -> &DigestParams {
                &self.0
            }
        }

        impl std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut DigestParams {
                &mut self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                $parse(s).map($name)
            }
        }
    };
}

auth_header!(
    /// Typed WWW-Authenticate header.
    WwwAuthenticate,
    crate::parser::parse_auth_params
);
auth_header!(
    /// Typed Authorization header.
    Authorization,
    crate::parser::parse_auth_params
);
auth_header!(
    /// Typed Proxy-Authenticate header.
    ProxyAuthenticate,
    crate::parser::parse_auth_params
);
auth_header!(
    /// Typed Proxy-Authorization header.
    ProxyAuthorization,
    crate::parser::parse_auth_params
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_display() {
        let mut www = WwwAuthenticate::new();
        www.set_realm("atlanta.com").unwrap();
        www.set_nonce("84a4cc6f3082121f32b42a2187831a9e").unwrap();
        www.set_qop("auth").unwrap();
        assert_eq!(
            www.to_string(),
            "Digest realm=\"atlanta.com\",nonce=\"84a4cc6f3082121f32b42a2187831a9e\",qop=\"auth\""
        );
    }

    #[test]
    fn test_quoted_table_routing() {
        let mut auth = Authorization::new();
        auth.set_parameter("realm", "\"atlanta.com\"").unwrap();
        auth.set_parameter("algorithm", "MD5").unwrap();
        assert_eq!(auth.realm(), Some("atlanta.com"));
        let body = auth.to_string();
        assert!(body.contains("realm=\"atlanta.com\""));
        assert!(body.contains("algorithm=MD5"));
    }

    #[test]
    fn test_nonce_count_hex_format() {
        let mut auth = Authorization::new();
        auth.set_nonce_count(255);
        assert!(auth.to_string().contains("nc=000000ff"));
        assert_eq!(auth.nonce_count(), Some(255));

        auth.set_nonce_count(1);
        assert!(auth.to_string().contains("nc=00000001"));
    }

    #[test]
    fn test_stale_token() {
        let mut www = WwwAuthenticate::new();
        www.set_stale(true);
        assert!(www.to_string().contains("stale=true"));
        assert_eq!(www.stale(), Some(true));
    }

    #[test]
    fn test_scheme_case_insensitive_eq() {
        let a = DigestParams::with_scheme("digest");
        let b = DigestParams::with_scheme("Digest");
        assert_eq!(a, b);
    }

    #[test]
    fn test_unbalanced_quote_rejected() {
        let mut www = WwwAuthenticate::new();
        assert!(www.set_parameter("realm", "\"atlanta.com").is_err());
    }
}
