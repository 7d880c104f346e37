//! # SIP Call-ID Header
//!
//! Call identifier (RFC 3261 Section 20.8): `word ["@" word]`. The local
//! identifier compares case-sensitively, the host part case-insensitively.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Characters permitted in a Call-ID `word` besides alphanumerics.
const WORD_EXTRA: &str = "-.!%*_+`'~()<>:\\\"/[]?{}";

fn is_word(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || WORD_EXTRA.contains(c))
}

/// The structured value of a Call-ID header: `local-id[@host]`.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct CallIdentifier {
    local_id: String,
    host: Option<String>,
}

impl CallIdentifier {
    /// Creates an identifier from its parts, validating the token class.
    pub fn new(local_id: impl Into<String>, host: Option<String>) -> Result<Self> {
        let local_id = local_id.into();
        if !is_word(&local_id) {
            return Err(Error::format(format!(
                "invalid Call-ID local identifier: {local_id:?}"
            )));
        }
        if let Some(h) = &host {
            if !is_word(h) {
                return Err(Error::format(format!("invalid Call-ID host: {h:?}")));
            }
        }
        Ok(CallIdentifier { local_id, host })
    }

    /// Returns the local identifier.
    pub fn local_id(&self) -> &str {
        &self.local_id
    }

    /// Returns the host part, if any.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }
}

// local-id is an opaque identifier (case-sensitive); host is not.
impl PartialEq for CallIdentifier {
    fn eq(&self, other: &Self) -> bool {
        if self.local_id != other.local_id {
            return false;
        }
        match (&self.host, &other.host) {
            (None, None) => true,
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            _ => false,
        }
    }
}

impl fmt::Display for CallIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.host {
            Some(host) => write!(f, "{}@{}", self.local_id, host),
            None => write!(f, "{}", self.local_id),
        }
    }
}

impl FromStr for CallIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.split_once('@') {
            Some((local, host)) => CallIdentifier::new(local, Some(host.to_string())),
            None => CallIdentifier::new(s, None),
        }
    }
}

/// Typed Call-ID header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallId(pub CallIdentifier);

impl CallId {
    /// Creates a Call-ID from `local-id[@host]` text.
    pub fn new(call_id: &str) -> Result<Self> {
        call_id.parse::<CallIdentifier>().map(CallId)
    }

    /// Returns the structured identifier.
    pub fn identifier(&self) -> &CallIdentifier {
        &self.0
    }
}

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CallId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CallId::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_body() {
        let id = CallId::new("a84b4c76e66710@pc33.example.com").unwrap();
        assert_eq!(id.to_string(), "a84b4c76e66710@pc33.example.com");
    }

    #[test]
    fn test_empty_local_id_rejected() {
        assert!(CallId::new("@bad").is_err());
        assert!(CallId::new("").is_err());
    }

    #[test]
    fn test_invalid_characters_rejected() {
        assert!(CallId::new("has space@host").is_err());
        assert!(CallId::new("ok@has space").is_err());
    }

    #[test]
    fn test_host_case_insensitive() {
        let a = CallId::new("abc@Pc33.Example.COM").unwrap();
        let b = CallId::new("abc@pc33.example.com").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_local_id_case_sensitive() {
        let a = CallId::new("ABC@host").unwrap();
        let b = CallId::new("abc@host").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_rfc_word_characters_accepted() {
        // Torture-test flavored local id from RFC 3261
        assert!(CallId::new("asd<.(!%*_+`'~)-:>\"/[]?{}asd@example.com").is_ok());
    }
}
