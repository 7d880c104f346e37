//! # SIP Name Address
//!
//! `Address` is the `[display-name] <URI>` value owned by the
//! address-bearing headers (From, To, Contact, Route, Record-Route).
//! Header parameters are not part of the address; they live in the owning
//! header's parameter store.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::uri::Uri;

/// Represents a SIP name address: `"Display Name" <uri>`.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Address {
    pub display_name: Option<String>,
    pub uri: Uri,
}

// None and Some("") display names compare equal.
impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        let display_eq = match (&self.display_name, &other.display_name) {
            (None, None) => true,
            (Some(a), Some(b)) => a.trim() == b.trim(),
            (Some(s), None) | (None, Some(s)) => s.trim().is_empty(),
        };
        display_eq && self.uri == other.uri
    }
}

/// Display names that are not a single token must be quoted.
fn needs_quoting(display_name: &str) -> bool {
    display_name.chars().any(|c| {
        !c.is_alphanumeric()
            && !matches!(c, '-' | '.' | '!' | '%' | '*' | '_' | '+' | '`' | '\'' | '~')
    })
}

impl Address {
    /// Creates an address with no display name.
    pub fn new(uri: Uri) -> Self {
        Address {
            display_name: None,
            uri,
        }
    }

    /// Creates an address with a display name. Blank names normalize to none.
    pub fn with_display_name(display_name: impl Into<String>, uri: Uri) -> Self {
        let name = display_name.into();
        Address {
            display_name: if name.trim().is_empty() { None } else { Some(name) },
            uri,
        }
    }

    /// Returns the display name, if any.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Returns the URI.
    pub fn uri(&self) -> &Uri {
        &self.uri
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.display_name {
            let trimmed = name.trim();
            if !trimmed.is_empty() {
                if needs_quoting(trimmed) {
                    write!(f, "\"{}\" ", trimmed.replace('\\', "\\\\").replace('"', "\\\""))?;
                } else {
                    write!(f, "{} ", trimmed)?;
                }
            }
        }
        write!(f, "<{}>", self.uri)
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse_address(s)
    }
}
