//! Event header (RFC 3265 Section 7.2.1): the event package of a
//! SUBSCRIBE/NOTIFY exchange, plus parameters (`id` notably).

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::param::Params;

/// Typed Event header.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Event {
    pub package: String,
    pub params: Params,
}

// Event packages are tokens.
impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.package.eq_ignore_ascii_case(&other.package) && self.params == other.params
    }
}

impl Event {
    /// Creates an Event header for a package, rejecting empty names.
    pub fn new(package: impl Into<String>) -> Result<Self> {
        let package = package.into();
        if package.trim().is_empty() {
            return Err(Error::format("event package must not be empty"));
        }
        Ok(Event {
            package,
            params: Params::new(),
        })
    }

    /// Returns the event package name.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Returns the id parameter, if present.
    pub fn id(&self) -> Option<&str> {
        self.params.get("id")
    }

    /// Sets the id parameter.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.params.set("id", id.into());
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.package, self.params.encode())
    }
}

impl FromStr for Event {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse_event(s)
    }
}
