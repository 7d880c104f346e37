//! # SIP From Header
//!
//! Originator of the request (RFC 3261 Section 20.20). Carries a name
//! address plus parameters; the `tag` parameter identifies the dialog
//! participant.
//!
//! ## Format
//!
//! ```text
//! From: "A. Bell" <sip:bell@example.com>;tag=a48s
//! f: Anonymous <sip:c8oqz84zk7z@privacy.org>;tag=hyh8
//! ```

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::address::Address;
use crate::types::param::Params;

/// Typed From header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct From {
    pub address: Address,
    pub params: Params,
}

impl From {
    /// Creates a From header around an address.
    pub fn new(address: Address) -> Self {
        From {
            address,
            params: Params::new(),
        }
    }

    /// Returns the address.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Replaces the address.
    pub fn set_address(&mut self, address: Address) {
        self.address = address;
    }

    /// Returns the tag parameter, if present.
    pub fn tag(&self) -> Option<&str> {
        self.params.get("tag")
    }

    /// Sets or replaces the tag parameter.
    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.params.set("tag", tag.into());
    }

    /// True when a tag parameter is present.
    pub fn has_tag(&self) -> bool {
        self.params.has("tag")
    }

    /// Removes the tag parameter.
    pub fn remove_tag(&mut self) {
        self.params.delete("tag");
    }

    /// Replaces address and parameters wholesale from raw header-value text.
    pub fn set_header_value(&mut self, raw: &str) -> Result<()> {
        let (address, params) = crate::parser::parse_address_params(raw)?;
        self.address = address;
        self.params = params;
        Ok(())
    }
}

impl fmt::Display for From {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.address, self.params.encode())
    }
}

impl FromStr for From {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (address, params) = crate::parser::parse_address_params(s)?;
        Ok(From { address, params })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::uri::Uri;

    #[test]
    fn test_tag_round_trip() {
        let mut from = From::new(Address::with_display_name(
            "A. Bell",
            Uri::sip("bell@example.com"),
        ));
        assert!(!from.has_tag());
        from.set_tag("a48s");
        assert_eq!(from.tag(), Some("a48s"));
        assert_eq!(
            from.to_string(),
            "\"A. Bell\" <sip:bell@example.com>;tag=a48s"
        );
        from.remove_tag();
        assert!(!from.has_tag());
    }

    #[test]
    fn test_set_header_value() {
        let mut from = From::new(Address::new(Uri::sip("old@example.com")));
        from.set_header_value("Bob <sip:bob@biloxi.com>;tag=hyh8").unwrap();
        assert_eq!(from.address().display_name(), Some("Bob"));
        assert_eq!(from.tag(), Some("hyh8"));
    }
}
