//! # SIP To Header
//!
//! Logical recipient of the request (RFC 3261 Section 20.39). Same shape
//! as `From`: a name address plus parameters with a dialog `tag`.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::address::Address;
use crate::types::param::Params;

/// Typed To header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct To {
    pub address: Address,
    pub params: Params,
}

impl To {
    /// Creates a To header around an address.
    pub fn new(address: Address) -> Self {
        To {
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

impl fmt::Display for To {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.address, self.params.encode())
    }
}

impl FromStr for To {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (address, params) = crate::parser::parse_address_params(s)?;
        Ok(To { address, params })
    }
}
