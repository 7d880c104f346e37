//! Route header (RFC 3261 Section 20.34): a forced route entry, one name
//! address plus parameters (`lr` being the common one).

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::address::Address;
use crate::types::param::Params;

/// Typed Route header (one route entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub address: Address,
    pub params: Params,
}

impl Route {
    /// Creates a Route entry around an address.
    pub fn new(address: Address) -> Self {
        Route {
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

    /// Replaces address and parameters wholesale from raw header-value text.
    pub fn set_header_value(&mut self, raw: &str) -> Result<()> {
        let (address, params) = crate::parser::parse_address_params(raw)?;
        self.address = address;
        self.params = params;
        Ok(())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.address, self.params.encode())
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (address, params) = crate::parser::parse_address_params(s)?;
        Ok(Route { address, params })
    }
}
