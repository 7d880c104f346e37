//! # SIP Contact Header
//!
//! Direct reachability of the sender (RFC 3261 Section 20.10). A Contact
//! is either a name address with parameters or the wildcard form
//! `Contact: *` used by REGISTER de-registration; the two states are
//! mutually exclusive.

use std::fmt;
use std::str::FromStr;
use ordered_float::NotNan;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::address::Address;
use crate::types::param::{ParamValue, Params};

/// Typed Contact header (one contact entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    address: Option<Address>,
    wildcard: bool,
    pub params: Params,
}

impl Contact {
    /// Creates a Contact around an address.
    pub fn new(address: Address) -> Self {
        Contact {
            address: Some(address),
            wildcard: false,
            params: Params::new(),
        }
    }

    /// Creates the wildcard form `Contact: *`.
    pub fn wildcard() -> Self {
        Contact {
            address: None,
            wildcard: true,
            params: Params::new(),
        }
    }

    /// True for the `*` form.
    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Returns the address; `None` for the wildcard form.
    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// Replaces the address, clearing any wildcard state.
    pub fn set_address(&mut self, address: Address) {
        self.address = Some(address);
        self.wildcard = false;
    }

    /// Returns the q parameter, if present and valid.
    pub fn q(&self) -> Option<NotNan<f32>> {
        self.params
            .get("q")
            .and_then(|s| s.parse::<f32>().ok())
            .and_then(|f| NotNan::try_from(f).ok())
    }

    /// Sets the q parameter. Values outside 0.0..=1.0 are rejected, not
    /// clamped.
    pub fn set_q(&mut self, q: f32) -> Result<()> {
        if !(0.0..=1.0).contains(&q) || q.is_nan() {
            return Err(Error::format(format!("q value out of range: {q}")));
        }
        self.params.set("q", format!("{:.3}", q));
        Ok(())
    }

    /// Returns the expires parameter, if present and numeric.
    pub fn expires(&self) -> Option<u32> {
        self.params
            .entry("expires")
            .and_then(|e| e.value.as_ref())
            .and_then(|v| v.as_text().parse().ok())
    }

    /// Sets the expires parameter.
    pub fn set_expires(&mut self, delta_seconds: u32) {
        self.params
            .set("expires", ParamValue::Integer(delta_seconds as i64));
    }

    /// Replaces the value wholesale from raw header-value text, adopting
    /// either the wildcard form or the parsed address and parameters.
    pub fn set_header_value(&mut self, raw: &str) -> Result<()> {
        let parsed = raw.parse::<Contact>()?;
        *self = parsed;
        Ok(())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.wildcard {
            return write!(f, "*");
        }
        match &self.address {
            Some(address) => write!(f, "{}{}", address, self.params.encode()),
            // Unreachable through the public constructors.
            None => Ok(()),
        }
    }
}

impl FromStr for Contact {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed == "*" {
            return Ok(Contact::wildcard());
        }
        let (address, params) = crate::parser::parse_address_params(trimmed)?;
        Ok(Contact {
            address: Some(address),
            wildcard: false,
            params,
        })
    }
}
