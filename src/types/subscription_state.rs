//! Subscription-State header (RFC 3265 Section 7.2.3): the state of a
//! subscription carried in NOTIFY, with `reason`, `expires`, and
//! `retry-after` parameters.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::param::{ParamValue, Params};

/// Typed Subscription-State header.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct SubscriptionState {
    pub state: String,
    pub params: Params,
}

// Substates are tokens (`active`, `pending`, `terminated`).
impl PartialEq for SubscriptionState {
    fn eq(&self, other: &Self) -> bool {
        self.state.eq_ignore_ascii_case(&other.state) && self.params == other.params
    }
}

impl SubscriptionState {
    /// Creates a Subscription-State header, rejecting empty states.
    pub fn new(state: impl Into<String>) -> Result<Self> {
        let state = state.into();
        if state.trim().is_empty() {
            return Err(Error::format("subscription state must not be empty"));
        }
        Ok(SubscriptionState {
            state,
            params: Params::new(),
        })
    }

    /// Returns the substate value.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the reason parameter, if present.
    pub fn reason(&self) -> Option<&str> {
        self.params.get("reason")
    }

    /// Sets the reason parameter.
    pub fn set_reason(&mut self, reason: impl Into<String>) {
        self.params.set("reason", reason.into());
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

    /// Returns the retry-after parameter, if present and numeric.
    pub fn retry_after(&self) -> Option<u32> {
        self.params
            .entry("retry-after")
            .and_then(|e| e.value.as_ref())
            .and_then(|v| v.as_text().parse().ok())
    }

    /// Sets the retry-after parameter.
    pub fn set_retry_after(&mut self, delta_seconds: u32) {
        self.params
            .set("retry-after", ParamValue::Integer(delta_seconds as i64));
    }
}

impl fmt::Display for SubscriptionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.state, self.params.encode())
    }
}

impl FromStr for SubscriptionState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse_subscription_state(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let mut state = SubscriptionState::new("terminated").unwrap();
        state.set_reason("timeout");
        state.set_retry_after(120);
        assert_eq!(state.to_string(), "terminated;reason=timeout;retry-after=120");
    }

    #[test]
    fn test_expires_accessor() {
        let mut state = SubscriptionState::new("active").unwrap();
        state.set_expires(600);
        assert_eq!(state.expires(), Some(600));
    }
}
