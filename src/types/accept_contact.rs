//! Accept-Contact header (caller preferences, compact form `a`): the
//! `*;param=value` form expressing feature preferences for contact
//! selection.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::param::Params;

/// Typed Accept-Contact header.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AcceptContact {
    pub params: Params,
}

impl AcceptContact {
    /// Creates an Accept-Contact header with no parameters.
    pub fn new() -> Self {
        AcceptContact::default()
    }

    /// Returns the parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Mutable access to the parameters.
    pub fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }
}

impl fmt::Display for AcceptContact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*{}", self.params.encode())
    }
}

impl FromStr for AcceptContact {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse_accept_contact(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let mut ac = AcceptContact::new();
        ac.params_mut().set("audio", "TRUE");
        ac.params_mut().set_flag("require");
        assert_eq!(ac.to_string(), "*;audio=TRUE;require");
    }
}
