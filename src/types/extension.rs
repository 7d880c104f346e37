//! # Extension and opaque headers
//!
//! Two fallback shapes for names without a dedicated variant:
//!
//! - [`ExtensionHeader`]: an unknown header that may carry
//!   `;param=value` syntax; value and parameters are kept separately.
//! - [`GenericHeader`]: a parameter-less header (Allow, Subject,
//!   User-Agent, ...) whose whole body is opaque text. Asking it for
//!   structured parameters is an [`crate::Error::UnsupportedOperation`].

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::param::Params;

/// An unknown header carrying a value and optional parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionHeader {
    pub value: String,
    pub params: Params,
}

impl ExtensionHeader {
    /// Creates an extension header around a bare value.
    pub fn new(value: impl Into<String>) -> Self {
        ExtensionHeader {
            value: value.into(),
            params: Params::new(),
        }
    }

    /// Returns the value without parameters.
    pub fn value(&self) -> &str {
        &self.value
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

impl fmt::Display for ExtensionHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.params.encode())
    }
}

/// A parameter-less header modeled as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericHeader {
    pub value: String,
}

impl GenericHeader {
    /// Creates an opaque header around its text.
    pub fn new(value: impl Into<String>) -> Self {
        GenericHeader {
            value: value.into(),
        }
    }

    /// Returns the opaque text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Structured parameter access is not available on a parameter-less
    /// header; this always fails.
    pub fn parameter(&self, _name: &str) -> Result<&str> {
        Err(Error::UnsupportedOperation(
            "parameter access on a parameter-less header".to_string(),
        ))
    }
}

impl fmt::Display for GenericHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_with_params() {
        let mut ext = ExtensionHeader::new("some-value");
        ext.params_mut().set("x", "1");
        assert_eq!(ext.to_string(), "some-value;x=1");
    }

    #[test]
    fn test_generic_rejects_parameter_access() {
        let generic = GenericHeader::new("INVITE, ACK, BYE");
        assert!(matches!(
            generic.parameter("x"),
            Err(Error::UnsupportedOperation(_))
        ));
    }
}
