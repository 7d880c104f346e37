//! # SIP Content-Type Header
//!
//! Media type of the message body (RFC 3261 Section 20.15). The header
//! carries a [`MediaType`] plus optional media parameters.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::param::Params;

/// A `type/subtype` media range.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct MediaType {
    pub m_type: String,
    pub m_subtype: String,
}

// Media types are tokens; comparison is case-insensitive.
impl PartialEq for MediaType {
    fn eq(&self, other: &Self) -> bool {
        self.m_type.eq_ignore_ascii_case(&other.m_type)
            && self.m_subtype.eq_ignore_ascii_case(&other.m_subtype)
    }
}

impl MediaType {
    /// Creates a media type, rejecting empty components.
    pub fn new(m_type: impl Into<String>, m_subtype: impl Into<String>) -> Result<Self> {
        let m_type = m_type.into();
        let m_subtype = m_subtype.into();
        if m_type.trim().is_empty() || m_subtype.trim().is_empty() {
            return Err(Error::format("media type and subtype must not be empty"));
        }
        Ok(MediaType { m_type, m_subtype })
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.m_type, self.m_subtype)
    }
}

/// Typed Content-Type header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentType {
    pub media_type: MediaType,
    pub params: Params,
}

impl ContentType {
    /// Creates a Content-Type from its media range.
    pub fn new(media_type: MediaType) -> Self {
        ContentType {
            media_type,
            params: Params::new(),
        }
    }

    /// Convenience constructor from `type` and `subtype` tokens.
    pub fn from_parts(m_type: &str, m_subtype: &str) -> Result<Self> {
        Ok(ContentType::new(MediaType::new(m_type, m_subtype)?))
    }

    /// Returns the media parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Mutable access to the media parameters.
    pub fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.media_type, self.params.encode())
    }
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse_content_type(s)
    }
}
