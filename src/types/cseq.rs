//! # SIP CSeq Header
//!
//! Command sequence header (RFC 3261 Section 20.16): a sequence number and
//! the method of the request it orders. The sequence number is constrained
//! by the protocol to the unsigned 31-bit range; the bound is enforced
//! where the value enters the model, not at encode time.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest sequence number RFC 3261 permits (2**31 - 1).
pub const MAX_SEQ: u32 = i32::MAX as u32;

/// Typed CSeq header.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct CSeq {
    pub seq: u32,
    pub method: String,
}

// Method names are tokens and compare case-insensitively.
impl PartialEq for CSeq {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq && self.method.eq_ignore_ascii_case(&other.method)
    }
}

impl CSeq {
    /// Creates a new CSeq header, rejecting sequence numbers above the
    /// 31-bit bound and empty methods.
    pub fn new(seq: u32, method: impl Into<String>) -> Result<Self> {
        if seq > MAX_SEQ {
            return Err(Error::format(format!(
                "CSeq sequence number {seq} exceeds 2**31-1"
            )));
        }
        let method = method.into();
        if method.trim().is_empty() {
            return Err(Error::format("CSeq method must not be empty"));
        }
        Ok(Self { seq, method })
    }

    /// Returns the sequence number.
    pub fn sequence(&self) -> u32 {
        self.seq
    }

    /// Returns the method name.
    pub fn method(&self) -> &str {
        &self.method
    }
}

impl fmt::Display for CSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.seq, self.method)
    }
}

impl FromStr for CSeq {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse_cseq(s)
    }
}
