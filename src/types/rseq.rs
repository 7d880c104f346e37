//! # RSeq and RAck Headers
//!
//! Reliable provisional response sequencing (RFC 3262 Sections 7.1 and
//! 7.2). Both sequence numbers share the CSeq 31-bit bound.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::cseq::MAX_SEQ;

/// Typed RSeq header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RSeq(pub u32);

impl RSeq {
    /// Creates an RSeq header, rejecting values above the 31-bit bound.
    pub fn new(seq: u32) -> Result<Self> {
        if seq > MAX_SEQ {
            return Err(Error::format(format!("RSeq {seq} exceeds 2**31-1")));
        }
        Ok(RSeq(seq))
    }
}

impl fmt::Display for RSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RSeq {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let seq = s
            .trim()
            .parse::<u32>()
            .map_err(|e| Error::format(format!("invalid RSeq value: {e}")))?;
        RSeq::new(seq)
    }
}

/// Typed RAck header: `response-num CSeq-num Method`.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct RAck {
    pub rseq: u32,
    pub cseq: u32,
    pub method: String,
}

impl PartialEq for RAck {
    fn eq(&self, other: &Self) -> bool {
        self.rseq == other.rseq
            && self.cseq == other.cseq
            && self.method.eq_ignore_ascii_case(&other.method)
    }
}

impl RAck {
    /// Creates an RAck header, bounding both sequence numbers.
    pub fn new(rseq: u32, cseq: u32, method: impl Into<String>) -> Result<Self> {
        if rseq > MAX_SEQ || cseq > MAX_SEQ {
            return Err(Error::format("RAck sequence number exceeds 2**31-1"));
        }
        let method = method.into();
        if method.trim().is_empty() {
            return Err(Error::format("RAck method must not be empty"));
        }
        Ok(RAck { rseq, cseq, method })
    }
}

impl fmt::Display for RAck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.rseq, self.cseq, self.method)
    }
}

impl FromStr for RAck {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse_rack(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rseq_bound() {
        assert!(RSeq::new(1).is_ok());
        assert!(RSeq::new(MAX_SEQ + 1).is_err());
    }

    #[test]
    fn test_rack_encoding() {
        let rack = RAck::new(776656, 1, "INVITE").unwrap();
        assert_eq!(rack.to_string(), "776656 1 INVITE");
    }
}
