//! # Homogeneous header lists
//!
//! A [`HeaderList`] holds all values of one repeatable header in
//! message order. Encoding folds the values onto one comma-joined line,
//! except for the authentication family where each credential gets its
//! own header line (comma already separates Digest parameters there).

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::header::TypedHeader;
use crate::types::header_name::HeaderName;

/// An ordered list of same-kind headers under one name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderList {
    name: HeaderName,
    items: Vec<TypedHeader>,
}

impl HeaderList {
    /// Creates an empty list for the given name.
    pub fn new(name: HeaderName) -> Self {
        HeaderList {
            name,
            items: Vec::new(),
        }
    }

    /// Creates a list seeded with one value.
    pub fn with_first(value: TypedHeader) -> Self {
        HeaderList {
            name: value.name(),
            items: vec![value],
        }
    }

    pub fn name(&self) -> &HeaderName {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypedHeader> {
        self.items.iter()
    }

    pub fn first(&self) -> Option<&TypedHeader> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&TypedHeader> {
        self.items.last()
    }

    pub fn get(&self, index: usize) -> Option<&TypedHeader> {
        self.items.get(index)
    }

    /// Appends a value, rejecting one of a different kind than the list
    /// already holds.
    pub fn push(&mut self, value: TypedHeader) -> Result<()> {
        self.check_kind(&value)?;
        self.items.push(value);
        Ok(())
    }

    /// Inserts a value at the front.
    pub fn push_front(&mut self, value: TypedHeader) -> Result<()> {
        self.check_kind(&value)?;
        self.items.insert(0, value);
        Ok(())
    }

    /// Removes and returns the first value.
    pub fn pop_front(&mut self) -> Option<TypedHeader> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Splices another list's values into this one, at the front when
    /// `prepend` is set, otherwise at the back.
    pub fn concatenate(&mut self, other: HeaderList, prepend: bool) -> Result<()> {
        if other.name != self.name {
            return Err(Error::mismatch(self.name.as_str(), other.name.as_str()));
        }
        if prepend {
            let mut merged = other.items;
            merged.append(&mut self.items);
            self.items = merged;
        } else {
            self.items.extend(other.items);
        }
        Ok(())
    }

    fn check_kind(&self, value: &TypedHeader) -> Result<()> {
        match self.items.first() {
            Some(first) if !first.same_kind(value) => Err(Error::mismatch(
                self.name.as_str(),
                value.name().as_str(),
            )),
            _ if value.name() != self.name => Err(Error::mismatch(
                self.name.as_str(),
                value.name().as_str(),
            )),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for HeaderList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return Ok(());
        }
        if self.name.is_auth_family() {
            for item in &self.items {
                write!(f, "{}: {}\r\n", self.name.as_str(), item)?;
            }
            return Ok(());
        }
        let joined = self
            .items
            .iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{}: {}\r\n", self.name.as_str(), joined)
    }
}

impl IntoIterator for HeaderList {
    type Item = TypedHeader;
    type IntoIter = std::vec::IntoIter<TypedHeader>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::auth::WwwAuthenticate;
    use crate::types::via::{Protocol, Via};

    fn via(host: &str, branch: &str) -> TypedHeader {
        let mut via = Via::new(Protocol::default(), host.parse().unwrap());
        via.set_branch(branch);
        TypedHeader::Via(via)
    }

    #[test]
    fn test_via_list_folds_to_one_line() {
        let mut list = HeaderList::with_first(via("a.example.com:5060", "z9hG4bK1"));
        list.push(via("b.example.com", "z9hG4bK2")).unwrap();
        let encoded = list.to_string();
        assert_eq!(encoded.matches("Via:").count(), 1);
        assert!(encoded.contains("z9hG4bK1"));
        assert!(encoded.contains(",SIP/2.0/UDP b.example.com"));
    }

    #[test]
    fn test_auth_family_one_line_per_item() {
        let mut challenge = WwwAuthenticate::default();
        challenge.set_parameter("realm", "example.com").unwrap();
        let mut list = HeaderList::with_first(TypedHeader::WwwAuthenticate(challenge.clone()));
        challenge.set_parameter("realm", "other.com").unwrap();
        list.push(TypedHeader::WwwAuthenticate(challenge)).unwrap();
        let encoded = list.to_string();
        assert_eq!(encoded.matches("WWW-Authenticate:").count(), 2);
        assert_eq!(encoded.matches("\r\n").count(), 2);
    }

    #[test]
    fn test_push_rejects_kind_mismatch() {
        let mut list = HeaderList::with_first(via("a.example.com", "z9hG4bK1"));
        let err = list
            .push(TypedHeader::CallId(
                crate::types::call_id::CallId::new("x@y.com").unwrap(),
            ))
            .unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_concatenate_prepend() {
        let mut list = HeaderList::with_first(via("a.example.com", "z9hG4bK1"));
        let other = HeaderList::with_first(via("b.example.com", "z9hG4bK2"));
        list.concatenate(other, true).unwrap();
        assert!(list.first().unwrap().to_string().contains("b.example.com"));
    }
}
