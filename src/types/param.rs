//! # SIP Parameters
//!
//! This module provides the ordered name/value parameter store shared by
//! every header that carries `;name=value` (or, for the authentication
//! family, `,name=value`) parameters, as defined in
//! [RFC 3261](https://datatracker.ietf.org/doc/html/rfc3261).
//!
//! Two types are provided:
//!
//! - [`NameValue`]: one parameter entry with its quoting metadata
//! - [`Params`]: the ordered store with case-insensitive unique keys
//!
//! Quote validation is centralized here: a caller may hand
//! [`Params::set_quoted`] a value that is already wrapped in `"`, and the
//! store strips the quotes and remembers the quoted flag. A value quoted on
//! only one side, or containing an unescaped interior quote, is rejected;
//! `\` and `"` inside a quoted value are escaped on encoding and resolved
//! on intake. Header types declare per parameter name
//! whether it is quoted-string typed and route through this one check.
//!
//! ## Examples
//!
//! ```rust
//! use sip_headers::prelude::*;
//!
//! let mut params = Params::new();
//! params.set("branch", "z9hG4bK776asdhds");
//! params.set_quoted("reason", "Server Unavailable").unwrap();
//! assert_eq!(params.get("BRANCH"), Some("z9hG4bK776asdhds"));
//! assert_eq!(params.encode(), ";branch=z9hG4bK776asdhds;reason=\"Server Unavailable\"");
//! ```

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The value carried by one parameter entry.
///
/// Most parameters carry tokens; integer and boolean forms are accepted
/// from typed setters (ttl, expires, stale) and normalize to their
/// textual token on storage, and the URI form holds an opaque `uri=`
/// value from a Digest credentials line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamValue {
    /// A simple token value
    Token(String),
    /// A numeric value
    Integer(i64),
    /// A boolean value, rendered as `true`/`false`
    Boolean(bool),
    /// An opaque URI value
    Uri(String),
}

impl ParamValue {
    /// Returns the value rendered as text, without any quoting.
    pub fn as_text(&self) -> String {
        match self {
            ParamValue::Token(s) => s.clone(),
            ParamValue::Integer(i) => i.to_string(),
            ParamValue::Boolean(b) => b.to_string(),
            ParamValue::Uri(u) => u.clone(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Token(s) => write!(f, "{}", s),
            ParamValue::Integer(i) => write!(f, "{}", i),
            ParamValue::Boolean(b) => write!(f, "{}", b),
            ParamValue::Uri(u) => write!(f, "{}", u),
        }
    }
}

impl std::convert::From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Token(s.to_string())
    }
}

impl std::convert::From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Token(s)
    }
}

/// One `name=value` parameter entry.
///
/// `quoted` is only meaningful for string values; encoding wraps the value
/// in `"` iff the flag is set. A `None` value is a flag parameter (`lr`).
///
/// Equality folds the name case-insensitively and compares values by their
/// textual form, so a reparsed entry equals the one it was encoded from
/// regardless of which [`ParamValue`] kind originally carried it.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct NameValue {
    /// Parameter name, compared case-insensitively
    pub name: String,
    /// Parameter value; `None` for flag parameters
    pub value: Option<ParamValue>,
    /// Whether encoding wraps the value in double quotes
    pub quoted: bool,
}

impl NameValue {
    /// Creates an unquoted entry.
    pub fn new(name: impl Into<String>, value: Option<ParamValue>) -> Self {
        NameValue {
            name: name.into(),
            value,
            quoted: false,
        }
    }
}

impl PartialEq for NameValue {
    fn eq(&self, other: &Self) -> bool {
        if !self.name.eq_ignore_ascii_case(&other.name) || self.quoted != other.quoted {
            return false;
        }
        match (&self.value, &other.value) {
            (None, None) => true,
            (Some(a), Some(b)) => a.as_text() == b.as_text(),
            _ => false,
        }
    }
}

impl fmt::Display for NameValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            None => write!(f, "{}", self.name),
            Some(v) if self.quoted => {
                write!(f, "{}=\"{}\"", self.name, escape_quoted(&v.as_text()))
            }
            Some(v) => write!(f, "{}={}", self.name, v),
        }
    }
}

/// Escapes `\` and `"` for rendering inside a quoted-string value.
fn escape_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Default parameter separator (`;name=value`).
pub const SEMICOLON: char = ';';
/// Separator used by the authentication header family (`,name=value`).
pub const COMMA: char = ',';

/// Ordered name/value parameter collection.
///
/// Keys are unique under case folding; `set` on an existing name replaces
/// the value in place so insertion order survives re-encoding. The
/// separator is a store-level setting: `;` for ordinary headers, `,` for
/// the authentication family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    entries: Vec<NameValue>,
    separator: char,
}

impl Default for Params {
    fn default() -> Self {
        Params::new()
    }
}

impl Params {
    /// Creates an empty store with the default `;` separator.
    pub fn new() -> Self {
        Params {
            entries: Vec::new(),
            separator: SEMICOLON,
        }
    }

    /// Creates an empty store with an explicit separator.
    pub fn with_separator(separator: char) -> Self {
        Params {
            entries: Vec::new(),
            separator,
        }
    }

    /// Returns the separator character used when encoding.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Returns true when the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Case-insensitive membership test.
    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// Case-insensitive lookup, returning the bare (unquoted) value.
    ///
    /// Flag parameters return `None` just like absent parameters; use
    /// [`Params::has`] to distinguish them.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entry(name).and_then(|e| match &e.value {
            Some(ParamValue::Token(s)) => Some(s.as_str()),
            Some(ParamValue::Uri(u)) => Some(u.as_str()),
            _ => None,
        })
    }

    /// Case-insensitive lookup of the full entry.
    pub fn entry(&self, name: &str) -> Option<&NameValue> {
        self.entries.iter().find(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// Iterates the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &NameValue> {
        self.entries.iter()
    }

    /// Upserts an unquoted parameter value.
    ///
    /// If the name already exists (case-insensitively) its value is
    /// replaced in place, preserving position; otherwise the entry is
    /// appended.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.upsert(name.into(), Some(value.into()), false);
    }

    /// Upserts a flag parameter carrying no value (e.g. `lr`).
    pub fn set_flag(&mut self, name: impl Into<String>) {
        self.upsert(name.into(), None, false);
    }

    /// Upserts a quoted-string parameter, validating quote balance.
    ///
    /// The supplied value may be pre-wrapped in `"`; both quotes are
    /// stripped before storing. A value quoted on only one side fails with
    /// an [`Error::InvalidFormat`]. Passing `"abc"` and `abc` yields
    /// identical stored state.
    pub fn set_quoted(&mut self, name: impl Into<String>, value: &str) -> Result<()> {
        let stripped = strip_quotes(value)?;
        self.upsert(name.into(), Some(ParamValue::Token(stripped)), true);
        Ok(())
    }

    /// Upserts a value that arrived already-unquoted off the wire with
    /// its quoted flag known, bypassing balance validation.
    pub(crate) fn set_prequoted(&mut self, name: impl Into<String>, value: String) {
        self.upsert(name.into(), Some(ParamValue::Token(value)), true);
    }

    /// Removes an entry by case-insensitive name. Returns true if removed.
    pub fn delete(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| !e.name.eq_ignore_ascii_case(name));
        before != self.entries.len()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Renders the parameters with a leading separator.
    ///
    /// Parameters always follow a header body, so the result begins with
    /// the separator character whenever the store is non-empty:
    /// `;branch=abc;ttl=4` or `,realm="x",nonce="y"`.
    pub fn encode(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        let sep = self.separator;
        let mut out = String::new();
        for entry in &self.entries {
            out.push(sep);
            out.push_str(&entry.to_string());
        }
        out
    }

    /// Renders the parameters joined by the separator, without the leading
    /// separator. Used where the first parameter follows something other
    /// than a parameter (the Digest scheme token).
    pub fn body(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join(&self.separator.to_string())
    }

    // Integer and boolean inputs are stored as their textual token so
    // `get` sees every value a setter can produce.
    fn upsert(&mut self, name: String, value: Option<ParamValue>, quoted: bool) {
        let value = value.map(|v| match v {
            ParamValue::Token(_) | ParamValue::Uri(_) => v,
            other => ParamValue::Token(other.as_text()),
        });
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|e| e.name.eq_ignore_ascii_case(&name))
        {
            existing.value = value;
            existing.quoted = quoted;
        } else {
            self.entries.push(NameValue { name, value, quoted });
        }
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

/// Strips balanced surrounding quotes and resolves `\x` escapes,
/// rejecting one-sided quoting and unescaped interior quotes.
fn strip_quotes(value: &str) -> Result<String> {
    let Some(inner) = value.strip_prefix('"') else {
        if value.ends_with('"') {
            return Err(Error::format(format!(
                "unbalanced quotes in parameter value: {value}"
            )));
        }
        return Ok(value.to_string());
    };
    let inner = inner.strip_suffix('"').ok_or_else(|| {
        Error::format(format!("unbalanced quotes in parameter value: {value}"))
    })?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => out.push(escaped),
                None => {
                    return Err(Error::format(format!(
                        "unbalanced quotes in parameter value: {value}"
                    )))
                }
            },
            '"' => {
                return Err(Error::format(format!(
                    "unescaped quote inside parameter value: {value}"
                )))
            }
            c => out.push(c),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_preserves_position() {
        let mut p = Params::new();
        p.set("a", "1");
        p.set("b", "2");
        p.set("A", "3");
        assert_eq!(p.encode(), ";a=3;b=2");
    }

    #[test]
    fn test_get_case_insensitive() {
        let mut p = Params::new();
        p.set("Branch", "z9hG4bK1");
        assert_eq!(p.get("branch"), Some("z9hG4bK1"));
        assert_eq!(p.get("BRANCH"), Some("z9hG4bK1"));
        assert_eq!(p.get("missing"), None);
    }

    #[test]
    fn test_flag_param() {
        let mut p = Params::new();
        p.set_flag("lr");
        assert!(p.has("lr"));
        assert_eq!(p.get("lr"), None);
        assert_eq!(p.encode(), ";lr");
    }

    #[test]
    fn test_quoted_value_normalization() {
        let mut a = Params::new();
        let mut b = Params::new();
        a.set_quoted("realm", "\"atlanta.com\"").unwrap();
        b.set_quoted("realm", "atlanta.com").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.encode(), ";realm=\"atlanta.com\"");
    }

    #[test]
    fn test_unbalanced_quotes_rejected() {
        let mut p = Params::new();
        assert!(p.set_quoted("realm", "\"atlanta.com").is_err());
        assert!(p.set_quoted("realm", "atlanta.com\"").is_err());
    }

    #[test]
    fn test_comma_separator() {
        let mut p = Params::with_separator(COMMA);
        p.set_quoted("realm", "atlanta.com").unwrap();
        p.set("algorithm", "MD5");
        assert_eq!(p.encode(), ",realm=\"atlanta.com\",algorithm=MD5");
        assert_eq!(p.body(), "realm=\"atlanta.com\",algorithm=MD5");
    }

    #[test]
    fn test_delete() {
        let mut p = Params::new();
        p.set("a", "1");
        p.set("b", "2");
        assert!(p.delete("A"));
        assert!(!p.delete("a"));
        assert_eq!(p.encode(), ";b=2");
    }

    #[test]
    fn test_integer_and_boolean_values() {
        let mut p = Params::new();
        p.set("ttl", ParamValue::Integer(4));
        p.set("stale", ParamValue::Boolean(true));
        assert_eq!(p.encode(), ";ttl=4;stale=true");
        assert_eq!(p.get("ttl"), Some("4"));
        assert_eq!(p.get("stale"), Some("true"));
    }

    #[test]
    fn test_typed_value_equals_token_form() {
        let mut typed = Params::new();
        typed.set("ttl", ParamValue::Integer(4));
        typed.set("stale", ParamValue::Boolean(true));
        let mut tokens = Params::new();
        tokens.set("ttl", "4");
        tokens.set("stale", "true");
        assert_eq!(typed, tokens);
    }

    #[test]
    fn test_entry_name_case_insensitive_equality() {
        let mut upper = Params::new();
        upper.set("TAG", "a48s");
        let mut lower = Params::new();
        lower.set("tag", "a48s");
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_quoted_value_escaping() {
        let mut p = Params::new();
        p.set_quoted("reason", "\"say \\\"hi\\\" now\"").unwrap();
        assert_eq!(p.get("reason"), Some("say \"hi\" now"));
        assert_eq!(p.encode(), ";reason=\"say \\\"hi\\\" now\"");
        p.clear();
        p.set_quoted("path", "\"C:\\\\tmp\"").unwrap();
        assert_eq!(p.get("path"), Some("C:\\tmp"));
        assert_eq!(p.encode(), ";path=\"C:\\\\tmp\"");
    }

    #[test]
    fn test_interior_unescaped_quote_rejected() {
        let mut p = Params::new();
        assert!(p.set_quoted("realm", "\"a\"b\"").is_err());
        p.set_quoted("realm", "\"a\\\"b\"").unwrap();
        assert_eq!(p.get("realm"), Some("a\"b"));
    }
}
