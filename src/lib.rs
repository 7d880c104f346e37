//! Typed SIP header object model
//!
//! This crate provides the typed representation, parameter handling,
//! canonical text encoding, and compact-name resolution for the headers
//! that can appear in a SIP request or response, as defined in
//! [RFC 3261](https://datatracker.ietf.org/doc/html/rfc3261) and the
//! extension RFCs 3262 (reliable provisional responses), 3265 (event
//! notification), and 3515 (REFER).
//!
//! The model is deliberately scoped to the header layer:
//!
//! - [`types`] holds one typed struct per header shape plus the shared
//!   value types ([`types::Params`], [`types::Address`], [`types::Uri`]).
//! - [`parser`] is the character-level tokenizer that turns a raw header
//!   line into a typed [`Header`].
//! - [`factory`] is the construction/validation surface callers use to
//!   build headers field-by-field or from raw text.
//!
//! Transactions, dialogs, transports, and message bodies live above this
//! crate and are out of scope.

// Declare modules
pub mod error;
pub mod factory;
pub mod parser;
pub mod types;

// Re-export key public items
pub use error::{Error, Result};
pub use factory::HeaderFactory;
pub use types::{
    AcceptContact,
    Address,
    Authorization,
    CallId,
    Contact,
    ContentLength,
    ContentType,
    CSeq,
    Date,
    Event,
    Expires,
    ExtensionHeader,
    From,
    GenericHeader,
    Header,
    HeaderList,
    HeaderName,
    MaxForwards,
    MediaType,
    Params,
    ProxyAuthenticate,
    ProxyAuthorization,
    RAck,
    RecordRoute,
    RequestLine,
    Route,
    RSeq,
    StatusLine,
    SubscriptionState,
    To,
    TypedHeader,
    Uri,
    Via,
    WwwAuthenticate,
};

/// Re-export of common types and functions
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::factory::HeaderFactory;
    pub use crate::parser::{parse_header, parse_headers};
    pub use crate::types::header::{Header, TypedHeader};
    pub use crate::types::header_list::HeaderList;
    pub use crate::types::header_name::HeaderName;
    pub use crate::types::param::{NameValue, ParamValue, Params};
    pub use crate::types::uri::{Host, HostPort, Uri};
    pub use crate::types::address::Address;
    pub use crate::types::request_line::RequestLine;
    pub use crate::types::status_line::StatusLine;
    pub use crate::types::*;
}
