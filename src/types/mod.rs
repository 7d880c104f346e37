//! Typed header shapes and the shared value types they are built from.
//!
//! Each header with structure beyond opaque text gets its own module and
//! struct; the shared building blocks ([`Params`], [`Address`], [`Uri`])
//! live alongside them. [`header::TypedHeader`] ties the shapes together
//! as one flat enum.

pub mod accept_contact;
pub mod address;
pub mod auth;
pub mod call_id;
pub mod contact;
pub mod content_length;
pub mod content_type;
pub mod cseq;
pub mod date;
pub mod event;
pub mod expires;
pub mod extension;
pub mod from;
pub mod header;
pub mod header_list;
pub mod header_name;
pub mod max_forwards;
pub mod param;
pub mod record_route;
pub mod request_line;
pub mod route;
pub mod rseq;
pub mod status_line;
pub mod subscription_state;
pub mod to;
pub mod uri;
pub mod via;

pub use accept_contact::AcceptContact;
pub use address::Address;
pub use auth::{
    Authorization, DigestParams, ProxyAuthenticate, ProxyAuthorization, WwwAuthenticate,
};
pub use call_id::{CallId, CallIdentifier};
pub use contact::Contact;
pub use content_length::ContentLength;
pub use content_type::{ContentType, MediaType};
pub use cseq::{CSeq, MAX_SEQ};
pub use date::Date;
pub use event::Event;
pub use expires::Expires;
pub use extension::{ExtensionHeader, GenericHeader};
pub use from::From;
pub use header::{Header, TypedHeader};
pub use header_list::HeaderList;
pub use header_name::{expand_compact, HeaderName};
pub use max_forwards::MaxForwards;
pub use param::{NameValue, ParamValue, Params};
pub use record_route::RecordRoute;
pub use request_line::{RequestLine, SIP_VERSION};
pub use route::Route;
pub use rseq::{RAck, RSeq};
pub use status_line::StatusLine;
pub use subscription_state::SubscriptionState;
pub use to::To;
pub use uri::{Host, HostPort, Uri};
pub use via::{Protocol, Via};
