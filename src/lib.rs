//! # diameter-protocol
//!
//! An RFC 6733 DIAMETER message codec: fixed-header framing, self-describing
//! AVP records with vendor scoping and alignment padding, recursive grouped
//! AVPs, multiplicity-checked field sets and ordered command dispatch with
//! generic fallbacks.
//!
//! The codec is synchronous and allocation-honest: it reads from and writes
//! to in-memory buffers supplied by the caller, holds no state between
//! calls, and leaves transport, peer state machines and retransmission
//! policy to the surrounding stack.
//!
//! ## Example
//! ```rust
//! use diameter_protocol::{decode_message, encode_message, CodecConfig, Message};
//! use diameter_protocol::base;
//!
//! # fn main() -> diameter_protocol::Result<()> {
//! let dict = base::dictionary();
//!
//! let mut dwr = Message::new(&dict.dwr);
//! dwr.header.hop_by_hop_id = 0x2222_2222;
//! dwr.avps_mut().push(&dict.origin_host, "peer.example.net")?;
//! dwr.avps_mut().push(&dict.origin_realm, "example.net")?;
//!
//! let bytes = encode_message(&dwr)?;
//! let decoded = decode_message(&bytes, base::registry(), &CodecConfig::default())?;
//! assert_eq!(decoded, dwr);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//! - [`core`] — wire primitives: buffers with back-patched length fields,
//!   the 20-byte header, AVP framing
//! - [`protocol`] — schema model, dispatch registry, message tree and the
//!   encode/decode engine
//! - [`protocol::base`] — the RFC 6733 base dictionary as stock schema data
//!
//! Schemas and registries are immutable once built and shared via `Arc`;
//! independent codec operations never share mutable state, so they can run
//! on as many threads as the caller likes.

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;

pub use config::{CodecConfig, DuplicatePolicy, MAX_MESSAGE_LENGTH};
pub use error::{ProtocolError, Result};

pub use crate::core::avp::{AvpFlags, RawAvp, AVP_HEADER_LEN, AVP_VENDOR_HEADER_LEN};
pub use crate::core::header::{CommandFlags, Header, DIAMETER_VERSION, HEADER_LEN};

pub use protocol::base;
pub use protocol::codec::{decode_message, encode_message};
pub use protocol::message::{Avp, AvpSet, AvpValue, Message};
pub use protocol::registry::{MessageSelector, Registry, RegistryBuilder};
pub use protocol::schema::{
    AvpDef, FieldRule, GroupSchema, GroupSchemaBuilder, MessageSchema, Occurs, ValueKind,
};
