//! # Core Wire Components
//!
//! Low-level framing: buffers, the fixed header, and AVP records.
//!
//! This module provides the byte-level foundation of the codec. Nothing here
//! knows about command grammars or dictionaries — that is the job of
//! [`protocol`](crate::protocol).
//!
//! ## Components
//! - **Buffer**: write cursor with reserve-then-patch length fields, and a
//!   bounds-checked read cursor
//! - **Header**: the fixed 20-byte message header
//! - **AVP**: self-describing attribute records with vendor scoping and
//!   4-byte alignment padding
//!
//! ## Wire Format
//! ```text
//! [Version(1)] [Length(3)] [Flags(1)] [Command(3)] [AppId(4)] [HopId(4)] [EndId(4)] [AVPs...]
//! ```
//! All integers are network byte order.

pub mod avp;
pub mod buffer;
pub mod header;
