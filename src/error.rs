//! # Error Types
//!
//! Comprehensive error handling for the DIAMETER codec.
//!
//! This module defines all error variants that can occur while encoding or
//! decoding messages, from low-level framing faults to schema violations.
//!
//! ## Error Categories
//! - **Wire Errors**: bad version, truncated buffers, invalid length fields
//! - **Dispatch Errors**: command codes with no registered schema
//! - **Schema Errors**: missing mandatory AVPs, duplicate singular AVPs
//! - **Builder Errors**: value/kind mismatches, undeclared AVPs, oversized frames
//!
//! Wire errors abort the whole decode: no partially-built message is ever
//! returned. Builder errors are reported before any bytes for the affected
//! message are committed, so a failed encode leaves nothing worth keeping.
//!
//! All errors implement `std::error::Error` for interoperability.

use thiserror::Error;

/// ProtocolError is the primary error type for all codec operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The header's version octet was not 1.
    #[error("unsupported DIAMETER version: {0}")]
    BadVersion(u8),

    /// Fewer bytes remain than a declared length requires.
    #[error("truncated input: needed {expected} bytes, {available} available")]
    Truncated { expected: usize, available: usize },

    /// A length field is smaller than the minimum frame size it must cover.
    #[error("invalid length {length} in frame with code {code}")]
    InvalidLength { code: u32, length: usize },

    /// A frame grew past what its length field or the configured cap can express.
    #[error("message too large: {0} bytes")]
    OversizedMessage(usize),

    /// No registered schema accepted the (command code, request bit) pair.
    #[error("no schema registered for command code {code} (request: {request})")]
    UnknownMessage { code: u32, request: bool },

    /// A mandatory field slot ended up with zero occurrences.
    #[error("missing mandatory AVP {0}")]
    MissingMandatoryAvp(u32),

    /// A singular field slot received more than one occurrence.
    #[error("duplicate AVP {0}")]
    DuplicateAvp(u32),

    /// A value of the wrong kind was pushed into a typed field slot.
    #[error("AVP {code} expects a {expected} value")]
    ValueKindMismatch { code: u32, expected: &'static str },

    /// An AVP definition absent from the active schema was pushed as a typed value.
    #[error("AVP {0} is not declared in the active schema")]
    UndeclaredAvp(u32),

    /// A dispatch registry was built with selectors in an unsound order.
    #[error("invalid registry: {0}")]
    InvalidRegistry(&'static str),

    /// The codec configuration failed validation.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;
