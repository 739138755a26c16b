//! # Codec Configuration
//!
//! Decode-time policy for the DIAMETER codec.
//!
//! The codec itself is stateless; everything tunable lives in a small
//! [`CodecConfig`] value passed to each decode call. Configuration is plain
//! data — the codec is embedded in a host stack, so file and environment
//! loading belong to the caller, not here.
//!
//! ## Duplicate Policy
//! RFC 6733 command grammars mark most fields as appearing at most once, but
//! real peers occasionally repeat them. The policy for that case is an
//! explicit choice:
//! - [`DuplicatePolicy::Lenient`] (default): the first occurrence binds to
//!   the field slot, later occurrences are captured in the catch-all
//!   collection, decoding continues.
//! - [`DuplicatePolicy::Strict`]: decoding fails with
//!   [`DuplicateAvp`](crate::ProtocolError::DuplicateAvp).

use crate::error::{ProtocolError, Result};
use serde::{Deserialize, Serialize};

/// Upper bound expressible by the header's 24-bit message length field.
pub const MAX_MESSAGE_LENGTH: usize = 0x00FF_FFFF;

/// How a second occurrence of a singular AVP is treated during decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail the decode with `DuplicateAvp`.
    Strict,
    /// Bind the first occurrence, redirect the rest to the catch-all.
    #[default]
    Lenient,
}

/// Decode-time settings. `Default` matches RFC-tolerant peer behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Policy for repeated singular AVPs.
    pub duplicate_policy: DuplicatePolicy,

    /// Messages whose declared length exceeds this are rejected before any
    /// AVP is examined. Never more than [`MAX_MESSAGE_LENGTH`].
    pub max_message_length: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::default(),
            max_message_length: MAX_MESSAGE_LENGTH,
        }
    }
}

impl CodecConfig {
    /// Validate the configuration for common misconfigurations.
    pub fn validate(&self) -> Result<()> {
        if self.max_message_length < crate::core::header::HEADER_LEN {
            return Err(ProtocolError::Config(format!(
                "max_message_length {} is smaller than the fixed header",
                self.max_message_length
            )));
        }
        if self.max_message_length > MAX_MESSAGE_LENGTH {
            return Err(ProtocolError::Config(format!(
                "max_message_length {} exceeds the 24-bit length field",
                self.max_message_length
            )));
        }
        Ok(())
    }
}
