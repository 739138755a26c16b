//! # Protocol Components
//!
//! Schema-driven message handling on top of the wire layer.
//!
//! ## Components
//! - **Schema**: runtime AVP and command grammar descriptors
//! - **Registry**: ordered command dispatch with generic fallbacks
//! - **Message**: the typed message tree and its catch-all collection
//! - **Codec**: the encode/decode engine
//! - **Base**: the RFC 6733 base dictionary as stock schema data

pub mod base;
pub mod codec;
pub mod message;
pub mod registry;
pub mod schema;

#[cfg(test)]
mod tests;
