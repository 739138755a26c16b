//! # Schema Model
//!
//! Runtime descriptors for AVPs and command grammars.
//!
//! A protocol definition is data, not code: each AVP is an [`AvpDef`]
//! (code, vendor scope, value kind, default flags) and each message or
//! grouped AVP is an ordered list of [`FieldRule`]s binding an AVP identity
//! to a multiplicity bound. The codec consults the same descriptors on both
//! the encode and the decode path, so the two can never disagree about a
//! field's shape.
//!
//! Schemas are built once, wrapped in `Arc` and shared read-only across any
//! number of concurrent codec operations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::avp::AvpFlags;

/// Closed set of payload interpretations. Every AVP is one of these — the
/// per-AVP specializations of RFC 6733 collapse onto this tag plus the data
/// in its [`AvpDef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    Unsigned32,
    Unsigned64,
    Integer32,
    Integer64,
    /// Unsigned32 drawn from a named value space.
    Enumerated,
    /// Opaque bytes.
    Octets,
    /// UTF8String / DiameterIdentity and friends.
    Text,
    /// Two-octet address family tag followed by the address.
    Address,
    /// Four-octet NTP timestamp (seconds since 1900-01-01).
    Time,
    /// Payload is a nested AVP sequence with its own grammar.
    Grouped,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Unsigned32 => "Unsigned32",
            ValueKind::Unsigned64 => "Unsigned64",
            ValueKind::Integer32 => "Integer32",
            ValueKind::Integer64 => "Integer64",
            ValueKind::Enumerated => "Enumerated",
            ValueKind::Octets => "OctetString",
            ValueKind::Text => "UTF8String",
            ValueKind::Address => "Address",
            ValueKind::Time => "Time",
            ValueKind::Grouped => "Grouped",
        }
    }
}

/// How many occurrences a field slot admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occurs {
    OptionalOne,
    MandatoryOne,
    OptionalMany,
    MandatoryMany,
}

impl Occurs {
    /// At least one occurrence must be present.
    #[inline]
    pub fn required(self) -> bool {
        matches!(self, Occurs::MandatoryOne | Occurs::MandatoryMany)
    }

    /// More than one occurrence is allowed.
    #[inline]
    pub fn multiple(self) -> bool {
        matches!(self, Occurs::OptionalMany | Occurs::MandatoryMany)
    }
}

/// Definition of one AVP: its wire identity and how its payload is read.
#[derive(Debug, Clone)]
pub struct AvpDef {
    pub name: &'static str,
    pub code: u32,
    /// 0 means unscoped (no V flag, no vendor field).
    pub vendor_id: u32,
    pub kind: ValueKind,
    /// Flags stamped on encode (the V bit is derived, never taken from here).
    pub flags: AvpFlags,
    /// Grammar of the nested sequence, present iff `kind` is `Grouped`.
    pub group: Option<Arc<GroupSchema>>,
}

impl AvpDef {
    /// A scalar AVP definition with no vendor scope and no default flags.
    pub fn new(name: &'static str, code: u32, kind: ValueKind) -> Self {
        Self {
            name,
            code,
            vendor_id: 0,
            kind,
            flags: AvpFlags::empty(),
            group: None,
        }
    }

    /// A grouped AVP definition carrying its nested grammar.
    pub fn grouped(name: &'static str, code: u32, group: Arc<GroupSchema>) -> Self {
        Self {
            name,
            code,
            vendor_id: 0,
            kind: ValueKind::Grouped,
            flags: AvpFlags::empty(),
            group: Some(group),
        }
    }

    /// Sets the default flags stamped on encode (typically `MANDATORY`).
    pub fn with_flags(mut self, flags: AvpFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Scopes the AVP code under a vendor id.
    pub fn with_vendor(mut self, vendor_id: u32) -> Self {
        self.vendor_id = vendor_id;
        self
    }

    /// Vendor field content for encoded occurrences of this AVP.
    #[inline]
    pub fn vendor(&self) -> Option<u32> {
        (self.vendor_id != 0).then_some(self.vendor_id)
    }
}

/// One slot of a grammar: an AVP identity plus its multiplicity bound.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub avp: Arc<AvpDef>,
    pub occurs: Occurs,
}

/// Ordered grammar shared by message bodies and grouped AVP payloads.
#[derive(Debug, Clone, Default)]
pub struct GroupSchema {
    pub rules: Vec<FieldRule>,
}

impl GroupSchema {
    pub fn build() -> GroupSchemaBuilder {
        GroupSchemaBuilder::default()
    }

    /// Index of the slot declared for `(code, vendor-or-zero)`, if any.
    pub fn rule_index(&self, code: u32, vendor_id: u32) -> Option<usize> {
        self.rules
            .iter()
            .position(|rule| rule.avp.code == code && rule.avp.vendor_id == vendor_id)
    }
}

/// Chainable construction of a [`GroupSchema`], declaration order preserved.
#[derive(Default)]
pub struct GroupSchemaBuilder {
    rules: Vec<FieldRule>,
}

impl GroupSchemaBuilder {
    fn rule(mut self, avp: &Arc<AvpDef>, occurs: Occurs) -> Self {
        self.rules.push(FieldRule {
            avp: avp.clone(),
            occurs,
        });
        self
    }

    pub fn mandatory(self, avp: &Arc<AvpDef>) -> Self {
        self.rule(avp, Occurs::MandatoryOne)
    }

    pub fn mandatory_many(self, avp: &Arc<AvpDef>) -> Self {
        self.rule(avp, Occurs::MandatoryMany)
    }

    pub fn optional(self, avp: &Arc<AvpDef>) -> Self {
        self.rule(avp, Occurs::OptionalOne)
    }

    pub fn optional_many(self, avp: &Arc<AvpDef>) -> Self {
        self.rule(avp, Occurs::OptionalMany)
    }

    pub fn finish(self) -> Arc<GroupSchema> {
        Arc::new(GroupSchema { rules: self.rules })
    }
}

/// A concrete message alternative: command identity plus body grammar.
#[derive(Debug, Clone)]
pub struct MessageSchema {
    pub name: &'static str,
    /// 24-bit command code; 0 for the generic wildcard alternatives.
    pub code: u32,
    /// Direction this schema describes.
    pub request: bool,
    pub body: Arc<GroupSchema>,
}

impl MessageSchema {
    pub fn request(name: &'static str, code: u32, body: Arc<GroupSchema>) -> Arc<Self> {
        Arc::new(Self {
            name,
            code,
            request: true,
            body,
        })
    }

    pub fn answer(name: &'static str, code: u32, body: Arc<GroupSchema>) -> Arc<Self> {
        Arc::new(Self {
            name,
            code,
            request: false,
            body,
        })
    }
}
