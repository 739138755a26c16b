//! # Message Tree
//!
//! Decoded/to-be-encoded messages: typed AVP values, per-field slots and the
//! catch-all collection.
//!
//! A [`Message`] owns its [`AvpSet`] body outright; grouped AVPs own their
//! nested sets the same way. One decode produces one tree and dropping the
//! root releases everything at once — there are no back-references and no
//! sharing between operations.
//!
//! ## Catch-all
//! AVPs that match no declared field keep their raw wire form
//! ([`RawAvp`]) in the set's `unrecognized` collection. They survive a
//! decode/encode cycle untouched, which is what forward compatibility
//! requires of a DIAMETER node that relays messages it only partly
//! understands.

use std::net::IpAddr;
use std::sync::Arc;

use crate::core::avp::{AvpFlags, RawAvp};
use crate::core::header::Header;
use crate::error::{ProtocolError, Result};
use crate::protocol::schema::{AvpDef, GroupSchema, MessageSchema, ValueKind};

/// A decoded AVP payload, one variant per [`ValueKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum AvpValue {
    Unsigned32(u32),
    Unsigned64(u64),
    Integer32(i32),
    Integer64(i64),
    Enumerated(u32),
    Octets(Vec<u8>),
    Text(String),
    Address(IpAddr),
    /// Seconds since 1900-01-01 (NTP era 0).
    Time(u32),
    Grouped(AvpSet),
}

impl AvpValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            AvpValue::Unsigned32(_) => ValueKind::Unsigned32.name(),
            AvpValue::Unsigned64(_) => ValueKind::Unsigned64.name(),
            AvpValue::Integer32(_) => ValueKind::Integer32.name(),
            AvpValue::Integer64(_) => ValueKind::Integer64.name(),
            AvpValue::Enumerated(_) => ValueKind::Enumerated.name(),
            AvpValue::Octets(_) => ValueKind::Octets.name(),
            AvpValue::Text(_) => ValueKind::Text.name(),
            AvpValue::Address(_) => ValueKind::Address.name(),
            AvpValue::Time(_) => ValueKind::Time.name(),
            AvpValue::Grouped(_) => ValueKind::Grouped.name(),
        }
    }

    /// Numeric view of `Unsigned32`, `Enumerated` and `Time` values.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            AvpValue::Unsigned32(v) | AvpValue::Enumerated(v) | AvpValue::Time(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            AvpValue::Unsigned64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AvpValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            AvpValue::Octets(b) => Some(b),
            AvpValue::Text(s) => Some(s.as_bytes()),
            _ => None,
        }
    }

    pub fn as_address(&self) -> Option<IpAddr> {
        match self {
            AvpValue::Address(a) => Some(*a),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&AvpSet> {
        match self {
            AvpValue::Grouped(set) => Some(set),
            _ => None,
        }
    }
}

impl From<u32> for AvpValue {
    fn from(v: u32) -> Self {
        AvpValue::Unsigned32(v)
    }
}

impl From<u64> for AvpValue {
    fn from(v: u64) -> Self {
        AvpValue::Unsigned64(v)
    }
}

impl From<i32> for AvpValue {
    fn from(v: i32) -> Self {
        AvpValue::Integer32(v)
    }
}

impl From<i64> for AvpValue {
    fn from(v: i64) -> Self {
        AvpValue::Integer64(v)
    }
}

impl From<&str> for AvpValue {
    fn from(v: &str) -> Self {
        AvpValue::Text(v.to_owned())
    }
}

impl From<String> for AvpValue {
    fn from(v: String) -> Self {
        AvpValue::Text(v)
    }
}

impl From<&[u8]> for AvpValue {
    fn from(v: &[u8]) -> Self {
        AvpValue::Octets(v.to_vec())
    }
}

impl From<Vec<u8>> for AvpValue {
    fn from(v: Vec<u8>) -> Self {
        AvpValue::Octets(v)
    }
}

impl From<IpAddr> for AvpValue {
    fn from(v: IpAddr) -> Self {
        AvpValue::Address(v)
    }
}

impl From<AvpSet> for AvpValue {
    fn from(v: AvpSet) -> Self {
        AvpValue::Grouped(v)
    }
}

/// One occurrence of a declared field: the decoded value plus the wire
/// attributes that must survive re-encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Avp {
    pub flags: AvpFlags,
    pub vendor_id: Option<u32>,
    pub value: AvpValue,
}

/// Ordered field slots for one grammar, plus the catch-all collection.
/// Serves as the body of a message and as the payload of a grouped AVP.
#[derive(Debug, Clone)]
pub struct AvpSet {
    schema: Arc<GroupSchema>,
    slots: Vec<Vec<Avp>>,
    unrecognized: Vec<RawAvp>,
}

impl PartialEq for AvpSet {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots && self.unrecognized == other.unrecognized
    }
}

impl AvpSet {
    pub fn new(schema: Arc<GroupSchema>) -> Self {
        let slots = vec![Vec::new(); schema.rules.len()];
        Self {
            schema,
            slots,
            unrecognized: Vec::new(),
        }
    }

    /// An empty body for a grouped AVP definition. Fails when `def` does not
    /// carry a nested grammar.
    pub fn grouped(def: &AvpDef) -> Result<Self> {
        let group = def.group.as_ref().ok_or(ProtocolError::ValueKindMismatch {
            code: def.code,
            expected: ValueKind::Grouped.name(),
        })?;
        Ok(Self::new(group.clone()))
    }

    pub fn schema(&self) -> &Arc<GroupSchema> {
        &self.schema
    }

    /// Appends a typed value to the slot declared for `def`.
    ///
    /// The value must match the declared kind (`Unsigned32` coerces into
    /// `Enumerated` and `Time` slots and vice versa). Pushing a second value
    /// into a singular slot fails with `DuplicateAvp`; an AVP the grammar
    /// does not declare fails with `UndeclaredAvp` — use [`push_raw`] to
    /// send those deliberately.
    ///
    /// [`push_raw`]: AvpSet::push_raw
    pub fn push<V: Into<AvpValue>>(&mut self, def: &AvpDef, value: V) -> Result<()> {
        let index = self
            .schema
            .rule_index(def.code, def.vendor_id)
            .ok_or(ProtocolError::UndeclaredAvp(def.code))?;
        let value = coerce(def, value.into())?;
        let rule = &self.schema.rules[index];
        if !rule.occurs.multiple() && !self.slots[index].is_empty() {
            return Err(ProtocolError::DuplicateAvp(def.code));
        }
        let mut flags = def.flags;
        if def.vendor().is_some() {
            flags |= AvpFlags::VENDOR;
        }
        self.slots[index].push(Avp {
            flags,
            vendor_id: def.vendor(),
            value,
        });
        Ok(())
    }

    /// Appends a raw AVP to the catch-all collection. It is re-emitted after
    /// the declared fields, byte for byte.
    pub fn push_raw(&mut self, avp: RawAvp) {
        self.unrecognized.push(avp);
    }

    /// First occurrence bound to `def`'s slot.
    pub fn first(&self, def: &AvpDef) -> Option<&AvpValue> {
        self.all(def).first().map(|avp| &avp.value)
    }

    /// All occurrences bound to `def`'s slot, in order of arrival.
    pub fn all(&self, def: &AvpDef) -> &[Avp] {
        self.schema
            .rule_index(def.code, def.vendor_id)
            .map(|index| self.slots[index].as_slice())
            .unwrap_or(&[])
    }

    pub fn count(&self, def: &AvpDef) -> usize {
        self.all(def).len()
    }

    /// AVPs captured by the catch-all, in order of arrival.
    pub fn unrecognized(&self) -> &[RawAvp] {
        &self.unrecognized
    }

    /// Total occurrences across declared slots and the catch-all.
    pub fn len(&self) -> usize {
        self.slots.iter().map(Vec::len).sum::<usize>() + self.unrecognized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn slot(&self, index: usize) -> &[Avp] {
        &self.slots[index]
    }

    pub(crate) fn push_decoded(&mut self, index: usize, avp: Avp) {
        self.slots[index].push(avp);
    }

    /// Multiplicity check over the declared slots of this set only.
    pub(crate) fn validate(&self) -> Result<()> {
        for (rule, slot) in self.schema.rules.iter().zip(&self.slots) {
            if rule.occurs.required() && slot.is_empty() {
                return Err(ProtocolError::MissingMandatoryAvp(rule.avp.code));
            }
            if !rule.occurs.multiple() && slot.len() > 1 {
                return Err(ProtocolError::DuplicateAvp(rule.avp.code));
            }
        }
        Ok(())
    }

    /// Multiplicity check over this set and every nested group.
    pub(crate) fn validate_deep(&self) -> Result<()> {
        self.validate()?;
        for slot in &self.slots {
            for avp in slot {
                if let AvpValue::Grouped(inner) = &avp.value {
                    inner.validate_deep()?;
                }
            }
        }
        Ok(())
    }
}

fn coerce(def: &AvpDef, value: AvpValue) -> Result<AvpValue> {
    use AvpValue as V;
    use ValueKind as K;

    let value = match (def.kind, value) {
        (K::Enumerated, V::Unsigned32(v)) => V::Enumerated(v),
        (K::Unsigned32, V::Enumerated(v)) => V::Unsigned32(v),
        (K::Time, V::Unsigned32(v)) => V::Time(v),
        (kind, value) => {
            let compatible = matches!(
                (kind, &value),
                (K::Unsigned32, V::Unsigned32(_))
                    | (K::Unsigned64, V::Unsigned64(_))
                    | (K::Integer32, V::Integer32(_))
                    | (K::Integer64, V::Integer64(_))
                    | (K::Enumerated, V::Enumerated(_))
                    | (K::Octets, V::Octets(_))
                    | (K::Text, V::Text(_))
                    | (K::Address, V::Address(_))
                    | (K::Time, V::Time(_))
                    | (K::Grouped, V::Grouped(_))
            );
            if !compatible {
                return Err(ProtocolError::ValueKindMismatch {
                    code: def.code,
                    expected: def.kind.name(),
                });
            }
            value
        }
    };
    Ok(value)
}

/// A complete message: header plus schema-shaped body.
#[derive(Debug, Clone)]
pub struct Message {
    pub header: Header,
    schema: Arc<MessageSchema>,
    avps: AvpSet,
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header
            && self.schema.name == other.schema.name
            && self.avps == other.avps
    }
}

impl Message {
    /// An empty message for the given schema, header pre-filled with the
    /// schema's command identity.
    pub fn new(schema: &Arc<MessageSchema>) -> Self {
        let header = if schema.request {
            Header::request(schema.code)
        } else {
            Header::answer(schema.code)
        };
        Self {
            header,
            schema: schema.clone(),
            avps: AvpSet::new(schema.body.clone()),
        }
    }

    pub(crate) fn from_parts(header: Header, schema: Arc<MessageSchema>, avps: AvpSet) -> Self {
        Self {
            header,
            schema,
            avps,
        }
    }

    pub fn schema(&self) -> &Arc<MessageSchema> {
        &self.schema
    }

    pub fn name(&self) -> &'static str {
        self.schema.name
    }

    pub fn avps(&self) -> &AvpSet {
        &self.avps
    }

    pub fn avps_mut(&mut self) -> &mut AvpSet {
        &mut self.avps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::schema::GroupSchema;

    fn defs() -> (Arc<AvpDef>, Arc<AvpDef>, Arc<GroupSchema>) {
        let host = Arc::new(
            AvpDef::new("Origin-Host", 264, ValueKind::Text).with_flags(AvpFlags::MANDATORY),
        );
        let vendor = Arc::new(
            AvpDef::new("Supported-Vendor-Id", 265, ValueKind::Enumerated)
                .with_flags(AvpFlags::MANDATORY),
        );
        let schema = GroupSchema::build()
            .mandatory(&host)
            .optional_many(&vendor)
            .finish();
        (host, vendor, schema)
    }

    #[test]
    fn push_binds_in_arrival_order() {
        let (_, vendor, schema) = defs();
        let mut set = AvpSet::new(schema);
        set.push(&vendor, 10415u32).unwrap();
        set.push(&vendor, 28458u32).unwrap();

        let values: Vec<u32> = set
            .all(&vendor)
            .iter()
            .filter_map(|avp| avp.value.as_u32())
            .collect();
        assert_eq!(values, [10415, 28458]);
    }

    #[test]
    fn second_push_into_singular_slot_fails() {
        let (host, _, schema) = defs();
        let mut set = AvpSet::new(schema);
        set.push(&host, "a.example").unwrap();
        assert_eq!(
            set.push(&host, "b.example").unwrap_err(),
            ProtocolError::DuplicateAvp(264)
        );
    }

    #[test]
    fn undeclared_def_is_rejected() {
        let (_, _, schema) = defs();
        let mut set = AvpSet::new(schema);
        let stranger = AvpDef::new("Result-Code", 268, ValueKind::Enumerated);
        assert_eq!(
            set.push(&stranger, 2001u32).unwrap_err(),
            ProtocolError::UndeclaredAvp(268)
        );
    }

    #[test]
    fn kind_mismatch_is_rejected() {
        let (host, _, schema) = defs();
        let mut set = AvpSet::new(schema);
        assert_eq!(
            set.push(&host, 42u32).unwrap_err(),
            ProtocolError::ValueKindMismatch {
                code: 264,
                expected: "UTF8String"
            }
        );
    }

    #[test]
    fn unsigned_coerces_into_enumerated() {
        let (_, vendor, schema) = defs();
        let mut set = AvpSet::new(schema);
        set.push(&vendor, 10415u32).unwrap();
        assert_eq!(set.first(&vendor), Some(&AvpValue::Enumerated(10415)));
    }

    #[test]
    fn validate_flags_missing_mandatory() {
        let (_, _, schema) = defs();
        let set = AvpSet::new(schema);
        assert_eq!(
            set.validate().unwrap_err(),
            ProtocolError::MissingMandatoryAvp(264)
        );
    }

    #[test]
    fn catch_all_preserves_raw_form() {
        let (host, _, schema) = defs();
        let mut set = AvpSet::new(schema);
        set.push(&host, "a.example").unwrap();
        let raw = RawAvp::new(999, AvpFlags::MANDATORY, Some(10415), vec![1, 2, 3]);
        set.push_raw(raw.clone());
        assert_eq!(set.unrecognized(), &[raw]);
        assert_eq!(set.len(), 2);
    }
}
