//! # Message Codec
//!
//! The encode/decode engine tying the wire layer to the schema layer.
//!
//! Encoding walks the schema's field rules in declaration order, streaming
//! each AVP through the [`FrameWriter`] with its length field reserved and
//! back-patched as the frame closes; grouped AVPs recurse, their frames
//! resolving innermost-first. Decoding is the mirror: header, dispatch,
//! then one pass over the AVP records, routing each into its declared slot
//! or the catch-all, with multiplicity checked once the walk completes.
//!
//! Failure semantics: a decode error aborts immediately — the caller never
//! sees a partially-built message. An encode error is raised before the
//! failing message's bytes are committed, and the output buffer must be
//! discarded as a whole since back-patched lengths may refer to bytes that
//! were never finished.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, trace};

use crate::config::{CodecConfig, DuplicatePolicy};
use crate::core::avp::{self, finish_avp, read_avp, write_avp_start};
use crate::core::buffer::{FrameWriter, WireReader};
use crate::core::header::{Header, HEADER_LEN};
use crate::error::{ProtocolError, Result};
use crate::protocol::message::{Avp, AvpSet, AvpValue, Message};
use crate::protocol::registry::Registry;
use crate::protocol::schema::{AvpDef, GroupSchema, ValueKind};

/// Encodes a message into its wire form.
///
/// The whole tree is validated against its schemas before the first byte is
/// written, so a multiplicity violation costs no allocation and leaves no
/// partial output.
pub fn encode_message(message: &Message) -> Result<Bytes> {
    message.avps().validate_deep()?;

    let mut w = FrameWriter::with_capacity(HEADER_LEN + 32 * message.avps().len());
    message.header.encode(&mut w);
    encode_set(&mut w, message.avps())?;
    let length = w.commit_length()?;
    trace!(command = message.header.code, length, "encoded message");
    Ok(w.into_bytes())
}

/// Decodes one message from `bytes`, dispatching on the header's command
/// code and request bit against `registry`.
pub fn decode_message(bytes: &[u8], registry: &Registry, config: &CodecConfig) -> Result<Message> {
    let mut r = WireReader::new(bytes);
    let (header, declared) = Header::decode(&mut r)?;

    if declared < HEADER_LEN {
        return Err(ProtocolError::InvalidLength {
            code: header.code,
            length: declared,
        });
    }
    if declared > config.max_message_length {
        return Err(ProtocolError::OversizedMessage(declared));
    }
    if declared > bytes.len() {
        return Err(ProtocolError::Truncated {
            expected: declared,
            available: bytes.len(),
        });
    }

    let schema = registry
        .resolve(header.code, header.is_request())
        .ok_or(ProtocolError::UnknownMessage {
            code: header.code,
            request: header.is_request(),
        })?;
    debug!(
        command = header.code,
        schema = schema.name,
        "decoding message"
    );

    let avps = decode_set(&bytes[HEADER_LEN..declared], schema.body.clone(), config)?;
    Ok(Message::from_parts(header, schema.clone(), avps))
}

fn encode_set(w: &mut FrameWriter, set: &AvpSet) -> Result<()> {
    for (index, rule) in set.schema().rules.iter().enumerate() {
        for occurrence in set.slot(index) {
            write_avp_start(w, rule.avp.code, occurrence.flags, occurrence.vendor_id);
            encode_value(w, &occurrence.value)?;
            finish_avp(w)?;
        }
    }
    for raw in set.unrecognized() {
        write_avp_start(w, raw.code, raw.flags, raw.vendor_id);
        w.put_slice(&raw.data);
        finish_avp(w)?;
    }
    Ok(())
}

fn encode_value(w: &mut FrameWriter, value: &AvpValue) -> Result<()> {
    match value {
        AvpValue::Grouped(inner) => encode_set(w, inner)?,
        AvpValue::Unsigned32(v) | AvpValue::Enumerated(v) | AvpValue::Time(v) => w.put_u32(*v),
        AvpValue::Unsigned64(v) => w.put_u64(*v),
        AvpValue::Integer32(v) => w.put_i32(*v),
        AvpValue::Integer64(v) => w.put_i64(*v),
        AvpValue::Octets(data) => w.put_slice(data),
        AvpValue::Text(text) => w.put_slice(text.as_bytes()),
        AvpValue::Address(addr) => avp::write_address(w, addr),
    }
    Ok(())
}

fn decode_set(bytes: &[u8], schema: Arc<GroupSchema>, config: &CodecConfig) -> Result<AvpSet> {
    let mut set = AvpSet::new(schema.clone());
    let mut r = WireReader::new(bytes);

    while r.remaining() > 0 {
        let frame = read_avp(&mut r)?;
        match schema.rule_index(frame.code, frame.vendor_id.unwrap_or(0)) {
            Some(index) => {
                let rule = &schema.rules[index];
                if !rule.occurs.multiple() && !set.slot(index).is_empty() {
                    match config.duplicate_policy {
                        DuplicatePolicy::Strict => {
                            return Err(ProtocolError::DuplicateAvp(frame.code));
                        }
                        DuplicatePolicy::Lenient => {
                            debug!(code = frame.code, "repeated singular AVP sent to catch-all");
                            set.push_raw(frame.to_raw());
                        }
                    }
                    continue;
                }
                let value = decode_value(&rule.avp, frame.data, config)?;
                set.push_decoded(
                    index,
                    Avp {
                        flags: frame.flags,
                        vendor_id: frame.vendor_id,
                        value,
                    },
                );
            }
            None => {
                trace!(
                    code = frame.code,
                    vendor = frame.vendor_id.unwrap_or(0),
                    "undeclared AVP sent to catch-all"
                );
                set.push_raw(frame.to_raw());
            }
        }
    }

    set.validate()?;
    Ok(set)
}

fn decode_value(def: &AvpDef, data: &[u8], config: &CodecConfig) -> Result<AvpValue> {
    let value = match def.kind {
        ValueKind::Unsigned32 => AvpValue::Unsigned32(u32::from_be_bytes(fixed(def.code, data)?)),
        ValueKind::Enumerated => AvpValue::Enumerated(u32::from_be_bytes(fixed(def.code, data)?)),
        ValueKind::Time => AvpValue::Time(u32::from_be_bytes(fixed(def.code, data)?)),
        ValueKind::Unsigned64 => AvpValue::Unsigned64(u64::from_be_bytes(fixed(def.code, data)?)),
        ValueKind::Integer32 => AvpValue::Integer32(i32::from_be_bytes(fixed(def.code, data)?)),
        ValueKind::Integer64 => AvpValue::Integer64(i64::from_be_bytes(fixed(def.code, data)?)),
        ValueKind::Octets => AvpValue::Octets(data.to_vec()),
        ValueKind::Text => match String::from_utf8(data.to_vec()) {
            Ok(text) => AvpValue::Text(text),
            Err(err) => {
                debug!(code = def.code, "non-UTF8 text payload kept as octets");
                AvpValue::Octets(err.into_bytes())
            }
        },
        ValueKind::Address => match avp::parse_address(data) {
            Some(addr) => AvpValue::Address(addr),
            None => {
                debug!(code = def.code, "unmodeled address family kept as octets");
                AvpValue::Octets(data.to_vec())
            }
        },
        ValueKind::Grouped => {
            let group = def.group.as_ref().ok_or(ProtocolError::ValueKindMismatch {
                code: def.code,
                expected: ValueKind::Grouped.name(),
            })?;
            AvpValue::Grouped(decode_set(data, group.clone(), config)?)
        }
    };
    Ok(value)
}

fn fixed<const N: usize>(code: u32, data: &[u8]) -> Result<[u8; N]> {
    data.try_into().map_err(|_| ProtocolError::InvalidLength {
        code,
        length: data.len(),
    })
}
