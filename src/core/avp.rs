//! # AVP Framing
//!
//! The self-describing attribute record all DIAMETER content is carried in.
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           AVP Code                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |V M P r r r r r|                  AVP Length                   |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                        Vendor-ID (opt)                        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |    Data ...
//! +-+-+-+-+-+-+-+-+
//! ```
//!
//! The Vendor-ID field is present exactly when the V flag is set. AVP Length
//! counts the header, the vendor field and the data — never the 0–3 zero pad
//! bytes that align the next AVP on a 4-byte boundary. Pad bytes carry no
//! meaning and are skipped without inspection.

use std::net::IpAddr;

use bitflags::bitflags;

use crate::core::buffer::{FrameWriter, WireReader};
use crate::error::{ProtocolError, Result};

/// AVP header size without the vendor field.
pub const AVP_HEADER_LEN: usize = 8;

/// AVP header size with the vendor field.
pub const AVP_VENDOR_HEADER_LEN: usize = 12;

bitflags! {
    /// AVP flags octet. The low five bits are reserved; unknown bits are
    /// preserved verbatim across a decode/encode cycle.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct AvpFlags: u8 {
        /// Vendor-ID field is present.
        const VENDOR = 0x80;
        /// Receiver must understand this AVP or reject the message.
        const MANDATORY = 0x40;
        /// End-to-end security protected.
        const PROTECTED = 0x20;
    }
}

/// An AVP kept in its raw wire form: the catch-all representation for
/// records the active schema does not declare. Code, flags, vendor scope and
/// payload bytes are preserved so the AVP can be re-emitted untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAvp {
    pub code: u32,
    pub flags: AvpFlags,
    pub vendor_id: Option<u32>,
    pub data: Vec<u8>,
}

impl RawAvp {
    pub fn new(code: u32, flags: AvpFlags, vendor_id: Option<u32>, data: Vec<u8>) -> Self {
        Self {
            code,
            flags,
            vendor_id,
            data,
        }
    }

    /// Vendor id used for schema identity matching: 0 when unscoped.
    #[inline]
    pub fn vendor_or_zero(&self) -> u32 {
        self.vendor_id.unwrap_or(0)
    }
}

/// A decoded AVP frame borrowing its payload from the input buffer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AvpFrame<'a> {
    pub code: u32,
    pub flags: AvpFlags,
    pub vendor_id: Option<u32>,
    pub data: &'a [u8],
}

impl AvpFrame<'_> {
    pub(crate) fn to_raw(&self) -> RawAvp {
        RawAvp::new(self.code, self.flags, self.vendor_id, self.data.to_vec())
    }
}

/// Reads one AVP frame and advances past its padding.
///
/// Fails with `InvalidLength` when the declared length cannot cover the
/// header implied by the flags, and `Truncated` when fewer bytes remain than
/// the length declares. Padding that the enclosing frame cut short is
/// tolerated: the final AVP of a message is complete without it.
pub(crate) fn read_avp<'a>(r: &mut WireReader<'a>) -> Result<AvpFrame<'a>> {
    let code = r.read_u32()?;
    let flags = AvpFlags::from_bits_retain(r.read_u8()?);
    let length = r.read_u24()? as usize;

    let header_len = if flags.contains(AvpFlags::VENDOR) {
        AVP_VENDOR_HEADER_LEN
    } else {
        AVP_HEADER_LEN
    };
    if length < header_len {
        return Err(ProtocolError::InvalidLength { code, length });
    }

    let vendor_id = if flags.contains(AvpFlags::VENDOR) {
        Some(r.read_u32()?)
    } else {
        None
    };
    let data = r.read_slice(length - header_len)?;

    let pad = length.wrapping_neg() % 4;
    r.skip(pad.min(r.remaining()))?;

    Ok(AvpFrame {
        code,
        flags,
        vendor_id,
        data,
    })
}

/// Writes an AVP header, reserving its length on the writer's back-patch
/// stack. The V flag is forced to agree with the vendor field's presence.
pub(crate) fn write_avp_start(
    w: &mut FrameWriter,
    code: u32,
    flags: AvpFlags,
    vendor_id: Option<u32>,
) {
    let start = w.len();
    let flags = match vendor_id {
        Some(_) => flags | AvpFlags::VENDOR,
        None => flags - AvpFlags::VENDOR,
    };
    w.put_u32(code);
    w.put_u8(flags.bits());
    w.reserve_length(start);
    if let Some(vendor) = vendor_id {
        w.put_u32(vendor);
    }
}

/// Closes the current AVP frame: patches its length and pads to alignment.
pub(crate) fn finish_avp(w: &mut FrameWriter) -> Result<()> {
    let length = w.commit_length()?;
    w.put_padding(length);
    Ok(())
}

/// Address family tags from the IANA Address Family Numbers registry, as
/// used by the derived Address format (two-octet family + address bytes).
pub(crate) const ADDRESS_FAMILY_IPV4: u16 = 1;
pub(crate) const ADDRESS_FAMILY_IPV6: u16 = 2;

/// Writes the derived Address format: family tag then address octets.
pub(crate) fn write_address(w: &mut FrameWriter, addr: &IpAddr) {
    match addr {
        IpAddr::V4(v4) => {
            w.put_u8(0);
            w.put_u8(ADDRESS_FAMILY_IPV4 as u8);
            w.put_slice(&v4.octets());
        }
        IpAddr::V6(v6) => {
            w.put_u8(0);
            w.put_u8(ADDRESS_FAMILY_IPV6 as u8);
            w.put_slice(&v6.octets());
        }
    }
}

/// Parses the derived Address format. Returns `None` for families or sizes
/// this codec does not model, in which case the raw bytes are kept instead.
pub(crate) fn parse_address(data: &[u8]) -> Option<IpAddr> {
    if data.len() < 2 {
        return None;
    }
    let family = u16::from_be_bytes([data[0], data[1]]);
    let address = &data[2..];
    match (family, address.len()) {
        (ADDRESS_FAMILY_IPV4, 4) => {
            let octets: [u8; 4] = address.try_into().ok()?;
            Some(IpAddr::from(octets))
        }
        (ADDRESS_FAMILY_IPV6, 16) => {
            let octets: [u8; 16] = address.try_into().ok()?;
            Some(IpAddr::from(octets))
        }
        _ => None,
    }
}
