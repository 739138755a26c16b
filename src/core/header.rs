//! # Message Header
//!
//! The fixed 20-byte DIAMETER header.
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |    Version    |                 Message Length                |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! | Command Flags |                  Command Code                 |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         Application-ID                        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                      Hop-by-Hop Identifier                    |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                      End-to-End Identifier                    |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! The length field counts the entire message including this header; it is
//! reserved on encode and back-patched once the last AVP has been written.
//! Decoding validates nothing beyond the version octet — structural length
//! checks belong to the message codec, grammar checks to the schema layer.

use bitflags::bitflags;

use crate::core::buffer::{FrameWriter, WireReader};
use crate::error::{ProtocolError, Result};

/// The only protocol version RFC 6733 defines.
pub const DIAMETER_VERSION: u8 = 1;

/// Size of the fixed header in bytes.
pub const HEADER_LEN: usize = 20;

bitflags! {
    /// Command flags octet. The low four bits are reserved; unknown bits are
    /// preserved verbatim across a decode/encode cycle.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CommandFlags: u8 {
        /// Set in requests, clear in answers.
        const REQUEST = 0x80;
        /// Message may be proxied, relayed or redirected.
        const PROXIABLE = 0x40;
        /// Message contains a protocol error. Must not be set in requests.
        const ERROR = 0x20;
        /// Message was potentially retransmitted after a link failover.
        const RETRANSMIT = 0x10;
    }
}

/// Decoded message header. The version and length fields are not stored:
/// the version is fixed and the length is derived from the encoded body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub flags: CommandFlags,
    /// 24-bit command code.
    pub code: u32,
    pub application_id: u32,
    pub hop_by_hop_id: u32,
    pub end_to_end_id: u32,
}

impl Header {
    /// Header for a request with the given command code.
    pub fn request(code: u32) -> Self {
        Self {
            flags: CommandFlags::REQUEST,
            code,
            application_id: 0,
            hop_by_hop_id: 0,
            end_to_end_id: 0,
        }
    }

    /// Header for an answer with the given command code.
    pub fn answer(code: u32) -> Self {
        Self {
            flags: CommandFlags::empty(),
            code,
            application_id: 0,
            hop_by_hop_id: 0,
            end_to_end_id: 0,
        }
    }

    #[inline]
    pub fn is_request(&self) -> bool {
        self.flags.contains(CommandFlags::REQUEST)
    }

    /// Writes the 20 header bytes, leaving the message length reserved on the
    /// writer's back-patch stack.
    pub(crate) fn encode(&self, w: &mut FrameWriter) {
        let start = w.len();
        w.put_u8(DIAMETER_VERSION);
        w.reserve_length(start);
        w.put_u8(self.flags.bits());
        w.put_u24(self.code & 0x00FF_FFFF);
        w.put_u32(self.application_id);
        w.put_u32(self.hop_by_hop_id);
        w.put_u32(self.end_to_end_id);
    }

    /// Reads the 20 header bytes. Returns the header and the declared total
    /// message length. Fails with `BadVersion` on any version other than 1.
    pub(crate) fn decode(r: &mut WireReader<'_>) -> Result<(Self, usize)> {
        let version = r.read_u8()?;
        if version != DIAMETER_VERSION {
            return Err(ProtocolError::BadVersion(version));
        }
        let length = r.read_u24()? as usize;
        let flags = CommandFlags::from_bits_retain(r.read_u8()?);
        let code = r.read_u24()?;
        let application_id = r.read_u32()?;
        let hop_by_hop_id = r.read_u32()?;
        let end_to_end_id = r.read_u32()?;
        Ok((
            Self {
                flags,
                code,
                application_id,
                hop_by_hop_id,
                end_to_end_id,
            },
            length,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_wire_form() {
        let header = Header {
            flags: CommandFlags::REQUEST | CommandFlags::PROXIABLE,
            code: 257,
            application_id: 0,
            hop_by_hop_id: 0x2222_2222,
            end_to_end_id: 0x5555_5555,
        };

        let mut w = FrameWriter::new();
        header.encode(&mut w);
        w.commit_length().unwrap();
        let bytes = w.into_bytes();
        assert_eq!(bytes.len(), HEADER_LEN);
        assert_eq!(&bytes[..4], &[0x01, 0x00, 0x00, 0x14]);

        let mut r = WireReader::new(&bytes);
        let (decoded, length) = Header::decode(&mut r).unwrap();
        assert_eq!(decoded, header);
        assert_eq!(length, HEADER_LEN);
    }

    #[test]
    fn rejects_wrong_version() {
        let mut bytes = vec![0x02];
        bytes.extend_from_slice(&[0; 19]);
        let mut r = WireReader::new(&bytes);
        assert_eq!(
            Header::decode(&mut r).unwrap_err(),
            ProtocolError::BadVersion(2)
        );
    }

    #[test]
    fn short_buffer_is_truncated() {
        let mut r = WireReader::new(&[0x01, 0x00, 0x00]);
        assert!(matches!(
            Header::decode(&mut r),
            Err(ProtocolError::Truncated { .. })
        ));
    }

    #[test]
    fn reserved_flag_bits_survive() {
        let bytes = [
            0x01, 0x00, 0x00, 0x14, 0x85, 0x00, 0x01, 0x01, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        ];
        let mut r = WireReader::new(&bytes);
        let (header, _) = Header::decode(&mut r).unwrap();
        assert_eq!(header.flags.bits(), 0x85);
        assert!(header.is_request());
    }
}
