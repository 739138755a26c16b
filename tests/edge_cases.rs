#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Edge-case tests for the decode and encode paths: boundary conditions,
//! malformed frames, multiplicity violations and dispatch fallbacks.

use diameter_protocol::base;
use diameter_protocol::{
    decode_message, encode_message, CodecConfig, DuplicatePolicy, Message, ProtocolError,
    Registry,
};

fn decode(bytes: &[u8]) -> Result<Message, ProtocolError> {
    decode_message(bytes, base::registry(), &CodecConfig::default())
}

fn valid_dwr() -> Vec<u8> {
    let dict = base::dictionary();
    let mut msg = Message::new(&dict.dwr);
    msg.avps_mut().push(&dict.origin_host, "peer.example").unwrap();
    msg.avps_mut().push(&dict.origin_realm, "example.net").unwrap();
    encode_message(&msg).unwrap().to_vec()
}

// ============================================================================
// HEADER / FRAMING EDGE CASES
// ============================================================================

#[test]
fn empty_buffer_is_truncated() {
    assert!(matches!(decode(&[]), Err(ProtocolError::Truncated { .. })));
}

#[test]
fn partial_header_is_truncated() {
    let bytes = valid_dwr();
    assert!(matches!(
        decode(&bytes[..12]),
        Err(ProtocolError::Truncated { .. })
    ));
}

#[test]
fn wrong_version_is_rejected() {
    let mut bytes = valid_dwr();
    bytes[0] = 3;
    assert_eq!(decode(&bytes), Err(ProtocolError::BadVersion(3)));
}

#[test]
fn message_length_below_header_is_invalid() {
    let mut bytes = valid_dwr();
    bytes[3] = 0x13; // 19 < 20
    assert!(matches!(
        decode(&bytes),
        Err(ProtocolError::InvalidLength { length: 19, .. })
    ));
}

#[test]
fn message_length_past_buffer_is_truncated() {
    let mut bytes = valid_dwr();
    let declared = bytes.len() + 8;
    bytes[3] = declared as u8;
    assert_eq!(
        decode(&bytes),
        Err(ProtocolError::Truncated {
            expected: declared,
            available: declared - 8,
        })
    );
}

#[test]
fn avp_length_below_minimum_is_invalid() {
    let mut bytes = valid_dwr();
    // First AVP starts at 20; its length field is at offset 25..28.
    bytes[27] = 0x04;
    assert_eq!(
        decode(&bytes),
        Err(ProtocolError::InvalidLength { code: 264, length: 4 })
    );
}

#[test]
fn avp_payload_past_message_end_is_truncated() {
    let mut bytes = valid_dwr();
    bytes[27] = 0xF0;
    assert!(matches!(decode(&bytes), Err(ProtocolError::Truncated { .. })));
}

#[test]
fn numeric_avp_with_wrong_size_is_invalid() {
    let dict = base::dictionary();
    let mut msg = Message::new(&dict.dpr);
    msg.avps_mut().push(&dict.origin_host, "peer.example").unwrap();
    msg.avps_mut().push(&dict.origin_realm, "example.net").unwrap();
    msg.avps_mut()
        .push(&dict.disconnect_cause, base::DisconnectCause::Rebooting)
        .unwrap();
    let mut bytes = encode_message(&msg).unwrap().to_vec();

    // Shrink the Disconnect-Cause length from 12 to 11, leaving a 3-byte
    // payload where an Enumerated needs 4.
    let pos = bytes.len() - 5;
    bytes[pos] = 0x0B;
    assert_eq!(
        decode(&bytes),
        Err(ProtocolError::InvalidLength { code: 273, length: 3 })
    );
}

// ============================================================================
// MULTIPLICITY EDGE CASES
// ============================================================================

#[test]
fn missing_mandatory_avp_fails_decode() {
    // Cut a valid DWR down to header + Origin-Host: Origin-Realm is gone.
    let mut bytes = valid_dwr();
    bytes.truncate(40);
    let total = (bytes.len() as u32).to_be_bytes();
    bytes[1..4].copy_from_slice(&total[1..]);

    assert_eq!(decode(&bytes), Err(ProtocolError::MissingMandatoryAvp(296)));
}

#[test]
fn encode_refuses_missing_mandatory() {
    let dict = base::dictionary();
    let mut msg = Message::new(&dict.dwr);
    msg.avps_mut().push(&dict.origin_host, "peer.example").unwrap();
    assert_eq!(
        encode_message(&msg),
        Err(ProtocolError::MissingMandatoryAvp(296))
    );
}

#[test]
fn duplicate_singular_avp_policies() {
    let dict = base::dictionary();
    let mut bytes = valid_dwr();
    // Append a duplicate Origin-Realm and fix the total length.
    bytes.extend_from_slice(&[0x00, 0x00, 0x01, 0x28, 0x40, 0x00, 0x00, 0x13]);
    bytes.extend_from_slice(b"another.net");
    bytes.push(0);
    let total = (bytes.len() as u32).to_be_bytes();
    bytes[1..4].copy_from_slice(&total[1..]);

    // Lenient (default): first occurrence binds, duplicate is captured.
    let msg = decode(&bytes).unwrap();
    assert_eq!(
        msg.avps().first(&dict.origin_realm).unwrap().as_str(),
        Some("example.net")
    );
    assert_eq!(msg.avps().unrecognized().len(), 1);
    assert_eq!(msg.avps().unrecognized()[0].code, 296);

    // Strict: hard failure.
    let strict = CodecConfig {
        duplicate_policy: DuplicatePolicy::Strict,
        ..CodecConfig::default()
    };
    assert_eq!(
        decode_message(&bytes, base::registry(), &strict),
        Err(ProtocolError::DuplicateAvp(296))
    );
}

// ============================================================================
// DISPATCH EDGE CASES
// ============================================================================

#[test]
fn unknown_command_without_wildcards_fails() {
    let dict = base::dictionary();
    let registry = Registry::builder()
        .message(&dict.dwr)
        .message(&dict.dwa)
        .build()
        .unwrap();

    let mut bytes = valid_dwr();
    bytes[6] = 0x11; // command code no longer 280

    assert!(matches!(
        decode_message(&bytes, &registry, &CodecConfig::default()),
        Err(ProtocolError::UnknownMessage { request: true, .. })
    ));
}

#[test]
fn exact_schema_wins_over_wildcard() {
    let dict = base::dictionary();
    let registry = Registry::builder()
        .message(&dict.dwr)
        .any_request(&dict.generic_request)
        .build()
        .unwrap();

    let bytes = valid_dwr();
    let msg = decode_message(&bytes, &registry, &CodecConfig::default()).unwrap();
    assert_eq!(msg.name(), "Device-Watchdog-Request");
}

#[test]
fn wildcard_catches_what_exacts_do_not() {
    let dict = base::dictionary();
    let registry = Registry::builder()
        .message(&dict.dwr)
        .any_request(&dict.generic_request)
        .build()
        .unwrap();

    let mut bytes = valid_dwr();
    bytes[6] = 0x11;
    let msg = decode_message(&bytes, &registry, &CodecConfig::default()).unwrap();
    assert_eq!(msg.name(), "Generic-Request");
}

#[test]
fn misordered_registry_is_rejected() {
    let dict = base::dictionary();
    let result = Registry::builder()
        .any_request(&dict.generic_request)
        .message(&dict.dwr)
        .build();
    assert_eq!(
        result.err(),
        Some(ProtocolError::InvalidRegistry(
            "exact selectors must be registered before wildcards"
        ))
    );
}
