// test-only module included via protocol/mod.rs
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::config::{CodecConfig, DuplicatePolicy};
use crate::core::avp::{AvpFlags, RawAvp};
use crate::error::ProtocolError;
use crate::protocol::base;
use crate::protocol::codec::{decode_message, encode_message};
use crate::protocol::message::{AvpSet, AvpValue, Message};

fn watchdog_request() -> Message {
    let dict = base::dictionary();
    let mut msg = Message::new(&dict.dwr);
    msg.header.hop_by_hop_id = 0x1111_0001;
    msg.header.end_to_end_id = 0x2222_0002;
    msg.avps_mut().push(&dict.origin_host, "peer.example").unwrap();
    msg.avps_mut()
        .push(&dict.origin_realm, "example.net")
        .unwrap();
    msg
}

#[test]
fn watchdog_round_trip() {
    let msg = watchdog_request();
    let bytes = encode_message(&msg).unwrap();
    let decoded = decode_message(&bytes, base::registry(), &CodecConfig::default()).unwrap();
    assert_eq!(decoded, msg);
    assert_eq!(decoded.name(), "Device-Watchdog-Request");
}

#[test]
fn grouped_avp_round_trip() {
    let dict = base::dictionary();
    let mut msg = Message::new(&dict.cer);
    msg.avps_mut().push(&dict.origin_host, "peer.example").unwrap();
    msg.avps_mut()
        .push(&dict.origin_realm, "example.net")
        .unwrap();
    msg.avps_mut()
        .push(&dict.host_ip_address, "10.0.0.1".parse::<std::net::IpAddr>().unwrap())
        .unwrap();
    msg.avps_mut().push(&dict.vendor_id, base::vendor::NONE).unwrap();
    msg.avps_mut().push(&dict.product_name, "unit:test").unwrap();

    let mut vsa = AvpSet::grouped(&dict.vendor_specific_application_id).unwrap();
    vsa.push(&dict.vendor_id, base::vendor::TGPP).unwrap();
    vsa.push(&dict.auth_application_id, base::app::S6A).unwrap();
    msg.avps_mut()
        .push(&dict.vendor_specific_application_id, vsa)
        .unwrap();

    let bytes = encode_message(&msg).unwrap();
    let decoded = decode_message(&bytes, base::registry(), &CodecConfig::default()).unwrap();
    assert_eq!(decoded, msg);

    let group = decoded
        .avps()
        .first(&dict.vendor_specific_application_id)
        .and_then(AvpValue::as_group)
        .expect("grouped value");
    assert_eq!(group.first(&dict.vendor_id).unwrap().as_u32(), Some(10415));
    assert_eq!(
        group.first(&dict.auth_application_id).unwrap().as_u32(),
        Some(base::app::S6A)
    );
}

#[test]
fn group_missing_mandatory_member_fails_encode() {
    let dict = base::dictionary();
    let mut cer = Message::new(&dict.cer);
    cer.avps_mut().push(&dict.origin_host, "peer.example").unwrap();
    cer.avps_mut().push(&dict.origin_realm, "example.net").unwrap();
    cer.avps_mut()
        .push(&dict.host_ip_address, "10.0.0.1".parse::<std::net::IpAddr>().unwrap())
        .unwrap();
    cer.avps_mut().push(&dict.vendor_id, 0u32).unwrap();
    cer.avps_mut().push(&dict.product_name, "unit:test").unwrap();

    let vsa = AvpSet::grouped(&dict.vendor_specific_application_id).unwrap();
    cer.avps_mut()
        .push(&dict.vendor_specific_application_id, vsa)
        .unwrap();

    assert_eq!(
        encode_message(&cer).unwrap_err(),
        ProtocolError::MissingMandatoryAvp(266)
    );
}

#[test]
fn catch_all_avps_are_re_emitted() {
    let mut msg = watchdog_request();
    msg.avps_mut().push_raw(RawAvp::new(
        999,
        AvpFlags::empty(),
        Some(base::vendor::TGPP),
        vec![0xDE, 0xAD],
    ));

    let bytes = encode_message(&msg).unwrap();
    let decoded = decode_message(&bytes, base::registry(), &CodecConfig::default()).unwrap();
    assert_eq!(decoded.avps().unrecognized().len(), 1);
    let raw = &decoded.avps().unrecognized()[0];
    assert_eq!(raw.code, 999);
    assert_eq!(raw.vendor_id, Some(10415));
    assert_eq!(raw.data, vec![0xDE, 0xAD]);
    assert_eq!(raw.flags, AvpFlags::VENDOR);
}

#[test]
fn strict_policy_rejects_duplicate_singular() {
    let dict = base::dictionary();
    let msg = watchdog_request();
    let mut bytes = encode_message(&msg).unwrap().to_vec();

    // Append a second Origin-Host and fix the message length.
    bytes.extend_from_slice(&[0x00, 0x00, 0x01, 0x08, 0x40, 0x00, 0x00, 21]);
    bytes.extend_from_slice(b"other.example");
    bytes.extend_from_slice(&[0, 0, 0]);
    let total = (bytes.len() as u32).to_be_bytes();
    bytes[1..4].copy_from_slice(&total[1..]);

    let strict = CodecConfig {
        duplicate_policy: DuplicatePolicy::Strict,
        ..CodecConfig::default()
    };
    assert_eq!(
        decode_message(&bytes, base::registry(), &strict).unwrap_err(),
        ProtocolError::DuplicateAvp(264)
    );

    let lenient = decode_message(&bytes, base::registry(), &CodecConfig::default()).unwrap();
    assert_eq!(
        lenient.avps().first(&dict.origin_host).unwrap().as_str(),
        Some("peer.example")
    );
    assert_eq!(lenient.avps().unrecognized().len(), 1);
    assert_eq!(lenient.avps().unrecognized()[0].code, 264);
}
