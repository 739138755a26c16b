use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use diameter_protocol::base::{self, app, vendor};
use diameter_protocol::{decode_message, encode_message, AvpSet, CodecConfig, Message};
use std::net::IpAddr;

#[allow(clippy::unwrap_used)]
fn capabilities_exchange() -> Message {
    let dict = base::dictionary();
    let mut msg = Message::new(&dict.cer);
    msg.header.hop_by_hop_id = 0x2222_2222;
    msg.header.end_to_end_id = 0x5555_5555;

    let avps = msg.avps_mut();
    avps.push(&dict.origin_host, "bench.peer.example").unwrap();
    avps.push(&dict.origin_realm, "peer.example").unwrap();
    avps.push(&dict.host_ip_address, IpAddr::from([10, 0, 0, 1]))
        .unwrap();
    avps.push(&dict.vendor_id, vendor::NONE).unwrap();
    avps.push(&dict.product_name, "bench:dia").unwrap();
    for id in [app::S6A, app::GX, app::GXX] {
        avps.push(&dict.auth_application_id, id).unwrap();
        let mut vsa = AvpSet::grouped(&dict.vendor_specific_application_id).unwrap();
        vsa.push(&dict.vendor_id, vendor::TGPP).unwrap();
        vsa.push(&dict.auth_application_id, id).unwrap();
        avps.push(&dict.vendor_specific_application_id, vsa).unwrap();
    }
    msg
}

#[allow(clippy::unwrap_used)]
fn bench_message_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("message_encode_decode");

    let msg = capabilities_exchange();
    let bytes = encode_message(&msg).unwrap();
    let config = CodecConfig::default();
    group.throughput(Throughput::Bytes(bytes.len() as u64));

    group.bench_function("encode_cer", |b| {
        b.iter_batched(
            capabilities_exchange,
            |msg| encode_message(&msg).unwrap(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("decode_cer", |b| {
        b.iter(|| {
            let decoded = decode_message(&bytes, base::registry(), &config);
            assert!(decoded.is_ok());
        })
    });

    group.finish();
}

criterion_group!(benches, bench_message_encode_decode);
criterion_main!(benches);
