#![no_main]

use diameter_protocol::{decode_message, CodecConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz message decoding - test for panics, crashes, infinite loops
    let _ = decode_message(data, diameter_protocol::base::registry(), &CodecConfig::default());
});
