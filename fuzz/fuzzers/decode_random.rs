#![no_main]
#[macro_use] extern crate libfuzzer_sys;

use fixed_b64::{decode, decode_slice, encode};

fuzz_target!(|data: &[u8]| {
    // The data probably isn't valid base64 input, but as long as it returns an error instead
    // of crashing, that's correct behavior.
    let mut buf = [0_u8; 256];
    let sliced = decode_slice(data, &mut buf);

    if let Ok(decoded) = decode(data) {
        // anything accepted must re-encode to the same text, modulo ignored trailing bits
        assert_eq!(data.len(), encode(&decoded).len());
        if let Ok(len) = sliced {
            assert_eq!(&decoded[..], &buf[..len]);
        }
    }
});
