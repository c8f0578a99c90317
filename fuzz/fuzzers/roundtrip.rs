#![no_main]
#[macro_use] extern crate libfuzzer_sys;

use fixed_b64::{decode_slice, encode_slice, encoded_len};

fuzz_target!(|data: &[u8]| {
    let mut encoded = vec![0; encoded_len(data.len()).unwrap() + 1];
    let encoded_len = encode_slice(data, &mut encoded).unwrap();
    assert_eq!(0, encoded[encoded_len]);

    let mut decoded = vec![0; data.len()];
    let decoded_len = decode_slice(&encoded[..encoded_len], &mut decoded).unwrap();
    assert_eq!(data, &decoded[..decoded_len]);
});
