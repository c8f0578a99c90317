#![no_main]
#[macro_use] extern crate libfuzzer_sys;

use fixed_b64::block::{decode_block, encode_block};

fuzz_target!(|data: &[u8]| {
    for chunk in data.chunks(3) {
        let mut encoded = [0_u8; 4];
        encode_block(chunk, &mut encoded).unwrap();

        let mut decoded = [0_u8; 3];
        let len = decode_block(&encoded, &mut decoded).unwrap();
        assert_eq!(chunk, &decoded[..len]);
    }
});
