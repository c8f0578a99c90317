#![allow(dead_code)]

use fixed_b64::*;

pub fn compare_decode(expected: &str, target: &str) {
    assert_eq!(
        expected,
        String::from_utf8(decode(target).unwrap()).unwrap()
    );
    assert_eq!(
        expected,
        String::from_utf8(decode(target.as_bytes()).unwrap()).unwrap()
    );

    // and without allocating
    let mut buf = vec![0_u8; decoded_len(target.as_bytes()).unwrap()];
    let len = decode_slice(target, &mut buf).unwrap();
    assert_eq!(expected.as_bytes(), &buf[..len]);
}

pub fn compare_encode(expected: &str, target: &[u8]) {
    assert_eq!(expected, encode(target));

    let mut buf = vec![0xFF_u8; encoded_len(target.len()).unwrap() + 1];
    let len = encode_slice(target, &mut buf).unwrap();
    assert_eq!(expected.as_bytes(), &buf[..len]);
    assert_eq!(0, buf[len]);
}
