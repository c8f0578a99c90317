use fixed_b64::*;

mod helpers;
use helpers::*;

#[test]
fn decode_rfc4648_0() {
    compare_decode("", "");
}

#[test]
fn decode_rfc4648_1() {
    compare_decode("f", "Zg==");
}

#[test]
fn decode_rfc4648_1_just_a_bit_of_padding() {
    assert_eq!(Err(Violation::InvalidLength(3)), decode("Zg="));
}

#[test]
fn decode_rfc4648_1_no_padding() {
    assert_eq!(Err(Violation::InvalidLength(2)), decode("Zg"));
}

#[test]
fn decode_rfc4648_2() {
    compare_decode("fo", "Zm8=");
}

#[test]
fn decode_rfc4648_2_no_padding() {
    assert_eq!(Err(Violation::InvalidLength(3)), decode("Zm8"));
}

#[test]
fn decode_rfc4648_3() {
    compare_decode("foo", "Zm9v");
}

#[test]
fn decode_rfc4648_4() {
    compare_decode("foob", "Zm9vYg==");
}

#[test]
fn decode_rfc4648_5() {
    compare_decode("fooba", "Zm9vYmE=");
}

#[test]
fn decode_rfc4648_6() {
    compare_decode("foobar", "Zm9vYmFy");
}

#[test]
fn decode_all_ones() {
    let mut buf = [0_u8; 3];
    assert_eq!(Ok(3), decode_slice("////", &mut buf));
    assert_eq!([0xFF, 0xFF, 0xFF], buf);
}

#[test]
fn decode_one_pad() {
    assert_eq!(vec![0x61, 0x62], decode("YWI=").unwrap());
}

#[test]
fn decode_whitespace_is_rejected() {
    assert_eq!(Err(Violation::InvalidByte(3, b' ')), decode("YWJ jZA="));
    assert_eq!(
        ViolationKind::MalformedInput,
        decode("YWJjZA==\r\n").unwrap_err().kind()
    );
}

#[test]
fn decode_url_safe_alphabet_is_rejected() {
    assert_eq!(Err(Violation::InvalidByte(0, b'-')), decode("-_8="));
}

#[test]
fn decode_into_too_small_slice() {
    let mut buf = [0_u8; 5];
    assert_eq!(
        Err(Violation::InsufficientCapacity {
            required: 6,
            available: 5
        }),
        decode_slice("Zm9vYmFy", &mut buf)
    );
    assert_eq!(
        ViolationKind::Capacity,
        decode_slice("Zm9vYmFy", &mut buf).unwrap_err().kind()
    );
}
