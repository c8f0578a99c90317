#[cfg(any(feature = "alloc", test))]
use alloc::string::String;
#[cfg(any(feature = "alloc", test))]
use alloc::vec;

use crate::block::{encode_block, BLOCK_DECODED_LEN, BLOCK_ENCODED_LEN};
use crate::Violation;

/// Calculate the base64 encoded length for a given input length, including padding but not
/// a terminator.
///
/// Returns `None` if the encoded length can't be represented in `usize`.
pub const fn encoded_len(bytes_len: usize) -> Option<usize> {
    let rem = bytes_len % BLOCK_DECODED_LEN;

    let complete_input_chunks = bytes_len / BLOCK_DECODED_LEN;
    let complete_chunk_output = match complete_input_chunks.checked_mul(BLOCK_ENCODED_LEN) {
        Some(n) => n,
        None => return None,
    };

    if rem > 0 {
        complete_chunk_output.checked_add(BLOCK_ENCODED_LEN)
    } else {
        Some(complete_chunk_output)
    }
}

/// Encode arbitrary octets as base64 into the supplied output buffer, followed by a NUL
/// terminator.
///
/// This is useful if you wish to avoid allocation entirely (e.g. encoding into a stack-resident
/// or statically-allocated buffer).
///
/// `output` must hold [encoded_len] of `input` plus one byte for the terminator. Empty input
/// is valid and produces an empty, terminated string.
///
/// Returns the number of encoded bytes written, not counting the terminator.
///
/// # Errors
///
/// [Violation::InsufficientCapacity] if `output` is too small, in which case nothing is
/// written.
///
/// # Example
///
/// ```
/// let mut buf = [0_u8; 9];
/// let len = fixed_b64::encode_slice(b"abcd", &mut buf).unwrap();
/// assert_eq!(b"YWJjZA==\0", &buf[..=len]);
/// ```
pub fn encode_slice<T: ?Sized + AsRef<[u8]>>(
    input: &T,
    output: &mut [u8],
) -> Result<usize, Violation> {
    let input_bytes = input.as_ref();
    let required = required_capacity(input_bytes.len(), output.len())?;

    let encoded = encode_blocks(input_bytes, &mut output[..required - 1])?;
    output[encoded] = 0;

    Ok(encoded)
}

/// Output bytes needed to encode `input_len` bytes plus the terminator. A length that overflows
/// `usize` can never fit, so it is reported as a capacity shortfall.
fn required_capacity(input_len: usize, available: usize) -> Result<usize, Violation> {
    let required = encoded_len(input_len).and_then(|len| len.checked_add(1));
    match required {
        Some(required) if required <= available => Ok(required),
        required => Err(Violation::InsufficientCapacity {
            required: required.unwrap_or(usize::MAX),
            available,
        }),
    }
}

/// Encode `input` one block at a time. `output` must be exactly [encoded_len] of `input`.
///
/// Returns the number of bytes written.
pub(crate) fn encode_blocks(input: &[u8], output: &mut [u8]) -> Result<usize, Violation> {
    debug_assert_eq!(encoded_len(input.len()), Some(output.len()));

    let mut output_index = 0;
    for chunk in input.chunks(BLOCK_DECODED_LEN) {
        output_index += encode_block(
            chunk,
            &mut output[output_index..output_index + BLOCK_ENCODED_LEN],
        )?;
    }

    Ok(output_index)
}

/// Encode arbitrary octets as base64, returning a `String` without a terminator.
///
/// # Panics
///
/// If the encoded length overflows `usize`.
///
/// # Example
///
/// ```
/// assert_eq!("aGVsbG8gd29ybGQ=", fixed_b64::encode(b"hello world"));
/// ```
#[cfg(any(feature = "alloc", test))]
pub fn encode<T: ?Sized + AsRef<[u8]>>(input: &T) -> String {
    let input_bytes = input.as_ref();

    let mut buf = match encoded_len(input_bytes.len()) {
        Some(n) => vec![0; n],
        None => panic!("integer overflow when calculating buffer size"),
    };

    let encoded = encode_blocks(input_bytes, &mut buf[..])
        .expect("buffer is sized for the input, and chunks are never empty");
    debug_assert_eq!(encoded, buf.len());

    String::from_utf8(buf).expect("base64 is always valid utf8")
}
