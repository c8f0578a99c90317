#[cfg(any(feature = "alloc", test))]
use alloc::vec;
#[cfg(any(feature = "alloc", test))]
use alloc::vec::Vec;

use crate::block::{decode_quad, trailing_padding, BLOCK_DECODED_LEN, BLOCK_ENCODED_LEN};
use crate::Violation;

/// Calculate the exact decoded length of `input`.
///
/// Only the length of `input` and its final block are inspected, so a `Ok` here doesn't mean
/// the rest of `input` is valid base64.
///
/// # Errors
///
/// [Violation::InvalidLength] if the length of `input` isn't a multiple of 4.
///
/// # Example
///
/// ```
/// assert_eq!(Ok(5), fixed_b64::decoded_len("YWJjZGU="));
/// ```
pub fn decoded_len<T: ?Sized + AsRef<[u8]>>(input: &T) -> Result<usize, Violation> {
    let input_bytes = input.as_ref();

    if input_bytes.len() % BLOCK_ENCODED_LEN != 0 {
        return Err(Violation::InvalidLength(input_bytes.len()));
    }
    if input_bytes.is_empty() {
        return Ok(0);
    }

    let final_block = &input_bytes[input_bytes.len() - BLOCK_ENCODED_LEN..];
    // never overflows: 3/4 of a length that already fits
    Ok(input_bytes.len() / BLOCK_ENCODED_LEN * BLOCK_DECODED_LEN - trailing_padding(final_block))
}

/// Decode base64 into the supplied output buffer.
///
/// `input` must be padded base64 text, so its length is 0 or a multiple of 4, and only the
/// final block may contain padding. `output` must be at least [decoded_len] of `input`; this
/// is checked before anything is written.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// - [Violation::InvalidLength] if the length of `input` isn't a multiple of 4.
/// - [Violation::InsufficientCapacity] if `output` is too small. Nothing is written.
/// - [Violation::InvalidByte] or [Violation::InvalidPadding] for malformed blocks. Every
///   block before the malformed one has been written to `output` in full, and nothing of the
///   malformed block has.
///
/// # Example
///
/// ```
/// let mut buf = [0_u8; 3];
/// let len = fixed_b64::decode_slice("////", &mut buf).unwrap();
/// assert_eq!(&[0xFF_u8, 0xFF, 0xFF], &buf[..len]);
/// ```
pub fn decode_slice<T: ?Sized + AsRef<[u8]>>(
    input: &T,
    output: &mut [u8],
) -> Result<usize, Violation> {
    let input_bytes = input.as_ref();

    let required = decoded_len(input_bytes)?;
    if output.len() < required {
        return Err(Violation::InsufficientCapacity {
            required,
            available: output.len(),
        });
    }

    decode_blocks(input_bytes, &mut output[..required])
}

/// Decode `input` one block at a time. `input` must be a multiple of 4 long, and `output` must
/// be exactly [decoded_len] of `input`.
///
/// Returns the number of bytes written.
fn decode_blocks(input: &[u8], output: &mut [u8]) -> Result<usize, Violation> {
    debug_assert_eq!(0, input.len() % BLOCK_ENCODED_LEN);

    let block_count = input.len() / BLOCK_ENCODED_LEN;
    let mut output_index = 0;

    for (block_index, quad) in input.chunks_exact(BLOCK_ENCODED_LEN).enumerate() {
        let (decoded, decoded_len) = decode_quad(
            quad,
            block_index * BLOCK_ENCODED_LEN,
            block_index + 1 == block_count,
        )?;

        output[output_index..output_index + decoded_len].copy_from_slice(&decoded[..decoded_len]);
        output_index += decoded_len;
    }

    Ok(output_index)
}

/// Decode base64 into a newly allocated `Vec`.
///
/// # Errors
///
/// See [decode_slice]; capacity can't be a problem here.
///
/// # Example
///
/// ```
/// assert_eq!(b"hello world".to_vec(), fixed_b64::decode("aGVsbG8gd29ybGQ=").unwrap());
/// ```
#[cfg(any(feature = "alloc", test))]
pub fn decode<T: ?Sized + AsRef<[u8]>>(input: &T) -> Result<Vec<u8>, Violation> {
    let input_bytes = input.as_ref();

    let mut buffer = vec![0; decoded_len(input_bytes)?];
    let written = decode_blocks(input_bytes, &mut buffer[..])?;
    debug_assert_eq!(written, buffer.len());

    Ok(buffer)
}
