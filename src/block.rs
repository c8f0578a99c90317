//! Conversion between one raw block of up to 3 bytes and one encoded block of 4 symbols.
//!
//! These are what [crate::encode_slice] and [crate::decode_slice] iterate with. They are
//! exposed for callers that want to manage their own framing.

use byteorder::{BigEndian, ByteOrder};

use crate::alphabet::{DECODE_TABLE, ENCODE_TABLE, INVALID_VALUE};
use crate::{Violation, PAD_BYTE};

/// Number of raw bytes in a complete block.
pub const BLOCK_DECODED_LEN: usize = 3;

/// Number of symbols in an encoded block, including any padding.
pub const BLOCK_ENCODED_LEN: usize = 4;

const LOW_SIX_BITS: u32 = 0x3F;

/// Encode one block of 1 to 3 bytes into exactly 4 symbols at the start of `output`.
///
/// Missing bytes of a partial block are treated as zero, and every symbol that would only
/// carry those zero bits is replaced with `=`: 2 input bytes produce 1 pad byte, 1 input byte
/// produces 2.
///
/// Returns the number of bytes written, which is always [BLOCK_ENCODED_LEN].
///
/// # Errors
///
/// - [Violation::EmptyBlock] if `input` is empty; there is no encoding of an empty block.
/// - [Violation::InvalidLength] if `input` is longer than [BLOCK_DECODED_LEN].
/// - [Violation::InsufficientCapacity] if `output` is shorter than [BLOCK_ENCODED_LEN].
///
/// Nothing is written to `output` on error.
///
/// # Example
///
/// ```
/// let mut encoded = [0_u8; 4];
/// fixed_b64::block::encode_block(b"a", &mut encoded).unwrap();
/// assert_eq!(b"YQ==", &encoded);
/// ```
pub fn encode_block(input: &[u8], output: &mut [u8]) -> Result<usize, Violation> {
    if input.is_empty() {
        return Err(Violation::EmptyBlock);
    }
    if input.len() > BLOCK_DECODED_LEN {
        return Err(Violation::InvalidLength(input.len()));
    }
    if output.len() < BLOCK_ENCODED_LEN {
        return Err(Violation::InsufficientCapacity {
            required: BLOCK_ENCODED_LEN,
            available: output.len(),
        });
    }

    // zero-fill whatever a partial block is missing
    let mut raw = [0_u8; BLOCK_DECODED_LEN];
    raw[..input.len()].copy_from_slice(input);
    let chunk_int = BigEndian::read_u24(&raw);

    // n input bytes carry enough bits for n + 1 symbols
    let symbols = input.len() + 1;
    for (index, out) in output[..BLOCK_ENCODED_LEN].iter_mut().enumerate() {
        *out = if index < symbols {
            let shift = 18 - 6 * index as u32;
            ENCODE_TABLE[((chunk_int >> shift) & LOW_SIX_BITS) as usize]
        } else {
            PAD_BYTE
        };
    }

    Ok(BLOCK_ENCODED_LEN)
}

/// Decode exactly 4 symbols into the start of `output`.
///
/// `=` is accepted only as the last symbol (2 decoded bytes) or as the last two symbols
/// (1 decoded byte). Bits in the last symbol that don't make it into a decoded byte are ignored.
///
/// `output` must be able to hold a complete block even if the input is padded.
///
/// Returns the number of decoded bytes written: 1, 2, or 3.
///
/// # Errors
///
/// - [Violation::InvalidLength] if `input` isn't exactly [BLOCK_ENCODED_LEN] bytes.
/// - [Violation::InsufficientCapacity] if `output` is shorter than [BLOCK_DECODED_LEN].
/// - [Violation::InvalidByte] for a byte outside the alphabet.
/// - [Violation::InvalidPadding] for `=` in any other position.
///
/// Nothing is written to `output` on error.
///
/// # Example
///
/// ```
/// let mut decoded = [0_u8; 3];
/// assert_eq!(Ok(2), fixed_b64::block::decode_block(b"YWI=", &mut decoded));
/// assert_eq!(b"ab", &decoded[..2]);
/// ```
pub fn decode_block(input: &[u8], output: &mut [u8]) -> Result<usize, Violation> {
    if input.len() != BLOCK_ENCODED_LEN {
        return Err(Violation::InvalidLength(input.len()));
    }
    if output.len() < BLOCK_DECODED_LEN {
        return Err(Violation::InsufficientCapacity {
            required: BLOCK_DECODED_LEN,
            available: output.len(),
        });
    }

    let (decoded, decoded_len) = decode_quad(input, 0, true)?;
    output[..decoded_len].copy_from_slice(&decoded[..decoded_len]);

    Ok(decoded_len)
}

/// Returns how many of the final symbols of `quad` are padding: 0, 1, or 2.
///
/// Only the tail is inspected; misplaced padding elsewhere is left for [decode_quad] to report.
#[inline]
pub(crate) fn trailing_padding(quad: &[u8]) -> usize {
    match (quad[2], quad[3]) {
        (PAD_BYTE, PAD_BYTE) => 2,
        (_, PAD_BYTE) => 1,
        _ => 0,
    }
}

/// Decode a 4 symbol `quad` into a stack-resident block.
///
/// `offset` is the position of `quad` in the caller's input, used when reporting bad bytes.
/// `final_block` is false for every block that more input follows, which may not be padded.
///
/// Returns the block along with how many of its bytes are meaningful.
pub(crate) fn decode_quad(
    quad: &[u8],
    offset: usize,
    final_block: bool,
) -> Result<([u8; BLOCK_DECODED_LEN], usize), Violation> {
    debug_assert_eq!(BLOCK_ENCODED_LEN, quad.len());

    let padding = if final_block {
        trailing_padding(quad)
    } else {
        0
    };
    let symbols = BLOCK_ENCODED_LEN - padding;

    let mut decoded_int = 0_u32;
    for (index, &byte) in quad[..symbols].iter().enumerate() {
        // any pad byte that survived the suffix check is in the wrong place
        if byte == PAD_BYTE {
            return Err(Violation::InvalidPadding(offset + index));
        }

        let morsel = DECODE_TABLE[byte as usize];
        if morsel == INVALID_VALUE {
            return Err(Violation::InvalidByte(offset + index, byte));
        }

        decoded_int |= u32::from(morsel) << (18 - 6 * index as u32);
    }

    let mut decoded = [0_u8; BLOCK_DECODED_LEN];
    BigEndian::write_u24(&mut decoded, decoded_int);

    Ok((decoded, BLOCK_DECODED_LEN - padding))
}
