//! Enables base64'd output anywhere you might use a `Display` implementation, like a format string.
//!
//! ```
//! use fixed_b64::display::Base64Display;
//!
//! let data = vec![0x0, 0x1, 0x2, 0x3];
//! let wrapper = Base64Display::new(&data);
//!
//! assert_eq!("base64: AAECAw==", format!("base64: {}", wrapper));
//! ```

use core::fmt::{self, Display, Formatter};
use core::str;

use crate::block::{encode_block, BLOCK_DECODED_LEN, BLOCK_ENCODED_LEN};

/// Blocks encoded per write to the formatter.
const BLOCKS_PER_WRITE: usize = 64;
const BUF_SIZE: usize = BLOCKS_PER_WRITE * BLOCK_ENCODED_LEN;

/// A convenience wrapper for base64'ing bytes into a format string without heap allocation.
pub struct Base64Display<'a> {
    bytes: &'a [u8],
}

impl<'a> Base64Display<'a> {
    /// Create a `Base64Display` for `bytes`, padded with the standard alphabet.
    pub fn new(bytes: &'a [u8]) -> Base64Display<'a> {
        Base64Display { bytes }
    }
}

impl<'a> Display for Base64Display<'a> {
    fn fmt(&self, formatter: &mut Formatter) -> Result<(), fmt::Error> {
        let mut encode_buf = [0_u8; BUF_SIZE];

        for input_chunk in self.bytes.chunks(BLOCKS_PER_WRITE * BLOCK_DECODED_LEN) {
            let mut output_index = 0;
            for block in input_chunk.chunks(BLOCK_DECODED_LEN) {
                // chunks are never empty, and the buffer holds a full chunk
                output_index += encode_block(block, &mut encode_buf[output_index..])
                    .map_err(|_| fmt::Error)?;
            }

            // Avoid unsafe. If max performance is needed, write your own display wrapper that uses
            // unsafe here to gain about 10-15%.
            formatter.write_str(
                str::from_utf8(&encode_buf[..output_index]).map_err(|_| fmt::Error)?,
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{distributions::Uniform, SeedableRng};

    use super::*;
    use crate::encode::encode;
    use crate::tests::fill_random;

    #[test]
    fn basic_display() {
        assert_eq!(
            "~$Zm9vYmFy#*",
            format!("~${}#*", Base64Display::new(b"foobar"))
        );
        assert_eq!(
            "~$Zm9vYmFyZg==#*",
            format!("~${}#*", Base64Display::new(b"foobarf"))
        );
    }

    #[test]
    fn empty_display_writes_nothing() {
        assert_eq!("[]", format!("[{}]", Base64Display::new(b"")));
    }

    #[test]
    fn display_spanning_several_writes() {
        // more than one buffer's worth, ending in a partial block
        let data: Vec<u8> = (0..=255_u8).cycle().take(BLOCKS_PER_WRITE * 3 * 2 + 1).collect();
        assert_eq!(encode(&data), format!("{}", Base64Display::new(&data)));
    }

    #[test]
    fn display_encode_matches_normal_encode() {
        let mut rng = rand::rngs::SmallRng::from_entropy();
        let len_range = Uniform::new(0, 1_000);
        let mut input = Vec::new();

        for _ in 0..1_000 {
            fill_random(&mut input, &len_range, &mut rng);
            assert_eq!(encode(&input), Base64Display::new(&input).to_string());
        }
    }
}
