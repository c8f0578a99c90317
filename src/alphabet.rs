//! Provides the standard [Alphabet] and the lookup tables derived from it.

/// Value in [DECODE_TABLE] for bytes that are not symbols of the alphabet.
pub const INVALID_VALUE: u8 = 255;

/// An alphabet defines the 64 ASCII characters (symbols) used for base64.
///
/// Only the standard alphabet is provided; the tables below are computed from it at compile
/// time so that no lookup ever needs runtime setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alphabet {
    pub(crate) symbols: [u8; 64],
}

impl Alphabet {
    /// Performs no checks so that it can be const.
    /// Used only for known-valid strings.
    const fn from_unchecked(alphabet: &str) -> Alphabet {
        let mut symbols = [0_u8; 64];
        let source_bytes = alphabet.as_bytes();

        // a way to copy that's allowed in const fn
        let mut index = 0;
        while index < 64 {
            symbols[index] = source_bytes[index];
            index += 1;
        }

        Alphabet { symbols }
    }

    /// The symbols in sextet order, as a `str`.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.symbols).expect("symbols are always ASCII")
    }
}

/// The standard alphabet (uses `+` and `/`).
///
/// See [RFC 4648](https://tools.ietf.org/html/rfc4648#section-4).
pub const STANDARD: Alphabet =
    Alphabet::from_unchecked("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/");

/// Maps a sextet (0-63) to its symbol in [STANDARD].
pub const ENCODE_TABLE: [u8; 64] = encode_table(&STANDARD);

/// Maps any byte to its sextet in [STANDARD], or to [INVALID_VALUE].
///
/// The pad byte `=` is not a symbol and maps to [INVALID_VALUE]; padding is recognized by
/// position, not through this table.
pub const DECODE_TABLE: [u8; 256] = decode_table(&STANDARD);

/// Returns a table mapping a 6-bit index to the ASCII byte encoding of the index
const fn encode_table(alphabet: &Alphabet) -> [u8; 64] {
    // the encode table is just the alphabet:
    // 6-bit index lookup -> printable byte
    let mut encode_table = [0_u8; 64];
    let mut index = 0;
    while index < 64 {
        encode_table[index] = alphabet.symbols[index];
        index += 1;
    }

    encode_table
}

/// Returns a table mapping base64 bytes as the lookup index to either:
/// - [INVALID_VALUE] for bytes that aren't members of the alphabet
/// - a byte whose lower 6 bits are the value that was encoded into the index byte
const fn decode_table(alphabet: &Alphabet) -> [u8; 256] {
    let mut decode_table = [INVALID_VALUE; 256];

    // Since the table is full of `INVALID_VALUE` already, we only need to overwrite
    // the parts that are valid.
    let mut index = 0;
    while index < 64 {
        // The index in the alphabet is the 6-bit value we care about.
        // Since the index is in 0-63, it is safe to cast to u8.
        decode_table[alphabet.symbols[index] as usize] = index as u8;
        index += 1;
    }

    decode_table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PAD_BYTE;

    #[test]
    fn standard_symbols_in_order() {
        assert_eq!(
            "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
            STANDARD.as_str()
        );
    }

    #[test]
    fn decode_table_inverts_encode_table() {
        for (sextet, &symbol) in ENCODE_TABLE.iter().enumerate() {
            assert_eq!(sextet as u8, DECODE_TABLE[symbol as usize]);
        }
    }

    #[test]
    fn decode_table_rejects_everything_else() {
        let valid = (0..=255_u8)
            .filter(|&b| DECODE_TABLE[b as usize] != INVALID_VALUE)
            .count();
        assert_eq!(64, valid);

        assert_eq!(INVALID_VALUE, DECODE_TABLE[PAD_BYTE as usize]);
        assert_eq!(INVALID_VALUE, DECODE_TABLE[0]);
        assert_eq!(INVALID_VALUE, DECODE_TABLE[b'-' as usize]);
        assert_eq!(INVALID_VALUE, DECODE_TABLE[b'_' as usize]);
        assert_eq!(INVALID_VALUE, DECODE_TABLE[b' ' as usize]);
        assert_eq!(INVALID_VALUE, DECODE_TABLE[0x80]);
    }
}
