//! Allocation-free base64 for fixed, caller-owned buffers.
//!
//! Everything here converts between raw bytes and padded base64 text using the standard alphabet
//! ([RFC 4648](https://tools.ietf.org/html/rfc4648#section-4)), writing into slices the caller
//! provides. Nothing allocates unless you ask for a `String` or `Vec` via the `alloc` feature.
//!
//! # Contract violations
//!
//! Every function checks all of its preconditions and returns a [Violation] rather than
//! truncating, substituting, or partially succeeding. A violation is a defect at the call site,
//! so if you want to stop dead when one happens, `unwrap()` the result; if you want to observe
//! it (in tests, say), match on it or on [Violation::kind].
//!
//! # Block API
//!
//! [block::encode_block] and [block::decode_block] convert a single block of up to 3 bytes to
//! and from its 4 symbols.
//!
//! # Slice API
//!
//! | Encode            | Decode            |
//! |-------------------|-------------------|
//! | [encode_slice]    | [decode_slice]    |
//! | [encoded_len]     | [decoded_len]     |
//! | [encode] (`alloc`)| [decode] (`alloc`)|
//!
//! [encode_slice] writes a NUL terminator after the text, so the output needs one byte more
//! than [encoded_len]. [decode_slice] requires input whose length is a multiple of 4 and checks
//! the output capacity before writing anything.
//!
//! ```
//! let mut encoded = [0_u8; 9];
//! let len = fixed_b64::encode_slice(b"abcde", &mut encoded).unwrap();
//! assert_eq!(b"YWJjZGU=", &encoded[..len]);
//!
//! let mut decoded = [0_u8; 5];
//! let len = fixed_b64::decode_slice(&encoded[..len], &mut decoded).unwrap();
//! assert_eq!(b"abcde", &decoded[..len]);
//! ```
//!
//! # Display
//!
//! See [display] for how to transparently base64 data via a `Display` implementation.
//!
//! # C
//!
//! See [ffi] for `extern "C"` versions of the block and slice functions.
//!
//! # Panics
//!
//! Only [encode] can panic, and only if the encoded length of its input overflows `usize`.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs, unused_extern_crates)]

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

pub mod alphabet;
pub mod block;
mod decode;
pub mod display;
mod encode;
pub mod ffi;
mod violation;


#[cfg(test)]
use rstest_reuse;

#[cfg(any(feature = "alloc", test))]
pub use crate::decode::decode;
pub use crate::decode::{decode_slice, decoded_len};
#[cfg(any(feature = "alloc", test))]
pub use crate::encode::encode;
pub use crate::encode::{encode_slice, encoded_len};
pub use crate::violation::{Violation, ViolationKind};

/// The byte used to pad the final block of encoded output.
pub const PAD_BYTE: u8 = b'=';
