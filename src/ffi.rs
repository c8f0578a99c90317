//! C ABI entry points taking raw pointer + length and pointer + capacity arguments.
//!
//! These wrap the slice functions for callers in C. Any null pointer is reported as
//! [Violation::NullArgument], even when the paired length is zero. Results are reported as
//! status codes: [STATUS_OK] (or a positive count, where documented) on success, and one of the
//! negative codes below on a violation.

use core::ffi::{c_char, c_int};
use core::slice;

use crate::block::{self, BLOCK_ENCODED_LEN};
use crate::{decode_slice, encode_slice, Violation, ViolationKind};

/// The call succeeded.
pub const STATUS_OK: c_int = 0;
/// A required pointer was null.
pub const STATUS_NULL_ARGUMENT: c_int = -1;
/// The output buffer was too small.
pub const STATUS_CAPACITY: c_int = -2;
/// The input was not valid for the operation.
pub const STATUS_MALFORMED_INPUT: c_int = -3;
/// A zero length block was given to the block encoder.
pub const STATUS_DEGENERATE_INPUT: c_int = -4;

/// Returns the status code a C caller sees for `violation`.
pub fn status_code(violation: &Violation) -> c_int {
    match violation.kind() {
        ViolationKind::NullArgument => STATUS_NULL_ARGUMENT,
        ViolationKind::Capacity => STATUS_CAPACITY,
        ViolationKind::MalformedInput => STATUS_MALFORMED_INPUT,
        ViolationKind::DegenerateInput => STATUS_DEGENERATE_INPUT,
    }
}

/// Build a shared slice, treating null as a violation. A zero `len` never dereferences `ptr`.
unsafe fn input_slice<'a>(ptr: *const u8, len: usize) -> Result<&'a [u8], Violation> {
    if ptr.is_null() {
        return Err(Violation::NullArgument);
    }
    if len == 0 {
        return Ok(&[]);
    }

    Ok(slice::from_raw_parts(ptr, len))
}

/// Build a mutable slice, treating null as a violation.
unsafe fn output_slice<'a>(ptr: *mut u8, len: usize) -> Result<&'a mut [u8], Violation> {
    if ptr.is_null() {
        return Err(Violation::NullArgument);
    }
    if len == 0 {
        return Ok(&mut []);
    }

    Ok(slice::from_raw_parts_mut(ptr, len))
}

/// Flatten a result into a status code, storing the length on success.
unsafe fn report(result: Result<usize, Violation>, output_len: *mut usize) -> c_int {
    match result {
        Ok(len) => {
            *output_len = len;
            STATUS_OK
        }
        Err(violation) => status_code(&violation),
    }
}

/// Encode `input_len` bytes (1 to 3) at `input` into exactly 4 characters at `output`.
///
/// # Safety
///
/// `input` must be valid for reads of `input_len` bytes, and `output` for writes of
/// `output_size` bytes.
#[no_mangle]
pub unsafe extern "C" fn fixed_b64_encode_block(
    input: *const u8,
    input_len: usize,
    output: *mut c_char,
    output_size: usize,
) -> c_int {
    let result = input_slice(input, input_len).and_then(|input| {
        let output = output_slice(output.cast(), output_size)?;
        block::encode_block(input, output)
    });

    match result {
        Ok(_) => STATUS_OK,
        Err(violation) => status_code(&violation),
    }
}

/// Decode the 4 characters at `input` into `output`.
///
/// Returns the number of decoded bytes (1, 2, or 3) on success, or a negative status code.
///
/// # Safety
///
/// `input` must be valid for reads of 4 bytes, and `output` for writes of `output_size` bytes.
#[no_mangle]
pub unsafe extern "C" fn fixed_b64_decode_block(
    input: *const c_char,
    output: *mut u8,
    output_size: usize,
) -> c_int {
    let result = input_slice(input.cast(), BLOCK_ENCODED_LEN).and_then(|input| {
        let output = output_slice(output, output_size)?;
        block::decode_block(input, output)
    });

    match result {
        // at most 3
        Ok(decoded) => decoded as c_int,
        Err(violation) => status_code(&violation),
    }
}

/// Encode `input_len` bytes at `input` into NUL-terminated text at `output`, storing the
/// encoded length (without the terminator) in `output_len`.
///
/// # Safety
///
/// `input` must be valid for reads of `input_len` bytes, `output` for writes of `output_size`
/// bytes, and `output_len` for a write of one `usize`.
#[no_mangle]
pub unsafe extern "C" fn fixed_b64_encode(
    input: *const u8,
    input_len: usize,
    output: *mut c_char,
    output_size: usize,
    output_len: *mut usize,
) -> c_int {
    if output_len.is_null() {
        return STATUS_NULL_ARGUMENT;
    }

    let result = input_slice(input, input_len).and_then(|input| {
        let output = output_slice(output.cast(), output_size)?;
        encode_slice(input, output)
    });

    report(result, output_len)
}

/// Decode `input_len` characters at `input` into `output`, storing the decoded length in
/// `output_len`.
///
/// # Safety
///
/// `input` must be valid for reads of `input_len` bytes, `output` for writes of `output_size`
/// bytes, and `output_len` for a write of one `usize`.
#[no_mangle]
pub unsafe extern "C" fn fixed_b64_decode(
    input: *const c_char,
    input_len: usize,
    output: *mut u8,
    output_size: usize,
    output_len: *mut usize,
) -> c_int {
    if output_len.is_null() {
        return STATUS_NULL_ARGUMENT;
    }

    let result = input_slice(input.cast(), input_len).and_then(|input| {
        let output = output_slice(output, output_size)?;
        decode_slice(input, output)
    });

    report(result, output_len)
}
