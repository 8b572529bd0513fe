// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! XCDR2 serialization mechanics.
//!
//! Every record in this crate follows the same two-pass discipline:
//!
//! 1. [`Cdr2Encode::cdr2_size`] computes the exact number of bytes the record
//!    will occupy when written at a given stream position.
//! 2. [`Cdr2Encode::encode_cdr2`] writes those bytes through a [`CursorMut`].
//!
//! [`encode_to_vec`] allocates the buffer from the first pass and fails if the
//! second pass writes a different amount.
//!
//! # Layout rules
//!
//! - Little-endian scalars, padded to their natural alignment (1, 2 or 4 bytes;
//!   8-byte scalars are 4-byte aligned in XCDR2) relative to the stream start.
//! - Sequences carry a 4-byte element count.
//! - Strings carry a 4-byte length (characters + 1) and a NUL terminator.
//! - Optional values carry a 1-byte presence flag.

pub mod cursor;
pub mod size;
pub mod traits;

pub use cursor::{Cursor, CursorMut};
pub use size::{padding, SizeCalculator};
pub use traits::{checked_usize, Cdr2Decode, Cdr2Encode, CdrError, MAX_SEQUENCE_LENGTH};

/// Encode a value into a freshly allocated buffer of exactly `cdr2_size(0)` bytes.
pub fn encode_to_vec<T: Cdr2Encode + ?Sized>(value: &T) -> Result<Vec<u8>, CdrError> {
    let size = value.cdr2_size(0);
    let mut buffer = vec![0u8; size];
    let written = encode_into(value, &mut buffer)?;
    if written != size {
        log::warn!(
            "[XCDR2] size pass reported {} bytes but encoder wrote {}",
            size,
            written
        );
        return Err(CdrError::Other(format!(
            "size mismatch: computed {} bytes, wrote {}",
            size, written
        )));
    }
    Ok(buffer)
}

/// Encode a value at the start of `dst`, returning bytes written.
pub fn encode_into<T: Cdr2Encode + ?Sized>(value: &T, dst: &mut [u8]) -> Result<usize, CdrError> {
    let mut cursor = CursorMut::new(dst);
    value.encode_cdr2(&mut cursor)?;
    Ok(cursor.offset())
}

/// Decode a value from the start of `src`.
///
/// Trailing bytes after the value are ignored.
pub fn decode_from_slice<T: Cdr2Decode>(src: &[u8]) -> Result<T, CdrError> {
    let mut cursor = Cursor::new(src);
    T::decode_cdr2(&mut cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_to_vec_allocates_exact_size() {
        let value = String::from("abc");
        let bytes = encode_to_vec(&value).expect("encode should succeed");
        assert_eq!(bytes, vec![4, 0, 0, 0, b'a', b'b', b'c', 0]);
        assert_eq!(value.cdr2_size(0), bytes.len());

        // presence flag, 3 bytes pad, u32
        let value = Some(5u32);
        let bytes = encode_to_vec(&value).expect("encode should succeed");
        assert_eq!(bytes, vec![1, 0, 0, 0, 5, 0, 0, 0]);
    }

    #[test]
    fn test_encode_into_short_buffer_fails() {
        let mut dst = [0u8; 3];
        assert_eq!(encode_into(&0x1234_5678u32, &mut dst), Err(CdrError::BufferTooSmall));
    }

    #[test]
    fn test_decode_from_slice_truncated() {
        let result: Result<u32, _> = decode_from_slice(&[1, 2]);
        assert_eq!(result, Err(CdrError::UnexpectedEof));
    }
}
