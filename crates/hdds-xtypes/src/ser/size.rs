// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Size pass of the XCDR2 codec.
//!
//! [`SizeCalculator`] mirrors the field sequence of an `encode_cdr2` body
//! without touching a buffer:
//!
//! ```ignore
//! fn cdr2_size(&self, current_alignment: usize) -> usize {
//!     SizeCalculator::new(current_alignment)
//!         .add(&self.member_id)
//!         .add(&self.member_flags)
//!         .add(&self.member_type_id)
//!         .size()
//! }
//! ```

use super::Cdr2Encode;

/// Padding bytes needed to bring `offset` to a multiple of `alignment`.
#[inline]
pub const fn padding(offset: usize, alignment: usize) -> usize {
    if alignment <= 1 {
        return 0;
    }
    (alignment - (offset % alignment)) % alignment
}

/// Running position tracker for the size pass.
#[derive(Debug, Clone, Copy)]
pub struct SizeCalculator {
    start: usize,
    pos: usize,
}

impl SizeCalculator {
    /// Start measuring at `current_alignment` bytes into the stream.
    pub const fn new(current_alignment: usize) -> Self {
        Self {
            start: current_alignment,
            pos: current_alignment,
        }
    }

    /// Account for a nested record written at the current position.
    #[inline]
    pub fn add<T: Cdr2Encode + ?Sized>(&mut self, value: &T) -> &mut Self {
        self.pos += value.cdr2_size(self.pos);
        self
    }

    /// Account for a scalar of `width` bytes aligned to `alignment`.
    #[inline]
    pub fn add_scalar(&mut self, width: usize, alignment: usize) -> &mut Self {
        self.pos += padding(self.pos, alignment) + width;
        self
    }

    /// Account for unaligned raw bytes (hashes, fixed octet arrays).
    #[inline]
    pub fn add_bytes(&mut self, len: usize) -> &mut Self {
        self.pos += len;
        self
    }

    /// Bytes accumulated since [`SizeCalculator::new`], padding included.
    #[inline]
    pub const fn size(&self) -> usize {
        self.pos - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding() {
        assert_eq!(padding(0, 4), 0);
        assert_eq!(padding(1, 4), 3);
        assert_eq!(padding(5, 2), 1);
        assert_eq!(padding(7, 1), 0);
        assert_eq!(padding(8, 4), 0);
    }

    #[test]
    fn test_size_depends_on_start_alignment() {
        // u8 then u32
        let aligned = SizeCalculator::new(0).add_scalar(1, 1).add_scalar(4, 4).size();
        assert_eq!(aligned, 8);
        let shifted = SizeCalculator::new(3).add_scalar(1, 1).add_scalar(4, 4).size();
        assert_eq!(shifted, 5);
    }

    #[test]
    fn test_nested_records_accumulate() {
        let size = SizeCalculator::new(1)
            .add(&7u16)
            .add(&String::from("ab"))
            .size();
        // pad 1 + u16 at 2, pad 0 at 4, len 4 + "ab\0" 3
        assert_eq!(size, 1 + 2 + 4 + 3);
    }
}
