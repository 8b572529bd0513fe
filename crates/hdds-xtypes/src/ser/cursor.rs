// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Read/write cursors for XCDR2 buffer manipulation.
//!
//! Offsets are absolute within the buffer, so alignment is always relative to
//! the start of the encoded stream.

use super::CdrError;

/// Generate write methods for primitive types
///
/// Each generated method checks bounds, copies the little-endian bytes and
/// advances the offset. Alignment is the caller's job.
macro_rules! impl_write_le {
    ($name:ident, $type:ty, $size:expr) => {
        pub fn $name(&mut self, value: $type) -> Result<(), CdrError> {
            if self.offset + $size > self.buffer.len() {
                return Err(CdrError::BufferTooSmall);
            }
            let bytes = value.to_le_bytes();
            self.buffer[self.offset..self.offset + $size].copy_from_slice(&bytes);
            self.offset += $size;
            Ok(())
        }
    };
}

/// Generate read methods for primitive types
macro_rules! impl_read_le {
    ($name:ident, $type:ty, $size:expr) => {
        pub fn $name(&mut self) -> Result<$type, CdrError> {
            if self.offset + $size > self.buffer.len() {
                return Err(CdrError::UnexpectedEof);
            }
            let mut bytes = [0u8; $size];
            bytes.copy_from_slice(&self.buffer[self.offset..self.offset + $size]);
            self.offset += $size;
            Ok(<$type>::from_le_bytes(bytes))
        }
    };
}

/// Generate common cursor accessors (offset, remaining)
macro_rules! impl_cursor_common {
    () => {
        pub fn offset(&self) -> usize {
            self.offset
        }

        pub fn remaining(&self) -> usize {
            self.buffer.len().saturating_sub(self.offset)
        }
    };
}

/// Mutable cursor for writing (bounds-checked)
pub struct CursorMut<'a> {
    buffer: &'a mut [u8],
    offset: usize,
}

impl<'a> CursorMut<'a> {
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    impl_write_le!(write_u8, u8, 1);
    impl_write_le!(write_u16_le, u16, 2);
    impl_write_le!(write_u32_le, u32, 4);
    impl_write_le!(write_u64_le, u64, 8);

    pub fn write_bytes(&mut self, data: &[u8]) -> Result<(), CdrError> {
        if self.offset + data.len() > self.buffer.len() {
            return Err(CdrError::BufferTooSmall);
        }
        self.buffer[self.offset..self.offset + data.len()].copy_from_slice(data);
        self.offset += data.len();
        Ok(())
    }

    /// Zero-fill up to the next multiple of `alignment`.
    pub fn align(&mut self, alignment: usize) -> Result<(), CdrError> {
        let pad = super::padding(self.offset, alignment);
        if self.offset + pad > self.buffer.len() {
            return Err(CdrError::BufferTooSmall);
        }
        self.buffer[self.offset..self.offset + pad].fill(0);
        self.offset += pad;
        Ok(())
    }

    impl_cursor_common!();
}

/// Immutable cursor for reading (bounds-checked, zero-copy)
pub struct Cursor<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    impl_read_le!(read_u8, u8, 1);
    impl_read_le!(read_u16_le, u16, 2);
    impl_read_le!(read_u32_le, u32, 4);
    impl_read_le!(read_u64_le, u64, 8);

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], CdrError> {
        if self.offset + len > self.buffer.len() {
            return Err(CdrError::UnexpectedEof);
        }
        let slice = &self.buffer[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    /// Skip padding up to the next multiple of `alignment`.
    pub fn align(&mut self, alignment: usize) -> Result<(), CdrError> {
        let pad = super::padding(self.offset, alignment);
        if self.offset + pad > self.buffer.len() {
            return Err(CdrError::UnexpectedEof);
        }
        self.offset += pad;
        Ok(())
    }

    impl_cursor_common!();

    pub fn is_eof(&self) -> bool {
        self.offset >= self.buffer.len()
    }
}
