// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! XCDR2 encode/decode traits and their impls for primitive building blocks.

use super::{Cursor, CursorMut, SizeCalculator};
use std::fmt;

/// Upper bound accepted for any decoded sequence or string length.
pub const MAX_SEQUENCE_LENGTH: usize = 1_000_000;

/// Codec-level failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CdrError {
    /// Destination buffer cannot hold the encoded value.
    BufferTooSmall,
    /// Source buffer ended before the value was complete.
    UnexpectedEof,
    /// A discriminator or flag byte has no defined meaning.
    InvalidEncoding,
    /// Bytes are well-formed XCDR2 but violate a value constraint.
    InvalidData(String),
    /// Anything else (size-pass mismatch, internal limits).
    Other(String),
}

impl fmt::Display for CdrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CdrError::BufferTooSmall => write!(f, "buffer too small"),
            CdrError::UnexpectedEof => write!(f, "unexpected end of buffer"),
            CdrError::InvalidEncoding => write!(f, "invalid encoding"),
            CdrError::InvalidData(reason) => write!(f, "invalid data: {}", reason),
            CdrError::Other(reason) => write!(f, "{}", reason),
        }
    }
}

impl std::error::Error for CdrError {}

/// Size-then-write XCDR2 encoding.
///
/// `cdr2_size(pos)` must equal the number of bytes `encode_cdr2` writes when
/// the cursor sits at offset `pos`, padding included.
pub trait Cdr2Encode {
    fn cdr2_size(&self, current_alignment: usize) -> usize;
    fn encode_cdr2(&self, w: &mut CursorMut<'_>) -> Result<(), CdrError>;
}

/// XCDR2 decoding.
pub trait Cdr2Decode: Sized {
    fn decode_cdr2(r: &mut Cursor<'_>) -> Result<Self, CdrError>;
}

/// Validate a decoded length prefix before allocating.
///
/// Each element occupies at least one byte, so a count larger than what is
/// left in the buffer is necessarily truncated input.
pub fn checked_usize(value: u32, r: &Cursor<'_>, what: &str) -> Result<usize, CdrError> {
    let len = usize::try_from(value)
        .map_err(|_| CdrError::InvalidData(format!("{} does not fit in usize", what)))?;
    if len > MAX_SEQUENCE_LENGTH {
        return Err(CdrError::InvalidData(format!(
            "{} {} exceeds limit {}",
            what, len, MAX_SEQUENCE_LENGTH
        )));
    }
    if len > r.remaining() {
        return Err(CdrError::UnexpectedEof);
    }
    Ok(len)
}

macro_rules! impl_cdr2_scalar {
    ($type:ty, $width:expr, $align:expr, $write:ident, $read:ident, $wire:ty) => {
        impl Cdr2Encode for $type {
            #[inline]
            fn cdr2_size(&self, current_alignment: usize) -> usize {
                SizeCalculator::new(current_alignment)
                    .add_scalar($width, $align)
                    .size()
            }

            #[inline]
            fn encode_cdr2(&self, w: &mut CursorMut<'_>) -> Result<(), CdrError> {
                w.align($align)?;
                w.$write(*self as $wire)
            }
        }

        impl Cdr2Decode for $type {
            #[inline]
            fn decode_cdr2(r: &mut Cursor<'_>) -> Result<Self, CdrError> {
                r.align($align)?;
                Ok(r.$read()? as $type)
            }
        }
    };
}

impl_cdr2_scalar!(u8, 1, 1, write_u8, read_u8, u8);
impl_cdr2_scalar!(i8, 1, 1, write_u8, read_u8, u8);
impl_cdr2_scalar!(u16, 2, 2, write_u16_le, read_u16_le, u16);
impl_cdr2_scalar!(i16, 2, 2, write_u16_le, read_u16_le, u16);
impl_cdr2_scalar!(u32, 4, 4, write_u32_le, read_u32_le, u32);
impl_cdr2_scalar!(i32, 4, 4, write_u32_le, read_u32_le, u32);
// XCDR2 caps alignment at 4 bytes
impl_cdr2_scalar!(u64, 8, 4, write_u64_le, read_u64_le, u64);
impl_cdr2_scalar!(i64, 8, 4, write_u64_le, read_u64_le, u64);

impl Cdr2Encode for bool {
    fn cdr2_size(&self, current_alignment: usize) -> usize {
        SizeCalculator::new(current_alignment).add_scalar(1, 1).size()
    }

    fn encode_cdr2(&self, w: &mut CursorMut<'_>) -> Result<(), CdrError> {
        w.write_u8(u8::from(*self))
    }
}

impl Cdr2Decode for bool {
    fn decode_cdr2(r: &mut Cursor<'_>) -> Result<Self, CdrError> {
        match r.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(CdrError::InvalidEncoding),
        }
    }
}

impl Cdr2Encode for f32 {
    fn cdr2_size(&self, current_alignment: usize) -> usize {
        SizeCalculator::new(current_alignment).add_scalar(4, 4).size()
    }

    fn encode_cdr2(&self, w: &mut CursorMut<'_>) -> Result<(), CdrError> {
        w.align(4)?;
        w.write_u32_le(self.to_bits())
    }
}

impl Cdr2Decode for f32 {
    fn decode_cdr2(r: &mut Cursor<'_>) -> Result<Self, CdrError> {
        r.align(4)?;
        Ok(f32::from_bits(r.read_u32_le()?))
    }
}

impl Cdr2Encode for f64 {
    fn cdr2_size(&self, current_alignment: usize) -> usize {
        SizeCalculator::new(current_alignment).add_scalar(8, 4).size()
    }

    fn encode_cdr2(&self, w: &mut CursorMut<'_>) -> Result<(), CdrError> {
        w.align(4)?;
        w.write_u64_le(self.to_bits())
    }
}

impl Cdr2Decode for f64 {
    fn decode_cdr2(r: &mut Cursor<'_>) -> Result<Self, CdrError> {
        r.align(4)?;
        Ok(f64::from_bits(r.read_u64_le()?))
    }
}

impl Cdr2Encode for str {
    fn cdr2_size(&self, current_alignment: usize) -> usize {
        SizeCalculator::new(current_alignment)
            .add_scalar(4, 4)
            .add_bytes(self.len() + 1)
            .size()
    }

    fn encode_cdr2(&self, w: &mut CursorMut<'_>) -> Result<(), CdrError> {
        let len = u32::try_from(self.len() + 1)
            .map_err(|_| CdrError::InvalidData("string too long".into()))?;
        w.align(4)?;
        w.write_u32_le(len)?;
        w.write_bytes(self.as_bytes())?;
        w.write_u8(0)
    }
}

impl Cdr2Encode for String {
    fn cdr2_size(&self, current_alignment: usize) -> usize {
        self.as_str().cdr2_size(current_alignment)
    }

    fn encode_cdr2(&self, w: &mut CursorMut<'_>) -> Result<(), CdrError> {
        self.as_str().encode_cdr2(w)
    }
}

impl Cdr2Decode for String {
    fn decode_cdr2(r: &mut Cursor<'_>) -> Result<Self, CdrError> {
        r.align(4)?;
        let len = checked_usize(r.read_u32_le()?, r, "string length")?;
        if len == 0 {
            return Ok(String::new());
        }
        let bytes = r.read_bytes(len)?;
        let (text, terminator) = bytes.split_at(len - 1);
        if terminator[0] != 0 {
            return Err(CdrError::InvalidData("string missing NUL terminator".into()));
        }
        String::from_utf8(text.to_vec())
            .map_err(|_| CdrError::InvalidData("string is not valid UTF-8".into()))
    }
}

impl<T: Cdr2Encode> Cdr2Encode for Vec<T> {
    fn cdr2_size(&self, current_alignment: usize) -> usize {
        let mut calc = SizeCalculator::new(current_alignment);
        calc.add_scalar(4, 4);
        for item in self {
            calc.add(item);
        }
        calc.size()
    }

    fn encode_cdr2(&self, w: &mut CursorMut<'_>) -> Result<(), CdrError> {
        let len = u32::try_from(self.len())
            .map_err(|_| CdrError::InvalidData("sequence too long".into()))?;
        w.align(4)?;
        w.write_u32_le(len)?;
        for item in self {
            item.encode_cdr2(w)?;
        }
        Ok(())
    }
}

impl<T: Cdr2Decode> Cdr2Decode for Vec<T> {
    fn decode_cdr2(r: &mut Cursor<'_>) -> Result<Self, CdrError> {
        r.align(4)?;
        let len = checked_usize(r.read_u32_le()?, r, "sequence length")?;
        let mut items = Vec::with_capacity(len);
        for _ in 0..len {
            items.push(T::decode_cdr2(r)?);
        }
        Ok(items)
    }
}

impl<T: Cdr2Encode> Cdr2Encode for Option<T> {
    fn cdr2_size(&self, current_alignment: usize) -> usize {
        let mut calc = SizeCalculator::new(current_alignment);
        calc.add_scalar(1, 1);
        if let Some(value) = self {
            calc.add(value);
        }
        calc.size()
    }

    fn encode_cdr2(&self, w: &mut CursorMut<'_>) -> Result<(), CdrError> {
        match self {
            Some(value) => {
                w.write_u8(1)?;
                value.encode_cdr2(w)
            }
            None => w.write_u8(0),
        }
    }
}

impl<T: Cdr2Decode> Cdr2Decode for Option<T> {
    fn decode_cdr2(r: &mut Cursor<'_>) -> Result<Self, CdrError> {
        match r.read_u8()? {
            0 => Ok(None),
            1 => Ok(Some(T::decode_cdr2(r)?)),
            _ => Err(CdrError::InvalidEncoding),
        }
    }
}

impl<T: Cdr2Encode + ?Sized> Cdr2Encode for Box<T> {
    fn cdr2_size(&self, current_alignment: usize) -> usize {
        (**self).cdr2_size(current_alignment)
    }

    fn encode_cdr2(&self, w: &mut CursorMut<'_>) -> Result<(), CdrError> {
        (**self).encode_cdr2(w)
    }
}

impl<T: Cdr2Decode> Cdr2Decode for Box<T> {
    fn decode_cdr2(r: &mut Cursor<'_>) -> Result<Self, CdrError> {
        T::decode_cdr2(r).map(Box::new)
    }
}
