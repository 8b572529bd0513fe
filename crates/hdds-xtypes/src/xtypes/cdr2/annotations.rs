// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! AnnotationParameterValue codec.

use crate::ser::{Cdr2Decode, Cdr2Encode, CdrError, Cursor, CursorMut, SizeCalculator};
use crate::xtypes::type_object::AnnotationParameterValue;
use crate::xtypes::TypeKind;

impl Cdr2Encode for AnnotationParameterValue {
    fn cdr2_size(&self, current_alignment: usize) -> usize {
        let mut calc = SizeCalculator::new(current_alignment);
        calc.add_scalar(1, 1);
        match self {
            Self::Boolean(v) => calc.add(v),
            Self::Byte(v) | Self::UInt8(v) | Self::Char8(v) => calc.add(v),
            Self::Int8(v) => calc.add(v),
            Self::Int16(v) => calc.add(v),
            Self::UInt16(v) | Self::Char16(v) => calc.add(v),
            Self::Int32(v) | Self::Enumerated(v) => calc.add(v),
            Self::UInt32(v) => calc.add(v),
            Self::Int64(v) => calc.add(v),
            Self::UInt64(v) => calc.add(v),
            Self::Float32(v) => calc.add(v),
            Self::Float64(v) => calc.add(v),
            Self::String8(v) => calc.add(v),
            Self::Extended(_) => &mut calc,
        };
        calc.size()
    }

    fn encode_cdr2(&self, w: &mut CursorMut<'_>) -> Result<(), CdrError> {
        w.write_u8(self.discriminator())?;
        match self {
            Self::Boolean(v) => v.encode_cdr2(w),
            Self::Byte(v) | Self::UInt8(v) | Self::Char8(v) => v.encode_cdr2(w),
            Self::Int8(v) => v.encode_cdr2(w),
            Self::Int16(v) => v.encode_cdr2(w),
            Self::UInt16(v) | Self::Char16(v) => v.encode_cdr2(w),
            Self::Int32(v) | Self::Enumerated(v) => v.encode_cdr2(w),
            Self::UInt32(v) => v.encode_cdr2(w),
            Self::Int64(v) => v.encode_cdr2(w),
            Self::UInt64(v) => v.encode_cdr2(w),
            Self::Float32(v) => v.encode_cdr2(w),
            Self::Float64(v) => v.encode_cdr2(w),
            Self::String8(v) => v.encode_cdr2(w),
            Self::Extended(_) => Ok(()),
        }
    }
}

impl Cdr2Decode for AnnotationParameterValue {
    fn decode_cdr2(r: &mut Cursor<'_>) -> Result<Self, CdrError> {
        let raw = r.read_u8()?;
        let Some(kind) = TypeKind::from_u8(raw) else {
            return Ok(Self::Extended(raw));
        };
        Ok(match kind {
            TypeKind::TK_BOOLEAN => Self::Boolean(bool::decode_cdr2(r)?),
            TypeKind::TK_BYTE => Self::Byte(u8::decode_cdr2(r)?),
            TypeKind::TK_INT8 => Self::Int8(i8::decode_cdr2(r)?),
            TypeKind::TK_UINT8 => Self::UInt8(u8::decode_cdr2(r)?),
            TypeKind::TK_INT16 => Self::Int16(i16::decode_cdr2(r)?),
            TypeKind::TK_UINT16 => Self::UInt16(u16::decode_cdr2(r)?),
            TypeKind::TK_INT32 => Self::Int32(i32::decode_cdr2(r)?),
            TypeKind::TK_UINT32 => Self::UInt32(u32::decode_cdr2(r)?),
            TypeKind::TK_INT64 => Self::Int64(i64::decode_cdr2(r)?),
            TypeKind::TK_UINT64 => Self::UInt64(u64::decode_cdr2(r)?),
            TypeKind::TK_FLOAT32 => Self::Float32(f32::decode_cdr2(r)?),
            TypeKind::TK_FLOAT64 => Self::Float64(f64::decode_cdr2(r)?),
            TypeKind::TK_CHAR8 => Self::Char8(u8::decode_cdr2(r)?),
            TypeKind::TK_CHAR16 => Self::Char16(u16::decode_cdr2(r)?),
            TypeKind::TK_ENUM => Self::Enumerated(i32::decode_cdr2(r)?),
            TypeKind::TK_STRING8 => Self::String8(String::decode_cdr2(r)?),
            _ => Self::Extended(raw),
        })
    }
}
