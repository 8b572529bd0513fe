// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! XCDR2 encoding/decoding for XTypes records.
//!
//! Most records are plain field sequences and get their codec from
//! [`impl_cdr2_struct!`]. Discriminated unions (TypeIdentifier, TypeObject,
//! annotation values) are written by hand.

mod annotations;
mod records;
mod type_identifier;
mod type_objects;

pub use type_identifier::MAX_IDENTIFIER_NESTING;

use super::type_object::flags::{MemberFlag, TypeFlag};
use super::{EquivalenceHash, NameHash, TypeKind};
use crate::ser::{Cdr2Decode, Cdr2Encode, CdrError, Cursor, CursorMut, SizeCalculator};

/// Implement the codec for a struct by listing its fields in wire order.
macro_rules! impl_cdr2_struct {
    ($type:ty {}) => {
        impl $crate::ser::Cdr2Encode for $type {
            fn cdr2_size(&self, _current_alignment: usize) -> usize {
                0
            }

            fn encode_cdr2(
                &self,
                _w: &mut $crate::ser::CursorMut<'_>,
            ) -> Result<(), $crate::ser::CdrError> {
                Ok(())
            }
        }

        impl $crate::ser::Cdr2Decode for $type {
            fn decode_cdr2(
                _r: &mut $crate::ser::Cursor<'_>,
            ) -> Result<Self, $crate::ser::CdrError> {
                Ok(Self {})
            }
        }
    };
    ($type:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::ser::Cdr2Encode for $type {
            fn cdr2_size(&self, current_alignment: usize) -> usize {
                let mut calc = $crate::ser::SizeCalculator::new(current_alignment);
                $(calc.add(&self.$field);)+
                calc.size()
            }

            fn encode_cdr2(
                &self,
                w: &mut $crate::ser::CursorMut<'_>,
            ) -> Result<(), $crate::ser::CdrError> {
                $(self.$field.encode_cdr2(w)?;)+
                Ok(())
            }
        }

        impl $crate::ser::Cdr2Decode for $type {
            fn decode_cdr2(r: &mut $crate::ser::Cursor<'_>) -> Result<Self, $crate::ser::CdrError> {
                Ok(Self {
                    $($field: $crate::ser::Cdr2Decode::decode_cdr2(r)?,)+
                })
            }
        }
    };
}
pub(crate) use impl_cdr2_struct;

macro_rules! impl_cdr2_flag {
    ($type:ty) => {
        impl Cdr2Encode for $type {
            fn cdr2_size(&self, current_alignment: usize) -> usize {
                self.0.cdr2_size(current_alignment)
            }

            fn encode_cdr2(&self, w: &mut CursorMut<'_>) -> Result<(), CdrError> {
                self.0.encode_cdr2(w)
            }
        }

        impl Cdr2Decode for $type {
            fn decode_cdr2(r: &mut Cursor<'_>) -> Result<Self, CdrError> {
                u16::decode_cdr2(r).map(Self)
            }
        }
    };
}

impl_cdr2_flag!(MemberFlag);
impl_cdr2_flag!(TypeFlag);

impl Cdr2Encode for EquivalenceHash {
    fn cdr2_size(&self, current_alignment: usize) -> usize {
        SizeCalculator::new(current_alignment).add_bytes(14).size()
    }

    fn encode_cdr2(&self, w: &mut CursorMut<'_>) -> Result<(), CdrError> {
        w.write_bytes(self.as_bytes())
    }
}

impl Cdr2Decode for EquivalenceHash {
    fn decode_cdr2(r: &mut Cursor<'_>) -> Result<Self, CdrError> {
        let mut bytes = [0u8; 14];
        bytes.copy_from_slice(r.read_bytes(14)?);
        Ok(Self::from_bytes(bytes))
    }
}

impl Cdr2Encode for NameHash {
    fn cdr2_size(&self, current_alignment: usize) -> usize {
        SizeCalculator::new(current_alignment).add_bytes(4).size()
    }

    fn encode_cdr2(&self, w: &mut CursorMut<'_>) -> Result<(), CdrError> {
        w.write_bytes(self.as_bytes())
    }
}

impl Cdr2Decode for NameHash {
    fn decode_cdr2(r: &mut Cursor<'_>) -> Result<Self, CdrError> {
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(r.read_bytes(4)?);
        Ok(Self(bytes))
    }
}

impl Cdr2Encode for TypeKind {
    fn cdr2_size(&self, current_alignment: usize) -> usize {
        self.as_u8().cdr2_size(current_alignment)
    }

    fn encode_cdr2(&self, w: &mut CursorMut<'_>) -> Result<(), CdrError> {
        w.write_u8(self.as_u8())
    }
}

impl Cdr2Decode for TypeKind {
    fn decode_cdr2(r: &mut Cursor<'_>) -> Result<Self, CdrError> {
        TypeKind::from_u8(r.read_u8()?).ok_or(CdrError::InvalidEncoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ser::{decode_from_slice, encode_to_vec};

    #[test]
    fn test_hashes_are_unaligned_raw_bytes() {
        let hash = EquivalenceHash::from_bytes([3; 14]);
        let bytes = encode_to_vec(&hash).expect("hash should encode");
        assert_eq!(bytes, vec![3; 14]);
        assert_eq!(SizeCalculator::new(1).add(&hash).size(), 14);
        assert_eq!(decode_from_slice::<EquivalenceHash>(&bytes), Ok(hash));
    }

    #[test]
    fn test_flags_encode_as_u16() {
        let flags = MemberFlag::IS_KEY | MemberFlag::IS_OPTIONAL;
        let bytes = encode_to_vec(&flags).expect("flags should encode");
        assert_eq!(bytes, vec![0x28, 0x00]);
        assert_eq!(decode_from_slice::<MemberFlag>(&bytes), Ok(flags));
    }

    #[test]
    fn test_type_kind_rejects_unknown_byte() {
        assert_eq!(
            decode_from_slice::<TypeKind>(&[0x0E]),
            Err(CdrError::InvalidEncoding)
        );
        assert_eq!(decode_from_slice::<TypeKind>(&[0x07]), Ok(TypeKind::TK_UINT32));
    }
}
