// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! TypeObject codec.
//!
//! Outer byte: `EK_COMPLETE` / `EK_MINIMAL`. Inner byte: the type kind.
//! Unrecognised values at either level decode to a payload-less variant
//! (`TypeObject::Unknown`, `*TypeObject::Extended`) instead of failing.

use crate::ser::{Cdr2Decode, Cdr2Encode, CdrError, Cursor, CursorMut, SizeCalculator};
use crate::xtypes::type_id::{EK_COMPLETE, EK_MINIMAL};
use crate::xtypes::type_object::*;
use crate::xtypes::TypeKind;

macro_rules! impl_cdr2_type_object_repr {
    ($name:ident {
        $($kind:ident => $variant:ident($inner:ty)),+ $(,)?
    }) => {
        impl Cdr2Encode for $name {
            fn cdr2_size(&self, current_alignment: usize) -> usize {
                let mut calc = SizeCalculator::new(current_alignment);
                calc.add_scalar(1, 1);
                match self {
                    $(Self::$variant(inner) => {
                        calc.add(inner);
                    })+
                    Self::Extended(_) => {}
                }
                calc.size()
            }

            fn encode_cdr2(&self, w: &mut CursorMut<'_>) -> Result<(), CdrError> {
                w.write_u8(self.discriminator())?;
                match self {
                    $(Self::$variant(inner) => inner.encode_cdr2(w),)+
                    Self::Extended(_) => Ok(()),
                }
            }
        }

        impl Cdr2Decode for $name {
            fn decode_cdr2(r: &mut Cursor<'_>) -> Result<Self, CdrError> {
                let raw = r.read_u8()?;
                match TypeKind::from_u8(raw) {
                    $(Some(TypeKind::$kind) => Ok(Self::$variant(<$inner>::decode_cdr2(r)?)),)+
                    _ => {
                        log::debug!(
                            "[XTYPES] {} kind 0x{:02x} decoded as Extended",
                            stringify!($name),
                            raw
                        );
                        Ok(Self::Extended(raw))
                    }
                }
            }
        }
    };
}

impl_cdr2_type_object_repr!(CompleteTypeObject {
    TK_ALIAS => Alias(CompleteAliasType),
    TK_ANNOTATION => Annotation(CompleteAnnotationType),
    TK_STRUCTURE => Struct(CompleteStructType),
    TK_UNION => Union(CompleteUnionType),
    TK_BITSET => Bitset(CompleteBitsetType),
    TK_SEQUENCE => Sequence(CompleteSequenceType),
    TK_ARRAY => Array(CompleteArrayType),
    TK_MAP => Map(CompleteMapType),
    TK_ENUM => Enumerated(CompleteEnumeratedType),
    TK_BITMASK => Bitmask(CompleteBitmaskType),
});

impl_cdr2_type_object_repr!(MinimalTypeObject {
    TK_ALIAS => Alias(MinimalAliasType),
    TK_ANNOTATION => Annotation(MinimalAnnotationType),
    TK_STRUCTURE => Struct(MinimalStructType),
    TK_UNION => Union(MinimalUnionType),
    TK_BITSET => Bitset(MinimalBitsetType),
    TK_SEQUENCE => Sequence(MinimalSequenceType),
    TK_ARRAY => Array(MinimalArrayType),
    TK_MAP => Map(MinimalMapType),
    TK_ENUM => Enumerated(MinimalEnumeratedType),
    TK_BITMASK => Bitmask(MinimalBitmaskType),
});

impl Cdr2Encode for TypeObject {
    fn cdr2_size(&self, current_alignment: usize) -> usize {
        let mut calc = SizeCalculator::new(current_alignment);
        calc.add_scalar(1, 1);
        match self {
            Self::Complete(complete) => {
                calc.add(complete);
            }
            Self::Minimal(minimal) => {
                calc.add(minimal);
            }
            Self::Unknown(_) => {}
        }
        calc.size()
    }

    fn encode_cdr2(&self, w: &mut CursorMut<'_>) -> Result<(), CdrError> {
        w.write_u8(self.discriminator())?;
        match self {
            Self::Complete(complete) => complete.encode_cdr2(w),
            Self::Minimal(minimal) => minimal.encode_cdr2(w),
            Self::Unknown(_) => Ok(()),
        }
    }
}

impl Cdr2Decode for TypeObject {
    fn decode_cdr2(r: &mut Cursor<'_>) -> Result<Self, CdrError> {
        match r.read_u8()? {
            EK_COMPLETE => Ok(Self::Complete(CompleteTypeObject::decode_cdr2(r)?)),
            EK_MINIMAL => Ok(Self::Minimal(MinimalTypeObject::decode_cdr2(r)?)),
            other => {
                log::debug!("[XTYPES] TypeObject discriminator 0x{:02x} has no payload", other);
                Ok(Self::Unknown(other))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ser::{decode_from_slice, encode_to_vec};
    use crate::xtypes::TypeIdentifier;

    #[test]
    fn test_struct_type_object_roundtrip() {
        let obj = TypeObject::Complete(CompleteTypeObject::Struct(CompleteStructType::new(
            "Point",
            vec![
                CompleteStructMember::new(0, "x", TypeIdentifier::TK_INT32),
                CompleteStructMember::new(1, "y", TypeIdentifier::TK_INT32),
            ],
        )));
        let bytes = encode_to_vec(&obj).expect("CDR2 TypeObject: encode should succeed");
        assert_eq!(&bytes[..2], &[EK_COMPLETE, TypeKind::TK_STRUCTURE.as_u8()]);
        assert_eq!(bytes.len(), obj.cdr2_size(0));
        let decoded: TypeObject =
            decode_from_slice(&bytes).expect("CDR2 TypeObject: decode should succeed");
        assert_eq!(decoded, obj);
    }

    #[test]
    fn test_unknown_outer_discriminator_has_no_payload() {
        let decoded: TypeObject = decode_from_slice(&[0x33, 0xDE, 0xAD]).expect("lenient decode");
        assert_eq!(decoded, TypeObject::Unknown(0x33));
        assert_eq!(encode_to_vec(&decoded).expect("encode"), vec![0x33]);
    }

    #[test]
    fn test_unknown_inner_kind_is_extended() {
        let decoded: TypeObject =
            decode_from_slice(&[EK_MINIMAL, 0x7A, 0x01]).expect("lenient decode");
        assert_eq!(decoded, TypeObject::Minimal(MinimalTypeObject::Extended(0x7A)));
        assert_eq!(decoded.cdr2_size(0), 2);
    }

    #[test]
    fn test_truncated_type_object_fails() {
        let obj = TypeObject::Minimal(MinimalTypeObject::Enumerated(MinimalEnumeratedType::new(
            vec![MinimalEnumeratedLiteral::new("A", 0)],
        )));
        let bytes = encode_to_vec(&obj).expect("encode should succeed");
        for cut in 0..bytes.len() {
            let result = decode_from_slice::<TypeObject>(&bytes[..cut]);
            assert!(result.is_err(), "decode of {} bytes should fail", cut);
        }
    }
}
