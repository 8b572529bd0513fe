// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! TypeIdentifier codec (Section 7.3.4.6.2).
//!
//! One discriminator byte, then the payload of the active form. Small forms
//! carry one-byte bounds, large forms four-byte bounds.

use crate::ser::{
    checked_usize, Cdr2Decode, Cdr2Encode, CdrError, Cursor, CursorMut, SizeCalculator,
};
use crate::xtypes::type_id::*;
use crate::xtypes::type_object::flags::CollectionElementFlag;
use crate::xtypes::{EquivalenceHash, TypeIdentifier, TypeKind};

impl Cdr2Encode for PlainCollectionHeader {
    fn cdr2_size(&self, current_alignment: usize) -> usize {
        SizeCalculator::new(current_alignment)
            .add(&self.equiv_kind.to_u8())
            .add(&self.element_flags)
            .size()
    }

    fn encode_cdr2(&self, w: &mut CursorMut<'_>) -> Result<(), CdrError> {
        w.write_u8(self.equiv_kind.to_u8())?;
        self.element_flags.encode_cdr2(w)
    }
}

impl Cdr2Decode for PlainCollectionHeader {
    fn decode_cdr2(r: &mut Cursor<'_>) -> Result<Self, CdrError> {
        let equiv_kind = EquivalenceKind::from_u8(r.read_u8()?).ok_or(CdrError::InvalidEncoding)?;
        let element_flags = CollectionElementFlag::decode_cdr2(r)?;
        Ok(Self {
            equiv_kind,
            element_flags,
        })
    }
}

impl Cdr2Encode for StronglyConnectedComponentId {
    fn cdr2_size(&self, current_alignment: usize) -> usize {
        SizeCalculator::new(current_alignment)
            .add(&self.equiv_kind.to_u8())
            .add(&self.sc_component_id)
            .add(&self.scc_length)
            .add(&self.scc_index)
            .size()
    }

    fn encode_cdr2(&self, w: &mut CursorMut<'_>) -> Result<(), CdrError> {
        w.write_u8(self.equiv_kind.to_u8())?;
        self.sc_component_id.encode_cdr2(w)?;
        self.scc_length.encode_cdr2(w)?;
        self.scc_index.encode_cdr2(w)
    }
}

impl Cdr2Decode for StronglyConnectedComponentId {
    fn decode_cdr2(r: &mut Cursor<'_>) -> Result<Self, CdrError> {
        let equiv_kind = match EquivalenceKind::from_u8(r.read_u8()?) {
            Some(kind @ (EquivalenceKind::Minimal | EquivalenceKind::Complete)) => kind,
            _ => return Err(CdrError::InvalidEncoding),
        };
        Ok(Self {
            equiv_kind,
            sc_component_id: EquivalenceHash::decode_cdr2(r)?,
            scc_length: i32::decode_cdr2(r)?,
            scc_index: i32::decode_cdr2(r)?,
        })
    }
}

/// Narrow a bound to the one-byte small form.
fn small(bound: u32) -> Result<u8, CdrError> {
    u8::try_from(bound)
        .map_err(|_| CdrError::InvalidData(format!("bound {} exceeds small form", bound)))
}

fn write_bound(w: &mut CursorMut<'_>, small_form: bool, bound: u32) -> Result<(), CdrError> {
    if small_form {
        w.write_u8(small(bound)?)
    } else {
        bound.encode_cdr2(w)
    }
}

fn read_bound(r: &mut Cursor<'_>, small_form: bool) -> Result<u32, CdrError> {
    if small_form {
        r.read_u8().map(u32::from)
    } else {
        u32::decode_cdr2(r)
    }
}

fn is_small(discriminator: u8) -> bool {
    matches!(
        discriminator,
        TI_STRING8_SMALL
            | TI_STRING16_SMALL
            | TI_PLAIN_SEQUENCE_SMALL
            | TI_PLAIN_ARRAY_SMALL
            | TI_PLAIN_MAP_SMALL
    )
}

impl Cdr2Encode for TypeIdentifier {
    fn cdr2_size(&self, current_alignment: usize) -> usize {
        let small_form = is_small(self.discriminator());
        let bound_width = if small_form { 1 } else { 4 };
        let mut calc = SizeCalculator::new(current_alignment);
        calc.add_scalar(1, 1);
        match self {
            Self::Primitive(_) => {}
            Self::String8 { .. } | Self::String16 { .. } => {
                calc.add_scalar(bound_width, bound_width);
            }
            Self::PlainSequence {
                header, element, ..
            } => {
                calc.add(header).add_scalar(bound_width, bound_width).add(element);
            }
            Self::PlainArray {
                header,
                bounds,
                element,
            } => {
                calc.add(header).add_scalar(4, 4);
                for _ in bounds {
                    calc.add_scalar(bound_width, bound_width);
                }
                calc.add(element);
            }
            Self::PlainMap {
                header,
                element,
                key_flags,
                key,
                ..
            } => {
                calc.add(header)
                    .add_scalar(bound_width, bound_width)
                    .add(element)
                    .add(key_flags)
                    .add(key);
            }
            Self::StronglyConnected(scc) => {
                calc.add(scc);
            }
            Self::Minimal(hash) | Self::Complete(hash) => {
                calc.add(hash);
            }
        }
        calc.size()
    }

    fn encode_cdr2(&self, w: &mut CursorMut<'_>) -> Result<(), CdrError> {
        let discriminator = self.discriminator();
        let small_form = is_small(discriminator);

        w.write_u8(discriminator)?;
        match self {
            Self::Primitive(_) => Ok(()),
            Self::String8 { bound } | Self::String16 { bound } => {
                write_bound(w, small_form, *bound)
            }
            Self::PlainSequence {
                header,
                bound,
                element,
            } => {
                header.encode_cdr2(w)?;
                write_bound(w, small_form, *bound)?;
                element.encode_cdr2(w)
            }
            Self::PlainArray {
                header,
                bounds,
                element,
            } => {
                header.encode_cdr2(w)?;
                let count = u32::try_from(bounds.len())
                    .map_err(|_| CdrError::InvalidData("too many array dimensions".into()))?;
                count.encode_cdr2(w)?;
                for bound in bounds {
                    write_bound(w, small_form, *bound)?;
                }
                element.encode_cdr2(w)
            }
            Self::PlainMap {
                header,
                bound,
                element,
                key_flags,
                key,
            } => {
                header.encode_cdr2(w)?;
                write_bound(w, small_form, *bound)?;
                element.encode_cdr2(w)?;
                key_flags.encode_cdr2(w)?;
                key.encode_cdr2(w)
            }
            Self::StronglyConnected(scc) => scc.encode_cdr2(w),
            Self::Minimal(hash) | Self::Complete(hash) => hash.encode_cdr2(w),
        }
    }
}

/// Plain collections nest identifiers inline; deeper payloads are rejected.
pub const MAX_IDENTIFIER_NESTING: usize = 64;

impl Cdr2Decode for TypeIdentifier {
    fn decode_cdr2(r: &mut Cursor<'_>) -> Result<Self, CdrError> {
        Self::decode_nested(r, 0)
    }
}

impl TypeIdentifier {
    fn decode_element(r: &mut Cursor<'_>, depth: usize) -> Result<Box<Self>, CdrError> {
        let depth = depth + 1;
        if depth > MAX_IDENTIFIER_NESTING {
            return Err(CdrError::InvalidData(format!(
                "TypeIdentifier nesting exceeds {}",
                MAX_IDENTIFIER_NESTING
            )));
        }
        Self::decode_nested(r, depth).map(Box::new)
    }

    fn decode_nested(r: &mut Cursor<'_>, depth: usize) -> Result<Self, CdrError> {
        let discriminator = r.read_u8()?;
        let small_form = is_small(discriminator);

        match discriminator {
            TI_STRING8_SMALL | TI_STRING8_LARGE => Ok(Self::String8 {
                bound: read_bound(r, small_form)?,
            }),
            TI_STRING16_SMALL | TI_STRING16_LARGE => Ok(Self::String16 {
                bound: read_bound(r, small_form)?,
            }),
            TI_PLAIN_SEQUENCE_SMALL | TI_PLAIN_SEQUENCE_LARGE => Ok(Self::PlainSequence {
                header: PlainCollectionHeader::decode_cdr2(r)?,
                bound: read_bound(r, small_form)?,
                element: Self::decode_element(r, depth)?,
            }),
            TI_PLAIN_ARRAY_SMALL | TI_PLAIN_ARRAY_LARGE => {
                let header = PlainCollectionHeader::decode_cdr2(r)?;
                let count = u32::decode_cdr2(r)?;
                let count = checked_usize(count, r, "array dimension count")?;
                let mut bounds = Vec::with_capacity(count);
                for _ in 0..count {
                    bounds.push(read_bound(r, small_form)?);
                }
                Ok(Self::PlainArray {
                    header,
                    bounds,
                    element: Self::decode_element(r, depth)?,
                })
            }
            TI_PLAIN_MAP_SMALL | TI_PLAIN_MAP_LARGE => Ok(Self::PlainMap {
                header: PlainCollectionHeader::decode_cdr2(r)?,
                bound: read_bound(r, small_form)?,
                element: Self::decode_element(r, depth)?,
                key_flags: CollectionElementFlag::decode_cdr2(r)?,
                key: Self::decode_element(r, depth)?,
            }),
            TI_STRONGLY_CONNECTED_COMPONENT => {
                Ok(Self::StronglyConnected(StronglyConnectedComponentId::decode_cdr2(r)?))
            }
            EK_MINIMAL => Ok(Self::Minimal(EquivalenceHash::decode_cdr2(r)?)),
            EK_COMPLETE => Ok(Self::Complete(EquivalenceHash::decode_cdr2(r)?)),
            other => match TypeKind::from_u8(other) {
                Some(kind) if kind.is_primitive() => Ok(Self::Primitive(kind)),
                _ => {
                    log::debug!("[XTYPES] unknown TypeIdentifier discriminator 0x{:02x}", other);
                    Err(CdrError::InvalidEncoding)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ser::{decode_from_slice, encode_to_vec};

    fn roundtrip(id: &TypeIdentifier) -> Vec<u8> {
        let bytes = encode_to_vec(id).expect("TypeIdentifier encode should succeed");
        assert_eq!(bytes.len(), id.cdr2_size(0));
        let decoded: TypeIdentifier =
            decode_from_slice(&bytes).expect("TypeIdentifier decode should succeed");
        assert_eq!(&decoded, id);
        bytes
    }

    #[test]
    fn test_primitive_is_single_byte() {
        assert_eq!(roundtrip(&TypeIdentifier::TK_FLOAT64), vec![0x0A]);
        assert_eq!(roundtrip(&TypeIdentifier::TK_NONE), vec![0x00]);
    }

    #[test]
    fn test_string_bounds() {
        assert_eq!(roundtrip(&TypeIdentifier::string(32)), vec![TI_STRING8_SMALL, 32]);
        // large bound is u32-aligned after the discriminator
        assert_eq!(
            roundtrip(&TypeIdentifier::wstring(1000)),
            vec![TI_STRING16_LARGE, 0, 0, 0, 0xE8, 0x03, 0, 0]
        );
    }

    #[test]
    fn test_plain_collections() {
        let seq = TypeIdentifier::sequence(TypeIdentifier::TK_INT16, 10);
        assert_eq!(
            roundtrip(&seq),
            vec![TI_PLAIN_SEQUENCE_SMALL, EK_BOTH, 0, 0, 10, 0x03]
        );

        let nested = TypeIdentifier::map(
            TypeIdentifier::string(0),
            TypeIdentifier::array(TypeIdentifier::TK_UINT8, vec![2, 700]),
            5000,
        );
        roundtrip(&nested);
    }

    #[test]
    fn test_hash_and_scc() {
        let hash = EquivalenceHash::from_bytes([0x11; 14]);
        let bytes = roundtrip(&TypeIdentifier::Complete(hash));
        assert_eq!(bytes.len(), 15);
        assert_eq!(bytes[0], EK_COMPLETE);

        roundtrip(&TypeIdentifier::StronglyConnected(StronglyConnectedComponentId {
            equiv_kind: EquivalenceKind::Minimal,
            sc_component_id: hash,
            scc_length: 2,
            scc_index: 1,
        }));
    }

    #[test]
    fn test_unknown_discriminator_is_invalid() {
        assert_eq!(
            decode_from_slice::<TypeIdentifier>(&[0x51]),
            Err(CdrError::InvalidEncoding)
        );
        assert_eq!(
            decode_from_slice::<TypeIdentifier>(&[0xEE]),
            Err(CdrError::InvalidEncoding)
        );
    }

    #[test]
    fn test_truncated_hash_fails() {
        assert_eq!(
            decode_from_slice::<TypeIdentifier>(&[EK_MINIMAL, 1, 2, 3]),
            Err(CdrError::UnexpectedEof)
        );
    }
}
