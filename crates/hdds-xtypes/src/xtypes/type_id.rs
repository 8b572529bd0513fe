// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! TypeIdentifier per OMG DDS-XTypes v1.3 specification
//!
//! Section 7.3.4.6: Representing Types with TypeIdentifier

use super::type_object::flags::CollectionElementFlag;
use super::{EquivalenceHash, TypeKind};

// TypeIdentifier discriminators (Section 7.3.4.6.2)
pub const TI_STRING8_SMALL: u8 = 0x70;
pub const TI_STRING8_LARGE: u8 = 0x71;
pub const TI_STRING16_SMALL: u8 = 0x72;
pub const TI_STRING16_LARGE: u8 = 0x73;
pub const TI_PLAIN_SEQUENCE_SMALL: u8 = 0x80;
pub const TI_PLAIN_SEQUENCE_LARGE: u8 = 0x81;
pub const TI_PLAIN_ARRAY_SMALL: u8 = 0x90;
pub const TI_PLAIN_ARRAY_LARGE: u8 = 0x91;
pub const TI_PLAIN_MAP_SMALL: u8 = 0xA0;
pub const TI_PLAIN_MAP_LARGE: u8 = 0xA1;
pub const TI_STRONGLY_CONNECTED_COMPONENT: u8 = 0xB0;

// Equivalence kinds, also used as TypeObject and TypeIdentifier discriminators
pub const EK_MINIMAL: u8 = 0xF1;
pub const EK_COMPLETE: u8 = 0xF2;
pub const EK_BOTH: u8 = 0xF3;

/// Largest bound encoded with a one-byte "small" identifier.
pub const SMALL_BOUND_MAX: u32 = 255;

/// EquivalenceKind - which TypeObject representation a hash refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EquivalenceKind {
    Minimal = EK_MINIMAL,
    Complete = EK_COMPLETE,
    /// Fully descriptive plain collection; no hash on either side.
    Both = EK_BOTH,
}

impl EquivalenceKind {
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            EK_MINIMAL => Some(EquivalenceKind::Minimal),
            EK_COMPLETE => Some(EquivalenceKind::Complete),
            EK_BOTH => Some(EquivalenceKind::Both),
            _ => None,
        }
    }

    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Header shared by plain sequence, array and map identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlainCollectionHeader {
    pub equiv_kind: EquivalenceKind,
    pub element_flags: CollectionElementFlag,
}

impl Default for PlainCollectionHeader {
    fn default() -> Self {
        Self {
            equiv_kind: EquivalenceKind::Both,
            element_flags: CollectionElementFlag::empty(),
        }
    }
}

/// StronglyConnectedComponentId - for types with cyclic dependencies
///
/// Section 7.3.4.6.3: identifies one type inside a group of mutually
/// recursive types hashed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StronglyConnectedComponentId {
    pub equiv_kind: EquivalenceKind,
    pub sc_component_id: EquivalenceHash,
    /// Number of types in the component
    pub scc_length: i32,
    /// 1-based index of this type within the component
    pub scc_index: i32,
}

/// TypeIdentifier - uniquely identifies a DDS type
///
/// Primitive, string and plain collection types are described inline. Every
/// other type is referenced by the [`EquivalenceHash`] of its TypeObject and
/// must be resolved through a [`TypeLookup`](super::TypeLookup).
///
/// Bounds of `0` mean "unbounded".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeIdentifier {
    /// `TK_NONE` or a primitive kind
    Primitive(TypeKind),
    String8 {
        bound: u32,
    },
    String16 {
        bound: u32,
    },
    PlainSequence {
        header: PlainCollectionHeader,
        bound: u32,
        element: Box<TypeIdentifier>,
    },
    PlainArray {
        header: PlainCollectionHeader,
        bounds: Vec<u32>,
        element: Box<TypeIdentifier>,
    },
    PlainMap {
        header: PlainCollectionHeader,
        bound: u32,
        element: Box<TypeIdentifier>,
        key_flags: CollectionElementFlag,
        key: Box<TypeIdentifier>,
    },
    StronglyConnected(StronglyConnectedComponentId),
    /// Reference to a MinimalTypeObject
    Minimal(EquivalenceHash),
    /// Reference to a CompleteTypeObject
    Complete(EquivalenceHash),
}

impl TypeIdentifier {
    pub const TK_NONE: Self = Self::Primitive(TypeKind::TK_NONE);
    pub const TK_BOOLEAN: Self = Self::Primitive(TypeKind::TK_BOOLEAN);
    pub const TK_BYTE: Self = Self::Primitive(TypeKind::TK_BYTE);
    pub const TK_INT8: Self = Self::Primitive(TypeKind::TK_INT8);
    pub const TK_UINT8: Self = Self::Primitive(TypeKind::TK_UINT8);
    pub const TK_INT16: Self = Self::Primitive(TypeKind::TK_INT16);
    pub const TK_UINT16: Self = Self::Primitive(TypeKind::TK_UINT16);
    pub const TK_INT32: Self = Self::Primitive(TypeKind::TK_INT32);
    pub const TK_UINT32: Self = Self::Primitive(TypeKind::TK_UINT32);
    pub const TK_INT64: Self = Self::Primitive(TypeKind::TK_INT64);
    pub const TK_UINT64: Self = Self::Primitive(TypeKind::TK_UINT64);
    pub const TK_FLOAT32: Self = Self::Primitive(TypeKind::TK_FLOAT32);
    pub const TK_FLOAT64: Self = Self::Primitive(TypeKind::TK_FLOAT64);
    pub const TK_FLOAT128: Self = Self::Primitive(TypeKind::TK_FLOAT128);
    pub const TK_CHAR8: Self = Self::Primitive(TypeKind::TK_CHAR8);
    pub const TK_CHAR16: Self = Self::Primitive(TypeKind::TK_CHAR16);

    /// 8-bit string, `0` for unbounded.
    pub const fn string(bound: u32) -> Self {
        Self::String8 { bound }
    }

    /// 16-bit string, `0` for unbounded.
    pub const fn wstring(bound: u32) -> Self {
        Self::String16 { bound }
    }

    pub fn sequence(element: TypeIdentifier, bound: u32) -> Self {
        Self::PlainSequence {
            header: PlainCollectionHeader::default(),
            bound,
            element: Box::new(element),
        }
    }

    pub fn array(element: TypeIdentifier, bounds: Vec<u32>) -> Self {
        Self::PlainArray {
            header: PlainCollectionHeader::default(),
            bounds,
            element: Box::new(element),
        }
    }

    pub fn map(key: TypeIdentifier, element: TypeIdentifier, bound: u32) -> Self {
        Self::PlainMap {
            header: PlainCollectionHeader::default(),
            bound,
            element: Box::new(element),
            key_flags: CollectionElementFlag::empty(),
            key: Box::new(key),
        }
    }

    pub const fn minimal(hash: EquivalenceHash) -> Self {
        Self::Minimal(hash)
    }

    pub const fn complete(hash: EquivalenceHash) -> Self {
        Self::Complete(hash)
    }

    /// Wire discriminator this identifier encodes with.
    ///
    /// Strings and plain collections pick the small form when every bound
    /// fits in one byte.
    pub fn discriminator(&self) -> u8 {
        match self {
            Self::Primitive(kind) => kind.as_u8(),
            Self::String8 { bound } => {
                pick(*bound <= SMALL_BOUND_MAX, TI_STRING8_SMALL, TI_STRING8_LARGE)
            }
            Self::String16 { bound } => {
                pick(*bound <= SMALL_BOUND_MAX, TI_STRING16_SMALL, TI_STRING16_LARGE)
            }
            Self::PlainSequence { bound, .. } => pick(
                *bound <= SMALL_BOUND_MAX,
                TI_PLAIN_SEQUENCE_SMALL,
                TI_PLAIN_SEQUENCE_LARGE,
            ),
            Self::PlainArray { bounds, .. } => pick(
                bounds.iter().all(|b| *b <= SMALL_BOUND_MAX),
                TI_PLAIN_ARRAY_SMALL,
                TI_PLAIN_ARRAY_LARGE,
            ),
            Self::PlainMap { bound, .. } => {
                pick(*bound <= SMALL_BOUND_MAX, TI_PLAIN_MAP_SMALL, TI_PLAIN_MAP_LARGE)
            }
            Self::StronglyConnected(_) => TI_STRONGLY_CONNECTED_COMPONENT,
            Self::Minimal(_) => EK_MINIMAL,
            Self::Complete(_) => EK_COMPLETE,
        }
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Self::Primitive(TypeKind::TK_NONE))
    }

    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(kind) if kind.is_primitive())
    }

    /// True for hash references that need a registry to be understood.
    pub const fn is_hashed(&self) -> bool {
        matches!(self, Self::Minimal(_) | Self::Complete(_))
    }

    pub const fn equivalence_hash(&self) -> Option<&EquivalenceHash> {
        match self {
            Self::Minimal(hash) | Self::Complete(hash) => Some(hash),
            _ => None,
        }
    }
}

impl Default for TypeIdentifier {
    fn default() -> Self {
        Self::TK_NONE
    }
}

const fn pick(small: bool, small_disc: u8, large_disc: u8) -> u8 {
    if small {
        small_disc
    } else {
        large_disc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_discriminator_is_kind() {
        assert_eq!(TypeIdentifier::TK_INT32.discriminator(), 0x04);
        assert_eq!(TypeIdentifier::TK_CHAR16.discriminator(), 0x11);
        assert!(TypeIdentifier::TK_FLOAT64.is_primitive());
        assert!(TypeIdentifier::default().is_none());
    }

    #[test]
    fn test_string_small_large_choice() {
        assert_eq!(TypeIdentifier::string(0).discriminator(), TI_STRING8_SMALL);
        assert_eq!(TypeIdentifier::string(255).discriminator(), TI_STRING8_SMALL);
        assert_eq!(TypeIdentifier::string(256).discriminator(), TI_STRING8_LARGE);
        assert_eq!(TypeIdentifier::wstring(10).discriminator(), TI_STRING16_SMALL);
        assert_eq!(TypeIdentifier::wstring(1000).discriminator(), TI_STRING16_LARGE);
    }

    #[test]
    fn test_plain_collection_discriminators() {
        let seq = TypeIdentifier::sequence(TypeIdentifier::TK_INT32, 100);
        assert_eq!(seq.discriminator(), TI_PLAIN_SEQUENCE_SMALL);

        let arr = TypeIdentifier::array(TypeIdentifier::TK_UINT8, vec![4, 300]);
        assert_eq!(arr.discriminator(), TI_PLAIN_ARRAY_LARGE);

        let map = TypeIdentifier::map(TypeIdentifier::string(0), TypeIdentifier::TK_FLOAT32, 0);
        assert_eq!(map.discriminator(), TI_PLAIN_MAP_SMALL);
    }

    #[test]
    fn test_hash_references() {
        let hash = EquivalenceHash::from_bytes([7; 14]);
        let minimal = TypeIdentifier::minimal(hash);
        let complete = TypeIdentifier::complete(hash);
        assert!(minimal.is_hashed());
        assert_eq!(minimal.discriminator(), EK_MINIMAL);
        assert_eq!(complete.discriminator(), EK_COMPLETE);
        assert_eq!(complete.equivalence_hash(), Some(&hash));
        assert_ne!(minimal, complete);
        assert_eq!(TypeIdentifier::TK_INT32.equivalence_hash(), None);
    }

    #[test]
    fn test_equivalence_kind_bytes() {
        assert_eq!(EquivalenceKind::from_u8(0xF2), Some(EquivalenceKind::Complete));
        assert_eq!(EquivalenceKind::from_u8(0x10), None);
        assert_eq!(EquivalenceKind::Both.to_u8(), EK_BOTH);
    }
}
