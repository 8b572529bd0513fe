// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! TypeObject per OMG DDS-XTypes v1.3 specification
//!
//! Section 7.3.4.7: Complete and Minimal type representations.
//!
//! A [`TypeObject`] is a two-level union: the outer discriminator selects the
//! Complete or Minimal representation, the inner one selects the type kind.
//! Every nested detail inside one object uses the same representation as the
//! object itself, which the type system enforces.

pub mod alias;
pub mod annotations;
pub mod bitsets;
pub mod collections;
pub mod compress;
pub mod details;
pub mod enums;
pub mod flags;
pub mod structs;
pub mod unions;

pub use alias::*;
pub use annotations::*;
pub use bitsets::*;
pub use collections::*;
pub use compress::{
    compress_type_object, decompress_type_object, decompress_type_object_limited,
    MAX_DECOMPRESSED_TYPE_OBJECT,
};
pub use details::*;
pub use enums::*;
pub use flags::*;
pub use structs::*;
pub use unions::*;

use super::type_id::{EK_COMPLETE, EK_MINIMAL};
use super::{EquivalenceHash, TypeIdentifier, TypeKind};
use crate::error::{Error, Result};
use crate::ser::encode_to_vec;

/// CompleteTypeObject - fully named type description
#[derive(Debug, Clone, PartialEq)]
pub enum CompleteTypeObject {
    Alias(CompleteAliasType),
    Annotation(CompleteAnnotationType),
    Struct(CompleteStructType),
    Union(CompleteUnionType),
    Bitset(CompleteBitsetType),
    Sequence(CompleteSequenceType),
    Array(CompleteArrayType),
    Map(CompleteMapType),
    Enumerated(CompleteEnumeratedType),
    Bitmask(CompleteBitmaskType),
    /// Kind byte not understood by this implementation; no payload
    Extended(u8),
}

/// MinimalTypeObject - hash-only type description used for assignability
#[derive(Debug, Clone, PartialEq)]
pub enum MinimalTypeObject {
    Alias(MinimalAliasType),
    Annotation(MinimalAnnotationType),
    Struct(MinimalStructType),
    Union(MinimalUnionType),
    Bitset(MinimalBitsetType),
    Sequence(MinimalSequenceType),
    Array(MinimalArrayType),
    Map(MinimalMapType),
    Enumerated(MinimalEnumeratedType),
    Bitmask(MinimalBitmaskType),
    Extended(u8),
}

/// Shared accessors for both representation enums.
macro_rules! impl_type_object_repr {
    ($name:ident, $alias:ty, $structure:ty, $union:ty, $sequence:ty, $enumerated:ty) => {
        impl $name {
            /// Wire discriminator of the active variant.
            pub fn discriminator(&self) -> u8 {
                match self {
                    Self::Extended(raw) => *raw,
                    _ => self.kind().map(TypeKind::as_u8).unwrap_or_default(),
                }
            }

            /// Type kind of the active variant, `None` for `Extended`.
            pub fn kind(&self) -> Option<TypeKind> {
                Some(match self {
                    Self::Alias(_) => TypeKind::TK_ALIAS,
                    Self::Annotation(_) => TypeKind::TK_ANNOTATION,
                    Self::Struct(_) => TypeKind::TK_STRUCTURE,
                    Self::Union(_) => TypeKind::TK_UNION,
                    Self::Bitset(_) => TypeKind::TK_BITSET,
                    Self::Sequence(_) => TypeKind::TK_SEQUENCE,
                    Self::Array(_) => TypeKind::TK_ARRAY,
                    Self::Map(_) => TypeKind::TK_MAP,
                    Self::Enumerated(_) => TypeKind::TK_ENUM,
                    Self::Bitmask(_) => TypeKind::TK_BITMASK,
                    Self::Extended(_) => return None,
                })
            }

            pub fn as_alias(&self) -> Option<&$alias> {
                match self {
                    Self::Alias(alias) => Some(alias),
                    _ => None,
                }
            }

            pub fn as_struct(&self) -> Option<&$structure> {
                match self {
                    Self::Struct(structure) => Some(structure),
                    _ => None,
                }
            }

            pub fn as_union(&self) -> Option<&$union> {
                match self {
                    Self::Union(union) => Some(union),
                    _ => None,
                }
            }

            pub fn as_sequence(&self) -> Option<&$sequence> {
                match self {
                    Self::Sequence(sequence) => Some(sequence),
                    _ => None,
                }
            }

            pub fn as_enumerated(&self) -> Option<&$enumerated> {
                match self {
                    Self::Enumerated(enumerated) => Some(enumerated),
                    _ => None,
                }
            }
        }
    };
}

impl_type_object_repr!(
    CompleteTypeObject,
    CompleteAliasType,
    CompleteStructType,
    CompleteUnionType,
    CompleteSequenceType,
    CompleteEnumeratedType
);
impl_type_object_repr!(
    MinimalTypeObject,
    MinimalAliasType,
    MinimalStructType,
    MinimalUnionType,
    MinimalSequenceType,
    MinimalEnumeratedType
);

/// TypeObject - Complete or Minimal type description
///
/// `Unknown` keeps an outer discriminator that is neither `EK_COMPLETE` nor
/// `EK_MINIMAL`. It carries no payload and is never consistent with anything.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeObject {
    Complete(CompleteTypeObject),
    Minimal(MinimalTypeObject),
    Unknown(u8),
}

impl TypeObject {
    pub fn discriminator(&self) -> u8 {
        match self {
            Self::Complete(_) => EK_COMPLETE,
            Self::Minimal(_) => EK_MINIMAL,
            Self::Unknown(raw) => *raw,
        }
    }

    /// Inner type kind, `None` for unknown or extended objects.
    pub fn kind(&self) -> Option<TypeKind> {
        match self {
            Self::Complete(complete) => complete.kind(),
            Self::Minimal(minimal) => minimal.kind(),
            Self::Unknown(_) => None,
        }
    }

    pub fn complete(&self) -> Option<&CompleteTypeObject> {
        match self {
            Self::Complete(complete) => Some(complete),
            _ => None,
        }
    }

    pub fn minimal(&self) -> Option<&MinimalTypeObject> {
        match self {
            Self::Minimal(minimal) => Some(minimal),
            _ => None,
        }
    }

    pub fn try_into_complete(self) -> Result<CompleteTypeObject> {
        match self {
            Self::Complete(complete) => Ok(complete),
            other => Err(Error::WrongVariant {
                expected: "Complete",
                found: other.variant_name(),
            }),
        }
    }

    pub fn try_into_minimal(self) -> Result<MinimalTypeObject> {
        match self {
            Self::Minimal(minimal) => Ok(minimal),
            other => Err(Error::WrongVariant {
                expected: "Minimal",
                found: other.variant_name(),
            }),
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Self::Complete(_) => "Complete",
            Self::Minimal(_) => "Minimal",
            Self::Unknown(_) => "Unknown",
        }
    }

    /// MD5-based hash of this object's XCDR2 encoding.
    pub fn equivalence_hash(&self) -> Result<EquivalenceHash> {
        let bytes = encode_to_vec(self)?;
        Ok(EquivalenceHash::compute(&bytes))
    }

    /// Hash reference that designates this object.
    pub fn type_identifier(&self) -> Result<TypeIdentifier> {
        match self {
            Self::Complete(_) => Ok(TypeIdentifier::Complete(self.equivalence_hash()?)),
            Self::Minimal(_) => Ok(TypeIdentifier::Minimal(self.equivalence_hash()?)),
            Self::Unknown(_) => Err(Error::WrongVariant {
                expected: "Complete or Minimal",
                found: "Unknown",
            }),
        }
    }
}

impl From<CompleteTypeObject> for TypeObject {
    fn from(complete: CompleteTypeObject) -> Self {
        Self::Complete(complete)
    }
}

impl From<MinimalTypeObject> for TypeObject {
    fn from(minimal: MinimalTypeObject) -> Self {
        Self::Minimal(minimal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point() -> CompleteStructType {
        CompleteStructType::new(
            "Point",
            vec![
                CompleteStructMember::new(0, "x", TypeIdentifier::TK_INT32),
                CompleteStructMember::new(1, "y", TypeIdentifier::TK_INT32),
            ],
        )
    }

    #[test]
    fn test_kind_and_discriminator() {
        let obj = TypeObject::Complete(CompleteTypeObject::Struct(point()));
        assert_eq!(obj.discriminator(), EK_COMPLETE);
        assert_eq!(obj.kind(), Some(TypeKind::TK_STRUCTURE));
        assert!(obj.complete().and_then(CompleteTypeObject::as_struct).is_some());
        assert!(obj.minimal().is_none());

        let extended = MinimalTypeObject::Extended(0x7F);
        assert_eq!(extended.kind(), None);
        assert_eq!(extended.discriminator(), 0x7F);
        assert_eq!(TypeObject::Unknown(0x05).kind(), None);
    }

    #[test]
    fn test_wrong_variant_is_an_error() {
        let obj = TypeObject::Complete(CompleteTypeObject::Struct(point()));
        assert_eq!(
            obj.clone().try_into_minimal(),
            Err(Error::WrongVariant {
                expected: "Minimal",
                found: "Complete"
            })
        );
        assert!(obj.try_into_complete().is_ok());
        assert!(TypeObject::Unknown(0).type_identifier().is_err());
    }

    #[cfg(feature = "xtypes")]
    #[test]
    fn test_type_identifier_from_hash() {
        let complete = TypeObject::Complete(CompleteTypeObject::Struct(point()));
        let minimal = TypeObject::Minimal(MinimalTypeObject::Struct(point().to_minimal()));

        let complete_id = complete.type_identifier().expect("hash should compute");
        let minimal_id = minimal.type_identifier().expect("hash should compute");
        assert!(matches!(complete_id, TypeIdentifier::Complete(_)));
        assert!(matches!(minimal_id, TypeIdentifier::Minimal(_)));
        assert_eq!(complete_id, complete.type_identifier().expect("stable hash"));
        assert_ne!(complete_id.equivalence_hash(), minimal_id.equivalence_hash());
    }
}
