// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Annotation values, applied annotations and annotation type descriptions.
//!
//! Section 7.3.4.7.5 (applied annotations) and 7.3.4.7.6 (annotation types).

use super::flags::{AnnotationParameterFlag, AnnotationTypeFlag};
use crate::xtypes::{NameHash, TypeIdentifier, TypeKind};

/// AnnotationParameterValue - literal value of an annotation parameter
///
/// Discriminated on the wire by the [`TypeKind`] of the value.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationParameterValue {
    Boolean(bool),
    Byte(u8),
    Int8(i8),
    UInt8(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    Char8(u8),
    Char16(u16),
    /// Enumerated literal value
    Enumerated(i32),
    String8(String),
    /// Kind not understood by this implementation, carries no payload
    Extended(u8),
}

impl AnnotationParameterValue {
    pub fn discriminator(&self) -> u8 {
        let kind = match self {
            Self::Boolean(_) => TypeKind::TK_BOOLEAN,
            Self::Byte(_) => TypeKind::TK_BYTE,
            Self::Int8(_) => TypeKind::TK_INT8,
            Self::UInt8(_) => TypeKind::TK_UINT8,
            Self::Int16(_) => TypeKind::TK_INT16,
            Self::UInt16(_) => TypeKind::TK_UINT16,
            Self::Int32(_) => TypeKind::TK_INT32,
            Self::UInt32(_) => TypeKind::TK_UINT32,
            Self::Int64(_) => TypeKind::TK_INT64,
            Self::UInt64(_) => TypeKind::TK_UINT64,
            Self::Float32(_) => TypeKind::TK_FLOAT32,
            Self::Float64(_) => TypeKind::TK_FLOAT64,
            Self::Char8(_) => TypeKind::TK_CHAR8,
            Self::Char16(_) => TypeKind::TK_CHAR16,
            Self::Enumerated(_) => TypeKind::TK_ENUM,
            Self::String8(_) => TypeKind::TK_STRING8,
            Self::Extended(raw) => return *raw,
        };
        kind.as_u8()
    }
}

/// One `name = value` pair inside an applied annotation
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedAnnotationParameter {
    pub paramname_hash: NameHash,
    pub value: AnnotationParameterValue,
}

/// AppliedAnnotation - custom annotation applied to a type or member
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedAnnotation {
    pub annotation_typeid: TypeIdentifier,
    pub param_seq: Option<Vec<AppliedAnnotationParameter>>,
}

/// @verbatim annotation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppliedVerbatimAnnotation {
    pub placement: String,
    pub language: String,
    pub text: String,
}

/// Built-in annotations on a type
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppliedBuiltinTypeAnnotations {
    pub verbatim: Option<AppliedVerbatimAnnotation>,
}

/// Built-in annotations on a member
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppliedBuiltinMemberAnnotations {
    /// @unit
    pub unit: Option<String>,
    /// @min
    pub min: Option<AnnotationParameterValue>,
    /// @max
    pub max: Option<AnnotationParameterValue>,
    /// @hashid
    pub hash_id: Option<String>,
}

// ============================================================================
// Annotation type descriptions
// ============================================================================

/// Info shared between Complete and Minimal annotation parameters
#[derive(Debug, Clone, PartialEq)]
pub struct CommonAnnotationParameter {
    pub member_flags: AnnotationParameterFlag,
    pub member_type_id: TypeIdentifier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompleteAnnotationParameter {
    pub common: CommonAnnotationParameter,
    pub name: String,
    pub default_value: AnnotationParameterValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinimalAnnotationParameter {
    pub common: CommonAnnotationParameter,
    pub name_hash: NameHash,
    pub default_value: AnnotationParameterValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompleteAnnotationHeader {
    pub annotation_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MinimalAnnotationHeader {}

/// CompleteAnnotationType - declaration of a custom annotation
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteAnnotationType {
    pub annotation_flag: AnnotationTypeFlag,
    pub header: CompleteAnnotationHeader,
    pub member_seq: Vec<CompleteAnnotationParameter>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinimalAnnotationType {
    pub annotation_flag: AnnotationTypeFlag,
    pub header: MinimalAnnotationHeader,
    pub member_seq: Vec<MinimalAnnotationParameter>,
}

impl CompleteAnnotationParameter {
    pub fn new(
        name: impl Into<String>,
        member_type_id: TypeIdentifier,
        default_value: AnnotationParameterValue,
    ) -> Self {
        Self {
            common: CommonAnnotationParameter {
                member_flags: AnnotationParameterFlag::empty(),
                member_type_id,
            },
            name: name.into(),
            default_value,
        }
    }
}

impl MinimalAnnotationParameter {
    pub fn new(
        name: &str,
        member_type_id: TypeIdentifier,
        default_value: AnnotationParameterValue,
    ) -> Self {
        Self {
            common: CommonAnnotationParameter {
                member_flags: AnnotationParameterFlag::empty(),
                member_type_id,
            },
            name_hash: NameHash::from_name(name),
            default_value,
        }
    }
}

impl CompleteAnnotationType {
    pub fn new(name: impl Into<String>, member_seq: Vec<CompleteAnnotationParameter>) -> Self {
        Self {
            annotation_flag: AnnotationTypeFlag::empty(),
            header: CompleteAnnotationHeader {
                annotation_name: name.into(),
            },
            member_seq,
        }
    }
}

impl MinimalAnnotationType {
    pub fn new(member_seq: Vec<MinimalAnnotationParameter>) -> Self {
        Self {
            annotation_flag: AnnotationTypeFlag::empty(),
            header: MinimalAnnotationHeader {},
            member_seq,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_value_discriminator() {
        assert_eq!(AnnotationParameterValue::Int32(3).discriminator(), 0x04);
        assert_eq!(
            AnnotationParameterValue::String8("m".into()).discriminator(),
            TypeKind::TK_STRING8.as_u8()
        );
        assert_eq!(AnnotationParameterValue::Enumerated(1).discriminator(), 0x40);
        assert_eq!(AnnotationParameterValue::Extended(0x7E).discriminator(), 0x7E);
    }

    #[test]
    fn test_annotation_type_builders() {
        let complete = CompleteAnnotationType::new(
            "range",
            vec![CompleteAnnotationParameter::new(
                "min",
                TypeIdentifier::TK_INT32,
                AnnotationParameterValue::Int32(0),
            )],
        );
        assert_eq!(complete.header.annotation_name, "range");
        assert_eq!(complete.member_seq[0].name, "min");

        let minimal = MinimalAnnotationType::new(vec![MinimalAnnotationParameter::new(
            "min",
            TypeIdentifier::TK_INT32,
            AnnotationParameterValue::Int32(0),
        )]);
        assert_eq!(minimal.member_seq[0].name_hash, NameHash::from_name("min"));
    }
}
