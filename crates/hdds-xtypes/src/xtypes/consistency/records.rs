// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Consistency rules for TypeObject records.

use super::{resolve_and_compare, ConsistencyContext, Consistent, Representation};
use crate::xtypes::type_object::*;
use crate::xtypes::TypeIdentifier;

/// Record is consistent when every listed field is.
macro_rules! impl_consistent_fields {
    ($($ty:ty => $($field:ident),+;)+) => {
        $(
            impl Consistent for $ty {
                fn consistent(&self, other: &Self, ctx: &mut ConsistencyContext<'_>) -> bool {
                    $(self.$field.consistent(&other.$field, ctx))&&+
                }
            }
        )+
    };
}

/// Records that never constrain matching.
macro_rules! impl_consistent_always {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Consistent for $ty {
                fn consistent(&self, _other: &Self, _ctx: &mut ConsistencyContext<'_>) -> bool {
                    true
                }
            }
        )+
    };
}

// Type names, element annotations and annotation definitions are not compared.
impl_consistent_always!(
    CompleteTypeDetail,
    MinimalTypeDetail,
    CompleteElementDetail,
    AppliedAnnotation,
    CompleteAnnotationType,
    MinimalAnnotationType,
);

impl Consistent for CompleteMemberDetail {
    fn consistent(&self, other: &Self, ctx: &mut ConsistencyContext<'_>) -> bool {
        !ctx.names_must_match() || self.name == other.name
    }
}

impl Consistent for MinimalMemberDetail {
    fn consistent(&self, other: &Self, ctx: &mut ConsistencyContext<'_>) -> bool {
        !ctx.names_must_match() || self.name_hash == other.name_hash
    }
}

// --- structures ---

impl Consistent for CommonStructMember {
    fn consistent(&self, other: &Self, ctx: &mut ConsistencyContext<'_>) -> bool {
        self.member_id == other.member_id
            && self.member_type_id.consistent(&other.member_type_id, ctx)
    }
}

impl_consistent_fields! {
    CompleteStructMember => common, detail;
    MinimalStructMember => common, detail;
    CompleteStructHeader => base_type, detail;
    MinimalStructHeader => base_type, detail;
    CompleteStructType => header, member_seq;
    MinimalStructType => header, member_seq;
}

// --- unions ---

impl Consistent for CommonUnionMember {
    fn consistent(&self, other: &Self, ctx: &mut ConsistencyContext<'_>) -> bool {
        self.member_id == other.member_id
            && self.type_id.consistent(&other.type_id, ctx)
            && self.label_seq == other.label_seq
    }
}

impl_consistent_fields! {
    CompleteUnionMember => common, detail;
    MinimalUnionMember => common, detail;
    CommonDiscriminatorMember => type_id;
    CompleteDiscriminatorMember => common;
    MinimalDiscriminatorMember => common;
    CompleteUnionHeader => detail;
    MinimalUnionHeader => detail;
    CompleteUnionType => header, discriminator, member_seq;
    MinimalUnionType => header, discriminator, member_seq;
}

// --- aliases ---
//
// Reached only when alias records are compared directly; TypeObject
// comparison resolves aliases first.

impl Consistent for CompleteAliasType {
    fn consistent(&self, other: &Self, ctx: &mut ConsistencyContext<'_>) -> bool {
        self.related_type().consistent(other.related_type(), ctx)
    }
}

impl Consistent for MinimalAliasType {
    fn consistent(&self, other: &Self, ctx: &mut ConsistencyContext<'_>) -> bool {
        self.related_type().consistent(other.related_type(), ctx)
    }
}

// --- collections ---

impl Consistent for CommonCollectionHeader {
    fn consistent(&self, other: &Self, ctx: &mut ConsistencyContext<'_>) -> bool {
        ctx.collection_bound_ok(self.bound, other.bound)
    }
}

impl Consistent for CommonArrayHeader {
    fn consistent(&self, other: &Self, ctx: &mut ConsistencyContext<'_>) -> bool {
        ctx.array_bounds_ok(&self.bound_seq, &other.bound_seq)
    }
}

impl_consistent_fields! {
    CompleteCollectionHeader => common;
    MinimalCollectionHeader => common;
    CommonCollectionElement => type_id;
    CompleteCollectionElement => common, detail;
    MinimalCollectionElement => common;
    CompleteSequenceType => header, element;
    MinimalSequenceType => header, element;
    CompleteArrayHeader => common, detail;
    MinimalArrayHeader => common;
    CompleteArrayType => header, element;
    MinimalArrayType => header, element;
    CompleteMapType => header, key, element;
    MinimalMapType => header, key, element;
}

// --- enumerations and bitmasks ---

impl Consistent for CommonEnumeratedHeader {
    fn consistent(&self, other: &Self, ctx: &mut ConsistencyContext<'_>) -> bool {
        ctx.bit_bound_ok(self.bit_bound, other.bit_bound)
    }
}

// Literals match by value; their names are not compared.
impl Consistent for CommonEnumeratedLiteral {
    fn consistent(&self, other: &Self, _ctx: &mut ConsistencyContext<'_>) -> bool {
        self.value == other.value
    }
}

impl Consistent for CommonBitflag {
    fn consistent(&self, other: &Self, _ctx: &mut ConsistencyContext<'_>) -> bool {
        self.position == other.position
    }
}

impl_consistent_fields! {
    CompleteEnumeratedHeader => common, detail;
    MinimalEnumeratedHeader => common;
    CompleteEnumeratedLiteral => common;
    MinimalEnumeratedLiteral => common;
    CompleteEnumeratedType => header, literal_seq;
    MinimalEnumeratedType => header, literal_seq;
    CompleteBitflag => common, detail;
    MinimalBitflag => common, detail;
    CompleteBitmaskType => header, flag_seq;
    MinimalBitmaskType => header, flag_seq;
}

// --- bitsets ---

impl Consistent for CommonBitfield {
    fn consistent(&self, other: &Self, _ctx: &mut ConsistencyContext<'_>) -> bool {
        self.position == other.position
            && self.bitcount == other.bitcount
            && self.holder_type == other.holder_type
    }
}

impl Consistent for MinimalBitfield {
    fn consistent(&self, other: &Self, ctx: &mut ConsistencyContext<'_>) -> bool {
        self.common.consistent(&other.common, ctx)
            && (!ctx.names_must_match() || self.name_hash == other.name_hash)
    }
}

impl_consistent_fields! {
    CompleteBitfield => common, detail;
    CompleteBitsetHeader => base_type, detail;
    MinimalBitsetHeader => base_type;
    CompleteBitsetType => header, field_seq;
    MinimalBitsetType => header, field_seq;
}

// --- type objects ---

/// Kind dispatch shared by both representations.
macro_rules! impl_representation {
    ($repr:ident, $variant:ident) => {
        impl Representation for $repr {
            fn alias_target(&self) -> Option<&TypeIdentifier> {
                self.as_alias().map(|alias| alias.related_type())
            }

            fn from_object(object: &TypeObject) -> Option<&Self> {
                match object {
                    TypeObject::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            fn body_consistent(&self, other: &Self, ctx: &mut ConsistencyContext<'_>) -> bool {
                match (self, other) {
                    ($repr::Struct(l), $repr::Struct(r)) => l.consistent(r, ctx),
                    ($repr::Union(l), $repr::Union(r)) => l.consistent(r, ctx),
                    ($repr::Bitset(l), $repr::Bitset(r)) => l.consistent(r, ctx),
                    ($repr::Sequence(l), $repr::Sequence(r)) => l.consistent(r, ctx),
                    ($repr::Array(l), $repr::Array(r)) => l.consistent(r, ctx),
                    ($repr::Map(l), $repr::Map(r)) => l.consistent(r, ctx),
                    ($repr::Enumerated(l), $repr::Enumerated(r)) => l.consistent(r, ctx),
                    ($repr::Bitmask(l), $repr::Bitmask(r)) => l.consistent(r, ctx),
                    ($repr::Annotation(l), $repr::Annotation(r)) => l.consistent(r, ctx),
                    ($repr::Alias(l), $repr::Alias(r)) => l.consistent(r, ctx),
                    ($repr::Extended(l), $repr::Extended(r)) => l == r,
                    _ => {
                        log::debug!(
                            "[XTYPES] Type kind mismatch: 0x{:02x} vs 0x{:02x}",
                            self.discriminator(),
                            other.discriminator()
                        );
                        false
                    }
                }
            }
        }

        impl Consistent for $repr {
            fn consistent(&self, other: &Self, ctx: &mut ConsistencyContext<'_>) -> bool {
                resolve_and_compare(self, other, ctx)
            }
        }
    };
}

impl_representation!(CompleteTypeObject, Complete);
impl_representation!(MinimalTypeObject, Minimal);
