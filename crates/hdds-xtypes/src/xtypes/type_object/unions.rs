// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Union type descriptions.

use super::annotations::{AppliedAnnotation, AppliedBuiltinTypeAnnotations};
use super::details::{
    CompleteMemberDetail, CompleteTypeDetail, MinimalMemberDetail, MinimalTypeDetail,
};
use super::flags::{UnionDiscriminatorFlag, UnionMemberFlag, UnionTypeFlag};
use super::structs::MemberId;
use crate::xtypes::TypeIdentifier;

/// Info shared between Complete and Minimal union members
#[derive(Debug, Clone, PartialEq)]
pub struct CommonUnionMember {
    pub member_id: MemberId,
    pub member_flags: UnionMemberFlag,
    pub type_id: TypeIdentifier,
    /// Case labels selecting this member
    pub label_seq: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompleteUnionMember {
    pub common: CommonUnionMember,
    pub detail: CompleteMemberDetail,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinimalUnionMember {
    pub common: CommonUnionMember,
    pub detail: MinimalMemberDetail,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommonDiscriminatorMember {
    pub member_flags: UnionDiscriminatorFlag,
    pub type_id: TypeIdentifier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompleteDiscriminatorMember {
    pub common: CommonDiscriminatorMember,
    pub ann_builtin: Option<AppliedBuiltinTypeAnnotations>,
    pub ann_custom: Option<Vec<AppliedAnnotation>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinimalDiscriminatorMember {
    pub common: CommonDiscriminatorMember,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompleteUnionHeader {
    pub detail: CompleteTypeDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MinimalUnionHeader {
    pub detail: MinimalTypeDetail,
}

/// CompleteUnionType - Complete discriminated union description
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteUnionType {
    pub union_flags: UnionTypeFlag,
    pub header: CompleteUnionHeader,
    pub discriminator: CompleteDiscriminatorMember,
    pub member_seq: Vec<CompleteUnionMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinimalUnionType {
    pub union_flags: UnionTypeFlag,
    pub header: MinimalUnionHeader,
    pub discriminator: MinimalDiscriminatorMember,
    pub member_seq: Vec<MinimalUnionMember>,
}

impl CommonDiscriminatorMember {
    pub fn new(type_id: TypeIdentifier) -> Self {
        Self {
            member_flags: UnionDiscriminatorFlag::empty(),
            type_id,
        }
    }
}

impl CompleteUnionMember {
    pub fn new(
        member_id: MemberId,
        name: impl Into<String>,
        type_id: TypeIdentifier,
        label_seq: Vec<i32>,
    ) -> Self {
        Self {
            common: CommonUnionMember {
                member_id,
                member_flags: UnionMemberFlag::empty(),
                type_id,
                label_seq,
            },
            detail: CompleteMemberDetail::new(name),
        }
    }

    /// Mark this member as the `default:` branch.
    pub fn as_default(mut self) -> Self {
        self.common.member_flags = self.common.member_flags | UnionMemberFlag::IS_DEFAULT;
        self
    }
}

impl MinimalUnionMember {
    pub fn new(
        member_id: MemberId,
        name: &str,
        type_id: TypeIdentifier,
        label_seq: Vec<i32>,
    ) -> Self {
        Self {
            common: CommonUnionMember {
                member_id,
                member_flags: UnionMemberFlag::empty(),
                type_id,
                label_seq,
            },
            detail: MinimalMemberDetail::from_name(name),
        }
    }
}

impl CompleteUnionType {
    pub fn new(
        type_name: impl Into<String>,
        discriminator_type: TypeIdentifier,
        member_seq: Vec<CompleteUnionMember>,
    ) -> Self {
        Self {
            union_flags: UnionTypeFlag::IS_FINAL,
            header: CompleteUnionHeader {
                detail: CompleteTypeDetail::new(type_name),
            },
            discriminator: CompleteDiscriminatorMember {
                common: CommonDiscriminatorMember::new(discriminator_type),
                ann_builtin: None,
                ann_custom: None,
            },
            member_seq,
        }
    }

    pub fn to_minimal(&self) -> MinimalUnionType {
        MinimalUnionType {
            union_flags: self.union_flags,
            header: MinimalUnionHeader::default(),
            discriminator: MinimalDiscriminatorMember {
                common: self.discriminator.common.clone(),
            },
            member_seq: self
                .member_seq
                .iter()
                .map(|m| MinimalUnionMember {
                    common: m.common.clone(),
                    detail: m.detail.to_minimal(),
                })
                .collect(),
        }
    }
}

impl MinimalUnionType {
    pub fn new(discriminator_type: TypeIdentifier, member_seq: Vec<MinimalUnionMember>) -> Self {
        Self {
            union_flags: UnionTypeFlag::IS_FINAL,
            header: MinimalUnionHeader::default(),
            discriminator: MinimalDiscriminatorMember {
                common: CommonDiscriminatorMember::new(discriminator_type),
            },
            member_seq,
        }
    }
}
