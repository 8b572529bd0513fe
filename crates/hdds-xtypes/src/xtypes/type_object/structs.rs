// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Structure type descriptions.

use super::details::{
    CompleteMemberDetail, CompleteTypeDetail, MinimalMemberDetail, MinimalTypeDetail,
};
use super::flags::{StructMemberFlag, StructTypeFlag};
use crate::xtypes::TypeIdentifier;

/// MemberId - stable 32-bit member identifier
pub type MemberId = u32;

/// Info shared between Complete and Minimal struct members
#[derive(Debug, Clone, PartialEq)]
pub struct CommonStructMember {
    pub member_id: MemberId,
    pub member_flags: StructMemberFlag,
    pub member_type_id: TypeIdentifier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompleteStructMember {
    pub common: CommonStructMember,
    pub detail: CompleteMemberDetail,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinimalStructMember {
    pub common: CommonStructMember,
    pub detail: MinimalMemberDetail,
}

/// Struct header; `base_type` is `TK_NONE` when there is no inheritance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompleteStructHeader {
    pub base_type: TypeIdentifier,
    pub detail: CompleteTypeDetail,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MinimalStructHeader {
    pub base_type: TypeIdentifier,
    pub detail: MinimalTypeDetail,
}

/// CompleteStructType - Complete struct description
///
/// # Example
///
/// ```ignore
/// let point = CompleteStructType::new(
///     "geometry::Point",
///     vec![
///         CompleteStructMember::new(0, "x", TypeIdentifier::TK_INT32),
///         CompleteStructMember::new(1, "y", TypeIdentifier::TK_INT32),
///     ],
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteStructType {
    pub struct_flags: StructTypeFlag,
    pub header: CompleteStructHeader,
    pub member_seq: Vec<CompleteStructMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinimalStructType {
    pub struct_flags: StructTypeFlag,
    pub header: MinimalStructHeader,
    pub member_seq: Vec<MinimalStructMember>,
}

impl CommonStructMember {
    pub fn new(member_id: MemberId, member_type_id: TypeIdentifier) -> Self {
        Self {
            member_id,
            member_flags: StructMemberFlag::empty(),
            member_type_id,
        }
    }
}

impl CompleteStructMember {
    pub fn new(
        member_id: MemberId,
        name: impl Into<String>,
        member_type_id: TypeIdentifier,
    ) -> Self {
        Self {
            common: CommonStructMember::new(member_id, member_type_id),
            detail: CompleteMemberDetail::new(name),
        }
    }

    pub fn with_flags(mut self, flags: StructMemberFlag) -> Self {
        self.common.member_flags = flags;
        self
    }
}

impl MinimalStructMember {
    pub fn new(member_id: MemberId, name: &str, member_type_id: TypeIdentifier) -> Self {
        Self {
            common: CommonStructMember::new(member_id, member_type_id),
            detail: MinimalMemberDetail::from_name(name),
        }
    }

    pub fn with_flags(mut self, flags: StructMemberFlag) -> Self {
        self.common.member_flags = flags;
        self
    }
}

impl CompleteStructType {
    pub fn new(type_name: impl Into<String>, member_seq: Vec<CompleteStructMember>) -> Self {
        Self {
            struct_flags: StructTypeFlag::IS_APPENDABLE,
            header: CompleteStructHeader {
                base_type: TypeIdentifier::TK_NONE,
                detail: CompleteTypeDetail::new(type_name),
            },
            member_seq,
        }
    }

    pub fn with_base_type(mut self, base_type: TypeIdentifier) -> Self {
        self.header.base_type = base_type;
        self
    }

    pub fn with_flags(mut self, flags: StructTypeFlag) -> Self {
        self.struct_flags = flags;
        self
    }

    /// Minimal form; nested type identifiers are kept as they are.
    pub fn to_minimal(&self) -> MinimalStructType {
        MinimalStructType {
            struct_flags: self.struct_flags,
            header: MinimalStructHeader {
                base_type: self.header.base_type.clone(),
                detail: MinimalTypeDetail {},
            },
            member_seq: self
                .member_seq
                .iter()
                .map(|m| MinimalStructMember {
                    common: m.common.clone(),
                    detail: m.detail.to_minimal(),
                })
                .collect(),
        }
    }
}

impl MinimalStructType {
    pub fn new(member_seq: Vec<MinimalStructMember>) -> Self {
        Self {
            struct_flags: StructTypeFlag::IS_APPENDABLE,
            header: MinimalStructHeader::default(),
            member_seq,
        }
    }

    pub fn with_base_type(mut self, base_type: TypeIdentifier) -> Self {
        self.header.base_type = base_type;
        self
    }
}
