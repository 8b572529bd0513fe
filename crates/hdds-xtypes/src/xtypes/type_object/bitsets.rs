// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Bitset descriptions.

use super::details::{CompleteMemberDetail, CompleteTypeDetail};
use super::flags::{BitsetMemberFlag, BitsetTypeFlag};
use crate::xtypes::{NameHash, TypeIdentifier, TypeKind};

/// Info shared between Complete and Minimal bitfields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonBitfield {
    /// First bit occupied by the field
    pub position: u16,
    pub flags: BitsetMemberFlag,
    /// Number of bits (1..=64)
    pub bitcount: u8,
    /// Integer kind the field value is exposed as
    pub holder_type: TypeKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompleteBitfield {
    pub common: CommonBitfield,
    pub detail: CompleteMemberDetail,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinimalBitfield {
    pub common: CommonBitfield,
    pub name_hash: NameHash,
}

/// Bitset header; `base_type` is `TK_NONE` unless the bitset inherits.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompleteBitsetHeader {
    pub base_type: TypeIdentifier,
    pub detail: CompleteTypeDetail,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MinimalBitsetHeader {
    pub base_type: TypeIdentifier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompleteBitsetType {
    pub bitset_flags: BitsetTypeFlag,
    pub header: CompleteBitsetHeader,
    pub field_seq: Vec<CompleteBitfield>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinimalBitsetType {
    pub bitset_flags: BitsetTypeFlag,
    pub header: MinimalBitsetHeader,
    pub field_seq: Vec<MinimalBitfield>,
}

impl CommonBitfield {
    pub fn new(position: u16, bitcount: u8, holder_type: TypeKind) -> Self {
        Self {
            position,
            flags: BitsetMemberFlag::empty(),
            bitcount,
            holder_type,
        }
    }
}

impl CompleteBitfield {
    pub fn new(
        name: impl Into<String>,
        position: u16,
        bitcount: u8,
        holder_type: TypeKind,
    ) -> Self {
        Self {
            common: CommonBitfield::new(position, bitcount, holder_type),
            detail: CompleteMemberDetail::new(name),
        }
    }
}

impl MinimalBitfield {
    pub fn new(name: &str, position: u16, bitcount: u8, holder_type: TypeKind) -> Self {
        Self {
            common: CommonBitfield::new(position, bitcount, holder_type),
            name_hash: NameHash::from_name(name),
        }
    }
}

impl CompleteBitsetType {
    pub fn new(type_name: impl Into<String>, field_seq: Vec<CompleteBitfield>) -> Self {
        Self {
            bitset_flags: BitsetTypeFlag::empty(),
            header: CompleteBitsetHeader {
                base_type: TypeIdentifier::TK_NONE,
                detail: CompleteTypeDetail::new(type_name),
            },
            field_seq,
        }
    }
}

impl MinimalBitsetType {
    pub fn new(field_seq: Vec<MinimalBitfield>) -> Self {
        Self {
            bitset_flags: BitsetTypeFlag::empty(),
            header: MinimalBitsetHeader::default(),
            field_seq,
        }
    }

    /// Total bits spanned by the fields.
    pub fn bit_span(&self) -> u32 {
        self.field_seq
            .iter()
            .map(|f| u32::from(f.common.position) + u32::from(f.common.bitcount))
            .max()
            .unwrap_or(0)
    }
}
