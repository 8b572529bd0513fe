// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type, member and element detail records.
//!
//! Complete details carry names and annotations; minimal details carry only
//! a [`NameHash`] (members) or nothing at all (types).

use super::annotations::{
    AppliedAnnotation, AppliedBuiltinMemberAnnotations, AppliedBuiltinTypeAnnotations,
};
use crate::xtypes::NameHash;

/// CompleteTypeDetail - Complete type metadata
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompleteTypeDetail {
    pub ann_builtin: Option<AppliedBuiltinTypeAnnotations>,
    pub ann_custom: Option<Vec<AppliedAnnotation>>,
    /// Fully qualified type name, e.g. "geometry::Point"
    pub type_name: String,
}

impl CompleteTypeDetail {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            ann_builtin: None,
            ann_custom: None,
            type_name: type_name.into(),
        }
    }
}

/// MinimalTypeDetail - empty, kept for structural symmetry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinimalTypeDetail {}

/// CompleteMemberDetail - Complete member metadata
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompleteMemberDetail {
    pub name: String,
    pub ann_builtin: Option<AppliedBuiltinMemberAnnotations>,
    pub ann_custom: Option<Vec<AppliedAnnotation>>,
}

impl CompleteMemberDetail {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ann_builtin: None,
            ann_custom: None,
        }
    }

    /// Minimal counterpart of this detail.
    pub fn to_minimal(&self) -> MinimalMemberDetail {
        MinimalMemberDetail::from_name(&self.name)
    }
}

/// MinimalMemberDetail - Minimal member metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MinimalMemberDetail {
    pub name_hash: NameHash,
}

impl MinimalMemberDetail {
    pub fn from_name(name: &str) -> Self {
        Self {
            name_hash: NameHash::from_name(name),
        }
    }
}

/// CompleteElementDetail - annotations on a collection element
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompleteElementDetail {
    pub ann_builtin: Option<AppliedBuiltinMemberAnnotations>,
    pub ann_custom: Option<Vec<AppliedAnnotation>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_detail_to_minimal_hashes_name() {
        let detail = CompleteMemberDetail::new("temperature");
        assert_eq!(
            detail.to_minimal(),
            MinimalMemberDetail::from_name("temperature")
        );
    }

    #[test]
    fn test_type_detail_new() {
        let detail = CompleteTypeDetail::new("sensors::Reading");
        assert_eq!(detail.type_name, "sensors::Reading");
        assert!(detail.ann_builtin.is_none());
        assert!(detail.ann_custom.is_none());
    }
}
