// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Sequence, array and map descriptions.
//!
//! Used for collections that cannot be expressed by a plain TypeIdentifier
//! (annotated elements, named typedef'd collections).

use super::details::{CompleteElementDetail, CompleteTypeDetail};
use super::flags::{CollectionElementFlag, CollectionTypeFlag};
use crate::xtypes::TypeIdentifier;

/// Collection bound; `0` means unbounded.
pub type LBound = u32;

#[derive(Debug, Clone, PartialEq)]
pub struct CommonCollectionElement {
    pub element_flags: CollectionElementFlag,
    pub type_id: TypeIdentifier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompleteCollectionElement {
    pub common: CommonCollectionElement,
    pub detail: CompleteElementDetail,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinimalCollectionElement {
    pub common: CommonCollectionElement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommonCollectionHeader {
    pub bound: LBound,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompleteCollectionHeader {
    pub common: CommonCollectionHeader,
    /// Present only for named (typedef'd) collections
    pub detail: Option<CompleteTypeDetail>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinimalCollectionHeader {
    pub common: CommonCollectionHeader,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompleteSequenceType {
    pub collection_flag: CollectionTypeFlag,
    pub header: CompleteCollectionHeader,
    pub element: CompleteCollectionElement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinimalSequenceType {
    pub collection_flag: CollectionTypeFlag,
    pub header: MinimalCollectionHeader,
    pub element: MinimalCollectionElement,
}

/// Dimensions of an array, outermost first
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommonArrayHeader {
    pub bound_seq: Vec<LBound>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompleteArrayHeader {
    pub common: CommonArrayHeader,
    pub detail: CompleteTypeDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MinimalArrayHeader {
    pub common: CommonArrayHeader,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompleteArrayType {
    pub collection_flag: CollectionTypeFlag,
    pub header: CompleteArrayHeader,
    pub element: CompleteCollectionElement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinimalArrayType {
    pub collection_flag: CollectionTypeFlag,
    pub header: MinimalArrayHeader,
    pub element: MinimalCollectionElement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompleteMapType {
    pub collection_flag: CollectionTypeFlag,
    pub header: CompleteCollectionHeader,
    pub key: CompleteCollectionElement,
    pub element: CompleteCollectionElement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinimalMapType {
    pub collection_flag: CollectionTypeFlag,
    pub header: MinimalCollectionHeader,
    pub key: MinimalCollectionElement,
    pub element: MinimalCollectionElement,
}

impl CommonCollectionElement {
    pub fn new(type_id: TypeIdentifier) -> Self {
        Self {
            element_flags: CollectionElementFlag::empty(),
            type_id,
        }
    }
}

impl CompleteCollectionElement {
    pub fn new(type_id: TypeIdentifier) -> Self {
        Self {
            common: CommonCollectionElement::new(type_id),
            detail: CompleteElementDetail::default(),
        }
    }
}

impl MinimalCollectionElement {
    pub fn new(type_id: TypeIdentifier) -> Self {
        Self {
            common: CommonCollectionElement::new(type_id),
        }
    }
}

impl CompleteCollectionHeader {
    pub fn new(bound: LBound) -> Self {
        Self {
            common: CommonCollectionHeader { bound },
            detail: None,
        }
    }
}

impl MinimalCollectionHeader {
    pub fn new(bound: LBound) -> Self {
        Self {
            common: CommonCollectionHeader { bound },
        }
    }
}

impl CompleteSequenceType {
    pub fn new(element: TypeIdentifier, bound: LBound) -> Self {
        Self {
            collection_flag: CollectionTypeFlag::empty(),
            header: CompleteCollectionHeader::new(bound),
            element: CompleteCollectionElement::new(element),
        }
    }

    pub fn bound(&self) -> LBound {
        self.header.common.bound
    }
}

impl MinimalSequenceType {
    pub fn new(element: TypeIdentifier, bound: LBound) -> Self {
        Self {
            collection_flag: CollectionTypeFlag::empty(),
            header: MinimalCollectionHeader::new(bound),
            element: MinimalCollectionElement::new(element),
        }
    }

    pub fn bound(&self) -> LBound {
        self.header.common.bound
    }
}

impl CompleteArrayType {
    pub fn new(
        type_name: impl Into<String>,
        element: TypeIdentifier,
        bound_seq: Vec<LBound>,
    ) -> Self {
        Self {
            collection_flag: CollectionTypeFlag::empty(),
            header: CompleteArrayHeader {
                common: CommonArrayHeader { bound_seq },
                detail: CompleteTypeDetail::new(type_name),
            },
            element: CompleteCollectionElement::new(element),
        }
    }
}

impl MinimalArrayType {
    pub fn new(element: TypeIdentifier, bound_seq: Vec<LBound>) -> Self {
        Self {
            collection_flag: CollectionTypeFlag::empty(),
            header: MinimalArrayHeader {
                common: CommonArrayHeader { bound_seq },
            },
            element: MinimalCollectionElement::new(element),
        }
    }
}

impl CompleteMapType {
    pub fn new(key: TypeIdentifier, element: TypeIdentifier, bound: LBound) -> Self {
        Self {
            collection_flag: CollectionTypeFlag::empty(),
            header: CompleteCollectionHeader::new(bound),
            key: CompleteCollectionElement::new(key),
            element: CompleteCollectionElement::new(element),
        }
    }
}

impl MinimalMapType {
    pub fn new(key: TypeIdentifier, element: TypeIdentifier, bound: LBound) -> Self {
        Self {
            collection_flag: CollectionTypeFlag::empty(),
            header: MinimalCollectionHeader::new(bound),
            key: MinimalCollectionElement::new(key),
            element: MinimalCollectionElement::new(element),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_builders() {
        let seq = CompleteSequenceType::new(TypeIdentifier::TK_INT16, 10);
        assert_eq!(seq.bound(), 10);
        assert!(seq.header.detail.is_none());
        assert_eq!(MinimalSequenceType::new(TypeIdentifier::TK_INT16, 0).bound(), 0);
    }

    #[test]
    fn test_array_and_map_builders() {
        let arr = CompleteArrayType::new("Matrix", TypeIdentifier::TK_FLOAT32, vec![3, 3]);
        assert_eq!(arr.header.common.bound_seq, vec![3, 3]);
        assert_eq!(arr.header.detail.type_name, "Matrix");

        let map = MinimalMapType::new(TypeIdentifier::string(0), TypeIdentifier::TK_INT64, 16);
        assert_eq!(map.key.common.type_id, TypeIdentifier::string(0));
        assert_eq!(map.header.common.bound, 16);
    }
}
