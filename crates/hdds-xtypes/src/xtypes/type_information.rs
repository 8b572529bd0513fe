// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type information exchanged during discovery (Section 7.6.3.2.2).
//!
//! Endpoints announce a [`TypeInformation`] instead of full TypeObjects; peers
//! that do not know the referenced hashes fetch them separately.

use super::registry::TypeLookup;
use super::{TypeIdentifier, TypeObject};
use crate::ser::Cdr2Encode;

/// A TypeIdentifier paired with the object it designates
#[derive(Debug, Clone, PartialEq)]
pub struct TypeIdentifierTypeObjectPair {
    pub type_identifier: TypeIdentifier,
    pub type_object: TypeObject,
}

/// Minimal and complete identifiers of one type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeIdentifierPair {
    pub type_identifier1: TypeIdentifier,
    pub type_identifier2: TypeIdentifier,
}

/// Identifier plus the XCDR2 size of its TypeObject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeIdentifierWithSize {
    pub type_id: TypeIdentifier,
    pub typeobject_serialized_size: u32,
}

/// Identifier plus (part of) its transitive dependencies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeIdentifierWithDependencies {
    pub typeid_with_size: TypeIdentifierWithSize,
    /// Total number of dependencies, `-1` when not computed
    pub dependent_typeid_count: i32,
    pub dependent_typeids: Vec<TypeIdentifierWithSize>,
}

/// Announced in endpoint discovery data (PID_TYPE_INFORMATION)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInformation {
    pub minimal: TypeIdentifierWithDependencies,
    pub complete: TypeIdentifierWithDependencies,
}

impl TypeIdentifierWithSize {
    /// Size is taken from the registered object, or `0` when the
    /// identifier is not hash-based or not registered.
    pub fn from_lookup(type_id: TypeIdentifier, registry: &dyn TypeLookup) -> Self {
        let typeobject_serialized_size = registry
            .lookup(&type_id)
            .map(|obj| u32::try_from(obj.cdr2_size(0)).unwrap_or(u32::MAX))
            .unwrap_or(0);
        Self {
            type_id,
            typeobject_serialized_size,
        }
    }
}

impl TypeIdentifierWithDependencies {
    /// Entry without a dependency list.
    pub fn without_dependencies(typeid_with_size: TypeIdentifierWithSize) -> Self {
        Self {
            typeid_with_size,
            dependent_typeid_count: -1,
            dependent_typeids: Vec::new(),
        }
    }
}

impl TypeInformation {
    /// Build the announcement for a type registered under both identifiers.
    pub fn for_type(
        registry: &dyn TypeLookup,
        complete_id: TypeIdentifier,
        minimal_id: TypeIdentifier,
    ) -> Self {
        Self {
            minimal: TypeIdentifierWithDependencies::without_dependencies(
                TypeIdentifierWithSize::from_lookup(minimal_id, registry),
            ),
            complete: TypeIdentifierWithDependencies::without_dependencies(
                TypeIdentifierWithSize::from_lookup(complete_id, registry),
            ),
        }
    }
}
