// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! XTypes v1.3 - type representation and assignability for DDS
//!
//! Implementation of the OMG DDS-XTypes v1.3 TypeObject model, its XCDR2
//! encoding, and the rules deciding whether two types may be matched.
//!
//! # Overview
//!
//! - **TypeIdentifier**: inline description (primitive, string, plain
//!   collection) or hash reference to a TypeObject
//! - **TypeObject**: Complete (named) or Minimal (hashed names) description
//! - **TypeRegistry**: resolves hash references and alias targets
//! - **Consistency**: `consistent(local, remote, policy, registry)`
//!
//! # Type Identification
//!
//! ```ignore
//! use hdds_xtypes::{EquivalenceHash, TypeIdentifier};
//!
//! // Primitive types (no hashing needed)
//! let int32_id = TypeIdentifier::TK_INT32;
//!
//! // Strings (bounded)
//! let string_id = TypeIdentifier::string(256);
//!
//! // Complex types (hash-based)
//! let struct_id = type_object.type_identifier()?;
//! ```
//!
//! # Type Consistency
//!
//! ```ignore
//! use hdds_xtypes::{consistent, TypeConsistencyEnforcementQosPolicy};
//!
//! let policy = TypeConsistencyEnforcementQosPolicy::allow();
//! assert!(consistent(&reader_type, &writer_type, &policy, &registry));
//! ```
//!
//! # Specification References
//!
//! - **OMG DDS-XTypes v1.3**: <https://www.omg.org/spec/DDS-XTypes/1.3/>
//! - **TypeObject IDL**: <https://www.omg.org/spec/DDS-XTypes/20190301/dds-xtypes_typeobject.idl>
//!
//! # Feature Flags
//!
//! - `xtypes` (default): MD5-based EquivalenceHash and NameHash (requires `md-5`)

pub mod cdr2;
pub mod consistency;
pub mod equivalence;
pub mod registry;
pub mod type_id;
pub mod type_information;
pub mod type_kind;
pub mod type_object;

pub use cdr2::MAX_IDENTIFIER_NESTING;
pub use equivalence::{EquivalenceHash, NameHash};
pub use registry::{TypeLookup, TypeRegistry};
pub use type_id::{
    EquivalenceKind, PlainCollectionHeader, StronglyConnectedComponentId, TypeIdentifier,
    EK_BOTH, EK_COMPLETE, EK_MINIMAL,
};
pub use type_information::*;
pub use type_kind::TypeKind;
pub use type_object::*;
