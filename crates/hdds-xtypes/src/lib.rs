// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! HDDS XTypes - type representation and type consistency for DDS
//!
//! This crate models the structural shape of DDS data types per OMG DDS-XTypes,
//! encodes that model in XCDR2, and decides whether a remote type can be matched
//! with a local one under a [`TypeConsistencyEnforcementQosPolicy`].
//!
//! # Overview
//!
//! - [`TypeIdentifier`]: compact reference to a type (inline or hash-based)
//! - [`TypeObject`]: Complete or Minimal structural description
//! - [`ser`]: size-then-write XCDR2 codec shared by every record
//! - [`consistent`]: the assignability check used by endpoint matching
//! - [`TypeRegistry`]: append-only concurrent map resolving hash references
//!
//! # Example
//!
//! ```ignore
//! use hdds_xtypes::{consistent, TypeConsistencyEnforcementQosPolicy, TypeRegistry};
//!
//! let registry = TypeRegistry::new();
//! let policy = TypeConsistencyEnforcementQosPolicy::default();
//! if consistent(&reader_type, &writer_type, &policy, &registry) {
//!     // proceed with the match
//! }
//! ```

pub mod error;
pub mod qos;
pub mod ser;
pub mod xtypes;

pub use error::{Error, Result};
pub use qos::{TypeConsistencyEnforcementQosPolicy, TypeConsistencyKind};
pub use ser::{decode_from_slice, encode_to_vec, Cdr2Decode, Cdr2Encode, CdrError};
pub use xtypes::consistency::{consistent, ConsistencyContext, Consistent};
pub use xtypes::registry::{TypeLookup, TypeRegistry};
pub use xtypes::*;

/// Crate version, as declared in Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
