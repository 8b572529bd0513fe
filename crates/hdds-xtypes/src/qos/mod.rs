// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! TypeConsistencyEnforcement QoS policy (DDS-XTypes v1.3 Section 7.6.3.4).
//!
//! Controls how strictly a reader's type must match a writer's type for the
//! two endpoints to be matched.
//!
//! # Example
//!
//! ```ignore
//! use hdds_xtypes::qos::TypeConsistencyEnforcementQosPolicy;
//!
//! let strict = TypeConsistencyEnforcementQosPolicy::disallow();
//! let relaxed = TypeConsistencyEnforcementQosPolicy::allow()
//!     .with_ignore_member_names(true)
//!     .with_prevent_type_widening(false);
//! ```

pub mod loaders;

use crate::error::{Error, Result};

/// PID_TYPE_CONSISTENCY parameter id
pub const PID_TYPE_CONSISTENCY: u16 = 0x0074;

/// Serialized length of the PID_TYPE_CONSISTENCY value (kind + 5 flags, padded)
pub const TYPE_CONSISTENCY_PARAMETER_LEN: usize = 8;

/// Whether a reader may accept a writer type that differs from its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeConsistencyKind {
    /// Types must match exactly in member count and shape
    DisallowTypeCoercion,
    /// Types may differ within the limits of the policy flags
    AllowTypeCoercion,
}

impl TypeConsistencyKind {
    pub const fn to_u16(self) -> u16 {
        match self {
            TypeConsistencyKind::DisallowTypeCoercion => 0,
            TypeConsistencyKind::AllowTypeCoercion => 1,
        }
    }

    pub fn from_u16(value: u16) -> Result<Self> {
        match value {
            0 => Ok(TypeConsistencyKind::DisallowTypeCoercion),
            1 => Ok(TypeConsistencyKind::AllowTypeCoercion),
            other => Err(Error::InvalidQos(format!(
                "unknown type consistency kind {}",
                other
            ))),
        }
    }

    /// Parse the IDL / XML spelling (`ALLOW_TYPE_COERCION`, ...).
    pub fn parse(text: &str) -> Result<Self> {
        match text.trim() {
            "DISALLOW_TYPE_COERCION" => Ok(TypeConsistencyKind::DisallowTypeCoercion),
            "ALLOW_TYPE_COERCION" => Ok(TypeConsistencyKind::AllowTypeCoercion),
            other => Err(Error::InvalidQos(format!(
                "unknown type consistency kind '{}'",
                other
            ))),
        }
    }
}

/// TypeConsistencyEnforcement QoS policy
///
/// Read-only input of the consistency engine. The relaxation flags only take
/// effect with [`TypeConsistencyKind::AllowTypeCoercion`], except
/// `prevent_type_widening`, which restricts both kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeConsistencyEnforcementQosPolicy {
    pub kind: TypeConsistencyKind,
    /// Accept collections whose remote bound exceeds the local bound
    pub ignore_sequence_bounds: bool,
    /// Accept strings whose remote bound exceeds the local bound
    pub ignore_string_bounds: bool,
    /// Match members by position/id only, not by name
    pub ignore_member_names: bool,
    /// Reject remote types with members the local type lacks
    pub prevent_type_widening: bool,
    /// Require type information even when type names match
    pub force_type_validation: bool,
}

impl Default for TypeConsistencyEnforcementQosPolicy {
    fn default() -> Self {
        Self {
            kind: TypeConsistencyKind::AllowTypeCoercion,
            ignore_sequence_bounds: true,
            ignore_string_bounds: true,
            ignore_member_names: false,
            prevent_type_widening: false,
            force_type_validation: false,
        }
    }
}

impl TypeConsistencyEnforcementQosPolicy {
    /// Strict policy: no coercion, no relaxation.
    pub fn disallow() -> Self {
        Self {
            kind: TypeConsistencyKind::DisallowTypeCoercion,
            ignore_sequence_bounds: false,
            ignore_string_bounds: false,
            ignore_member_names: false,
            prevent_type_widening: false,
            force_type_validation: false,
        }
    }

    /// Coercion allowed, every relaxation flag off.
    pub fn allow() -> Self {
        Self {
            kind: TypeConsistencyKind::AllowTypeCoercion,
            ..Self::disallow()
        }
    }

    pub fn with_kind(mut self, kind: TypeConsistencyKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_ignore_sequence_bounds(mut self, value: bool) -> Self {
        self.ignore_sequence_bounds = value;
        self
    }

    pub fn with_ignore_string_bounds(mut self, value: bool) -> Self {
        self.ignore_string_bounds = value;
        self
    }

    pub fn with_ignore_member_names(mut self, value: bool) -> Self {
        self.ignore_member_names = value;
        self
    }

    pub fn with_prevent_type_widening(mut self, value: bool) -> Self {
        self.prevent_type_widening = value;
        self
    }

    pub fn with_force_type_validation(mut self, value: bool) -> Self {
        self.force_type_validation = value;
        self
    }

    pub const fn allows_coercion(&self) -> bool {
        matches!(self.kind, TypeConsistencyKind::AllowTypeCoercion)
    }

    /// Encode the PID_TYPE_CONSISTENCY value (little-endian).
    ///
    /// Layout: kind u16, ignore_sequence_bounds u8, ignore_string_bounds u8,
    /// ignore_member_names u8, prevent_type_widening u8,
    /// force_type_validation u8, 1 byte padding.
    pub fn to_parameter_bytes(&self) -> [u8; TYPE_CONSISTENCY_PARAMETER_LEN] {
        let kind = self.kind.to_u16().to_le_bytes();
        [
            kind[0],
            kind[1],
            u8::from(self.ignore_sequence_bounds),
            u8::from(self.ignore_string_bounds),
            u8::from(self.ignore_member_names),
            u8::from(self.prevent_type_widening),
            u8::from(self.force_type_validation),
            0,
        ]
    }

    /// Decode a PID_TYPE_CONSISTENCY value.
    ///
    /// Older peers send only the first 4 bytes; missing flags take `false`.
    pub fn from_parameter_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < 4 {
            return Err(Error::InvalidQos(format!(
                "PID_TYPE_CONSISTENCY value too short: {} bytes",
                bytes.len()
            )));
        }
        let flag = |index: usize| bytes.get(index).is_some_and(|b| *b != 0);
        Ok(Self {
            kind: TypeConsistencyKind::from_u16(u16::from_le_bytes([bytes[0], bytes[1]]))?,
            ignore_sequence_bounds: flag(2),
            ignore_string_bounds: flag(3),
            ignore_member_names: flag(4),
            prevent_type_widening: flag(5),
            force_type_validation: flag(6),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_xtypes_defaults() {
        let policy = TypeConsistencyEnforcementQosPolicy::default();
        assert!(policy.allows_coercion());
        assert!(policy.ignore_sequence_bounds);
        assert!(policy.ignore_string_bounds);
        assert!(!policy.ignore_member_names);
        assert!(!policy.prevent_type_widening);
        assert!(!policy.force_type_validation);
    }

    #[test]
    fn test_builders() {
        let policy = TypeConsistencyEnforcementQosPolicy::disallow()
            .with_ignore_member_names(true)
            .with_prevent_type_widening(true);
        assert!(!policy.allows_coercion());
        assert!(policy.ignore_member_names);
        assert!(policy.prevent_type_widening);
        assert!(TypeConsistencyEnforcementQosPolicy::allow().allows_coercion());
    }

    #[test]
    fn test_parameter_bytes_roundtrip() {
        let policy = TypeConsistencyEnforcementQosPolicy::allow()
            .with_ignore_sequence_bounds(true)
            .with_prevent_type_widening(true);
        let bytes = policy.to_parameter_bytes();
        assert_eq!(bytes, [1, 0, 1, 0, 0, 1, 0, 0]);
        assert_eq!(
            TypeConsistencyEnforcementQosPolicy::from_parameter_bytes(&bytes),
            Ok(policy)
        );
    }

    #[test]
    fn test_parameter_bytes_short_and_invalid() {
        let short = TypeConsistencyEnforcementQosPolicy::from_parameter_bytes(&[0, 0, 1, 1])
            .expect("4-byte value should decode");
        assert!(!short.allows_coercion());
        assert!(short.ignore_string_bounds);
        assert!(!short.ignore_member_names);

        assert!(TypeConsistencyEnforcementQosPolicy::from_parameter_bytes(&[0, 0]).is_err());
        assert!(TypeConsistencyEnforcementQosPolicy::from_parameter_bytes(&[9, 0, 0, 0]).is_err());
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(
            TypeConsistencyKind::parse(" ALLOW_TYPE_COERCION "),
            Ok(TypeConsistencyKind::AllowTypeCoercion)
        );
        assert!(TypeConsistencyKind::parse("MAYBE").is_err());
    }
}
