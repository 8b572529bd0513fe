// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! YAML type consistency profile loader.
//!
//! # Example YAML
//!
//! ```yaml
//! default_profile: strict_reader
//!
//! profiles:
//!   strict_reader:
//!     type_consistency:
//!       kind: DISALLOW_TYPE_COERCION
//!
//!   tolerant_reader:
//!     type_consistency:
//!       kind: ALLOW_TYPE_COERCION
//!       ignore_member_names: true
//!       prevent_type_widening: false
//! ```

use crate::error::{Error, Result};
use crate::qos::{TypeConsistencyEnforcementQosPolicy, TypeConsistencyKind};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// YAML type consistency loader.
pub struct YamlLoader;

/// Root YAML document structure.
#[derive(Debug, Deserialize)]
pub struct YamlPolicyDocument {
    /// Named profiles.
    #[serde(default)]
    pub profiles: HashMap<String, YamlPolicyProfile>,

    /// Default profile name (optional).
    #[serde(default)]
    pub default_profile: Option<String>,
}

/// A single profile; only the type consistency section is read.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct YamlPolicyProfile {
    pub type_consistency: Option<YamlTypeConsistency>,
}

/// TypeConsistencyEnforcement in YAML. Absent flags keep their defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct YamlTypeConsistency {
    /// ALLOW_TYPE_COERCION or DISALLOW_TYPE_COERCION
    pub kind: Option<String>,
    pub ignore_sequence_bounds: Option<bool>,
    pub ignore_string_bounds: Option<bool>,
    pub ignore_member_names: Option<bool>,
    pub prevent_type_widening: Option<bool>,
    pub force_type_validation: Option<bool>,
}

impl YamlLoader {
    /// Load a policy document from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<YamlPolicyDocument> {
        let content = super::read_profile_file(path.as_ref())?;
        Self::parse_yaml(&content)
    }

    /// Parse YAML content.
    pub fn parse_yaml(yaml_content: &str) -> Result<YamlPolicyDocument> {
        serde_yaml::from_str(yaml_content)
            .map_err(|e| Error::Config(format!("Failed to parse YAML: {}", e)))
    }

    /// Get the policy of a named profile.
    pub fn get_profile(
        doc: &YamlPolicyDocument,
        name: &str,
    ) -> Result<TypeConsistencyEnforcementQosPolicy> {
        let profile = doc
            .profiles
            .get(name)
            .ok_or_else(|| Error::Config(format!("Profile '{}' not found", name)))?;
        Self::profile_to_policy(profile)
    }

    /// Get the policy of the default profile, or the default policy.
    pub fn get_default_profile(
        doc: &YamlPolicyDocument,
    ) -> Result<TypeConsistencyEnforcementQosPolicy> {
        match doc.default_profile {
            Some(ref name) => Self::get_profile(doc, name),
            None => Ok(TypeConsistencyEnforcementQosPolicy::default()),
        }
    }

    /// Convert a YAML profile to a policy.
    pub fn profile_to_policy(
        profile: &YamlPolicyProfile,
    ) -> Result<TypeConsistencyEnforcementQosPolicy> {
        let mut policy = TypeConsistencyEnforcementQosPolicy::default();
        let Some(ref tc) = profile.type_consistency else {
            return Ok(policy);
        };

        if let Some(ref kind) = tc.kind {
            policy.kind = TypeConsistencyKind::parse(&kind.to_uppercase())?;
        }
        if let Some(v) = tc.ignore_sequence_bounds {
            policy.ignore_sequence_bounds = v;
        }
        if let Some(v) = tc.ignore_string_bounds {
            policy.ignore_string_bounds = v;
        }
        if let Some(v) = tc.ignore_member_names {
            policy.ignore_member_names = v;
        }
        if let Some(v) = tc.prevent_type_widening {
            policy.prevent_type_widening = v;
        }
        if let Some(v) = tc.force_type_validation {
            policy.force_type_validation = v;
        }

        log::debug!("[XTYPES] Loaded type consistency policy {:?}", policy);
        Ok(policy)
    }

    /// Parse YAML content and pick a profile (`None` = default profile).
    pub fn parse_policy(
        yaml_content: &str,
        profile_name: Option<&str>,
    ) -> Result<TypeConsistencyEnforcementQosPolicy> {
        let doc = Self::parse_yaml(yaml_content)?;
        match profile_name {
            Some(name) => Self::get_profile(&doc, name),
            None => Self::get_default_profile(&doc),
        }
    }

    /// Load a single policy directly from file.
    pub fn load_policy<P: AsRef<Path>>(
        path: P,
        profile_name: Option<&str>,
    ) -> Result<TypeConsistencyEnforcementQosPolicy> {
        let content = super::read_profile_file(path.as_ref())?;
        Self::parse_policy(&content, profile_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_profile() {
        let yaml = r#"
profiles:
  tolerant:
    type_consistency:
      kind: ALLOW_TYPE_COERCION
      ignore_member_names: true
      ignore_sequence_bounds: false
"#;
        let policy =
            YamlLoader::parse_policy(yaml, Some("tolerant")).expect("profile should load");
        assert!(policy.allows_coercion());
        assert!(policy.ignore_member_names);
        assert!(!policy.ignore_sequence_bounds);
        assert!(policy.ignore_string_bounds);
    }

    #[test]
    fn test_default_profile() {
        let yaml = r#"
default_profile: strict
profiles:
  strict:
    type_consistency:
      kind: disallow_type_coercion
"#;
        let policy = YamlLoader::parse_policy(yaml, None).expect("default should load");
        assert!(!policy.allows_coercion());
    }

    #[test]
    fn test_profile_without_section_uses_defaults() {
        let yaml = "profiles:\n  empty: {}\n";
        let policy = YamlLoader::parse_policy(yaml, Some("empty")).expect("profile should load");
        assert_eq!(policy, TypeConsistencyEnforcementQosPolicy::default());
    }

    #[test]
    fn test_empty_document() {
        let policy = YamlLoader::parse_policy("{}", None).expect("empty doc should parse");
        assert_eq!(policy, TypeConsistencyEnforcementQosPolicy::default());
    }

    #[test]
    fn test_invalid_kind() {
        let yaml = r#"
profiles:
  bad:
    type_consistency:
      kind: SOMETIMES
"#;
        assert!(matches!(
            YamlLoader::parse_policy(yaml, Some("bad")),
            Err(Error::InvalidQos(_))
        ));
    }

    #[test]
    fn test_profile_not_found() {
        let yaml = "profiles: {}\n";
        assert!(matches!(
            YamlLoader::parse_policy(yaml, Some("missing")),
            Err(Error::Config(_))
        ));
    }
}
