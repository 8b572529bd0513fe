// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! FastDDS XML profile loader.
//!
//! Reads the `<type_consistency>` element of a `<data_reader>` profile.
//!
//! ```xml
//! <profiles>
//!   <data_reader profile_name="reader" is_default_profile="true">
//!     <qos>
//!       <type_consistency>
//!         <kind>ALLOW_TYPE_COERCION</kind>
//!         <ignore_member_names>true</ignore_member_names>
//!       </type_consistency>
//!     </qos>
//!   </data_reader>
//! </profiles>
//! ```

use crate::error::{Error, Result};
use crate::qos::{TypeConsistencyEnforcementQosPolicy, TypeConsistencyKind};
use roxmltree::{Document, Node};
use std::path::Path;

pub struct FastDdsLoader;

impl FastDdsLoader {
    /// Load the policy from a FastDDS XML file.
    pub fn load_policy<P: AsRef<Path>>(path: P) -> Result<TypeConsistencyEnforcementQosPolicy> {
        let xml_content = super::read_profile_file(path.as_ref())?;
        Self::parse_policy(&xml_content)
    }

    /// Parse FastDDS XML content and extract the type consistency policy.
    ///
    /// Uses the `<data_reader>` profile with `is_default_profile="true"`, or the
    /// first `<data_reader>` profile. A profile without `<type_consistency>`
    /// yields the default policy.
    pub fn parse_policy(xml_content: &str) -> Result<TypeConsistencyEnforcementQosPolicy> {
        let doc = Document::parse(xml_content)
            .map_err(|e| Error::Config(format!("Failed to parse XML: {}", e)))?;

        let root = doc.root_element();

        let profiles = root
            .descendants()
            .find(|n| n.tag_name().name() == "profiles")
            .ok_or_else(|| Error::Config("No <profiles> element found".to_string()))?;

        let profile = profiles
            .children()
            .filter(is_reader)
            .find(|n| n.attribute("is_default_profile") == Some("true"))
            .or_else(|| profiles.children().find(is_reader))
            .ok_or_else(|| Error::Config("No data_reader profile found".to_string()))?;

        Self::extract_policy(&profile)
    }

    fn extract_policy(profile: &Node) -> Result<TypeConsistencyEnforcementQosPolicy> {
        let mut policy = TypeConsistencyEnforcementQosPolicy::default();

        let Some(tc) = profile
            .descendants()
            .find(|n| n.tag_name().name() == "type_consistency")
        else {
            return Ok(policy);
        };

        if let Some(kind) = child_text(&tc, "kind") {
            policy.kind = TypeConsistencyKind::parse(kind)?;
        }
        if let Some(v) = child_bool(&tc, "ignore_sequence_bounds")? {
            policy.ignore_sequence_bounds = v;
        }
        if let Some(v) = child_bool(&tc, "ignore_string_bounds")? {
            policy.ignore_string_bounds = v;
        }
        if let Some(v) = child_bool(&tc, "ignore_member_names")? {
            policy.ignore_member_names = v;
        }
        if let Some(v) = child_bool(&tc, "prevent_type_widening")? {
            policy.prevent_type_widening = v;
        }
        if let Some(v) = child_bool(&tc, "force_type_validation")? {
            policy.force_type_validation = v;
        }

        log::debug!(
            "[XTYPES] Loaded type consistency policy from FastDDS XML: {:?}",
            policy
        );
        Ok(policy)
    }
}

fn is_reader(node: &Node) -> bool {
    node.is_element() && node.tag_name().name() == "data_reader"
}

fn child_text<'a>(node: &Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.children()
        .find(|n| n.tag_name().name() == name)
        .and_then(|n| n.text())
}

fn child_bool(node: &Node, name: &str) -> Result<Option<bool>> {
    match child_text(node, name).map(str::trim) {
        None => Ok(None),
        Some("true") => Ok(Some(true)),
        Some("false") => Ok(Some(false)),
        Some(other) => Err(Error::InvalidQos(format!(
            "<{}> expects true/false, got '{}'",
            name, other
        ))),
    }
}
