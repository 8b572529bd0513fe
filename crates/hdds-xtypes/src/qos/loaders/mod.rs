// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type consistency policy loaders for XML and YAML profiles.
//!
//! # Example
//!
//! ```rust,ignore
//! use hdds_xtypes::qos::loaders::{FastDdsLoader, YamlLoader};
//!
//! let policy = YamlLoader::load_policy("qos_profiles.yaml", Some("strict_reader"))?;
//! let policy = FastDdsLoader::load_policy("fastdds_profiles.xml")?;
//! ```

#[cfg(feature = "qos-loaders")]
pub mod fastdds;

#[cfg(feature = "qos-loaders")]
pub mod yaml;

#[cfg(feature = "qos-loaders")]
pub use fastdds::FastDdsLoader;

#[cfg(feature = "qos-loaders")]
pub use yaml::{YamlLoader, YamlPolicyDocument, YamlPolicyProfile, YamlTypeConsistency};

#[cfg(feature = "qos-loaders")]
fn read_profile_file(path: &std::path::Path) -> crate::Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            crate::Error::ConfigFileNotFound(path.display().to_string())
        } else {
            crate::Error::Config(format!("Failed to read {}: {}", path.display(), e))
        }
    })
}
