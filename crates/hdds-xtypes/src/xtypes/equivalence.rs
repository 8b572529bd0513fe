// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! EquivalenceHash and NameHash per OMG DDS-XTypes v1.3 specification
//!
//! Section 7.3.4.8: TypeIdentifier Hash computation

use std::fmt;

/// EquivalenceHash - 14-byte MD5 hash for TypeIdentifier
///
/// MD5 of the XCDR2 serialization of a TypeObject, truncated to 14 bytes.
///
/// # Example
///
/// ```ignore
/// use hdds_xtypes::{encode_to_vec, EquivalenceHash};
///
/// let bytes = encode_to_vec(&type_object)?;
/// let hash = EquivalenceHash::compute(&bytes);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EquivalenceHash([u8; 14]);

impl EquivalenceHash {
    pub const fn from_bytes(bytes: [u8; 14]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 14] {
        &self.0
    }

    /// Create a zero hash (for testing/placeholder)
    pub const fn zero() -> Self {
        Self([0u8; 14])
    }

    /// Compute EquivalenceHash from XCDR2-encoded TypeObject bytes
    #[cfg(feature = "xtypes")]
    pub fn compute(cdr2_data: &[u8]) -> Self {
        let digest = md5_digest(cdr2_data);
        let mut bytes = [0u8; 14];
        bytes.copy_from_slice(&digest[..14]);
        Self(bytes)
    }

    /// Compute EquivalenceHash (fallback when feature "xtypes" disabled)
    ///
    /// Returns a zero hash; the real implementation requires the "xtypes" feature.
    #[cfg(not(feature = "xtypes"))]
    pub fn compute(_cdr2_data: &[u8]) -> Self {
        Self::zero()
    }
}

impl fmt::Debug for EquivalenceHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EquivalenceHash({})", self)
    }
}

impl fmt::Display for EquivalenceHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl From<[u8; 14]> for EquivalenceHash {
    fn from(bytes: [u8; 14]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for EquivalenceHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// NameHash - first 4 bytes of the MD5 of a member name
///
/// Minimal representations carry this in place of the name itself.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NameHash(pub [u8; 4]);

impl NameHash {
    #[cfg(feature = "xtypes")]
    pub fn from_name(name: &str) -> Self {
        let digest = md5_digest(name.as_bytes());
        Self([digest[0], digest[1], digest[2], digest[3]])
    }

    #[cfg(not(feature = "xtypes"))]
    pub fn from_name(_name: &str) -> Self {
        Self::default()
    }

    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Debug for NameHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NameHash({:02x}{:02x}{:02x}{:02x})",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

#[cfg(feature = "xtypes")]
fn md5_digest(data: &[u8]) -> [u8; 16] {
    use md5::{Digest, Md5};

    let mut hasher = Md5::new();
    hasher.update(data);
    let mut digest = [0u8; 16];
    digest.copy_from_slice(&hasher.finalize());
    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equivalence_hash_from_bytes() {
        let bytes = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14];
        let hash = EquivalenceHash::from_bytes(bytes);
        assert_eq!(hash.as_bytes(), &bytes);
        assert_ne!(hash, EquivalenceHash::zero());
    }

    #[test]
    fn test_equivalence_hash_display() {
        let hash = EquivalenceHash::from_bytes([0xAB; 14]);
        assert_eq!(hash.to_string(), "ab".repeat(14));
        assert!(format!("{:?}", hash).starts_with("EquivalenceHash(abab"));
    }

    #[cfg(feature = "xtypes")]
    #[test]
    fn test_equivalence_hash_compute_is_truncated_md5() {
        // MD5("") = d41d8cd98f00b204e9800998ecf8427e
        let hash = EquivalenceHash::compute(b"");
        assert_eq!(hash.to_string(), "d41d8cd98f00b204e9800998ecf8");
    }

    #[cfg(feature = "xtypes")]
    #[test]
    fn test_name_hash_from_name() {
        // MD5("") prefix
        assert_eq!(NameHash::from_name("").0, [0xd4, 0x1d, 0x8c, 0xd9]);
        assert_eq!(NameHash::from_name("x"), NameHash::from_name("x"));
        assert_ne!(NameHash::from_name("x"), NameHash::from_name("y"));
    }
}
