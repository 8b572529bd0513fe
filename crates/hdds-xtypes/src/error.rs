// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Crate-level error type.

use crate::ser::CdrError;
use std::fmt;

/// Errors surfaced by the public API.
///
/// Codec failures keep their [`CdrError`] cause. Consistency checking never
/// fails with an error: an incompatible pair simply yields `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ========================================================================
    // Codec Errors
    // ========================================================================
    /// XCDR2 encoding or decoding failed.
    SerializationError(CdrError),
    /// Deflate compression or decompression of a TypeObject failed.
    Compression(String),

    // ========================================================================
    // Contract Errors
    // ========================================================================
    /// A discriminated value did not hold the requested variant.
    WrongVariant {
        expected: &'static str,
        found: &'static str,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Generic configuration error (malformed document, missing section).
    Config(String),
    /// QoS policy value is invalid (unknown kind string, bad parameter length).
    InvalidQos(String),
    /// Configuration file not found at specified path.
    ConfigFileNotFound(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SerializationError(err) => write!(f, "XCDR2 serialization failed: {}", err),
            Error::Compression(reason) => write!(f, "TypeObject compression failed: {}", reason),
            Error::WrongVariant { expected, found } => {
                write!(f, "wrong variant: expected {}, found {}", expected, found)
            }
            Error::Config(reason) => write!(f, "configuration error: {}", reason),
            Error::InvalidQos(reason) => write!(f, "invalid QoS: {}", reason),
            Error::ConfigFileNotFound(path) => write!(f, "configuration file not found: {}", path),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::SerializationError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CdrError> for Error {
    fn from(err: CdrError) -> Self {
        Error::SerializationError(err)
    }
}

/// Result alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;
