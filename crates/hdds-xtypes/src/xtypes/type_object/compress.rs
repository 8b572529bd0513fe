// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! TypeObject compression and decompression utilities.
//!
//! Large TypeObjects travel deflate-compressed (PID_TYPE_OBJECT_LB, 0x8021).
//!
//! ```text
//! TypeObject -> encode_to_vec() -> XCDR2 bytes -> compress_type_object() -> wire
//! wire -> decompress_type_object() -> XCDR2 bytes -> decode_from_slice() -> TypeObject
//! ```

use crate::error::{Error, Result};
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Upper bound on an inflated TypeObject.
pub const MAX_DECOMPRESSED_TYPE_OBJECT: usize = 16 * 1024 * 1024;

/// Decompress deflate-compressed TypeObject bytes.
pub fn decompress_type_object(compressed: &[u8]) -> Result<Vec<u8>> {
    decompress_type_object_limited(compressed, MAX_DECOMPRESSED_TYPE_OBJECT)
}

/// Decompress, failing once the output would exceed `limit` bytes.
pub fn decompress_type_object_limited(compressed: &[u8], limit: usize) -> Result<Vec<u8>> {
    // one byte past the limit tells "exactly at limit" from "over"
    let mut decoder = DeflateDecoder::new(compressed).take(limit as u64 + 1);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| Error::Compression(e.to_string()))?;
    if decompressed.len() > limit {
        return Err(Error::Compression(format!(
            "decompressed TypeObject exceeds {} bytes",
            limit
        )));
    }

    log::debug!(
        "[TYPE-OBJECT] Decompressed TypeObject: {} bytes -> {} bytes",
        compressed.len(),
        decompressed.len()
    );
    Ok(decompressed)
}

/// Compress XCDR2 TypeObject bytes with the default deflate level.
pub fn compress_type_object(encoded: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(encoded)
        .map_err(|e| Error::Compression(e.to_string()))?;
    let compressed = encoder
        .finish()
        .map_err(|e| Error::Compression(e.to_string()))?;

    log::debug!(
        "[TYPE-OBJECT] Compressed TypeObject: {} bytes -> {} bytes",
        encoded.len(),
        compressed.len()
    );
    Ok(compressed)
}
