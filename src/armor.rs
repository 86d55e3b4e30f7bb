//! Text armoring of sealed bodies
//!
//! Blobs are standard base64 with padding, safe to drop into any text-valued
//! store (JSON documents, browser local storage, configuration files).

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::error::{Error, Result};

/// Encode a sealed body as a base64 blob.
pub fn wrap(body: &[u8]) -> String {
    STANDARD.encode(body)
}

/// Decode a base64 blob back into the sealed body bytes.
///
/// Rejects any input outside the standard base64 alphabet before any
/// cryptographic work happens downstream.
pub fn unwrap(blob: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(blob)
        .map_err(|e| Error::Decryption(format!("base64 decoding failed: {}", e)))
}
