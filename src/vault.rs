//! The confidentiality layer: plaintext in, opaque storable blob out
//!
//! A [`Vault`] owns the application-supplied secret material and derives its
//! encryption key lazily on first use. Encryption seals the UTF-8 bytes of
//! the plaintext under a fresh random nonce and armors the result; decryption
//! reverses the pipeline and verifies integrity along the way.

use std::sync::OnceLock;

use crate::armor;
use crate::cipher;
use crate::error::{Error, Result};
use crate::kdf::{self, DerivedKey};
use crate::secret::Secret;

/// Converts plaintext strings into authenticated, storable text blobs and
/// back, under a key derived from application-supplied secret material.
///
/// The vault holds no storage of its own and is safe to share across
/// threads; `encrypt` and `decrypt` take `&self` and need no external
/// coordination.
pub struct Vault {
    secret: Secret,
    key: OnceLock<DerivedKey>,
}

impl Vault {
    /// Create a vault over the given secret material.
    ///
    /// No key derivation happens here; the key is derived on the first
    /// encrypt or decrypt and reused for the life of the vault.
    pub fn new(secret: Secret) -> Self {
        Self {
            secret,
            key: OnceLock::new(),
        }
    }

    /// Return the cached key, deriving it on first call.
    ///
    /// Concurrent first callers may each run the derivation; PBKDF2 is
    /// deterministic, so every racer computes identical key material and the
    /// redundant work is the only cost.
    fn key(&self) -> Result<&DerivedKey> {
        if let Some(key) = self.key.get() {
            return Ok(key);
        }
        let derived = kdf::derive_key(self.secret.passphrase(), self.secret.salt())?;
        Ok(self.key.get_or_init(|| derived))
    }

    /// Encrypt plaintext into a self-contained base64 blob.
    ///
    /// Every call draws a fresh random nonce, so encrypting the same
    /// plaintext twice yields different blobs that decrypt identically.
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        let key = self.key()?;
        let body = cipher::seal(key, plaintext.as_bytes())?;
        Ok(armor::wrap(&body))
    }

    /// Decrypt a blob produced by [`encrypt`](Self::encrypt).
    ///
    /// Any failure - malformed base64, truncation, an authentication tag
    /// that does not verify, or decrypted bytes that are not UTF-8 - surfaces
    /// as a single [`Error::Decryption`]. Callers should treat an unreadable
    /// blob as missing data, not as proof of tampering.
    pub fn decrypt(&self, blob: &str) -> Result<String> {
        let body = armor::unwrap(blob)?;
        let key = self.key()?;
        let plaintext = cipher::open(key, &body)?;

        String::from_utf8(plaintext)
            .map_err(|e| Error::Decryption(format!("decrypted bytes are not valid UTF-8: {}", e)))
    }
}
