//! Passphrase-based key derivation
//!
//! PBKDF2-HMAC-SHA256 with a fixed iteration count stretches the
//! application-supplied passphrase into a 256-bit AES key. Derivation is
//! deterministic: the same passphrase and salt always yield the same key.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

use crate::error::{Error, Result};

/// PBKDF2 iteration count
pub const ITERATIONS: u32 = 100_000;

/// Length of the derived key in bytes
pub const KEY_LEN: usize = 32;

/// A derived 256-bit encryption key, wiped from memory on drop.
///
/// The raw bytes never leave the crate.
#[derive(ZeroizeOnDrop)]
pub struct DerivedKey([u8; KEY_LEN]);

impl DerivedKey {
    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    #[cfg(test)]
    pub(crate) fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }
}

/// Derive a key from a passphrase and salt.
///
/// An empty passphrase or salt indicates a misconfigured embedding
/// application rather than meaningful secret material, and is rejected.
pub fn derive_key(passphrase: &[u8], salt: &[u8]) -> Result<DerivedKey> {
    if passphrase.is_empty() {
        return Err(Error::KeyDerivation("passphrase must not be empty".into()));
    }
    if salt.is_empty() {
        return Err(Error::KeyDerivation("salt must not be empty".into()));
    }

    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(passphrase, salt, ITERATIONS, &mut key);
    Ok(DerivedKey(key))
}
