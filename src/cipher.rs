//! Authenticated encryption using AES-256-GCM
//!
//! Seals plaintext bytes into a self-contained binary body and opens it
//! again, verifying integrity. The body layout is:
//!
//! - nonce: 12 bytes
//! - ciphertext: plaintext length, followed by the 16-byte GCM tag

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::RngCore;
use rand::rngs::OsRng;

use crate::error::{Error, Result};
use crate::kdf::DerivedKey;

/// Length of nonce in bytes
pub const NONCE_LEN: usize = 12;

/// Length of the GCM authentication tag in bytes
pub const TAG_LEN: usize = 16;

/// Seal plaintext under a fresh random nonce.
///
/// Returns the binary body: nonce(12) + ciphertext+tag.
pub fn seal(key: &DerivedKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);

    seal_with_nonce(key, &nonce, plaintext)
}

/// Seal plaintext under a caller-provided nonce.
///
/// This function is ONLY for tests that need deterministic output. NEVER use
/// it in production - always use `seal()`, which draws a fresh random nonce.
/// Reusing a nonce under the same key forfeits both confidentiality and
/// integrity.
pub fn seal_with_nonce(
    key: &DerivedKey,
    nonce: &[u8; NONCE_LEN],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(key.as_bytes().into());
    let sealed = cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|_| Error::Encryption("cipher rejected the plaintext".into()))?;

    let mut body = Vec::with_capacity(NONCE_LEN + sealed.len());
    body.extend_from_slice(nonce);
    body.extend_from_slice(&sealed);

    Ok(body)
}

/// Open a sealed body, verifying the authentication tag.
pub fn open(key: &DerivedKey, body: &[u8]) -> Result<Vec<u8>> {
    if body.len() < NONCE_LEN {
        return Err(Error::Decryption(
            "input shorter than the nonce; likely truncated".into(),
        ));
    }
    let (nonce, sealed) = body.split_at(NONCE_LEN);

    let cipher = Aes256Gcm::new(key.as_bytes().into());
    cipher
        .decrypt(Nonce::from_slice(nonce), sealed)
        .map_err(|_| Error::Decryption("corrupt input, tampered-with data, or wrong key".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kdf;

    fn test_key() -> DerivedKey {
        kdf::derive_key(b"cipher test passphrase", b"cipher test salt").unwrap()
    }

    #[test]
    fn test_empty_plaintext() {
        let key = test_key();
        let body = seal(&key, b"").unwrap();
        assert_eq!(body.len(), NONCE_LEN + TAG_LEN);

        let opened = open(&key, &body).unwrap();
        assert_eq!(opened, b"");
    }

    #[test]
    fn test_small_plaintext() {
        let key = test_key();
        let body = seal(&key, b"hello").unwrap();
        assert_eq!(body.len(), NONCE_LEN + 5 + TAG_LEN);

        let opened = open(&key, &body).unwrap();
        assert_eq!(opened, b"hello");
    }

    #[test]
    fn test_all_byte_values() {
        let key = test_key();
        let plaintext: Vec<u8> = (0..=255).collect();

        let body = seal(&key, &plaintext).unwrap();
        let opened = open(&key, &body).unwrap();
        assert_eq!(opened, plaintext);
    }

    #[test]
    fn test_fresh_nonce_per_seal() {
        let key = test_key();
        let body1 = seal(&key, b"same plaintext").unwrap();
        let body2 = seal(&key, b"same plaintext").unwrap();

        // Distinct nonces make the whole body differ
        assert_ne!(body1[..NONCE_LEN], body2[..NONCE_LEN]);
        assert_ne!(body1, body2);

        assert_eq!(open(&key, &body1).unwrap(), b"same plaintext");
        assert_eq!(open(&key, &body2).unwrap(), b"same plaintext");
    }

    #[test]
    fn test_deterministic_seal() {
        let key = test_key();
        let nonce = [7u8; NONCE_LEN];

        let body1 = seal_with_nonce(&key, &nonce, b"hello world").unwrap();
        let body2 = seal_with_nonce(&key, &nonce, b"hello world").unwrap();
        assert_eq!(body1, body2);
    }

    /// Known-answer test. The expected body was computed with an independent
    /// AES-256-GCM implementation from the same key, nonce, and plaintext.
    #[test]
    fn test_known_answer() {
        let key = DerivedKey::from_bytes([0x42u8; 32]);
        let nonce = [0x24u8; NONCE_LEN];

        let body = seal_with_nonce(&key, &nonce, b"test payload").unwrap();

        #[rustfmt::skip]
        let expected: Vec<u8> = vec![
            0x24, 0x24, 0x24, 0x24, 0x24, 0x24, 0x24, 0x24,
            0x24, 0x24, 0x24, 0x24, 0x61, 0xf4, 0xb7, 0x35,
            0xc9, 0xb6, 0xa7, 0x47, 0x4a, 0x87, 0x43, 0xce,
            0x14, 0xbc, 0x3b, 0x78, 0x86, 0x3e, 0x5e, 0x79,
            0x4f, 0x41, 0xd7, 0x81, 0x6f, 0xf8, 0x29, 0x86,
        ];
        assert_eq!(body, expected);

        let opened = open(&key, &body).unwrap();
        assert_eq!(opened, b"test payload");
    }

    #[test]
    fn test_tamper_any_byte_fails() {
        let key = test_key();
        let body = seal(&key, b"tamper target").unwrap();

        for i in 0..body.len() {
            let mut tampered = body.clone();
            tampered[i] ^= 0x01;
            let result = open(&key, &tampered);
            assert!(result.is_err(), "flipping byte {} was not detected", i);
        }
    }

    #[test]
    fn test_wrong_key_fails() {
        let key = test_key();
        let other = kdf::derive_key(b"some other passphrase", b"cipher test salt").unwrap();

        let body = seal(&key, b"secret data").unwrap();
        let result = open(&other, &body);

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("corrupt input, tampered-with data, or wrong key")
        );
    }

    #[test]
    fn test_truncated_nonce() {
        let key = test_key();
        let result = open(&key, &[1, 2, 3]);

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("shorter than the nonce")
        );
    }

    #[test]
    fn test_nonce_only_body_fails() {
        let key = test_key();
        let body = seal(&key, b"some plaintext").unwrap();

        // A bare nonce parses as an empty ciphertext and must fail the tag
        // check, not panic or succeed.
        let result = open(&key, &body[..NONCE_LEN]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_body_fails() {
        let key = test_key();
        assert!(open(&key, b"").is_err());
    }
}
