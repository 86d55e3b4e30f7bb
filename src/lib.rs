//! Hushbox - authenticated encryption for locally persisted application data
//!
//! Hushbox turns small pieces of application state (a serialized favorites
//! list, a sync payload) into self-contained storable text blobs and back. A
//! blob is the standard base64 encoding of a random 12-byte nonce followed by
//! the AES-256-GCM ciphertext and tag. The encryption key is stretched from
//! an application-supplied passphrase and salt with PBKDF2-HMAC-SHA256 and
//! cached for the life of the [`Vault`].
//!
//! Where blobs are stored is entirely the caller's concern; hushbox performs
//! no I/O of its own.
//!
//! # Threat model
//!
//! If the embedding application ships one fixed passphrase to every
//! installation, this layer obfuscates stored data against casual inspection
//! only: anyone holding the application's secret material can recover the
//! key. Callers that want real confidentiality must supply per-user secret
//! material via [`Secret`].

#![forbid(unsafe_code)]

pub mod armor;
pub mod cipher;
pub mod error;
pub mod kdf;
pub mod secret;
pub mod vault;

pub use error::{Error, Result};
pub use secret::Secret;
pub use vault::Vault;
