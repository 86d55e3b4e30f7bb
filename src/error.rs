use thiserror::Error;

/// Errors surfaced by the confidentiality layer.
///
/// Decryption failures are deliberately opaque: malformed base64, a truncated
/// body, a failed authentication tag, and non-UTF-8 plaintext all collapse
/// into [`Error::Decryption`]. Callers MUST treat any of them as "this blob
/// cannot be read", not as evidence of tampering; the message exists for
/// diagnostics only.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Key derivation could not produce a usable key. Fatal to every
    /// operation on the vault; in practice this means the embedding
    /// application supplied unusable secret material.
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// The cipher rejected a seal operation. Not expected under normal
    /// conditions.
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// The blob could not be decoded, authenticated, or read back as text.
    #[error("decryption failed: {0}")]
    Decryption(String),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, Error>;
