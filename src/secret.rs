//! Application-supplied secret material

use std::fmt;

use zeroize::Zeroizing;

/// Passphrase and salt injected by the embedding application.
///
/// The vault stretches this pair into its encryption key. Two vaults built
/// over the same pair can read each other's blobs, so per-user isolation
/// requires per-user material. The passphrase is wrapped in `Zeroizing` and
/// wiped from memory when the secret is dropped.
pub struct Secret {
    passphrase: Zeroizing<Vec<u8>>,
    salt: Vec<u8>,
}

impl Secret {
    /// Creates secret material from a passphrase and salt.
    ///
    /// Both values are used verbatim. Empty values are rejected at key
    /// derivation time, not here.
    pub fn new(passphrase: impl Into<Vec<u8>>, salt: impl Into<Vec<u8>>) -> Self {
        Self {
            passphrase: Zeroizing::new(passphrase.into()),
            salt: salt.into(),
        }
    }

    pub(crate) fn passphrase(&self) -> &[u8] {
        &self.passphrase
    }

    pub(crate) fn salt(&self) -> &[u8] {
        &self.salt
    }
}

// Redacted: secret material must not leak through debug logging.
impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret").finish_non_exhaustive()
    }
}
