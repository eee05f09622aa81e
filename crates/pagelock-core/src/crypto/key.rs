//! Key derivation using PBKDF2-HMAC-SHA256.
//!
//! This module derives encryption keys from passwords. The parameters are
//! fixed constants shared by the encrypt and decrypt paths and by the
//! embedded browser-side decryption page; they must match exactly on both
//! sides because the blob does not record them.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{KEY_LEN, PBKDF2_ITERATIONS, SALT_LEN};

/// A cryptographic key derived from a password.
///
/// Key material is zeroized from memory when dropped, reducing the window of
/// exposure.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    /// The raw key bytes (zeroized on drop)
    key: [u8; KEY_LEN],
}

impl DerivedKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self { key: bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate cipher
    /// operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive an encryption key from a password and salt.
///
/// PBKDF2-HMAC-SHA256 with 100,000 iterations and a 32-byte output. The salt
/// length is enforced by the type: callers must hold exactly
/// [`SALT_LEN`](super::SALT_LEN) bytes.
///
/// # Security
///
/// - Same password + salt always produces the same key (deterministic)
/// - A different salt produces a different key (the salt is stored with the
///   ciphertext so decryption can recompute the key)
///
/// # Examples
///
/// ```
/// use pagelock_core::crypto::derive_key;
///
/// let salt = [7u8; 16];
/// let key = derive_key("my-password", &salt);
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
pub fn derive_key(password: &str, salt: &[u8; SALT_LEN]) -> DerivedKey {
    let mut key_bytes = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(
        password.as_bytes(),
        salt,
        PBKDF2_ITERATIONS,
        &mut key_bytes,
    );
    let key = DerivedKey::from_bytes(key_bytes);
    // Scrub the stack copy; the wrapper owns the only live copy now.
    key_bytes.zeroize();
    key
}
