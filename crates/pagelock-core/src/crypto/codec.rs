//! Encrypted blob codec.
//!
//! Encrypts plaintext into a self-describing blob and decrypts it back. The
//! blob layout is a wire contract consumed by the embedded browser-side
//! decryption page, so field order and widths are fixed:
//!
//! | Offset | Length    | Field      |
//! |--------|-----------|------------|
//! | 0      | 16        | Salt       |
//! | 16     | 16        | IV         |
//! | 32     | remainder | Ciphertext |
//!
//! The ciphertext is the PKCS#7-padded plaintext encrypted with AES-256-CBC
//! under a key derived from (password, salt). There is no authentication tag:
//! the scheme provides confidentiality but not integrity. A tampered blob
//! decrypts to garbage or fails padding removal. Adding a MAC would change
//! the wire format and break every existing protected page, so it must be
//! treated as a new format version, not a fix.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{PagelockError, Result};

use super::key::derive_key;
use super::policy::validate_password;
use super::{HEADER_LEN, IV_LEN, SALT_LEN};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Encrypt plaintext into a blob using a password.
///
/// Unless `allow_unsafe` is set, the password must satisfy the strength
/// policy; `allow_unsafe` is an explicit opt-out for callers who knowingly
/// accept a weak password. Empty passwords are rejected either way.
///
/// A fresh random salt and IV are generated on every call, so encrypting the
/// same plaintext with the same password twice produces different blobs.
///
/// # Errors
///
/// Returns [`PagelockError::WeakPassword`] on a policy violation and
/// [`PagelockError::EmptyPassword`] for an empty password. No partial blob is
/// ever produced.
///
/// # Examples
///
/// ```
/// use pagelock_core::crypto::{decrypt, encrypt};
///
/// let blob = encrypt(b"hello", "Sup3r-secret!", false).unwrap();
/// assert_eq!(decrypt(&blob, "Sup3r-secret!").unwrap(), b"hello");
/// ```
pub fn encrypt(plaintext: &[u8], password: &str, allow_unsafe: bool) -> Result<Vec<u8>> {
    if password.is_empty() {
        return Err(PagelockError::EmptyPassword);
    }
    if !allow_unsafe {
        validate_password(password)?;
    }

    let mut salt = [0u8; SALT_LEN];
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut salt);
    OsRng.fill_bytes(&mut iv);

    Ok(encrypt_with_entropy(plaintext, password, &salt, &iv))
}

/// Encrypt with caller-supplied salt and IV.
///
/// Split out so tests can pin the blob layout and ciphertext bytes with fixed
/// entropy. Production callers go through [`encrypt`], which draws both from
/// the OS random source.
pub(crate) fn encrypt_with_entropy(
    plaintext: &[u8],
    password: &str,
    salt: &[u8; SALT_LEN],
    iv: &[u8; IV_LEN],
) -> Vec<u8> {
    let key = derive_key(password, salt);
    let ciphertext =
        Aes256CbcEnc::new(key.as_bytes().into(), iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut blob = Vec::with_capacity(HEADER_LEN + ciphertext.len());
    blob.extend_from_slice(salt);
    blob.extend_from_slice(iv);
    blob.extend_from_slice(&ciphertext);
    blob
}

/// Decrypt a blob back to plaintext using a password.
///
/// The salt and IV are read from the blob and the key is recomputed with the
/// same derivation parameters as encryption.
///
/// # Errors
///
/// Returns [`PagelockError::MalformedBlob`] if the input is too short to
/// contain a salt and IV, and [`PagelockError::InvalidPadding`] if padding
/// removal fails after decryption. A wrong password and a corrupted blob both
/// surface as `InvalidPadding`; the two are deliberately indistinguishable.
pub fn decrypt(blob: &[u8], password: &str) -> Result<Vec<u8>> {
    if blob.len() < HEADER_LEN {
        return Err(PagelockError::MalformedBlob);
    }

    let (salt, rest) = blob.split_at(SALT_LEN);
    let (iv, ciphertext) = rest.split_at(IV_LEN);
    let salt: &[u8; SALT_LEN] = salt.try_into().map_err(|_| PagelockError::MalformedBlob)?;
    let iv: &[u8; IV_LEN] = iv.try_into().map_err(|_| PagelockError::MalformedBlob)?;

    let key = derive_key(password, salt);
    Aes256CbcDec::new(key.as_bytes().into(), iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| PagelockError::InvalidPadding)
}
