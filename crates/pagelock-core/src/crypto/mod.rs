//! Cryptographic operations for Pagelock.
//!
//! This module provides the password policy, key derivation, and the
//! encrypted-blob codec, built on well-audited libraries:
//! - **PBKDF2-HMAC-SHA256**: deliberately slow key derivation
//! - **AES-256-CBC** with PKCS#7 padding: block encryption
//!
//! ## Security Model
//!
//! - Passwords are gated by a strength policy before encryption (with an
//!   explicit, separately named opt-out for callers who accept weak passwords)
//! - Fresh random salt and IV per encryption; both stored with the ciphertext
//! - Derived keys zeroized from memory on drop
//! - No password or key material is ever persisted or logged
//!
//! ## Threat Model
//!
//! We defend against:
//! - Theft of the encrypted page or blob
//! - Precomputation attacks across encryptions (per-call random salt)
//!
//! We do NOT defend against:
//! - Tampering with the ciphertext (no authentication tag; see [`codec`])
//! - Unlimited offline guessing of a weak password beyond the iteration cost

pub mod codec;
pub mod key;
pub mod policy;

pub use codec::{decrypt, encrypt};
pub use key::{derive_key, DerivedKey};
pub use policy::{validate_password, PolicyViolation};

/// Length of the random salt prepended to every blob, in bytes.
pub const SALT_LEN: usize = 16;

/// Length of the CBC initialization vector, in bytes.
pub const IV_LEN: usize = 16;

/// Length of the derived AES-256 key, in bytes.
pub const KEY_LEN: usize = 32;

/// PBKDF2 iteration count. Fixed: the count is not stored in the blob, so
/// changing it breaks every previously encrypted blob.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Combined length of the salt and IV header preceding the ciphertext.
pub const HEADER_LEN: usize = SALT_LEN + IV_LEN;
