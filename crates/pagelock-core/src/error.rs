//! Error types for Pagelock core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these to
//! user-friendly messages. The core never includes password material, derived
//! keys, or plaintext contents in an error.

use thiserror::Error;

use crate::crypto::policy::PolicyViolation;

/// Result type alias for Pagelock operations.
pub type Result<T> = std::result::Result<T, PagelockError>;

/// Core error type for Pagelock operations.
#[derive(Debug, Error)]
pub enum PagelockError {
    /// Password rejected by the strength policy at encrypt time
    #[error("Weak password: {0}")]
    WeakPassword(#[from] PolicyViolation),

    /// Empty password supplied to the encrypt path
    #[error("Password cannot be empty")]
    EmptyPassword,

    /// Encrypted input too short to contain a salt and IV
    #[error("Encrypted input is too short to be a valid blob")]
    MalformedBlob,

    /// Padding removal failed after decryption. The dominant cause is a wrong
    /// password, but a corrupted blob produces the same failure; the two are
    /// deliberately not distinguished.
    #[error("Decryption failed: wrong password or corrupted data")]
    InvalidPadding,

    /// Input file type not supported by the pipeline
    #[error("Unsupported file type: {0} (only .md and .html are supported)")]
    UnsupportedInput(String),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
