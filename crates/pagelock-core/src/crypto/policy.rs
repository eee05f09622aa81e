//! Password strength policy.
//!
//! Enforces minimum security requirements for encryption passwords. The
//! policy gates the encrypt path only; decryption accepts any password and
//! simply fails if it is wrong.

use thiserror::Error;

/// Minimum password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Special characters accepted by the policy.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()-_=+[]{}|;:'\",.<>?/";

/// A specific rule the candidate password failed.
///
/// Passwords are supplied interactively, so each violation carries a message
/// precise enough to fix the password without trial and error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PolicyViolation {
    /// Fewer than [`MIN_PASSWORD_LENGTH`] characters
    #[error("password must be at least {MIN_PASSWORD_LENGTH} characters long")]
    TooShort,

    /// No lowercase letter
    #[error("password must contain at least one lowercase letter")]
    MissingLowercase,

    /// No uppercase letter
    #[error("password must contain at least one uppercase letter")]
    MissingUppercase,

    /// No decimal digit
    #[error("password must contain at least one digit")]
    MissingDigit,

    /// No special character
    #[error("password must contain at least one special character ({SPECIAL_CHARACTERS})")]
    MissingSpecial,
}

/// Validate a password against the strength policy.
///
/// All rules must hold for acceptance; the first violation found is reported:
///
/// - at least 8 characters long
/// - at least one lowercase letter
/// - at least one uppercase letter
/// - at least one decimal digit
/// - at least one special character
///
/// # Examples
///
/// ```
/// use pagelock_core::crypto::policy::{validate_password, PolicyViolation};
///
/// assert!(validate_password("Correct-horse-7").is_ok());
/// assert_eq!(
///     validate_password("lowercase-only-7"),
///     Err(PolicyViolation::MissingUppercase)
/// );
/// ```
pub fn validate_password(password: &str) -> Result<(), PolicyViolation> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PolicyViolation::TooShort);
    }
    if !password.chars().any(char::is_lowercase) {
        return Err(PolicyViolation::MissingLowercase);
    }
    if !password.chars().any(char::is_uppercase) {
        return Err(PolicyViolation::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PolicyViolation::MissingDigit);
    }
    if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        return Err(PolicyViolation::MissingSpecial);
    }
    Ok(())
}
