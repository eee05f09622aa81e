//! Protected-page assembly.
//!
//! Embeds an encrypted blob into the static decryption page. The page carries
//! the blob as a JSON byte array and decrypts it in the browser with
//! WebCrypto, splitting the blob at the fixed offsets documented in
//! [`crate::crypto::codec`] and using the same key-derivation and cipher
//! parameters.

/// The self-decrypting page template, with a placeholder for the blob.
const DECRYPT_TEMPLATE: &str = include_str!("../assets/decrypt_template.html");

/// Placeholder replaced by the embedded byte array.
const BLOB_PLACEHOLDER: &str = "ENCRYPTED_CONTENT_PLACEHOLDER";

/// Build a self-contained protected page around an encrypted blob.
///
/// The returned document prompts for a password and, given the correct one,
/// decrypts and displays the original content entirely client-side.
pub fn build_protected_page(blob: &[u8]) -> String {
    // serde_json renders &[u8] as a plain array of numbers, which is exactly
    // the literal the template's JavaScript expects.
    let bytes = serde_json::to_string(blob).unwrap_or_else(|_| String::from("[]"));
    DECRYPT_TEMPLATE.replacen(BLOB_PLACEHOLDER, &bytes, 1)
}
