//! Shared helpers for command handlers.

use std::fs;
use std::path::{Path, PathBuf};

use dialoguer::Password;
use zeroize::Zeroizing;

/// Resolve the password from the CLI flag (or environment) or prompt for it.
///
/// Encrypting commands confirm the prompted password; decryption does not.
/// The returned value is zeroized when dropped.
pub fn resolve_password(flag: Option<&str>, confirm: bool) -> anyhow::Result<Zeroizing<String>> {
    if let Some(value) = flag {
        return Ok(Zeroizing::new(value.to_string()));
    }

    let mut prompt = Password::new().with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
    }
    prompt
        .interact()
        .map(Zeroizing::new)
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

/// Load the optional stylesheet; absent means no styling.
pub fn load_style(style: Option<&Path>) -> anyhow::Result<String> {
    match style {
        None => Ok(String::new()),
        Some(path) => fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read CSS file {}: {}", path.display(), e)),
    }
}

/// Build an output path next to the input: `<stem><suffix>` in the input's
/// directory.
pub fn default_sibling(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{}{}", stem, suffix))
}
