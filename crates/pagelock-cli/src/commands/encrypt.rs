//! Encrypt command: HTML file to a raw encrypted blob.

use std::fs;

use pagelock_core::encrypt;
use pagelock_core::fs::write_atomic;

use crate::cli::EncryptArgs;
use crate::helpers::{default_sibling, resolve_password};

pub fn run(args: &EncryptArgs, quiet: bool) -> anyhow::Result<()> {
    let plaintext = fs::read(&args.input).map_err(|e| {
        anyhow::anyhow!("Failed to read input file {}: {}", args.input.display(), e)
    })?;

    let password = resolve_password(args.password.as_deref(), true)?;
    let blob = encrypt(&plaintext, &password, args.allow_unsafe_password)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_sibling(&args.input, "-encrypted.html"));
    write_atomic(&output, &blob)?;

    if !quiet {
        println!("Encrypted file written to: {}", output.display());
    }
    Ok(())
}
