//! Decrypt command: encrypted blob back to plaintext.
//!
//! Decryption never runs the password policy; any password is accepted and
//! simply fails if it is wrong.

use std::fs;

use pagelock_core::decrypt;
use pagelock_core::fs::write_atomic;

use crate::cli::DecryptArgs;
use crate::helpers::{default_sibling, resolve_password};

pub fn run(args: &DecryptArgs, quiet: bool) -> anyhow::Result<()> {
    let blob = fs::read(&args.input).map_err(|e| {
        anyhow::anyhow!("Failed to read input file {}: {}", args.input.display(), e)
    })?;

    let password = resolve_password(args.password.as_deref(), false)?;
    let plaintext = decrypt(&blob, &password)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_sibling(&args.input, "-decrypted.html"));
    write_atomic(&output, &plaintext)?;

    if !quiet {
        println!("Decrypted file written to: {}", output.display());
    }
    Ok(())
}
