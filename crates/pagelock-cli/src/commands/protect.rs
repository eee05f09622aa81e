//! Protect command: render, minify, encrypt, and embed in one pass.

use std::fs;

use pagelock_core::fs::write_atomic;
use pagelock_core::{
    build_protected_page, encrypt, inject_style, minify_html, render_markdown, DocumentKind,
};

use crate::cli::ProtectArgs;
use crate::helpers::{default_sibling, load_style, resolve_password};

pub fn run(args: &ProtectArgs, quiet: bool) -> anyhow::Result<()> {
    let kind = DocumentKind::from_path(&args.input)?;
    let css = load_style(args.style.as_deref())?;

    let source = fs::read_to_string(&args.input).map_err(|e| {
        anyhow::anyhow!("Failed to read input file {}: {}", args.input.display(), e)
    })?;

    let html = match kind {
        DocumentKind::Markdown => render_markdown(&source, &css),
        DocumentKind::Html => inject_style(&source, &css),
    };
    let html = if args.no_minify {
        html
    } else {
        minify_html(&html)
    };

    let password = resolve_password(args.password.as_deref(), true)?;
    let blob = encrypt(html.as_bytes(), &password, args.allow_unsafe_password)?;

    // The content inside is already encrypted; this pass only compacts the
    // page shell itself.
    let page = minify_html(&build_protected_page(&blob));

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_sibling(&args.input, ".protected.html"));
    write_atomic(&output, page.as_bytes())?;

    if !quiet {
        println!("Protected page written to: {}", output.display());
    }
    Ok(())
}
