//! Convert command: Markdown to a standalone HTML document.

use std::fs;

use pagelock_core::fs::write_atomic;
use pagelock_core::{minify_html, render_markdown};

use crate::cli::ConvertArgs;
use crate::helpers::load_style;

pub fn run(args: &ConvertArgs, quiet: bool) -> anyhow::Result<()> {
    let css = load_style(args.style.as_deref())?;

    let markdown = fs::read_to_string(&args.input).map_err(|e| {
        anyhow::anyhow!("Failed to read input file {}: {}", args.input.display(), e)
    })?;

    let mut html = render_markdown(&markdown, &css);
    if !args.no_minify {
        html = minify_html(&html);
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("html"));
    write_atomic(&output, html.as_bytes())?;

    if !quiet {
        println!("Converted {} to {}", args.input.display(), output.display());
    }
    Ok(())
}
