//! Document rendering: Markdown to HTML, style injection, and minification.
//!
//! Rendering produces a full standalone document (doctype, charset, viewport,
//! optional embedded stylesheet) so the output can be opened or encrypted
//! as-is.

use std::path::Path;

use minify_html::{minify, Cfg};
use pulldown_cmark::{html, Options, Parser};

use crate::error::{PagelockError, Result};

/// Kind of input document accepted by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Markdown source, rendered to HTML before further processing
    Markdown,
    /// HTML passed through (optionally style-injected)
    Html,
}

impl DocumentKind {
    /// Infer the document kind from a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`PagelockError::UnsupportedInput`] for anything other than
    /// `.md` or `.html`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            other => Err(PagelockError::UnsupportedInput(format!(".{}", other))),
        }
    }
}

/// Render Markdown to a full HTML document.
///
/// Tables are enabled. When `css` is non-empty it is embedded in a `<style>`
/// tag in the document head.
pub fn render_markdown(markdown: &str, css: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(markdown, options);

    let mut body = String::new();
    html::push_html(&mut body, parser);

    let style_tag = if css.is_empty() {
        String::new()
    } else {
        format!("<style>{}</style>\n", css)
    };

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         \x20 <meta charset=\"utf-8\">\n\
         \x20 <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         \x20 <title>Markdown Conversion</title>\n\
         \x20 {style_tag}\
         </head>\n\
         <body>\n\
         {body}\
         </body>\n\
         </html>\n"
    )
}

/// Embed a stylesheet into an existing HTML document.
///
/// The `<style>` tag is inserted immediately before the first `</head>`.
/// Documents without a `</head>` are returned unchanged.
pub fn inject_style(html: &str, css: &str) -> String {
    if css.is_empty() {
        return html.to_string();
    }
    let style_tag = format!("<style>{}</style>", css);
    html.replacen("</head>", &format!("{}</head>", style_tag), 1)
}

/// Minify an HTML document, including embedded JS and CSS.
pub fn minify_html(html: &str) -> String {
    let cfg = Cfg {
        minify_js: true,
        minify_css: true,
        ..Cfg::default()
    };
    let minified = minify(html.as_bytes(), &cfg);
    String::from_utf8_lossy(&minified).into_owned()
}
