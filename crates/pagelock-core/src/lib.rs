//! # Pagelock Core
//!
//! Core library for Pagelock - a tool that turns a Markdown or HTML document
//! into a self-contained, password-protected HTML page.
//!
//! This crate provides the cryptographic core, document rendering, and
//! protected-page assembly independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **crypto**: password policy, key derivation, and the encrypted-blob codec
//! - **render**: Markdown rendering, style injection, and HTML minification
//! - **page**: embedding an encrypted blob into the self-decrypting page
//! - **fs**: atomic file writes
//!
//! The encrypted blob layout (`salt || iv || ciphertext`) is a wire contract
//! consumed by the embedded decryption page; see [`crypto::codec`].

pub mod crypto;
pub mod error;
pub mod fs;
pub mod page;
pub mod render;

pub use crypto::codec::{decrypt, encrypt};
pub use crypto::key::{derive_key, DerivedKey};
pub use crypto::policy::{validate_password, PolicyViolation};
pub use error::{PagelockError, Result};
pub use page::build_protected_page;
pub use render::{inject_style, minify_html, render_markdown, DocumentKind};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
