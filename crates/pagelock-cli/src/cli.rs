use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use pagelock_core::VERSION;

/// Pagelock - turn Markdown or HTML into a password-protected static page
#[derive(Parser)]
#[command(name = "pagelock")]
#[command(version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `protect` command
#[derive(Args)]
pub struct ProtectArgs {
    /// Path to the input Markdown or HTML file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Password for encryption (prompted when omitted)
    #[arg(short, long, env = "PAGELOCK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Path to the output HTML file (defaults to <input stem>.protected.html
    /// next to the input)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to an optional CSS file to embed in the page
    #[arg(long, value_name = "FILE")]
    pub style: Option<PathBuf>,

    /// Skip password strength validation (unsafe)
    #[arg(long)]
    pub allow_unsafe_password: bool,

    /// Disable minification of the page content
    #[arg(long)]
    pub no_minify: bool,
}

/// Arguments for the `convert` command
#[derive(Args)]
pub struct ConvertArgs {
    /// Path to the input Markdown file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Path to the output HTML file (defaults to the input with an .html
    /// extension)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to an optional CSS file to embed in the HTML
    #[arg(long, value_name = "FILE")]
    pub style: Option<PathBuf>,

    /// Disable HTML minification
    #[arg(long)]
    pub no_minify: bool,
}

/// Arguments for the `encrypt` command
#[derive(Args)]
pub struct EncryptArgs {
    /// Path to the input HTML file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Password for encryption (prompted when omitted)
    #[arg(short, long, env = "PAGELOCK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Path to the output encrypted file (defaults to <input stem>-encrypted.html)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Skip password strength validation (unsafe)
    #[arg(long)]
    pub allow_unsafe_password: bool,
}

/// Arguments for the `decrypt` command
#[derive(Args)]
pub struct DecryptArgs {
    /// Path to the encrypted file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Password for decryption (prompted when omitted)
    #[arg(short, long, env = "PAGELOCK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Path to the output decrypted file (defaults to <input stem>-decrypted.html)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an encrypted, password-protected HTML page from Markdown or HTML
    Protect(ProtectArgs),

    /// Convert a Markdown file to HTML
    Convert(ConvertArgs),

    /// Encrypt an HTML file into a raw blob
    Encrypt(EncryptArgs),

    /// Decrypt an encrypted file
    Decrypt(DecryptArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
