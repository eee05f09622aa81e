//! Pagelock CLI - create password-protected static HTML pages.
//!
//! This is the command-line interface for Pagelock. It wires the core
//! library's rendering and encryption pipeline to a small set of subcommands.

mod cli;
mod commands;
mod helpers;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Protect(args) => commands::protect::run(args, cli.quiet),
        Commands::Convert(args) => commands::convert::run(args, cli.quiet),
        Commands::Encrypt(args) => commands::encrypt::run(args, cli.quiet),
        Commands::Decrypt(args) => commands::decrypt::run(args, cli.quiet),
        Commands::Completions(args) => {
            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "pagelock", &mut std::io::stdout());
            Ok(())
        }
    }
}
