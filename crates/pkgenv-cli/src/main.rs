mod commands;
mod opts;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::change::ChangeArgs;

#[derive(Parser, Debug)]
#[command(
    name = "pkgenv",
    version,
    about = "Per-environment packaging settings for SharePoint Framework projects"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Switch the project's package settings to an environment
    #[command(name = "change-pkg-settings")]
    ChangePkgSettings(ChangeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    match cli.command {
        Command::ChangePkgSettings(args) => commands::change::cmd_change(&args),
    }
}

/// Progress and notices go to stderr; `RUST_LOG` overrides the `info` default.
fn setup_logging() {
    use std::io::IsTerminal;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .without_time()
        .init();
}
