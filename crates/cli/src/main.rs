//! vcli - Manage VMware vCenter virtual machines from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve the connection configuration and establish a vCenter session.
//! - Route subcommands to handlers and translate failures into structured
//!   exit codes.
//!
//! Does NOT handle:
//! - REST API details (see `crates/client`).
//! - Config file parsing or password encryption (see `crates/config`).

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;
mod interactive;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise -v/-vv/-vvv picks the default level.
    let default_directive = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
