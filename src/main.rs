// src/main.rs

//! vm
//!
//! Entry point for the `vm` notification CLI.
//!
//! Sends one SMS through a textbelt-style HTTP endpoint, or writes a
//! skeleton `~/.vmrc` with `vm -y`. All real work lives in `runner`.
//!
//! Responsibilities of this file:
//! - Install the log subscriber
//! - Parse CLI arguments
//! - Hand off execution to the runner and map its outcome to an exit code

mod cli;
mod config;
mod notify;
mod request;
mod runner;

use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Program entry point.
///
/// A current-thread runtime is enough: the only await point is the single
/// outbound POST.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let parsed = cli::parse_from(std::env::args_os());
    let transport = notify::HttpTransport::new();

    runner::run(parsed, &transport).await.exit_code()
}

/// Logs go to stderr so stdout only ever carries usage text.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
