// src/runner.rs

use crate::cli::{self, Action, Parsed};
use crate::config::{self, Config, SkeletonOutcome};
use crate::notify::{self, Delivery, Transport};

use std::path::Path;
use std::process::ExitCode;

/// What the invocation ended up doing.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Usage,
    Initialized,
    Rejected,
    Sent(Delivery),
}

impl Outcome {
    /// Only a validation failure exits non-zero.
    pub fn status(&self) -> u8 {
        match self {
            Outcome::Rejected => 1,
            _ => 0,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.status())
    }
}

/// Entry point from `main.rs`.
pub async fn run<T: Transport>(parsed: Parsed, transport: &T) -> Outcome {
    let cli = match parsed {
        Parsed::Cli(cli) => cli,
        Parsed::Rendered(text) => {
            print!("{}", text);
            return Outcome::Usage;
        }
        Parsed::Invalid => {
            print_usage();
            return Outcome::Usage;
        }
    };

    let config_path = cli.config.clone().unwrap_or_else(config::default_path);

    match cli.action() {
        Action::Usage => {
            print_usage();
            Outcome::Usage
        }

        Action::Init => {
            init_config(&config_path);
            Outcome::Initialized
        }

        Action::Reject(e) => {
            tracing::debug!(code = e.code, "request rejected");
            eprintln!("{}", e);
            Outcome::Rejected
        }

        Action::Send(req) => {
            let cfg = Config::load(&config_path);
            Outcome::Sent(notify::send(transport, &cfg, &req).await)
        }
    }
}

fn print_usage() {
    println!("{}", cli::usage());
}

/// Create the skeleton config. Failures are logged, never returned.
fn init_config(path: &Path) {
    match config::create_skeleton(path) {
        Ok(SkeletonOutcome::Created) => eprintln!("Created {}", path.display()),
        Ok(SkeletonOutcome::AlreadyExists) => {
            eprintln!("{} already exists (skipping)", path.display())
        }
        Err(e) => tracing::debug!(error = %format!("{:#}", e), "skeleton config not written"),
    }
}
