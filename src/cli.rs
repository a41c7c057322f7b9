// src/cli.rs

use crate::request::{NotificationRequest, ValidationError};

use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

pub const PROGRAM_NAME: &str = "vm";
pub const PROGRAM_VERSION: &str = "75";

/// Send an SMS notification through a textbelt-style endpoint.
///
/// Endpoint URL and service key come from `~/.vmrc`.
/// Run `vm -y` once to create that file with the defaults.
#[derive(Parser, Debug)]
#[command(
    name = PROGRAM_NAME,
    version = PROGRAM_VERSION,
    override_usage = "vm <RECIPIENT> <MESSAGE>\n       vm -y"
)]
pub struct Cli {
    /// Create a skeleton config file with the default values
    #[arg(short = 'y', long = "init")]
    pub init: bool,

    /// Path to config file
    ///
    /// Defaults to ~/.vmrc
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Recipient phone number followed by the message text
    #[arg(value_name = "ARGS", allow_hyphen_values = true, num_args = 0..)]
    pub args: Vec<String>,
}

/// What a single invocation should do.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Print usage and exit 0.
    Usage,
    /// Write the skeleton config and exit 0.
    Init,
    /// Send one notification.
    Send(NotificationRequest),
    /// Arguments had the right shape but failed validation.
    Reject(ValidationError),
}

impl Cli {
    /// Map parsed arguments onto an [`Action`].
    ///
    /// Only two shapes do real work: a lone `-y`, or exactly two arguments.
    /// `-y` is only the init flag when alone; `vm -y hello` sends to `-y`.
    pub fn action(&self) -> Action {
        match (self.init, self.args.as_slice()) {
            (true, []) => Action::Init,
            (true, [message]) => send("-y", message),
            (false, [recipient, message]) => send(recipient, message),
            _ => Action::Usage,
        }
    }
}

fn send(recipient: &str, message: &str) -> Action {
    match NotificationRequest::new(recipient.to_string(), message.to_string()) {
        Ok(req) => Action::Send(req),
        Err(e) => Action::Reject(e),
    }
}

/// Outcome of parsing the raw argument vector.
#[derive(Debug)]
pub enum Parsed {
    Cli(Cli),
    /// clap already rendered `--help` / `--version` output.
    Rendered(String),
    /// Arguments clap could not make sense of; falls back to usage.
    Invalid,
}

pub fn parse_from<I, T>(args: I) -> Parsed
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    use clap::error::ErrorKind;

    match Cli::try_parse_from(args) {
        Ok(cli) => Parsed::Cli(cli),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                Parsed::Rendered(e.render().to_string())
            }
            _ => Parsed::Invalid,
        },
    }
}

/// Render the long help text.
pub fn usage() -> String {
    Cli::command().render_long_help().to_string()
}
