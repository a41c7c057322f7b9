// src/config.rs

use crate::cli::PROGRAM_NAME;

use anyhow::{Context, Result};
use ini::{EscapePolicy, Ini, ParseOption, WriteOption};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_URL: &str = "https://textbelt.com/text";
pub const DEFAULT_KEY: &str = "textbelt";

/// Name of the config file inside the home directory.
pub const CONFIG_FILE_NAME: &str = ".vmrc";

/// Read-only view over a parsed config file.
///
/// The loader only ever asks for single keys, so this is all a parser
/// backend needs to provide.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<&str>;
}

impl ConfigSource for Ini {
    fn get(&self, key: &str) -> Option<&str> {
        self.get_from(None::<String>, key)
    }
}

/// Endpoint configuration for the notification sender.
///
/// Example `~/.vmrc`:
///
/// url=https://textbelt.com/text
/// key=textbelt
///
/// Built once at startup and passed by reference; nothing mutates it
/// after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Endpoint the form body is POSTed to. Not validated.
    pub url: String,

    /// Service key sent as the `key` form field.
    pub key: String,

    /// Where this config was (or would have been) read from.
    pub path: PathBuf,
}

/// What happened when writing the skeleton file.
#[derive(Debug, PartialEq, Eq)]
pub enum SkeletonOutcome {
    Created,
    AlreadyExists,
}

impl Config {
    /// Built-in defaults, tagged with the path they stand in for.
    pub fn defaults(path: &Path) -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            key: DEFAULT_KEY.to_string(),
            path: path.to_path_buf(),
        }
    }

    /// Load config from `path`, falling back to defaults.
    ///
    /// A missing file, a parse failure or a missing key never fails the
    /// load; the affected fields keep their default values.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Self::defaults(path);
        }

        match read_ini(path) {
            Ok(ini) => Self::from_source(&ini, path),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %format!("{:#}", e), "config unreadable, using defaults");
                Self::defaults(path)
            }
        }
    }

    /// Overlay whatever keys `source` provides on top of the defaults.
    pub fn from_source<S: ConfigSource>(source: &S, path: &Path) -> Self {
        let mut cfg = Self::defaults(path);

        if let Some(url) = source.get("url") {
            cfg.url = url.to_string();
        }
        if let Some(key) = source.get("key") {
            cfg.key = key.to_string();
        }

        cfg
    }
}

/// Default config location: `~/.vmrc`, or `./.vmrc` without a home dir.
pub fn default_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(CONFIG_FILE_NAME),
        None => PathBuf::from(CONFIG_FILE_NAME),
    }
}

/// Values are taken verbatim: no quote stripping, no backslash escapes.
fn read_ini(path: &Path) -> Result<Ini> {
    let opt = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..Default::default()
    };

    Ini::load_from_file_opt(path, opt)
        .with_context(|| format!("Failed to parse config file {:?}", path))
}

/// Write a config file holding the default keys, unless one already exists.
pub fn create_skeleton(path: &Path) -> Result<SkeletonOutcome> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Ok(SkeletonOutcome::AlreadyExists)
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to create config file {:?}", path))
        }
    };

    let mut ini = Ini::new();
    ini.with_section(None::<String>)
        .set("url", DEFAULT_URL)
        .set("key", DEFAULT_KEY);

    writeln!(file, "# {} notification settings", PROGRAM_NAME)
        .and_then(|_| {
            ini.write_to_opt(
                &mut file,
                WriteOption {
                    escape_policy: EscapePolicy::Nothing,
                    ..Default::default()
                },
            )
        })
        .with_context(|| format!("Failed to write config file {:?}", path))?;

    Ok(SkeletonOutcome::Created)
}
