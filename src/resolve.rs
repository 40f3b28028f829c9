//! Per-value precedence resolution.
//!
//! The fixed order, highest first:
//!
//! ```text
//! Explicit CLI flag      only if the user actually supplied it
//!        ↑
//! Environment variable   MPD_HOST / MPD_PORT, connection only
//!        ↑
//! Config-file value
//!        ↑
//! Schema default
//! ```
//!
//! Everything here is a pure function over pre-loaded inputs — no I/O — so
//! every precedence property is testable with synthetic data.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Flags;
use crate::config::Config;
use crate::env::{self, Environment};
use crate::error::BootstrapError;
use crate::paths::HomeDir;
use crate::screen::Screen;

/// The final merged runtime configuration, handed to the client once
/// bootstrap succeeds. Immutable from that point on.
#[derive(Debug, Clone)]
pub struct RuntimeSettings {
    pub host: String,
    pub port: u16,
    /// Connection timeout for the MPD client, taken solely from the config
    /// file. Not a bootstrap timeout.
    pub connection_timeout: Duration,
    /// Present only when `--screen` was supplied; `None` means the client
    /// picks its own default.
    pub startup_screen: Option<Screen>,
    pub startup_slave_screen: Option<Screen>,
    pub ignore_config_errors: bool,
    pub app_directory: PathBuf,
    pub lyrics_directory: PathBuf,
    pub bindings_path: PathBuf,
}

/// Resolve the MPD connection target.
///
/// Starts from the config-file values, applies the environment overrides,
/// then the explicit CLI flags, in that order — so the CLI wins on
/// conflict. A malformed `MPD_PORT` is fatal at this step, whether or not
/// a CLI port would have shadowed it.
pub fn resolve_connection(
    config: &Config,
    env: &dyn Environment,
    flags: &Flags,
) -> Result<(String, u16), BootstrapError> {
    let mut host = config.mpd_host.clone();
    let mut port = config.mpd_port;

    if let Some(env_host) = env.var(env::MPD_HOST) {
        host = env_host;
    }
    if let Some(raw) = env.var(env::MPD_PORT) {
        port = raw
            .parse()
            .map_err(|source| BootstrapError::InvalidPortOverride { value: raw, source })?;
    }

    if let Some(cli_host) = &flags.host {
        host = cli_host.clone();
    }
    if let Some(cli_port) = flags.port {
        port = cli_port;
    }

    Ok((host, port))
}

/// Resolve the bindings-file path.
///
/// An omitted `--bindings` derives the path from the application directory
/// rather than using any literal default; a supplied one is home-expanded.
pub fn resolve_bindings_path(flag: Option<&str>, app_dir: &Path, home: &HomeDir) -> PathBuf {
    match flag {
        Some(path) => home.expand(path),
        None => app_dir.join("bindings"),
    }
}

/// Resolve `--screen`. Absent means "client default"; an unknown name is a
/// fatal validation error naming the offending string.
pub fn resolve_startup_screen(name: Option<&str>) -> Result<Option<Screen>, BootstrapError> {
    match name {
        None => Ok(None),
        Some(name) => Screen::from_name(name)
            .map(Some)
            .ok_or_else(|| BootstrapError::UnknownScreen(name.to_string())),
    }
}

/// Resolve `--slave-screen`, reported distinctly from `--screen`.
pub fn resolve_slave_screen(name: Option<&str>) -> Result<Option<Screen>, BootstrapError> {
    match name {
        None => Ok(None),
        Some(name) => Screen::from_name(name)
            .map(Some)
            .ok_or_else(|| BootstrapError::UnknownSlaveScreen(name.to_string())),
    }
}
