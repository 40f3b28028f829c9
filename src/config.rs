//! Configuration-file loading and merging.
//!
//! Candidate files are applied in priority-ascending order: each file is a
//! sparse overlay and later files override earlier ones key-by-key. Missing
//! files are silently skipped — listing a candidate is a suggestion, not a
//! requirement. Compiled defaults fill whatever no file provided.
//!
//! With `--ignore-config-errors`, unreadable or unparseable files and
//! unknown options are downgraded to debug-logged skips.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::cli::{DEFAULT_HOST, DEFAULT_PORT};
use crate::error::ConfigError;
use crate::paths::HomeDir;
use crate::validate;

const DEFAULT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_APP_DIR: &str = "~/.tmpc/";
const DEFAULT_LYRICS_DIR: &str = "~/.lyrics";

/// One file's worth of options. Every field is optional; unset fields fall
/// through to the file below, then to the compiled defaults.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ConfigLayer {
    mpd_host: Option<String>,
    mpd_port: Option<u16>,
    mpd_connection_timeout: Option<u64>,
    tmpc_directory: Option<String>,
    lyrics_directory: Option<String>,
}

/// Fully resolved configuration-file values, directories home-expanded.
///
/// Host and port here are the config-file layer of the precedence order;
/// environment and CLI overrides are applied later by the resolver.
#[derive(Debug, Clone)]
pub struct Config {
    pub mpd_host: String,
    pub mpd_port: u16,
    pub mpd_connection_timeout: Duration,
    pub tmpc_directory: PathBuf,
    pub lyrics_directory: PathBuf,
}

impl Config {
    /// Read and merge all candidate files. Paths must already be
    /// home-expanded.
    pub fn read(
        paths: &[PathBuf],
        ignore_errors: bool,
        home: &HomeDir,
    ) -> Result<Config, ConfigError> {
        let mut merged = ConfigLayer::default();

        for path in paths {
            match read_layer(path, ignore_errors) {
                Ok(Some(layer)) => overlay(&mut merged, layer),
                Ok(None) => {}
                Err(err) if ignore_errors => {
                    debug!(path = %path.display(), error = %err, "ignoring config file");
                }
                Err(err) => return Err(err),
            }
        }

        Ok(finalize(merged, home))
    }
}

/// Read one candidate. `Ok(None)` means the file does not exist.
fn read_layer(path: &Path, ignore_errors: bool) -> Result<Option<ConfigLayer>, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "config file not found, skipping");
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if !ignore_errors {
        validate::check_unknown_keys::<ConfigLayer>(&content, path)?;
    }

    let layer = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Some(layer))
}

/// Overlay `next` on top of `base`: set fields win, unset fields keep the
/// value already merged.
fn overlay(base: &mut ConfigLayer, next: ConfigLayer) {
    if next.mpd_host.is_some() {
        base.mpd_host = next.mpd_host;
    }
    if next.mpd_port.is_some() {
        base.mpd_port = next.mpd_port;
    }
    if next.mpd_connection_timeout.is_some() {
        base.mpd_connection_timeout = next.mpd_connection_timeout;
    }
    if next.tmpc_directory.is_some() {
        base.tmpc_directory = next.tmpc_directory;
    }
    if next.lyrics_directory.is_some() {
        base.lyrics_directory = next.lyrics_directory;
    }
}

/// Fill compiled defaults and home-expand the directory options.
fn finalize(layer: ConfigLayer, home: &HomeDir) -> Config {
    Config {
        mpd_host: layer.mpd_host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
        mpd_port: layer.mpd_port.unwrap_or(DEFAULT_PORT),
        mpd_connection_timeout: Duration::from_secs(
            layer.mpd_connection_timeout.unwrap_or(DEFAULT_TIMEOUT_SECS),
        ),
        tmpc_directory: home.expand(layer.tmpc_directory.as_deref().unwrap_or(DEFAULT_APP_DIR)),
        lyrics_directory: home.expand(
            layer.lyrics_directory.as_deref().unwrap_or(DEFAULT_LYRICS_DIR),
        ),
    }
}
