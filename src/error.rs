use std::path::PathBuf;
use thiserror::Error;

/// Fatal startup conditions. The binary maps every variant to exit code 1;
/// the library never prints or exits on its own.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Malformed or unrecognized command-line input. The message is clap's
    /// rendered error, usage text included.
    #[error("{message}")]
    Flags { message: String },

    #[error("HOME environment variable is not set")]
    MissingHome,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bindings(#[from] BindingsError),

    #[error("Failed to create {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid MPD_PORT value '{value}': {source}")]
    InvalidPortOverride {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("Unknown screen: {0}")]
    UnknownScreen(String),

    #[error("Unknown slave screen: {0}")]
    UnknownSlaveScreen(String),
}

/// Configuration-file failures. All of these are downgraded to debug-logged
/// skips when `--ignore-config-errors` is set.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Unknown option '{key}' in {path} (line {line})")]
    UnknownKey {
        key: String,
        path: PathBuf,
        line: usize,
    },

    #[error("{}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n"))]
    UnknownKeys(Vec<ConfigError>),
}

/// Key-bindings file failures.
#[derive(Debug, Error)]
pub enum BindingsError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed binding in {path} (line {line}): {text}")]
    Parse {
        path: PathBuf,
        line: usize,
        text: String,
    },
}
