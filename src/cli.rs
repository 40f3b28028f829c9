//! Command-line flag schema.
//!
//! Every value that participates in precedence is an `Option<T>` with no
//! clap-level default: `None` means "not supplied", which is what lets the
//! resolver distinguish an explicit `--port 6600` from the schema default
//! 6600. The defaults themselves live in [`DEFAULT_HOST`]/[`DEFAULT_PORT`]
//! and are applied by the config loader and resolver, never by clap.
//!
//! The built-in help/version flags are disabled and redeclared so `-h` can
//! mean host (as MPD clients conventionally do) and help answers to `-?`.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};

use crate::error::BootstrapError;

/// Schema default for the server host.
pub const DEFAULT_HOST: &str = "localhost";

/// Schema default for the server port.
pub const DEFAULT_PORT: u16 = 6600;

#[derive(Debug, Parser)]
#[command(
    name = "tmpc",
    version,
    about = "Terminal client for the Music Player Daemon",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Flags {
    /// Connect to server at host [default: localhost]
    #[arg(long, short = 'h', value_name = "HOST")]
    pub host: Option<String>,

    /// Connect to server at port [default: 6600]
    #[arg(long, short = 'p', value_name = "PORT")]
    pub port: Option<u16>,

    /// Configuration file(s); later files override earlier ones
    /// [default: ~/.tmpc/config.toml and $XDG_CONFIG_HOME/tmpc/config.toml]
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Vec<String>,

    /// Ignore unknown and invalid options in configuration files
    #[arg(
        long,
        value_name = "BOOL",
        default_value_t = false,
        action = ArgAction::Set
    )]
    pub ignore_config_errors: bool,

    /// Key-bindings file [default: bindings inside the tmpc directory]
    #[arg(long, short = 'b', value_name = "PATH")]
    pub bindings: Option<String>,

    /// Initial screen
    #[arg(long, short = 's', value_name = "SCREEN")]
    pub screen: Option<String>,

    /// Initial slave screen
    #[arg(long, short = 'S', value_name = "SCREEN")]
    pub slave_screen: Option<String>,

    /// Print help
    #[arg(long, short = '?', action = ArgAction::Help)]
    help: Option<bool>,

    /// Print version
    #[arg(long, short = 'v', action = ArgAction::Version)]
    version: Option<bool>,
}

/// Outcome of argv parsing.
#[derive(Debug)]
pub enum Parsed {
    /// A regular invocation.
    Flags(Flags),
    /// `--help` or `--version`: the caller prints `message` and exits
    /// successfully without touching the environment or the filesystem.
    Exit { message: String },
}

/// Parse argv against the schema.
///
/// Never prints and never exits. Flag errors come back as
/// [`BootstrapError::Flags`] with clap's rendered message, which already
/// embeds the usage text.
pub fn parse<I, T>(argv: I) -> Result<Parsed, BootstrapError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Flags::try_parse_from(argv) {
        Ok(flags) => Ok(Parsed::Flags(flags)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Ok(Parsed::Exit {
                message: err.render().to_string(),
            }),
            _ => Err(BootstrapError::Flags {
                message: err.render().to_string(),
            }),
        },
    }
}
