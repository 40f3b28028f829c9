//! Startup orchestration.
//!
//! One fallible pass, run to completion before anything else starts:
//!
//! ```text
//! flags → help/version short-circuit → home → config files → bindings
//!       → directories → env/CLI overrides → screen validation → ready
//! ```
//!
//! The library never prints and never exits; every fatal condition comes
//! back as a [`BootstrapError`] and the binary alone maps it to an exit
//! code. Help and version short-circuit before the environment or the
//! filesystem is touched.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::bindings::Bindings;
use crate::cli::{self, Parsed};
use crate::config::Config;
use crate::env::Environment;
use crate::error::BootstrapError;
use crate::paths::{self, HomeDir};
use crate::resolve::{self, RuntimeSettings};

/// Successful bootstrap outcome.
#[derive(Debug)]
pub enum Bootstrap {
    /// Configuration resolved; the client can start.
    Ready {
        settings: RuntimeSettings,
        bindings: Bindings,
    },
    /// `--help` or `--version`: print `message` and exit successfully.
    Exit { message: String },
}

/// Resolve the runtime configuration from argv and the environment.
pub fn bootstrap<I, T>(argv: I, env: &dyn Environment) -> Result<Bootstrap, BootstrapError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let flags = match cli::parse(argv)? {
        Parsed::Exit { message } => return Ok(Bootstrap::Exit { message }),
        Parsed::Flags(flags) => flags,
    };
    debug!("command-line flags parsed");

    let home = HomeDir::from_env(env)?;

    let candidates = if flags.config.is_empty() {
        paths::default_config_paths(env)
    } else {
        flags.config.clone()
    };
    let config_paths: Vec<PathBuf> = candidates.iter().map(|p| home.expand(p)).collect();
    let config = Config::read(&config_paths, flags.ignore_config_errors, &home)?;
    debug!(
        host = %config.mpd_host,
        port = config.mpd_port,
        "configuration files loaded"
    );

    let bindings_path =
        resolve::resolve_bindings_path(flags.bindings.as_deref(), &config.tmpc_directory, &home);
    let mut bindings = Bindings::read(&bindings_path)?;
    bindings.generate_defaults();
    debug!(
        path = %bindings_path.display(),
        count = bindings.len(),
        "key bindings loaded"
    );

    create_dir(&config.tmpc_directory)?;
    create_dir(&config.lyrics_directory)?;

    let (host, port) = resolve::resolve_connection(&config, env, &flags)?;
    let startup_screen = resolve::resolve_startup_screen(flags.screen.as_deref())?;
    let startup_slave_screen = resolve::resolve_slave_screen(flags.slave_screen.as_deref())?;
    debug!(host = %host, port, "connection target resolved");

    Ok(Bootstrap::Ready {
        settings: RuntimeSettings {
            host,
            port,
            connection_timeout: config.mpd_connection_timeout,
            startup_screen,
            startup_slave_screen,
            ignore_config_errors: flags.ignore_config_errors,
            app_directory: config.tmpc_directory,
            lyrics_directory: config.lyrics_directory,
            bindings_path,
        },
        bindings,
    })
}

/// Create-if-absent; an already existing directory is success.
fn create_dir(path: &Path) -> Result<(), BootstrapError> {
    std::fs::create_dir_all(path).map_err(|source| BootstrapError::CreateDirectory {
        path: path.to_path_buf(),
        source,
    })
}
