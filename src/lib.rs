//! Startup configuration resolution for tmpc, a terminal client for the
//! Music Player Daemon.
//!
//! Everything between `main()` and the first screen draw lives here: one
//! single-threaded pass that merges four configuration sources into an
//! authoritative [`RuntimeSettings`] and prepares the working directories
//! the rest of the client depends on.
//!
//! # Layer precedence
//!
//! ```text
//! Schema defaults       localhost:6600, 5 s timeout, ~/.tmpc/
//!        ↑ overridden by
//! Config files          ~/.tmpc/config.toml, then $XDG_CONFIG_HOME/tmpc/config.toml
//!        ↑ overridden by
//! Environment vars      MPD_HOST / MPD_PORT (connection only)
//!        ↑ overridden by
//! Explicit CLI flags    only flags the user actually passed
//! ```
//!
//! Every layer is sparse: a config file sets only the options it names, an
//! environment variable targets a single value, and a defaulted CLI flag
//! never shadows a lower layer — only explicitly supplied flags count.
//! Given the same argv, environment, and file contents, each resolved value
//! comes from exactly one deterministic layer.
//!
//! # The pipeline
//!
//! [`bootstrap()`](bootstrap::bootstrap) sequences flag parsing, the
//! help/version short-circuit, home-directory resolution, config-file
//! loading, key-bindings loading, directory creation, override application,
//! and screen validation — in that order, failing fast at the first fatal
//! condition. It is a plain fallible function: it never prints and never
//! exits, so the whole pipeline runs under tests with a synthetic
//! [`Environment`] and a temp directory. The binary in `main.rs` owns all
//! printing and the exit-code mapping (0 for help/version and success, 1
//! for everything fatal).
//!
//! # Error handling
//!
//! Four fatal categories, all surfaced as [`BootstrapError`]: flag-parse
//! errors (reported with usage text), environment preconditions (`HOME`
//! unset), loader failures (config or bindings files), and validation
//! errors (unknown screen names). Config-file anomalies alone can be
//! downgraded, with `--ignore-config-errors`, to debug-logged skips;
//! nothing else is ever silently swallowed.

pub mod bindings;
pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod env;
pub mod error;
pub mod logging;
pub mod paths;
pub mod resolve;
pub mod screen;

mod validate;

pub use bindings::Bindings;
pub use bootstrap::{Bootstrap, bootstrap};
pub use cli::Flags;
pub use config::Config;
pub use env::{Environment, SystemEnv};
pub use error::{BindingsError, BootstrapError, ConfigError};
pub use paths::HomeDir;
pub use resolve::RuntimeSettings;
pub use screen::Screen;
