//! Environment access behind a trait.
//!
//! Bootstrap reads a handful of ambient variables (home directory, XDG
//! config root, MPD connection overrides). Going through [`Environment`]
//! instead of `std::env` directly lets tests simulate arbitrary
//! environments deterministically — a `HashMap` implements the trait.

use std::collections::HashMap;

/// User home directory, the root for `~` expansion.
pub const HOME: &str = "HOME";

/// Platform config root; falls back to `~/.config/` when unset.
pub const XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";

/// MPD host override; beats the config file, loses to an explicit `--host`.
pub const MPD_HOST: &str = "MPD_HOST";

/// MPD port override; beats the config file, loses to an explicit `--port`.
pub const MPD_PORT: &str = "MPD_PORT";

/// Log level for the tracing subscriber (trace/debug/info/warn/error).
pub const TMPC_LOG: &str = "TMPC_LOG";

/// Read-only view of the process environment.
pub trait Environment {
    /// Returns the variable's value, or `None` if unset or not unicode.
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl Environment for SystemEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Synthetic environment for tests.
impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
