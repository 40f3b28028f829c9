//! Process-level logging setup.

use std::sync::OnceLock;

use crate::env::{self, Environment};

static INIT: OnceLock<()> = OnceLock::new();

fn parse_level(env: &dyn Environment) -> tracing::Level {
    match env
        .var(env::TMPC_LOG)
        .unwrap_or_default()
        .to_ascii_lowercase()
        .as_str()
    {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}

/// Initialize tracing output at the level named by `TMPC_LOG`.
///
/// Safe to call more than once; only the first call installs the
/// subscriber. Best-effort by design — a failed install never blocks
/// startup.
pub fn init(env: &dyn Environment) {
    if INIT.get().is_some() {
        return;
    }
    let level = parse_level(env);
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    let _ = INIT.set(());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(value: Option<&str>) -> HashMap<String, String> {
        match value {
            Some(v) => [("TMPC_LOG".to_string(), v.to_string())].into(),
            None => HashMap::new(),
        }
    }

    #[test]
    fn unset_defaults_to_info() {
        assert_eq!(parse_level(&env(None)), tracing::Level::INFO);
    }

    #[test]
    fn level_names_parse_case_insensitively() {
        assert_eq!(parse_level(&env(Some("DEBUG"))), tracing::Level::DEBUG);
        assert_eq!(parse_level(&env(Some("trace"))), tracing::Level::TRACE);
        assert_eq!(parse_level(&env(Some("Warn"))), tracing::Level::WARN);
    }

    #[test]
    fn garbage_falls_back_to_info() {
        assert_eq!(parse_level(&env(Some("loud"))), tracing::Level::INFO);
    }
}
