//! Home-directory expansion and conventional config locations.

use std::path::{Path, PathBuf};

use crate::env::{self, Environment};
use crate::error::BootstrapError;

/// The user's home directory, resolved once from the environment.
///
/// Every `~` expansion goes through a value of this type, so expansion
/// before the home directory is known is unrepresentable rather than a
/// runtime assertion.
#[derive(Debug, Clone)]
pub struct HomeDir(PathBuf);

impl HomeDir {
    /// Resolve from `$HOME`. Its absence is an environment precondition
    /// failure, distinct from any flag error.
    pub fn from_env(env: &dyn Environment) -> Result<Self, BootstrapError> {
        env.var(env::HOME)
            .map(|home| Self(PathBuf::from(home)))
            .ok_or(BootstrapError::MissingHome)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Expand a leading `~` to the home directory.
    ///
    /// Only the leading marker is replaced; a path without one is returned
    /// unchanged, which makes expansion idempotent.
    pub fn expand(&self, path: &str) -> PathBuf {
        match path.strip_prefix('~') {
            Some(rest) => {
                let mut expanded = self.0.as_os_str().to_os_string();
                expanded.push(rest);
                PathBuf::from(expanded)
            }
            None => PathBuf::from(path),
        }
    }
}

/// The platform config root from `$XDG_CONFIG_HOME`, falling back to
/// `~/.config/`. The result carries exactly one trailing separator so
/// subdirectories can be appended directly.
pub fn xdg_config_home(env: &dyn Environment) -> String {
    match env.var(env::XDG_CONFIG_HOME) {
        Some(dir) if !dir.is_empty() => format!("{}/", dir.trim_end_matches('/')),
        _ => "~/.config/".to_string(),
    }
}

/// The two conventional config-file candidates, priority-ascending:
/// the dot-directory first, the XDG location second (later files win in
/// the loader's merge). Both may still contain a `~` for later expansion.
pub fn default_config_paths(env: &dyn Environment) -> Vec<String> {
    vec![
        "~/.tmpc/config.toml".to_string(),
        format!("{}tmpc/config.toml", xdg_config_home(env)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn home() -> HomeDir {
        HomeDir::from_env(&env(&[("HOME", "/home/u")])).unwrap()
    }

    #[test]
    fn missing_home_is_an_error() {
        let result = HomeDir::from_env(&env(&[]));
        assert!(matches!(result, Err(BootstrapError::MissingHome)));
    }

    #[test]
    fn expand_replaces_leading_tilde() {
        assert_eq!(home().expand("~/custom"), PathBuf::from("/home/u/custom"));
    }

    #[test]
    fn expand_leaves_absolute_path_alone() {
        assert_eq!(home().expand("/etc/tmpc"), PathBuf::from("/etc/tmpc"));
    }

    #[test]
    fn expand_leaves_interior_tilde_alone() {
        assert_eq!(home().expand("/tmp/~x"), PathBuf::from("/tmp/~x"));
    }

    #[test]
    fn expand_is_idempotent() {
        let h = home();
        let once = h.expand("~/a/b");
        let twice = h.expand(once.to_str().unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn xdg_unset_falls_back_to_dot_config() {
        assert_eq!(xdg_config_home(&env(&[])), "~/.config/");
    }

    #[test]
    fn xdg_empty_treated_as_unset() {
        assert_eq!(xdg_config_home(&env(&[("XDG_CONFIG_HOME", "")])), "~/.config/");
    }

    #[test]
    fn xdg_gains_exactly_one_trailing_slash() {
        let e = env(&[("XDG_CONFIG_HOME", "/custom/cfg")]);
        assert_eq!(xdg_config_home(&e), "/custom/cfg/");
        let e = env(&[("XDG_CONFIG_HOME", "/custom/cfg//")]);
        assert_eq!(xdg_config_home(&e), "/custom/cfg/");
    }

    #[test]
    fn default_candidates_are_dotdir_then_xdg() {
        let paths = default_config_paths(&env(&[("XDG_CONFIG_HOME", "/xdg")]));
        assert_eq!(
            paths,
            vec![
                "~/.tmpc/config.toml".to_string(),
                "/xdg/tmpc/config.toml".to_string()
            ]
        );
    }

    #[test]
    fn default_candidates_keep_tilde_when_xdg_unset() {
        let paths = default_config_paths(&env(&[]));
        assert_eq!(paths[1], "~/.config/tmpc/config.toml");
    }
}
