//! Key-bindings file loading.
//!
//! The bindings file maps one key name to one action per line
//! (`key = action`, `#` comments). A missing file is fine — fresh installs
//! have none — and [`Bindings::generate_defaults`] afterwards fills in every
//! default the file did not rebind, so the client always starts with a
//! complete keymap.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::error::BindingsError;

/// Built-in keymap. File entries always win over these.
const DEFAULT_BINDINGS: &[(&str, &str)] = &[
    ("q", "quit"),
    ("j", "scroll_down"),
    ("k", "scroll_up"),
    ("enter", "press_enter"),
    ("space", "add_item_to_playlist"),
    ("p", "pause"),
    ("s", "stop"),
    (">", "next_track"),
    ("<", "previous_track"),
    ("left", "seek_backward"),
    ("right", "seek_forward"),
    ("/", "find_forward"),
    ("tab", "next_screen"),
    ("1", "show_help"),
    ("2", "show_playlist"),
    ("3", "show_browser"),
];

/// Key-to-action map read at startup.
#[derive(Debug, Default)]
pub struct Bindings {
    map: HashMap<String, String>,
}

impl Bindings {
    /// Read a bindings file. A missing file yields an empty set; a file
    /// that exists but cannot be read or parsed is fatal.
    pub fn read(path: &Path) -> Result<Bindings, BindingsError> {
        if !path.exists() {
            debug!(path = %path.display(), "bindings file not found, using defaults");
            return Ok(Bindings::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| BindingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut map = HashMap::new();
        for (i, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, action)) = line.split_once('=') else {
                return Err(BindingsError::Parse {
                    path: path.to_path_buf(),
                    line: i + 1,
                    text: line.to_string(),
                });
            };
            let (key, action) = (key.trim(), action.trim());
            if key.is_empty() || action.is_empty() {
                return Err(BindingsError::Parse {
                    path: path.to_path_buf(),
                    line: i + 1,
                    text: line.to_string(),
                });
            }
            map.insert(key.to_string(), action.to_string());
        }

        Ok(Bindings { map })
    }

    /// Fill in every default binding whose key the file did not rebind.
    pub fn generate_defaults(&mut self) {
        for (key, action) in DEFAULT_BINDINGS {
            self.map
                .entry((*key).to_string())
                .or_insert_with(|| (*action).to_string());
        }
    }

    /// The action bound to `key`, if any.
    pub fn action(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("bindings");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_empty_set() {
        let bindings = Bindings::read(Path::new("/nonexistent/bindings")).unwrap();
        assert!(bindings.is_empty());
    }

    #[test]
    fn reads_entries_and_skips_comments() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "# my bindings\n\nq = show_playlist\nx = quit\n");
        let bindings = Bindings::read(&path).unwrap();
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings.action("q"), Some("show_playlist"));
        assert_eq!(bindings.action("x"), Some("quit"));
    }

    #[test]
    fn malformed_line_is_fatal_with_line_number() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "q = quit\nthis is not a binding\n");
        let err = Bindings::read(&path).unwrap_err();
        match err {
            BindingsError::Parse { line, text, .. } => {
                assert_eq!(line, 2);
                assert_eq!(text, "this is not a binding");
            }
            other => panic!("expected Parse, got: {other:?}"),
        }
    }

    #[test]
    fn empty_action_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "q =\n");
        assert!(matches!(
            Bindings::read(&path),
            Err(BindingsError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn generate_defaults_fills_unbound_keys() {
        let mut bindings = Bindings::default();
        bindings.generate_defaults();
        assert_eq!(bindings.len(), DEFAULT_BINDINGS.len());
        assert_eq!(bindings.action("q"), Some("quit"));
    }

    #[test]
    fn file_entries_win_over_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "q = show_playlist\n");
        let mut bindings = Bindings::read(&path).unwrap();
        bindings.generate_defaults();
        assert_eq!(bindings.action("q"), Some("show_playlist"));
        // the rest of the defaults are still present
        assert_eq!(bindings.action("j"), Some("scroll_down"));
    }

    #[test]
    fn generate_defaults_is_idempotent() {
        let mut bindings = Bindings::default();
        bindings.generate_defaults();
        let before = bindings.len();
        bindings.generate_defaults();
        assert_eq!(bindings.len(), before);
    }
}
