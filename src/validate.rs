//! Strict-mode validation: detect unknown options in configuration files.
//!
//! Uses `serde_ignored` to deserialize into the all-optional layer struct and
//! capture any keys the layer doesn't consume. Each unknown option is
//! reported with its file path and a best-effort line number.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::ConfigError;

/// Validate that a TOML file contains no options unknown to layer type `L`.
pub fn check_unknown_keys<L: DeserializeOwned>(
    content: &str,
    path: &Path,
) -> Result<(), ConfigError> {
    let mut unknown: Vec<String> = Vec::new();

    let deserializer = toml::Deserializer::new(content);
    let _layer: L = serde_ignored::deserialize(deserializer, |ignored| {
        unknown.push(ignored.to_string());
    })
    .map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if unknown.is_empty() {
        return Ok(());
    }

    let errors: Vec<ConfigError> = unknown
        .into_iter()
        .map(|key| {
            let line = find_key_line(content, &key);
            ConfigError::UnknownKey {
                key,
                path: path.to_path_buf(),
                line,
            }
        })
        .collect();

    Err(ConfigError::UnknownKeys(errors))
}

/// Find the 1-indexed line of a key assignment by scanning the source text.
///
/// For a dotted key only the leaf segment is matched. This is a best-effort
/// heuristic for error messages; returns 0 if the key cannot be located.
fn find_key_line(content: &str, key: &str) -> usize {
    let leaf = key.rsplit('.').next().unwrap_or(key);

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(leaf)
            && rest.trim_start().starts_with('=')
        {
            return i + 1;
        }
    }
    0
}
