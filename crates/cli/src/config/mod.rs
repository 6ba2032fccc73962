// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading for `substr.toml`.
//!
//! ```toml
//! version = 1
//! text = "This is my input text"
//! patterns = ["This", "is", "ab"]
//! ```

pub mod defaults;

use std::path::{Path, PathBuf};

/// Errors raised while loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{}: missing required field `version`", .path.display())]
    MissingVersion { path: PathBuf },

    #[error(
        "{}: unsupported config version {found} (expected {})",
        .path.display(),
        defaults::VERSION
    )]
    UnsupportedVersion { path: PathBuf, found: i64 },

    #[error("{}: `{field}` must be {expected}", .path.display())]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        expected: &'static str,
    },
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub text: String,
    pub patterns: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text: defaults::TEXT.to_string(),
            patterns: Self::default_patterns(),
        }
    }
}

impl Config {
    pub fn default_patterns() -> Vec<String> {
        defaults::PATTERNS.iter().map(|p| (*p).to_string()).collect()
    }

    /// Apply command-line overrides. Empty `patterns` keeps the configured list.
    pub fn with_overrides(mut self, text: Option<String>, patterns: Vec<String>) -> Self {
        if let Some(text) = text {
            self.text = text;
        }
        if !patterns.is_empty() {
            self.patterns = patterns;
        }
        self
    }
}

/// Load a config file from disk.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

/// Parse config content. `path` is only used for error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let table: toml::Table = content.parse().map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match table.get("version") {
        None => {
            return Err(ConfigError::MissingVersion {
                path: path.to_path_buf(),
            });
        }
        Some(toml::Value::Integer(v)) if *v == defaults::VERSION => {}
        Some(toml::Value::Integer(v)) => {
            return Err(ConfigError::UnsupportedVersion {
                path: path.to_path_buf(),
                found: *v,
            });
        }
        Some(_) => {
            return Err(invalid(path, "version", "an integer"));
        }
    }

    let text = match table.get("text") {
        None => defaults::TEXT.to_string(),
        Some(toml::Value::String(s)) => s.clone(),
        Some(_) => return Err(invalid(path, "text", "a string")),
    };

    let patterns = match table.get("patterns") {
        None => Config::default_patterns(),
        Some(toml::Value::Array(arr)) => arr
            .iter()
            .map(|v| v.as_str().map(String::from))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| invalid(path, "patterns", "an array of strings"))?,
        Some(_) => return Err(invalid(path, "patterns", "an array of strings")),
    };

    for key in table.keys() {
        if !matches!(key.as_str(), "version" | "text" | "patterns") {
            tracing::warn!("{}: ignoring unknown key `{}`", path.display(), key);
        }
    }

    Ok(Config { text, patterns })
}

fn invalid(path: &Path, field: &'static str, expected: &'static str) -> ConfigError {
    ConfigError::InvalidField {
        path: path.to_path_buf(),
        field,
        expected,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
