// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.

/// Config file name searched for by discovery.
pub const CONFIG_FILE: &str = "substr.toml";

/// The only supported config `version`.
pub const VERSION: i64 = 1;

/// Text searched when neither the config nor `--text` provide one.
pub const TEXT: &str = "This is my input text";

/// Patterns checked when neither the config nor the command line provide any.
pub const PATTERNS: &[&str] = &["This", "is", "ab"];
