// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::process::Command;

use tempfile::TempDir;

/// Returns a Command configured to run the substr binary.
///
/// Clears environment that would otherwise leak into results.
pub fn substr_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("substr"));
    cmd.env_remove("SUBSTR_CONFIG").env_remove("SUBSTR_LOG");
    cmd
}

/// A temp directory that is its own git root, so config discovery stops there.
pub fn empty_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}

/// Like [`empty_project`], with a substr.toml at the root.
pub fn project_with_config(config: &str) -> TempDir {
    let dir = empty_project();
    std::fs::write(dir.path().join("substr.toml"), config).unwrap();
    dir
}
