// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for config file handling.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

#[test]
fn discovered_config_supplies_text_and_patterns() {
    let dir = project_with_config(
        "version = 1\ntext = \"the quick brown fox\"\npatterns = [\"quick\", \"slow\"]\n",
    );
    substr_cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(
            "Input text: the quick brown fox\n\
             Pattern quick was found\n\
             Pattern slow was not found\n",
        );
}

#[test]
fn config_discovered_from_subdirectory() {
    let dir = project_with_config("version = 1\ntext = \"nested\"\npatterns = [\"est\"]\n");
    std::fs::create_dir_all(dir.path().join("a/b")).unwrap();
    substr_cmd()
        .current_dir(dir.path().join("a/b"))
        .assert()
        .success()
        .stdout(predicates::str::contains("Pattern est was found"));
}

#[test]
fn arguments_override_config() {
    let dir = project_with_config("version = 1\ntext = \"abc\"\npatterns = [\"a\"]\n");
    substr_cmd()
        .current_dir(dir.path())
        .args(["--text", "xyz", "y"])
        .assert()
        .success()
        .stdout("Input text: xyz\nPattern y was found\n");
}

#[test]
fn explicit_config_flag() {
    let dir = empty_project();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "version = 1\ntext = \"custom\"\npatterns = [\"tom\"]\n").unwrap();
    substr_cmd()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicates::str::contains("Pattern tom was found"));
}

#[test]
fn config_from_env_var() {
    let dir = empty_project();
    let path = dir.path().join("env.toml");
    std::fs::write(&path, "version = 1\npatterns = [\"zzz\"]\n").unwrap();
    substr_cmd()
        .current_dir(dir.path())
        .env("SUBSTR_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicates::str::contains("Pattern zzz was not found"));
}

#[test]
fn invalid_config_exits_with_code_2() {
    let dir = project_with_config("version = 7\n");
    substr_cmd()
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicates::str::contains("unsupported config version 7"));
}

#[test]
fn missing_explicit_config_exits_with_code_2() {
    let dir = empty_project();
    substr_cmd()
        .current_dir(dir.path())
        .args(["--config", "does-not-exist.toml"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to read"));
}

#[test]
fn unknown_key_warns_but_succeeds() {
    let dir = project_with_config("version = 1\nextra = true\n");
    substr_cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("unknown key `extra`"));
}
