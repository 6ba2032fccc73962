// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit codes.

/// Exit codes returned by the `substr` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Report produced.
    Success = 0,
    /// `--require-all` was given and at least one pattern was not found.
    PatternsMissing = 1,
    /// Config file could not be read or is invalid.
    ConfigError = 2,
    /// Unexpected failure (e.g. writing output).
    InternalError = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}
