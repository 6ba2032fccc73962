// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::color::ColorMode;

/// Report which patterns occur in a text
#[derive(Parser)]
#[command(name = "substr")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Patterns to look for (default: patterns from config)
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Text to search (default: text from config)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "SUBSTR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Exit with code 1 if any pattern is not found
    #[arg(long)]
    pub require_all: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
