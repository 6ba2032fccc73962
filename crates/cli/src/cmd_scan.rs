// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Default command: check each pattern against the text and print a report.

use termcolor::StandardStream;

use substr::cli::Cli;
use substr::config::{self, Config};
use substr::discovery;
use substr::error::ExitCode;
use substr::report;
use substr::scan::summarize;

/// Run the scan with config resolved from flags, file, and defaults.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(cli)?.with_overrides(cli.text.clone(), cli.patterns.clone());
    tracing::debug!(
        text = %config.text,
        patterns = config.patterns.len(),
        "resolved configuration"
    );

    let summary = summarize(&config.text, &config.patterns);

    let mut stdout = StandardStream::stdout(cli.color.resolve(cli.no_color));
    report::formatter(cli.output).write_to(&summary, &mut stdout)?;

    if cli.require_all && !summary.all_found() {
        tracing::debug!(missing = summary.missing_count(), "patterns missing");
        return Ok(ExitCode::PatternsMissing);
    }
    Ok(ExitCode::Success)
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => discovery::find_config(&std::env::current_dir()?),
    };

    match path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            Ok(config::load(&path)?)
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            Ok(Config::default())
        }
    }
}
