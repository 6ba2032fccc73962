// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use substr::cli::Cli;
use substr::error::ExitCode;

mod cmd_scan;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("SUBSTR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cmd_scan::run(&cli) {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("substr: {}", e);
            let code = if e.downcast_ref::<substr::config::ConfigError>().is_some() {
                ExitCode::ConfigError
            } else {
                ExitCode::InternalError
            };
            code.into()
        }
    }
}
