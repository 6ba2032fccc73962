// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color handling.

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// Value of `--color`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a concrete choice, honoring `--no-color` and the terminal.
    pub fn resolve(self, no_color: bool) -> ColorChoice {
        match self {
            ColorMode::Always => resolve_color(true, no_color),
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto => {
                let env_no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
                resolve_auto(std::io::stdout().is_terminal(), env_no_color, no_color)
            }
        }
    }
}

/// `--color=auto`: color only on a terminal, and never with `NO_COLOR` set.
pub fn resolve_auto(is_terminal: bool, env_no_color: bool, no_color: bool) -> ColorChoice {
    if !is_terminal || env_no_color {
        ColorChoice::Never
    } else {
        resolve_color(false, no_color)
    }
}

/// `no_color` always wins over `force_color`.
pub fn resolve_color(force_color: bool, no_color: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if force_color {
        ColorChoice::Always
    } else {
        ColorChoice::Auto
    }
}

/// Color specs used by the text report.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    pub fn found() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    pub fn missing() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    pub fn pattern() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
