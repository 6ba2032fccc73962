// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::io;

use termcolor::WriteColor;

use super::ReportFormatter;
use crate::color::scheme;
use crate::scan::ScanSummary;

/// Text format report formatter.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn write_to(&self, summary: &ScanSummary, out: &mut dyn WriteColor) -> io::Result<()> {
        writeln!(out, "Input text: {}", summary.text)?;
        for outcome in &summary.outcomes {
            write!(out, "Pattern ")?;
            out.set_color(&scheme::pattern())?;
            write!(out, "{}", outcome.pattern)?;
            out.reset()?;
            write!(out, " was ")?;
            if outcome.found {
                out.set_color(&scheme::found())?;
                write!(out, "found")?;
            } else {
                out.set_color(&scheme::missing())?;
                write!(out, "not found")?;
            }
            out.reset()?;
            writeln!(out)?;
        }
        Ok(())
    }
}
