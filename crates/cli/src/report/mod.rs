// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report output for scan results.
//!
//! - text: one `Pattern <p> was <found|not found>` line per pattern
//! - json: a single object with per-pattern results and totals

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use std::io;

use termcolor::WriteColor;

use crate::cli::OutputFormat;
use crate::scan::ScanSummary;

/// Formats a scan summary for one output format.
pub trait ReportFormatter {
    /// Write the report to a (possibly colored) stream.
    fn write_to(&self, summary: &ScanSummary, out: &mut dyn WriteColor) -> io::Result<()>;

    /// Render the report without color.
    fn format(&self, summary: &ScanSummary) -> io::Result<String> {
        let mut buf = termcolor::NoColor::new(Vec::new());
        self.write_to(summary, &mut buf)?;
        String::from_utf8(buf.into_inner())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Pick the formatter for `format`.
pub fn formatter(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Render `summary` as an uncolored string.
pub fn format_report(summary: &ScanSummary, format: OutputFormat) -> io::Result<String> {
    formatter(format).format(summary)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
