// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use std::io;

use serde::Serialize;
use termcolor::WriteColor;

use super::ReportFormatter;
use crate::scan::{PatternOutcome, ScanSummary};

/// JSON format report formatter.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonReport<'a> {
    text: &'a str,
    patterns: &'a [PatternOutcome],
    found: usize,
    missing: usize,
}

impl ReportFormatter for JsonFormatter {
    fn write_to(&self, summary: &ScanSummary, out: &mut dyn WriteColor) -> io::Result<()> {
        let report = JsonReport {
            text: &summary.text,
            patterns: &summary.outcomes,
            found: summary.found_count(),
            missing: summary.missing_count(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)
    }
}
