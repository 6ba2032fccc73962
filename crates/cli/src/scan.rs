// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluates a list of patterns against one text.

use serde::Serialize;

use crate::matcher::contains;

/// Whether a single pattern was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternOutcome {
    pub pattern: String,
    pub found: bool,
}

/// Outcomes for every pattern, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub text: String,
    pub outcomes: Vec<PatternOutcome>,
}

impl ScanSummary {
    pub fn found_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.found).count()
    }

    pub fn missing_count(&self) -> usize {
        self.outcomes.len() - self.found_count()
    }

    /// True when every pattern was found (vacuously true with no patterns).
    pub fn all_found(&self) -> bool {
        self.outcomes.iter().all(|o| o.found)
    }
}

/// Check each pattern against `text`. Duplicates are kept.
pub fn scan<S: AsRef<str>>(text: &str, patterns: &[S]) -> Vec<PatternOutcome> {
    patterns
        .iter()
        .map(|p| {
            let pattern = p.as_ref();
            let found = contains(text, pattern);
            tracing::debug!(pattern, found, "checked pattern");
            PatternOutcome {
                pattern: pattern.to_string(),
                found,
            }
        })
        .collect()
}

/// Run [`scan`] and keep the text alongside the outcomes.
pub fn summarize<S: AsRef<str>>(text: &str, patterns: &[S]) -> ScanSummary {
    ScanSummary {
        text: text.to_string(),
        outcomes: scan(text, patterns),
    }
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
