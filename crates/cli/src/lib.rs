// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exact substring containment, with a small reporting front end.

pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod matcher;
pub mod report;
pub mod scan;


pub use matcher::{Matcher, contains, contains_units};
pub use scan::{PatternOutcome, ScanSummary, scan, summarize};
