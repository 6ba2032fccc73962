// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exact substring containment.
//!
//! - `&str` inputs: memchr::memmem (linear time)
//! - Arbitrary code-unit slices: naive scan over candidate offsets
//!
//! UTF-8 is self-synchronizing, so a byte-level match on two `&str` values
//! always starts and ends on char boundaries. Byte containment and
//! code-point containment therefore agree for every valid input.

use memchr::memmem;

/// Returns true if `pattern` occurs as a contiguous run within `text`.
///
/// The empty pattern is contained in every text, including the empty one.
/// Comparison is exact and case-sensitive.
pub fn contains(text: &str, pattern: &str) -> bool {
    if pattern.len() > text.len() {
        return false;
    }
    memmem::find(text.as_bytes(), pattern.as_bytes()).is_some()
}

/// Naive scan over any sequence of code units.
///
/// Tries every start offset from `0` to `text.len() - pattern.len()` and
/// compares element by element. O(n·m) in the worst case.
pub fn contains_units<T: PartialEq>(text: &[T], pattern: &[T]) -> bool {
    if pattern.is_empty() {
        return true;
    }
    if pattern.len() > text.len() {
        return false;
    }
    (0..=text.len() - pattern.len()).any(|start| {
        text[start..start + pattern.len()]
            .iter()
            .zip(pattern)
            .all(|(a, b)| a == b)
    })
}

/// A pattern compiled once and tested against many texts.
pub struct Matcher {
    pattern: String,
    finder: memmem::Finder<'static>,
}

impl Matcher {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            finder: memmem::Finder::new(pattern.as_bytes()).into_owned(),
        }
    }

    /// The pattern this matcher searches for.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.finder.find(text.as_bytes()).is_some()
    }
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field("pattern", &self.pattern)
            .finish()
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
