// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compile-time and match-time options.

use regex::RegexBuilder;

/// Flags applied when a pattern is compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegexOptions {
    /// Match letters regardless of case.
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// `.` also matches `\n`.
    pub dot_matches_new_line: bool,
    /// Allow whitespace and `#` comments in the pattern.
    pub ignore_whitespace: bool,
    /// Treat the whole pattern as a literal string.
    pub ignore_metacharacters: bool,
    /// Swap the meaning of greedy and lazy quantifiers.
    pub swap_greed: bool,
    /// Treat `\r\n` as a line terminator for `^`, `$` and `.`.
    pub crlf: bool,
    /// Unicode-aware classes and case folding.
    pub unicode: bool,
}

impl Default for RegexOptions {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            ignore_whitespace: false,
            ignore_metacharacters: false,
            swap_greed: false,
            crlf: false,
            unicode: true,
        }
    }
}

impl RegexOptions {
    /// Options that treat the pattern as a plain literal.
    pub fn literal() -> Self {
        Self {
            ignore_metacharacters: true,
            ..Self::default()
        }
    }

    /// Whether the literal fast paths can honor these options.
    ///
    /// Case folding and whitespace-insensitive syntax change what a literal
    /// matches; the remaining flags only affect metacharacters.
    pub(crate) fn is_literal_compatible(&self) -> bool {
        !self.case_insensitive && (self.ignore_metacharacters || !self.ignore_whitespace)
    }

    /// Pattern text as the engine should see it.
    pub(crate) fn source(&self, pattern: &str) -> String {
        if self.ignore_metacharacters {
            regex::escape(pattern)
        } else {
            pattern.to_string()
        }
    }

    /// Build a regex builder configured with these options.
    pub(crate) fn builder(&self, pattern: &str) -> RegexBuilder {
        let mut builder = RegexBuilder::new(&self.source(pattern));
        builder
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .ignore_whitespace(self.ignore_whitespace && !self.ignore_metacharacters)
            .swap_greed(self.swap_greed)
            .crlf(self.crlf)
            .unicode(self.unicode);
        builder
    }
}

/// Flags applied to a single replace call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchingOptions {
    /// Only accept matches that start exactly where the previous match
    /// ended (or at the start of the subject for the first match).
    pub anchored: bool,
}

impl MatchingOptions {
    pub fn anchored() -> Self {
        Self { anchored: true }
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
