// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A single match and its capture groups.

use std::ops::Range;

/// One occurrence of a pattern in a subject string.
///
/// Spans are byte ranges into the subject and always fall on character
/// boundaries. Group 0 is the whole match; groups 1..N are the
/// parenthesized sub-patterns, which may be absent for a given match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'t> {
    subject: &'t str,
    spans: Vec<Option<Range<usize>>>,
}

impl<'t> Match<'t> {
    /// Build a match from group spans. `spans[0]` must be present.
    pub(crate) fn new(subject: &'t str, spans: Vec<Option<Range<usize>>>) -> Self {
        debug_assert!(matches!(spans.first(), Some(Some(_))));
        Self { subject, spans }
    }

    /// A match without capture groups.
    pub(crate) fn whole(subject: &'t str, range: Range<usize>) -> Self {
        Self {
            subject,
            spans: vec![Some(range)],
        }
    }

    /// Convert engine captures into a match.
    pub(crate) fn from_captures(subject: &'t str, caps: &regex::Captures<'t>) -> Self {
        let spans = caps.iter().map(|g| g.map(|m| m.range())).collect();
        Self::new(subject, spans)
    }

    /// The subject this match was found in.
    pub fn subject(&self) -> &'t str {
        self.subject
    }

    /// Span of the whole match.
    pub fn range(&self) -> Range<usize> {
        self.group_range(0).unwrap_or(0..0)
    }

    pub fn start(&self) -> usize {
        self.range().start
    }

    pub fn end(&self) -> usize {
        self.range().end
    }

    /// Text of the whole match.
    pub fn as_str(&self) -> &'t str {
        &self.subject[self.range()]
    }

    /// Number of groups, including group 0.
    pub fn group_len(&self) -> usize {
        self.spans.len()
    }

    /// Span of group `index`, or `None` when it did not participate.
    pub fn group_range(&self, index: usize) -> Option<Range<usize>> {
        self.spans.get(index).cloned().flatten()
    }

    /// Resolve group `index` against the subject.
    ///
    /// `None` means the group did not participate (or does not exist);
    /// `Some("")` means it matched the empty string.
    pub fn group(&self, index: usize) -> Option<&'t str> {
        self.group_range(index).map(|r| &self.subject[r])
    }

    /// Texts of all participating groups in index order.
    ///
    /// Non-participating groups are skipped, so list positions only line
    /// up with group indices when every group participated.
    pub fn groups(&self) -> Vec<String> {
        (0..self.group_len())
            .filter_map(|i| self.group(i))
            .map(String::from)
            .collect()
    }

    /// Span of the whole match in UTF-16 code units.
    pub fn utf16_range(&self) -> Range<usize> {
        utf16_range(self.subject, self.range())
    }

    /// Span of group `index` in UTF-16 code units.
    pub fn group_utf16_range(&self, index: usize) -> Option<Range<usize>> {
        self.group_range(index)
            .map(|r| utf16_range(self.subject, r))
    }
}

/// Convert a byte range on character boundaries to UTF-16 code units.
pub fn utf16_range(subject: &str, range: Range<usize>) -> Range<usize> {
    let start = utf16_len(&subject[..range.start]);
    let len = utf16_len(&subject[range]);
    start..start + len
}

fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

#[cfg(test)]
#[path = "captures_tests.rs"]
mod tests;
