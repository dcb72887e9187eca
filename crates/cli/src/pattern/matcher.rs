// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled patterns with automatic matcher selection.

use aho_corasick::{AhoCorasick, MatchKind};
use memchr::memmem::Finder;
use regex::Regex;

use super::captures::Match;
use super::options::RegexOptions;

/// A compiled, immutable pattern.
///
/// Build once and reuse across any number of subjects. Matching never
/// fails; only construction can.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    options: RegexOptions,
    matcher: Matcher,
}

/// Which engine backs a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatcherKind {
    /// Single literal string (memchr).
    Literal,
    /// Alternation of literal strings (Aho-Corasick).
    MultiLiteral,
    /// Full regex.
    Regex,
}

#[derive(Debug, Clone)]
enum Matcher {
    Literal(LiteralMatcher),
    MultiLiteral(MultiLiteralMatcher),
    Regex(RegexMatcher),
}

/// Matcher for single literal strings using SIMD-optimized memchr.
#[derive(Debug, Clone)]
struct LiteralMatcher {
    finder: Finder<'static>,
}

/// Matcher for multiple literal strings using an Aho-Corasick automaton.
#[derive(Debug, Clone)]
struct MultiLiteralMatcher {
    automaton: AhoCorasick,
}

/// Matcher for everything else.
#[derive(Debug, Clone)]
struct RegexMatcher {
    regex: Regex,
}

/// A match with resolved line information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// 1-based line number.
    pub line: u32,
    /// The matched text.
    pub text: String,
    /// Byte offset in the subject.
    pub offset: usize,
    /// Byte offset of the match within its line.
    pub column: usize,
    /// Full content of the line containing the match start.
    pub line_content: String,
}

/// Error during pattern compilation.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("invalid template `{template}`: {message}")]
    Template { template: String, message: String },
}

impl Pattern {
    /// Compile a pattern, aborting if it is invalid.
    ///
    /// Only for patterns written as literals in source code, where an
    /// invalid pattern is a programming error. Use [`Pattern::compile`]
    /// for anything that comes from input or configuration.
    #[track_caller]
    pub fn new(pattern: &str) -> Self {
        Self::with_options(pattern, RegexOptions::default())
    }

    /// Like [`Pattern::new`] with explicit options.
    #[track_caller]
    #[allow(clippy::panic)]
    pub fn with_options(pattern: &str, options: RegexOptions) -> Self {
        match Self::compile(pattern, options) {
            Ok(compiled) => compiled,
            Err(e) => panic!("illegal regular expression: {pattern} ({e})"),
        }
    }

    /// Compile a pattern string into the best-suited matcher.
    ///
    /// - Plain literal -> memchr finder
    /// - Pure alternation of literals -> Aho-Corasick (leftmost-first)
    /// - Anything else -> regex
    pub fn compile(pattern: &str, options: RegexOptions) -> Result<Self, PatternError> {
        let matcher = if !options.is_literal_compatible() || pattern.is_empty() {
            Matcher::Regex(RegexMatcher::new(pattern, &options)?)
        } else if options.ignore_metacharacters || is_literal(pattern) {
            Matcher::Literal(LiteralMatcher::new(pattern))
        } else if let Some(literals) = extract_alternation_literals(pattern) {
            Matcher::MultiLiteral(MultiLiteralMatcher::new(&literals)?)
        } else {
            Matcher::Regex(RegexMatcher::new(pattern, &options)?)
        };

        tracing::trace!(pattern, kind = ?matcher.kind(), "compiled pattern");

        Ok(Self {
            source: pattern.to_string(),
            options,
            matcher,
        })
    }

    /// The pattern text as given.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn options(&self) -> RegexOptions {
        self.options
    }

    pub fn kind(&self) -> MatcherKind {
        self.matcher.kind()
    }

    /// Number of groups every match carries, including group 0.
    pub fn group_len(&self) -> usize {
        match &self.matcher {
            Matcher::Regex(m) => m.regex.captures_len(),
            Matcher::Literal(_) | Matcher::MultiLiteral(_) => 1,
        }
    }

    pub fn is_match(&self, subject: &str) -> bool {
        match &self.matcher {
            Matcher::Literal(m) => m.finder.find(subject.as_bytes()).is_some(),
            Matcher::MultiLiteral(m) => m.automaton.is_match(subject),
            Matcher::Regex(m) => m.regex.is_match(subject),
        }
    }

    /// Iterate non-overlapping matches left to right.
    pub fn find_iter<'p, 't>(
        &'p self,
        subject: &'t str,
    ) -> Box<dyn Iterator<Item = Match<'t>> + 'p>
    where
        't: 'p,
    {
        match &self.matcher {
            Matcher::Literal(m) => {
                let len = m.finder.needle().len();
                Box::new(
                    m.finder
                        .find_iter(subject.as_bytes())
                        .map(move |pos| Match::whole(subject, pos..pos + len)),
                )
            }
            Matcher::MultiLiteral(m) => Box::new(
                m.automaton
                    .find_iter(subject)
                    .map(move |found| Match::whole(subject, found.range())),
            ),
            Matcher::Regex(m) if m.regex.captures_len() == 1 => Box::new(
                m.regex
                    .find_iter(subject)
                    .map(move |found| Match::whole(subject, found.range())),
            ),
            Matcher::Regex(m) => Box::new(
                m.regex
                    .captures_iter(subject)
                    .map(move |caps| Match::from_captures(subject, &caps)),
            ),
        }
    }

    /// Find all non-overlapping matches. Empty when nothing matches.
    pub fn find_all<'t>(&self, subject: &'t str) -> Vec<Match<'t>> {
        self.find_iter(subject).collect()
    }

    /// Participating group texts for every match.
    pub fn matches_groups(&self, subject: &str) -> Vec<Vec<String>> {
        self.find_iter(subject).map(|m| m.groups()).collect()
    }

    /// Find all matches with line numbers.
    pub fn find_all_with_lines(&self, subject: &str) -> Vec<LineMatch> {
        let mut cursor = LineCursor::new(subject);
        self.find_iter(subject)
            .map(|m| {
                let line = cursor.seek(m.start());
                LineMatch {
                    line: line.number,
                    text: m.as_str().to_string(),
                    offset: m.start(),
                    column: m.start() - line.start,
                    line_content: line.content.to_string(),
                }
            })
            .collect()
    }
}

/// The line a [`LineCursor`] is positioned on.
struct CursorLine<'a> {
    number: u32,
    start: usize,
    content: &'a str,
}

/// Line tracker for offsets visited in increasing order.
///
/// Each newline is counted once across all seeks.
struct LineCursor<'a> {
    content: &'a str,
    pos: usize,
    line: u32,
    line_start: usize,
    line_end: Option<usize>,
}

impl<'a> LineCursor<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            content,
            pos: 0,
            line: 1,
            line_start: 0,
            line_end: None,
        }
    }

    fn seek(&mut self, offset: usize) -> CursorLine<'a> {
        if offset < self.pos {
            *self = Self::new(self.content);
        }
        let bytes = self.content.as_bytes();
        for i in memchr::memchr_iter(b'\n', &bytes[self.pos..offset]) {
            self.line += 1;
            self.line_start = self.pos + i + 1;
            self.line_end = None;
        }
        self.pos = offset;

        let end = match self.line_end {
            Some(end) => end,
            None => {
                let end = memchr::memchr(b'\n', &bytes[offset..]).map_or(bytes.len(), |i| offset + i);
                self.line_end = Some(end);
                end
            }
        };

        CursorLine {
            number: self.line,
            start: self.line_start,
            content: self.content[self.line_start..end].trim_end_matches('\r'),
        }
    }
}

impl Matcher {
    fn kind(&self) -> MatcherKind {
        match self {
            Matcher::Literal(_) => MatcherKind::Literal,
            Matcher::MultiLiteral(_) => MatcherKind::MultiLiteral,
            Matcher::Regex(_) => MatcherKind::Regex,
        }
    }
}

/// Check if pattern is a plain literal (no regex metacharacters).
fn is_literal(pattern: &str) -> bool {
    !pattern.chars().any(|c| {
        matches!(
            c,
            '\\' | '.' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '|'
        )
    })
}

/// Extract literals from patterns like "foo|bar|baz".
///
/// Returns None unless every alternative is a non-empty literal.
fn extract_alternation_literals(pattern: &str) -> Option<Vec<String>> {
    let parts: Vec<&str> = pattern.split('|').collect();
    if parts.len() < 2 {
        return None;
    }

    if parts.iter().any(|part| part.is_empty() || !is_literal(part)) {
        return None;
    }

    Some(parts.into_iter().map(String::from).collect())
}

impl LiteralMatcher {
    fn new(pattern: &str) -> Self {
        Self {
            finder: Finder::new(pattern).into_owned(),
        }
    }
}

impl MultiLiteralMatcher {
    fn new(patterns: &[String]) -> Result<Self, PatternError> {
        // Leftmost-first keeps alternation priority identical to regex.
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostFirst)
            .build(patterns)
            .map_err(|e| PatternError::InvalidPattern(format!("aho-corasick error: {}", e)))?;
        Ok(Self { automaton })
    }
}

impl RegexMatcher {
    fn new(pattern: &str, options: &RegexOptions) -> Result<Self, PatternError> {
        let regex = options.builder(pattern).build()?;
        Ok(Self { regex })
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
