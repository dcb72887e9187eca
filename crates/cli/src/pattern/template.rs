// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Replacement templates with `{N}` group placeholders.
//!
//! `{N}` inserts group N (empty when the group did not participate),
//! `{{` and `}}` insert literal braces, everything else is copied.

use std::sync::LazyLock;

use super::captures::Match;
use super::matcher::{Pattern, PatternError};
use super::replacer::Replacer;

static PLACEHOLDER: LazyLock<Pattern> =
    LazyLock::new(|| Pattern::new(r"\{\{|\}\}|\{(\d+)\}|[{}]"));

/// A parsed replacement template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Group(usize),
}

impl Template {
    pub fn parse(template: &str) -> Result<Self, PatternError> {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut last = 0;

        for m in PLACEHOLDER.find_iter(template) {
            text.push_str(&template[last..m.start()]);
            last = m.end();

            match (m.as_str(), m.group(1)) {
                ("{{", _) => text.push('{'),
                ("}}", _) => text.push('}'),
                (_, Some(digits)) => {
                    let index = digits
                        .parse()
                        .map_err(|_| invalid(template, "group index out of range"))?;
                    if !text.is_empty() {
                        segments.push(Segment::Text(std::mem::take(&mut text)));
                    }
                    segments.push(Segment::Group(index));
                }
                (brace, None) => {
                    let message = format!(
                        "unmatched `{}` at offset {} (use `{}{}` for a literal)",
                        brace,
                        m.start(),
                        brace,
                        brace
                    );
                    return Err(invalid(template, &message));
                }
            }
        }
        text.push_str(&template[last..]);
        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }

        Ok(Self {
            source: template.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Highest group index referenced, if any.
    pub fn max_group(&self) -> Option<usize> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Group(i) => Some(*i),
                Segment::Text(_) => None,
            })
            .max()
    }

    /// Expand the template for one match.
    pub fn render(&self, m: &Match<'_>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Group(i) => out.push_str(m.group(*i).unwrap_or("")),
            }
        }
        out
    }

    /// Bind this template to a pattern.
    ///
    /// Fails when the template references a group the pattern lacks.
    pub fn into_replacer(self, pattern: Pattern) -> Result<Replacer, PatternError> {
        let max = self.max_group().unwrap_or(0);
        if max >= pattern.group_len() {
            return Err(invalid(
                &self.source,
                &format!(
                    "group {} does not exist (pattern `{}` has {} group(s))",
                    max,
                    pattern.as_str(),
                    pattern.group_len() - 1
                ),
            ));
        }
        Ok(Replacer::from_pattern(pattern, move |m, _| self.render(m)))
    }
}

fn invalid(template: &str, message: &str) -> PatternError {
    PatternError::Template {
        template: template.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
