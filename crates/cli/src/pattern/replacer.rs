// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Callback-driven replacement.
//!
//! The engine is only used to discover matches. Substitution is an
//! explicit scan-and-rebuild loop so each replacement can be computed
//! from the match and its groups instead of a static template.

use std::convert::Infallible;
use std::fmt;

use super::captures::Match;
use super::matcher::{Pattern, PatternError};
use super::options::{MatchingOptions, RegexOptions};

/// Computes the replacement for one match from the match and its
/// participating group texts.
pub type ReplaceFn = dyn Fn(&Match<'_>, &[String]) -> String + Send + Sync;

/// A pattern bound to a replacement callback.
///
/// Immutable after construction and shareable across threads. There is
/// deliberately no `Deserialize` impl: the behavior lives in a runtime
/// closure, so a replacer can only be built in code.
pub struct Replacer {
    pattern: Pattern,
    replace: Box<ReplaceFn>,
}

impl Replacer {
    /// Bind a literal pattern to a callback, aborting if the pattern is
    /// invalid.
    #[track_caller]
    pub fn new<F>(pattern: &str, replace: F) -> Self
    where
        F: Fn(&Match<'_>, &[String]) -> String + Send + Sync + 'static,
    {
        Self::from_pattern(Pattern::new(pattern), replace)
    }

    /// Fallible constructor for patterns that come from input.
    pub fn compile<F>(pattern: &str, options: RegexOptions, replace: F) -> Result<Self, PatternError>
    where
        F: Fn(&Match<'_>, &[String]) -> String + Send + Sync + 'static,
    {
        Ok(Self::from_pattern(Pattern::compile(pattern, options)?, replace))
    }

    pub fn from_pattern<F>(pattern: Pattern, replace: F) -> Self
    where
        F: Fn(&Match<'_>, &[String]) -> String + Send + Sync + 'static,
    {
        Self {
            pattern,
            replace: Box::new(replace),
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Replace every match in `subject`, returning the rebuilt string.
    pub fn apply(&self, subject: &str, options: MatchingOptions) -> String {
        self.apply_counted(subject, options).0
    }

    /// [`Replacer::apply`], also returning the number of substitutions.
    pub fn apply_counted(&self, subject: &str, options: MatchingOptions) -> (String, usize) {
        let mut count = 0;
        let rebuilt: Result<String, Infallible> =
            self.pattern.try_replace_with(subject, options, |m, groups| {
                count += 1;
                Ok((self.replace)(m, groups))
            });
        match rebuilt {
            Ok(text) => (text, count),
            Err(never) => match never {},
        }
    }

    /// [`Replacer::apply`] with default matching options.
    pub fn replace_all(&self, subject: &str) -> String {
        self.apply(subject, MatchingOptions::default())
    }
}

impl fmt::Debug for Replacer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Replacer")
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

impl Pattern {
    /// Rebuild `subject` with a fallible callback.
    ///
    /// The first error aborts the remaining substitutions and is returned
    /// as-is; no partially rebuilt string escapes.
    pub fn try_replace_with<E, F>(
        &self,
        subject: &str,
        options: MatchingOptions,
        mut replace: F,
    ) -> Result<String, E>
    where
        F: FnMut(&Match<'_>, &[String]) -> Result<String, E>,
    {
        let mut out = String::with_capacity(subject.len());
        let mut last = 0;
        let mut replaced = 0usize;

        for m in scan(self, subject, options) {
            let groups = m.groups();
            let replacement = replace(&m, &groups)?;
            out.push_str(&subject[last..m.start()]);
            out.push_str(&replacement);
            last = m.end();
            replaced += 1;
        }
        out.push_str(&subject[last..]);

        tracing::trace!(pattern = self.as_str(), replaced, "rebuilt subject");
        Ok(out)
    }
}

/// Matches in replacement order, honoring the anchored option.
fn scan<'p, 't>(
    pattern: &'p Pattern,
    subject: &'t str,
    options: MatchingOptions,
) -> impl Iterator<Item = Match<'t>> + 'p
where
    't: 'p,
{
    let mut expected = 0;
    pattern.find_iter(subject).take_while(move |m| {
        if options.anchored && m.start() != expected {
            return false;
        }
        expected = m.end();
        true
    })
}

#[cfg(test)]
#[path = "replacer_tests.rs"]
mod tests;
