// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Regular-expression convenience layer.
//!
//! Patterns are compiled once and reused. Literal patterns pick a faster
//! backend automatically:
//! - Single literal: memchr::memmem
//! - Multiple literals: aho-corasick
//! - Anything else: regex crate

pub mod captures;
pub mod matcher;
pub mod options;
pub mod replacer;
pub mod template;

pub use captures::{Match, utf16_range};
pub use matcher::{LineMatch, MatcherKind, Pattern, PatternError};
pub use options::{MatchingOptions, RegexOptions};
pub use replacer::{ReplaceFn, Replacer};
pub use template::Template;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
