// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Regular-expression convenience layer: patterns with abort-on-invalid
//! construction, match and group extraction, and callback-driven
//! replacement, plus the `retext` command-line tool built on them.

pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod outline;
pub mod output;
pub mod pattern;
pub mod reader;
pub mod rules;
pub mod walker;

pub use cli::{Cli, Command, OutputFormat};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use pattern::{
    Match, MatchingOptions, Pattern, PatternError, RegexOptions, Replacer, Template,
};
pub use reader::{Input, InputReader};
pub use rules::{Rewrite, RuleSet};
pub use walker::{FileWalker, WalkerConfig};

#[cfg(test)]
pub mod test_utils;
