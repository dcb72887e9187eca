// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::{Error, Result};
use crate::pattern::{Pattern, RegexOptions};

/// Find, extract and rewrite text with regular expressions
#[derive(Parser)]
#[command(name = "retext")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "RETEXT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print every match with its line
    Find(FindArgs),
    /// Print the captured groups of every match
    Groups(FindArgs),
    /// Replace matches using a `{N}` template
    Replace(ReplaceArgs),
    /// Apply the rewrite rules from retext.toml
    Rewrite(RewriteArgs),
    /// List the navigation rows of a publication
    Outline(OutlineArgs),
}

/// Pattern text and compile flags shared by pattern commands.
#[derive(clap::Args)]
pub struct PatternArgs {
    /// Regular expression
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Match case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// `^` and `$` match at line boundaries
    #[arg(short = 'm', long)]
    pub multi_line: bool,

    /// `.` also matches newlines
    #[arg(short = 's', long)]
    pub dot_all: bool,

    /// Allow whitespace and comments in the pattern
    #[arg(short = 'x', long)]
    pub extended: bool,

    /// Treat the pattern as a literal string
    #[arg(short = 'F', long)]
    pub fixed_strings: bool,
}

impl PatternArgs {
    pub fn options(&self) -> RegexOptions {
        RegexOptions {
            case_insensitive: self.ignore_case,
            multi_line: self.multi_line,
            dot_matches_new_line: self.dot_all,
            ignore_whitespace: self.extended,
            ignore_metacharacters: self.fixed_strings,
            ..RegexOptions::default()
        }
    }

    /// Compile the pattern; command-line patterns are input, so this never aborts.
    pub fn compile(&self) -> Result<Pattern> {
        Pattern::compile(&self.pattern, self.options()).map_err(|source| Error::Pattern {
            pattern: self.pattern.clone(),
            source,
        })
    }
}

#[derive(clap::Args)]
pub struct FindArgs {
    #[command(flatten)]
    pub pattern: PatternArgs,

    /// Files or directories to search (stdin when omitted)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct ReplaceArgs {
    #[command(flatten)]
    pub pattern: PatternArgs,

    /// Replacement template (`{N}` inserts group N, `{{`/`}}` are braces)
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Files or directories to rewrite (stdin when omitted)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Only replace a contiguous run of matches from the start
    #[arg(long)]
    pub anchored: bool,

    /// Write results back to the files instead of stdout
    #[arg(long)]
    pub in_place: bool,
}

#[derive(clap::Args)]
pub struct RewriteArgs {
    /// Files or directories to rewrite (stdin when omitted)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Write results back to the files instead of stdout
    #[arg(long)]
    pub in_place: bool,

    /// Report substitution counts without writing anything
    #[arg(long, conflicts_with = "in_place")]
    pub dry_run: bool,

    /// Output format for --dry-run
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct OutlineArgs {
    /// Publication navigation document (JSON)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Section to list: toc, bookmarks, page-list or landmarks
    #[arg(long, default_value = "toc")]
    pub section: String,

    /// Select a row and print its navigation target instead of listing
    #[arg(long, value_name = "ROW")]
    pub select: Option<usize>,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
